use crate::features::auth::state::use_auth;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn RequireAuth(children: Children) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    Effect::new(move |_| {
        // UX-only guard; real access control must live on the API.
        if !auth.is_loading.get() && !auth.is_authenticated.get() {
            navigate("/sign-in", Default::default());
        }
    });

    view! { {children()} }
}

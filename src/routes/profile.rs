use crate::components::layout::RootLayout;
use crate::features::auth::state::use_auth;
use leptos::prelude::*;
use leptos_router::hooks::use_params;
use leptos_router::params::Params;

#[derive(Params, PartialEq, Clone)]
struct ProfileParams {
    id: Option<String>,
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
    let params = use_params::<ProfileParams>();
    let profile_id = move || {
        params
            .get()
            .ok()
            .and_then(|params| params.id)
            .unwrap_or_default()
    };

    // Until profiles load remote data, only the signed-in user's own page
    // has anything to show.
    let heading = move || {
        let id = profile_id();
        match auth.user.get() {
            Some(user) if user.id == id => format!("@{}", user.username),
            _ => "Profile".to_string(),
        }
    };

    view! {
        <RootLayout>
            <h1 class="text-2xl font-bold">{heading}</h1>
        </RootLayout>
    }
}

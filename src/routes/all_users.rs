use crate::components::layout::RootLayout;
use leptos::prelude::*;

#[component]
pub fn AllUsersPage() -> impl IntoView {
    view! {
        <RootLayout>
            <h1 class="text-2xl font-bold">"People"</h1>
        </RootLayout>
    }
}

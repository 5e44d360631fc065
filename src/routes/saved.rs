use crate::components::layout::RootLayout;
use leptos::prelude::*;

#[component]
pub fn SavedPage() -> impl IntoView {
    view! {
        <RootLayout>
            <h1 class="text-2xl font-bold">"Saved Posts"</h1>
        </RootLayout>
    }
}

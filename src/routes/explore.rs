use crate::components::layout::RootLayout;
use leptos::prelude::*;

#[component]
pub fn ExplorePage() -> impl IntoView {
    view! {
        <RootLayout>
            <h1 class="text-2xl font-bold">"Explore"</h1>
        </RootLayout>
    }
}

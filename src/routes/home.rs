//! Default landing page for signed-in users. Intentionally minimal while
//! the feed is built out; it exists so the sidebar has a real home route.

use crate::components::layout::RootLayout;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <RootLayout>
            <h1 class="text-2xl font-bold">"Home Feed"</h1>
        </RootLayout>
    }
}

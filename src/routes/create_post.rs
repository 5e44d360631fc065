use crate::components::layout::RootLayout;
use leptos::prelude::*;

#[component]
pub fn CreatePostPage() -> impl IntoView {
    view! {
        <RootLayout>
            <h1 class="text-2xl font-bold">"Create Post"</h1>
        </RootLayout>
    }
}

//! Minimalistic 404 page for unknown routes.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex min-h-[50vh] flex-col items-center justify-center px-4 text-center">
            <h1 class="text-4xl font-bold">"404"</h1>
            <p class="mt-2 text-gray-500">"This page does not exist."</p>
            <A
                href="/"
                {..}
                attr:class="mt-6 font-semibold text-violet-600 hover:underline"
            >
                "Back to the feed"
            </A>
        </div>
    }
}

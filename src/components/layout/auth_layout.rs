//! Centered column for the sign-in and sign-up forms. Users who already
//! hold a verified session are sent back to the feed instead.

use crate::app_lib::build_info;
use crate::features::auth::state::use_auth;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn AuthLayout(children: Children) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if !auth.is_loading.get() && auth.is_authenticated.get() {
            navigate("/", Default::default());
        }
    });

    view! {
        <div class="flex min-h-screen">
            <section class="flex flex-1 flex-col items-center justify-center px-6 py-10">
                <div class="flex w-full min-w-[290px] max-w-md flex-col items-center">
                    <img src="/assets/images/logo.svg" alt="logo" />
                    {children()}
                </div>
                <footer class="mt-8 text-[10px] uppercase tracking-tighter text-gray-400">
                    {format!("SnapShare {}", build_info::git_commit_hash())}
                </footer>
            </section>
            <img
                src="/assets/images/side-img.svg"
                alt="signup illustration"
                class="hidden h-screen w-1/2 bg-no-repeat object-cover xl:block"
            />
        </div>
    }
}

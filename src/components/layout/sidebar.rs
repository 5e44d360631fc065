//! Side navigation for authenticated users: brand, current profile, the nav
//! link table, and sign-out.
//!
//! Active-link detection is exact-match only; `/profile/7` must not light up
//! a `/profile` entry. Sign-out ends with a hard reload of the current route
//! rather than a soft re-render, which drops every piece of client-held
//! state along with the session.

use crate::app_lib::nav::{self, SIDEBAR_LINKS};
use crate::features::auth::{client, state::use_auth};
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = use_auth();

    let signout_action = Action::new_local(|_: &()| async move { client::sign_out().await });

    Effect::new(move |_| {
        if let Some(result) = signout_action.value().get() {
            if result.is_ok() {
                nav::hard_reload();
            }
        }
    });

    let profile_href = move || {
        auth.user.get().map_or_else(
            || "/sign-in".to_string(),
            |user| format!("/profile/{}", user.id),
        )
    };
    let avatar = move || {
        auth.user
            .get()
            .map(|user| user.image_url)
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| "/assets/icons/profile-placeholder.svg".to_string())
    };
    let display_name = move || auth.user.get().map(|user| user.name).unwrap_or_default();
    let handle = move || {
        auth.user
            .get()
            .map(|user| format!("@{}", user.username))
            .unwrap_or_default()
    };

    view! {
        <aside class="hidden min-h-screen w-64 flex-shrink-0 flex-col justify-between border-r border-gray-200 bg-white px-4 py-8 dark:border-gray-800 dark:bg-gray-900 md:flex">
            <div class="flex flex-col gap-10">
                <A href="/" {..} attr:class="flex items-center gap-3">
                    <img src="/assets/images/logo.svg" alt="logo" width="170" height="36" />
                </A>

                <A href=profile_href {..} attr:class="flex items-center gap-3">
                    <img src=avatar alt="profile" class="h-14 w-14 rounded-full" />
                    <div class="flex flex-col">
                        <p class="font-bold text-gray-900 dark:text-white">{display_name}</p>
                        <p class="text-sm text-gray-500 dark:text-gray-400">{handle}</p>
                    </div>
                </A>

                <ul class="flex flex-col gap-4">
                    {SIDEBAR_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <SidebarLink route=link.route label=link.label icon=link.icon />
                            }
                        })
                        .collect_view()}
                </ul>
            </div>

            <button
                type="button"
                class="flex items-center gap-4 rounded-lg p-4 text-sm font-medium text-gray-600 transition-colors hover:bg-gray-100 dark:text-gray-300 dark:hover:bg-gray-800"
                disabled=move || signout_action.pending().get()
                on:click=move |_| {
                    signout_action.dispatch(());
                }
            >
                <span class="material-symbols-outlined text-gray-400">"logout"</span>
                "Logout"
            </button>
        </aside>
    }
}

#[component]
fn SidebarLink(route: &'static str, label: &'static str, icon: &'static str) -> impl IntoView {
    let location = use_location();
    let active = Memo::new(move |_| nav::is_active(&location.pathname.get(), route));

    view! {
        <li
            class="rounded-lg transition-colors"
            class:bg-violet-600=move || active.get()
            class:hover:bg-gray-100=move || !active.get()
            class:dark:hover:bg-gray-800=move || !active.get()
        >
            <A
                href=move || route.to_string()
                {..}
                attr:class="group flex items-center gap-4 p-4 text-sm font-medium"
                class:text-white=move || active.get()
                class:text-gray-600=move || !active.get()
                class:dark:text-gray-300=move || !active.get()
            >
                <span
                    class="material-symbols-outlined transition-colors"
                    class:text-white=move || active.get()
                    class:text-gray-400=move || !active.get()
                >
                    {icon}
                </span>
                {label}
            </A>
        </li>
    }
}

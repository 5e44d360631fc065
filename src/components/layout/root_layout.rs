//! Shell for the signed-in part of the app: sidebar plus content region.
//! Routes wrap themselves with this instead of nesting router outlets.

use crate::components::layout::Sidebar;
use crate::features::auth::guards::RequireAuth;
use leptos::prelude::*;

#[component]
pub fn RootLayout(children: Children) -> impl IntoView {
    view! {
        <RequireAuth>
            <div class="flex min-h-screen w-full">
                <Sidebar />
                <main class="flex flex-1 flex-col px-6 py-8">{children()}</main>
            </div>
        </RequireAuth>
    }
}

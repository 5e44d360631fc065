mod all_users;
mod create_post;
mod explore;
mod home;
mod not_found;
mod profile;
mod saved;
mod sign_in;
mod sign_up;

pub(crate) use all_users::AllUsersPage;
pub(crate) use create_post::CreatePostPage;
pub(crate) use explore::ExplorePage;
pub(crate) use home::HomePage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use profile::ProfilePage;
pub(crate) use saved::SavedPage;
pub(crate) use sign_in::SignInPage;
pub(crate) use sign_up::SignUpPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/sign-in") view=SignInPage />
            <Route path=path!("/sign-up") view=SignUpPage />
            <Route path=path!("/explore") view=ExplorePage />
            <Route path=path!("/all-users") view=AllUsersPage />
            <Route path=path!("/saved") view=SavedPage />
            <Route path=path!("/create-post") view=CreatePostPage />
            <Route path=path!("/profile/:id") view=ProfilePage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}

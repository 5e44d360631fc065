//! Layout components shared across routes.

mod auth_layout;
mod root_layout;
mod sidebar;

pub(crate) use auth_layout::AuthLayout;
pub(crate) use root_layout::RootLayout;
pub(crate) use sidebar::Sidebar;

//! Shared UI components exported for routes and features.

pub(crate) mod layout;
pub(crate) mod ui;

pub(crate) use ui::{Button, FieldErrors, Spinner, ToastProvider, ToastVariant, use_toast};

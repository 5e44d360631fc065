mod button;
mod field_errors;
mod spinner;
mod toast;

pub(crate) use button::Button;
pub(crate) use field_errors::FieldErrors;
pub(crate) use spinner::Spinner;
pub(crate) use toast::{ToastProvider, ToastVariant, use_toast};

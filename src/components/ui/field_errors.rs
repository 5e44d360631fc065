//! Inline validation messages rendered under a form field. All failing
//! messages for the field are shown, matching the aggregate-don't-shortcut
//! behavior of the validation schemas.

use crate::app_lib::validation::{Field, FieldIssue, messages_for};
use leptos::prelude::*;

#[component]
pub fn FieldErrors(#[prop(into)] issues: Signal<Vec<FieldIssue>>, field: Field) -> impl IntoView {
    view! {
        {move || {
            messages_for(&issues.get(), field)
                .into_iter()
                .map(|message| {
                    view! { <p class="mt-1 text-sm text-red-500">{message}</p> }
                })
                .collect_view()
        }}
    }
}

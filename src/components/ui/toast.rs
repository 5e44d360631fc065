//! Toast notification sink. Workflows surface exactly one toast per failed
//! attempt, so the sink stays dumb: push a title with a variant, auto-dismiss
//! after a few seconds, allow click-to-dismiss. Provided as a Leptos context
//! the same way the auth state is.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// How long a toast stays on screen before it dismisses itself.
const AUTO_DISMISS_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub title: String,
    pub variant: ToastVariant,
}

#[derive(Clone, Copy)]
/// Handle for pushing notifications from anywhere under the provider.
pub struct ToastContext {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u32>,
}

impl ToastContext {
    fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Shows one notification and schedules its removal.
    pub fn notify(&self, title: impl Into<String>, variant: ToastVariant) {
        let mut id = 0;
        self.next_id.update(|next| {
            *next += 1;
            id = *next;
        });
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                title: title.into(),
                variant,
            });
        });

        let toasts = self.toasts;
        Timeout::new(AUTO_DISMISS_MS, move || {
            toasts.update(|list| list.retain(|toast| toast.id != id));
        })
        .forget();
    }

    pub fn dismiss(&self, id: u32) {
        self.toasts.update(|list| list.retain(|toast| toast.id != id));
    }
}

/// Provides the toast context and renders the overlay after the app content
/// so notifications stack above every route.
#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    let context = ToastContext::new();
    provide_context(context);

    view! {
        {children()}
        <Toaster />
    }
}

/// Returns the current toast context or a detached fallback.
pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>().unwrap_or_else(ToastContext::new)
}

#[component]
fn Toaster() -> impl IntoView {
    let context = use_toast();

    view! {
        <div class="fixed bottom-4 right-4 z-50 flex w-80 flex-col gap-2">
            <For each=move || context.toasts.get() key=|toast| toast.id let:toast>
                <ToastCard toast=toast.clone() />
            </For>
        </div>
    }
}

#[component]
fn ToastCard(toast: Toast) -> impl IntoView {
    let context = use_toast();
    let class = match toast.variant {
        ToastVariant::Default => {
            "cursor-pointer rounded-lg border border-gray-200 bg-white px-4 py-3 text-sm text-gray-900 shadow-lg dark:border-gray-700 dark:bg-gray-800 dark:text-gray-100"
        }
        ToastVariant::Destructive => {
            "cursor-pointer rounded-lg border border-red-300 bg-red-600 px-4 py-3 text-sm text-white shadow-lg"
        }
    };
    let id = toast.id;

    view! {
        <div class=class role="alert" on:click=move |_| context.dismiss(id)>
            {toast.title}
        </div>
    }
}

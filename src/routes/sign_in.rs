//! Signin route. Validation is looser than signup on purpose (length-only
//! password rule); the submission workflow opens a session and verifies it.
//! Rejected credentials get their own message, everything else the generic
//! login failure, one toast per attempt either way.

use crate::app_lib::validation::{Field, FieldIssue, validate_signin};
use crate::components::layout::AuthLayout;
use crate::components::{Button, FieldErrors, Spinner, ToastVariant, use_toast};
use crate::features::auth::client::ApiBackend;
use crate::features::auth::state::use_auth;
use crate::features::auth::types::SigninInput;
use crate::features::auth::workflow;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = use_auth();
    let toast = use_toast();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (issues, set_issues) = signal::<Vec<FieldIssue>>(Vec::new());

    let signin_action = Action::new_local(move |input: &SigninInput| {
        let input = input.clone();
        async move { workflow::run_signin(&ApiBackend { auth }, &input.email, &input.password).await }
    });

    Effect::new(move |_| {
        if let Some(result) = signin_action.value().get() {
            match result {
                Ok(()) => {
                    set_email.set(String::new());
                    set_password.set(String::new());
                    navigate("/", Default::default());
                }
                Err(failure) => {
                    leptos::logging::error!("sign in attempt failed: {failure:?}");
                    toast.notify(failure.signin_message(), ToastVariant::Destructive);
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();

        let input = SigninInput {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };

        let found = validate_signin(&input);
        if !found.is_empty() {
            set_issues.set(found);
            return;
        }
        set_issues.set(Vec::new());

        signin_action.dispatch(input);
    };

    view! {
        <AuthLayout>
            <h2 class="pt-5 text-2xl font-bold sm:pt-12">"Welcome back"</h2>
            <p class="mt-2 text-sm text-gray-500">
                "To use SnapShare, please enter your details"
            </p>
            <form class="mt-4 flex w-full flex-col gap-5" on:submit=on_submit>
                <div>
                    <label class="mb-2 block text-sm font-medium" for="email">
                        "Email"
                    </label>
                    <input
                        id="email"
                        type="email"
                        class="block w-full rounded-lg border border-gray-300 bg-gray-50 p-2.5 text-sm text-gray-900 focus:border-violet-500 focus:ring-violet-500 dark:border-gray-600 dark:bg-gray-700 dark:text-white"
                        autocomplete="email"
                        inputmode="email"
                        placeholder="name@inbox.im"
                        prop:value=move || email.get()
                        on:input=move |event| set_email.set(event_target_value(&event))
                    />
                    <FieldErrors issues=issues field=Field::Email />
                </div>
                <div>
                    <label class="mb-2 block text-sm font-medium" for="password">
                        "Password"
                    </label>
                    <input
                        id="password"
                        type="password"
                        class="block w-full rounded-lg border border-gray-300 bg-gray-50 p-2.5 text-sm text-gray-900 focus:border-violet-500 focus:ring-violet-500 dark:border-gray-600 dark:bg-gray-700 dark:text-white"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                    <FieldErrors issues=issues field=Field::Password />
                </div>

                <Button button_type="submit" disabled=signin_action.pending()>
                    {move || {
                        if signin_action.pending().get() {
                            view! { <Spinner /> }.into_any()
                        } else {
                            view! { "Sign In" }.into_any()
                        }
                    }}
                </Button>

                <p class="mt-2 text-center text-sm text-gray-500">
                    "Don't have an account?"
                    <A
                        href="/sign-up"
                        {..}
                        attr:class="ml-1 font-semibold text-violet-600 hover:underline"
                    >
                        "Sign up"
                    </A>
                </p>
            </form>
        </AuthLayout>
    }
}

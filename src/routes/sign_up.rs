//! Signup route. Field values run through the declarative signup schema
//! before anything is dispatched; the submission itself is the three-step
//! workflow (create account, open session, verify). One destructive toast
//! per failed attempt, form reset and navigation to the feed on success.

use crate::app_lib::validation::{Field, FieldIssue, validate_signup};
use crate::components::layout::AuthLayout;
use crate::components::{Button, FieldErrors, Spinner, ToastVariant, use_toast};
use crate::features::auth::client::ApiBackend;
use crate::features::auth::state::use_auth;
use crate::features::auth::types::SignupInput;
use crate::features::auth::workflow;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[component]
pub fn SignUpPage() -> impl IntoView {
    let auth = use_auth();
    let toast = use_toast();
    let navigate = use_navigate();
    let (name, set_name) = signal(String::new());
    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (issues, set_issues) = signal::<Vec<FieldIssue>>(Vec::new());

    let signup_action = Action::new_local(move |input: &SignupInput| {
        let input = input.clone();
        async move { workflow::run_signup(&ApiBackend { auth }, &input).await }
    });

    Effect::new(move |_| {
        if let Some(result) = signup_action.value().get() {
            match result {
                Ok(()) => {
                    set_name.set(String::new());
                    set_username.set(String::new());
                    set_email.set(String::new());
                    set_password.set(String::new());
                    navigate("/", Default::default());
                }
                Err(failure) => {
                    leptos::logging::error!("sign up attempt failed: {failure:?}");
                    toast.notify(failure.signup_message(), ToastVariant::Destructive);
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();

        let input = SignupInput {
            name: name.get_untracked().trim().to_string(),
            username: username.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };

        let found = validate_signup(&input);
        if !found.is_empty() {
            set_issues.set(found);
            return;
        }
        set_issues.set(Vec::new());

        signup_action.dispatch(input);
    };

    view! {
        <AuthLayout>
            <h2 class="pt-5 text-2xl font-bold sm:pt-12">"Create a new account"</h2>
            <p class="mt-2 text-sm text-gray-500">
                "To use SnapShare, please enter your details"
            </p>
            <form class="mt-4 flex w-full flex-col gap-5" on:submit=on_submit>
                <div>
                    <label class="mb-2 block text-sm font-medium" for="name">
                        "Name"
                    </label>
                    <input
                        id="name"
                        type="text"
                        class="block w-full rounded-lg border border-gray-300 bg-gray-50 p-2.5 text-sm text-gray-900 focus:border-violet-500 focus:ring-violet-500 dark:border-gray-600 dark:bg-gray-700 dark:text-white"
                        autocomplete="name"
                        prop:value=move || name.get()
                        on:input=move |event| set_name.set(event_target_value(&event))
                    />
                    <FieldErrors issues=issues field=Field::Name />
                </div>
                <div>
                    <label class="mb-2 block text-sm font-medium" for="username">
                        "Username"
                    </label>
                    <input
                        id="username"
                        type="text"
                        class="block w-full rounded-lg border border-gray-300 bg-gray-50 p-2.5 text-sm text-gray-900 focus:border-violet-500 focus:ring-violet-500 dark:border-gray-600 dark:bg-gray-700 dark:text-white"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |event| set_username.set(event_target_value(&event))
                    />
                    <FieldErrors issues=issues field=Field::Username />
                </div>
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
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                    <FieldErrors issues=issues field=Field::Password />
                </div>

                <Button button_type="submit" disabled=signup_action.pending()>
                    {move || {
                        if signup_action.pending().get() {
                            view! { <Spinner /> }.into_any()
                        } else {
                            view! { "Sign Up" }.into_any()
                        }
                    }}
                </Button>

                <p class="mt-2 text-center text-sm text-gray-500">
                    "Already have an account?"
                    <A
                        href="/sign-in"
                        {..}
                        attr:class="ml-1 font-semibold text-violet-600 hover:underline"
                    >
                        "Sign in"
                    </A>
                </p>
            </form>
        </AuthLayout>
    }
}

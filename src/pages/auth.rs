//! Login and registration page.
//!
//! Both forms validate inline (field errors render next to the inputs,
//! never as toasts) and the signup form shows a live password
//! requirement checklist. A successful response stores the session
//! record and redirects to the dashboard.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::loading_button::LoadingButton;
use crate::net::api;
use crate::state::session::SessionState;
use crate::state::toasts::{ToastKind, ToastsState};
use crate::util::validate::{PasswordChecklist, Rules, validate_field};

/// Which form is on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthMode {
    Login,
    Signup,
}

/// Auth page with a login/signup toggle.
#[component]
pub fn AuthPage() -> impl IntoView {
    let mode = RwSignal::new(AuthMode::Login);

    view! {
        <div class="auth-page">
            <h1 class="auth-page__brand">"EcoFinds"</h1>
            <p class="auth-page__tagline">"Buy and sell pre-loved goods"</p>

            <Show
                when=move || mode.get() == AuthMode::Login
                fallback=move || view! { <SignupForm mode=mode/> }
            >
                <LoginForm mode=mode/>
            </Show>
        </div>
    }
}

#[component]
fn LoginForm(mode: RwSignal<AuthMode>) -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastsState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email_error = RwSignal::new(String::new());
    let password_error = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let validate = move || {
        let email_check = validate_field("Email", &email.get(), &Rules::new().required());
        email_error.set(email_check.error_message.clone());
        let password_check =
            validate_field("Password", &password.get(), &Rules::new().required());
        password_error.set(password_check.error_message.clone());
        email_check.is_valid && password_check.is_valid
    };

    let submit = Callback::new(move |()| {
        if submitting.get() || !validate() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            submitting.set(true);
            leptos::task::spawn_local(async move {
                let result = api::login(email.get_untracked().trim(), &password.get_untracked()).await;
                match result {
                    Ok(user) => {
                        crate::state::session::store(session_state, user);
                        crate::state::toasts::show_message(
                            toasts,
                            "Login successful! Redirecting...",
                            ToastKind::Success,
                        );
                        crate::util::delay::sleep_ms(1500).await;
                        navigate("/dashboard", NavigateOptions::default());
                    }
                    Err(err) => {
                        crate::state::toasts::show_message(toasts, err.message().to_owned(), ToastKind::Error);
                    }
                }
                submitting.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session_state, toasts);
        }
    });

    view! {
        <form
            class="auth-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                submit.run(());
            }
        >
            <h2>"Login"</h2>

            <label class="form-field">
                "Email"
                <input
                    class="form-input"
                    class:error=move || !email_error.get().is_empty()
                    type="text"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                    on:blur=move |_| {
                        let check = validate_field("Email", &email.get(), &Rules::new().required());
                        email_error.set(check.error_message);
                    }
                />
                <FieldError error=email_error/>
            </label>

            <label class="form-field">
                "Password"
                <input
                    class="form-input"
                    class:error=move || !password_error.get().is_empty()
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                    on:blur=move |_| {
                        let check = validate_field(
                            "Password",
                            &password.get(),
                            &Rules::new().required(),
                        );
                        password_error.set(check.error_message);
                    }
                />
                <FieldError error=password_error/>
            </label>

            <LoadingButton label="Login" loading=submitting on_press=submit/>

            <p class="auth-form__switch">
                "New here? "
                <button
                    type="button"
                    class="auth-form__link"
                    on:click=move |_| mode.set(AuthMode::Signup)
                >
                    "Create an account"
                </button>
            </p>
        </form>
    }
}

#[component]
fn SignupForm(mode: RwSignal<AuthMode>) -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastsState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let display_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let profile_image = RwSignal::new(None::<String>);

    let name_error = RwSignal::new(String::new());
    let email_error = RwSignal::new(String::new());
    let password_error = RwSignal::new(String::new());
    let confirm_error = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let checklist = Memo::new(move |_| PasswordChecklist::check(&password.get()));

    let validate = move || {
        let name_check = validate_field(
            "Display Name",
            &display_name.get(),
            &Rules::new().required().min_length(3),
        );
        name_error.set(name_check.error_message.clone());

        let email_check = validate_field("Email", &email.get(), &Rules::new().required().email());
        email_error.set(email_check.error_message.clone());

        let password_value = password.get();
        let password_ok = if password_value.is_empty() {
            password_error.set("Password is required".to_owned());
            false
        } else if let Some(failure) = PasswordChecklist::check(&password_value).first_failure() {
            password_error.set(failure.to_owned());
            false
        } else {
            password_error.set(String::new());
            true
        };

        let confirm_value = confirm_password.get();
        let confirm_ok = if confirm_value.is_empty() {
            confirm_error.set("Please confirm your password".to_owned());
            false
        } else if confirm_value != password_value {
            confirm_error.set("Passwords do not match".to_owned());
            false
        } else {
            confirm_error.set(String::new());
            true
        };

        name_check.is_valid && email_check.is_valid && password_ok && confirm_ok
    };

    let on_image = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            if let Err(message) = crate::util::image::validate_image_file(
                &file.type_(),
                file.size() as u64,
                crate::util::image::MAX_IMAGE_MB,
            ) {
                crate::state::toasts::show_message(toasts, message, ToastKind::Error);
                return;
            }
            leptos::task::spawn_local(async move {
                match crate::util::image::read_as_data_url(file).await {
                    Ok(data_url) => profile_image.set(Some(data_url)),
                    Err(_) => {
                        crate::state::toasts::show_message(toasts, "Error processing image", ToastKind::Error);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let submit = Callback::new(move |()| {
        if submitting.get() || !validate() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            submitting.set(true);
            leptos::task::spawn_local(async move {
                let result = api::register(
                    display_name.get_untracked().trim(),
                    email.get_untracked().trim(),
                    &password.get_untracked(),
                    profile_image.get_untracked().as_deref(),
                )
                .await;
                match result {
                    Ok(user) => {
                        crate::state::session::store(session_state, user);
                        crate::state::toasts::show_message(
                            toasts,
                            "Account created! Redirecting...",
                            ToastKind::Success,
                        );
                        crate::util::delay::sleep_ms(1500).await;
                        navigate("/dashboard", NavigateOptions::default());
                    }
                    Err(err) => {
                        crate::state::toasts::show_message(toasts, err.message().to_owned(), ToastKind::Error);
                    }
                }
                submitting.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session_state, toasts, profile_image);
        }
    });

    view! {
        <form
            class="auth-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                submit.run(());
            }
        >
            <h2>"Sign Up"</h2>

            <label class="form-field">
                "Display Name"
                <input
                    class="form-input"
                    class:error=move || !name_error.get().is_empty()
                    type="text"
                    prop:value=move || display_name.get()
                    on:input=move |ev| display_name.set(event_target_value(&ev))
                    on:blur=move |_| {
                        let check = validate_field(
                            "Display Name",
                            &display_name.get(),
                            &Rules::new().required().min_length(3),
                        );
                        name_error.set(check.error_message);
                    }
                />
                <FieldError error=name_error/>
            </label>

            <label class="form-field">
                "Email"
                <input
                    class="form-input"
                    class:error=move || !email_error.get().is_empty()
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                    on:blur=move |_| {
                        let check = validate_field(
                            "Email",
                            &email.get(),
                            &Rules::new().required().email(),
                        );
                        email_error.set(check.error_message);
                    }
                />
                <FieldError error=email_error/>
            </label>

            <label class="form-field">
                "Password"
                <input
                    class="form-input"
                    class:error=move || !password_error.get().is_empty()
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <FieldError error=password_error/>
            </label>

            <ul class="password-requirements">
                <Requirement met=Signal::derive(move || checklist.get().length) text="At least 8 characters"/>
                <Requirement met=Signal::derive(move || checklist.get().uppercase) text="One uppercase letter"/>
                <Requirement met=Signal::derive(move || checklist.get().lowercase) text="One lowercase letter"/>
                <Requirement met=Signal::derive(move || checklist.get().digit) text="One number"/>
                <Requirement met=Signal::derive(move || checklist.get().symbol) text="One special character"/>
            </ul>

            <label class="form-field">
                "Confirm Password"
                <input
                    class="form-input"
                    class:error=move || !confirm_error.get().is_empty()
                    type="password"
                    prop:value=move || confirm_password.get()
                    on:input=move |ev| confirm_password.set(event_target_value(&ev))
                />
                <FieldError error=confirm_error/>
            </label>

            <label class="form-field">
                "Profile Image (optional)"
                <input class="form-input" type="file" accept="image/*" on:change=on_image/>
            </label>

            <LoadingButton label="Sign Up" loading=submitting on_press=submit/>

            <p class="auth-form__switch">
                "Already have an account? "
                <button
                    type="button"
                    class="auth-form__link"
                    on:click=move |_| mode.set(AuthMode::Login)
                >
                    "Login"
                </button>
            </p>
        </form>
    }
}

/// Inline error span rendered under a field when its message is set.
#[component]
fn FieldError(error: RwSignal<String>) -> impl IntoView {
    view! {
        <Show when=move || !error.get().is_empty()>
            <span class="error-message show">{move || error.get()}</span>
        </Show>
    }
}

/// One line of the live password checklist.
#[component]
fn Requirement(#[prop(into)] met: Signal<bool>, text: &'static str) -> impl IntoView {
    view! {
        <li class="password-requirements__item" class:valid=move || met.get()>
            {text}
        </li>
    }
}

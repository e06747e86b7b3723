//! User dashboard: profile details and edits.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::loading_button::LoadingButton;
use crate::components::nav_bar::NavBar;
use crate::net::api::{self, ApiError};
use crate::net::types::UserInfo;
use crate::state::session::{self, SessionState};
use crate::state::toasts::{self, ToastKind, ToastsState};
use crate::util::validate::{Rules, validate_field};

/// How long to wait for the profile endpoint before giving up.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
const PROFILE_TIMEOUT_MS: u32 = 10_000;

/// Fetch the profile, bailing out if the server takes too long.
async fn fetch_profile_with_timeout(user_id: i64) -> Result<UserInfo, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use futures::future::{Either, select};

        let fetch = Box::pin(api::fetch_profile(user_id));
        let timeout = Box::pin(crate::util::delay::sleep_ms(PROFILE_TIMEOUT_MS));
        match select(fetch, timeout).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(ApiError::Network(
                "Profile request timed out".to_owned(),
            )),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        api::fetch_profile(user_id).await
    }
}

/// Profile dashboard for the signed-in user.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastsState>>();
    let navigate = use_navigate();

    let user_id = RwSignal::new(None::<i64>);

    Effect::new(move || {
        let user = session::refresh(session_state);
        let id = user.as_ref().and_then(|u| u.id).filter(|id| *id != 0);
        if id.is_none() {
            toasts::show_message(
                toasts,
                "Please login to view your dashboard",
                ToastKind::Warning,
            );
            navigate("/auth", NavigateOptions::default());
            return;
        }
        user_id.set(id);
    });

    let profile = LocalResource::new(move || {
        let id = user_id.get();
        async move {
            match id {
                Some(id) => fetch_profile_with_timeout(id).await.map(Some),
                None => Ok(None),
            }
        }
    });

    view! {
        <div class="dashboard-page">
            <NavBar/>
            <h1>"Dashboard"</h1>

            <Suspense fallback=move || view! { <p class="dashboard-page__loading">"Loading profile..."</p> }>
                {move || {
                    profile
                        .get()
                        .map(|result| match result {
                            Ok(Some(user)) => view! { <ProfileForm user=user/> }.into_any(),
                            Ok(None) => view! { <p class="dashboard-page__loading">"Loading profile..."</p> }.into_any(),
                            Err(err) => {
                                view! {
                                    <p class="dashboard-page__error">{err.message().to_owned()}</p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

/// Editable profile details; saving also refreshes the stored session.
#[component]
fn ProfileForm(user: UserInfo) -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastsState>>();

    let user_id = user.id.unwrap_or(0);
    let display_name = RwSignal::new(user.display_name.clone().unwrap_or_default());
    let email = RwSignal::new(user.email.clone().unwrap_or_default());
    let profile_image = RwSignal::new(user.profile_image_url.clone());

    let name_error = RwSignal::new(String::new());
    let email_error = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    let validate = move || {
        let name_check = validate_field(
            "Display Name",
            &display_name.get(),
            &Rules::new().required().min_length(3),
        );
        name_error.set(name_check.error_message.clone());

        let email_check = validate_field("Email", &email.get(), &Rules::new().required().email());
        email_error.set(email_check.error_message.clone());

        name_check.is_valid && email_check.is_valid
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
                toasts::show_message(toasts, message, ToastKind::Error);
                return;
            }
            leptos::task::spawn_local(async move {
                match crate::util::image::read_as_data_url(file).await {
                    Ok(data_url) => profile_image.set(Some(data_url)),
                    Err(_) => {
                        toasts::show_message(toasts, "Error processing image", ToastKind::Error);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let save = Callback::new(move |()| {
        if saving.get() || !validate() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            saving.set(true);
            leptos::task::spawn_local(async move {
                let result = api::update_profile(
                    user_id,
                    display_name.get_untracked().trim(),
                    email.get_untracked().trim(),
                    profile_image.get_untracked().as_deref(),
                )
                .await;
                match result {
                    Ok(updated) => {
                        toasts::show_message(
                            toasts,
                            "Profile updated successfully",
                            ToastKind::Success,
                        );
                        // Keep the stored session in step with the new details.
                        let record = updated.unwrap_or_else(|| UserInfo {
                            id: Some(user_id),
                            display_name: Some(display_name.get_untracked().trim().to_owned()),
                            email: Some(email.get_untracked().trim().to_owned()),
                            profile_image_url: profile_image.get_untracked(),
                        });
                        session::store(session_state, record);
                    }
                    Err(err) => {
                        toasts::show_message(toasts, err.message().to_owned(), ToastKind::Error);
                    }
                }
                saving.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user_id, session_state, toasts);
        }
    });

    view! {
        <form
            class="profile-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                save.run(());
            }
        >
            {move || {
                profile_image
                    .get()
                    .map(|url| view! { <img class="profile-form__avatar" src=url alt="Profile"/> })
            }}

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
                <Show when=move || !name_error.get().is_empty()>
                    <span class="error-message show">{move || name_error.get()}</span>
                </Show>
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
                <Show when=move || !email_error.get().is_empty()>
                    <span class="error-message show">{move || email_error.get()}</span>
                </Show>
            </label>

            <label class="form-field">
                "Profile Image"
                <input class="form-input" type="file" accept="image/*" on:change=on_image/>
            </label>

            <LoadingButton label="Save Changes" loading=saving on_press=save/>
        </form>
    }
}

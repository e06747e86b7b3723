//! New listing form: product details, validation, image upload.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::loading_button::LoadingButton;
use crate::components::nav_bar::NavBar;
use crate::net::api;
use crate::net::types::ProductForm;
use crate::state::session::{self, SessionState};
use crate::state::toasts::{self, ToastKind, ToastsState};
use crate::util::validate::{Rules, validate_field};

fn quantity_rules() -> Rules {
    Rules::new().required().custom(|value| {
        match value.parse::<i32>() {
            Ok(n) if n > 0 => Ok(()),
            _ => Err("Quantity must be a whole number of at least 1".to_owned()),
        }
    })
}

/// Form for listing a new product. Title, category, price, and quantity
/// are mandatory; everything else is optional detail.
#[component]
pub fn NewListingPage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastsState>>();
    let navigate = use_navigate();
    #[cfg(feature = "hydrate")]
    let submit_navigate = use_navigate();

    let user_id = RwSignal::new(None::<i64>);

    {
        let navigate = navigate.clone();
        Effect::new(move || {
            let user = session::refresh(session_state);
            let id = user.as_ref().and_then(|u| u.id).filter(|id| *id != 0);
            if id.is_none() {
                toasts::show_message(
                    toasts,
                    "Please login to list a product",
                    ToastKind::Warning,
                );
                navigate("/auth", NavigateOptions::default());
                return;
            }
            user_id.set(id);
        });
    }

    let categories = LocalResource::new(|| api::fetch_categories());
    let conditions = LocalResource::new(|| api::fetch_conditions());

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let quantity = RwSignal::new("1".to_owned());
    let condition = RwSignal::new(String::new());
    let brand = RwSignal::new(String::new());
    let model = RwSignal::new(String::new());
    let year = RwSignal::new(String::new());
    let image = RwSignal::new(None::<String>);

    let title_error = RwSignal::new(String::new());
    let category_error = RwSignal::new(String::new());
    let price_error = RwSignal::new(String::new());
    let quantity_error = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let validate = move || {
        let title_check = validate_field(
            "Title",
            &title.get(),
            &Rules::new().required().max_length(100),
        );
        title_error.set(title_check.error_message.clone());

        let category_check =
            validate_field("Category", &category.get(), &Rules::new().required());
        category_error.set(category_check.error_message.clone());

        let price_check =
            validate_field("Price", &price.get(), &Rules::new().required().price());
        price_error.set(price_check.error_message.clone());

        let quantity_check = validate_field("Quantity", &quantity.get(), &quantity_rules());
        quantity_error.set(quantity_check.error_message.clone());

        title_check.is_valid
            && category_check.is_valid
            && price_check.is_valid
            && quantity_check.is_valid
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
                    Ok(data_url) => image.set(Some(data_url)),
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

    let submit = Callback::new(move |()| {
        if submitting.get() || !validate() {
            return;
        }
        let Some(uid) = user_id.get_untracked() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let navigate = submit_navigate.clone();
            let non_empty =
                |s: RwSignal<String>| Some(s.get_untracked().trim().to_owned()).filter(|v| !v.is_empty());
            let form = ProductForm {
                title: title.get_untracked().trim().to_owned(),
                description: non_empty(description),
                category: category.get_untracked(),
                price: price.get_untracked().trim().parse().unwrap_or(0.0),
                quantity: quantity.get_untracked().trim().parse().unwrap_or(1),
                condition_type: non_empty(condition),
                brand: non_empty(brand),
                model: non_empty(model),
                year_manufactured: year.get_untracked().trim().parse().ok(),
                image_url: image.get_untracked(),
            };
            submitting.set(true);
            leptos::task::spawn_local(async move {
                match api::create_product(uid, &form).await {
                    Ok(()) => {
                        toasts::show_message(
                            toasts,
                            "Product listed successfully!",
                            ToastKind::Success,
                        );
                        crate::util::delay::sleep_ms(1500).await;
                        navigate("/my-listings", NavigateOptions::default());
                    }
                    Err(err) => {
                        toasts::show_message(toasts, err.message().to_owned(), ToastKind::Error);
                    }
                }
                submitting.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (uid, image);
        }
    });

    view! {
        <div class="new-listing-page">
            <NavBar/>
            <h1>"List a Product"</h1>

            <form
                class="listing-form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit.run(());
                }
            >
                <label class="form-field">
                    "Title"
                    <input
                        class="form-input"
                        class:error=move || !title_error.get().is_empty()
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                        on:blur=move |_| {
                            let check = validate_field(
                                "Title",
                                &title.get(),
                                &Rules::new().required().max_length(100),
                            );
                            title_error.set(check.error_message);
                        }
                    />
                    <FormError error=title_error/>
                </label>

                <label class="form-field">
                    "Description"
                    <textarea
                        class="form-input"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>

                <label class="form-field">
                    "Category"
                    <select
                        class="form-input"
                        class:error=move || !category_error.get().is_empty()
                        on:change=move |ev| category.set(event_target_value(&ev))
                    >
                        <option value="">"Select a category"</option>
                        <Suspense fallback=|| ()>
                            {move || {
                                categories
                                    .get()
                                    .map(|result| {
                                        result
                                            .unwrap_or_default()
                                            .into_iter()
                                            .map(|name| {
                                                let label = name.clone();
                                                view! {
                                                    <option value=name>{label}</option>
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                    })
                            }}
                        </Suspense>
                    </select>
                    <FormError error=category_error/>
                </label>

                <div class="listing-form__row">
                    <label class="form-field">
                        "Price"
                        <input
                            class="form-input"
                            class:error=move || !price_error.get().is_empty()
                            type="text"
                            inputmode="decimal"
                            prop:value=move || price.get()
                            on:input=move |ev| price.set(event_target_value(&ev))
                            on:blur=move |_| {
                                let check = validate_field(
                                    "Price",
                                    &price.get(),
                                    &Rules::new().required().price(),
                                );
                                price_error.set(check.error_message);
                            }
                        />
                        <FormError error=price_error/>
                    </label>

                    <label class="form-field">
                        "Quantity"
                        <input
                            class="form-input"
                            class:error=move || !quantity_error.get().is_empty()
                            type="number"
                            min="1"
                            prop:value=move || quantity.get()
                            on:input=move |ev| quantity.set(event_target_value(&ev))
                            on:blur=move |_| {
                                let check = validate_field(
                                    "Quantity",
                                    &quantity.get(),
                                    &quantity_rules(),
                                );
                                quantity_error.set(check.error_message);
                            }
                        />
                        <FormError error=quantity_error/>
                    </label>
                </div>

                <label class="form-field">
                    "Condition"
                    <select
                        class="form-input"
                        on:change=move |ev| condition.set(event_target_value(&ev))
                    >
                        <option value="">"Select condition"</option>
                        <Suspense fallback=|| ()>
                            {move || {
                                conditions
                                    .get()
                                    .map(|result| {
                                        result
                                            .unwrap_or_default()
                                            .into_iter()
                                            .map(|name| {
                                                let label = name.clone();
                                                view! {
                                                    <option value=name>{label}</option>
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                    })
                            }}
                        </Suspense>
                    </select>
                </label>

                <div class="listing-form__row">
                    <label class="form-field">
                        "Brand"
                        <input
                            class="form-input"
                            type="text"
                            prop:value=move || brand.get()
                            on:input=move |ev| brand.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="form-field">
                        "Model"
                        <input
                            class="form-input"
                            type="text"
                            prop:value=move || model.get()
                            on:input=move |ev| model.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="form-field">
                        "Year"
                        <input
                            class="form-input"
                            type="number"
                            prop:value=move || year.get()
                            on:input=move |ev| year.set(event_target_value(&ev))
                        />
                    </label>
                </div>

                <label class="form-field">
                    "Product Image (optional, up to 5MB)"
                    <input class="form-input" type="file" accept="image/*" on:change=on_image/>
                </label>

                <LoadingButton label="List Product" loading=submitting on_press=submit/>
            </form>
        </div>
    }
}

#[component]
fn FormError(error: RwSignal<String>) -> impl IntoView {
    view! {
        <Show when=move || !error.get().is_empty()>
            <span class="error-message show">{move || error.get()}</span>
        </Show>
    }
}

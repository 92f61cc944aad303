//! Demo request form
//!
//! Validates input locally, then posts it to `/api/schedule-demo`. Failures
//! show the server's error message (or a generic one) and re-enable the
//! submit button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::{DemoRequest, DemoResponse};
use crate::ui::icon::{Icon, icons};

const GENERIC_ERROR: &str = "Something went wrong. Please try again.";

/// Feedback shown under the form; one at a time
#[derive(Debug, Clone, PartialEq, Eq)]
enum FormNotice {
    Error(String),
    Success(String),
}

/// Trim and validate before sending, turning failures into a notice
fn prepare_submission(request: &DemoRequest) -> Result<DemoRequest, FormNotice> {
    request
        .normalized()
        .map_err(|e| FormNotice::Error(e.to_string()))
}

/// Demo scheduling form shown in the hero section
#[component]
pub fn DemoRequestForm() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let submitting = RwSignal::new(false);
    let notice = RwSignal::new(None::<FormNotice>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if submitting.get_untracked() {
            return;
        }

        let request = DemoRequest {
            name: name.get_untracked(),
            email: email.get_untracked(),
            company: company.get_untracked(),
            phone: phone.get_untracked(),
            message: message.get_untracked(),
        };

        let request = match prepare_submission(&request) {
            Ok(request) => request,
            Err(failure) => {
                notice.set(Some(failure));
                return;
            }
        };

        submitting.set(true);
        notice.set(None);

        spawn_local(async move {
            match submit_demo_request(&request).await {
                Ok(response) => {
                    notice.set(Some(FormNotice::Success(response.message)));
                    for field in [name, email, company, phone, message] {
                        field.set(String::new());
                    }
                }
                Err(e) => notice.set(Some(FormNotice::Error(e))),
            }
            submitting.set(false);
        });
    };

    let input_class = "w-full px-4 py-2.5 rounded-lg border border-theme bg-theme-primary text-theme-primary \
                       focus:outline-none focus:ring-2 focus:ring-accent-primary/50";

    view! {
        <form
            class="w-full max-w-md mx-auto p-6 rounded-2xl border border-theme bg-theme-primary/90 shadow-xl space-y-4 text-left"
            on:submit=on_submit
            novalidate=true
        >
            <h2 class="text-xl font-semibold text-theme-primary">"Book a free demo"</h2>

            <input
                class=input_class
                type="text"
                placeholder="Your name"
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            <input
                class=input_class
                type="email"
                placeholder="Work email"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <input
                class=input_class
                type="text"
                placeholder="Business name"
                prop:value=move || company.get()
                on:input=move |ev| company.set(event_target_value(&ev))
            />
            <input
                class=input_class
                type="tel"
                placeholder="Phone (optional)"
                prop:value=move || phone.get()
                on:input=move |ev| phone.set(event_target_value(&ev))
            />
            <textarea
                class=input_class
                rows="3"
                placeholder="Tell us about your business (optional)"
                prop:value=move || message.get()
                on:input=move |ev| message.set(event_target_value(&ev))
            ></textarea>

            {move || notice.get().map(|n| match n {
                FormNotice::Error(e) => view! {
                    <div class="flex items-center gap-2 text-sm text-red-600">
                        <Icon name=icons::ALERT_CIRCLE class="w-4 h-4" />
                        <span>{e}</span>
                    </div>
                }
                .into_any(),
                FormNotice::Success(m) => view! {
                    <div class="flex items-center gap-2 text-sm text-green-600">
                        <Icon name=icons::CHECK class="w-4 h-4" />
                        <span>{m}</span>
                    </div>
                }
                .into_any(),
            })}

            <button
                type="submit"
                class="landing-btn-primary w-full flex items-center justify-center gap-2"
                disabled=move || submitting.get()
            >
                {move || if submitting.get() {
                    view! {
                        <Icon name=icons::LOADER class="w-4 h-4 animate-spin" />
                        <span>"Sending..."</span>
                    }.into_any()
                } else {
                    view! { <span>"Schedule my demo"</span> }.into_any()
                }}
            </button>
        </form>
    }
}

#[cfg(not(feature = "ssr"))]
async fn submit_demo_request(request: &DemoRequest) -> Result<DemoResponse, String> {
    use crate::core::ApiError;
    use gloo_net::http::Request;

    let response = Request::post("/api/schedule-demo")
        .header("Content-Type", "application/json")
        .json(request)
        .map_err(|_| GENERIC_ERROR.to_string())?
        .send()
        .await
        .map_err(|_| "Network error. Please try again.".to_string())?;

    if response.ok() {
        response
            .json::<DemoResponse>()
            .await
            .map_err(|_| GENERIC_ERROR.to_string())
    } else {
        let message = response
            .json::<ApiError>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| GENERIC_ERROR.to_string());
        leptos::logging::warn!("Demo request failed with status {}", response.status());
        Err(message)
    }
}

#[cfg(feature = "ssr")]
async fn submit_demo_request(_request: &DemoRequest) -> Result<DemoResponse, String> {
    Err(GENERIC_ERROR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> DemoRequest {
        DemoRequest {
            name: " Dana ".to_string(),
            email: "dana@corner-bakery.com".to_string(),
            company: "Corner Bakery".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_invalid_input_replaces_previous_success() {
        let mut notice = Some(FormNotice::Success("Thanks!".to_string()));

        let request = DemoRequest {
            email: "nope".to_string(),
            ..filled()
        };
        if let Err(failure) = prepare_submission(&request) {
            notice = Some(failure);
        }

        assert_eq!(
            notice,
            Some(FormNotice::Error(
                "Please enter a valid email address".to_string()
            ))
        );
    }

    #[test]
    fn test_valid_input_is_trimmed_for_sending() {
        let request = prepare_submission(&filled()).unwrap();
        assert_eq!(request.name, "Dana");
    }
}

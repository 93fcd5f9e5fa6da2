use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{use_api, use_notifier};
use crate::router::landing_route;
use crate::utils::APP_TITLE;
use crate::viewmodels::is_valid_email;

use super::shared::TextField;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let api = use_api();
    let notifier = use_notifier();
    let navigator = use_navigator();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            if email.trim().is_empty() || password.is_empty() {
                error.set(Some("Please enter your email and password".to_string()));
                return;
            }
            if !is_valid_email(&email) {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }

            let api = api.clone();
            let notifier = notifier.clone();
            let navigator = navigator.clone();
            let email = email.trim().to_string();
            let password = (*password).clone();
            let error = error.clone();
            let submitting = submitting.clone();
            submitting.set(true);
            error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                match api.auth.login(&email, &password).await {
                    Ok(session) => {
                        notifier.success("Logged in successfully");
                        if let Some(navigator) = navigator {
                            navigator.replace(&landing_route(session.role));
                        }
                    }
                    Err(e) => {
                        let message = e.user_message("Login failed");
                        notifier.error(message.clone());
                        error.set(Some(message));
                        submitting.set(false);
                    }
                }
            });
        })
    };

    let on_email = {
        let email = email.clone();
        Callback::from(move |value: String| email.set(value))
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |value: String| password.set(value))
    };

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <h1>{APP_TITLE}</h1>
                    <p>{"Sign in to continue"}</p>
                </div>
                <form class="login-form" onsubmit={on_submit}>
                    <TextField label="Email" name="email" input_type="email"
                        value={(*email).clone()} oninput={on_email} />
                    <TextField label="Password" name="password" input_type="password"
                        value={(*password).clone()} oninput={on_password} />
                    if let Some(message) = &*error {
                        <div class="error-banner">{message}</div>
                    }
                    <button type="submit" class="btn-login" disabled={*submitting}>
                        { if *submitting { "Signing in..." } else { "Login" } }
                    </button>
                </form>
            </div>
        </div>
    }
}

use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement};
use yew::prelude::*;

use crate::cms::CmsClient;

/// Whether a CMS access token is stored. Token issuance and validation are
/// the CMS's business; we only hold on to the string.
pub fn is_logged_in() -> bool {
    window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item("token").ok())
        .flatten()
        .map_or(false, |token| !token.is_empty())
}

pub fn stored_token() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item("token").ok())
        .flatten()
        .filter(|token| !token.is_empty())
}

pub fn clear_token() {
    if let Some(window) = window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item("token");
        }
    }
}

#[function_component(Login)]
pub fn login() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let email_value = (*email).clone();
            let password_value = (*password).clone();
            if email_value.is_empty() || password_value.is_empty() {
                error.set(Some("Email and password are required".to_string()));
                return;
            }

            let error = error.clone();
            let is_loading = is_loading.clone();
            is_loading.set(true);
            spawn_local(async move {
                match CmsClient::from_config()
                    .login(&email_value, &password_value)
                    .await
                {
                    Ok(token) => {
                        let window = window().unwrap();
                        if let Ok(Some(storage)) = window.local_storage() {
                            if storage.set_item("token", &token).is_ok() {
                                let _ = window.location().set_href("/admin");
                                return;
                            }
                        }
                        error.set(Some("Failed to store session".to_string()));
                        is_loading.set(false);
                    }
                    Err(err) => {
                        gloo_console::error!("login failed:", err.to_string());
                        error.set(Some("Invalid credentials".to_string()));
                        is_loading.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class="login-page">
            <style>
                {r#"
                    .login-page {
                        min-height: 100vh;
                        background: #000;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 2rem;
                    }
                    .login-panel {
                        background: rgba(30, 30, 30, 0.7);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 16px;
                        padding: 3rem;
                        width: 100%;
                        max-width: 420px;
                    }
                    .login-panel h1 {
                        color: #fff;
                        font-size: 1.75rem;
                        text-align: center;
                        margin-bottom: 2rem;
                    }
                    .login-panel label {
                        display: block;
                        color: rgba(255, 255, 255, 0.6);
                        font-size: 0.85rem;
                        margin-bottom: 0.5rem;
                    }
                    .login-panel input {
                        width: 100%;
                        background: rgba(0, 0, 0, 0.5);
                        border: 1px solid rgba(255, 255, 255, 0.15);
                        border-radius: 8px;
                        color: #fff;
                        padding: 0.75rem 1rem;
                        margin-bottom: 1.25rem;
                    }
                    .login-submit {
                        width: 100%;
                        background: #c9f31d;
                        color: #111;
                        border: none;
                        border-radius: 999px;
                        padding: 0.85rem;
                        font-weight: 700;
                        cursor: pointer;
                    }
                    .login-submit:disabled {
                        opacity: 0.6;
                        cursor: wait;
                    }
                    .login-error {
                        color: #ff6b6b;
                        text-align: center;
                        margin-bottom: 1rem;
                        font-size: 0.9rem;
                    }
                "#}
            </style>
            <form class="login-panel" onsubmit={on_submit}>
                <h1>{"Studio Kaze Admin"}</h1>
                {
                    if let Some(message) = (*error).clone() {
                        html! { <p class="login-error">{message}</p> }
                    } else {
                        html! {}
                    }
                }
                <label for="email">{"Email"}</label>
                <input
                    id="email"
                    type="email"
                    value={(*email).clone()}
                    onchange={on_email}
                    placeholder="you@studiokaze.com"
                />
                <label for="password">{"Password"}</label>
                <input
                    id="password"
                    type="password"
                    value={(*password).clone()}
                    onchange={on_password}
                />
                <button class="login-submit" type="submit" disabled={*is_loading}>
                    { if *is_loading { "Signing in..." } else { "Sign in" } }
                </button>
            </form>
        </div>
    }
}

use dioxus::prelude::*;

use crate::components::forms::LoginFormView;
use crate::login::{perform_lookup, LoginAction, LoginFormState};
use crate::services::config::{get_global_config, LoginConfig};
use crate::services::lookup::LookupHandle;
use crate::{console_debug, console_error, console_info};

/// Login form wired to the `LookupHandle` found in context.
///
/// Configuration comes from a `LoginConfig` context when one is provided,
/// otherwise from the global configuration.
#[component]
pub fn LoginForm() -> Element {
    let lookup = use_context::<LookupHandle>();
    let config = use_hook(|| try_consume_context::<LoginConfig>().unwrap_or_else(get_global_config));
    let mut state = use_signal(LoginFormState::default);

    // In-place reduction keeps Signal reactivity intact
    let dispatch = EventHandler::new(move |action: LoginAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    let on_submit = move |_: ()| {
        let Some(credentials) = state.with_mut(|s| s.begin_submit()) else {
            console_debug!("[LoginForm] Submit ignored: form incomplete or lookup pending");
            return;
        };

        console_info!("[LoginForm] Looking up user for {}", credentials.username);
        let lookup = lookup.clone();

        // Spawned on this component's scope, dropped if the form unmounts
        spawn(async move {
            let outcome = perform_lookup(&*lookup, credentials).await;
            match &outcome {
                LoginAction::LookupSucceeded(user) => {
                    console_info!("[LoginForm] Signed in as {}", user.name);
                }
                LoginAction::LookupFailed(message) => {
                    console_error!("[LoginForm] Lookup failed: {}", message);
                }
                _ => {}
            }
            dispatch.call(outcome);
        });
    };

    rsx! {
        div {
            class: "login-container",

            h2 {
                class: "form-title",
                "Login"
            }

            LoginFormView {
                state: state(),
                captions: config.captions.clone(),
                on_username_change: move |value: String| {
                    dispatch.call(LoginAction::SetUsername(value));
                },
                on_password_change: move |value: String| {
                    dispatch.call(LoginAction::SetPassword(value));
                },
                on_submit: on_submit,
            }
        }
    }
}

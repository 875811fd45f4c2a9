use dioxus::prelude::*;

use crate::components::display::{ErrorMessage, Greeting};
use crate::components::inputs::{InputType, LabeledInput};
use crate::login::LoginFormState;
use crate::services::config::Captions;

#[derive(Props, PartialEq, Clone)]
pub struct LoginFormViewProps {
    pub state: LoginFormState,
    pub captions: Captions,
    pub on_username_change: EventHandler<String>,
    pub on_password_change: EventHandler<String>,
    pub on_submit: EventHandler<()>,
}

/// Stateless rendering of a login form snapshot
#[component]
pub fn LoginFormView(props: LoginFormViewProps) -> Element {
    let state = &props.state;
    let caption = state.submit_caption(&props.captions).to_string();
    let on_submit = props.on_submit;

    rsx! {
        form {
            class: "login-form",
            onsubmit: move |event: FormEvent| {
                event.prevent_default();
                on_submit.call(());
            },

            LabeledInput {
                label: "Username".to_string(),
                value: state.username.clone(),
                placeholder: "username".to_string(),
                input_type: InputType::Text,
                on_change: props.on_username_change,
            }

            LabeledInput {
                label: "Password".to_string(),
                value: state.password.clone(),
                placeholder: "password".to_string(),
                input_type: InputType::Password,
                on_change: props.on_password_change,
            }

            button {
                class: "login-button",
                r#type: "submit",
                disabled: !state.submit_enabled(),
                "{caption}"
            }

            ErrorMessage { message: state.error_message.clone() }

            if let Some(name) = &state.display_name {
                Greeting { name: name.clone() }
            }
        }
    }
}

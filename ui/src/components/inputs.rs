//! Form input controls

use dioxus::prelude::*;

#[derive(PartialEq, Clone, Debug)]
pub enum InputType {
    Text,
    Password,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct LabeledInputProps {
    pub label: String,
    pub value: String,
    pub placeholder: String,
    pub input_type: InputType,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn LabeledInput(props: LabeledInputProps) -> Element {
    rsx! {
        label {
            class: "input-section",
            span {
                class: "input-label",
                "{props.label}"
            }
            input {
                class: "input-field",
                r#type: "{props.input_type.as_str()}",
                value: "{props.value}",
                placeholder: "{props.placeholder}",
                oninput: move |event| props.on_change.call(event.value())
            }
        }
    }
}

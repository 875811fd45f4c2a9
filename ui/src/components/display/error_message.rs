use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct ErrorMessageProps {
    pub message: Option<String>,
}

/// Error region, always rendered so it can be located, hidden while empty
#[component]
pub fn ErrorMessage(props: ErrorMessageProps) -> Element {
    let visible = props.message.is_some();
    let message = props.message.unwrap_or_default();

    rsx! {
        span {
            class: "error-message",
            "data-testid": "error",
            style: if visible { "display: block;" } else { "display: none;" },
            "{message}"
        }
    }
}

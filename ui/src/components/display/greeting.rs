use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct GreetingProps {
    pub name: String,
}

#[component]
pub fn Greeting(props: GreetingProps) -> Element {
    rsx! {
        p {
            class: "greeting",
            "Signed in as "
            span {
                class: "greeting-name",
                "{props.name}"
            }
        }
    }
}

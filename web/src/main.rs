use dioxus::prelude::*;
use login_ui::services::config::{init_global_config, load_config};
use login_ui::{console_error, HttpUserLookup, LoginForm, LookupHandle};

const MAIN_CSS: Asset = asset!("/assets/main.css");
const LOGIN_CONFIG: &str = include_str!("../login.json");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
}

#[component]
fn Home() -> Element {
    let config = use_hook(|| init_global_config(load_config(LOGIN_CONFIG)));

    let lookup = use_hook(|| HttpUserLookup::new(&config).map(LookupHandle::new));

    match lookup {
        Ok(lookup) => rsx! {
            LookupProvider { lookup }
        },
        Err(e) => {
            console_error!("[App] Failed to initialise user lookup: {}", e);
            rsx! {
                div { class: "startup-error", "Login is unavailable right now." }
            }
        }
    }
}

#[component]
fn LookupProvider(lookup: LookupHandle) -> Element {
    use_context_provider(|| lookup);

    rsx! {
        div {
            class: "page",
            LoginForm {}
        }
    }
}

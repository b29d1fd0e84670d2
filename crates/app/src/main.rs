use dioxus::prelude::*;

mod format_helpers;
pub mod notify;
mod routes;

use routes::Route;

const THEME_CSS: Asset = asset!("/assets/theme.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}

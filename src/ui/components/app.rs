use dioxus::prelude::*;
use tracing::debug;

use super::SearchForm;

#[component]
pub fn App() -> Element {
    debug!("Rendering app component");

    rsx! {
        div { style: "padding: 24px; font-family: sans-serif;",
            h1 { style: "margin: 0; font-size: 28px;", "Pokédex" }
            SearchForm {}
        }
    }
}

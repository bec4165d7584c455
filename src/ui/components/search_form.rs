use dioxus::prelude::*;

pub const SEARCH_PLACEHOLDER: &str = "Search for a Pokémon";

/// Ordered CSS declarations rendered into an inline `style` attribute
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleTable(pub &'static [(&'static str, &'static str)]);

impl StyleTable {
    pub fn to_css(&self) -> String {
        self.0
            .iter()
            .map(|(property, value)| format!("{}: {};", property, value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Full-width flex row holding the input
pub const BASE_STYLE: StyleTable = StyleTable(&[
    ("width", "100%"),
    ("display", "flex"),
    ("box-sizing", "border-box"),
    ("margin-top", "24px"),
]);

/// Rounded grey search box
pub const SEARCH_INPUT_STYLE: StyleTable = StyleTable(&[
    ("flex", "1"),
    ("border", "none"),
    ("font-size", "16px"),
    ("background-color", "#E5E7EB"),
    ("color", "#6B7280"),
    ("border-radius", "12px"),
    ("padding", "8px 12px"),
]);

/// Static search box. It has no state and wires no handlers.
#[component]
pub fn SearchForm() -> Element {
    let base_style = BASE_STYLE.to_css();
    let input_style = SEARCH_INPUT_STYLE.to_css();

    rsx! {
        div { style: "{base_style}",
            input {
                r#type: "text",
                style: "{input_style}",
                placeholder: SEARCH_PLACEHOLDER,
            }
        }
    }
}

mod app;
mod search_form;

pub use app::App;
pub use search_form::{SearchForm, StyleTable, BASE_STYLE, SEARCH_INPUT_STYLE, SEARCH_PLACEHOLDER};

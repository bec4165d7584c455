use dioxus::desktop::{Config as DioxusConfig, WindowBuilder};

pub fn make_config() -> DioxusConfig {
    DioxusConfig::default().with_window(make_window())
}

fn make_window() -> WindowBuilder {
    WindowBuilder::new()
        .with_title("pokedex")
        .with_always_on_top(false)
        .with_inner_size(dioxus::desktop::LogicalSize::new(480, 720))
}

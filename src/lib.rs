// Library exports for the desktop app, the CLI, and integration tests

pub mod config;
pub mod pokeapi;
pub mod ui;

pub use pokeapi::{PokeApiClient, PokeApiError};

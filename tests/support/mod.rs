pub mod mock_pokeapi;

pub use mock_pokeapi::MockPokeApi;

/// Initialize tracing for tests with proper test output handling
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

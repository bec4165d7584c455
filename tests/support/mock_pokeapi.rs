use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// Local stand-in for pokeapi.co that records every requested path
pub struct MockPokeApi {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockPokeApi {
    pub async fn start() -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let app = Router::new().fallback(handle).with_state(requests.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock PokeAPI");
        let addr = listener.local_addr().expect("Failed to read local addr");

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Mock PokeAPI server failed");
        });

        Self { addr, requests }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/api/v2", self.addr)
    }

    /// Paths requested so far, in arrival order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

async fn handle(State(requests): State<Arc<Mutex<Vec<String>>>>, uri: Uri) -> Response {
    let path = uri.path().to_string();
    requests.lock().unwrap().push(path.clone());

    match path.as_str() {
        "/api/v2/pokemon/" => Json(json!({
            "count": 2,
            "next": null,
            "previous": null,
            "results": [
                {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
                {"name": "pikachu", "url": "https://pokeapi.co/api/v2/pokemon/25/"}
            ]
        }))
        .into_response(),
        "/api/v2/pokemon/25" | "/api/v2/pokemon/pikachu" => Json(json!({
            "id": 25,
            "name": "pikachu",
            "height": 4,
            "weight": 60,
            "base_experience": 112,
            "types": [{"slot": 1, "type": {"name": "electric", "url": "https://pokeapi.co/api/v2/type/13/"}}],
            "sprites": {"front_default": null}
        }))
        .into_response(),
        "/api/v2/pokemon-species/25" => Json(json!({
            "id": 25,
            "name": "pikachu",
            "color": {"name": "yellow", "url": "https://pokeapi.co/api/v2/pokemon-color/10/"},
            "genera": [{"genus": "Mouse Pokémon", "language": {"name": "en", "url": ""}}],
            "flavor_text_entries": [],
            "evolution_chain": {"url": "https://pokeapi.co/api/v2/evolution-chain/10/"}
        }))
        .into_response(),
        "/api/v2/pokemon/ratelimited" => StatusCode::TOO_MANY_REQUESTS.into_response(),
        "/api/v2/pokemon/multiple" => StatusCode::MULTIPLE_CHOICES.into_response(),
        "/api/v2/pokemon/crash" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        "/api/v2/pokemon/garbled" => (StatusCode::OK, "<html>not json</html>").into_response(),
        _ => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

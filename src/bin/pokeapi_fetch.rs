use reqwest::Response;
use std::env;
use thiserror::Error;
use tracing::{error, info};

use pokedex::config::Config;
use pokedex::{PokeApiClient, PokeApiError};

const PROGRAM_NAME: &str = "pokeapi_fetch";

#[derive(Debug, Clone, Copy, PartialEq)]
enum Resource {
    Pokemon,
    Species,
}

#[derive(Debug, Clone, PartialEq)]
struct FetchCommand {
    resource: Resource,
    id: Option<String>,
}

#[derive(Debug, Error, PartialEq)]
enum UsageError {
    #[error("Missing resource argument")]
    MissingResource,
    #[error("Unknown resource: {0}")]
    UnknownResource(String),
    #[error("Too many arguments")]
    TooManyArguments,
}

/// Parse the arguments after the program name.
fn parse_args(args: &[String]) -> Result<FetchCommand, UsageError> {
    let (resource, rest) = args.split_first().ok_or(UsageError::MissingResource)?;

    if rest.len() > 1 {
        return Err(UsageError::TooManyArguments);
    }

    let resource = match resource.as_str() {
        "pokemon" => Resource::Pokemon,
        "species" => Resource::Species,
        other => return Err(UsageError::UnknownResource(other.to_string())),
    };

    Ok(FetchCommand {
        resource,
        id: rest.first().cloned(),
    })
}

async fn fetch(client: &PokeApiClient, command: &FetchCommand) -> Result<Response, PokeApiError> {
    let id = command.id.as_deref();
    match command.resource {
        Resource::Pokemon => client.fetch_pokemon(id).await,
        Resource::Species => client.fetch_species(id).await,
    }
}

#[tokio::main]
async fn main() {
    // Use RUST_LOG env var if set, otherwise default to info level for detailed output
    let log_filter = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or(PROGRAM_NAME);
    let rest = args.get(1..).unwrap_or_default();

    let command = match parse_args(rest) {
        Ok(command) => command,
        Err(e) => {
            error!("{}", e);
            print_usage(program);
            std::process::exit(1);
        }
    };

    let client = PokeApiClient::from_config(&Config::load());

    let response = match fetch(&client, &command).await {
        Ok(response) => response,
        Err(e) => {
            error!("Request failed: {}", e);
            std::process::exit(1);
        }
    };

    info!("Status: {}", response.status());

    match response.text().await {
        Ok(body) => println!("{}", body),
        Err(e) => {
            error!("Failed to read response body: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <pokemon|species> [ID]", program);
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} pokemon            # first page of the collection", program);
    eprintln!("  {} pokemon 25         # pikachu", program);
    eprintln!("  {} species pikachu", program);
}

mod client;
mod models;

pub use client::{pokemon_url, species_url, PokeApiClient, PokeApiError};
pub use models::{
    ApiResource, FlavorText, Genus, NamedApiResource, NamedApiResourceList, Pokemon,
    PokemonSpecies, PokemonSprites, PokemonTypeSlot,
};

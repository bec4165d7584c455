use serde::{Deserialize, Serialize};

/// Name plus URL reference, the PokeAPI's generic link between resources
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NamedApiResource {
    pub name: String,
    pub url: String,
}

/// Unnamed resource reference (evolution chains only have a URL)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResource {
    pub url: String,
}

/// One page of a collection endpoint such as `/pokemon/`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NamedApiResourceList {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedApiResource>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PokemonTypeSlot {
    pub slot: u32,
    #[serde(rename = "type")]
    pub type_ref: NamedApiResource,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PokemonSprites {
    pub front_default: Option<String>,
}

/// Subset of the `/pokemon/{id}` body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub types: Vec<PokemonTypeSlot>,
    #[serde(default)]
    pub sprites: PokemonSprites,
}

impl Pokemon {
    /// Type names ordered by slot
    pub fn type_names(&self) -> Vec<&str> {
        let mut slots: Vec<&PokemonTypeSlot> = self.types.iter().collect();
        slots.sort_by_key(|s| s.slot);
        slots.into_iter().map(|s| s.type_ref.name.as_str()).collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlavorText {
    pub flavor_text: String,
    pub language: NamedApiResource,
    pub version: Option<NamedApiResource>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Genus {
    pub genus: String,
    pub language: NamedApiResource,
}

/// Subset of the `/pokemon-species/{id}` body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PokemonSpecies {
    pub id: u32,
    pub name: String,
    pub color: Option<NamedApiResource>,
    #[serde(default)]
    pub genera: Vec<Genus>,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorText>,
    pub evolution_chain: Option<ApiResource>,
}

impl PokemonSpecies {
    /// First flavor text in `language`, with the game text's line and page breaks flattened.
    pub fn flavor_text(&self, language: &str) -> Option<String> {
        self.flavor_text_entries
            .iter()
            .find(|entry| entry.language.name == language)
            .map(|entry| {
                entry
                    .flavor_text
                    .split(|c: char| c.is_whitespace() || c == '\u{000c}')
                    .filter(|word| !word.is_empty())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
    }

    /// Genus in `language`, e.g. "Mouse Pokémon"
    pub fn genus(&self, language: &str) -> Option<&str> {
        self.genera
            .iter()
            .find(|g| g.language.name == language)
            .map(|g| g.genus.as_str())
    }
}

//! Upstream JSON shapes.
//!
//! Only the fields the client reads are declared; everything else PokéAPI
//! sends is ignored by serde.

use serde::Deserialize;

/// `{ "name": ... }`, the leaf of most PokéAPI references.
#[derive(Debug, Deserialize)]
pub(crate) struct NamedResource {
    pub name: String,
}

/// Body of `GET /{attribute}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ResourceList {
    pub results: Vec<NamedResource>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PokemonSlot {
    pub pokemon: NamedResource,
}

/// Body of `GET /{attribute}/{value}`.
///
/// `ability` and `type` list `pokemon: [{pokemon: {name}}]`, while
/// `pokemon-color` lists `pokemon_species: [{name}]`. Variants are tried in
/// declaration order.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum MemberList {
    Pokemon { pokemon: Vec<PokemonSlot> },
    Species { pokemon_species: Vec<NamedResource> },
}

impl MemberList {
    pub fn into_names(self) -> Vec<String> {
        match self {
            MemberList::Pokemon { pokemon } => pokemon.into_iter().map(|slot| slot.pokemon.name).collect(),
            MemberList::Species { pokemon_species } => pokemon_species.into_iter().map(|s| s.name).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AbilitySlot {
    pub ability: NamedResource,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Sprites {
    pub front_default: Option<String>,
}

/// Body of `GET /pokemon/{name}`.
#[derive(Debug, Deserialize)]
pub(crate) struct Pokemon {
    pub id: u32,
    pub name: String,
    pub types: Vec<TypeSlot>,
    pub abilities: Vec<AbilitySlot>,
    pub sprites: Sprites,
}

impl Pokemon {
    /// Top-level keys only an individual Pokémon carries. A species body has
    /// `id` and `name` too, so those do not count.
    pub const MARKER_FIELDS: [&'static str; 3] = ["types", "abilities", "sprites"];
}

#[derive(Debug, Deserialize)]
pub(crate) struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: NamedResource,
}

/// Body of `GET /pokemon-species/{name}`.
#[derive(Debug, Deserialize)]
pub(crate) struct Species {
    pub flavor_text_entries: Vec<FlavorTextEntry>,
}

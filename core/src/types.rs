//! Domain types handed to consumers of the client.
//!
//! # Design
//! These are the shapes the web layer renders, not the upstream wire format.
//! Upstream JSON is decoded into the private structs in `wire` and mapped
//! onto these, so a schema change upstream touches only one module.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A facet by which Pokémon can be filtered. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeKind {
    Ability,
    Color,
    Type,
}

impl AttributeKind {
    /// Every kind, in display order.
    pub const ALL: [AttributeKind; 3] = [AttributeKind::Ability, AttributeKind::Color, AttributeKind::Type];

    /// Upstream path segment for this kind.
    pub const fn endpoint(self) -> &'static str {
        match self {
            AttributeKind::Ability => "ability",
            AttributeKind::Color => "pokemon-color",
            AttributeKind::Type => "type",
        }
    }

    /// Human-facing label, as shown in the attribute dropdowns.
    pub const fn label(self) -> &'static str {
        match self {
            AttributeKind::Ability => "Ability",
            AttributeKind::Color => "Color",
            AttributeKind::Type => "Type",
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string names none of the three attribute kinds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown attribute kind: {0}")]
pub struct UnknownAttributeKind(pub String);

impl FromStr for AttributeKind {
    type Err = UnknownAttributeKind;

    /// Accepts a label (any case) or an upstream path segment.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AttributeKind::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(s) || kind.endpoint() == s)
            .ok_or_else(|| UnknownAttributeKind(s.to_string()))
    }
}

/// One value of an attribute, e.g. `electric` under `Type`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeValue {
    pub kind: AttributeKind,
    pub name: String,
}

/// A Pokémon name as listed under an attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSummary {
    pub name: String,
}

/// Full detail for one Pokémon.
///
/// `types` and `abilities` keep the order upstream returned them in.
/// `description` is `None` when upstream has no English flavor text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonDetail {
    pub id: u32,
    pub name: String,
    pub types: Vec<String>,
    pub abilities: Vec<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
}

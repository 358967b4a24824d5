//! Error types for the PokéAPI client.
//!
//! # Design
//! Every failure a caller can observe lands in one of four named variants.
//! `NotFound` and `NotAPokemon` are expected outcomes of user input (an
//! unknown attribute value, a species name that has no Pokémon of the same
//! name) and get their own variants so callers can tell them apart from a
//! broken upstream.

use thiserror::Error;

/// Errors returned by `PokemonClient` operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport failure, timeout, or an upstream status that is neither a
    /// success nor a 404.
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Upstream returned 404 for the requested attribute or attribute value.
    #[error("not found: {resource}")]
    NotFound { resource: String },

    /// The name does not resolve to an individual Pokémon.
    #[error("'{name}' is not a pokemon")]
    NotAPokemon { name: String },

    /// The response body is missing fields or has them in the wrong shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl ApiError {
    pub(crate) fn malformed(context: &str, err: impl std::fmt::Display) -> Self {
        ApiError::MalformedResponse(format!("{context}: {err}"))
    }
}

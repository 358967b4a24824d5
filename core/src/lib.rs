//! Synchronous client for browsing the PokéAPI by attribute.
//!
//! # Overview
//! Lists the values of an attribute (ability, color, type), the Pokémon
//! filed under one value, and the detail and English description of a
//! single Pokémon. PokéAPI is the only data source; nothing is cached.
//!
//! # Design
//! - `PokemonClient` holds only immutable configuration and a `Transport`.
//! - Each lookup is split into `build_*` (produces request) and `parse_*`
//!   (consumes response), so decoding rules are testable without a network.
//! - Upstream JSON is decoded into private wire structs and mapped onto the
//!   public types in `types`; differing upstream shapes are resolved there.
//! - Every failure is one of the four `ApiError` variants. Nothing is
//!   swallowed into a default value.
//!
//! ```no_run
//! use dex_core::{AttributeKind, ClientConfig, PokemonClient};
//!
//! let client = PokemonClient::new(ClientConfig::from_env());
//! let members = client.list_members(AttributeKind::Type, "electric")?;
//! let names: Vec<_> = members.iter().map(|m| m.name.as_str()).collect();
//! for detail in client.get_pokemon_details(&names) {
//!     match detail {
//!         Ok(detail) => println!("#{} {}", detail.id, detail.name),
//!         Err(err) => eprintln!("{err}"),
//!     }
//! }
//! # Ok::<(), dex_core::ApiError>(())
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;
mod wire;

pub use client::PokemonClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport};
pub use types::{AttributeKind, AttributeValue, PokemonDetail, PokemonSummary, UnknownAttributeKind};

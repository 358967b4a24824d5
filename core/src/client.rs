//! PokéAPI request builders, response parsers, and the operations that join
//! them.
//!
//! # Design
//! `PokemonClient` holds immutable configuration and a shared `Transport`.
//! Each lookup is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`; the
//! public operations run one through the transport and hand the result to
//! the other. Parsers never perform I/O.

use std::fmt;
use std::sync::Arc;
use std::thread;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};
use crate::types::{AttributeKind, AttributeValue, PokemonDetail, PokemonSummary};
use crate::wire;

/// Synchronous client for the PokéAPI attribute and Pokémon endpoints.
///
/// Cheap to clone and safe to share between threads.
#[derive(Clone)]
pub struct PokemonClient {
    base_url: String,
    max_parallel: usize,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for PokemonClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PokemonClient")
            .field("base_url", &self.base_url)
            .field("max_parallel", &self.max_parallel)
            .finish_non_exhaustive()
    }
}

impl PokemonClient {
    /// A client that talks HTTP through `ureq` with `config.timeout` per call.
    pub fn new(config: ClientConfig) -> Self {
        let transport = Arc::new(UreqTransport::new(config.timeout));
        Self::with_transport(config, transport)
    }

    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_parallel: config.max_parallel.max(1),
            transport,
        }
    }

    // -----------------------------------------------------------------------
    // Operations
    // -----------------------------------------------------------------------

    /// Every value of `kind`, in upstream order.
    pub fn list_attribute_values(&self, kind: AttributeKind) -> Result<Vec<AttributeValue>, ApiError> {
        let response = self.send(self.build_list_attribute_values(kind))?;
        self.parse_list_attribute_values(kind, response)
    }

    /// Values for every attribute kind, in `AttributeKind::ALL` order.
    ///
    /// Stops at the first failing kind.
    pub fn list_all_attribute_values(&self) -> Result<Vec<(AttributeKind, Vec<AttributeValue>)>, ApiError> {
        AttributeKind::ALL
            .into_iter()
            .map(|kind| self.list_attribute_values(kind).map(|values| (kind, values)))
            .collect()
    }

    /// Pokémon listed under `value` of `kind`, in upstream order.
    ///
    /// `value` is not checked against `list_attribute_values`; an unknown
    /// or blank value surfaces as `ApiError::NotFound`.
    pub fn list_members(&self, kind: AttributeKind, value: &str) -> Result<Vec<PokemonSummary>, ApiError> {
        if is_blank(value) {
            return Err(ApiError::NotFound {
                resource: format!("{}/", kind.endpoint()),
            });
        }
        let response = self.send(self.build_list_members(kind, value))?;
        self.parse_list_members(kind, value, response)
    }

    /// Detail for `name`, including its English description when one exists.
    ///
    /// Costs two round trips: the Pokémon itself, then its species.
    pub fn get_pokemon_detail(&self, name: &str) -> Result<PokemonDetail, ApiError> {
        if is_blank(name) {
            return Err(ApiError::NotAPokemon { name: String::new() });
        }
        let response = self.send(self.build_get_pokemon(name))?;
        let mut detail = self.parse_get_pokemon(name, response)?;
        detail.description = self.get_description(&detail.name)?;
        Ok(detail)
    }

    /// First English flavor text for species `name`, newlines flattened.
    ///
    /// `Ok(None)` when upstream has no English entry for the species, or
    /// no species of that name.
    pub fn get_description(&self, name: &str) -> Result<Option<String>, ApiError> {
        if is_blank(name) {
            return Ok(None);
        }
        let response = self.send(self.build_get_description(name))?;
        self.parse_get_description(name, response)
    }

    /// Resolves every name to its detail on up to `max_parallel` threads.
    ///
    /// Results come back in the order of `names`; one failure does not
    /// affect the others.
    pub fn get_pokemon_details<S>(&self, names: &[S]) -> Vec<Result<PokemonDetail, ApiError>>
    where
        S: AsRef<str> + Sync,
    {
        if names.is_empty() {
            return Vec::new();
        }
        let workers = self.max_parallel.min(names.len());
        let batch_size = names.len().div_ceil(workers);

        thread::scope(|scope| {
            let handles: Vec<_> = names
                .chunks(batch_size)
                .map(|batch| {
                    scope.spawn(move || {
                        batch
                            .iter()
                            .map(|name| self.get_pokemon_detail(name.as_ref()))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            handles
                .into_iter()
                .flat_map(|handle| handle.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
                .collect()
        })
    }

    // -----------------------------------------------------------------------
    // Request builders
    // -----------------------------------------------------------------------

    pub fn build_list_attribute_values(&self, kind: AttributeKind) -> HttpRequest {
        HttpRequest::get(format!("{}/{}", self.base_url, kind.endpoint()))
    }

    /// `value` is trimmed and percent-encoded as a single path segment.
    pub fn build_list_members(&self, kind: AttributeKind, value: &str) -> HttpRequest {
        HttpRequest::get(format!("{}/{}/{}", self.base_url, kind.endpoint(), path_segment(value)))
    }

    pub fn build_get_pokemon(&self, name: &str) -> HttpRequest {
        HttpRequest::get(format!("{}/pokemon/{}", self.base_url, path_segment(name)))
    }

    pub fn build_get_description(&self, name: &str) -> HttpRequest {
        HttpRequest::get(format!("{}/pokemon-species/{}", self.base_url, path_segment(name)))
    }

    // -----------------------------------------------------------------------
    // Response parsers
    // -----------------------------------------------------------------------

    pub fn parse_list_attribute_values(
        &self,
        kind: AttributeKind,
        response: HttpResponse,
    ) -> Result<Vec<AttributeValue>, ApiError> {
        check_status(&response, kind.endpoint())?;
        let list: wire::ResourceList = decode(&response.body, kind.endpoint())?;
        Ok(list
            .results
            .into_iter()
            .map(|item| AttributeValue { kind, name: item.name })
            .collect())
    }

    pub fn parse_list_members(
        &self,
        kind: AttributeKind,
        value: &str,
        response: HttpResponse,
    ) -> Result<Vec<PokemonSummary>, ApiError> {
        let resource = format!("{}/{}", kind.endpoint(), value.trim());
        check_status(&response, &resource)?;
        let members: wire::MemberList = decode(&response.body, &resource)?;
        Ok(members
            .into_names()
            .into_iter()
            .map(|name| PokemonSummary { name })
            .collect())
    }

    /// Decodes a Pokémon body. The returned detail has no description yet.
    ///
    /// A 404, a non-JSON body, or a JSON body with none of the Pokémon-only
    /// fields all mean `name` is not an individual Pokémon.
    pub fn parse_get_pokemon(&self, name: &str, response: HttpResponse) -> Result<PokemonDetail, ApiError> {
        let not_a_pokemon = || ApiError::NotAPokemon {
            name: name.trim().to_string(),
        };

        match check_status(&response, name) {
            Ok(()) => {}
            Err(ApiError::NotFound { .. }) => return Err(not_a_pokemon()),
            Err(other) => return Err(other),
        }

        let value: serde_json::Value = serde_json::from_str(&response.body).map_err(|e| {
            debug!(name, error = %e, "pokemon body is not JSON");
            not_a_pokemon()
        })?;
        let looks_like_pokemon = value
            .as_object()
            .is_some_and(|obj| wire::Pokemon::MARKER_FIELDS.iter().any(|key| obj.contains_key(*key)));
        if !looks_like_pokemon {
            return Err(not_a_pokemon());
        }

        let pokemon: wire::Pokemon = serde_json::from_value(value).map_err(|e| {
            warn!(name, error = %e, "pokemon body has unexpected shape");
            ApiError::malformed(&format!("pokemon/{}", name.trim()), e)
        })?;

        Ok(PokemonDetail {
            id: pokemon.id,
            name: pokemon.name,
            types: pokemon.types.into_iter().map(|slot| slot.kind.name).collect(),
            abilities: pokemon.abilities.into_iter().map(|slot| slot.ability.name).collect(),
            image_url: pokemon.sprites.front_default,
            description: None,
        })
    }

    /// A species upstream does not know (404) has no description rather
    /// than being an error; forms such as `deoxys-normal` hit this.
    pub fn parse_get_description(&self, name: &str, response: HttpResponse) -> Result<Option<String>, ApiError> {
        let resource = format!("pokemon-species/{}", name.trim());
        match check_status(&response, &resource) {
            Ok(()) => {}
            Err(ApiError::NotFound { .. }) => {
                debug!(name, "no species entry");
                return Ok(None);
            }
            Err(other) => return Err(other),
        }

        let species: wire::Species = decode(&response.body, &resource)?;
        Ok(species
            .flavor_text_entries
            .into_iter()
            .find(|entry| entry.language.name == "en")
            .map(|entry| flatten_flavor_text(&entry.flavor_text)))
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(url = %request.url, "GET");
        let response = self.transport.execute(&request)?;
        debug!(url = %request.url, status = response.status, "upstream responded");
        Ok(response)
    }
}

/// Bytes escaped inside one path segment. `/` and `%` are included so a
/// name can never change the path shape.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'[')
    .add(b']')
    .add(b'\\')
    .add(b'^')
    .add(b'|');

fn path_segment(value: &str) -> String {
    utf8_percent_encode(value.trim(), PATH_SEGMENT).to_string()
}

/// An empty segment would turn `/{kind}/{value}` into the `/{kind}` listing.
fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Map non-success statuses onto `ApiError`. 404 becomes `NotFound`; callers
/// that mean something more specific by a 404 remap it.
fn check_status(response: &HttpResponse, resource: &str) -> Result<(), ApiError> {
    match response.status {
        200..=299 => Ok(()),
        404 => Err(ApiError::NotFound {
            resource: resource.to_string(),
        }),
        status => {
            warn!(resource, status, "unexpected upstream status");
            Err(ApiError::UpstreamUnavailable(format!("HTTP {status} for {resource}")))
        }
    }
}

fn decode<T: DeserializeOwned>(body: &str, resource: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| {
        warn!(resource, error = %e, "could not decode upstream body");
        ApiError::malformed(resource, e)
    })
}

/// PokéAPI flavor text carries the line breaks of the game text box, as
/// `\n` and form feeds. Each becomes a single space.
fn flatten_flavor_text(text: &str) -> String {
    text.replace(['\n', '\u{c}'], " ")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;

    /// Serves canned responses keyed by URL and records every request.
    #[derive(Default)]
    struct CannedTransport {
        responses: HashMap<String, HttpResponse>,
        calls: Mutex<Vec<String>>,
    }

    impl CannedTransport {
        fn with(mut self, url: &str, status: u16, body: &str) -> Self {
            self.responses.insert(url.to_string(), HttpResponse::new(status, body));
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Transport for CannedTransport {
        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
            self.calls.lock().unwrap().push(request.url.clone());
            self.responses
                .get(&request.url)
                .cloned()
                .ok_or_else(|| ApiError::UpstreamUnavailable(format!("connection refused: {}", request.url)))
        }
    }

    const BASE: &str = "https://pokeapi.co/api/v2";

    const PIKACHU: &str = r#"{
        "id": 25,
        "name": "pikachu",
        "types": [{"slot": 1, "type": {"name": "electric", "url": "x"}}],
        "abilities": [{"ability": {"name": "static"}}, {"ability": {"name": "lightning-rod"}}],
        "sprites": {"front_default": "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/25.png"}
    }"#;

    const PIKACHU_SPECIES: &str = r#"{
        "id": 25,
        "name": "pikachu",
        "flavor_text_entries": [
            {"language": {"name": "ja"}, "flavor_text": "ねずみ"},
            {"language": {"name": "en"}, "flavor_text": "A mouse Pokémon.\nIt can generate electricity."},
            {"language": {"name": "en"}, "flavor_text": "Second entry."}
        ]
    }"#;

    fn client() -> PokemonClient {
        PokemonClient::with_transport(ClientConfig::default(), Arc::new(CannedTransport::default()))
    }

    fn client_with(transport: CannedTransport) -> (PokemonClient, Arc<CannedTransport>) {
        let transport = Arc::new(transport);
        let client = PokemonClient::with_transport(ClientConfig::default(), transport.clone());
        (client, transport)
    }

    #[test]
    fn builders_produce_expected_urls() {
        let c = client();
        assert_eq!(c.build_list_attribute_values(AttributeKind::Color).url, format!("{BASE}/pokemon-color"));
        assert_eq!(c.build_list_members(AttributeKind::Type, "grass").url, format!("{BASE}/type/grass"));
        assert_eq!(c.build_get_pokemon("eevee").url, format!("{BASE}/pokemon/eevee"));
        assert_eq!(c.build_get_description("eevee").url, format!("{BASE}/pokemon-species/eevee"));
    }

    #[test]
    fn builders_percent_encode_segments() {
        let c = client();
        assert_eq!(c.build_get_pokemon(" mr mime ").url, format!("{BASE}/pokemon/mr%20mime"));
        assert_eq!(c.build_get_description("farfetch'd").url, format!("{BASE}/pokemon-species/farfetch'd"));
        assert_eq!(c.build_get_pokemon("flabébé").url, format!("{BASE}/pokemon/flab%C3%A9b%C3%A9"));
        assert_eq!(c.build_list_members(AttributeKind::Type, "no such").url, format!("{BASE}/type/no%20such"));
        assert_eq!(c.build_list_members(AttributeKind::Color, "a/b?c#d").url, format!("{BASE}/pokemon-color/a%2Fb%3Fc%23d"));
    }

    #[test]
    fn blank_values_are_rejected_without_a_request() {
        let (c, transport) = client_with(CannedTransport::default());

        let err = c.list_members(AttributeKind::Type, "  ").unwrap_err();
        assert_eq!(
            err,
            ApiError::NotFound {
                resource: "type/".to_string()
            }
        );
        assert!(matches!(c.get_pokemon_detail(""), Err(ApiError::NotAPokemon { .. })));
        assert_eq!(c.get_description("\t"), Ok(None));
        assert!(transport.calls().is_empty());
    }

    #[test]
    fn builders_request_json() {
        let req = client().build_get_pokemon("eevee");
        assert_eq!(req.headers, vec![("accept".to_string(), "application/json".to_string())]);
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ClientConfig::default().with_base_url("http://localhost:3000/api/v2//");
        let c = PokemonClient::with_transport(config, Arc::new(CannedTransport::default()));
        assert_eq!(c.build_list_attribute_values(AttributeKind::Ability).url, "http://localhost:3000/api/v2/ability");
    }

    #[test]
    fn parse_attribute_values_keeps_order() {
        let body = r#"{"count":3,"results":[{"name":"fire"},{"name":"water"},{"name":"grass"}]}"#;
        let values = client()
            .parse_list_attribute_values(AttributeKind::Type, HttpResponse::new(200, body))
            .unwrap();
        let names: Vec<_> = values.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, ["fire", "water", "grass"]);
        assert!(values.iter().all(|v| v.kind == AttributeKind::Type));
    }

    #[test]
    fn parse_attribute_values_empty() {
        let values = client()
            .parse_list_attribute_values(AttributeKind::Ability, HttpResponse::new(200, r#"{"results":[]}"#))
            .unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn parse_attribute_values_without_results_is_malformed() {
        let err = client()
            .parse_list_attribute_values(AttributeKind::Ability, HttpResponse::new(200, r#"{"count":0}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::MalformedResponse(_)));

        let err = client()
            .parse_list_attribute_values(AttributeKind::Ability, HttpResponse::new(200, r#"{"results":[{"id":1}]}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::MalformedResponse(_)));
    }

    #[test]
    fn parse_members_normalizes_both_shapes() {
        let c = client();
        let wrapped = r#"{"pokemon":[{"pokemon":{"name":"pikachu"},"slot":1},{"pokemon":{"name":"raichu"},"slot":1}]}"#;
        let flat = r#"{"pokemon_species":[{"name":"pikachu"},{"name":"raichu"}]}"#;

        let from_wrapped = c
            .parse_list_members(AttributeKind::Ability, "static", HttpResponse::new(200, wrapped))
            .unwrap();
        let from_flat = c
            .parse_list_members(AttributeKind::Color, "yellow", HttpResponse::new(200, flat))
            .unwrap();

        assert_eq!(from_wrapped, from_flat);
        assert_eq!(from_flat[0].name, "pikachu");
        assert_eq!(from_flat[1].name, "raichu");
    }

    #[test]
    fn parse_members_not_found_is_distinct() {
        let err = client()
            .parse_list_members(AttributeKind::Type, "plasma", HttpResponse::new(404, "Not Found"))
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::NotFound {
                resource: "type/plasma".to_string()
            }
        );
    }

    #[test]
    fn parse_members_with_neither_key_is_malformed() {
        let err = client()
            .parse_list_members(AttributeKind::Type, "fire", HttpResponse::new(200, r#"{"name":"fire"}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::MalformedResponse(_)));
    }

    #[test]
    fn server_errors_are_upstream_unavailable() {
        let err = client()
            .parse_list_attribute_values(AttributeKind::Type, HttpResponse::new(503, "maintenance"))
            .unwrap_err();
        assert!(matches!(err, ApiError::UpstreamUnavailable(_)));
    }

    #[test]
    fn parse_pokemon_extracts_fields_in_order() {
        let detail = client().parse_get_pokemon("pikachu", HttpResponse::new(200, PIKACHU)).unwrap();
        assert_eq!(detail.id, 25);
        assert_eq!(detail.name, "pikachu");
        assert_eq!(detail.types, ["electric"]);
        assert_eq!(detail.abilities, ["static", "lightning-rod"]);
        assert_eq!(
            detail.image_url.as_deref(),
            Some("https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/25.png")
        );
        assert!(detail.description.is_none());
    }

    #[test]
    fn parse_pokemon_allows_missing_sprite() {
        let body = r#"{"id":10,"name":"x","types":[],"abilities":[],"sprites":{"front_default":null}}"#;
        let detail = client().parse_get_pokemon("x", HttpResponse::new(200, body)).unwrap();
        assert!(detail.image_url.is_none());
    }

    #[test]
    fn parse_pokemon_species_body_is_not_a_pokemon() {
        let err = client()
            .parse_get_pokemon("deoxys", HttpResponse::new(200, PIKACHU_SPECIES))
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::NotAPokemon {
                name: "deoxys".to_string()
            }
        );
    }

    #[test]
    fn parse_pokemon_invalid_json_is_not_a_pokemon() {
        let err = client()
            .parse_get_pokemon("invalid-pokemon", HttpResponse::new(200, "Not Found"))
            .unwrap_err();
        assert!(matches!(err, ApiError::NotAPokemon { .. }));
    }

    #[test]
    fn parse_pokemon_404_is_not_a_pokemon() {
        let err = client()
            .parse_get_pokemon("missingno", HttpResponse::new(404, "Not Found"))
            .unwrap_err();
        assert!(matches!(err, ApiError::NotAPokemon { .. }));
    }

    #[test]
    fn parse_pokemon_wrong_field_type_is_malformed() {
        let body = r#"{"id":"twenty-five","name":"pikachu","types":[],"abilities":[],"sprites":{}}"#;
        let err = client().parse_get_pokemon("pikachu", HttpResponse::new(200, body)).unwrap_err();
        assert!(matches!(err, ApiError::MalformedResponse(_)));
    }

    #[test]
    fn parse_description_uses_first_english_entry() {
        let description = client()
            .parse_get_description("pikachu", HttpResponse::new(200, PIKACHU_SPECIES))
            .unwrap();
        assert_eq!(description.as_deref(), Some("A mouse Pokémon. It can generate electricity."));
    }

    #[test]
    fn parse_description_flattens_form_feeds() {
        let body = r#"{"flavor_text_entries":[{"language":{"name":"en"},"flavor_text":"When several of\fthese POKéMON\ngather"}]}"#;
        let description = client().parse_get_description("raichu", HttpResponse::new(200, body)).unwrap();
        assert_eq!(description.as_deref(), Some("When several of these POKéMON gather"));
    }

    #[test]
    fn parse_description_without_english_is_none() {
        let body = r#"{"flavor_text_entries":[{"language":{"name":"es"},"flavor_text":"Un Pokémon ratón."}]}"#;
        let description = client().parse_get_description("pikachu", HttpResponse::new(200, body)).unwrap();
        assert!(description.is_none());
    }

    #[test]
    fn parse_description_with_empty_entries_is_none() {
        let body = r#"{"flavor_text_entries":[]}"#;
        let description = client().parse_get_description("pikachu", HttpResponse::new(200, body)).unwrap();
        assert!(description.is_none());
    }

    #[test]
    fn parse_description_unknown_species_is_none() {
        let description = client()
            .parse_get_description("deoxys-normal", HttpResponse::new(404, "Not Found"))
            .unwrap();
        assert!(description.is_none());
    }

    #[test]
    fn get_pokemon_detail_joins_both_calls() {
        let (c, transport) = client_with(
            CannedTransport::default()
                .with(&format!("{BASE}/pokemon/pikachu"), 200, PIKACHU)
                .with(&format!("{BASE}/pokemon-species/pikachu"), 200, PIKACHU_SPECIES),
        );

        let detail = c.get_pokemon_detail("pikachu").unwrap();
        assert_eq!(detail.description.as_deref(), Some("A mouse Pokémon. It can generate electricity."));
        assert_eq!(
            transport.calls(),
            vec![format!("{BASE}/pokemon/pikachu"), format!("{BASE}/pokemon-species/pikachu")]
        );
    }

    #[test]
    fn get_pokemon_detail_propagates_description_failure() {
        let (c, _) = client_with(CannedTransport::default().with(&format!("{BASE}/pokemon/pikachu"), 200, PIKACHU));
        let err = c.get_pokemon_detail("pikachu").unwrap_err();
        assert!(matches!(err, ApiError::UpstreamUnavailable(_)));
    }

    #[test]
    fn not_a_pokemon_skips_description_call() {
        let (c, transport) = client_with(CannedTransport::default().with(&format!("{BASE}/pokemon/deoxys"), 404, "Not Found"));
        let err = c.get_pokemon_detail("deoxys").unwrap_err();
        assert!(matches!(err, ApiError::NotAPokemon { .. }));
        assert_eq!(transport.calls().len(), 1);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let (c, _) = client_with(
            CannedTransport::default()
                .with(&format!("{BASE}/pokemon/pikachu"), 200, PIKACHU)
                .with(&format!("{BASE}/pokemon-species/pikachu"), 200, PIKACHU_SPECIES),
        );
        assert_eq!(c.get_pokemon_detail("pikachu"), c.get_pokemon_detail("pikachu"));
    }

    #[test]
    fn list_all_attribute_values_stops_at_first_failure() {
        let (c, transport) = client_with(
            CannedTransport::default().with(&format!("{BASE}/ability"), 200, r#"{"results":[{"name":"static"}]}"#),
        );
        let err = c.list_all_attribute_values().unwrap_err();
        assert!(matches!(err, ApiError::UpstreamUnavailable(_)));
        assert_eq!(transport.calls(), vec![format!("{BASE}/ability"), format!("{BASE}/pokemon-color")]);
    }

    #[test]
    fn get_pokemon_details_preserves_order_and_isolates_failures() {
        let config = ClientConfig::default().with_max_parallel(2);
        let transport = CannedTransport::default()
            .with(&format!("{BASE}/pokemon/pikachu"), 200, PIKACHU)
            .with(&format!("{BASE}/pokemon-species/pikachu"), 200, PIKACHU_SPECIES)
            .with(&format!("{BASE}/pokemon/deoxys"), 404, "Not Found");
        let c = PokemonClient::with_transport(config, Arc::new(transport));

        let results = c.get_pokemon_details(&["deoxys", "pikachu", "deoxys", "pikachu", "pikachu"]);
        assert_eq!(results.len(), 5);
        assert!(matches!(results[0], Err(ApiError::NotAPokemon { .. })));
        assert_eq!(results[1].as_ref().unwrap().id, 25);
        assert!(matches!(results[2], Err(ApiError::NotAPokemon { .. })));
        assert!(results[3].is_ok());
        assert!(results[4].is_ok());
    }

    #[test]
    fn get_pokemon_details_empty_input() {
        let names: [&str; 0] = [];
        assert!(client().get_pokemon_details(&names).is_empty());
    }
}

//! A small slice of real PokéAPI data, trimmed to the fields the client reads
//! plus a few it ignores.

use serde_json::{json, Value};

use crate::Fixtures;

const SPRITES: &str = "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

fn named(names: &[&str]) -> Vec<Value> {
    names.iter().map(|name| json!({ "name": name, "url": "" })).collect()
}

fn listing(names: &[&str]) -> Value {
    json!({ "count": names.len(), "next": null, "previous": null, "results": named(names) })
}

fn pokemon_members(names: &[&str]) -> Value {
    let pokemon: Vec<Value> = names
        .iter()
        .map(|name| json!({ "pokemon": { "name": name, "url": "" }, "slot": 1 }))
        .collect();
    json!({ "pokemon": pokemon })
}

fn pokemon(id: u32, name: &str, types: &[&str], abilities: &[&str]) -> Value {
    let types: Vec<Value> = types
        .iter()
        .enumerate()
        .map(|(i, t)| json!({ "slot": i + 1, "type": { "name": t, "url": "" } }))
        .collect();
    let abilities: Vec<Value> = abilities
        .iter()
        .map(|a| json!({ "ability": { "name": a, "url": "" }, "is_hidden": false }))
        .collect();
    json!({
        "id": id,
        "name": name,
        "height": 4,
        "types": types,
        "abilities": abilities,
        "sprites": { "front_default": format!("{SPRITES}/{id}.png"), "back_default": null },
    })
}

fn species(id: u32, name: &str, entries: &[(&str, &str)]) -> Value {
    let entries: Vec<Value> = entries
        .iter()
        .map(|(lang, text)| json!({ "flavor_text": text, "language": { "name": lang, "url": "" } }))
        .collect();
    json!({ "id": id, "name": name, "flavor_text_entries": entries })
}

/// Pikachu, Raichu, Bulbasaur and Deoxys, filed under a handful of
/// attribute values.
///
/// Deoxys exercises the species/Pokémon split: the color listing names the
/// species `deoxys`, while the only Pokémon is `deoxys-normal`, which has
/// no species entry of its own. Bulbasaur's species has no English text.
pub fn sample() -> Fixtures {
    Fixtures::new()
        .json("ability", listing(&["static", "lightning-rod", "overgrow", "chlorophyll", "pressure"]))
        .json("pokemon-color", listing(&["green", "red", "yellow"]))
        .json("type", listing(&["normal", "grass", "poison", "electric", "psychic"]))
        .json("ability/static", pokemon_members(&["pikachu", "raichu"]))
        .json("ability/overgrow", pokemon_members(&["bulbasaur"]))
        .json("type/electric", pokemon_members(&["pikachu", "raichu"]))
        .json("type/grass", pokemon_members(&["bulbasaur"]))
        .json("type/psychic", pokemon_members(&["deoxys-normal"]))
        .json("pokemon-color/yellow", json!({ "id": 10, "name": "yellow", "pokemon_species": named(&["pikachu", "raichu"]) }))
        .json("pokemon-color/green", json!({ "id": 5, "name": "green", "pokemon_species": named(&["bulbasaur"]) }))
        .json("pokemon-color/red", json!({ "id": 8, "name": "red", "pokemon_species": named(&["deoxys"]) }))
        .json("pokemon/pikachu", pokemon(25, "pikachu", &["electric"], &["static", "lightning-rod"]))
        .json("pokemon/raichu", pokemon(26, "raichu", &["electric"], &["static", "lightning-rod"]))
        .json("pokemon/bulbasaur", pokemon(1, "bulbasaur", &["grass", "poison"], &["overgrow", "chlorophyll"]))
        .json("pokemon/deoxys-normal", pokemon(386, "deoxys-normal", &["psychic"], &["pressure"]))
        .json(
            "pokemon-species/pikachu",
            species(25, "pikachu", &[
                ("ja", "ほっぺたの　りょうがわに\nちいさい　でんきぶくろを　もつ。"),
                ("en", "When several of\nthese POKéMON\ngather, their\u{c}electricity could\nbuild and cause\nlightning storms."),
            ]),
        )
        .json(
            "pokemon-species/raichu",
            species(26, "raichu", &[("en", "Its long tail serves\nas a ground to\u{c}protect itself.")]),
        )
        .json(
            "pokemon-species/bulbasaur",
            species(1, "bulbasaur", &[("es", "Una rara semilla fue plantada en su espalda.")]),
        )
        .json(
            "pokemon-species/deoxys",
            species(386, "deoxys", &[("en", "DNA from a space virus\nmutated and became\u{c}a POKéMON.")]),
        )
}

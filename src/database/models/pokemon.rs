//! Pokemon collection and the field paths used by its analytical endpoints.

use super::Resource;

/// The `pokemon` collection.
pub struct Pokemons;

impl Resource for Pokemons {
    const COLLECTION: &'static str = "pokemon";
    const LABEL: &'static str = "pokemon";
}

/// Array of type names, e.g. `["Fire", "Flying"]`.
pub const TYPE: &str = "type";

pub const ENGLISH_NAME: &str = "name.english";
pub const FRENCH_NAME: &str = "name.french";

/// Base hit points.
pub const HP: &str = "base.HP";

pub const WEIGHT: &str = "profile.weight";
pub const HEIGHT: &str = "profile.height";

/// Next evolutions; missing, null or empty means the pokemon does not evolve.
pub const NEXT_EVOLUTIONS: &str = "evolution.next";

//! Collection descriptors.
//!
//! Records are stored schemaless; these modules only name the collections
//! and the field paths the queries rely on.

pub mod film;
pub mod pokemon;

pub use film::Films;
pub use pokemon::Pokemons;

/// A collection exposed through the generic CRUD handlers.
pub trait Resource: Send + Sync + 'static {
    /// Collection name in the database.
    const COLLECTION: &'static str;

    /// Singular, lowercase name used in response messages.
    const LABEL: &'static str;
}

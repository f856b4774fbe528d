//! Film collection.
//!
//! Documents look like:
//!
//! ```json
//! { "nom": "Alien", "realisateur": "Ridley Scott", "duree": 117,
//!   "genres": ["Horreur", "Science-fiction"], "resume": "..." }
//! ```

use super::Resource;

/// The `films` collection.
pub struct Films;

impl Resource for Films {
    const COLLECTION: &'static str = "films";
    const LABEL: &'static str = "film";
}

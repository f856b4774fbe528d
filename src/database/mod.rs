//! Database module exports.

pub mod models;
mod mongo;
mod repository;

pub use models::Resource;
pub use mongo::Database;
pub use repository::DocumentRepository;

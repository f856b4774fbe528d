//! MongoDB database wrapper.

use std::time::Duration;

use mongodb::bson::{doc, Document};
use mongodb::{options::ClientOptions, Client, Collection};
use tracing::info;

/// Database wrapper for MongoDB operations.
///
/// Cloning is cheap: the driver client owns a shared connection pool, and every
/// operation checks a connection out of it and returns it when done.
#[derive(Debug, Clone)]
pub struct Database {
    client: Client,
    db: mongodb::Database,
}

impl Database {
    /// Connect to MongoDB with the given URI and database name.
    ///
    /// # Arguments
    /// * `uri` - MongoDB connection string
    /// * `db_name` - Database name to use
    /// * `timeout` - Optional bound on server selection and connection setup
    ///
    /// # Errors
    /// Returns error if the URI is invalid or the server does not answer a ping.
    pub async fn connect(uri: &str, db_name: &str, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut options = ClientOptions::parse(uri).await?;
        if let Some(timeout) = timeout {
            options.server_selection_timeout = Some(timeout);
            options.connect_timeout = Some(timeout);
        }
        options.app_name.get_or_insert_with(|| "media-api".to_string());

        let database = Self::new(Client::with_options(options)?, db_name);
        database.ping().await?;

        info!("Successfully connected to MongoDB");

        Ok(database)
    }

    /// Wrap an existing client without contacting the server.
    pub fn new(client: Client, db_name: &str) -> Self {
        let db = client.database(db_name);
        Self { client, db }
    }

    /// Round-trip a `ping` command to the server.
    pub async fn ping(&self) -> mongodb::error::Result<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }

    /// Get a reference to the database.
    #[cfg(test)]
    pub fn db(&self) -> &mongodb::Database {
        &self.db
    }

    /// Get an untyped collection from the database.
    ///
    /// # Arguments
    /// * `name` - Collection name
    pub fn collection(&self, name: &str) -> Collection<Document> {
        self.db.collection(name)
    }
}

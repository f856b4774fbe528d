//! Collection-scoped document repository.
//!
//! Each method issues exactly one driver call. Connections are checked out
//! of the client pool for the duration of that call only.

use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Bson, Document};
use mongodb::error::Result;
use mongodb::options::FindOptions;
use mongodb::Collection;
use tracing::debug;

use super::models::Resource;
use super::Database;

/// Repository over one untyped collection.
#[derive(Debug, Clone)]
pub struct DocumentRepository {
    collection: Collection<Document>,
}

impl DocumentRepository {
    /// Repository for the collection backing `R`.
    pub fn of<R: Resource>(db: &Database) -> Self {
        Self {
            collection: db.collection(R::COLLECTION),
        }
    }

    /// Run a find query and collect every matching document.
    pub async fn find(
        &self,
        filter: Document,
        options: Option<FindOptions>,
    ) -> Result<Vec<Document>> {
        let cursor = self.collection.find(filter).with_options(options).await?;
        let docs: Vec<Document> = cursor.try_collect().await?;
        debug!("find on {} returned {} documents", self.collection.name(), docs.len());
        Ok(docs)
    }

    /// Get a single document by its `_id`.
    pub async fn find_by_id(&self, id: ObjectId) -> Result<Option<Document>> {
        let result = self.collection.find_one(doc! { "_id": id }).await?;
        debug!("find_one {} in {}: {:?}", id, self.collection.name(), result.is_some());
        Ok(result)
    }

    /// Insert a document, returning the identifier assigned by the store.
    pub async fn insert(&self, document: Document) -> Result<Bson> {
        let result = self.collection.insert_one(document).await?;
        debug!("Inserted {} into {}", result.inserted_id, self.collection.name());
        Ok(result.inserted_id)
    }

    /// Replace the given top-level fields of a document (`$set`).
    ///
    /// Returns the number of matched documents (0 or 1).
    pub async fn set_fields(&self, id: ObjectId, fields: Document) -> Result<u64> {
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": fields })
            .await?;
        debug!("Updated {} in {}: matched {}", id, self.collection.name(), result.matched_count);
        Ok(result.matched_count)
    }

    /// Delete a document. Returns `true` if something was deleted.
    pub async fn delete(&self, id: ObjectId) -> Result<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        debug!("Deleted {} from {}: {}", id, self.collection.name(), result.deleted_count > 0);
        Ok(result.deleted_count > 0)
    }

    /// Run an aggregation pipeline and collect its output.
    pub async fn aggregate(&self, pipeline: Vec<Document>) -> Result<Vec<Document>> {
        let cursor = self.collection.aggregate(pipeline).await?;
        let docs: Vec<Document> = cursor.try_collect().await?;
        debug!("aggregate on {} returned {} documents", self.collection.name(), docs.len());
        Ok(docs)
    }
}

use crate::environment::Environment;
use crate::firestore::error::FirestoreError;
use serde_json::{Map, Value};

pub(crate) mod client;
pub use client::FirestoreClient;
pub mod error;
pub mod value;

#[cfg(test)]
use mockall::automock;

/// One document of a collection, with its fields already decoded to plain JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Map<String, Value>,
}

impl Document {
    pub fn new(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }
}

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait DocumentSource: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Reads every document of a collection. No filtering or ordering is applied.
    async fn list_documents(&self, collection: &str) -> Result<Vec<Document>, FirestoreError>;
}

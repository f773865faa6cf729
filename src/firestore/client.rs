//! Firestore REST Client
//!
//! Read-only access to Firestore collections over the public REST API.

use crate::consts::cli_consts::firestore::{DATABASE, PAGE_SIZE};
use crate::environment::Environment;
use crate::firestore::error::FirestoreError;
use crate::firestore::value::decode_fields;
use crate::firestore::{Document, DocumentSource};
use reqwest::{Client, ClientBuilder, Response};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashSet;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("portfolio-showcase/", env!("CARGO_PKG_VERSION"));

/// One page of a `documents.list` response. An empty collection answers `{}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListDocumentsResponse {
    #[serde(default)]
    documents: Vec<RawDocument>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawDocument {
    /// `projects/{project}/databases/{database}/documents/{collection}/{id}`
    name: String,
    #[serde(default)]
    fields: Map<String, Value>,
}

impl RawDocument {
    fn into_document(self) -> Result<Document, FirestoreError> {
        let id = document_id(&self.name)?;
        Ok(Document::new(id, decode_fields(&self.fields)?))
    }
}

fn document_id(name: &str) -> Result<String, FirestoreError> {
    match name.rsplit('/').next() {
        Some(id) if !id.is_empty() => Ok(id.to_string()),
        _ => Err(FirestoreError::Malformed(format!(
            "document name `{}` has no id",
            name
        ))),
    }
}

#[derive(Debug, Clone)]
pub struct FirestoreClient {
    client: Client,
    environment: Environment,
    project_id: String,
    api_key: Option<String>,
}

impl FirestoreClient {
    /// No request timeout is configured: a hung query keeps the view empty
    /// rather than failing it.
    pub fn new(
        environment: Environment,
        project_id: String,
        api_key: Option<String>,
    ) -> Result<Self, FirestoreError> {
        Ok(Self {
            client: ClientBuilder::new().user_agent(USER_AGENT).build()?,
            environment,
            project_id,
            api_key,
        })
    }

    fn collection_url(&self, collection: &str) -> String {
        format!(
            "{}/v1/projects/{}/databases/{}/documents/{}",
            self.environment.firestore_url().trim_end_matches('/'),
            urlencoding::encode(&self.project_id),
            DATABASE,
            urlencoding::encode(collection)
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, FirestoreError> {
        if !response.status().is_success() {
            return Err(FirestoreError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_page(
        &self,
        collection: &str,
        page_token: Option<&str>,
    ) -> Result<ListDocumentsResponse, FirestoreError> {
        let mut query: Vec<(&str, String)> = vec![("pageSize", PAGE_SIZE.to_string())];
        if let Some(token) = page_token {
            query.push(("pageToken", token.to_string()));
        }
        if let Some(key) = &self.api_key {
            query.push(("key", key.clone()));
        }

        let response = self
            .client
            .get(self.collection_url(collection))
            .query(&query)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait::async_trait]
impl DocumentSource for FirestoreClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn list_documents(&self, collection: &str) -> Result<Vec<Document>, FirestoreError> {
        let documents = collect_pages(move |page_token: Option<String>| async move {
            self.get_page(collection, page_token.as_deref()).await
        })
        .await?;

        log::debug!(
            "Read {} documents from collection `{}`",
            documents.len(),
            collection
        );
        Ok(documents)
    }
}

/// Requests pages until no `nextPageToken` remains and concatenates their
/// documents in order. A token the server already handed out ends the read
/// with an error instead of looping.
async fn collect_pages<F, Fut>(mut next_page: F) -> Result<Vec<Document>, FirestoreError>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<ListDocumentsResponse, FirestoreError>>,
{
    let mut documents = Vec::new();
    let mut seen_tokens = HashSet::new();
    let mut page_token: Option<String> = None;

    loop {
        let page = next_page(page_token.take()).await?;
        for raw in page.documents {
            documents.push(raw.into_document()?);
        }
        match page.next_page_token {
            Some(token) if !token.is_empty() => {
                if !seen_tokens.insert(token.clone()) {
                    return Err(FirestoreError::Malformed(format!(
                        "page token `{}` was returned twice",
                        token
                    )));
                }
                page_token = Some(token);
            }
            _ => break,
        }
    }
    Ok(documents)
}

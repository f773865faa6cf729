//! Fetch-on-mount
//!
//! Reads both remote collections once, mirrors them into the local store and
//! hands the result to the mounted view. The hand-off goes through a one-shot
//! channel guarded by a cancellation token: once the view unmounts, a late
//! result is dropped without touching the view or the store.

use super::core::EventSender;
use crate::consts::cli_consts::{collections, storage_keys};
use crate::error_classifier::ErrorClassifier;
use crate::events::EventType;
use crate::firestore::error::FirestoreError;
use crate::firestore::{Document, DocumentSource};
use crate::logging::LogLevel;
use crate::model::{Certificate, Project};
use crate::store::{LocalStore, StoreError};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Either remote query failed. Caught and logged at the fetch boundary.
#[derive(Error, Debug)]
#[error("Failed to fetch collection `{collection}`: {source}")]
pub struct DataFetchError {
    pub collection: &'static str,
    #[source]
    pub source: FirestoreError,
}

impl DataFetchError {
    pub fn new(collection: &'static str, source: FirestoreError) -> Self {
        Self { collection, source }
    }
}

/// Both collections as delivered to the view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortfolioData {
    pub projects: Vec<Project>,
    pub certificates: Vec<Certificate>,
}

/// Builds a project from its document: the document id, every field of the
/// document, and a `TechStack` that is never missing. A data field named `id`
/// is overridden by the document id.
pub fn normalize_project(document: Document) -> Result<Project, FirestoreError> {
    let Document { id, mut fields } = document;
    fields.insert("id".to_string(), Value::String(id));
    Ok(serde_json::from_value(Value::Object(fields))?)
}

pub fn to_certificate(document: Document) -> Result<Certificate, FirestoreError> {
    Ok(serde_json::from_value(Value::Object(document.fields))?)
}

async fn read_collection<T>(
    source: &dyn DocumentSource,
    collection: &'static str,
    convert: fn(Document) -> Result<T, FirestoreError>,
) -> Result<Vec<T>, DataFetchError> {
    let documents = source
        .list_documents(collection)
        .await
        .map_err(|e| DataFetchError::new(collection, e))?;
    documents
        .into_iter()
        .map(convert)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| DataFetchError::new(collection, e))
}

/// Queries both collections concurrently.
pub async fn fetch_portfolio(source: &dyn DocumentSource) -> Result<PortfolioData, DataFetchError> {
    let (projects, certificates) = futures::future::try_join(
        read_collection(source, collections::PROJECTS, normalize_project),
        read_collection(source, collections::CERTIFICATES, to_certificate),
    )
    .await?;
    Ok(PortfolioData {
        projects,
        certificates,
    })
}

/// Overwrites the `projects` and `certificates` entries with JSON arrays.
pub fn persist_portfolio(store: &LocalStore, data: &PortfolioData) -> Result<(), StoreError> {
    store.set(storage_keys::PROJECTS, serde_json::to_string(&data.projects)?)?;
    store.set(
        storage_keys::CERTIFICATES,
        serde_json::to_string(&data.certificates)?,
    )?;
    Ok(())
}

/// State of a fetch as seen from the view.
#[derive(Debug, PartialEq)]
pub enum FetchPoll {
    /// Still running.
    Pending,
    /// Succeeded; the data is handed over exactly once.
    Ready(PortfolioData),
    /// Ended without data (failed or cancelled).
    Finished,
}

/// The fetch owned by a mounted view.
#[derive(Debug)]
pub struct MountedFetch {
    receiver: oneshot::Receiver<PortfolioData>,
    cancel: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl MountedFetch {
    pub fn poll(&mut self) -> FetchPoll {
        match self.receiver.try_recv() {
            Ok(data) => FetchPoll::Ready(data),
            Err(TryRecvError::Empty) => FetchPoll::Pending,
            Err(TryRecvError::Closed) => FetchPoll::Finished,
        }
    }

    /// Stops the fetch; any result still in flight is discarded.
    pub fn cancel(&mut self) {
        self.cancel.cancel();
        self.receiver.close();
    }

    /// Waits for the background task to end, whatever its outcome.
    pub async fn finished(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

/// Starts the one-time fetch for a freshly mounted view.
pub fn spawn_initial_fetch(
    source: Arc<dyn DocumentSource>,
    store: LocalStore,
    events: EventSender,
) -> MountedFetch {
    let (sender, receiver) = oneshot::channel();
    let cancel = CancellationToken::new();
    let token = cancel.clone();
    let handle = tokio::spawn(async move {
        run_initial_fetch(source.as_ref(), &store, &events, sender, token).await;
    });
    MountedFetch {
        receiver,
        cancel,
        handle: Some(handle),
    }
}

async fn run_initial_fetch(
    source: &dyn DocumentSource,
    store: &LocalStore,
    events: &EventSender,
    sender: oneshot::Sender<PortfolioData>,
    cancel: CancellationToken,
) {
    events
        .send_fetch_event(
            format!(
                "Fetching {} and {}...",
                collections::PROJECTS,
                collections::CERTIFICATES
            ),
            EventType::Refresh,
            LogLevel::Info,
        )
        .await;

    let result = tokio::select! {
        _ = cancel.cancelled() => {
            log::debug!("View unmounted before the fetch completed");
            return;
        }
        result = fetch_portfolio(source) => result,
    };

    let data = match result {
        Ok(data) => data,
        Err(e) => {
            let level = ErrorClassifier::new().classify_fetch_error(&e);
            let record_level: log::Level = level.into();
            // Diagnostic log only; the view keeps its lists and shows no error.
            log::log!(record_level, "Error fetching portfolio data: {}", e);
            return;
        }
    };

    if cancel.is_cancelled() || sender.is_closed() {
        log::debug!("View unmounted; discarding fetched portfolio data");
        return;
    }

    let summary = format!(
        "Fetched {} projects and {} certificates",
        data.projects.len(),
        data.certificates.len()
    );
    log::info!("{}", summary);

    match persist_portfolio(store, &data) {
        Ok(()) => {
            events
                .send_store_event(
                    "Saved projects and certificates to local storage".to_string(),
                    EventType::Success,
                    LogLevel::Info,
                )
                .await;
        }
        Err(e) => log::warn!("Failed to write local storage: {}", e),
    }

    if sender.send(data).is_err() {
        log::debug!("View unmounted while saving; fetched data not applied");
        return;
    }
    events
        .send_fetch_event(summary, EventType::Success, LogLevel::Info)
        .await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use crate::events::Event;
    use crate::firestore::MockDocumentSource;
    use serde_json::{Map, json};
    use std::time::Duration;
    use tempfile::tempdir;
    use tokio::sync::mpsc;

    fn project_document(n: usize) -> Document {
        let fields = json!({
            "Img": format!("https://img/{}.png", n),
            "Title": format!("Project {}", n),
            "Description": "A project",
            "Link": format!("https://example.com/{}", n),
        });
        Document::new(format!("p{}", n), fields.as_object().unwrap().clone())
    }

    fn certificate_document(n: usize) -> Document {
        let fields = json!({ "Img": format!("https://img/cert-{}.png", n) });
        Document::new(format!("c{}", n), fields.as_object().unwrap().clone())
    }

    fn source_with(projects: usize, certificates: usize) -> MockDocumentSource {
        let mut source = MockDocumentSource::new();
        source
            .expect_list_documents()
            .times(2)
            .returning(move |collection| match collection {
                "projects" => Ok((1..=projects).map(project_document).collect()),
                "certificates" => Ok((1..=certificates).map(certificate_document).collect()),
                other => panic!("unexpected collection {}", other),
            });
        source
    }

    fn failing_source() -> MockDocumentSource {
        let mut source = MockDocumentSource::new();
        source
            .expect_list_documents()
            .returning(|collection| match collection {
                "projects" => Ok(vec![project_document(1)]),
                _ => Err(FirestoreError::Http {
                    status: 403,
                    message: "Missing or insufficient permissions.".to_string(),
                }),
            });
        source
    }

    /// A source that answers only after a delay.
    struct SlowSource {
        delay: Duration,
        environment: Environment,
    }

    #[async_trait::async_trait]
    impl DocumentSource for SlowSource {
        fn environment(&self) -> &Environment {
            &self.environment
        }

        async fn list_documents(&self, _collection: &str) -> Result<Vec<Document>, FirestoreError> {
            tokio::time::sleep(self.delay).await;
            Ok(vec![project_document(1)])
        }
    }

    fn events() -> (EventSender, mpsc::Receiver<Event>) {
        let (sender, receiver) = mpsc::channel(16);
        (EventSender::new(sender), receiver)
    }

    #[test]
    fn test_normalize_project_defaults_tech_stack() {
        let project = normalize_project(project_document(1)).unwrap();
        assert_eq!(project.id, "p1");
        assert_eq!(project.title, "Project 1");
        assert!(project.tech_stack.is_empty());
    }

    #[test]
    fn test_document_id_wins_over_id_field() {
        let mut fields = Map::new();
        fields.insert("id".to_string(), json!("stale"));
        let project = normalize_project(Document::new("doc-id", fields)).unwrap();
        assert_eq!(project.id, "doc-id");
    }

    #[tokio::test]
    // Mistyped fields are coerced instead of failing the whole collection.
    async fn test_mistyped_fields_keep_the_document() {
        let mut source = MockDocumentSource::new();
        source
            .expect_list_documents()
            .returning(|collection| match collection {
                "projects" => {
                    let fields = json!({ "Title": 2024, "TechStack": "" });
                    Ok(vec![
                        Document::new("odd", fields.as_object().unwrap().clone()),
                        project_document(2),
                    ])
                }
                _ => Ok(vec![certificate_document(1)]),
            });

        let data = fetch_portfolio(&source).await.unwrap();
        assert_eq!(data.projects.len(), 2);
        assert_eq!(data.projects[0].title, "2024");
        assert!(data.projects[0].tech_stack.is_empty());
    }

    #[test]
    fn test_certificate_has_no_id() {
        let certificate = to_certificate(certificate_document(2)).unwrap();
        assert_eq!(certificate.img, "https://img/cert-2.png");
        assert!(!certificate.extra.contains_key("id"));
    }

    #[tokio::test]
    async fn test_fetch_portfolio_reads_both_collections() {
        let source = source_with(8, 3);
        let data = fetch_portfolio(&source).await.unwrap();
        assert_eq!(data.projects.len(), 8);
        assert_eq!(data.certificates.len(), 3);
        assert_eq!(data.projects[7].id, "p8");
    }

    #[tokio::test]
    async fn test_fetch_error_names_collection() {
        let err = fetch_portfolio(&failing_source()).await.unwrap_err();
        assert_eq!(err.collection, "certificates");
        assert!(matches!(err.source, FirestoreError::Http { status: 403, .. }));
    }

    #[tokio::test]
    async fn test_fetch_persists_and_delivers() {
        let dir = tempdir().unwrap();
        let store = LocalStore::open(dir.path().join("local_storage.json"));
        let (events, mut event_receiver) = events();

        let mut fetch = spawn_initial_fetch(Arc::new(source_with(8, 3)), store.clone(), events);
        fetch.finished().await;

        match fetch.poll() {
            FetchPoll::Ready(data) => {
                assert_eq!(data.projects.len(), 8);
                assert_eq!(data.certificates.len(), 3);
            }
            other => panic!("expected data, got {:?}", other),
        }

        let stored: Vec<Project> =
            serde_json::from_str(&store.get("projects").unwrap().unwrap()).unwrap();
        assert_eq!(stored.len(), 8);
        let raw: Value = serde_json::from_str(&store.get("projects").unwrap().unwrap()).unwrap();
        assert_eq!(raw[0]["TechStack"], json!([]));

        let mut saw_success = false;
        while let Ok(event) = event_receiver.try_recv() {
            if event.event_type == EventType::Success && event.msg.contains("8 projects") {
                saw_success = true;
            }
        }
        assert!(saw_success);
    }

    #[tokio::test]
    async fn test_empty_collections_store_empty_arrays() {
        let dir = tempdir().unwrap();
        let store = LocalStore::open(dir.path().join("local_storage.json"));
        let (events, _event_receiver) = events();

        let mut fetch = spawn_initial_fetch(Arc::new(source_with(0, 0)), store.clone(), events);
        fetch.finished().await;

        assert_eq!(fetch.poll(), FetchPoll::Ready(PortfolioData::default()));
        assert_eq!(store.get("projects").unwrap(), Some("[]".to_string()));
        assert_eq!(store.get("certificates").unwrap(), Some("[]".to_string()));
    }

    #[tokio::test]
    async fn test_failure_is_swallowed_without_events() {
        let dir = tempdir().unwrap();
        let store = LocalStore::open(dir.path().join("local_storage.json"));
        store.set("projects", "[\"previous\"]".to_string()).unwrap();
        let (events, mut event_receiver) = events();

        let mut fetch = spawn_initial_fetch(Arc::new(failing_source()), store.clone(), events);
        fetch.finished().await;

        assert_eq!(fetch.poll(), FetchPoll::Finished);
        assert_eq!(
            store.get("projects").unwrap(),
            Some("[\"previous\"]".to_string())
        );

        // Only the start of the fetch reaches the activity log.
        let mut kinds = Vec::new();
        while let Ok(event) = event_receiver.try_recv() {
            kinds.push(event.event_type);
        }
        assert_eq!(kinds, [EventType::Refresh]);
    }

    #[tokio::test]
    async fn test_cancelled_fetch_is_discarded() {
        let dir = tempdir().unwrap();
        let store = LocalStore::open(dir.path().join("local_storage.json"));
        let (events, _event_receiver) = events();
        let source = SlowSource {
            delay: Duration::from_millis(200),
            environment: Environment::Production,
        };

        let mut fetch = spawn_initial_fetch(Arc::new(source), store.clone(), events);
        fetch.cancel();
        fetch.finished().await;

        assert_eq!(fetch.poll(), FetchPoll::Finished);
        assert!(store.entries().unwrap().is_empty());
    }
}

//! Session setup and initialization

use crate::config::Config;
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::environment::Environment;
use crate::events::Event;
use crate::firestore::{DocumentSource, FirestoreClient};
use crate::store::LocalStore;
use crate::workers::EventSender;
use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// Remote collections read when the view mounts
    pub source: Arc<dyn DocumentSource>,
    /// Local persistent store the collections are mirrored into
    pub store: LocalStore,
    /// Sender handed to background tasks
    pub event_sender: EventSender,
    /// Event receiver for background events
    pub event_receiver: mpsc::Receiver<Event>,
    /// Google Cloud project being read
    pub project_id: String,
}

/// Sets up a session
///
/// This function handles the setup shared by TUI and headless modes:
/// 1. Creates the Firestore client for the configured project
/// 2. Opens the local persistent store
/// 3. Creates the event channel
pub fn setup_session(
    config: Config,
    env: Environment,
    store_path: PathBuf,
) -> Result<SessionData, Box<dyn Error>> {
    log::info!(
        "Reading portfolio of project {} from {}",
        config.project_id,
        env.firestore_url()
    );
    let client = FirestoreClient::new(env, config.project_id.clone(), config.api_key)?;
    let (sender, event_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);

    Ok(SessionData {
        source: Arc::new(client),
        store: LocalStore::open(store_path),
        event_sender: EventSender::new(sender),
        event_receiver,
        project_id: config.project_id,
    })
}

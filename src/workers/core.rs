//! Core worker utilities

use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use tokio::sync::mpsc;

/// Common event sending utilities for workers
#[derive(Clone, Debug)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Send a generic event. Dropped silently once the receiving side is gone.
    pub async fn send_event(&self, event: Event) {
        let _ = self.sender.send(event).await;
    }

    pub async fn send_fetch_event(&self, message: String, event_type: EventType, log_level: LogLevel) {
        self.send_event(Event::fetcher_with_level(message, event_type, log_level))
            .await;
    }

    pub async fn send_store_event(&self, message: String, event_type: EventType, log_level: LogLevel) {
        self.send_event(Event::store_with_level(message, event_type, log_level))
            .await;
    }
}

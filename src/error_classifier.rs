use crate::firestore::error::FirestoreError;
use crate::logging::LogLevel;
use crate::workers::fetcher::DataFetchError;

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_fetch_error(&self, error: &DataFetchError) -> LogLevel {
        match &error.source {
            // Non-critical: rate limiting
            FirestoreError::Http { status, .. } if *status == 429 => LogLevel::Debug,

            // Temporary server issues
            FirestoreError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Critical: security rules, bad project, malformed data
            FirestoreError::Http { status, .. } if *status == 401 || *status == 403 => {
                LogLevel::Error
            }
            FirestoreError::Http { status, .. } if *status == 404 => LogLevel::Error,
            FirestoreError::Decode(_) | FirestoreError::Malformed(_) => LogLevel::Error,

            // Network issues - usually temporary
            _ => LogLevel::Warn,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}

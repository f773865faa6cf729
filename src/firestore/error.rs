//! Error handling for the firestore module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FirestoreError {
    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// The response body was not the JSON we expected.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The response decoded but a document or value in it was not well-formed.
    #[error("Malformed document: {0}")]
    Malformed(String),
}

impl FirestoreError {
    pub async fn from_response(response: reqwest::Response) -> FirestoreError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        FirestoreError::Http { status, message }
    }
}

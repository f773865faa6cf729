use crate::consts::cli_consts::firestore::{EMULATOR_HOST_VAR, PRODUCTION_URL};
use std::fmt::{Debug, Display, Formatter};

/// Represents the Firestore endpoint the portfolio reads from.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// The public Firestore REST endpoint.
    #[default]
    Production,
    /// Any other endpoint, typically a local emulator.
    Custom { firestore_url: String },
}

impl Environment {
    /// Resolves the environment from `FIRESTORE_EMULATOR_HOST`, falling back to production.
    pub fn from_env() -> Self {
        match std::env::var(EMULATOR_HOST_VAR) {
            Ok(host) if !host.trim().is_empty() => Self::emulator(host.trim()),
            _ => Environment::Production,
        }
    }

    /// An emulator listening on `host` (e.g. `localhost:8080`).
    pub fn emulator(host: &str) -> Self {
        let firestore_url = if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("http://{}", host)
        };
        Environment::Custom { firestore_url }
    }

    /// Returns the Firestore base URL associated with the environment.
    pub fn firestore_url(&self) -> String {
        match self {
            Environment::Production => PRODUCTION_URL.to_string(),
            Environment::Custom { firestore_url } => firestore_url.clone(),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "Production"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.firestore_url())
    }
}

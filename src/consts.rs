pub mod cli_consts {
    //! Portfolio Configuration Constants
    //!
    //! This module contains the configuration constants for the portfolio view,
    //! organized by functional area for clarity and maintainability.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum number of buffered events between background tasks and the UI
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // DATA SOURCE CONFIGURATION
    // =============================================================================

    /// Remote collections read on mount
    pub mod collections {
        /// Collection holding one document per project
        pub const PROJECTS: &str = "projects";
        /// Collection holding one document per certificate
        pub const CERTIFICATES: &str = "certificates";
    }

    /// Keys of the local persistent store written after each successful fetch
    pub mod storage_keys {
        pub const PROJECTS: &str = "projects";
        pub const CERTIFICATES: &str = "certificates";
    }

    /// Firestore REST configuration
    pub mod firestore {
        /// Public Firestore REST endpoint
        pub const PRODUCTION_URL: &str = "https://firestore.googleapis.com";

        /// Database queried inside the project
        pub const DATABASE: &str = "(default)";

        /// Documents requested per page; pages are followed until exhausted
        pub const PAGE_SIZE: u32 = 300;

        /// Environment variable pointing at a local Firestore emulator (host:port)
        pub const EMULATOR_HOST_VAR: &str = "FIRESTORE_EMULATOR_HOST";
    }

    // =============================================================================
    // VIEW CONFIGURATION
    // =============================================================================

    /// Pagination of the project and certificate panels
    pub mod pagination {
        /// Number of entries shown while a list is collapsed
        pub const TRUNCATED_LEN: usize = 6;
    }

    /// Card grid layout
    pub mod layout {
        pub const PROJECT_COLUMNS: usize = 3;
        pub const PROJECT_CARD_HEIGHT: u16 = 7;

        pub const CERTIFICATE_COLUMNS: usize = 3;
        pub const CERTIFICATE_CARD_HEIGHT: u16 = 4;

        pub const TECH_STACK_COLUMNS: usize = 4;
        pub const TECH_ICON_HEIGHT: u16 = 4;
    }

    /// Splash screen duration (milliseconds)
    pub const SPLASH_DURATION_MS: u64 = 1500;

    /// Interval between key polls in the UI loop (milliseconds)
    pub const UI_POLL_INTERVAL_MS: u64 = 100;
}

//! Background work driven by the portfolio view

pub mod core;
pub mod fetcher;

pub use self::core::EventSender;
pub use fetcher::{MountedFetch, PortfolioData, spawn_initial_fetch};

//! Portfolio view: state, renderer and presentation components

pub mod components;
pub mod renderer;
pub mod state;
pub mod utils;

// Re-export main types and functions for external use
pub use renderer::render_portfolio;
pub use state::{PortfolioView, Tab, ViewAction};

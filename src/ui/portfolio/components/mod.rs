//! Portfolio view components
//!
//! Individual UI components for the portfolio screen

pub mod cards;
pub mod footer;
pub mod header;
pub mod logs;
pub mod panels;
pub mod tabs;
pub mod toggle;

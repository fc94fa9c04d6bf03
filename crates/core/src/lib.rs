//! # Hostel Desk Core
//!
//! Core types, traits, and error handling for Hostel Desk.
//!
//! This crate provides the foundational building blocks used throughout
//! the Hostel Desk workspace, including:
//!
//! - **Types**: Record ids and select-option projections
//! - **Traits**: Common behaviors like `Resource` and `Validatable`
//! - **Errors**: Unified error handling with `DeskError` and `DeskResult`
//!

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{DeskError, DeskResult, ResultExt};
pub use traits::{Resource, Validatable};
pub use types::{RecordId, RefOption};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

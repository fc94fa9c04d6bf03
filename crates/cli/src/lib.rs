//! # Hostel Desk CLI
//!
//! Command-line interface for the hostel-management backend, sharing the
//! client and session store with the desktop app.
//!
//! ## Commands
//!
//! - `login` - sign in and store the session
//! - `logout` - drop the stored session
//! - `whoami` - show the signed-in account
//! - `list` - print a resource collection
//! - `export-payments` - write the payments CSV

// Re-export dependencies for use in main.rs
pub use hosteldesk_client;
pub use hosteldesk_core;
pub use hosteldesk_desk;
pub use hosteldesk_model;

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI name
pub const NAME: &str = env!("CARGO_PKG_NAME");

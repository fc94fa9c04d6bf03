//! # Hostel Desk Client
//!
//! REST client for the hostel-management backend.
//!
//! This crate owns everything between the typed models and the wire:
//!
//! - **[`ApiClient`]**: login plus the four CRUD verbs, with the bearer
//!   token attached from an explicitly passed [`Session`]
//! - **[`Session`] / [`SessionStore`]**: the signed-in user and its JSON
//!   store under the platform config dir
//! - **[`ClientConfig`]**: base URL and timeout from `hosteldesk.toml`
//!   with an environment override
//!

pub mod client;
pub mod config;
pub mod session;

pub use client::ApiClient;
pub use config::{API_URL_ENV, CONFIG_FILE, ClientConfig};
pub use session::{Session, SessionStore};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

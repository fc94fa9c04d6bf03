//! Page Components for Hostel Desk
//!
//! This module contains all the page/view components for the application.
//!
//! ## Available Pages
//!
//! - **LoginPage**: sign-in form, the only page without a session
//! - **DashboardPage**: landing page with shortcuts to every entity page
//! - **ResourcePage**: the generic CRUD page, instantiated per entity
//!   kind from its page descriptor

pub mod dashboard;
pub mod login;
pub mod resource;

// Re-export page components for convenience
pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use resource::ResourcePage;

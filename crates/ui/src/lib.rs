//! # Hostel Desk UI
//!
//! Dioxus Desktop UI for the Hostel Desk admin console.
//!
//! This crate renders the login gate, the sidebar navigation, and the
//! generic resource page that every entity (hostels, beds, residents,
//! fees, ...) is an instance of. All list/form/dispatch logic lives in
//! `hosteldesk_desk`; this crate only binds it to components.

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod pages;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

// Re-export internal crates for convenience
pub use hosteldesk_client;
pub use hosteldesk_core;
pub use hosteldesk_desk;
pub use hosteldesk_model;

// Re-export main components
pub use app::App;
pub use pages::{DashboardPage, LoginPage, ResourcePage};
pub use state::{APP_STATE, AppState, Page, StatusLevel, StatusMessage, UiState, init_app_state};

// Re-export components
pub use components::{
    ConfirmDeleteDialog, RecordFormDialog, Select, SelectOption, TextArea, TextInput, Toggle,
};

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Hostel Desk";

/// Application display title
pub const TITLE: &str = "Hostel Desk - Admin Console";

/// Base CSS applied before the utility classes load
const BASE_STYLES: &str = include_str!("../assets/base.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the Hostel Desk desktop application
///
/// This is the main entry point for the Dioxus desktop app.
/// It initializes the application state and starts the UI.
///
/// # Example
///
/// ```rust,ignore
/// fn main() {
///     hosteldesk_ui::launch();
/// }
/// ```
pub fn launch() {
    tracing::info!("Starting {} v{}", NAME, VERSION);

    init_app_state();

    // Utility classes come from the Tailwind runtime; the embedded base
    // sheet keeps the window presentable before it loads
    let custom_head = format!(
        r#"<style type="text/css">{BASE_STYLES}</style>
<script src="https://cdn.tailwindcss.com"></script>"#
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(TITLE)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 860.0))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(800.0, 600.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .launch(App);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "Hostel Desk");
    }

    #[test]
    fn test_base_styles_loaded() {
        assert!(BASE_STYLES.contains("font-family"));
    }
}

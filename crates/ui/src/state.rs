//! Application State Management for Hostel Desk
//!
//! This module provides centralized state management using Dioxus 0.7
//! Signals: the signed-in session, the active page, a pending deep-link
//! filter, and the status bar. Per-page data (rows, filters, open
//! dialogs) deliberately lives inside each page component - pages own
//! their view state exclusively and share only the transport client and
//! the session.

use dioxus::prelude::*;
use hosteldesk_client::{ApiClient, ClientConfig, Session, SessionStore};
use hosteldesk_desk::PageKind;
use std::path::PathBuf;

// ============================================================================
// Page Navigation
// ============================================================================

/// Application pages/views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Overview with shortcuts to every entity page
    #[default]
    Dashboard,
    /// One of the entity CRUD pages
    Resource(PageKind),
}

impl Page {
    /// Get the display name for this page
    pub fn display_name(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Resource(kind) => hosteldesk_desk::descriptor(*kind).title,
        }
    }
}

// ============================================================================
// Status Bar
// ============================================================================

/// Status message severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Status message for the status bar
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

// ============================================================================
// UI State
// ============================================================================

/// General UI state (navigation, status bar)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    /// Currently active page
    pub active_page: Page,
    /// A foreign-key filter carried into the next page activation
    /// (the desktop stand-in for `?hostelId=...` deep links)
    pub pending_filter: Option<(String, String)>,
    /// Status bar message
    pub status_message: Option<StatusMessage>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigate to a page, dropping any pending deep-link filter
    pub fn navigate(&mut self, page: Page) {
        self.active_page = page;
        self.pending_filter = None;
    }

    /// Navigate to an entity page scoped by a foreign key
    /// (e.g. a hostel card's "Rooms" action)
    pub fn navigate_filtered(
        &mut self,
        kind: PageKind,
        field: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.active_page = Page::Resource(kind);
        self.pending_filter = Some((field.into(), value.into()));
    }

    /// Take the pending filter, leaving none behind
    pub fn take_pending_filter(&mut self) -> Option<(String, String)> {
        self.pending_filter.take()
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>, level: StatusLevel) {
        self.status_message = Some(StatusMessage {
            text: message.into(),
            level,
        });
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

// ============================================================================
// Application State
// ============================================================================

/// Main application state container
#[derive(Debug, Clone)]
pub struct AppState {
    /// Shared transport client
    pub client: ApiClient,
    /// On-disk session store
    pub store: SessionStore,
    /// The signed-in session; `None` keeps the user on the login page
    pub session: Option<Session>,
    /// UI state
    pub ui: UiState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create new application state, restoring any stored session
    pub fn new() -> Self {
        let config = ClientConfig::load();
        let client = ApiClient::new(&config);
        let store = SessionStore::new()
            .unwrap_or_else(|_| SessionStore::at(PathBuf::from(".hosteldesk-session.json")));
        let session = store.load();
        Self {
            client,
            store,
            session,
            ui: UiState::new(),
        }
    }

    /// Whether someone is signed in
    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// Name shown in the toolbar
    pub fn account_name(&self) -> String {
        self.session
            .as_ref()
            .map(|s| s.display_name().to_string())
            .unwrap_or_default()
    }

    /// Adopt a fresh session after login and persist it
    pub fn sign_in(&mut self, session: Session) {
        if let Err(e) = self.store.save(&session) {
            tracing::warn!("session not persisted: {e}");
        }
        let name = session.display_name().to_string();
        self.session = Some(session);
        self.ui.navigate(Page::Dashboard);
        self.ui
            .set_status(format!("Signed in as {name}"), StatusLevel::Success);
    }

    /// Drop the session and its stored copy
    pub fn sign_out(&mut self) {
        if let Err(e) = self.store.clear() {
            tracing::warn!("session store not cleared: {e}");
        }
        self.session = None;
        self.ui = UiState::new();
    }
}

/// The global application state
pub static APP_STATE: GlobalSignal<AppState> = Signal::global(AppState::new);

/// Initialize the application state.
///
/// State is created lazily by `Signal::global`; this keeps a hook for
/// anything that must happen before the first render.
pub fn init_app_state() {
    tracing::debug!("application state ready");
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_clears_pending_filter() {
        let mut ui = UiState::new();
        ui.navigate_filtered(PageKind::Rooms, "hostelId", "h-1");
        assert_eq!(ui.active_page, Page::Resource(PageKind::Rooms));
        assert!(ui.pending_filter.is_some());

        ui.navigate(Page::Resource(PageKind::Beds));
        assert!(ui.pending_filter.is_none());
    }

    #[test]
    fn test_pending_filter_is_consumed_once() {
        let mut ui = UiState::new();
        ui.navigate_filtered(PageKind::Beds, "roomId", "r-1");
        assert_eq!(
            ui.take_pending_filter(),
            Some(("roomId".to_string(), "r-1".to_string()))
        );
        assert_eq!(ui.take_pending_filter(), None);
    }

    #[test]
    fn test_status_messages() {
        let mut ui = UiState::new();
        ui.set_status("Saved", StatusLevel::Success);
        assert_eq!(ui.status_message.as_ref().unwrap().text, "Saved");
        ui.clear_status();
        assert!(ui.status_message.is_none());
    }

    #[test]
    fn test_page_display_names() {
        assert_eq!(Page::Dashboard.display_name(), "Dashboard");
        assert_eq!(
            Page::Resource(PageKind::Beds).display_name(),
            "Bed Inventory"
        );
    }
}

//! # Dialog Components
//!
//! Modal dialogs for the Hostel Desk UI.
//!
//! - **RecordFormDialog**: the schema-driven create/edit modal shared by
//!   every entity page
//! - **ConfirmDeleteDialog**: confirmation gate for destructive actions
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hosteldesk_ui::components::dialogs::{ConfirmDeleteDialog, RecordFormDialog};
//!
//! rsx! {
//!     RecordFormDialog { draft, refs, on_save, on_cancel }
//!     ConfirmDeleteDialog { entity: "Bed", item: "B-101", on_confirm, on_cancel }
//! }
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod confirm_delete;
pub mod record_form;

// ============================================================================
// Re-exports
// ============================================================================

pub use confirm_delete::ConfirmDeleteDialog;
pub use record_form::RecordFormDialog;

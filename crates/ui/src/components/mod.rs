//! # UI Components
//!
//! Reusable Dioxus components for the Hostel Desk console.
//!
//! - **Inputs**: form input components (text, select, toggle, ...)
//! - **Dialogs**: the record form modal and the delete confirmation
//!
//! ## Component Hierarchy
//!
//! ```text
//! ResourcePage
//! ├── TextInput (search box)
//! ├── record table (rendered inline from the page descriptor)
//! ├── RecordFormDialog
//! │   ├── TextInput / TextArea / Select / Toggle (per schema field)
//! │   └── ...
//! └── ConfirmDeleteDialog
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod dialogs;
pub mod inputs;

// ============================================================================
// Re-exports
// ============================================================================

// Input components
pub use inputs::{Select, SelectOption, TextArea, TextInput, Toggle};

// Dialog components
pub use dialogs::{ConfirmDeleteDialog, RecordFormDialog};

//! # Hostel Desk Controllers
//!
//! The headless half of every entity page. Each page in the UI is the
//! same machine instantiated with different data:
//!
//! - **[`descriptor`]**: the per-page configuration (collection, columns,
//!   reference lists, search field, form schema)
//! - **[`loader`]**: concurrent list loading with all-or-nothing apply
//!   and a generation guard against stale responses
//! - **[`view`]**: the filtered projection a page renders (foreign-key
//!   filters from deep links plus free-text search)
//! - **[`schema`] / [`catalog`] / [`draft`] / [`options`]**: schema-driven
//!   modal forms, dependent-select clearing and narrowing
//! - **[`dispatch`]**: create-vs-update decision, confirm-gated delete,
//!   and the row-level quick actions (fee toggle, leave approval,
//!   visitor check-out)
//! - **[`export`]**: the payments CSV byte format
//!
//! Nothing in this crate touches a UI framework; everything is unit
//! testable against plain data.

pub mod catalog;
pub mod descriptor;
pub mod dispatch;
pub mod draft;
pub mod export;
pub mod loader;
pub mod options;
pub mod schema;
pub mod view;

// Re-export commonly used types at crate root
pub use descriptor::{Column, PageDescriptor, PageKind, descriptor};
pub use dispatch::{
    MutationPlan, check_out_visitor, delete_confirmed, plan, set_leave_status, submit,
    toggle_fee_status,
};
pub use draft::{Draft, FormMode};
pub use export::{export_file_name, payments_csv, write_payments_csv};
pub use loader::{LoadGuard, LoadTicket, PageData, fetch_ref_options, fetch_rows, load_page};
pub use options::{RefSets, select_options};
pub use schema::{
    DefaultValue, DependentRule, FieldFormat, FieldKind, FieldSpec, FormSchema, OptionSource,
};
pub use view::{FkFilter, ListView, field_text};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

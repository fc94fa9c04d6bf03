//! # Hostel Desk Model
//!
//! Typed records for every resource the hostel-management backend serves.
//! Field names mirror the wire format (`camelCase`) exactly; enums mirror
//! the backend's `SCREAMING_SNAKE_CASE` status strings.
//!
//! ## Core Concepts
//!
//! - **Record**: a flat entity with a backend-minted string id and a small
//!   set of scalar fields (e.g. [`Bed`], [`Resident`], [`Fee`])
//! - **Embedded snapshot**: a denormalized `*Brief` struct included in read
//!   responses for display (`Bed.room.roomNo`), never editable on its own
//! - **Status enum**: a closed set of workflow states with a fixed wire
//!   spelling ([`BedStatus`], [`FeeStatus`], [`LeaveStatus`], ...)
//!
//! Every record implements [`hosteldesk_core::Resource`] (collection path,
//! id, search text, foreign keys, select-option projection) and
//! [`hosteldesk_core::Validatable`] (the client-side required-field rules).

// Module declarations
pub mod amenities;
pub mod billing;
pub mod housing;
pub mod people;
pub mod welfare;
pub(crate) mod wire;

// Re-export commonly used types at crate root
pub use amenities::{DayType, Facility, FoodMenu, HostelTiming, MealType, MenuDay};
pub use billing::{Fee, FeeBrief, FeeStatus, Payment, PaymentMethod};
pub use housing::{Bed, BedBrief, BedStatus, Floor, FloorBrief, Hostel, HostelBrief, Room, RoomBrief};
pub use people::{EmergencyContact, Resident, ResidentBrief, ResidentStatus, Staff, User, UserBrief, Visitor};
pub use welfare::{Complaint, ComplaintStatus, Leave, LeaveStatus};
pub use wire::expand_datetime as wire_expand_datetime;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

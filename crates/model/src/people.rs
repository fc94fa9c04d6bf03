//! People records: users, staff assignments, residents, and the
//! resident-scoped logs (emergency contacts, visitors)
//!
//! `User` is a login account; `Staff` ties a user to a hostel with a duty
//! role. `Resident` is the central entity most other pages reference.

use chrono::{DateTime, Utc};
use hosteldesk_core::{DeskError, DeskResult, RecordId, RefOption, Resource, Validatable};
use serde::{Deserialize, Serialize};

use crate::housing::{BedBrief, HostelBrief};
use crate::wire;

// ============================================================================
// User
// ============================================================================

/// A login account on the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: String,
}

impl Resource for User {
    const PATH: &'static str = "users";
    const LABEL: &'static str = "User";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn search_text(&self) -> String {
        self.name.clone()
    }

    fn ref_option(&self) -> RefOption {
        RefOption::new(self.id.clone(), self.name.clone())
    }
}

impl Validatable for User {
    fn validate(&self) -> DeskResult<()> {
        if self.name.trim().is_empty() {
            return Err(DeskError::missing_field("Name"));
        }
        if self.email.trim().is_empty() {
            return Err(DeskError::missing_field("Email"));
        }
        if !self.email.contains('@') {
            return Err(DeskError::field_format("Email", "must contain '@'"));
        }
        Ok(())
    }
}

/// Embedded user snapshot
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBrief {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

// ============================================================================
// Staff
// ============================================================================

/// A duty assignment tying a user to a hostel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: RecordId,
    pub role: String,
    #[serde(default)]
    pub phone: String,
    pub user_id: RecordId,
    pub hostel_id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserBrief>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostel: Option<HostelBrief>,
}

impl Resource for Staff {
    const PATH: &'static str = "staff";
    const LABEL: &'static str = "Staff";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn search_text(&self) -> String {
        // Staff cards lead with the person, fall back to the duty role
        self.user
            .as_ref()
            .map(|u| u.name.clone())
            .unwrap_or_else(|| self.role.clone())
    }

    fn foreign_key(&self, field: &str) -> Option<&RecordId> {
        match field {
            "userId" => Some(&self.user_id),
            "hostelId" => Some(&self.hostel_id),
            _ => None,
        }
    }

    fn ref_option(&self) -> RefOption {
        RefOption::new(self.id.clone(), self.search_text()).with_group(self.hostel_id.clone())
    }
}

impl Validatable for Staff {
    fn validate(&self) -> DeskResult<()> {
        if self.user_id.is_empty() {
            return Err(DeskError::missing_field("User"));
        }
        if self.hostel_id.is_empty() {
            return Err(DeskError::missing_field("Hostel"));
        }
        if self.role.trim().is_empty() {
            return Err(DeskError::missing_field("Role"));
        }
        Ok(())
    }
}

// ============================================================================
// Resident
// ============================================================================

/// Whether a resident currently lives in the hostel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResidentStatus {
    #[default]
    Active,
    Left,
}

impl ResidentStatus {
    pub const ALL: [ResidentStatus; 2] = [ResidentStatus::Active, ResidentStatus::Left];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResidentStatus::Active => "ACTIVE",
            ResidentStatus::Left => "LEFT",
        }
    }
}

impl std::fmt::Display for ResidentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A person living in a hostel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resident {
    pub id: RecordId,
    pub full_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub status: ResidentStatus,
    pub hostel_id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bed_id: Option<RecordId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostel: Option<HostelBrief>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bed: Option<BedBrief>,
}

impl Resource for Resident {
    const PATH: &'static str = "residents";
    const LABEL: &'static str = "Resident";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn search_text(&self) -> String {
        self.full_name.clone()
    }

    fn foreign_key(&self, field: &str) -> Option<&RecordId> {
        match field {
            "hostelId" => Some(&self.hostel_id),
            "bedId" => self.bed_id.as_ref(),
            _ => None,
        }
    }

    fn ref_option(&self) -> RefOption {
        RefOption::new(self.id.clone(), self.full_name.clone())
            .with_group(self.hostel_id.clone())
            .with_tag(self.status.as_str())
    }
}

impl Validatable for Resident {
    fn validate(&self) -> DeskResult<()> {
        if self.full_name.trim().is_empty() {
            return Err(DeskError::missing_field("Full Name"));
        }
        if self.phone.trim().is_empty() {
            return Err(DeskError::missing_field("Phone"));
        }
        if self.hostel_id.is_empty() {
            return Err(DeskError::missing_field("Hostel"));
        }
        if let Some(email) = &self.email {
            if !email.is_empty() && !email.contains('@') {
                return Err(DeskError::field_format("Email", "must contain '@'"));
            }
        }
        Ok(())
    }
}

/// Embedded resident snapshot
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResidentBrief {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default)]
    pub full_name: String,
}

// ============================================================================
// Emergency Contact
// ============================================================================

/// A resident's emergency contact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContact {
    pub id: RecordId,
    pub resident_id: RecordId,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub relation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resident: Option<ResidentBrief>,
}

impl Resource for EmergencyContact {
    const PATH: &'static str = "emergency";
    const LABEL: &'static str = "Emergency Contact";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn search_text(&self) -> String {
        self.name.clone()
    }

    fn foreign_key(&self, field: &str) -> Option<&RecordId> {
        match field {
            "residentId" => Some(&self.resident_id),
            _ => None,
        }
    }

    fn ref_option(&self) -> RefOption {
        RefOption::new(self.id.clone(), self.name.clone()).with_group(self.resident_id.clone())
    }
}

impl Validatable for EmergencyContact {
    fn validate(&self) -> DeskResult<()> {
        if self.resident_id.is_empty() {
            return Err(DeskError::missing_field("Resident"));
        }
        if self.name.trim().is_empty() {
            return Err(DeskError::missing_field("Name"));
        }
        if self.phone.trim().is_empty() {
            return Err(DeskError::missing_field("Phone"));
        }
        Ok(())
    }
}

// ============================================================================
// Visitor
// ============================================================================

/// A visitor log entry; `out_time` stays empty until check-out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visitor {
    pub id: RecordId,
    pub resident_id: RecordId,
    pub name: String,
    #[serde(default)]
    pub relation: String,
    #[serde(with = "wire::flex_datetime")]
    pub in_time: DateTime<Utc>,
    #[serde(default, with = "wire::flex_datetime_opt")]
    pub out_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resident: Option<ResidentBrief>,
}

impl Visitor {
    /// Still on the premises (no check-out recorded)
    pub fn is_inside(&self) -> bool {
        self.out_time.is_none()
    }
}

impl Resource for Visitor {
    const PATH: &'static str = "visitors";
    const LABEL: &'static str = "Visitor";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn search_text(&self) -> String {
        self.name.clone()
    }

    fn foreign_key(&self, field: &str) -> Option<&RecordId> {
        match field {
            "residentId" => Some(&self.resident_id),
            _ => None,
        }
    }

    fn ref_option(&self) -> RefOption {
        RefOption::new(self.id.clone(), self.name.clone()).with_group(self.resident_id.clone())
    }
}

impl Validatable for Visitor {
    fn validate(&self) -> DeskResult<()> {
        if self.resident_id.is_empty() {
            return Err(DeskError::missing_field("Resident"));
        }
        if self.name.trim().is_empty() {
            return Err(DeskError::missing_field("Name"));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

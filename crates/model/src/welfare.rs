//! Welfare records: complaints and leave requests
//!
//! Both are resident-scoped tickets with a small status workflow driven
//! from the list page (quick status updates) as well as the edit form.

use chrono::NaiveDate;
use hosteldesk_core::{DeskError, DeskResult, RecordId, RefOption, Resource, Validatable};
use serde::{Deserialize, Serialize};

use crate::people::ResidentBrief;
use crate::wire;

// ============================================================================
// Complaint
// ============================================================================

/// Triage state of a complaint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplaintStatus {
    #[default]
    Pending,
    InProgress,
    Resolved,
}

impl ComplaintStatus {
    pub const ALL: [ComplaintStatus; 3] = [
        ComplaintStatus::Pending,
        ComplaintStatus::InProgress,
        ComplaintStatus::Resolved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintStatus::Pending => "PENDING",
            ComplaintStatus::InProgress => "IN_PROGRESS",
            ComplaintStatus::Resolved => "RESOLVED",
        }
    }
}

impl std::fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complaint raised by a resident
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub id: RecordId,
    pub resident_id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: ComplaintStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resident: Option<ResidentBrief>,
}

impl Resource for Complaint {
    const PATH: &'static str = "complaints";
    const LABEL: &'static str = "Complaint";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn search_text(&self) -> String {
        self.title.clone()
    }

    fn foreign_key(&self, field: &str) -> Option<&RecordId> {
        match field {
            "residentId" => Some(&self.resident_id),
            _ => None,
        }
    }

    fn ref_option(&self) -> RefOption {
        RefOption::new(self.id.clone(), self.title.clone()).with_group(self.resident_id.clone())
    }
}

impl Validatable for Complaint {
    fn validate(&self) -> DeskResult<()> {
        if self.resident_id.is_empty() {
            return Err(DeskError::missing_field("Resident"));
        }
        if self.title.trim().is_empty() {
            return Err(DeskError::missing_field("Title"));
        }
        if self.description.trim().is_empty() {
            return Err(DeskError::missing_field("Description"));
        }
        Ok(())
    }
}

// ============================================================================
// Leave
// ============================================================================

/// Approval state of a leave request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub const ALL: [LeaveStatus; 3] = [
        LeaveStatus::Pending,
        LeaveStatus::Approved,
        LeaveStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "PENDING",
            LeaveStatus::Approved => "APPROVED",
            LeaveStatus::Rejected => "REJECTED",
        }
    }
}

impl std::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resident's leave-of-absence request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leave {
    pub id: RecordId,
    pub resident_id: RecordId,
    #[serde(with = "wire::flex_date")]
    pub from_date: NaiveDate,
    #[serde(with = "wire::flex_date")]
    pub to_date: NaiveDate,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub status: LeaveStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resident: Option<ResidentBrief>,
}

impl Leave {
    /// Number of nights away, clamped at zero for degenerate ranges
    pub fn nights(&self) -> i64 {
        (self.to_date - self.from_date).num_days().max(0)
    }
}

impl Resource for Leave {
    const PATH: &'static str = "leaves";
    const LABEL: &'static str = "Leave";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn search_text(&self) -> String {
        self.resident
            .as_ref()
            .map(|r| r.full_name.clone())
            .unwrap_or_else(|| self.reason.clone())
    }

    fn foreign_key(&self, field: &str) -> Option<&RecordId> {
        match field {
            "residentId" => Some(&self.resident_id),
            _ => None,
        }
    }

    fn ref_option(&self) -> RefOption {
        RefOption::new(self.id.clone(), self.from_date.to_string())
            .with_group(self.resident_id.clone())
            .with_tag(self.status.as_str())
    }
}

impl Validatable for Leave {
    fn validate(&self) -> DeskResult<()> {
        if self.resident_id.is_empty() {
            return Err(DeskError::missing_field("Resident"));
        }
        if self.to_date < self.from_date {
            return Err(DeskError::field_format(
                "To Date",
                "must not be before the from date",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_complaint_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&ComplaintStatus::InProgress).unwrap(),
            "\"IN_PROGRESS\""
        );
        let s: ComplaintStatus = serde_json::from_str("\"RESOLVED\"").unwrap();
        assert_eq!(s, ComplaintStatus::Resolved);
    }

    #[test]
    fn test_complaint_requires_description() {
        let c: Complaint = serde_json::from_str(
            r#"{"id":"c","residentId":"r","title":"Leaky tap"}"#,
        )
        .unwrap();
        assert_eq!(c.validation_errors(), vec!["'Description' is required"]);
    }

    #[test]
    fn test_leave_decodes_both_date_shapes() {
        let leave: Leave = serde_json::from_str(
            r#"{"id":"l","residentId":"r","fromDate":"2024-05-01",
                "toDate":"2024-05-04T00:00:00.000Z","reason":"home"}"#,
        )
        .unwrap();
        assert_eq!(leave.nights(), 3);
        assert_eq!(leave.status, LeaveStatus::Pending);
    }

    #[test]
    fn test_leave_rejects_inverted_range() {
        let leave: Leave = serde_json::from_str(
            r#"{"id":"l","residentId":"r","fromDate":"2024-05-04","toDate":"2024-05-01"}"#,
        )
        .unwrap();
        assert!(!leave.is_valid());
        assert_eq!(leave.nights(), 0);
    }
}

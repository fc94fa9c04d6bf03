//! Billing records: monthly fees and the payments settling them
//!
//! A fee is unique per (resident, month, year) on the backend; a payment
//! references both the resident and the fee it settles. Payments embed
//! resident and fee snapshots, which the CSV export and the list page
//! render without extra lookups.

use chrono::{DateTime, Utc};
use hosteldesk_core::{DeskError, DeskResult, RecordId, RefOption, Resource, Validatable};
use serde::{Deserialize, Serialize};

use crate::people::ResidentBrief;
use crate::wire;

// ============================================================================
// Fee
// ============================================================================

/// Settlement state of a fee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeeStatus {
    Paid,
    #[default]
    Unpaid,
}

impl FeeStatus {
    pub const ALL: [FeeStatus; 2] = [FeeStatus::Paid, FeeStatus::Unpaid];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeeStatus::Paid => "PAID",
            FeeStatus::Unpaid => "UNPAID",
        }
    }

    /// The other state, for the quick toggle on the fees page
    pub fn toggled(&self) -> FeeStatus {
        match self {
            FeeStatus::Paid => FeeStatus::Unpaid,
            FeeStatus::Unpaid => FeeStatus::Paid,
        }
    }
}

impl std::fmt::Display for FeeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A monthly fee raised against a resident
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fee {
    pub id: RecordId,
    pub resident_id: RecordId,
    pub month: u32,
    pub year: i32,
    pub amount: f64,
    #[serde(default)]
    pub status: FeeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resident: Option<ResidentBrief>,
}

impl Fee {
    /// `3/2024` period label used in cards and payment selects
    pub fn period(&self) -> String {
        format!("{}/{}", self.month, self.year)
    }
}

impl Resource for Fee {
    const PATH: &'static str = "fees";
    const LABEL: &'static str = "Fee";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn search_text(&self) -> String {
        self.resident
            .as_ref()
            .map(|r| r.full_name.clone())
            .unwrap_or_else(|| self.period())
    }

    fn foreign_key(&self, field: &str) -> Option<&RecordId> {
        match field {
            "residentId" => Some(&self.resident_id),
            _ => None,
        }
    }

    fn ref_option(&self) -> RefOption {
        RefOption::new(
            self.id.clone(),
            format!("Month {}/{} (${})", self.month, self.year, self.amount),
        )
        .with_group(self.resident_id.clone())
        .with_tag(self.status.as_str())
    }
}

impl Validatable for Fee {
    fn validate(&self) -> DeskResult<()> {
        if self.resident_id.is_empty() {
            return Err(DeskError::missing_field("Resident"));
        }
        if !(1..=12).contains(&self.month) {
            return Err(DeskError::field_format("Month", "must be between 1 and 12"));
        }
        if self.amount <= 0.0 {
            return Err(DeskError::field_format("Amount", "must be positive"));
        }
        Ok(())
    }
}

/// Embedded fee snapshot on a payment
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeBrief {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default)]
    pub month: u32,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub amount: f64,
}

impl FeeBrief {
    /// `3/2024` period label
    pub fn period(&self) -> String {
        format!("{}/{}", self.month, self.year)
    }
}

// ============================================================================
// Payment
// ============================================================================

/// How a payment was taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Card,
    Online,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Cash,
        PaymentMethod::Card,
        PaymentMethod::Online,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "CASH",
            PaymentMethod::Card => "CARD",
            PaymentMethod::Online => "ONLINE",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A payment settling (part of) a fee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: RecordId,
    pub resident_id: RecordId,
    pub fee_id: RecordId,
    pub amount: f64,
    #[serde(default)]
    pub method: PaymentMethod,
    #[serde(with = "wire::flex_datetime")]
    pub paid_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resident: Option<ResidentBrief>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<FeeBrief>,
}

impl Resource for Payment {
    const PATH: &'static str = "payments";
    const LABEL: &'static str = "Payment";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn search_text(&self) -> String {
        self.resident
            .as_ref()
            .map(|r| r.full_name.clone())
            .unwrap_or_default()
    }

    fn foreign_key(&self, field: &str) -> Option<&RecordId> {
        match field {
            "residentId" => Some(&self.resident_id),
            "feeId" => Some(&self.fee_id),
            _ => None,
        }
    }

    fn ref_option(&self) -> RefOption {
        RefOption::new(self.id.clone(), format!("${}", self.amount))
            .with_group(self.resident_id.clone())
    }
}

impl Validatable for Payment {
    fn validate(&self) -> DeskResult<()> {
        if self.resident_id.is_empty() {
            return Err(DeskError::missing_field("Resident"));
        }
        if self.fee_id.is_empty() {
            return Err(DeskError::missing_field("Fee"));
        }
        if self.amount <= 0.0 {
            return Err(DeskError::field_format("Amount", "must be positive"));
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
    fn test_fee_period_and_toggle() {
        let fee: Fee = serde_json::from_str(
            r#"{"id":"f","residentId":"r","month":3,"year":2024,"amount":1000.0,"status":"UNPAID"}"#,
        )
        .unwrap();
        assert_eq!(fee.period(), "3/2024");
        assert_eq!(fee.status.toggled(), FeeStatus::Paid);
        assert_eq!(fee.status.toggled().toggled(), FeeStatus::Unpaid);
    }

    #[test]
    fn test_fee_month_range() {
        let mut fee: Fee = serde_json::from_str(
            r#"{"id":"f","residentId":"r","month":12,"year":2024,"amount":100.0}"#,
        )
        .unwrap();
        assert!(fee.is_valid());
        fee.month = 13;
        assert!(!fee.is_valid());
        fee.month = 0;
        assert!(!fee.is_valid());
    }

    #[test]
    fn test_fee_ref_option_label() {
        let fee: Fee = serde_json::from_str(
            r#"{"id":"f","residentId":"r","month":4,"year":2024,"amount":1500.0}"#,
        )
        .unwrap();
        let opt = fee.ref_option();
        assert_eq!(opt.label, "Month 4/2024 ($1500)");
        assert_eq!(opt.group, Some(RecordId::new("r")));
        assert_eq!(opt.tag.as_deref(), Some("UNPAID"));
    }

    #[test]
    fn test_payment_decodes_iso_and_bare_dates() {
        let iso: Payment = serde_json::from_str(
            r#"{"id":"p","residentId":"r","feeId":"f","amount":1000.0,
                "method":"CASH","paidAt":"2024-03-05T00:00:00.000Z"}"#,
        )
        .unwrap();
        assert_eq!(iso.paid_at.date_naive().to_string(), "2024-03-05");

        let bare: Payment = serde_json::from_str(
            r#"{"id":"p","residentId":"r","feeId":"f","amount":1000.0,
                "method":"CARD","paidAt":"2024-04-02"}"#,
        )
        .unwrap();
        assert_eq!(bare.paid_at.date_naive().to_string(), "2024-04-02");
        assert_eq!(bare.method, PaymentMethod::Card);
    }

    #[test]
    fn test_payment_serializes_iso_timestamp() {
        let p: Payment = serde_json::from_str(
            r#"{"id":"p","residentId":"r","feeId":"f","amount":10.0,"paidAt":"2024-03-05"}"#,
        )
        .unwrap();
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["paidAt"], "2024-03-05T00:00:00.000Z");
        assert_eq!(json["method"], "CASH");
    }
}

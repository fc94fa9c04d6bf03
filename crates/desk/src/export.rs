//! Payments CSV export
//!
//! Reproduces the export format bookkeeping downstream already consumes:
//! fixed header `ID,Resident,Fee Month,Amount,Method,Date`, fee period as
//! `month/year`, amounts without a trailing `.0`, and dates in the
//! `M/D/YYYY` shape (no zero padding). Column order and rendering are a
//! compatibility contract; do not "clean them up".

use chrono::NaiveDate;
use hosteldesk_core::{DeskError, DeskResult};
use hosteldesk_model::Payment;
use std::path::Path;

/// The fixed export header
pub const CSV_HEADER: [&str; 6] = ["ID", "Resident", "Fee Month", "Amount", "Method", "Date"];

/// Serialize payments to CSV text
pub fn payments_csv(payments: &[Payment]) -> DeskResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer
        .write_record(CSV_HEADER)
        .map_err(|e| DeskError::internal(e.to_string()))?;

    for payment in payments {
        let resident = payment
            .resident
            .as_ref()
            .map(|r| r.full_name.clone())
            .unwrap_or_default();
        let period = payment
            .fee
            .as_ref()
            .map(|f| f.period())
            .unwrap_or_default();
        let amount = amount_text(payment.amount);
        let date = locale_date(payment.paid_at.date_naive());
        writer
            .write_record([
                payment.id.as_str(),
                resident.as_str(),
                period.as_str(),
                amount.as_str(),
                payment.method.as_str(),
                date.as_str(),
            ])
            .map_err(|e| DeskError::internal(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| DeskError::internal(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| DeskError::internal(e.to_string()))
}

/// Write the export to disk
pub fn write_payments_csv(path: &Path, payments: &[Payment]) -> DeskResult<()> {
    let csv = payments_csv(payments)?;
    std::fs::write(path, csv).map_err(|e| DeskError::FileWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Suggested file name for the save dialog (`Payments_Export_8-6-2026.csv`)
pub fn export_file_name(today: NaiveDate) -> String {
    format!("Payments_Export_{}.csv", today.format("%-m-%-d-%Y"))
}

/// `M/D/YYYY` without zero padding
fn locale_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Render an amount the way the list pages show it: integral amounts
/// without the trailing `.0`
fn amount_text(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{amount:.0}")
    } else {
        amount.to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payment(
        resident: &str,
        month: u32,
        year: i32,
        amount: f64,
        method: &str,
        paid_at: &str,
    ) -> Payment {
        serde_json::from_value(json!({
            "id": "",
            "residentId": "r",
            "feeId": "f",
            "amount": amount,
            "method": method,
            "paidAt": paid_at,
            "resident": { "id": "r", "fullName": resident },
            "fee": { "id": "f", "month": month, "year": year, "amount": amount }
        }))
        .unwrap()
    }

    #[test]
    fn test_export_matches_fixed_format() {
        let payments = vec![
            payment("Asha Rao", 3, 2024, 1000.0, "CASH", "2024-03-05"),
            payment("Ben Lee", 4, 2024, 1500.0, "CARD", "2024-04-02"),
        ];
        let csv = payments_csv(&payments).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "ID,Resident,Fee Month,Amount,Method,Date");
        assert_eq!(lines[1], ",Asha Rao,3/2024,1000,CASH,3/5/2024");
        assert_eq!(lines[2], ",Ben Lee,4/2024,1500,CARD,4/2/2024");
    }

    #[test]
    fn test_fractional_amounts_keep_their_cents()  {
        let payments = vec![payment("Asha Rao", 3, 2024, 1000.5, "ONLINE", "2024-03-15")];
        let csv = payments_csv(&payments).unwrap();
        assert!(csv.lines().nth(1).unwrap().contains(",1000.5,ONLINE,"));
    }

    #[test]
    fn test_missing_embeds_render_empty_cells() {
        let payment: Payment = serde_json::from_value(json!({
            "id": "p-9",
            "residentId": "r",
            "feeId": "f",
            "amount": 200.0,
            "method": "CASH",
            "paidAt": "2024-12-01T10:00:00.000Z"
        }))
        .unwrap();
        let csv = payments_csv(&[payment]).unwrap();
        assert_eq!(csv.lines().nth(1).unwrap(), "p-9,,,200,CASH,12/1/2024");
    }

    #[test]
    fn test_export_file_name_shape() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        assert_eq!(export_file_name(date), "Payments_Export_8-6-2026.csv");
    }

    #[test]
    fn test_write_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let payments = vec![payment("Asha Rao", 3, 2024, 1000.0, "CASH", "2024-03-05")];
        write_payments_csv(&path, &payments).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("ID,Resident,Fee Month,Amount,Method,Date\n"));
    }
}

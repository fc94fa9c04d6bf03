//! Draft records
//!
//! A [`Draft`] is the mutable state behind a create/edit modal: a JSON
//! object keyed by wire field names, seeded from schema defaults (create)
//! or the selected record (edit). All edits go through [`Draft::set`],
//! which is where dependent fields get cleared when their governing field
//! changes. [`Draft::body`] coerces the input strings into the typed
//! request body the backend expects.

use hosteldesk_core::{DeskError, DeskResult, RecordId};
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

use crate::schema::{FieldFormat, FieldKind, FieldSpec, FormSchema};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+?[0-9 \-()]{7,20}$").unwrap());

// ============================================================================
// Form Mode
// ============================================================================

/// Whether the form creates a new record or edits an existing one.
///
/// The edit id is captured when the dialog opens and is the only id the
/// dispatcher will address; nothing reads an id back out of the draft.
#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Create,
    Edit(RecordId),
}

// ============================================================================
// Draft
// ============================================================================

/// Mutable form state for one open dialog
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    schema: FormSchema,
    values: Map<String, Value>,
    mode: FormMode,
}

impl Draft {
    /// Open a create form seeded with schema defaults
    pub fn create(schema: FormSchema) -> Self {
        let mut values = Map::new();
        for field in &schema.fields {
            values.insert(field.key.to_string(), field.default.resolve());
        }
        Self {
            schema,
            values,
            mode: FormMode::Create,
        }
    }

    /// Open an edit form seeded from the selected record
    pub fn edit(schema: FormSchema, id: RecordId, record: &Value) -> Self {
        let mut values = Map::new();
        for field in &schema.fields {
            let seeded = record
                .get(field.key)
                .map(|value| seed_value(field, value))
                .unwrap_or_else(|| blank_value(field));
            values.insert(field.key.to_string(), seeded);
        }
        Self {
            schema,
            values,
            mode: FormMode::Edit(id),
        }
    }

    /// The schema this draft renders from
    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    /// The id captured at edit-open time
    pub fn edit_id(&self) -> Option<&RecordId> {
        match &self.mode {
            FormMode::Edit(id) => Some(id),
            FormMode::Create => None,
        }
    }

    // ========================================================================
    // Value access
    // ========================================================================

    /// Set a field, clearing any field that depends on it
    pub fn set(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_string(), value);
        let dependents: Vec<&'static str> = self.schema.dependents_of(key).collect();
        for dependent in dependents {
            self.values
                .insert(dependent.to_string(), Value::String(String::new()));
        }
    }

    /// Set a field from input text
    pub fn set_text(&mut self, key: &str, value: impl Into<String>) {
        self.set(key, Value::String(value.into()));
    }

    /// Set a toggle field
    pub fn set_bool(&mut self, key: &str, value: bool) {
        self.set(key, Value::Bool(value));
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Current input text for a field (empty when unset)
    pub fn get_str(&self, key: &str) -> String {
        match self.values.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Bool(b)) => b.to_string(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        }
    }

    pub fn get_bool(&self, key: &str) -> bool {
        matches!(self.values.get(key), Some(Value::Bool(true)))
    }

    /// Whether a field currently has no usable value
    pub fn is_blank(&self, key: &str) -> bool {
        match self.values.get(key) {
            Some(Value::String(s)) => s.trim().is_empty(),
            Some(Value::Bool(_)) => false,
            Some(Value::Number(_)) => false,
            Some(Value::Null) | None => true,
            Some(_) => false,
        }
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// First problem with the draft, if any
    pub fn validate(&self) -> DeskResult<()> {
        for field in &self.schema.fields {
            if let Some(err) = self.check_field(field) {
                return Err(err);
            }
        }
        Ok(())
    }

    /// All problems, for inline display
    pub fn validation_errors(&self) -> Vec<String> {
        self.schema
            .fields
            .iter()
            .filter_map(|field| self.check_field(field))
            .map(|err| err.to_string())
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    fn check_field(&self, field: &FieldSpec) -> Option<DeskError> {
        if self.is_blank(field.key) {
            return field
                .required
                .then(|| DeskError::missing_field(field.label));
        }
        match field.format {
            Some(FieldFormat::Email) => {
                let value = self.get_str(field.key);
                (!EMAIL_RE.is_match(value.trim()))
                    .then(|| DeskError::field_format(field.label, "must be an email address"))
            }
            Some(FieldFormat::Phone) => {
                let value = self.get_str(field.key);
                (!PHONE_RE.is_match(value.trim()))
                    .then(|| DeskError::field_format(field.label, "must be a phone number"))
            }
            None => None,
        }
    }

    // ========================================================================
    // Request body
    // ========================================================================

    /// Coerce the input values into the JSON body to submit.
    ///
    /// Assumes [`Draft::validate`] passed; a number that still fails to
    /// parse here comes back as a format error rather than a panic.
    pub fn body(&self) -> DeskResult<Value> {
        let mut body = Map::new();
        for field in &self.schema.fields {
            let raw = self.get_str(field.key);
            match &field.kind {
                FieldKind::Number { integer } => {
                    if raw.trim().is_empty() {
                        continue;
                    }
                    let number = parse_number(raw.trim(), *integer).ok_or_else(|| {
                        DeskError::field_format(field.label, "must be a number")
                    })?;
                    body.insert(field.key.to_string(), number);
                }
                FieldKind::DateTime => {
                    if raw.trim().is_empty() {
                        body.insert(field.key.to_string(), Value::Null);
                    } else {
                        let iso = expand_datetime(raw.trim()).ok_or_else(|| {
                            DeskError::field_format(field.label, "must be a date and time")
                        })?;
                        body.insert(field.key.to_string(), Value::String(iso));
                    }
                }
                FieldKind::Toggle => {
                    body.insert(field.key.to_string(), Value::Bool(self.get_bool(field.key)));
                }
                _ => {
                    body.insert(field.key.to_string(), Value::String(raw));
                }
            }
        }
        Ok(Value::Object(body))
    }
}

// ============================================================================
// Seeding helpers
// ============================================================================

/// What an absent record field seeds as in edit mode
fn blank_value(field: &FieldSpec) -> Value {
    match field.kind {
        FieldKind::Toggle => Value::Bool(false),
        _ => Value::String(String::new()),
    }
}

/// Convert a stored wire value back into its input representation
fn seed_value(field: &FieldSpec, value: &Value) -> Value {
    match (&field.kind, value) {
        (FieldKind::Toggle, Value::Bool(b)) => Value::Bool(*b),
        // `2024-03-05T00:00:00.000Z` -> `2024-03-05` for the date input
        (FieldKind::Date, Value::String(s)) if s.len() > 10 => {
            Value::String(s[..10].to_string())
        }
        // `...T10:15:00.000Z` -> `...T10:15` for the datetime-local input
        (FieldKind::DateTime, Value::String(s)) if s.len() > 16 => {
            Value::String(s[..16].to_string())
        }
        (FieldKind::Number { .. }, Value::Number(n)) => Value::String(number_text(n)),
        (_, Value::Null) => blank_value(field),
        (_, other) => other.clone(),
    }
}

/// Render a wire number the way a form input would show it (`1000`, not
/// `1000.0`)
fn number_text(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 => format!("{f:.0}"),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

fn parse_number(raw: &str, integer: bool) -> Option<Value> {
    if integer {
        raw.parse::<i64>().ok().map(Value::from)
    } else {
        raw.parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
    }
}

/// Expand a bare date or a `datetime-local` value to a full UTC timestamp
fn expand_datetime(raw: &str) -> Option<String> {
    hosteldesk_model::wire_expand_datetime(raw)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use serde_json::json;

    #[test]
    fn test_create_seeds_defaults() {
        let draft = Draft::create(catalog::bed_schema());
        assert_eq!(draft.get_str("bedNo"), "");
        assert_eq!(draft.get_str("status"), "AVAILABLE");
        assert!(!draft.is_edit());
        assert!(draft.edit_id().is_none());
    }

    #[test]
    fn test_edit_seeds_from_record_and_captures_id() {
        let record = json!({
            "id": "b-1",
            "bedNo": "B-101",
            "status": "OCCUPIED",
            "hostelId": "h-1",
            "roomId": "r-1"
        });
        let draft = Draft::edit(catalog::bed_schema(), RecordId::new("b-1"), &record);
        assert_eq!(draft.get_str("bedNo"), "B-101");
        assert_eq!(draft.get_str("status"), "OCCUPIED");
        assert_eq!(draft.edit_id(), Some(&RecordId::new("b-1")));
        // the record id never lands in the draft values
        assert!(draft.get("id").is_none());
    }

    #[test]
    fn test_changing_governing_field_clears_dependent() {
        let record = json!({
            "id": "b-1", "bedNo": "B-101", "status": "OCCUPIED",
            "hostelId": "h-1", "roomId": "r-1"
        });
        let mut draft = Draft::edit(catalog::bed_schema(), RecordId::new("b-1"), &record);
        assert_eq!(draft.get_str("roomId"), "r-1");

        draft.set_text("hostelId", "h-2");
        assert_eq!(draft.get_str("hostelId"), "h-2");
        assert_eq!(draft.get_str("roomId"), "");

        // editing a non-governing field leaves the rest alone
        draft.set_text("roomId", "r-9");
        draft.set_text("bedNo", "B-102");
        assert_eq!(draft.get_str("roomId"), "r-9");
    }

    #[test]
    fn test_required_field_blocks_validation() {
        let mut draft = Draft::create(catalog::bed_schema());
        let err = draft.validate().unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "'Bed No' is required");

        draft.set_text("bedNo", "B-1");
        draft.set_text("hostelId", "h-1");
        draft.set_text("roomId", "r-1");
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_validation_errors_collects_all() {
        let draft = Draft::create(catalog::bed_schema());
        let errors = draft.validation_errors();
        assert_eq!(
            errors,
            vec![
                "'Bed No' is required",
                "'Hostel' is required",
                "'Room' is required"
            ]
        );
    }

    #[test]
    fn test_email_format_checked_when_present() {
        let mut draft = Draft::create(catalog::resident_schema());
        draft.set_text("fullName", "Asha Rao");
        draft.set_text("phone", "555-0101");
        draft.set_text("hostelId", "h-1");
        assert!(draft.is_valid(), "empty optional email passes");

        draft.set_text("email", "nope");
        let err = draft.validate().unwrap_err();
        assert_eq!(err.to_string(), "'Email' is not valid: must be an email address");

        draft.set_text("email", "asha@example.com");
        assert!(draft.is_valid());
    }

    #[test]
    fn test_body_coerces_numbers_and_dates() {
        let mut draft = Draft::create(catalog::payment_schema());
        draft.set_text("residentId", "r-1");
        draft.set_text("feeId", "f-1");
        draft.set_text("amount", "1000");
        draft.set_text("method", "CASH");
        draft.set_text("paidAt", "2024-03-05");

        let body = draft.body().unwrap();
        assert_eq!(body["amount"], json!(1000.0));
        assert_eq!(body["method"], "CASH");
        // Date fields submit as-is; only DateTime fields expand
        assert_eq!(body["paidAt"], "2024-03-05");
    }

    #[test]
    fn test_body_expands_datetime_and_nulls_blank() {
        let mut draft = Draft::create(catalog::visitor_schema());
        draft.set_text("residentId", "r-1");
        draft.set_text("name", "Dad");
        draft.set_text("inTime", "2024-05-01T10:00");
        draft.set_text("outTime", "");

        let body = draft.body().unwrap();
        assert_eq!(body["inTime"], "2024-05-01T10:00:00.000Z");
        assert_eq!(body["outTime"], Value::Null);
    }

    #[test]
    fn test_body_rejects_unparseable_number() {
        let mut draft = Draft::create(catalog::fee_schema());
        draft.set_text("residentId", "r-1");
        draft.set_text("month", "3");
        draft.set_text("year", "2024");
        draft.set_text("amount", "ten");
        let err = draft.body().unwrap_err();
        assert_eq!(err.to_string(), "'Amount' is not valid: must be a number");
    }

    #[test]
    fn test_edit_seeds_wire_dates_into_inputs() {
        let record = json!({
            "id": "p-1",
            "residentId": "r-1",
            "feeId": "f-1",
            "amount": 1500.0,
            "method": "CARD",
            "paidAt": "2024-04-02T00:00:00.000Z"
        });
        let draft = Draft::edit(catalog::payment_schema(), RecordId::new("p-1"), &record);
        assert_eq!(draft.get_str("paidAt"), "2024-04-02");
        assert_eq!(draft.get_str("amount"), "1500");
    }
}

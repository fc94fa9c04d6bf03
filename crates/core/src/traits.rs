//! Core traits for Hostel Desk
//!
//! This module defines the traits every managed resource implements so the
//! generic list/filter/form machinery can work with any entity type.

use crate::error::DeskResult;
use crate::types::{RecordId, RefOption};
use serde::{Serialize, de::DeserializeOwned};

// ============================================================================
// Validatable Trait
// ============================================================================

/// Trait for types that can be validated
///
/// Types implementing this trait can check their internal consistency
/// and return validation errors if the state is invalid.
pub trait Validatable {
    /// Validate the current state of the object
    ///
    /// Returns `Ok(())` if valid, or a `DeskError` describing the problem.
    fn validate(&self) -> DeskResult<()>;

    /// Check if the object is valid without returning error details
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Get all validation errors (for types that can have multiple errors)
    fn validation_errors(&self) -> Vec<String> {
        match self.validate() {
            Ok(()) => vec![],
            Err(e) => vec![e.to_string()],
        }
    }
}

// ============================================================================
// Resource Trait
// ============================================================================

/// A backend resource managed through the standard CRUD verbs.
///
/// One implementation per entity type. The associated constants tie the
/// type to its REST collection; the accessors give the generic list and
/// form layers what they need without knowing the concrete fields.
///
/// # Example
///
/// ```rust,ignore
/// impl Resource for Hostel {
///     const PATH: &'static str = "hostels";
///     const LABEL: &'static str = "Hostel";
///
///     fn id(&self) -> &RecordId { &self.id }
///     fn search_text(&self) -> String { self.name.clone() }
///     fn ref_option(&self) -> RefOption {
///         RefOption::new(self.id.clone(), self.name.clone())
///     }
/// }
/// ```
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Collection path under the API root, without slashes (`"beds"`)
    const PATH: &'static str;

    /// Singular display name (`"Bed"`)
    const LABEL: &'static str;

    /// The record's backend id
    fn id(&self) -> &RecordId;

    /// The display field matched by the free-text filter
    fn search_text(&self) -> String;

    /// Foreign-key lookup by wire field name (`"hostelId"`, `"roomId"`, ...)
    ///
    /// Returns `None` for fields the entity does not carry, and for
    /// optional foreign keys that are unset on this record.
    fn foreign_key(&self, _field: &str) -> Option<&RecordId> {
        None
    }

    /// Project this record to a select-option row for dependent selects
    fn ref_option(&self) -> RefOption;
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DeskError;
    use serde::Deserialize;

    #[derive(Debug, Clone, Serialize, Deserialize)]
    struct Probe {
        id: RecordId,
        name: String,
    }

    impl Validatable for Probe {
        fn validate(&self) -> DeskResult<()> {
            if self.name.is_empty() {
                return Err(DeskError::missing_field("Name"));
            }
            Ok(())
        }
    }

    impl Resource for Probe {
        const PATH: &'static str = "probes";
        const LABEL: &'static str = "Probe";

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

    #[test]
    fn test_validatable_default_methods() {
        let ok = Probe {
            id: RecordId::new("1"),
            name: "x".to_string(),
        };
        assert!(ok.is_valid());
        assert!(ok.validation_errors().is_empty());

        let bad = Probe {
            id: RecordId::new("2"),
            name: String::new(),
        };
        assert!(!bad.is_valid());
        assert_eq!(bad.validation_errors(), vec!["'Name' is required"]);
    }

    #[test]
    fn test_resource_defaults() {
        let p = Probe {
            id: RecordId::new("1"),
            name: "x".to_string(),
        };
        assert_eq!(Probe::PATH, "probes");
        assert!(p.foreign_key("hostelId").is_none());
        assert_eq!(p.ref_option().label, "x");
    }
}

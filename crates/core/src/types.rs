//! Core types used throughout Hostel Desk
//!
//! This module contains the fundamental types shared by the model, client,
//! and controller layers: record identifiers and the projected option rows
//! that drive select fields.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Record Identifier
// ============================================================================

/// Opaque identifier for a backend record.
///
/// The backend mints cuid-style string ids; the client never inspects or
/// generates them, it only echoes them back in paths and foreign keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl RecordId {
    /// Create a new id from anything string-like
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw id string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty id is "no selection" in form state
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// ============================================================================
// Select Option Projection
// ============================================================================

/// A record projected down to what a select field needs.
///
/// Reference collections (hostels on the beds page, residents on the fees
/// page, ...) are loaded in full and then projected to these rows. `group`
/// carries the foreign key a dependent select narrows by; `tag` carries an
/// extra discriminator (bed status) for option rules that need one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefOption {
    /// Id submitted as the foreign-key value
    pub id: RecordId,
    /// Human-readable label shown in the dropdown
    pub label: String,
    /// Foreign key used for dependent-select narrowing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<RecordId>,
    /// Extra discriminator (e.g. a bed's status)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl RefOption {
    /// Create an option with no group or tag
    pub fn new(id: impl Into<RecordId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            group: None,
            tag: None,
        }
    }

    /// Attach the narrowing group key
    pub fn with_group(mut self, group: impl Into<RecordId>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Attach the extra discriminator
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Whether this option belongs to the given group
    pub fn in_group(&self, group: &RecordId) -> bool {
        self.group.as_ref() == Some(group)
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
    fn test_record_id_roundtrip() {
        let id = RecordId::new("cku2l3f9a0001");
        assert_eq!(id.as_str(), "cku2l3f9a0001");
        assert_eq!(id.to_string(), "cku2l3f9a0001");
        assert!(!id.is_empty());
        assert!(RecordId::default().is_empty());
    }

    #[test]
    fn test_record_id_serde_transparent() {
        let id = RecordId::new("abc123");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc123\"");
        let back: RecordId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_ref_option_builder() {
        let opt = RefOption::new("bed-1", "B-101")
            .with_group("hostel-1")
            .with_tag("AVAILABLE");
        assert!(opt.in_group(&RecordId::new("hostel-1")));
        assert!(!opt.in_group(&RecordId::new("hostel-2")));
        assert_eq!(opt.tag.as_deref(), Some("AVAILABLE"));
    }

    #[test]
    fn test_ref_option_without_group_matches_nothing() {
        let opt = RefOption::new("h1", "Sunrise Hostel");
        assert!(!opt.in_group(&RecordId::new("h1")));
    }
}

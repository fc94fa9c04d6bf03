//! Dependent-select option derivation
//!
//! [`select_options`] is a pure function from (loaded reference
//! collections, draft state, field spec) to the option list a select
//! renders. Keeping it out of the UI layer is what makes the narrowing
//! rules unit-testable without mounting anything.

use hosteldesk_core::{RecordId, RefOption};
use std::collections::HashMap;

use crate::draft::Draft;
use crate::schema::{FieldKind, FieldSpec, OptionSource};

// ============================================================================
// Reference collections
// ============================================================================

/// The reference collections a page loaded alongside its primary list,
/// projected to select-option rows and keyed by collection path
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RefSets {
    sets: HashMap<String, Vec<RefOption>>,
}

impl RefSets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, collection: impl Into<String>, options: Vec<RefOption>) {
        self.sets.insert(collection.into(), options);
    }

    /// Options for a collection; a collection that was never loaded (or
    /// failed to load) reads as empty
    pub fn get(&self, collection: &str) -> &[RefOption] {
        self.sets
            .get(collection)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

// ============================================================================
// Option derivation
// ============================================================================

/// The options a select field offers given the current draft state.
///
/// For reference-backed selects this applies, in order:
/// 1. group narrowing - when the field declares `narrowed_by`, only
///    options whose group equals the governing field's current value;
///    an empty governing value yields no options
/// 2. tag restriction - when the field declares `only_tags`, only
///    options carrying one of those tags, except the option matching the
///    field's current value, which always stays (so an edit form keeps
///    showing the record's existing selection)
///
/// Returns an empty list for non-select fields.
pub fn select_options(field: &FieldSpec, refs: &RefSets, draft: &Draft) -> Vec<RefOption> {
    let FieldKind::Select { source } = &field.kind else {
        return Vec::new();
    };

    match source {
        OptionSource::Static(pairs) => pairs
            .iter()
            .map(|(value, label)| RefOption::new(*value, *label))
            .collect(),
        OptionSource::Refs {
            collection,
            narrowed_by,
            only_tags,
        } => {
            let current = draft.get_str(field.key);
            let group = narrowed_by.map(|governing| RecordId::new(draft.get_str(governing)));

            refs.get(collection)
                .iter()
                .filter(|option| match &group {
                    Some(group) if group.is_empty() => false,
                    Some(group) => option.in_group(group),
                    None => true,
                })
                .filter(|option| match only_tags {
                    Some(tags) => {
                        option.id.as_str() == current
                            || option
                                .tag
                                .as_deref()
                                .is_some_and(|tag| tags.iter().any(|t| *t == tag))
                    }
                    None => true,
                })
                .cloned()
                .collect()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::draft::Draft;
    use serde_json::json;

    fn bed_refs() -> RefSets {
        let mut refs = RefSets::new();
        refs.insert(
            "hostels",
            vec![
                RefOption::new("h-1", "Sunrise"),
                RefOption::new("h-2", "Lakeside"),
            ],
        );
        refs.insert(
            "rooms",
            vec![
                RefOption::new("r-1", "101").with_group("h-1"),
                RefOption::new("r-2", "102").with_group("h-1"),
                RefOption::new("r-3", "201").with_group("h-2"),
            ],
        );
        refs
    }

    #[test]
    fn test_room_options_narrow_by_chosen_hostel() {
        let refs = bed_refs();
        let schema = catalog::bed_schema();
        let mut draft = Draft::create(schema.clone());
        draft.set_text("hostelId", "h-1");

        let rooms = select_options(schema.field("roomId").unwrap(), &refs, &draft);
        let labels: Vec<_> = rooms.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["101", "102"]);

        draft.set_text("hostelId", "h-2");
        let rooms = select_options(schema.field("roomId").unwrap(), &refs, &draft);
        let labels: Vec<_> = rooms.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["201"]);
    }

    #[test]
    fn test_no_governing_value_means_no_options() {
        let refs = bed_refs();
        let schema = catalog::bed_schema();
        let draft = Draft::create(schema.clone());

        let rooms = select_options(schema.field("roomId").unwrap(), &refs, &draft);
        assert!(rooms.is_empty());
    }

    #[test]
    fn test_ungoverned_select_offers_everything() {
        let refs = bed_refs();
        let schema = catalog::bed_schema();
        let draft = Draft::create(schema.clone());

        let hostels = select_options(schema.field("hostelId").unwrap(), &refs, &draft);
        assert_eq!(hostels.len(), 2);
    }

    #[test]
    fn test_static_select_maps_pairs() {
        let refs = RefSets::new();
        let schema = catalog::bed_schema();
        let draft = Draft::create(schema.clone());

        let statuses = select_options(schema.field("status").unwrap(), &refs, &draft);
        assert_eq!(statuses.len(), 3);
        assert_eq!(statuses[0].id.as_str(), "AVAILABLE");
        assert_eq!(statuses[0].label, "Available");
    }

    #[test]
    fn test_resident_bed_select_vacancy_rule() {
        let mut refs = RefSets::new();
        refs.insert(
            "beds",
            vec![
                RefOption::new("b-1", "B-1").with_group("h-1").with_tag("AVAILABLE"),
                RefOption::new("b-2", "B-2").with_group("h-1").with_tag("OCCUPIED"),
                RefOption::new("b-3", "B-3").with_group("h-2").with_tag("AVAILABLE"),
            ],
        );
        let schema = catalog::resident_schema();

        // create mode: only vacant beds in the chosen hostel
        let mut draft = Draft::create(schema.clone());
        draft.set_text("hostelId", "h-1");
        let beds = select_options(schema.field("bedId").unwrap(), &refs, &draft);
        let ids: Vec<_> = beds.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["b-1"]);

        // edit mode: the occupied bed already assigned to this resident
        // stays in the list
        let record = json!({
            "id": "res-1", "fullName": "Asha Rao", "phone": "555",
            "status": "ACTIVE", "hostelId": "h-1", "bedId": "b-2"
        });
        let draft = Draft::edit(
            schema.clone(),
            hosteldesk_core::RecordId::new("res-1"),
            &record,
        );
        let beds = select_options(schema.field("bedId").unwrap(), &refs, &draft);
        let ids: Vec<_> = beds.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["b-1", "b-2"]);
    }

    #[test]
    fn test_missing_collection_reads_empty() {
        let refs = RefSets::new();
        let schema = catalog::bed_schema();
        let mut draft = Draft::create(schema.clone());
        draft.set_text("hostelId", "h-1");
        assert!(select_options(schema.field("roomId").unwrap(), &refs, &draft).is_empty());
    }
}

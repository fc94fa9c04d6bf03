//! List views: the filtered, derived projection of a loaded collection
//!
//! A [`ListView`] owns the rows a page rendered from and the filter
//! inputs applied to them. `visible()` recomputes from scratch on every
//! call and never mutates the source rows; rendering `visible().len()`
//! rows is therefore always consistent with the current filters.

use serde_json::Value;

// ============================================================================
// Row field lookup
// ============================================================================

/// Resolve a dotted path (`"room.roomNo"`) against a row and render the
/// leaf as display text. Missing segments and nulls come back empty.
pub fn field_text(row: &Value, path: &str) -> String {
    let mut cursor = row;
    for segment in path.split('.') {
        match cursor.get(segment) {
            Some(next) => cursor = next,
            None => return String::new(),
        }
    }
    match cursor {
        Value::String(s) => s.clone(),
        Value::Number(n) => n
            .as_f64()
            .filter(|f| f.fract() == 0.0 && n.as_i64().is_none())
            .map(|f| format!("{f:.0}"))
            .unwrap_or_else(|| n.to_string()),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

// ============================================================================
// Filters
// ============================================================================

/// A foreign-key equality filter, usually seeded from launch parameters
/// (`?roomId=...` style deep links from a parent page)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FkFilter {
    /// Wire field the filter matches (`"hostelId"`)
    pub field: String,
    /// Required value
    pub value: String,
}

// ============================================================================
// List View
// ============================================================================

/// A loaded collection plus its client-side filters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListView {
    rows: Vec<Value>,
    /// Free-text filter over `search_key`
    pub search: String,
    /// Dotted path of the display field the search matches
    pub search_key: String,
    /// Foreign-key filters, all of which must hold
    pub fk_filters: Vec<FkFilter>,
    loading: bool,
}

impl ListView {
    pub fn new(search_key: impl Into<String>) -> Self {
        Self {
            search_key: search_key.into(),
            ..Self::default()
        }
    }

    // ========================================================================
    // Source data
    // ========================================================================

    /// Replace the source rows after a (re)load
    pub fn set_rows(&mut self, rows: Vec<Value>) {
        self.rows = rows;
        self.loading = false;
    }

    /// The unfiltered source collection
    pub fn rows(&self) -> &[Value] {
        &self.rows
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    // ========================================================================
    // Filter inputs
    // ========================================================================

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Add a foreign-key filter (deep-link parameter)
    pub fn add_fk_filter(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fk_filters.push(FkFilter {
            field: field.into(),
            value: value.into(),
        });
    }

    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.fk_filters.clear();
    }

    // ========================================================================
    // Derived view
    // ========================================================================

    /// The rows every applied predicate holds for, in source order
    pub fn visible(&self) -> Vec<&Value> {
        let needle = self.search.trim().to_lowercase();
        self.rows
            .iter()
            .filter(|row| {
                self.fk_filters
                    .iter()
                    .all(|f| field_text(row, &f.field) == f.value)
            })
            .filter(|row| {
                needle.is_empty()
                    || field_text(row, &self.search_key)
                        .to_lowercase()
                        .contains(&needle)
            })
            .collect()
    }

    /// Rendered count == filtered-collection length
    pub fn visible_len(&self) -> usize {
        self.visible().len()
    }

    /// Whether the page should render its explicit empty state
    pub fn is_empty_state(&self) -> bool {
        !self.loading && self.visible().is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bed_rows() -> Vec<Value> {
        vec![
            json!({"id": "b-1", "bedNo": "B-101", "hostelId": "h-1", "roomId": "r-1",
                   "room": {"roomNo": "101"}}),
            json!({"id": "b-2", "bedNo": "B-102", "hostelId": "h-1", "roomId": "r-2"}),
            json!({"id": "b-3", "bedNo": "C-201", "hostelId": "h-2", "roomId": "r-3"}),
        ]
    }

    #[test]
    fn test_field_text_resolves_dotted_paths() {
        let row = &bed_rows()[0];
        assert_eq!(field_text(row, "bedNo"), "B-101");
        assert_eq!(field_text(row, "room.roomNo"), "101");
        assert_eq!(field_text(row, "room.missing"), "");
        assert_eq!(field_text(row, "nothing.at.all"), "");
    }

    #[test]
    fn test_field_text_renders_numbers_like_inputs() {
        let row = json!({"amount": 1000.0, "month": 3, "half": 10.5});
        assert_eq!(field_text(&row, "amount"), "1000");
        assert_eq!(field_text(&row, "month"), "3");
        assert_eq!(field_text(&row, "half"), "10.5");
    }

    #[test]
    fn test_no_filters_shows_everything() {
        let mut view = ListView::new("bedNo");
        view.set_rows(bed_rows());
        assert_eq!(view.visible_len(), 3);
        assert!(!view.is_empty_state());
    }

    #[test]
    fn test_search_matches_exactly_one_then_clears() {
        let mut view = ListView::new("bedNo");
        view.set_rows(bed_rows());

        view.set_search("c-2");
        let visible = view.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(field_text(visible[0], "id"), "b-3");

        view.set_search("");
        assert_eq!(view.visible_len(), 3);
    }

    #[test]
    fn test_fk_filter_scopes_the_list() {
        let mut view = ListView::new("bedNo");
        view.set_rows(bed_rows());
        view.add_fk_filter("hostelId", "h-1");
        assert_eq!(view.visible_len(), 2);

        view.add_fk_filter("roomId", "r-2");
        let visible = view.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(field_text(visible[0], "id"), "b-2");
    }

    #[test]
    fn test_filters_compose_and_do_not_mutate_source() {
        let mut view = ListView::new("bedNo");
        view.set_rows(bed_rows());
        view.add_fk_filter("hostelId", "h-1");
        view.set_search("B-101");
        assert_eq!(view.visible_len(), 1);
        // the source collection is untouched
        assert_eq!(view.rows().len(), 3);
    }

    #[test]
    fn test_empty_collection_is_explicit_empty_state() {
        let mut view = ListView::new("bedNo");
        view.set_loading(true);
        assert!(!view.is_empty_state(), "loading is not the empty state");
        view.set_rows(Vec::new());
        assert!(view.is_empty_state());
    }
}

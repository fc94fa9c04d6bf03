//! Form schemas
//!
//! A [`FormSchema`] describes one entity's create/edit form as data:
//! ordered field specs, required flags, defaults, and the dependent-field
//! relationships between selects. The one generic form dialog and the
//! draft validator are driven entirely by these descriptions, which is
//! what collapses fourteen near-identical page implementations into one.

use serde_json::Value;

// ============================================================================
// Field Kind
// ============================================================================

/// Where a select field's options come from
#[derive(Debug, Clone, PartialEq)]
pub enum OptionSource {
    /// A fixed set of `(wire value, display label)` pairs (status enums)
    Static(&'static [(&'static str, &'static str)]),
    /// A loaded reference collection, projected to [`hosteldesk_core::RefOption`]s
    Refs {
        /// Collection path (`"hostels"`, `"rooms"`, ...)
        collection: &'static str,
        /// Draft field whose value narrows the options by group, if any
        narrowed_by: Option<&'static str>,
        /// Keep only options carrying one of these tags (`["AVAILABLE"]`);
        /// the option matching the field's current value always stays, so
        /// an edit form can show the record's existing selection
        only_tags: Option<&'static [&'static str]>,
    },
}

/// What kind of input a field renders as and how its value is coerced
/// into the request body
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// Single-line text
    Text,
    /// Multi-line text
    TextArea,
    /// Numeric input; `integer` controls body coercion (month vs amount)
    Number { integer: bool },
    /// `YYYY-MM-DD`, submitted as-is
    Date,
    /// `HH:MM`, submitted as-is
    Time,
    /// `YYYY-MM-DDTHH:MM`, expanded to a full timestamp on submit
    DateTime,
    /// Dropdown
    Select { source: OptionSource },
    /// Boolean switch
    Toggle,
}

// ============================================================================
// Defaults
// ============================================================================

/// Seed value for a field when the form opens in create mode
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    /// Empty string
    Empty,
    /// A fixed string (status enums, `"08:00"`)
    Text(&'static str),
    /// A fixed boolean (facility `isActive`)
    Bool(bool),
    /// Today's date as `YYYY-MM-DD` (payment date)
    Today,
    /// The current minute as `YYYY-MM-DDTHH:MM` (visitor check-in)
    Now,
}

impl DefaultValue {
    /// Resolve to a concrete JSON value at form-open time
    pub fn resolve(&self) -> Value {
        match self {
            DefaultValue::Empty => Value::String(String::new()),
            DefaultValue::Text(s) => Value::String((*s).to_string()),
            DefaultValue::Bool(b) => Value::Bool(*b),
            DefaultValue::Today => {
                Value::String(chrono::Local::now().format("%Y-%m-%d").to_string())
            }
            DefaultValue::Now => {
                Value::String(chrono::Local::now().format("%Y-%m-%dT%H:%M").to_string())
            }
        }
    }
}

// ============================================================================
// Field Spec
// ============================================================================

/// Extra format rule checked after the required-field pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    Email,
    Phone,
}

/// One form field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    /// Wire key in the draft and request body (`"bedNo"`)
    pub key: &'static str,
    /// Label shown next to the input and used in validation messages
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub default: DefaultValue,
    /// Optional format rule, checked only when the field is non-empty
    pub format: Option<FieldFormat>,
    /// Disabled when the form is in edit mode (fee resident select)
    pub locked_on_edit: bool,
}

impl FieldSpec {
    /// A plain optional text field; builders below adjust from there
    pub fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            required: false,
            default: DefaultValue::Empty,
            format: None,
            locked_on_edit: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn default_value(mut self, default: DefaultValue) -> Self {
        self.default = default;
        self
    }

    pub fn format(mut self, format: FieldFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn locked_on_edit(mut self) -> Self {
        self.locked_on_edit = true;
        self
    }

    /// Shorthand for a required reference select
    pub fn ref_select(
        key: &'static str,
        label: &'static str,
        collection: &'static str,
    ) -> Self {
        Self::new(
            key,
            label,
            FieldKind::Select {
                source: OptionSource::Refs {
                    collection,
                    narrowed_by: None,
                    only_tags: None,
                },
            },
        )
        .required()
    }

    /// Shorthand for a static select seeded with its first option
    pub fn static_select(
        key: &'static str,
        label: &'static str,
        options: &'static [(&'static str, &'static str)],
    ) -> Self {
        let default = options
            .first()
            .copied()
            .map(|(value, _)| DefaultValue::Text(value))
            .unwrap_or(DefaultValue::Empty);
        Self::new(
            key,
            label,
            FieldKind::Select {
                source: OptionSource::Static(options),
            },
        )
        .default_value(default)
    }
}

// ============================================================================
// Dependent Rule
// ============================================================================

/// "Changing `governing` clears `dependent`"
///
/// The option narrowing itself lives on the dependent field's
/// [`OptionSource::Refs::narrowed_by`]; this rule only drives the reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependentRule {
    pub governing: &'static str,
    pub dependent: &'static str,
}

// ============================================================================
// Form Schema
// ============================================================================

/// A complete form description for one entity
#[derive(Debug, Clone, PartialEq)]
pub struct FormSchema {
    /// Singular entity label (`"Bed"`), used in dialog titles
    pub label: &'static str,
    pub fields: Vec<FieldSpec>,
    pub dependents: Vec<DependentRule>,
}

impl FormSchema {
    pub fn new(label: &'static str, fields: Vec<FieldSpec>) -> Self {
        Self {
            label,
            fields,
            dependents: Vec::new(),
        }
    }

    /// Declare a governing/dependent pair
    pub fn with_dependent(mut self, governing: &'static str, dependent: &'static str) -> Self {
        self.dependents.push(DependentRule {
            governing,
            dependent,
        });
        self
    }

    /// Look up a field by wire key
    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Fields cleared when `governing` changes
    pub fn dependents_of<'a>(&'a self, governing: &'a str) -> impl Iterator<Item = &'static str> + 'a {
        self.dependents
            .iter()
            .filter(move |rule| rule.governing == governing)
            .map(|rule| rule.dependent)
    }
}

// ============================================================================
// Tests
// ============================================================================

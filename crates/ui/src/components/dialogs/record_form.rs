//! # Record Form Dialog
//!
//! The one create/edit modal every entity page uses. It renders entirely
//! from the draft's [`FormSchema`]: field order, input kinds, required
//! markers, dependent-select narrowing, and the edit-mode lock on fields
//! like the fee's resident. Page-specific behavior lives in the schema,
//! not here.

use dioxus::prelude::*;
use hosteldesk_desk::{Draft, FieldKind, OptionSource, RefSets, select_options};

use crate::components::inputs::{Select, SelectOption, TextArea, TextInput, Toggle};

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct RecordFormDialogProps {
    /// The open draft; the dialog writes field edits back into it
    pub draft: Signal<Option<Draft>>,

    /// Reference collections for select options
    pub refs: RefSets,

    /// Whether a submit is in flight (disables the save button)
    #[props(default = false)]
    pub saving: bool,

    /// Validation or server error to surface
    #[props(default)]
    pub error: Option<String>,

    /// Called when the user asks to save
    #[props(default)]
    pub on_save: EventHandler<()>,

    /// Called when the dialog is dismissed
    #[props(default)]
    pub on_cancel: EventHandler<()>,
}

// ============================================================================
// Main Component
// ============================================================================

/// Schema-driven create/edit dialog
#[component]
pub fn RecordFormDialog(props: RecordFormDialogProps) -> Element {
    let mut draft_signal = props.draft;
    let Some(draft) = draft_signal.read().clone() else {
        return rsx! {};
    };

    let schema = draft.schema().clone();
    let is_edit = draft.is_edit();
    let title = if is_edit {
        format!("Edit {}", schema.label)
    } else {
        format!("Add {}", schema.label)
    };
    let save_label = if is_edit { "Save Changes" } else { "Create" };
    let saving = props.saving;

    rsx! {
        div {
            class: "fixed inset-0 bg-slate-900/60 z-50 flex items-center justify-center p-4",

            div {
                class: "bg-white w-full max-w-lg rounded-2xl p-6 shadow-2xl max-h-[85vh] overflow-y-auto",

                // Header
                div {
                    class: "flex justify-between items-center mb-6",
                    h3 { class: "text-lg font-bold text-slate-900", "{title}" }
                    button {
                        class: "text-slate-300 hover:text-slate-900",
                        onclick: move |_| props.on_cancel.call(()),
                        "✕"
                    }
                }

                // Error banner
                if let Some(error) = &props.error {
                    div {
                        class: "mb-4 p-3 bg-rose-50 border border-rose-200 rounded-lg text-sm text-rose-600",
                        "{error}"
                    }
                }

                // Fields
                form {
                    class: "space-y-4",
                    onsubmit: move |e| {
                        e.prevent_default();
                        props.on_save.call(());
                    },

                    for field in schema.fields.clone() {
                        {
                            let key = field.key;
                            let value = draft.get_str(key);
                            let locked = field.locked_on_edit && is_edit;

                            match &field.kind {
                                FieldKind::Text => rsx! {
                                    TextInput {
                                        value,
                                        label: field.label.to_string(),
                                        required: field.required,
                                        disabled: locked,
                                        on_change: move |v: String| {
                                            if let Some(d) = draft_signal.write().as_mut() {
                                                d.set_text(key, v);
                                            }
                                        },
                                    }
                                },
                                FieldKind::Number { .. } => rsx! {
                                    TextInput {
                                        value,
                                        label: field.label.to_string(),
                                        required: field.required,
                                        disabled: locked,
                                        input_type: "number",
                                        on_change: move |v: String| {
                                            if let Some(d) = draft_signal.write().as_mut() {
                                                d.set_text(key, v);
                                            }
                                        },
                                    }
                                },
                                FieldKind::Date => rsx! {
                                    TextInput {
                                        value,
                                        label: field.label.to_string(),
                                        required: field.required,
                                        disabled: locked,
                                        input_type: "date",
                                        on_change: move |v: String| {
                                            if let Some(d) = draft_signal.write().as_mut() {
                                                d.set_text(key, v);
                                            }
                                        },
                                    }
                                },
                                FieldKind::Time => rsx! {
                                    TextInput {
                                        value,
                                        label: field.label.to_string(),
                                        required: field.required,
                                        disabled: locked,
                                        input_type: "time",
                                        on_change: move |v: String| {
                                            if let Some(d) = draft_signal.write().as_mut() {
                                                d.set_text(key, v);
                                            }
                                        },
                                    }
                                },
                                FieldKind::DateTime => rsx! {
                                    TextInput {
                                        value,
                                        label: field.label.to_string(),
                                        required: field.required,
                                        disabled: locked,
                                        input_type: "datetime-local",
                                        on_change: move |v: String| {
                                            if let Some(d) = draft_signal.write().as_mut() {
                                                d.set_text(key, v);
                                            }
                                        },
                                    }
                                },
                                FieldKind::TextArea => rsx! {
                                    TextArea {
                                        value,
                                        label: field.label.to_string(),
                                        required: field.required,
                                        on_change: move |v: String| {
                                            if let Some(d) = draft_signal.write().as_mut() {
                                                d.set_text(key, v);
                                            }
                                        },
                                    }
                                },
                                FieldKind::Toggle => rsx! {
                                    Toggle {
                                        checked: draft.get_bool(key),
                                        label: field.label.to_string(),
                                        on_change: move |checked: bool| {
                                            if let Some(d) = draft_signal.write().as_mut() {
                                                d.set_bool(key, checked);
                                            }
                                        },
                                    }
                                },
                                FieldKind::Select { source } => {
                                    let options: Vec<SelectOption> =
                                        select_options(&field, &props.refs, &draft)
                                            .into_iter()
                                            .map(|o| SelectOption::new(o.id.to_string(), o.label))
                                            .collect();
                                    // Reference selects start unselected; static
                                    // selects always carry a value
                                    let empty_option = match source {
                                        OptionSource::Refs { .. } => {
                                            Some(format!("Select {}...", field.label))
                                        }
                                        OptionSource::Static(_) => None,
                                    };
                                    rsx! {
                                        Select {
                                            value,
                                            options,
                                            label: field.label.to_string(),
                                            empty_option,
                                            required: field.required,
                                            disabled: locked,
                                            on_change: move |v: String| {
                                                if let Some(d) = draft_signal.write().as_mut() {
                                                    d.set_text(key, v);
                                                }
                                            },
                                        }
                                    }
                                }
                            }
                        }
                    }

                    // Actions
                    div {
                        class: "flex gap-2 pt-4",

                        button {
                            r#type: "button",
                            class: "flex-1 py-3 text-xs font-bold text-slate-400 hover:bg-slate-50 rounded-lg",
                            disabled: saving,
                            onclick: move |_| props.on_cancel.call(()),
                            "Cancel"
                        }

                        button {
                            r#type: "submit",
                            class: "flex-1 bg-slate-900 text-white py-3 text-xs font-bold rounded-lg hover:bg-slate-800 disabled:opacity-60",
                            disabled: saving,
                            if saving { "Saving..." } else { "{save_label}" }
                        }
                    }
                }
            }
        }
    }
}

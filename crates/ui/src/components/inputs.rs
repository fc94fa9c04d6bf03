//! # Input Components
//!
//! Reusable form input components for the Hostel Desk UI.
//!
//! This module provides styled input components including:
//! - **TextInput**: Single-line text input (also dates/times via `input_type`)
//! - **TextArea**: Multi-line text input
//! - **Select**: Dropdown selection
//! - **Toggle**: Switch-style toggle
//!
//! All components follow consistent styling with Tailwind CSS classes and
//! report changes through `on_change` handlers.

use dioxus::prelude::*;

// ============================================================================
// Text Input Component
// ============================================================================

/// Properties for TextInput component
#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    /// Input value
    pub value: String,

    /// Label text (optional)
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Error message (shows error state)
    #[props(default)]
    pub error: Option<String>,

    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,

    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Input type (text, number, date, time, datetime-local, password, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,

    /// Enter key handler
    #[props(default)]
    pub on_enter: EventHandler<()>,
}

/// Single-line text input component
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let has_error = props.error.is_some();
    let input_class = build_input_class(has_error, props.disabled);

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label {
                    class: "block text-xs font-bold text-slate-500 uppercase tracking-wide mb-1",
                    "{label}"
                    if props.required {
                        span { class: "text-rose-500 ml-0.5", "*" }
                    }
                }
            }

            input {
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                oninput: move |e| props.on_change.call(e.value()),
                onkeydown: move |e| {
                    if e.key() == Key::Enter {
                        props.on_enter.call(());
                    }
                },
            }

            if let Some(error) = &props.error {
                p { class: "text-xs text-rose-500 mt-1", "{error}" }
            }
        }
    }
}

// ============================================================================
// Text Area Component
// ============================================================================

/// Properties for TextArea component
#[derive(Props, Clone, PartialEq)]
pub struct TextAreaProps {
    pub value: String,

    #[props(default)]
    pub label: Option<String>,

    #[props(default)]
    pub placeholder: Option<String>,

    #[props(default = false)]
    pub required: bool,

    #[props(default = 3)]
    pub rows: u32,

    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Multi-line text input component
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label {
                    class: "block text-xs font-bold text-slate-500 uppercase tracking-wide mb-1",
                    "{label}"
                    if props.required {
                        span { class: "text-rose-500 ml-0.5", "*" }
                    }
                }
            }

            textarea {
                class: "w-full bg-slate-50 border border-slate-200 rounded-lg px-3 py-2.5 text-sm outline-none focus:ring-2 focus:ring-indigo-500",
                rows: "{props.rows}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                oninput: move |e| props.on_change.call(e.value()),
            }
        }
    }
}

// ============================================================================
// Select Component
// ============================================================================

/// An option in a Select dropdown
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    /// Create a new select option
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Properties for Select component
#[derive(Props, Clone, PartialEq)]
pub struct SelectProps {
    /// Currently selected value
    pub value: String,

    /// Available options
    pub options: Vec<SelectOption>,

    #[props(default)]
    pub label: Option<String>,

    /// Label of the empty "nothing selected" option; omit to forbid
    /// clearing the field
    #[props(default)]
    pub empty_option: Option<String>,

    #[props(default = false)]
    pub required: bool,

    #[props(default = false)]
    pub disabled: bool,

    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Dropdown selection component
#[component]
pub fn Select(props: SelectProps) -> Element {
    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label {
                    class: "block text-xs font-bold text-slate-500 uppercase tracking-wide mb-1",
                    "{label}"
                    if props.required {
                        span { class: "text-rose-500 ml-0.5", "*" }
                    }
                }
            }

            select {
                class: "w-full bg-slate-50 border border-slate-200 rounded-lg px-3 py-2.5 text-sm outline-none focus:ring-2 focus:ring-indigo-500 disabled:opacity-60",
                value: "{props.value}",
                disabled: props.disabled,
                onchange: move |e| props.on_change.call(e.value()),

                if let Some(empty) = &props.empty_option {
                    option { value: "", "{empty}" }
                }

                for opt in props.options.iter() {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == props.value,
                        "{opt.label}"
                    }
                }
            }
        }
    }
}

// ============================================================================
// Toggle Component
// ============================================================================

/// Properties for Toggle component
#[derive(Props, Clone, PartialEq)]
pub struct ToggleProps {
    pub checked: bool,

    #[props(default)]
    pub label: Option<String>,

    #[props(default)]
    pub on_change: EventHandler<bool>,
}

/// Switch-style toggle component
#[component]
pub fn Toggle(props: ToggleProps) -> Element {
    let track_class = if props.checked {
        "bg-indigo-600"
    } else {
        "bg-slate-300"
    };
    let knob_class = if props.checked {
        "translate-x-5"
    } else {
        "translate-x-0"
    };

    rsx! {
        div {
            class: "flex items-center gap-3",

            button {
                r#type: "button",
                class: "relative inline-flex h-6 w-11 items-center rounded-full transition-colors {track_class}",
                onclick: move |_| props.on_change.call(!props.checked),
                span {
                    class: "inline-block h-5 w-5 transform rounded-full bg-white shadow transition-transform {knob_class}",
                }
            }

            if let Some(label) = &props.label {
                span { class: "text-xs font-bold text-slate-500 uppercase tracking-wide", "{label}" }
            }
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Build the shared input class string
fn build_input_class(has_error: bool, disabled: bool) -> String {
    let mut class = String::from(
        "w-full bg-slate-50 border rounded-lg px-3 py-2.5 text-sm outline-none focus:ring-2 ",
    );
    if has_error {
        class.push_str("border-rose-400 focus:ring-rose-400");
    } else {
        class.push_str("border-slate-200 focus:ring-indigo-500");
    }
    if disabled {
        class.push_str(" opacity-60 cursor-not-allowed");
    }
    class
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_option() {
        let opt = SelectOption::new("h-1", "Sunrise");
        assert_eq!(opt.value, "h-1");
        assert_eq!(opt.label, "Sunrise");
    }

    #[test]
    fn test_input_class_states() {
        assert!(build_input_class(false, false).contains("focus:ring-indigo-500"));
        assert!(build_input_class(true, false).contains("border-rose-400"));
        assert!(build_input_class(false, true).contains("cursor-not-allowed"));
    }
}

//! # Confirm Delete Dialog Component
//!
//! Interactive confirmation gate in front of every delete. Declining
//! closes the dialog without issuing any request; only an explicit
//! confirm reaches the dispatcher.

use dioxus::prelude::*;

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct ConfirmDeleteDialogProps {
    /// Entity label (`"Bed"`)
    pub entity: String,

    /// Display name of the record being deleted
    pub item: String,

    /// Extra warning for deletes with knock-on effects, if any
    #[props(default)]
    pub warning: Option<String>,

    /// Whether the delete request is in flight
    #[props(default = false)]
    pub deleting: bool,

    #[props(default)]
    pub on_confirm: EventHandler<()>,

    #[props(default)]
    pub on_cancel: EventHandler<()>,
}

// ============================================================================
// Main Component
// ============================================================================

/// Confirmation dialog for delete operations
#[component]
pub fn ConfirmDeleteDialog(props: ConfirmDeleteDialogProps) -> Element {
    let deleting = props.deleting;

    rsx! {
        div {
            class: "fixed inset-0 bg-slate-900/60 z-50 flex items-center justify-center p-4",

            div {
                class: "bg-white w-full max-w-md rounded-2xl p-6 shadow-2xl",

                div {
                    class: "flex items-start gap-4 mb-6",

                    div {
                        class: "flex-shrink-0 w-12 h-12 rounded-full bg-rose-100 flex items-center justify-center",
                        span { class: "text-2xl", "⚠️" }
                    }

                    div {
                        class: "flex-1",
                        h2 {
                            class: "text-lg font-bold text-slate-900 mb-1",
                            "Delete {props.entity}?"
                        }
                        p {
                            class: "text-sm text-slate-500",
                            "This will permanently delete "
                            span { class: "font-bold text-slate-700", "{props.item}" }
                            "."
                        }
                        if let Some(warning) = &props.warning {
                            p { class: "text-xs text-rose-500 mt-2", "{warning}" }
                        }
                    }
                }

                div {
                    class: "flex gap-2",

                    button {
                        class: "flex-1 py-3 text-xs font-bold text-slate-400 hover:bg-slate-50 rounded-lg",
                        disabled: deleting,
                        onclick: move |_| props.on_cancel.call(()),
                        "Cancel"
                    }

                    button {
                        class: "flex-1 bg-rose-600 text-white py-3 text-xs font-bold rounded-lg hover:bg-rose-700 disabled:opacity-60",
                        disabled: deleting,
                        onclick: move |_| props.on_confirm.call(()),
                        if deleting { "Deleting..." } else { "Delete" }
                    }
                }
            }
        }
    }
}

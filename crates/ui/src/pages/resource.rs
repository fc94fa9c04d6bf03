//! # Resource Page
//!
//! The one list/table page every entity shares, instantiated from a
//! [`PageDescriptor`]. Activation loads the primary collection and its
//! reference collections concurrently; the table renders the filtered
//! view; the add/edit buttons open the schema-driven form dialog; delete
//! goes through the confirmation dialog. After any successful mutation
//! the whole page reloads - local state is never patched in place.

use dioxus::prelude::*;
use hosteldesk_core::RecordId;
use hosteldesk_desk::{
    Draft, ListView, LoadGuard, PageKind, RefSets, descriptor, dispatch, export, field_text,
    loader,
};
use hosteldesk_model::LeaveStatus;
use serde_json::Value;
use std::rc::Rc;

use crate::components::dialogs::{ConfirmDeleteDialog, RecordFormDialog};
use crate::components::inputs::TextInput;
use crate::state::{APP_STATE, StatusLevel};

// ============================================================================
// Types
// ============================================================================

/// A delete waiting on user confirmation
#[derive(Debug, Clone, PartialEq)]
struct PendingDelete {
    id: RecordId,
    item: String,
}

// ============================================================================
// Resource Page Component
// ============================================================================

/// Generic CRUD page for one entity kind
#[component]
pub fn ResourcePage(kind: PageKind) -> Element {
    let desc = use_hook(|| Rc::new(descriptor(kind)));
    let guard = use_hook(LoadGuard::new);
    let search_key = desc.search_key;

    let mut view = use_signal(move || {
        let mut view = ListView::new(search_key);
        view.set_loading(true);
        view
    });
    let mut refs = use_signal(RefSets::new);
    let mut draft = use_signal(|| Option::<Draft>::None);
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);
    let mut pending_delete = use_signal(|| Option::<PendingDelete>::None);
    let mut deleting = use_signal(|| false);

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    let reload = use_callback({
        let desc = desc.clone();
        let guard = guard.clone();
        move |_: ()| {
            let ticket = guard.begin();
            let desc = desc.clone();
            view.write().set_loading(true);
            spawn(async move {
                let (client, session) = {
                    let state = APP_STATE.read();
                    (state.client.clone(), state.session.clone())
                };
                let Some(session) = session else {
                    return;
                };
                match loader::load_page(&client, &session, &desc).await {
                    Ok(data) => {
                        if ticket.is_current() {
                            refs.set(data.refs);
                            view.write().set_rows(data.rows);
                        } else {
                            tracing::debug!(page = desc.title, "discarding stale load");
                        }
                    }
                    Err(e) => {
                        // prior rows stay untouched; only the spinner stops
                        tracing::warn!(page = desc.title, "load failed: {e}");
                        view.write().set_loading(false);
                    }
                }
            });
        }
    });

    use_effect({
        let desc = desc.clone();
        move || {
            // Deep-link filter handed over by the page that navigated here
            if let Some((field, value)) = APP_STATE.write().ui.take_pending_filter() {
                if desc.fk_params.iter().any(|p| *p == field.as_str()) {
                    view.write().add_fk_filter(field, value);
                }
            }
            reload.call(());
        }
    });

    // ------------------------------------------------------------------
    // Dialog handlers
    // ------------------------------------------------------------------

    let open_add = {
        let desc = desc.clone();
        move |_| {
            let mut fresh = Draft::create((desc.schema)());
            // A page scoped by a deep link seeds that foreign key, the way
            // the beds page preselects the hostel it was opened for
            for filter in view.read().fk_filters.iter() {
                if fresh.schema().field(&filter.field).is_some() {
                    fresh.set_text(&filter.field, filter.value.clone());
                }
            }
            form_error.set(None);
            draft.set(Some(fresh));
        }
    };

    let save = use_callback({
        let desc = desc.clone();
        move |_: ()| {
            let Some(current) = draft.read().clone() else {
                return;
            };
            // Validation failures never reach the network
            if let Err(e) = current.validate() {
                form_error.set(Some(e.user_message()));
                return;
            }
            let desc = desc.clone();
            saving.set(true);
            form_error.set(None);
            spawn(async move {
                let (client, session) = {
                    let state = APP_STATE.read();
                    (state.client.clone(), state.session.clone())
                };
                let Some(session) = session else {
                    return;
                };
                match dispatch::submit(&client, &session, &current, desc.collection).await {
                    Ok(_) => {
                        saving.set(false);
                        draft.set(None);
                        APP_STATE.write().ui.set_status(
                            format!("{} saved", current.schema().label),
                            StatusLevel::Success,
                        );
                        reload.call(());
                    }
                    Err(e) => {
                        saving.set(false);
                        form_error.set(Some(e.user_message()));
                    }
                }
            });
        }
    });

    let confirm_delete = use_callback({
        let desc = desc.clone();
        move |_: ()| {
            let Some(pending) = pending_delete.read().clone() else {
                return;
            };
            let desc = desc.clone();
            deleting.set(true);
            spawn(async move {
                let (client, session) = {
                    let state = APP_STATE.read();
                    (state.client.clone(), state.session.clone())
                };
                let Some(session) = session else {
                    return;
                };
                let result =
                    dispatch::delete_confirmed(&client, &session, desc.collection, &pending.id, true)
                        .await;
                deleting.set(false);
                pending_delete.set(None);
                match result {
                    Ok(_) => {
                        APP_STATE
                            .write()
                            .ui
                            .set_status("Record deleted", StatusLevel::Success);
                        reload.call(());
                    }
                    Err(e) => {
                        APP_STATE
                            .write()
                            .ui
                            .set_status(e.user_message(), StatusLevel::Error);
                    }
                }
            });
        }
    });

    let export_csv = use_callback(move |_: ()| {
        let rows = view.read().rows().to_vec();
        spawn(async move {
            let payments: Vec<hosteldesk_model::Payment> = rows
                .iter()
                .filter_map(|row| serde_json::from_value(row.clone()).ok())
                .collect();
            let suggested = export::export_file_name(chrono::Local::now().date_naive());
            let Some(handle) = rfd::AsyncFileDialog::new()
                .set_file_name(&suggested)
                .add_filter("CSV", &["csv"])
                .save_file()
                .await
            else {
                return;
            };
            let status = match export::write_payments_csv(handle.path(), &payments) {
                Ok(()) => ("Export written".to_string(), StatusLevel::Success),
                Err(e) => (e.user_message(), StatusLevel::Error),
            };
            APP_STATE.write().ui.set_status(status.0, status.1);
        });
    });

    // ------------------------------------------------------------------
    // Render
    // ------------------------------------------------------------------

    let view_read = view.read();
    let visible: Vec<Value> = view_read.visible().into_iter().cloned().collect();
    let loading = view_read.is_loading();
    let empty = view_read.is_empty_state();
    let search = view_read.search.clone();
    let filtered = !view_read.fk_filters.is_empty();
    drop(view_read);

    let entity_label = desc.title;

    rsx! {
        div {
            class: "p-6 max-w-6xl mx-auto",

            // Header
            div {
                class: "flex flex-col sm:flex-row sm:items-center justify-between gap-4 mb-6",

                h1 {
                    class: "text-2xl font-black text-slate-900 flex items-center gap-3",
                    span { "{desc.icon}" }
                    "{desc.title}"
                }

                div {
                    class: "flex items-center gap-2",

                    TextInput {
                        value: search,
                        placeholder: desc.search_placeholder.to_string(),
                        on_change: move |v: String| view.write().set_search(v),
                    }

                    if desc.exportable {
                        button {
                            class: "px-4 py-2.5 bg-white border border-slate-200 rounded-lg text-slate-600 font-bold text-xs hover:bg-slate-50",
                            onclick: move |_| export_csv.call(()),
                            "Export CSV"
                        }
                    }

                    button {
                        class: "bg-slate-900 text-white px-5 py-2.5 rounded-lg font-bold text-xs uppercase hover:bg-slate-800",
                        onclick: open_add,
                        "Add"
                    }
                }
            }

            // Active deep-link filter
            if filtered {
                div {
                    class: "mb-4 inline-flex items-center gap-2 px-3 py-1.5 bg-indigo-50 border border-indigo-200 rounded-full text-xs font-bold text-indigo-600",
                    "Filtered"
                    button {
                        class: "hover:text-indigo-900",
                        onclick: move |_| {
                            view.write().fk_filters.clear();
                        },
                        "✕"
                    }
                }
            }

            // Body
            if loading {
                div {
                    class: "p-12 text-center text-slate-400 font-bold uppercase tracking-widest text-xs",
                    "Loading..."
                }
            } else if empty {
                div {
                    class: "p-12 text-center text-slate-400 text-sm border border-dashed border-slate-200 rounded-xl",
                    "No records found"
                }
            } else {
                div {
                    class: "bg-white border border-slate-200 rounded-xl overflow-hidden shadow-sm",

                    table {
                        class: "w-full text-left border-collapse",

                        thead {
                            class: "bg-slate-50 border-b border-slate-200",
                            tr {
                                for column in desc.columns.iter() {
                                    th {
                                        key: "{column.key}",
                                        class: "px-5 py-3 text-[10px] font-black text-slate-400 uppercase tracking-widest",
                                        "{column.label}"
                                    }
                                }
                                th {
                                    class: "px-5 py-3 text-[10px] font-black text-slate-400 uppercase tracking-widest text-right",
                                    "Actions"
                                }
                            }
                        }

                        tbody {
                            class: "divide-y divide-slate-100",
                            for (row_key, row) in visible.into_iter().map(|r| (field_text(&r, "id"), r)) {
                                RecordRow {
                                    key: "{row_key}",
                                    kind,
                                    row: row.clone(),
                                    on_edit: {
                                        let desc = desc.clone();
                                        move |row: Value| {
                                            let id = RecordId::new(field_text(&row, "id"));
                                            form_error.set(None);
                                            draft.set(Some(Draft::edit((desc.schema)(), id, &row)));
                                        }
                                    },
                                    on_delete: move |row: Value| {
                                        pending_delete.set(Some(PendingDelete {
                                            id: RecordId::new(field_text(&row, "id")),
                                            item: display_name(kind, &row),
                                        }));
                                    },
                                    on_changed: move |_| reload.call(()),
                                }
                            }
                        }
                    }
                }
            }

            // Dialogs
            if draft.read().is_some() {
                RecordFormDialog {
                    draft,
                    refs: refs.read().clone(),
                    saving: saving(),
                    error: form_error.read().clone(),
                    on_save: move |_| save.call(()),
                    on_cancel: move |_| {
                        draft.set(None);
                        form_error.set(None);
                    },
                }
            }

            if let Some(pending) = pending_delete.read().clone() {
                ConfirmDeleteDialog {
                    entity: entity_label.to_string(),
                    item: pending.item.clone(),
                    warning: delete_warning(kind),
                    deleting: deleting(),
                    on_confirm: move |_| confirm_delete.call(()),
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}

// ============================================================================
// Record Row Component
// ============================================================================

#[derive(Props, Clone, PartialEq)]
struct RecordRowProps {
    kind: PageKind,
    row: Value,
    on_edit: EventHandler<Value>,
    on_delete: EventHandler<Value>,
    /// Fired after a quick action mutated the record
    on_changed: EventHandler<()>,
}

/// One table row: descriptor columns plus edit/delete and the page's
/// quick actions
#[component]
fn RecordRow(props: RecordRowProps) -> Element {
    let desc = descriptor(props.kind);
    let row = props.row.clone();

    rsx! {
        tr {
            class: "hover:bg-slate-50/50 transition-colors",

            for column in desc.columns.iter() {
                {
                    let text = field_text(&row, column.key);
                    let chip = column.key.ends_with("status") || column.key == "isActive";
                    let chip_class = status_class(&text);
                    rsx! {
                        td {
                            key: "{column.key}",
                            class: "px-5 py-3 text-sm text-slate-700",
                            if chip {
                                span {
                                    class: "px-2 py-1 rounded text-[10px] font-bold {chip_class}",
                                    "{text}"
                                }
                            } else {
                                "{text}"
                            }
                        }
                    }
                }
            }

            td {
                class: "px-5 py-3 text-right whitespace-nowrap",

                QuickActions {
                    kind: props.kind,
                    row: row.clone(),
                    on_changed: props.on_changed,
                }

                button {
                    class: "px-2 py-1 text-xs font-bold text-slate-400 hover:text-slate-900",
                    onclick: {
                        let row = row.clone();
                        move |_| props.on_edit.call(row.clone())
                    },
                    "Edit"
                }
                button {
                    class: "px-2 py-1 text-xs font-bold text-slate-400 hover:text-rose-600",
                    onclick: {
                        let row = row.clone();
                        move |_| props.on_delete.call(row.clone())
                    },
                    "Delete"
                }
            }
        }
    }
}

// ============================================================================
// Quick Actions Component
// ============================================================================

#[derive(Props, Clone, PartialEq)]
struct QuickActionsProps {
    kind: PageKind,
    row: Value,
    on_changed: EventHandler<()>,
}

/// Row-level shortcuts that go beyond plain edit/delete
#[component]
fn QuickActions(props: QuickActionsProps) -> Element {
    let row = props.row.clone();
    let on_changed = props.on_changed;

    match props.kind {
        // Drill-down deep links
        PageKind::Hostels => {
            let id = field_text(&row, "id");
            rsx! {
                button {
                    class: "px-2 py-1 text-xs font-bold text-indigo-500 hover:text-indigo-800",
                    onclick: move |_| {
                        APP_STATE
                            .write()
                            .ui
                            .navigate_filtered(PageKind::Rooms, "hostelId", id.clone());
                    },
                    "Rooms"
                }
            }
        }
        PageKind::Rooms => {
            let id = field_text(&row, "id");
            rsx! {
                button {
                    class: "px-2 py-1 text-xs font-bold text-indigo-500 hover:text-indigo-800",
                    onclick: move |_| {
                        APP_STATE
                            .write()
                            .ui
                            .navigate_filtered(PageKind::Beds, "roomId", id.clone());
                    },
                    "Beds"
                }
            }
        }

        // Fee settlement toggle
        PageKind::Fees => {
            let label = if field_text(&row, "status") == "PAID" {
                "Mark Unpaid"
            } else {
                "Mark Paid"
            };
            rsx! {
                button {
                    class: "px-2 py-1 text-xs font-bold text-emerald-600 hover:text-emerald-800",
                    onclick: move |_| {
                        let row = row.clone();
                        spawn(async move {
                            run_quick_action(on_changed, |client, session| async move {
                                dispatch::toggle_fee_status(&client, &session, &row).await
                            })
                            .await;
                        });
                    },
                    "{label}"
                }
            }
        }

        // Leave approval workflow
        PageKind::Leaves if field_text(&row, "status") == "PENDING" => {
            let approve_row = row.clone();
            let reject_row = row.clone();
            rsx! {
                button {
                    class: "px-2 py-1 text-xs font-bold text-emerald-600 hover:text-emerald-800",
                    onclick: move |_| {
                        let row = approve_row.clone();
                        spawn(async move {
                            run_quick_action(on_changed, |client, session| async move {
                                dispatch::set_leave_status(
                                    &client,
                                    &session,
                                    &row,
                                    LeaveStatus::Approved,
                                )
                                .await
                            })
                            .await;
                        });
                    },
                    "Approve"
                }
                button {
                    class: "px-2 py-1 text-xs font-bold text-rose-500 hover:text-rose-700",
                    onclick: move |_| {
                        let row = reject_row.clone();
                        spawn(async move {
                            run_quick_action(on_changed, |client, session| async move {
                                dispatch::set_leave_status(
                                    &client,
                                    &session,
                                    &row,
                                    LeaveStatus::Rejected,
                                )
                                .await
                            })
                            .await;
                        });
                    },
                    "Reject"
                }
            }
        }

        // Visitor check-out
        PageKind::Visitors if field_text(&row, "outTime").is_empty() => {
            rsx! {
                button {
                    class: "px-2 py-1 text-xs font-bold text-indigo-500 hover:text-indigo-800",
                    onclick: move |_| {
                        let row = row.clone();
                        spawn(async move {
                            run_quick_action(on_changed, |client, session| async move {
                                dispatch::check_out_visitor(&client, &session, &row).await
                            })
                            .await;
                        });
                    },
                    "Check Out"
                }
            }
        }

        _ => rsx! {},
    }
}

/// Run a row mutation, surface the outcome, and ask the page to reload
async fn run_quick_action<F, Fut>(on_changed: EventHandler<()>, action: F)
where
    F: FnOnce(hosteldesk_client::ApiClient, hosteldesk_client::Session) -> Fut,
    Fut: std::future::Future<Output = hosteldesk_core::DeskResult<Value>>,
{
    let (client, session) = {
        let state = APP_STATE.read();
        (state.client.clone(), state.session.clone())
    };
    let Some(session) = session else {
        return;
    };
    match action(client, session).await {
        Ok(_) => {
            APP_STATE
                .write()
                .ui
                .set_status("Updated", StatusLevel::Success);
            on_changed.call(());
        }
        Err(e) => {
            APP_STATE
                .write()
                .ui
                .set_status(e.user_message(), StatusLevel::Error);
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// The name shown in the delete confirmation for a row
fn display_name(kind: PageKind, row: &Value) -> String {
    let text = field_text(row, descriptor(kind).search_key);
    if text.is_empty() {
        field_text(row, "id")
    } else {
        text
    }
}

/// Pages whose deletes have knock-on effects warn about them
fn delete_warning(kind: PageKind) -> Option<String> {
    match kind {
        PageKind::Hostels => {
            Some("This will affect all associated floors and rooms.".to_string())
        }
        PageKind::Residents => {
            Some("The associated bed will become available.".to_string())
        }
        _ => None,
    }
}

/// Chip color for a status cell
fn status_class(text: &str) -> &'static str {
    match text {
        "AVAILABLE" | "ACTIVE" | "PAID" | "APPROVED" | "RESOLVED" | "true" => {
            "bg-emerald-50 text-emerald-600"
        }
        "PENDING" | "UNPAID" | "IN_PROGRESS" | "MAINTENANCE" => "bg-amber-50 text-amber-600",
        _ => "bg-rose-50 text-rose-600",
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_name_prefers_search_field() {
        let row = json!({"id": "b-1", "bedNo": "B-101"});
        assert_eq!(display_name(PageKind::Beds, &row), "B-101");

        let bare = json!({"id": "b-2"});
        assert_eq!(display_name(PageKind::Beds, &bare), "b-2");
    }

    #[test]
    fn test_status_chip_classes() {
        assert!(status_class("AVAILABLE").contains("emerald"));
        assert!(status_class("PENDING").contains("amber"));
        assert!(status_class("LEFT").contains("rose"));
    }

    #[test]
    fn test_only_cascading_deletes_warn() {
        assert!(delete_warning(PageKind::Hostels).is_some());
        assert!(delete_warning(PageKind::Beds).is_none());
    }
}

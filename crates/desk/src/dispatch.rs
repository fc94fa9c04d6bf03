//! Mutation dispatch
//!
//! Exactly one of create/update is issued per submit, chosen by the form
//! mode captured when the dialog opened. The update id comes from that
//! mode, never from the mutable draft. After any successful mutation the
//! caller reloads the whole page; no code path patches local state in
//! place.

use hosteldesk_client::{ApiClient, Session};
use hosteldesk_core::{DeskResult, RecordId};
use hosteldesk_model::{Fee, Leave, LeaveStatus, Visitor};
use serde_json::Value;

use crate::draft::{Draft, FormMode};

// ============================================================================
// Mutation plan
// ============================================================================

/// The single request a submit will issue
#[derive(Debug, Clone, PartialEq)]
pub enum MutationPlan {
    Create { collection: String, body: Value },
    Update { collection: String, id: RecordId, body: Value },
}

/// Validate the draft and decide the request.
///
/// Validation failure means no network call: the error carries the
/// user-facing message and the caller shows it without dispatching.
pub fn plan(draft: &Draft, collection: &str) -> DeskResult<MutationPlan> {
    draft.validate()?;
    let body = draft.body()?;
    Ok(match draft.mode() {
        FormMode::Create => MutationPlan::Create {
            collection: collection.to_string(),
            body,
        },
        FormMode::Edit(id) => MutationPlan::Update {
            collection: collection.to_string(),
            id: id.clone(),
            body,
        },
    })
}

/// Plan and dispatch a submit
pub async fn submit(
    client: &ApiClient,
    session: &Session,
    draft: &Draft,
    collection: &str,
) -> DeskResult<Value> {
    match plan(draft, collection)? {
        MutationPlan::Create { collection, body } => {
            tracing::info!(collection = %collection, "creating record");
            client.create_raw(session, &collection, &body).await
        }
        MutationPlan::Update { collection, id, body } => {
            tracing::info!(collection = %collection, id = %id, "updating record");
            client.update_raw(session, &collection, &id, &body).await
        }
    }
}

// ============================================================================
// Delete
// ============================================================================

/// Delete a record iff the user confirmed.
///
/// Returns `Ok(false)` without touching the network when the confirmation
/// was declined, `Ok(true)` after a successful delete.
pub async fn delete_confirmed(
    client: &ApiClient,
    session: &Session,
    collection: &str,
    id: &RecordId,
    confirmed: bool,
) -> DeskResult<bool> {
    if !confirmed {
        return Ok(false);
    }
    tracing::info!(collection, id = %id, "deleting record");
    client.delete(session, collection, id).await?;
    Ok(true)
}

// ============================================================================
// Quick actions
// ============================================================================

/// Flip a fee between PAID and UNPAID from the list row
pub async fn toggle_fee_status(
    client: &ApiClient,
    session: &Session,
    row: &Value,
) -> DeskResult<Value> {
    let mut fee: Fee = serde_json::from_value(row.clone())?;
    fee.status = fee.status.toggled();
    client.update(session, &fee).await
}

/// Approve or reject a leave from the list row
pub async fn set_leave_status(
    client: &ApiClient,
    session: &Session,
    row: &Value,
    status: LeaveStatus,
) -> DeskResult<Value> {
    let mut leave: Leave = serde_json::from_value(row.clone())?;
    leave.status = status;
    client.update(session, &leave).await
}

/// Record a visitor's check-out as "now"
pub async fn check_out_visitor(
    client: &ApiClient,
    session: &Session,
    row: &Value,
) -> DeskResult<Value> {
    let mut visitor: Visitor = serde_json::from_value(row.clone())?;
    visitor.out_time = Some(chrono::Utc::now());
    client.update(session, &visitor).await
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
    fn test_create_plan_for_fresh_draft() {
        let mut draft = Draft::create(catalog::hostel_schema());
        draft.set_text("name", "Sunrise");
        draft.set_text("address", "12 Lake Rd");

        match plan(&draft, "hostels").unwrap() {
            MutationPlan::Create { collection, body } => {
                assert_eq!(collection, "hostels");
                assert_eq!(body["name"], "Sunrise");
            }
            other => panic!("expected create, got {other:?}"),
        }
    }

    #[test]
    fn test_edit_plan_addresses_captured_id() {
        let record = json!({
            "id": "h-1", "name": "Sunrise", "address": "12 Lake Rd", "phone": "555"
        });
        let draft = Draft::edit(catalog::hostel_schema(), RecordId::new("h-1"), &record);

        // saving without changes still updates record h-1, never creates
        match plan(&draft, "hostels").unwrap() {
            MutationPlan::Update { id, body, .. } => {
                assert_eq!(id, RecordId::new("h-1"));
                assert_eq!(body["name"], "Sunrise");
                assert!(body.get("id").is_none(), "the body never carries an id");
            }
            other => panic!("expected update, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_draft_produces_no_plan() {
        let draft = Draft::create(catalog::hostel_schema());
        let err = plan(&draft, "hostels").unwrap_err();
        assert!(err.is_validation());
    }
}

//! Page loading: concurrent collection fetches behind a generation guard
//!
//! [`load_page`] issues the primary list request and every reference list
//! concurrently and joins them before anything is applied: either every
//! collection updates together, or the first failure aborts the whole
//! load and the caller's previous state stays untouched.
//!
//! [`LoadGuard`] is the race guard on top: every load takes a ticket, and
//! only the ticket from the most recent `begin()` may apply its result.
//! A slow response that lands after a newer load started is discarded
//! instead of clobbering fresher data.

use futures::future::join_all;
use hosteldesk_client::{ApiClient, Session};
use hosteldesk_core::{DeskError, DeskResult, RefOption, Resource};
use hosteldesk_model::{
    Bed, Complaint, EmergencyContact, Facility, Fee, Floor, FoodMenu, Hostel, HostelTiming,
    Leave, Payment, Resident, Room, Staff, User, Visitor,
};
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::descriptor::PageDescriptor;
use crate::options::RefSets;

// ============================================================================
// Load Guard
// ============================================================================

/// Monotonic generation counter shared by every load a page starts
#[derive(Debug, Clone, Default)]
pub struct LoadGuard {
    current: Arc<AtomicU64>,
}

/// A single load's claim on the right to apply its result
#[derive(Debug, Clone)]
pub struct LoadTicket {
    generation: u64,
    current: Arc<AtomicU64>,
}

impl LoadGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load, invalidating every ticket issued before
    pub fn begin(&self) -> LoadTicket {
        let generation = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        LoadTicket {
            generation,
            current: Arc::clone(&self.current),
        }
    }

    /// The generation of the most recent `begin()`
    pub fn generation(&self) -> u64 {
        self.current.load(Ordering::SeqCst)
    }
}

impl LoadTicket {
    /// Whether this load is still the latest one
    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::SeqCst) == self.generation
    }

    /// Err(`Stale`) when a newer load has started since this ticket
    pub fn admit(&self) -> DeskResult<()> {
        if self.is_current() {
            Ok(())
        } else {
            Err(DeskError::Stale)
        }
    }
}

// ============================================================================
// Typed fetches
// ============================================================================

async fn rows_of<T: Resource>(client: &ApiClient, session: &Session) -> DeskResult<Vec<Value>> {
    let records: Vec<T> = client.list(session).await?;
    records
        .iter()
        .map(|r| serde_json::to_value(r).map_err(DeskError::from))
        .collect()
}

/// Fetch a page's primary collection as display rows.
///
/// Decoding through the typed records (rather than passing raw JSON
/// through) is what catches wire drift early and normalizes defaults.
pub async fn fetch_rows(
    client: &ApiClient,
    session: &Session,
    collection: &str,
) -> DeskResult<Vec<Value>> {
    match collection {
        "hostels" => rows_of::<Hostel>(client, session).await,
        "floors" => rows_of::<Floor>(client, session).await,
        "rooms" => rows_of::<Room>(client, session).await,
        "beds" => rows_of::<Bed>(client, session).await,
        "residents" => rows_of::<Resident>(client, session).await,
        "staff" => rows_of::<Staff>(client, session).await,
        "users" => rows_of::<User>(client, session).await,
        "fees" => rows_of::<Fee>(client, session).await,
        "payments" => rows_of::<Payment>(client, session).await,
        "complaints" => rows_of::<Complaint>(client, session).await,
        "leaves" => rows_of::<Leave>(client, session).await,
        "visitors" => rows_of::<Visitor>(client, session).await,
        "emergency" => rows_of::<EmergencyContact>(client, session).await,
        "facilities" => rows_of::<Facility>(client, session).await,
        "food-menus" => rows_of::<FoodMenu>(client, session).await,
        "hostel-timings" => rows_of::<HostelTiming>(client, session).await,
        other => Err(DeskError::internal(format!("unknown collection '{other}'"))),
    }
}

async fn options_of<T: Resource>(
    client: &ApiClient,
    session: &Session,
) -> DeskResult<Vec<RefOption>> {
    let records: Vec<T> = client.list(session).await?;
    Ok(records.iter().map(Resource::ref_option).collect())
}

/// Fetch a reference collection projected to select options
pub async fn fetch_ref_options(
    client: &ApiClient,
    session: &Session,
    collection: &str,
) -> DeskResult<Vec<RefOption>> {
    match collection {
        "hostels" => options_of::<Hostel>(client, session).await,
        "floors" => options_of::<Floor>(client, session).await,
        "rooms" => options_of::<Room>(client, session).await,
        "beds" => options_of::<Bed>(client, session).await,
        "residents" => options_of::<Resident>(client, session).await,
        "users" => options_of::<User>(client, session).await,
        "fees" => options_of::<Fee>(client, session).await,
        other => Err(DeskError::internal(format!(
            "'{other}' is not a reference collection"
        ))),
    }
}

// ============================================================================
// Page load
// ============================================================================

/// Everything a page needs after activation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageData {
    pub rows: Vec<Value>,
    pub refs: RefSets,
}

/// Load a page's primary list and reference lists concurrently.
///
/// All-or-nothing: any failure fails the whole load, so the caller never
/// applies a partial result.
pub async fn load_page(
    client: &ApiClient,
    session: &Session,
    descriptor: &PageDescriptor,
) -> DeskResult<PageData> {
    let rows_fut = fetch_rows(client, session, descriptor.collection);
    let ref_futs = descriptor
        .refs
        .iter()
        .map(|collection| fetch_ref_options(client, session, collection));

    let (rows, ref_results) = futures::join!(rows_fut, join_all(ref_futs));

    let rows = rows?;
    let mut refs = RefSets::new();
    for (collection, result) in descriptor.refs.iter().zip(ref_results) {
        refs.insert(*collection, result?);
    }
    Ok(PageData { rows, refs })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_invalidates_older_tickets() {
        let guard = LoadGuard::new();
        let first = guard.begin();
        assert!(first.is_current());

        let second = guard.begin();
        assert!(!first.is_current());
        assert!(second.is_current());

        assert!(matches!(first.admit(), Err(DeskError::Stale)));
        assert!(second.admit().is_ok());
    }

    #[test]
    fn test_guard_generations_are_monotonic() {
        let guard = LoadGuard::new();
        assert_eq!(guard.generation(), 0);
        let _a = guard.begin();
        let _b = guard.begin();
        assert_eq!(guard.generation(), 2);
    }

    #[test]
    fn test_unknown_collection_is_rejected() {
        // exercised without a server: the match arm fails before any IO
        let err = futures::executor::block_on(async {
            let config = hosteldesk_client::ClientConfig {
                base_url: "http://localhost:0/api".to_string(),
                timeout_secs: 1,
            };
            let client = ApiClient::new(&config);
            let session = hosteldesk_client::Session {
                token: "t".into(),
                user: serde_json::from_str(
                    r#"{"id":"u","name":"n","email":"e@x.io","role":"ADMIN"}"#,
                )
                .unwrap(),
            };
            fetch_rows(&client, &session, "nope").await
        })
        .unwrap_err();
        assert!(matches!(err, DeskError::Internal(_)));
    }
}

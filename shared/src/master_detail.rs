//! List ↔ create/detail/edit container state.
//!
//! The container owns exactly one [`ViewMode`]. Fetches are tagged with a
//! [`FetchTicket`]; only the most recently started fetch may replace the list.

use crate::error::SharedError;
use crate::table::TableRecord;
use log::{debug, warn};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_TICKET: AtomicU64 = AtomicU64::new(1);

/// Identifies one collection fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(u64);

impl FetchTicket {
    /// Process-wide, strictly increasing.
    pub fn next() -> Self {
        Self(NEXT_TICKET.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    List,
    Create,
    Detail,
    Edit,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListStatus {
    #[default]
    Idle,
    Loading,
    /// A refetch is running while the previous list stays visible.
    Refreshing,
    Ready,
    Failed(String),
}

impl ListStatus {
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Loading | Self::Refreshing)
    }
}

/// What happens to the list after a successful create or edit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RefreshPolicy {
    /// Return to the list immediately, keep showing the old rows, refetch.
    #[default]
    Refetch,
    /// Splice the saved record into the local list without asking the API.
    MergeLocal,
}

/// Why the detail view has no record to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailError {
    /// The record is gone; the user can go back to the list.
    Missing(String),
    /// The load itself failed (network, server, permissions).
    Failed(String),
}

impl DetailError {
    pub fn message(&self) -> &str {
        match self {
            Self::Missing(message) | Self::Failed(message) => message,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MasterDetailAction<R> {
    ShowList,
    ShowCreate,
    ShowDetail(R),
    ShowEdit(R),
    Cancel,
    FetchStarted(FetchTicket),
    FetchResolved {
        ticket: FetchTicket,
        result: Result<Vec<R>, SharedError>,
    },
    SubmitSucceeded(R),
    /// A record load for the detail view was sent.
    DetailStarted(FetchTicket),
    DetailResolved {
        ticket: FetchTicket,
        result: Result<R, SharedError>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct MasterDetail<R> {
    pub mode: ViewMode,
    pub selected: Option<R>,
    pub items: Vec<R>,
    pub status: ListStatus,
    pub detail_error: Option<DetailError>,
    pub policy: RefreshPolicy,
    latest_ticket: Option<FetchTicket>,
    pending_detail: Option<FetchTicket>,
}

impl<R> Default for MasterDetail<R> {
    fn default() -> Self {
        Self::new(RefreshPolicy::default())
    }
}

impl<R> MasterDetail<R> {
    pub fn new(policy: RefreshPolicy) -> Self {
        Self {
            mode: ViewMode::List,
            selected: None,
            items: Vec::new(),
            status: ListStatus::Idle,
            detail_error: None,
            policy,
            latest_ticket: None,
            pending_detail: None,
        }
    }

    pub fn latest_ticket(&self) -> Option<FetchTicket> {
        self.latest_ticket
    }

    /// Detail load still waiting for its response, if any.
    pub fn pending_detail(&self) -> Option<FetchTicket> {
        self.pending_detail
    }

    /// Whether the caller has to start a refetch after this state was produced.
    pub fn needs_refetch(&self) -> bool {
        self.status == ListStatus::Refreshing && self.latest_ticket.is_none()
    }
}

impl<R: TableRecord + Clone> MasterDetail<R> {
    /// Pure transition function.
    pub fn apply(mut self, action: MasterDetailAction<R>) -> Self {
        // Any navigation the user makes outranks a detail load still in flight
        if matches!(
            action,
            MasterDetailAction::ShowList
                | MasterDetailAction::Cancel
                | MasterDetailAction::ShowCreate
                | MasterDetailAction::ShowDetail(_)
                | MasterDetailAction::ShowEdit(_)
        ) {
            self.pending_detail = None;
        }
        match action {
            MasterDetailAction::ShowList | MasterDetailAction::Cancel => {
                self.mode = ViewMode::List;
                self.selected = None;
                self.detail_error = None;
            }
            MasterDetailAction::ShowCreate => {
                self.mode = ViewMode::Create;
                self.selected = None;
                self.detail_error = None;
            }
            MasterDetailAction::ShowDetail(record) => {
                self.mode = ViewMode::Detail;
                self.selected = Some(record);
                self.detail_error = None;
            }
            MasterDetailAction::ShowEdit(record) => {
                self.mode = ViewMode::Edit;
                self.selected = Some(record);
                self.detail_error = None;
            }
            MasterDetailAction::DetailStarted(ticket) => {
                self.pending_detail = Some(ticket);
            }
            MasterDetailAction::DetailResolved { ticket, result } => {
                if self.pending_detail != Some(ticket) {
                    warn!("ignoring stale detail response for {:?}", ticket);
                    return self;
                }
                self.pending_detail = None;
                self.mode = ViewMode::Detail;
                match result {
                    Ok(record) => {
                        self.selected = Some(record);
                        self.detail_error = None;
                    }
                    Err(SharedError::NotFound(message)) => {
                        self.selected = None;
                        self.detail_error = Some(DetailError::Missing(message));
                    }
                    Err(err) => {
                        warn!("detail load failed: {}", err);
                        self.selected = None;
                        self.detail_error = Some(DetailError::Failed(err.to_string()));
                    }
                }
            }
            MasterDetailAction::FetchStarted(ticket) => {
                self.latest_ticket = Some(ticket);
                self.status = if self.items.is_empty() {
                    ListStatus::Loading
                } else {
                    ListStatus::Refreshing
                };
            }
            MasterDetailAction::FetchResolved { ticket, result } => {
                if self.latest_ticket != Some(ticket) {
                    warn!("ignoring stale response for {:?}, latest is {:?}", ticket, self.latest_ticket);
                    return self;
                }
                match result {
                    Ok(items) => {
                        debug!("collection loaded with {} records", items.len());
                        self.items = items;
                        self.status = ListStatus::Ready;
                    }
                    Err(err) => {
                        warn!("collection fetch failed: {}", err);
                        self.status = ListStatus::Failed(err.to_string());
                    }
                }
            }
            MasterDetailAction::SubmitSucceeded(record) => {
                self.mode = ViewMode::List;
                self.selected = None;
                self.detail_error = None;
                match self.policy {
                    RefreshPolicy::Refetch => {
                        // The caller sees needs_refetch() and starts a new fetch.
                        self.latest_ticket = None;
                        self.status = ListStatus::Refreshing;
                    }
                    RefreshPolicy::MergeLocal => {
                        let id = record.record_id().into_owned();
                        match self.items.iter_mut().find(|item| item.record_id() == id) {
                            Some(existing) => *existing = record,
                            None => self.items.push(record),
                        }
                        self.status = ListStatus::Ready;
                    }
                }
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{load_collection, load_detail, RecordSource};
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use std::cell::RefCell;

    fn people() -> Vec<Value> {
        vec![
            json!({"id": "1", "name": "Bob", "age": 40}),
            json!({"id": "2", "name": "Amy", "age": 25}),
        ]
    }

    fn loaded(policy: RefreshPolicy) -> MasterDetail<Value> {
        let ticket = FetchTicket::next();
        MasterDetail::new(policy)
            .apply(MasterDetailAction::FetchStarted(ticket))
            .apply(MasterDetailAction::FetchResolved {
                ticket,
                result: Ok(people()),
            })
    }

    #[test]
    fn test_create_then_cancel_leaves_list_untouched() {
        let start = loaded(RefreshPolicy::Refetch);
        let state = start
            .clone()
            .apply(MasterDetailAction::ShowCreate)
            .apply(MasterDetailAction::Cancel);
        assert_eq!(state.mode, ViewMode::List);
        assert_eq!(state.items, start.items);
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_exactly_one_view_per_transition() {
        let record = people().remove(0);
        let state = loaded(RefreshPolicy::Refetch).apply(MasterDetailAction::ShowDetail(record.clone()));
        assert_eq!(state.mode, ViewMode::Detail);
        assert_eq!(state.selected, Some(record.clone()));

        let state = state.apply(MasterDetailAction::ShowEdit(record));
        assert_eq!(state.mode, ViewMode::Edit);

        let state = state.apply(MasterDetailAction::ShowList);
        assert_eq!(state.mode, ViewMode::List);
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_stale_response_is_ignored() {
        let first = FetchTicket::next();
        let second = FetchTicket::next();
        let state = MasterDetail::<Value>::default()
            .apply(MasterDetailAction::FetchStarted(first))
            .apply(MasterDetailAction::FetchStarted(second))
            .apply(MasterDetailAction::FetchResolved {
                ticket: second,
                result: Ok(vec![json!({"id": "new"})]),
            })
            .apply(MasterDetailAction::FetchResolved {
                ticket: first,
                result: Ok(vec![json!({"id": "old"})]),
            });
        assert_eq!(state.items, vec![json!({"id": "new"})]);
        assert_eq!(state.status, ListStatus::Ready);
    }

    #[test]
    fn test_fetch_failure_is_visible() {
        let ticket = FetchTicket::next();
        let state = MasterDetail::<Value>::default()
            .apply(MasterDetailAction::FetchStarted(ticket))
            .apply(MasterDetailAction::FetchResolved {
                ticket,
                result: Err(SharedError::Network("offline".into())),
            });
        assert_eq!(state.status, ListStatus::Failed("Network error: offline".into()));
    }

    #[test]
    fn test_refetch_policy_keeps_stale_rows_visible() {
        let state = loaded(RefreshPolicy::Refetch)
            .apply(MasterDetailAction::ShowCreate)
            .apply(MasterDetailAction::SubmitSucceeded(json!({"id": "3", "name": "Cat"})));
        assert_eq!(state.mode, ViewMode::List);
        assert_eq!(state.items.len(), 2);
        assert!(state.needs_refetch());

        let ticket = FetchTicket::next();
        let state = state.apply(MasterDetailAction::FetchStarted(ticket));
        assert!(!state.needs_refetch());
        assert_eq!(state.status, ListStatus::Refreshing);
    }

    #[test]
    fn test_merge_policy_replaces_by_id_or_appends() {
        let state = loaded(RefreshPolicy::MergeLocal)
            .apply(MasterDetailAction::SubmitSucceeded(json!({"id": "2", "name": "Amy", "age": 26})))
            .apply(MasterDetailAction::SubmitSucceeded(json!({"id": "3", "name": "Cat"})));
        assert_eq!(state.items.len(), 3);
        assert_eq!(state.items[1]["age"], 26);
        assert_eq!(state.items[2]["name"], "Cat");
        assert!(!state.needs_refetch());
    }

    /// In-memory stand-in for the REST API.
    struct MemorySource {
        rows: RefCell<Vec<Value>>,
    }

    #[async_trait(?Send)]
    impl RecordSource<Value> for MemorySource {
        async fn fetch_collection(&self) -> crate::Result<Vec<Value>> {
            Ok(self.rows.borrow().clone())
        }

        async fn fetch_record(&self, id: &str) -> crate::Result<Value> {
            self.rows
                .borrow()
                .iter()
                .find(|r| r["id"] == id)
                .cloned()
                .ok_or_else(|| SharedError::NotFound(format!("record {}", id)))
        }

        async fn submit_record(&self, record: &Value) -> crate::Result<Value> {
            self.rows.borrow_mut().push(record.clone());
            Ok(record.clone())
        }
    }

    #[tokio::test]
    async fn test_submit_then_refetch_shows_new_record() {
        let source = MemorySource {
            rows: RefCell::new(people()),
        };
        let ticket = FetchTicket::next();
        let mut state = MasterDetail::<Value>::default().apply(MasterDetailAction::FetchStarted(ticket));
        state = state.apply(load_collection(&source, ticket).await);
        assert_eq!(state.items.len(), 2);

        let saved = source.submit_record(&json!({"id": "3", "name": "Cat"})).await.unwrap();
        state = state.apply(MasterDetailAction::SubmitSucceeded(saved));
        assert!(state.needs_refetch());

        let ticket = FetchTicket::next();
        state = state.apply(MasterDetailAction::FetchStarted(ticket));
        state = state.apply(load_collection(&source, ticket).await);
        assert_eq!(state.items.len(), 3);
        assert_eq!(state.status, ListStatus::Ready);
    }

    #[tokio::test]
    async fn test_vanished_record_is_recoverable() {
        let source = MemorySource {
            rows: RefCell::new(people()),
        };
        let ticket = FetchTicket::next();
        let state = loaded(RefreshPolicy::Refetch)
            .apply(MasterDetailAction::DetailStarted(ticket))
            .apply(load_detail(&source, ticket, "99").await);
        assert_eq!(state.mode, ViewMode::Detail);
        assert_eq!(state.detail_error, Some(DetailError::Missing("record 99".into())));

        let state = state.apply(MasterDetailAction::ShowList);
        assert_eq!(state.mode, ViewMode::List);
        assert_eq!(state.detail_error, None);
        assert_eq!(state.items.len(), 2);
    }

    #[tokio::test]
    async fn test_detail_response_after_navigation_is_dropped() {
        let source = MemorySource {
            rows: RefCell::new(people()),
        };
        let ticket = FetchTicket::next();
        let state = loaded(RefreshPolicy::Refetch)
            .apply(MasterDetailAction::DetailStarted(ticket))
            .apply(MasterDetailAction::ShowCreate)
            .apply(load_detail(&source, ticket, "1").await);
        assert_eq!(state.mode, ViewMode::Create);
        assert_eq!(state.selected, None);
        assert_eq!(state.pending_detail(), None);
    }

    #[test]
    fn test_older_detail_load_loses_to_newer() {
        let first = FetchTicket::next();
        let second = FetchTicket::next();
        let amy = people().remove(1);
        let state = loaded(RefreshPolicy::Refetch)
            .apply(MasterDetailAction::DetailStarted(first))
            .apply(MasterDetailAction::DetailStarted(second))
            .apply(MasterDetailAction::DetailResolved {
                ticket: second,
                result: Ok(amy.clone()),
            })
            .apply(MasterDetailAction::DetailResolved {
                ticket: first,
                result: Ok(people().remove(0)),
            });
        assert_eq!(state.mode, ViewMode::Detail);
        assert_eq!(state.selected, Some(amy));
    }

    #[test]
    fn test_failed_detail_load_is_not_reported_missing() {
        let ticket = FetchTicket::next();
        let state = loaded(RefreshPolicy::Refetch)
            .apply(MasterDetailAction::DetailStarted(ticket))
            .apply(MasterDetailAction::DetailResolved {
                ticket,
                result: Err(SharedError::Network("offline".into())),
            });
        assert_eq!(state.mode, ViewMode::Detail);
        assert_eq!(state.detail_error, Some(DetailError::Failed("Network error: offline".into())));
    }
}

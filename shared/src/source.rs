use crate::error::Result;
use crate::master_detail::{FetchTicket, MasterDetailAction};
use async_trait::async_trait;
use log::debug;

/// The external data collaborator behind a list view.
///
/// Futures are not `Send`: in the browser everything runs on one thread.
#[async_trait(?Send)]
pub trait RecordSource<R> {
    async fn fetch_collection(&self) -> Result<Vec<R>>;

    async fn fetch_record(&self, id: &str) -> Result<R>;

    /// Creates the record when it has no id yet, replaces it otherwise.
    async fn submit_record(&self, record: &R) -> Result<R>;
}

/// Runs one collection fetch and wraps the outcome for the container reducer.
pub async fn load_collection<R, S>(source: &S, ticket: FetchTicket) -> MasterDetailAction<R>
where
    S: RecordSource<R> + ?Sized,
{
    debug!("fetching collection for {:?}", ticket);
    let result = source.fetch_collection().await;
    MasterDetailAction::FetchResolved { ticket, result }
}

/// Loads one record for the detail view, tagged so a late answer cannot override
/// whatever the user did in the meantime.
pub async fn load_detail<R, S>(source: &S, ticket: FetchTicket, id: &str) -> MasterDetailAction<R>
where
    S: RecordSource<R> + ?Sized,
{
    debug!("fetching record {} for {:?}", id, ticket);
    let result = source.fetch_record(id).await;
    MasterDetailAction::DetailResolved { ticket, result }
}

use crate::api::utils::{authenticated_get, authenticated_post, authenticated_put, decode_json, send_json};
use crate::api::{api_url, record_url};
use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{
    EventDto, FacilityDto, FighterDto, NewsArticleDto, PaymentCodeDto, PromoterDto, RankingDto, RecordSource,
    Result, SharedError, TableRecord, TicketDto, TitleHolderDto, VenueDto,
};
use std::marker::PhantomData;

/// A record type served as a REST collection.
pub trait ApiResource: Serialize + DeserializeOwned + TableRecord + Clone + PartialEq + 'static {
    /// Collection path, e.g. `/api/events`.
    const PATH: &'static str;
    /// Singular name for messages.
    const NAME: &'static str;
}

macro_rules! api_resource {
    ($($ty:ty => $path:literal, $name:literal;)*) => {
        $(impl ApiResource for $ty {
            const PATH: &'static str = $path;
            const NAME: &'static str = $name;
        })*
    };
}

api_resource! {
    EventDto => "/api/events", "event";
    FighterDto => "/api/fighters", "fighter";
    VenueDto => "/api/venues", "venue";
    PromoterDto => "/api/promoters", "promoter";
    RankingDto => "/api/rankings", "ranking";
    PaymentCodeDto => "/api/codes", "payment code";
    TicketDto => "/api/tickets", "ticket";
    TitleHolderDto => "/api/titles", "title holder";
    NewsArticleDto => "/api/news", "news article";
    FacilityDto => "/api/facilities", "facility";
}

/// [`RecordSource`] backed by the REST API.
pub struct RestSource<R> {
    _record: PhantomData<fn() -> R>,
}

impl<R> Default for RestSource<R> {
    fn default() -> Self {
        Self { _record: PhantomData }
    }
}

impl<R: ApiResource> RestSource<R> {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait(?Send)]
impl<R: ApiResource> RecordSource<R> for RestSource<R> {
    async fn fetch_collection(&self) -> Result<Vec<R>> {
        debug!("Fetching all {} records", R::NAME);
        let records: Vec<R> = send_json(authenticated_get(&api_url(R::PATH)), R::NAME).await?;
        debug!("Successfully fetched {} {} records", records.len(), R::NAME);
        Ok(records)
    }

    async fn fetch_record(&self, id: &str) -> Result<R> {
        debug!("Fetching {} with ID: {}", R::NAME, id);
        send_json(authenticated_get(&record_url(R::PATH, id)), R::NAME).await
    }

    async fn submit_record(&self, record: &R) -> Result<R> {
        let id = record.record_id();
        let builder = if id.is_empty() {
            debug!("Creating {}", R::NAME);
            authenticated_post(&api_url(R::PATH))
        } else {
            debug!("Updating {} with ID: {}", R::NAME, id);
            authenticated_put(&record_url(R::PATH, &id))
        };
        let request = builder
            .json(record)
            .map_err(|e| SharedError::Conversion(format!("Failed to serialize {}: {}", R::NAME, e)))?;
        let response = request
            .send()
            .await
            .map_err(|e| SharedError::Network(format!("Failed to save {}: {}", R::NAME, e)))?;
        decode_json(response, R::NAME).await
    }
}

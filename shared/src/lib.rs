pub mod dto {
    pub mod auth;
    pub mod code;
    pub mod common;
    pub mod event;
    pub mod facility;
    pub mod fighter;
    pub mod news;
    pub mod promoter;
    pub mod ranking;
    pub mod ticket;
    pub mod title;
    pub mod venue;
}

pub mod bracket;
pub mod dashboard;
pub mod error;
pub mod form;
pub mod master_detail;
pub mod qr;
pub mod session;
pub mod source;
pub mod table;

// Re-export commonly used items
pub use error::{Result, SharedError};

// Re-export DTOs
pub use dto::{
    auth::{LoginRequest, LoginResponse, UserDto},
    code::PaymentCodeDto,
    common::{ErrorResponse, WEIGHT_CLASSES},
    event::{BoutDto, EventDto, EventStatus},
    facility::FacilityDto,
    fighter::FighterDto,
    news::NewsArticleDto,
    promoter::PromoterDto,
    ranking::RankingDto,
    ticket::TicketDto,
    title::TitleHolderDto,
    venue::VenueDto,
};

pub use form::{apply_field_change, FormModel, FormState};
pub use master_detail::{DetailError, FetchTicket, ListStatus, MasterDetail, MasterDetailAction, RefreshPolicy, ViewMode};
pub use source::RecordSource;
pub use table::{Column, SortDirection, SortState, TableQuery, TableRecord};

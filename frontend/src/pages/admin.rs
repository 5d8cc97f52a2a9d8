pub mod codes;
pub mod dashboard;
pub mod events;
pub mod fighters;
pub mod promoters;
pub mod tickets;
pub mod titles;
pub mod venues;

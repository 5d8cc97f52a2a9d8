pub mod entity_form;
pub mod error_banner;
pub mod footer;
pub mod master_detail;
pub mod nav;
pub mod notice;
pub mod pager;
pub mod record_details;
pub mod search_box;
pub mod sortable_table;

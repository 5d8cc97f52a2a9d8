pub mod auth;
pub mod fighters;
pub mod resource;
pub mod tickets;
pub mod utils;

use crate::config::Config;

pub fn api_url(path: &str) -> String {
    join_url(&Config::api_base_url(), path)
}

pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    if base_url.is_empty() {
        // Use relative URL
        path.to_string()
    } else {
        format!("{}{}", base_url, path)
    }
}

/// URL of one record under a collection path, with the id escaped.
pub fn record_url(collection_path: &str, id: &str) -> String {
    format!("{}/{}", api_url(collection_path), urlencoding::encode(id))
}

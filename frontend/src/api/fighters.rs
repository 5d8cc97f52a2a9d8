use crate::api::record_url;
use crate::api::resource::ApiResource;
use crate::api::utils::{authenticated_put, decode_json};
use log::debug;
use serde_json::json;
use shared::{FighterDto, Result, SharedError};

/// Records (or undoes) a fight-night check-in and returns the updated fighter.
pub async fn set_check_in(id: &str, checked_in: bool) -> Result<FighterDto> {
    debug!("Setting check-in for fighter {} to {}", id, checked_in);
    let url = format!("{}/check-in", record_url(FighterDto::PATH, id));
    let request = authenticated_put(&url)
        .json(&json!({ "checkedIn": checked_in }))
        .map_err(|e| SharedError::Conversion(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| SharedError::Network(format!("Failed to update check-in: {}", e)))?;
    decode_json(response, "check-in").await
}

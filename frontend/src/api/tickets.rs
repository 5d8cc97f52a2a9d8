use crate::api::api_url;
use crate::api::utils::{authenticated_post, decode_json};
use log::{debug, warn};
use serde_json::json;
use shared::dto::code::normalize_code;
use shared::{Result, SharedError, TicketDto};

/// Redeems a ticket at the door. A ticket that was already used comes back as
/// `SharedError::Conflict`.
pub async fn redeem_ticket(code: &str) -> Result<TicketDto> {
    let code = normalize_code(code);
    if code.is_empty() {
        return Err(SharedError::Validation("Enter a ticket code".to_string()));
    }
    debug!("Redeeming ticket {}", code);
    let request = authenticated_post(&api_url("/api/tickets/redeem"))
        .json(&json!({ "code": code }))
        .map_err(|e| SharedError::Conversion(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| SharedError::Network(format!("Failed to redeem ticket: {}", e)))?;
    let result = decode_json(response, "ticket").await;
    if let Err(e) = &result {
        warn!("Ticket {} was not redeemed: {}", code, e);
    }
    result
}

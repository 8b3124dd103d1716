use crate::types::*;
use tracing::{debug, warn};

pub fn check_status(status: u16) -> Result<(), UserCardsError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        warn!("User request returned non-OK status {}", status);
        Err(UserCardsError::HttpStatus { status })
    }
}

pub fn parse_users(body: &str) -> Result<Vec<User>, UserCardsError> {
    let users: Vec<User> = serde_json::from_str(body).map_err(|e| {
        warn!("Failed to parse user list: {}", e);
        UserCardsError::Parse(e)
    })?;
    debug!("Parsed {} user records", users.len());
    Ok(users)
}

/// Status is checked before the body is looked at.
pub fn users_from_response(status: u16, body: &str) -> Result<Vec<User>, UserCardsError> {
    check_status(status)?;
    parse_users(body)
}

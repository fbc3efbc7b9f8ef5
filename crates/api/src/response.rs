//! Small response bodies shared by handlers.

use serde::Serialize;

/// `{ "message": ... }` body for confirmations and status pings.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

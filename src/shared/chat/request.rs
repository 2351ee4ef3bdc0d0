//! Chat Request Data Structure
//!
//! Represents a first-contact request between users.

use serde::{Deserialize, Serialize};

/// A chat request from one user to another
///
/// Created when a sender messages a receiver who does not follow them back.
/// Stays unresolved (`accepted = false`) until the receiver accepts it or
/// either party deletes it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct ChatRequest {
    /// Unique request ID, assigned by the storage layer
    pub id: i64,
    /// Username of the user who attempted first contact
    pub sender: String,
    /// Username of the user being contacted
    pub receiver: String,
    /// Whether the receiver has accepted the request
    pub accepted: bool,
    /// Logical timestamp of the send attempt that created the request
    pub timestamp: i64,
}

impl ChatRequest {
    /// Check if the request is still awaiting a response
    pub fn is_pending(&self) -> bool {
        !self.accepted
    }
}

/// Response listing a user's incoming pending requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListChatRequestsResponse {
    pub requests: Vec<ChatRequest>,
}

/// Request to accept a chat request, identified by its ordered pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcceptChatRequestRequest {
    pub sender: String,
    pub receiver: String,
}

/// Response after accepting a chat request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcceptChatRequestResponse {
    pub success: bool,
}

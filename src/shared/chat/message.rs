//! Chat Message Data Structure
//!
//! Represents a delivered message between two users, plus the wire types
//! for the message endpoints.

use serde::{Deserialize, Serialize};

/// A message delivered between two users
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct ChatMessage {
    /// Unique message ID, assigned by the storage layer
    pub id: i64,
    /// Username of the sender
    pub sender: String,
    /// Username of the receiver
    pub receiver: String,
    /// Message text (or a voice-note reference when `is_voice` is set)
    pub body: String,
    /// Sender-supplied logical timestamp; never validated against a clock
    pub timestamp: i64,
    /// Whether this message is a voice note
    pub is_voice: bool,
    /// Optional single emoji reaction
    pub emoji: Option<String>,
    /// Whether the receiver has read this message
    pub is_read: bool,
}

/// Request to send a message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageRequest {
    pub sender: String,
    pub receiver: String,
    pub body: String,
    pub timestamp: i64,
    #[serde(default)]
    pub is_voice: bool,
    #[serde(default)]
    pub emoji: Option<String>,
}

/// Outcome of a send attempt
///
/// A send either delivers a message or, when the receiver does not follow
/// the sender back, leaves a pending chat request behind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SendMessageResponse {
    /// The message was persisted and delivered
    Delivered { message: ChatMessage },
    /// No message was persisted; a chat request is pending instead
    RequestPending,
}

/// Response for a conversation between two users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationResponse {
    pub messages: Vec<ChatMessage>,
}

/// Response listing the users someone has chats with
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantsResponse {
    pub participants: Vec<String>,
}

/// Response carrying a directional unread count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnreadCountResponse {
    pub unread: i64,
}

/// Request to mark a conversation direction as read
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkReadRequest {
    /// Whose messages to mark
    pub sender: String,
    /// Who read them
    pub receiver: String,
}

/// Request to set the emoji reaction on a message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactRequest {
    pub message_id: i64,
    pub emoji: String,
}

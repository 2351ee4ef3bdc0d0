//! Chat Module
//!
//! Data structures for the messaging system:
//!
//! - `ChatMessage` - A delivered message between two users
//! - `ChatRequest` - A pending or accepted first-contact request
//!
//! plus the request/response types for every chat endpoint.

pub mod message;
pub mod request;

// Re-export all types
pub use message::{
    ChatMessage, ConversationResponse, MarkReadRequest, ParticipantsResponse, ReactRequest,
    SendMessageRequest, SendMessageResponse, UnreadCountResponse,
};
pub use request::{
    AcceptChatRequestRequest, AcceptChatRequestResponse, ChatRequest, ListChatRequestsResponse,
};

//! Types shared between the HTTP surface and the backend internals.

pub mod chat;

pub use chat::{
    AcceptChatRequestRequest, AcceptChatRequestResponse, ChatMessage, ChatRequest,
    ConversationResponse, ListChatRequestsResponse, MarkReadRequest, ParticipantsResponse,
    ReactRequest, SendMessageRequest, SendMessageResponse, UnreadCountResponse,
};

//! Chat Backend Module
//!
//! The messaging core: message and chat-request storage, the follow-gated
//! send admission flow, and the HTTP handlers exposing them.
//!
//! - **`db`** - sqlx queries for the `messages` and `chat_requests` tables
//! - **`send`** - admission logic deciding between delivery and a pending
//!   request
//! - **`handlers`** - HTTP handlers for the `/api/chat` endpoints

pub mod db;
pub mod handlers;
pub mod send;

pub use send::{ChatPolicy, SendOutcome};

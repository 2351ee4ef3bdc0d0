//! Routes Module
//!
//! Router construction and the chat route table.

pub mod chat_routes;
pub mod router;

//! Backend Module
//!
//! Server-side code for the chat service:
//!
//! - **`chat`** - messaging core (storage, admission, handlers)
//! - **`users`** / **`follows`** - read-only lookups in platform tables
//! - **`error`** - API error taxonomy and HTTP conversion
//! - **`routes`** - router and route table
//! - **`server`** - configuration, state, initialization

pub mod chat;
pub mod error;
pub mod follows;
pub mod routes;
pub mod server;
pub mod users;

//! Orbis - Social Messaging Backend
//!
//! Orbis is the messaging service of a social-network backend: direct
//! messages between users, gated behind the follow graph for first contact.
//!
//! # Overview
//!
//! A sender can message a receiver directly only when the receiver already
//! follows them back. Otherwise the attempt leaves a single pending chat
//! request for the pair; the receiver can accept or delete it, and the
//! conversation opens once the follow graph records reciprocity.
//!
//! On top of that admission flow the service keeps per-direction read
//! state, unread counts, and a one-slot emoji reaction per message.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types shared by handlers and clients
//!   - Message and chat-request structures
//!   - Request/response types for every endpoint
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server, routes and handlers
//!   - SQLite persistence via sqlx
//!   - The send admission state machine

pub mod backend;
pub mod shared;

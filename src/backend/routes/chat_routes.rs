/**
 * Chat Route Handlers
 *
 * This module defines the route table for the chat API.
 *
 * # Routes
 *
 * ## Messages
 * - `POST /api/chat/send` - Send a message (or leave a chat request)
 * - `GET /api/chat/conversation` - Conversation between two users
 * - `GET /api/chat/participants/{username}` - Users someone has chats with
 * - `GET /api/chat/unread` - Directional unread count
 * - `POST /api/chat/read` - Mark one direction as read
 * - `POST /api/chat/react` - Set an emoji reaction
 *
 * ## Chat requests
 * - `GET /api/chat/requests/{username}` - Pending requests for a user
 * - `POST /api/chat/requests/accept` - Accept a request
 * - `DELETE /api/chat/requests` - Withdraw/decline a request
 */

use axum::Router;

use crate::backend::chat::handlers::{
    accept_chat_request, delete_chat_request, get_chat_requests, get_conversation,
    get_participants, get_unread_count, mark_read, react_to_message, send_message,
};
use crate::backend::server::state::AppState;

/// Configure chat routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with chat routes configured
pub fn configure_chat_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Message endpoints
        .route("/api/chat/send", axum::routing::post(send_message))
        .route("/api/chat/conversation", axum::routing::get(get_conversation))
        .route(
            "/api/chat/participants/{username}",
            axum::routing::get(get_participants),
        )
        .route("/api/chat/unread", axum::routing::get(get_unread_count))
        .route("/api/chat/read", axum::routing::post(mark_read))
        .route("/api/chat/react", axum::routing::post(react_to_message))
        // Chat request endpoints
        .route(
            "/api/chat/requests/{username}",
            axum::routing::get(get_chat_requests),
        )
        .route(
            "/api/chat/requests/accept",
            axum::routing::post(accept_chat_request),
        )
        .route(
            "/api/chat/requests",
            axum::routing::delete(delete_chat_request),
        )
}

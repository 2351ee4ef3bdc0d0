//! Chat HTTP Handlers
//!
//! This module contains the HTTP handlers for sending messages, reading
//! conversations, and managing chat requests.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use sqlx::SqlitePool;

use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::shared::chat::{
    AcceptChatRequestRequest, AcceptChatRequestResponse, ChatMessage, ConversationResponse,
    ListChatRequestsResponse, MarkReadRequest, ParticipantsResponse, ReactRequest,
    SendMessageRequest, SendMessageResponse, UnreadCountResponse,
};

use super::db;
use super::send::{self, SendOutcome};

/// Send a message, or leave a chat request when the pair is not connected
pub async fn send_message(
    State(state): State<AppState>,
    Json(request): Json<SendMessageRequest>,
) -> Result<Json<SendMessageResponse>, ApiError> {
    let outcome = send::send_message(&state.db_pool, state.chat_policy, &request).await?;

    let response = match outcome {
        SendOutcome::Delivered(message) => SendMessageResponse::Delivered { message },
        SendOutcome::RequestPending => SendMessageResponse::RequestPending,
    };
    Ok(Json(response))
}

/// Query parameters for fetching a conversation
#[derive(Debug, serde::Deserialize)]
pub struct ConversationParams {
    pub user_a: String,
    pub user_b: String,
}

/// Get the conversation between two users, oldest first
pub async fn get_conversation(
    State(db_pool): State<SqlitePool>,
    Query(params): Query<ConversationParams>,
) -> Result<Json<ConversationResponse>, ApiError> {
    let messages = db::conversation(&db_pool, &params.user_a, &params.user_b).await?;
    Ok(Json(ConversationResponse { messages }))
}

/// List the users someone has chats with
pub async fn get_participants(
    State(db_pool): State<SqlitePool>,
    Path(username): Path<String>,
) -> Result<Json<ParticipantsResponse>, ApiError> {
    let participants = db::participants_of(&db_pool, &username).await?;
    Ok(Json(ParticipantsResponse { participants }))
}

/// Query parameters identifying a conversation direction
#[derive(Debug, serde::Deserialize)]
pub struct DirectionParams {
    pub sender: String,
    pub receiver: String,
}

/// Get the unread count for one direction of a conversation
pub async fn get_unread_count(
    State(db_pool): State<SqlitePool>,
    Query(params): Query<DirectionParams>,
) -> Result<Json<UnreadCountResponse>, ApiError> {
    let unread = db::unread_count(&db_pool, &params.sender, &params.receiver).await?;
    Ok(Json(UnreadCountResponse { unread }))
}

/// Mark every message in one direction as read
pub async fn mark_read(
    State(db_pool): State<SqlitePool>,
    Json(request): Json<MarkReadRequest>,
) -> Result<StatusCode, ApiError> {
    db::mark_read(&db_pool, &request.sender, &request.receiver).await?;
    Ok(StatusCode::OK)
}

/// Replace the emoji reaction on a message
pub async fn react_to_message(
    State(db_pool): State<SqlitePool>,
    Json(request): Json<ReactRequest>,
) -> Result<Json<ChatMessage>, ApiError> {
    let message = db::set_reaction(&db_pool, request.message_id, &request.emoji)
        .await?
        .ok_or_else(|| {
            ApiError::not_found(format!("message {} does not exist", request.message_id))
        })?;
    Ok(Json(message))
}

/// List the pending chat requests addressed to a user
pub async fn get_chat_requests(
    State(db_pool): State<SqlitePool>,
    Path(username): Path<String>,
) -> Result<Json<ListChatRequestsResponse>, ApiError> {
    let requests = db::list_pending_requests_for(&db_pool, &username).await?;
    Ok(Json(ListChatRequestsResponse { requests }))
}

/// Accept the chat request for an ordered pair
pub async fn accept_chat_request(
    State(db_pool): State<SqlitePool>,
    Json(request): Json<AcceptChatRequestRequest>,
) -> Result<Json<AcceptChatRequestResponse>, ApiError> {
    db::accept_request(&db_pool, &request.sender, &request.receiver)
        .await?
        .ok_or_else(|| {
            ApiError::not_found(format!(
                "no chat request from {} to {}",
                request.sender, request.receiver
            ))
        })?;

    Ok(Json(AcceptChatRequestResponse { success: true }))
}

/// Delete the chat request for an ordered pair; a no-op when absent
pub async fn delete_chat_request(
    State(db_pool): State<SqlitePool>,
    Query(params): Query<DirectionParams>,
) -> Result<StatusCode, ApiError> {
    db::delete_request_by_pair(&db_pool, &params.sender, &params.receiver).await?;
    Ok(StatusCode::OK)
}

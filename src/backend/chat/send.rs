/**
 * Send Admission
 *
 * The one piece of the chat service with real state transitions: deciding
 * whether a send attempt delivers a message or leaves a pending chat
 * request behind.
 *
 * # Admission sequence
 *
 * 1. The sender must exist and must not be banned; the receiver must exist.
 * 2. If the receiver already follows the sender back, the message is
 *    appended and delivered.
 * 3. Otherwise a single unresolved chat request is left for the ordered
 *    (sender, receiver) pair - creating one if absent, never duplicating -
 *    and no message is persisted.
 *
 * The whole sequence runs inside one transaction: a failed attempt commits
 * nothing, and the request-existence check cannot interleave with another
 * insert for the same pair thanks to the partial unique index.
 *
 * Accepting a request is bookkeeping only under the default policy; the
 * follow graph remains the admission gate. `ChatPolicy` can flip that so an
 * accepted request also opens the conversation.
 */

use sqlx::SqlitePool;

use crate::backend::error::ApiError;
use crate::backend::{follows, users};
use crate::shared::chat::{ChatMessage, SendMessageRequest};

use super::db;

/// Tunable admission behavior
#[derive(Debug, Clone, Copy, Default)]
pub struct ChatPolicy {
    /// When true, an accepted chat request between two users (either
    /// direction) opens the conversation even without a follow edge.
    pub accepted_request_opens_chat: bool,
}

/// What a send attempt produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// The receiver follows the sender back; the message was persisted
    Delivered(ChatMessage),
    /// No reciprocity; an unresolved chat request is pending instead
    RequestPending,
}

/// Attempt to send a message from one user to another
///
/// # Errors
///
/// - `NotFound` when the sender or receiver username is unknown
/// - `Forbidden` when the sender is banned
///
/// Either error leaves both tables untouched.
pub async fn send_message(
    pool: &SqlitePool,
    policy: ChatPolicy,
    request: &SendMessageRequest,
) -> Result<SendOutcome, ApiError> {
    let mut tx = pool.begin().await?;

    let sender = users::get_user_by_username(&mut *tx, &request.sender)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("user {} does not exist", request.sender)))?;

    if sender.is_banned {
        tracing::warn!(sender = %request.sender, "rejected send from banned account");
        return Err(ApiError::forbidden("banned users cannot send messages"));
    }

    users::get_user_by_username(&mut *tx, &request.receiver)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("user {} does not exist", request.receiver)))?;

    // Does the receiver already follow the sender back?
    let follows_back =
        follows::edge_exists(&mut *tx, &request.receiver, &request.sender).await?;

    let connected = follows_back
        || (policy.accepted_request_opens_chat
            && db::has_accepted_between(&mut *tx, &request.sender, &request.receiver).await?);

    if !connected {
        let created =
            db::create_pending_request(&mut *tx, &request.sender, &request.receiver, request.timestamp)
                .await?;
        tx.commit().await?;

        if created.is_some() {
            tracing::debug!(
                sender = %request.sender,
                receiver = %request.receiver,
                "first contact gated behind a chat request"
            );
        }
        return Ok(SendOutcome::RequestPending);
    }

    let message = db::append_message(
        &mut *tx,
        &request.sender,
        &request.receiver,
        &request.body,
        request.timestamp,
        request.is_voice,
        request.emoji.as_deref(),
    )
    .await?;
    tx.commit().await?;

    Ok(SendOutcome::Delivered(message))
}

//! Database operations for chat
//!
//! This module contains the queries for delivered messages and for chat
//! requests. Every function takes an executor so the same query can run
//! against the pool or inside a transaction.

use std::collections::BTreeSet;

use chrono::Utc;
use sqlx::sqlite::SqliteExecutor;

use crate::shared::chat::{ChatMessage, ChatRequest};

// -- Messages --

/// Append a delivered message
///
/// Inserts with `is_read = false`. The body is stored as-is; bounds are the
/// storage layer's concern.
pub async fn append_message(
    db: impl SqliteExecutor<'_>,
    sender: &str,
    receiver: &str,
    body: &str,
    timestamp: i64,
    is_voice: bool,
    emoji: Option<&str>,
) -> Result<ChatMessage, sqlx::Error> {
    let message = sqlx::query_as::<_, ChatMessage>(
        r#"
        INSERT INTO messages (sender, receiver, body, timestamp, is_voice, emoji, is_read, created_at)
        VALUES (?, ?, ?, ?, ?, ?, 0, ?)
        RETURNING id, sender, receiver, body, timestamp, is_voice, emoji, is_read
        "#,
    )
    .bind(sender)
    .bind(receiver)
    .bind(body)
    .bind(timestamp)
    .bind(is_voice)
    .bind(emoji)
    .bind(Utc::now().to_rfc3339())
    .fetch_one(db)
    .await?;

    Ok(message)
}

/// Get the conversation between two users
///
/// Returns messages in both directions, ordered by timestamp ascending with
/// id as the tiebreak (ids are assigned in insertion order).
pub async fn conversation(
    db: impl SqliteExecutor<'_>,
    user_a: &str,
    user_b: &str,
) -> Result<Vec<ChatMessage>, sqlx::Error> {
    let messages = sqlx::query_as::<_, ChatMessage>(
        r#"
        SELECT id, sender, receiver, body, timestamp, is_voice, emoji, is_read
        FROM messages
        WHERE (sender = ? AND receiver = ?) OR (sender = ? AND receiver = ?)
        ORDER BY timestamp ASC, id ASC
        "#,
    )
    .bind(user_a)
    .bind(user_b)
    .bind(user_b)
    .bind(user_a)
    .fetch_all(db)
    .await?;

    Ok(messages)
}

/// List the users someone has exchanged messages with
///
/// Distinct counterparts across both directions, excluding the user
/// themselves, sorted for a stable response.
pub async fn participants_of(
    db: impl SqliteExecutor<'_>,
    username: &str,
) -> Result<Vec<String>, sqlx::Error> {
    let pairs = sqlx::query_as::<_, (String, String)>(
        r#"
        SELECT sender, receiver
        FROM messages
        WHERE sender = ? OR receiver = ?
        "#,
    )
    .bind(username)
    .bind(username)
    .fetch_all(db)
    .await?;

    let mut participants = BTreeSet::new();
    for (sender, receiver) in pairs {
        if sender != username {
            participants.insert(sender);
        }
        if receiver != username {
            participants.insert(receiver);
        }
    }

    Ok(participants.into_iter().collect())
}

/// Count unread messages from `sender` to `receiver`
///
/// Directional: only messages *from* sender *to* receiver that the receiver
/// has not read yet.
pub async fn unread_count(
    db: impl SqliteExecutor<'_>,
    sender: &str,
    receiver: &str,
) -> Result<i64, sqlx::Error> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM messages
        WHERE sender = ? AND receiver = ? AND is_read = 0
        "#,
    )
    .bind(sender)
    .bind(receiver)
    .fetch_one(db)
    .await?;

    Ok(count)
}

/// Mark every unread message from `sender` to `receiver` as read
///
/// Idempotent: the flag only ever flips false to true, so repeated calls
/// change nothing further. Returns the number of rows flipped.
pub async fn mark_read(
    db: impl SqliteExecutor<'_>,
    sender: &str,
    receiver: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE messages
        SET is_read = 1
        WHERE sender = ? AND receiver = ? AND is_read = 0
        "#,
    )
    .bind(sender)
    .bind(receiver)
    .execute(db)
    .await?;

    Ok(result.rows_affected())
}

/// Replace the emoji reaction on a message
///
/// Returns the updated message, or None when the id does not exist. The
/// emoji content is not validated.
pub async fn set_reaction(
    db: impl SqliteExecutor<'_>,
    message_id: i64,
    emoji: &str,
) -> Result<Option<ChatMessage>, sqlx::Error> {
    let message = sqlx::query_as::<_, ChatMessage>(
        r#"
        UPDATE messages
        SET emoji = ?
        WHERE id = ?
        RETURNING id, sender, receiver, body, timestamp, is_voice, emoji, is_read
        "#,
    )
    .bind(emoji)
    .bind(message_id)
    .fetch_optional(db)
    .await?;

    Ok(message)
}

// -- Chat requests --

/// Create an unresolved chat request unless one already exists
///
/// Insert-or-ignore under the partial unique index on unresolved
/// (sender, receiver) pairs, so two concurrent first contacts still leave a
/// single row. Returns None when the request already existed.
pub async fn create_pending_request(
    db: impl SqliteExecutor<'_>,
    sender: &str,
    receiver: &str,
    timestamp: i64,
) -> Result<Option<ChatRequest>, sqlx::Error> {
    let request = sqlx::query_as::<_, ChatRequest>(
        r#"
        INSERT INTO chat_requests (sender, receiver, accepted, timestamp, created_at)
        VALUES (?, ?, 0, ?, ?)
        ON CONFLICT DO NOTHING
        RETURNING id, sender, receiver, accepted, timestamp
        "#,
    )
    .bind(sender)
    .bind(receiver)
    .bind(timestamp)
    .bind(Utc::now().to_rfc3339())
    .fetch_optional(db)
    .await?;

    Ok(request)
}

/// Find the unresolved request for an ordered pair
pub async fn find_pending_request(
    db: impl SqliteExecutor<'_>,
    sender: &str,
    receiver: &str,
) -> Result<Option<ChatRequest>, sqlx::Error> {
    let request = sqlx::query_as::<_, ChatRequest>(
        r#"
        SELECT id, sender, receiver, accepted, timestamp
        FROM chat_requests
        WHERE sender = ? AND receiver = ? AND accepted = 0
        "#,
    )
    .bind(sender)
    .bind(receiver)
    .fetch_optional(db)
    .await?;

    Ok(request)
}

/// Find the request for an ordered pair regardless of accepted state
pub async fn find_request_by_pair(
    db: impl SqliteExecutor<'_>,
    sender: &str,
    receiver: &str,
) -> Result<Option<ChatRequest>, sqlx::Error> {
    let request = sqlx::query_as::<_, ChatRequest>(
        r#"
        SELECT id, sender, receiver, accepted, timestamp
        FROM chat_requests
        WHERE sender = ? AND receiver = ?
        ORDER BY id ASC
        "#,
    )
    .bind(sender)
    .bind(receiver)
    .fetch_optional(db)
    .await?;

    Ok(request)
}

/// Accept the chat request for an ordered pair
///
/// Matches the pair regardless of current accepted state, so re-accepting
/// is a no-op update rather than an error. Returns None when no request
/// exists for the pair.
pub async fn accept_request(
    db: impl SqliteExecutor<'_>,
    sender: &str,
    receiver: &str,
) -> Result<Option<ChatRequest>, sqlx::Error> {
    let request = sqlx::query_as::<_, ChatRequest>(
        r#"
        UPDATE chat_requests
        SET accepted = 1
        WHERE sender = ? AND receiver = ?
        RETURNING id, sender, receiver, accepted, timestamp
        "#,
    )
    .bind(sender)
    .bind(receiver)
    .fetch_optional(db)
    .await?;

    Ok(request)
}

/// List the unresolved requests addressed to a user
pub async fn list_pending_requests_for(
    db: impl SqliteExecutor<'_>,
    receiver: &str,
) -> Result<Vec<ChatRequest>, sqlx::Error> {
    let requests = sqlx::query_as::<_, ChatRequest>(
        r#"
        SELECT id, sender, receiver, accepted, timestamp
        FROM chat_requests
        WHERE receiver = ? AND accepted = 0
        ORDER BY created_at DESC
        "#,
    )
    .bind(receiver)
    .fetch_all(db)
    .await?;

    Ok(requests)
}

/// Delete the chat request for an ordered pair
///
/// Succeeds silently when no request exists. Returns the number of rows
/// removed.
pub async fn delete_request_by_pair(
    db: impl SqliteExecutor<'_>,
    sender: &str,
    receiver: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM chat_requests
        WHERE sender = ? AND receiver = ?
        "#,
    )
    .bind(sender)
    .bind(receiver)
    .execute(db)
    .await?;

    Ok(result.rows_affected())
}

/// Check whether an accepted request exists between two users
///
/// Either direction counts; an accepted connection opens the conversation
/// both ways when the acceptance policy is enabled.
pub async fn has_accepted_between(
    db: impl SqliteExecutor<'_>,
    user_a: &str,
    user_b: &str,
) -> Result<bool, sqlx::Error> {
    let exists = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS(
            SELECT 1 FROM chat_requests
            WHERE accepted = 1
              AND ((sender = ? AND receiver = ?) OR (sender = ? AND receiver = ?))
        )
        "#,
    )
    .bind(user_a)
    .bind(user_b)
    .bind(user_b)
    .bind(user_a)
    .fetch_one(db)
    .await?;

    Ok(exists)
}

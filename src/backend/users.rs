/**
 * User Lookups
 *
 * The user table is owned by the account service; the messaging core only
 * resolves usernames and checks the ban flag before admitting a send.
 */

use sqlx::sqlite::SqliteExecutor;

/// The slice of a user row the messaging core cares about
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    pub id: i64,
    /// Username (unique)
    pub username: String,
    /// Whether an admin has banned this account
    pub is_banned: bool,
}

/// Get user by username
///
/// # Arguments
/// * `db` - Database executor
/// * `username` - Username
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_username(
    db: impl SqliteExecutor<'_>,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, is_banned
        FROM users
        WHERE username = ?
        "#,
    )
    .bind(username)
    .fetch_optional(db)
    .await?;

    Ok(user)
}

/**
 * Follow Graph Lookups
 *
 * The follow graph is owned by the social service; the messaging core only
 * asks one question of it: does the receiver already follow the sender back.
 */

use sqlx::sqlite::SqliteExecutor;

/// Check whether `follower` follows `followed`
///
/// # Arguments
/// * `db` - Database executor
/// * `follower` - Username of the potential follower
/// * `followed` - Username being followed
///
/// # Returns
/// True when the directed edge exists
pub async fn edge_exists(
    db: impl SqliteExecutor<'_>,
    follower: &str,
    followed: &str,
) -> Result<bool, sqlx::Error> {
    let exists = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS(
            SELECT 1 FROM follows
            WHERE follower_username = ? AND followed_username = ?
        )
        "#,
    )
    .bind(follower)
    .bind(followed)
    .fetch_one(db)
    .await?;

    Ok(exists)
}

//! Row seeding helpers for the externally-owned platform tables

use sqlx::SqlitePool;

/// Insert a user row; returns its id
pub async fn create_user(pool: &SqlitePool, username: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO users (username, full_name, password_hash)
        VALUES (?, ?, 'not-a-real-hash')
        RETURNING id
        "#,
    )
    .bind(username)
    .bind(username)
    .fetch_one(pool)
    .await
    .expect("Failed to seed user")
}

/// Flip the ban flag on a user
pub async fn ban_user(pool: &SqlitePool, username: &str) {
    sqlx::query("UPDATE users SET is_banned = 1 WHERE username = ?")
        .bind(username)
        .execute(pool)
        .await
        .expect("Failed to ban user");
}

/// Insert a directed follow edge
pub async fn create_follow(pool: &SqlitePool, follower: &str, followed: &str) {
    sqlx::query(
        r#"
        INSERT INTO follows (follower_username, followed_username)
        VALUES (?, ?)
        "#,
    )
    .bind(follower)
    .bind(followed)
    .execute(pool)
    .await
    .expect("Failed to seed follow edge");
}

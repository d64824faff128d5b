//! User profile documents

use sonora_core::{error::Result, types::*, validation::require_fields};
use sqlx::SqlitePool;

/// Insert a user document
pub async fn insert(pool: &SqlitePool, user: &User) -> Result<()> {
    require_fields(&[("user id", user.id.as_str())])?;

    let body = serde_json::to_string(user)?;

    sqlx::query("INSERT INTO users (id, body) VALUES (?, ?)")
        .bind(&user.id)
        .bind(body)
        .execute(pool)
        .await?;

    Ok(())
}

/// Get user by ID
pub async fn get_by_id(pool: &SqlitePool, id: &UserId) -> Result<Option<User>> {
    require_fields(&[("id", id.as_str())])?;

    let body: Option<String> = sqlx::query_scalar("SELECT body FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(body.map(|b| serde_json::from_str(&b)).transpose()?)
}

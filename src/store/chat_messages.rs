use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::models::{ChatMessage, ChatRole};

/// A user's transcript for one agent, oldest first.
pub async fn history(
    pool: &PgPool,
    user_id: Uuid,
    agent_type: &str,
) -> Result<Vec<ChatMessage>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT id, user_id, agent_type, role, content, image_url, created_at
        FROM chat_messages
        WHERE user_id = $1 AND agent_type = $2
        ORDER BY created_at ASC
        "#,
    )
    .bind(user_id)
    .bind(agent_type)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .filter_map(|row| {
            let role = ChatRole::parse(row.get("role"))?;
            Some(ChatMessage {
                id: row.get("id"),
                user_id: row.get("user_id"),
                agent_type: row.get("agent_type"),
                role,
                content: row.get("content"),
                image_url: row.get("image_url"),
                created_at: row.get("created_at"),
            })
        })
        .collect())
}

/// Append-only; rows are never updated or deleted.
pub async fn append(
    pool: &PgPool,
    user_id: Uuid,
    agent_type: &str,
    role: ChatRole,
    content: &str,
    image_url: Option<&str>,
) -> Result<Uuid, sqlx::Error> {
    let row = sqlx::query(
        r#"
        INSERT INTO chat_messages (user_id, agent_type, role, content, image_url)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind(user_id)
    .bind(agent_type)
    .bind(role.as_str())
    .bind(content)
    .bind(image_url)
    .fetch_one(pool)
    .await?;
    Ok(row.get("id"))
}

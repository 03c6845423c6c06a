use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::models::{Subscription, SubscriptionStatus};

fn map_subscription(row: PgRow) -> Subscription {
    Subscription {
        id: row.get("id"),
        user_id: row.get("user_id"),
        status: SubscriptionStatus::parse(row.get("status")),
        plan_type: row.get("plan_type"),
        expires_at: row.get("expires_at"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

pub async fn find_by_user(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<Subscription>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT id, user_id, status, plan_type, expires_at, created_at, updated_at
        FROM subscriptions
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(map_subscription))
}

/// Lazy expiry: the subscription gate calls this when it observes a row past
/// its expiry. No background sweep exists.
pub async fn mark_inactive(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE subscriptions SET status = 'inactive', updated_at = NOW() WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Webhook-driven activation. One statement, last-writer-wins: the UNIQUE
/// constraint on user_id turns concurrent deliveries into plain overwrites.
pub async fn activate(
    pool: &PgPool,
    user_id: Uuid,
    expires_at: DateTime<Utc>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO subscriptions (user_id, status, plan_type, expires_at)
        VALUES ($1, 'active', 'premium', $2)
        ON CONFLICT (user_id) DO UPDATE
            SET status = 'active',
                plan_type = 'premium',
                expires_at = EXCLUDED.expires_at,
                updated_at = NOW()
        "#,
    )
    .bind(user_id)
    .bind(expires_at)
    .execute(pool)
    .await?;
    Ok(())
}

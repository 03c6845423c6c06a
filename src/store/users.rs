use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::models::{ProfileView, User, UserRole};

fn map_user(row: PgRow) -> User {
    User {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        password_hash: row.get("password_hash"),
        role: UserRole::parse(row.get("role")),
        created_at: row.get("created_at"),
    }
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    let row = sqlx::query(
        "SELECT id, name, email, password_hash, role, created_at FROM users WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(map_user))
}

pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let row = sqlx::query(
        "SELECT id, name, email, password_hash, role, created_at FROM users WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(map_user))
}

/// Inserts the user together with their empty profile row and returns the
/// created record. A duplicate email surfaces as the `users_email_key`
/// constraint.
pub async fn create_with_profile(
    pool: &PgPool,
    name: &str,
    email: &str,
    password_hash: &str,
    role: UserRole,
) -> Result<User, sqlx::Error> {
    let row = sqlx::query(
        r#"
        WITH new_user AS (
          INSERT INTO users (name, email, password_hash, role)
          VALUES ($1, $2, $3, $4)
          RETURNING id, name, email, password_hash, role, created_at
        ),
        new_profile AS (
          INSERT INTO user_profiles (user_id)
          SELECT id FROM new_user
        )
        SELECT id, name, email, password_hash, role, created_at FROM new_user
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(role.as_str())
    .fetch_one(pool)
    .await?;
    Ok(map_user(row))
}

pub async fn profile_view(pool: &PgPool, user_id: Uuid) -> Result<Option<ProfileView>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT u.id, u.name, u.email, u.role, up.profile_image_url, up.bio
        FROM users u
        LEFT JOIN user_profiles up ON u.id = up.user_id
        WHERE u.id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| ProfileView {
        id: r.get("id"),
        name: r.get("name"),
        email: r.get("email"),
        role: UserRole::parse(r.get("role")),
        profile_image_url: r.get("profile_image_url"),
        bio: r.get("bio"),
    }))
}

pub async fn update_profile(
    pool: &PgPool,
    user_id: Uuid,
    name: &str,
    bio: Option<&str>,
    profile_image_url: Option<&str>,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET name = $1 WHERE id = $2")
        .bind(name)
        .bind(user_id)
        .execute(pool)
        .await?;

    sqlx::query(
        r#"
        INSERT INTO user_profiles (user_id, bio, profile_image_url)
        VALUES ($1, $2, $3)
        ON CONFLICT (user_id) DO UPDATE
            SET bio = EXCLUDED.bio,
                profile_image_url = EXCLUDED.profile_image_url
        "#,
    )
    .bind(user_id)
    .bind(bio)
    .bind(profile_image_url)
    .execute(pool)
    .await?;

    Ok(())
}

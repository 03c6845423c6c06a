use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::models::{Course, CourseSummary};

fn map_course(row: &PgRow) -> Course {
    Course {
        id: row.get("id"),
        title: row.get("title"),
        description: row.get("description"),
        thumbnail_url: row.get("thumbnail_url"),
        created_at: row.get("created_at"),
    }
}

pub async fn list_with_counts(pool: &PgPool) -> Result<Vec<CourseSummary>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT c.id, c.title, c.description, c.thumbnail_url, c.created_at,
               COUNT(l.id) AS lesson_count
        FROM courses c
        LEFT JOIN lessons l ON c.id = l.course_id
        GROUP BY c.id
        ORDER BY c.created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| CourseSummary {
            lesson_count: row.get("lesson_count"),
            course: map_course(&row),
        })
        .collect())
}

pub async fn create(
    pool: &PgPool,
    title: &str,
    description: Option<&str>,
    thumbnail_url: Option<&str>,
) -> Result<Course, sqlx::Error> {
    let row = sqlx::query(
        r#"
        INSERT INTO courses (title, description, thumbnail_url)
        VALUES ($1, $2, $3)
        RETURNING id, title, description, thumbnail_url, created_at
        "#,
    )
    .bind(title)
    .bind(description)
    .bind(thumbnail_url)
    .fetch_one(pool)
    .await?;
    Ok(map_course(&row))
}

/// Returns false when no course with that id exists.
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    title: &str,
    description: Option<&str>,
    thumbnail_url: Option<&str>,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE courses SET title = $1, description = $2, thumbnail_url = $3 WHERE id = $4",
    )
    .bind(title)
    .bind(description)
    .bind(thumbnail_url)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Cascades to the course's lessons.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM courses WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::models::{Lesson, LessonProgress, LessonWithProgress};

fn map_lesson(row: &PgRow) -> Lesson {
    Lesson {
        id: row.get("id"),
        course_id: row.get("course_id"),
        title: row.get("title"),
        description: row.get("description"),
        video_id: row.get("video_id"),
        order_index: row.get("order_index"),
    }
}

/// Lessons of a course in display order, with the caller's completion flag.
pub async fn list_for_course(
    pool: &PgPool,
    course_id: Uuid,
    user_id: Uuid,
) -> Result<Vec<LessonWithProgress>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT l.id, l.course_id, l.title, l.description, l.video_id, l.order_index,
               COALESCE(lp.completed, FALSE) AS completed
        FROM lessons l
        LEFT JOIN lesson_progress lp ON l.id = lp.lesson_id AND lp.user_id = $1
        WHERE l.course_id = $2
        ORDER BY l.order_index, l.id
        "#,
    )
    .bind(user_id)
    .bind(course_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| LessonWithProgress {
            completed: row.get("completed"),
            lesson: map_lesson(&row),
        })
        .collect())
}

pub async fn create(
    pool: &PgPool,
    course_id: Uuid,
    title: &str,
    description: Option<&str>,
    video_id: &str,
    order_index: i32,
) -> Result<Lesson, sqlx::Error> {
    let row = sqlx::query(
        r#"
        INSERT INTO lessons (course_id, title, description, video_id, order_index)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, course_id, title, description, video_id, order_index
        "#,
    )
    .bind(course_id)
    .bind(title)
    .bind(description)
    .bind(video_id)
    .bind(order_index)
    .fetch_one(pool)
    .await?;
    Ok(map_lesson(&row))
}

pub async fn update(
    pool: &PgPool,
    id: Uuid,
    title: &str,
    description: Option<&str>,
    video_id: &str,
    order_index: i32,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE lessons
        SET title = $1, description = $2, video_id = $3, order_index = $4
        WHERE id = $5
        "#,
    )
    .bind(title)
    .bind(description)
    .bind(video_id)
    .bind(order_index)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM lessons WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Upserts the caller's progress row. completed_at is set iff completed.
pub async fn set_progress(
    pool: &PgPool,
    user_id: Uuid,
    lesson_id: Uuid,
    completed: bool,
) -> Result<LessonProgress, sqlx::Error> {
    let row = sqlx::query(
        r#"
        INSERT INTO lesson_progress (user_id, lesson_id, completed, completed_at)
        VALUES ($1, $2, $3, CASE WHEN $3 THEN NOW() ELSE NULL END)
        ON CONFLICT (user_id, lesson_id) DO UPDATE
            SET completed = EXCLUDED.completed,
                completed_at = EXCLUDED.completed_at
        RETURNING user_id, lesson_id, completed, completed_at
        "#,
    )
    .bind(user_id)
    .bind(lesson_id)
    .bind(completed)
    .fetch_one(pool)
    .await?;

    Ok(LessonProgress {
        user_id: row.get("user_id"),
        lesson_id: row.get("lesson_id"),
        completed: row.get("completed"),
        completed_at: row.get("completed_at"),
    })
}

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct Lesson {
    pub id: Uuid,
    pub course_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub video_id: String,
    pub order_index: i32,
}

/// Lesson as listed for a particular user: display order is `order_index`
/// with ties broken by id, and `completed` reflects that user's progress row.
#[derive(Debug, Clone, Serialize)]
pub struct LessonWithProgress {
    #[serde(flatten)]
    pub lesson: Lesson,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LessonProgress {
    pub user_id: Uuid,
    pub lesson_id: Uuid,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
}

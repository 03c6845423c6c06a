pub mod auth_handler;
pub mod chat_handler;
pub mod course_handler;
pub mod lesson_handler;
pub mod profile_handler;
pub mod subscription_handler;
pub mod webhook_handler;

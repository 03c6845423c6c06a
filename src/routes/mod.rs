pub mod auth_routes;
pub mod chat_routes;
pub mod course_routes;
pub mod lesson_routes;
pub mod profile_routes;
pub mod subscription_routes;
pub mod webhook_routes;

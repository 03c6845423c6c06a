//! Store boundary: every query lives here and maps rows to the explicit
//! record types in `models` before anything else sees them.

pub mod chat_messages;
pub mod courses;
pub mod lessons;
pub mod schema;
pub mod subscriptions;
pub mod users;

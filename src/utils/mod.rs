mod auth;
pub use auth::constant_time_eq;

//! The three request gates, applied in fixed order where combined:
//! authenticate → authorize-role → authorize-subscription.

pub mod admin;
pub mod jwt_middleware;
pub mod subscription_middleware;

pub use admin::AdminUser;
pub use jwt_middleware::VerifyJwt;
pub use subscription_middleware::CheckSubscription;

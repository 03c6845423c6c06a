use actix_web::web;

use crate::handlers::subscription_handler;
use crate::middleware::VerifyJwt;

pub fn config(cfg: &mut web::ServiceConfig, jwt: VerifyJwt) {
    cfg.service(
        web::scope("/subscription")
            .wrap(jwt.clone())
            .service(subscription_handler::status),
    )
    .service(
        web::scope("/payment")
            .wrap(jwt)
            .service(subscription_handler::create_checkout),
    );
}

use actix_web::web;

use crate::handlers::profile_handler;
use crate::middleware::VerifyJwt;

pub fn config(cfg: &mut web::ServiceConfig, jwt: VerifyJwt) {
    cfg.service(
        web::scope("/profile")
            .wrap(jwt)
            .service(profile_handler::get_profile)
            .service(profile_handler::update_profile),
    );
}

use actix_web::web;

use crate::handlers::auth_handler;
use crate::middleware::VerifyJwt;

pub fn config(cfg: &mut web::ServiceConfig, jwt: VerifyJwt) {
    cfg.service(
        web::scope("/auth")
            .service(auth_handler::register)
            .service(auth_handler::login)
            .service(web::scope("").wrap(jwt).service(auth_handler::me)),
    );
}

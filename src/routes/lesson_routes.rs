use actix_web::web;

use crate::handlers::lesson_handler;
use crate::middleware::VerifyJwt;

pub fn config(cfg: &mut web::ServiceConfig, jwt: VerifyJwt) {
    cfg.service(
        web::scope("/lessons")
            .wrap(jwt)
            .service(lesson_handler::create_lesson)
            .service(lesson_handler::update_lesson)
            .service(lesson_handler::delete_lesson)
            .service(lesson_handler::complete_lesson),
    );
}

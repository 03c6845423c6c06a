use actix_web::web;

use crate::handlers::course_handler;
use crate::middleware::VerifyJwt;

/// Mutations additionally pass the admin gate inside the handlers'
/// `AdminUser` extractor.
pub fn config(cfg: &mut web::ServiceConfig, jwt: VerifyJwt) {
    cfg.service(
        web::scope("/courses")
            .wrap(jwt)
            .service(course_handler::list_courses)
            .service(course_handler::create_course)
            .service(course_handler::update_course)
            .service(course_handler::delete_course)
            .service(course_handler::course_lessons),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AuthUser, UserRole};
    use crate::test_support::{response_status, test_state, JWT_SECRET};
    use crate::token;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use uuid::Uuid;

    #[actix_web::test]
    async fn course_mutation_with_non_admin_token_is_forbidden() {
        let state = test_state();
        let jwt = VerifyJwt::new(state.clone());
        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(web::scope("/api").configure(|cfg| config(cfg, jwt.clone()))),
        )
        .await;

        let member = token::issue(
            JWT_SECRET,
            &AuthUser {
                id: Uuid::new_v4(),
                email: "member@x.com".to_string(),
                role: UserRole::User,
            },
        )
        .unwrap();

        let req = test::TestRequest::post()
            .uri("/api/courses")
            .insert_header(("authorization", format!("Bearer {member}")))
            .set_json(serde_json::json!({ "title": "Novo curso" }))
            .to_request();
        let status = response_status(&app, req).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }
}

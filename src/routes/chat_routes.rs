use actix_web::web;

use crate::handlers::chat_handler;
use crate::middleware::{CheckSubscription, VerifyJwt};

/// Middleware registered last runs first, so wrapping the subscription gate
/// before the jwt gate keeps the required order: authenticate, then
/// authorize-subscription.
pub fn config(cfg: &mut web::ServiceConfig, jwt: VerifyJwt, subscription: CheckSubscription) {
    cfg.service(
        web::scope("/chat")
            .wrap(subscription)
            .wrap(jwt)
            .service(chat_handler::get_history)
            .service(chat_handler::append_history),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{response_status, test_state};
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn history_without_token_is_unauthorized() {
        let state = test_state();
        let jwt = VerifyJwt::new(state.clone());
        let subscription = CheckSubscription::new(state.clone());
        let app = test::init_service(App::new().app_data(state).service(
            web::scope("/api").configure(|cfg| config(cfg, jwt.clone(), subscription.clone())),
        ))
        .await;

        let req = test::TestRequest::get()
            .uri("/api/chat/history/professor")
            .to_request();
        let status = response_status(&app, req).await;
        // The authenticate gate answers before the subscription gate can
        // touch the store.
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}

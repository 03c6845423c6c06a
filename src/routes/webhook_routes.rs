use actix_web::web;

use crate::handlers::webhook_handler;

/// Signature-gated by the handler itself; no auth token involved.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/webhooks").service(webhook_handler::cakto));
}

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::web::{self, Data};
use actix_web::{App, HttpServer};
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

mod client;
mod config;
mod errors;
mod handlers;
mod middleware;
mod models;
mod routes;
mod store;
#[cfg(test)]
mod test_support;
mod token;
mod utils;

use crate::config::Config;
use crate::middleware::{CheckSubscription, VerifyJwt};

pub struct AppState {
    pub db: Pool<Postgres>,
    pub config: Config,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::from_filename(".env")
        .or_else(|_| dotenv::dotenv())
        .ok();

    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await
        .expect("Error building a connection pool");

    store::schema::init(&pool)
        .await
        .expect("Error initializing the database schema");

    let host = config.host.clone();
    let port = config.port;

    let app_data = Data::new(AppState { db: pool, config });
    let jwt = VerifyJwt::new(app_data.clone());
    let subscription = CheckSubscription::new(app_data.clone());

    log::info!("[Server] listening on {host}:{port}");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(app_data.clone())
            .wrap(Logger::default())
            .wrap(cors)
            .service(
                web::scope("/api")
                    .configure(|cfg| routes::auth_routes::config(cfg, jwt.clone()))
                    .configure(|cfg| routes::profile_routes::config(cfg, jwt.clone()))
                    .configure(|cfg| routes::subscription_routes::config(cfg, jwt.clone()))
                    .configure(|cfg| routes::course_routes::config(cfg, jwt.clone()))
                    .configure(|cfg| routes::lesson_routes::config(cfg, jwt.clone()))
                    .configure(|cfg| {
                        routes::chat_routes::config(cfg, jwt.clone(), subscription.clone())
                    })
                    .configure(routes::webhook_routes::config),
            )
    })
    .bind((host, port))?
    .run()
    .await
}

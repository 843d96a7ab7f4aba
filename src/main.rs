use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, HttpServer, web};
use dotenvy::dotenv;
use std::sync::Arc;

mod api;
mod config;
mod db;
mod docs;
mod error;
mod messages;
mod model;
mod repository;
mod routes;
mod service;
#[cfg(test)]
mod testsupport;
mod validator;

use crate::api::AppState;
use crate::docs::ApiDoc;
use crate::repository::MySqlEmployeeRepository;
use crate::service::EmployeeService;
use config::Config;
use db::init_db;

use tracing::info;
use tracing_appender::rolling;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env();

    // Rolling daily log
    let file_appender = rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .pretty()
        .init();

    info!("Server starting...");

    let pool = init_db(&config.database_url).await?;

    let repository = Arc::new(MySqlEmployeeRepository::new(pool));
    let state = AppState::new(EmployeeService::new(repository));

    let server_addr = config.server_addr.clone();
    let api_prefix = config.api_prefix.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(Data::new(state.clone()))
            .app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
            .service(web::scope(&api_prefix).configure(routes::configure))
    })
    .bind(server_addr)?
    .run()
    .await?;

    Ok(())
}

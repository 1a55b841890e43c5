use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use lococktail_quiz::{app_state::AppState, auth::JwtService, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    if matches!(std::env::var("APP_ENV").as_deref(), Ok("production")) {
        config.validate_for_production();
    }

    let state = AppState::new(config.clone())
        .await
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err.to_string()))?;
    let jwt_service = web::Data::new(JwtService::new(
        &config.jwt_secret,
        config.jwt_expiration_hours,
    ));

    log::info!(
        "Starting HTTP server on {}:{}",
        config.web_server_host,
        config.web_server_port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(jwt_service.clone())
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(handlers::start_quiz)
            .service(handlers::get_quiz_session)
            .service(handlers::select_answer)
            .service(handlers::tick)
            .service(handlers::advance)
            .service(handlers::get_levels)
            .service(handlers::get_my_progress)
            .service(handlers::get_my_results)
            .service(handlers::health_check)
    })
    .bind((config.web_server_host.as_str(), config.web_server_port))?
    .run()
    .await
}

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use quizzify_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    };

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let state = AppState::new(config);

    log::info!("starting HTTP server on {host}:{port}");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(handlers::health_check)
            .service(handlers::create_session)
            .service(handlers::update_config)
            .service(handlers::upload_document)
            .service(handlers::summarize)
            .service(handlers::quizzify)
            .service(handlers::chat)
            .service(handlers::get_transcript)
            .service(handlers::get_answer_key)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}

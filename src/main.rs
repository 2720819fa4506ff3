use actix_web::{middleware::Logger, web, App, HttpServer};

use afaq_ai_server::{app_state::AppState, config::Config, cors::cors, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    let bind_addr = (config.web_server_host.clone(), config.web_server_port);

    if !config.is_ai_configured() {
        log::warn!("No OPENAI_API_KEY - all /ai/* endpoints will return 503 until OPENAI_API_KEY is set.");
    }
    if config.api_token.is_some() {
        log::info!("AI_API_TOKEN set - /ai/* endpoints require a bearer token");
    }

    let state = web::Data::new(AppState::new(config));

    log::info!("Afaq AI server running at http://{}:{}", bind_addr.0, bind_addr.1);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(cors(state.config.cors_allowed_origins.as_deref()))
            .wrap(Logger::default())
            .configure(handlers::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}

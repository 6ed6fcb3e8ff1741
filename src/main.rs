use actix_web::{App, HttpServer, middleware, web};

use pitchdeck::config::{AppConfig, load_dotenv};
use pitchdeck::handlers;
use pitchdeck::state::{AppState, Deck};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let dotenv_error = load_dotenv();
    env_logger::init();
    if let Some(e) = dotenv_error {
        log::warn!("Ignoring unreadable .env file: {e}");
    }
    let config = AppConfig::from_env();

    let deck = if config.seed {
        Deck::seeded(config.slide_count)
    } else {
        Deck::empty(config.slide_count)
    };
    log::info!(
        "Deck ready: {} slides, {} comments, {} guestbook entries",
        deck.presentation().slide_count(),
        deck.comments().len(),
        deck.guestbook().len()
    );
    let state = web::Data::new(AppState::new(deck));

    if !std::path::Path::new(&config.static_dir).is_dir() {
        log::warn!("Static directory {} does not exist", config.static_dir);
    }

    log::info!("Starting server at http://{}", config.bind_addr);

    let static_dir = config.static_dir.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(actix_files::Files::new("/static", &static_dir))
            .configure(handlers::configure)
            // Default 404 handler (must be registered last)
            .default_service(web::to(handlers::page_handlers::not_found))
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}

use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use fitmatch_recs::config::{LoggingSettings, Settings};
use fitmatch_recs::core::Recommender;
use fitmatch_recs::routes::{self, recommendations::AppState};
use fitmatch_recs::services::CatalogStore;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            // No logging settings yet, fall back to the defaults
            init_logging(&LoggingSettings::default());
            error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings.logging);

    info!("Starting FitMatch recommendation service...");

    let catalog = match CatalogStore::load_or_builtin(settings.catalog.path.as_deref()) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Failed to load catalog: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()));
        }
    };

    if catalog.is_empty() {
        tracing::warn!("Catalog is empty, recommendations will be empty");
    }

    let recommender = Recommender::with_default_rules();

    info!(
        "Recommender initialized with {} rules over {} products",
        recommender.rules().len(),
        catalog.len()
    );

    let app_state = AppState {
        catalog,
        recommender,
        limits: settings.recommendations.clone(),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}

use actix_cors::Cors;
use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use shoefinder::catalog::Catalog;
use shoefinder::config::Settings;
use shoefinder::extract::KeywordExtractor;
use shoefinder::routes::{self, AppState};
use tracing_subscriber::EnvFilter;

fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if settings.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(std::io::Error::other)?;
    init_tracing(&settings);

    let catalog = Catalog::load(settings.catalog_path.as_deref()).map_err(|err| {
        tracing::error!(error = %err, "failed to load catalog");
        std::io::Error::other(err)
    })?;
    tracing::info!(
        products = catalog.len(),
        source = ?settings.catalog_path,
        "catalog loaded"
    );

    let app_state = web::Data::new(AppState::new(catalog, KeywordExtractor::new()));
    let static_dir = settings.static_dir.clone();

    let (host, port) = settings.bind_address();
    tracing::info!("Starting HTTP server on http://{}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        let mut app = App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(app_state.clone())
            .configure(routes::configure);

        if let Some(dir) = &static_dir {
            app = app.service(Files::new("/", dir).index_file("index.html"));
        }
        app
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}

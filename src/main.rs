mod models;
mod service;
mod config;
mod dtos;
mod error;
mod db;
mod utils;
mod handler;
mod routes;

use std::sync::Arc;

use axum::http::{header::{ACCEPT, CONTENT_TYPE}, HeaderValue, Method};
use config::Config;
use crate::db::db::DBClient;
use dotenv::dotenv;
use routes::create_router;
use tokio::sync::Mutex;
use tower_http::cors::{AllowOrigin, CorsLayer};

use service::{
    property_form::FormPolicy,
    settings_service::SettingsService,
    shell::Shell,
};

#[derive(Debug)]
pub struct AppState {
    pub env: Config,
    pub db_client: DBClient,
    /// Single interactive session: page, sidebar and form modal.
    pub shell: Mutex<Shell>,
    pub settings: SettingsService,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let db_client = if config.seed_sample_data {
            DBClient::with_properties(models::propertymodel::Property::sample_listings())
        } else {
            DBClient::new()
        };

        Self {
            settings: SettingsService::new(config.settings_mode),
            env: config,
            db_client,
            shell: Mutex::new(Shell::new()),
        }
    }

    pub fn form_policy(&self) -> FormPolicy {
        FormPolicy {
            numeric: self.env.numeric_parse_policy,
            clear_residential_on_type_change: self.env.clear_residential_on_type_change,
            max_image_size_mb: self.env.max_image_size_mb,
        }
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let config = Config::init();

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    let allowed_origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("⚠️  Skipping invalid origin '{}'", origin);
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_headers([ACCEPT, CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::PATCH]);

    let app_state = Arc::new(AppState::new(config.clone()));

    tracing::info!(
        "📦 Store ready with {} properties",
        app_state.db_client.property_count().await
    );

    let app = create_router(app_state).layer(cors);

    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{}", &config.port)).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("🔥 Failed to bind port {}: {}", config.port, err);
            std::process::exit(1);
        }
    };

    tracing::info!("🚀 Server is running on http://localhost:{}", config.port);

    if let Err(err) = axum::serve(listener, app).await {
        tracing::error!("🔥 Server error: {}", err);
        std::process::exit(1);
    }
}

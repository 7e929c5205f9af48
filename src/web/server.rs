use axum::{
    http::{header, Method},
    Router,
};
use std::env;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::ladder::Dictionary;
use crate::web::api::{create_router, AppState, DEFAULT_MAX_VERTICES};

/// Environment variable overriding the dictionary location
pub const DICTIONARY_ENV: &str = "PATHLADDER_DICTIONARY";

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub dictionary_path: String,
    pub enable_cors: bool,
    /// Shortest path requests with more vertices are rejected
    pub max_vertices: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3005,
            dictionary_path: "words.txt".to_string(),
            enable_cors: true,
            max_vertices: DEFAULT_MAX_VERTICES,
        }
    }
}

impl ServerConfig {
    /// Defaults, with the dictionary path taken from `PATHLADDER_DICTIONARY` when set
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(path) = env::var(DICTIONARY_ENV) {
            config.dictionary_path = path;
        }
        config
    }
}

/// Build the application router over an already loaded dictionary
pub fn build_app(dictionary: Dictionary, config: &ServerConfig) -> Router {
    let state = AppState::new(dictionary).with_max_vertices(config.max_vertices);
    let app = Router::new().merge(create_router()).with_state(state);

    if !config.enable_cors {
        return app;
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    app.layer(ServiceBuilder::new().layer(cors).into_inner())
}

/// Start the web server with custom configuration
pub async fn start_server_with_config(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let dictionary = Dictionary::load_or_empty(&config.dictionary_path);
    let app = build_app(dictionary, &config);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    log::info!("pathladder server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

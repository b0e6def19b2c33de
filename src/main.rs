use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinegate::api;
use cinegate::api_docs::ApiDoc;
use cinegate::config::Config;
use cinegate::state::AppState;
use cinegate::tmdb::TmdbClient;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cinegate=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();

    let config = Config::from_env();

    // Upstream client is built once; every handler goes through it
    let catalog = TmdbClient::new(&config.upstream_base_url, &config.api_token)
        .expect("Failed to build upstream client (is MOVIEDB_API_KEY set?)");

    let state = AppState::new(Arc::new(catalog));

    // Build API router
    let api_router = api::api_router(state);

    // Swagger UI
    use utoipa::OpenApi;
    use utoipa_swagger_ui::SwaggerUi;

    let app = axum::Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api_router)
        // CORS
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("cinegate server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}

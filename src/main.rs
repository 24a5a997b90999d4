use axum::http::HeaderValue;
use axum::Router;
use std::panic;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use portfolio_items::config::Config;
use portfolio_items::db::DbItems;
use portfolio_items::docs::ApiDoc;
use portfolio_items::routes::create_api_routes;
use portfolio_items::services::ItemService;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Set panic hook for better error messages
    panic::set_hook(Box::new(|info| {
        eprintln!("PANIC: {info}");
    }));

    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            // Default to info level, but allow debug for our app
            "portfolio_items=debug,tower_http=debug,axum::rejection=trace,info".into()
        }))
        .init();

    info!("Starting server...");

    // Load configuration
    let config = Config::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        warn!("Using default configuration");
        Config::default()
    });
    info!("Environment: {}", config.environment);

    // Initialize the database-backed item store
    let database_url = match &config.database_url {
        Some(url) => url.clone(),
        None => {
            error!("No database URL configured - set DATABASE_URL");
            std::process::exit(1);
        }
    };
    let db = match DbItems::new(&database_url).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to initialize database: {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = db.ensure_schema().await {
        error!("Failed to prepare database schema: {}", e);
        std::process::exit(1);
    }
    info!("Database initialized successfully");

    // Wire the item service to its store
    let service = Arc::new(ItemService::new(Arc::new(db)));

    // Create API routes
    let api_routes = create_api_routes(service);

    // Combine all routes
    let mut app_routes = Router::new()
        // Mount API routes
        .nest("/api", api_routes)
        // Mount Swagger UI
        .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add tracing layer
        .layer(TraceLayer::new_for_http());

    // Restrict cross-origin access to the configured origins, if any
    if let Some(cors_origins) = &config.cors_origins {
        let origins: Vec<HeaderValue> = cors_origins
            .split(',')
            .filter_map(|origin| origin.trim().parse::<HeaderValue>().ok())
            .collect();
        app_routes = app_routes.layer(CorsLayer::new().allow_origin(AllowOrigin::list(origins)));
    }

    // Start the HTTP/API server
    let listener = tokio::net::TcpListener::bind(config.server_address())
        .await
        .unwrap_or_else(|_| panic!("Failed to bind to {}", config.server_address()));

    info!("🚀 Server running on http://{}", config.server_address());
    info!(
        "📚 Swagger UI available at http://{}/swagger",
        config.server_address()
    );

    axum::serve(listener, app_routes)
        .await
        .expect("Server failed to start");
}

use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use serde_json::json;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use tenant_portal::client::BackendClient;
use tenant_portal::config;
use tenant_portal::handlers::{self, AppState};

#[derive(Parser)]
#[command(name = "tenant-portal")]
#[command(about = "Tenant administration portal - server-rendered front-end for the tenant REST backend")]
#[command(version)]
struct Cli {
    #[arg(long, help = "Address to bind (overrides PORTAL_BIND_ADDR)")]
    bind: Option<String>,

    #[arg(long, help = "Port to listen on (overrides PORTAL_PORT)")]
    port: Option<u16>,

    #[arg(long, help = "Backend API base URL (overrides PORTAL_API_URL)")]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up PORTAL_API_URL etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = config::config();
    tracing::info!("Starting tenant portal in {:?} mode", config.environment);

    let api_url = cli.api_url.unwrap_or_else(|| config.backend.api_base_url.clone());
    let state = AppState::new(BackendClient::new(api_url.clone()));

    let app = app(state, config.server.enable_cors);

    let bind = cli.bind.unwrap_or_else(|| config.server.bind_addr.clone());
    let port = cli.port.unwrap_or(config.server.port);
    let bind_addr = format!("{}:{}", bind, port);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("portal listening on http://{} (backend: {})", bind_addr, api_url);

    axum::serve(listener, app).await.expect("server");
}

fn app(state: Arc<AppState>, enable_cors: bool) -> Router {
    let mut router = Router::new()
        .route("/", get(handlers::dashboard::root))
        .route("/health", get(health))
        // Auth
        .merge(auth_routes())
        // Pages
        .route("/dashboard", get(handlers::dashboard::dashboard))
        .merge(master_routes())
        .merge(collection_routes())
        .fallback(handlers::dashboard::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if enable_cors {
        router = router.layer(CorsLayer::permissive());
    }

    router
}

fn auth_routes() -> Router<Arc<AppState>> {
    use tenant_portal::handlers::auth;

    Router::new()
        .route("/login", get(auth::login_view).post(auth::login_submit))
        .route("/logout", post(auth::logout))
        .route("/tenant/switch", post(auth::switch_tenant))
}

fn master_routes() -> Router<Arc<AppState>> {
    use tenant_portal::handlers::master;

    Router::new()
        .route("/master", get(master::index))
        .route("/master/:key", get(master::module_page))
        .route("/master/:key/new", get(master::new_form))
        .route("/master/:key/edit/:id", get(master::edit_form))
        .route("/master/:key/save", post(master::save))
        .route(
            "/master/:key/delete/:id",
            get(master::delete_confirm).post(master::delete_submit),
        )
}

fn collection_routes() -> Router<Arc<AppState>> {
    use tenant_portal::handlers::collections;

    Router::new()
        .route("/reports", get(collections::reports))
        .route("/audit", get(collections::audit_logs))
        .route("/admin/settings", get(collections::admin_settings))
}

async fn health() -> axum::response::Json<serde_json::Value> {
    axum::response::Json(json!({
        "success": true,
        "data": {
            "status": "ok",
            "timestamp": chrono::Utc::now(),
            "backend": config::config().backend.api_base_url,
        }
    }))
}

use crate::services::upload::UploadService;
use crate::storage::ContentStore;
use crate::utils::middleware::{admin_gate, global_rate_limiter};
use axum::{response::IntoResponse, routing::get, Extension, Json, Router};
use hyper::Method;
use serde_json::Value;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;
use uuid::Uuid;

pub mod docs;
pub mod routes;
pub mod types;

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::list_projects,
        routes::create_project,
        routes::update_project,
        routes::delete_project,
        routes::list_research,
        routes::create_research,
        routes::update_research,
        routes::delete_research,
        routes::list_academics,
        routes::create_academic,
        routes::update_academic,
        routes::delete_academic,
        routes::upload_image,
        routes::list_testimonials,
    ),
    components(
        schemas(
            crate::models::project::Project,
            crate::models::project::ProjectCategory,
            crate::models::research::Research,
            crate::models::research::ResearchField,
            crate::models::research::ResearchStatus,
            crate::models::academic::Academic,
            crate::models::academic::AcademicField,
            crate::models::academic::AcademicStatus,
            crate::models::testimonial::Testimonial,
            types::ErrorResponse,
            types::DeletedResponse,
            types::DeleteAck,
            types::UploadResponse,
        )
    ),
    tags(
        (name = "Projects", description = "Portfolio project collection"),
        (name = "Research", description = "Research item collection"),
        (name = "Academics", description = "Academic entry collection"),
        (name = "Upload", description = "Image uploads served from /uploads"),
        (name = "Testimonials", description = "Fixed testimonial content")
    )
)]
pub struct ApiDoc;

pub async fn request_id_middleware(
    mut req: axum::http::Request<axum::body::Body>,
    next: axum::middleware::Next,
) -> axum::response::Response {
    let request_id = Uuid::new_v4().to_string();
    req.extensions_mut().insert(request_id.clone());
    let span = tracing::info_span!("request", request_id = %request_id, method = %req.method(), uri = %req.uri());
    let _enter = span.enter();
    next.run(req).await
}

/// Assembles the application router around a store and an upload service.
/// Middleware layers (CORS, rate limit, request ids) are added by
/// `start_http_server`; the tests drive this router directly.
pub fn router(store: Arc<ContentStore>, uploads: Arc<UploadService>) -> Router {
    let openapi = ApiDoc::openapi();
    let upload_dir = uploads.upload_dir().to_path_buf();

    Router::new()
        .nest("/api", routes::api_router())
        .route("/health", get(health_check))
        .route("/docs/openapi.json", get(openapi_json))
        .route("/docs/markdown", get(api_markdown))
        .route("/docs", get(api_documentation))
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", openapi.clone()))
        .merge(Redoc::with_url("/api/redoc", openapi))
        .nest_service("/uploads", ServeDir::new(upload_dir))
        .layer(Extension(store))
        .layer(Extension(uploads))
}

/// Main entry point for the portfolio backend server.
/// Sets up the store, routes, middleware, and documentation endpoints.
pub async fn start_http_server() {
    let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string());
    let upload_dir = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "public/uploads".to_string());

    let store = Arc::new(
        ContentStore::new(Path::new(&data_dir))
            .await
            .expect("failed to initialize content store"),
    );
    let uploads = Arc::new(UploadService::new(&upload_dir));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let app = router(store, uploads)
        .layer(cors)
        .layer(axum::middleware::from_fn(admin_gate))
        .layer(axum::middleware::from_fn(global_rate_limiter))
        .layer(axum::middleware::from_fn(request_id_middleware));

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let addr: SocketAddr = format!("0.0.0.0:{}", port)
        .parse()
        .expect("invalid PORT value");

    println!("🚀 HTTP API running at http://{}/health", addr);
    println!("📚 API Documentation available at: http://{}/api/docs", addr);
    axum::serve(
        tokio::net::TcpListener::bind(addr)
            .await
            .expect("failed to bind listener"),
        app,
    )
    .await
    .expect("server error");
}

async fn health_check() -> impl IntoResponse {
    "OK"
}

/// Export OpenAPI specification as JSON
async fn openapi_json() -> Json<Value> {
    let openapi = ApiDoc::openapi();
    Json(serde_json::to_value(openapi).unwrap_or(Value::Null))
}

/// Serves the API documentation as downloadable Markdown.
async fn api_markdown() -> impl IntoResponse {
    let markdown = docs::generate_markdown_docs();
    axum::response::Response::builder()
        .header("Content-Type", "text/markdown")
        .header(
            "Content-Disposition",
            "attachment; filename=\"API_DOCUMENTATION.md\"",
        )
        .body(axum::body::Body::from(markdown))
        .unwrap_or_else(|_| axum::response::Response::new(axum::body::Body::empty()))
}

/// Serves the main API documentation HTML page.
async fn api_documentation() -> impl IntoResponse {
    let html = docs::generate_documentation_html();
    axum::response::Html(html)
}

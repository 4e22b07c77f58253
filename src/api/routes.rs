use crate::api::types::*;
use crate::models::academic::Academic;
use crate::models::project::Project;
use crate::models::research::Research;
use crate::models::testimonial::Testimonial;
use crate::services::upload::UploadService;
use crate::storage::{generate_id, ContentStore};
use crate::utils::validation::Validator;
use axum::{
    extract::{Multipart, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Extension, Json, Router,
};
use std::sync::Arc;
use tracing::{error, info};

/// Content API endpoints, without middleware layers. The server entry point
/// and the tests both build on this router.
pub fn api_router() -> Router {
    Router::new()
        .nest("/projects", projects_router())
        .nest("/research", research_router())
        .nest("/academics", academics_router())
        .route("/testimonials", get(list_testimonials))
        .route("/upload", post(upload_image))
}

pub fn projects_router() -> Router {
    Router::new().route(
        "/",
        get(list_projects)
            .post(create_project)
            .put(update_project)
            .delete(delete_project),
    )
}

pub fn research_router() -> Router {
    Router::new().route(
        "/",
        get(list_research)
            .post(create_research)
            .put(update_research)
            .delete(delete_research),
    )
}

pub fn academics_router() -> Router {
    Router::new().route(
        "/",
        get(list_academics)
            .post(create_academic)
            .put(update_academic)
            .delete(delete_academic),
    )
}

// ---------------------------------------------------------------------------
// Projects
//
// A read failure here surfaces as a 500, unlike the other two collections
// which degrade to an empty list. Kept as observed in the original system;
// see DESIGN.md.

#[utoipa::path(get, path = "/api/projects", responses((status = 200, body = [Project]), (status = 500, body = ErrorResponse)), tag = "Projects")]
pub async fn list_projects(Extension(store): Extension<Arc<ContentStore>>) -> Response {
    match store.projects.read().await {
        Ok(projects) => (StatusCode::OK, Json(projects)).into_response(),
        Err(e) => {
            error!(action = "list_projects_failed", error = %e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to get projects")),
            )
                .into_response()
        }
    }
}

#[utoipa::path(post, path = "/api/projects", request_body = Project, responses((status = 201, body = Project), (status = 500, body = ErrorResponse)), tag = "Projects")]
pub async fn create_project(
    Extension(store): Extension<Arc<ContentStore>>,
    Json(mut project): Json<Project>,
) -> Response {
    let mut projects = match store.projects.read().await {
        Ok(p) => p,
        Err(e) => {
            error!(action = "create_project_failed", error = %e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to create project")),
            )
                .into_response();
        }
    };

    if project.id.is_empty() {
        project.id = generate_id(|candidate| projects.iter().any(|p| p.id == candidate));
    }
    projects.push(project.clone());

    if let Err(e) = store.projects.write(&projects).await {
        error!(action = "create_project_failed", id = %project.id, error = %e);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Failed to create project")),
        )
            .into_response();
    }
    info!(action = "project_created", id = %project.id);
    (StatusCode::CREATED, Json(project)).into_response()
}

#[utoipa::path(put, path = "/api/projects", request_body = Project, responses((status = 200, body = Project), (status = 404, body = ErrorResponse), (status = 500, body = ErrorResponse)), tag = "Projects")]
pub async fn update_project(
    Extension(store): Extension<Arc<ContentStore>>,
    Json(project): Json<Project>,
) -> Response {
    let mut projects = match store.projects.read().await {
        Ok(p) => p,
        Err(e) => {
            error!(action = "update_project_failed", error = %e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to update project")),
            )
                .into_response();
        }
    };

    let index = match projects.iter().position(|p| p.id == project.id) {
        Some(i) => i,
        None => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Project not found")),
            )
                .into_response();
        }
    };
    projects[index] = project.clone();

    if let Err(e) = store.projects.write(&projects).await {
        error!(action = "update_project_failed", id = %project.id, error = %e);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Failed to update project")),
        )
            .into_response();
    }
    info!(action = "project_updated", id = %project.id);
    (StatusCode::OK, Json(project)).into_response()
}

#[utoipa::path(delete, path = "/api/projects", params(DeleteParams), responses((status = 200, body = DeletedResponse), (status = 400, body = ErrorResponse), (status = 500, body = ErrorResponse)), tag = "Projects")]
pub async fn delete_project(
    Extension(store): Extension<Arc<ContentStore>>,
    Query(params): Query<DeleteParams>,
) -> Response {
    let id = match params.id.as_deref() {
        Some(id) if Validator::validate_id(id).is_ok() => id.to_string(),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("Project ID required")),
            )
                .into_response();
        }
    };

    let projects = match store.projects.read().await {
        Ok(p) => p,
        Err(e) => {
            error!(action = "delete_project_failed", id = %id, error = %e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to delete project")),
            )
                .into_response();
        }
    };

    // This endpoint reports success even when nothing matched the id. The
    // other two collections return 404 in that case; see DESIGN.md.
    let remaining: Vec<Project> = projects.into_iter().filter(|p| p.id != id).collect();

    if let Err(e) = store.projects.write(&remaining).await {
        error!(action = "delete_project_failed", id = %id, error = %e);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Failed to delete project")),
        )
            .into_response();
    }
    info!(action = "project_deleted", id = %id);
    (
        StatusCode::OK,
        Json(DeletedResponse {
            message: "Project deleted successfully".to_string(),
        }),
    )
        .into_response()
}

// ---------------------------------------------------------------------------
// Research

#[utoipa::path(get, path = "/api/research", responses((status = 200, body = [Research])), tag = "Research")]
pub async fn list_research(Extension(store): Extension<Arc<ContentStore>>) -> Response {
    let research = store.research.read_or_empty().await;
    (StatusCode::OK, Json(research)).into_response()
}

#[utoipa::path(post, path = "/api/research", request_body = Research, responses((status = 200, body = Research), (status = 500, body = ErrorResponse)), tag = "Research")]
pub async fn create_research(
    Extension(store): Extension<Arc<ContentStore>>,
    Json(mut item): Json<Research>,
) -> Response {
    let mut research = store.research.read_or_empty().await;

    if item.id.is_empty() {
        item.id = generate_id(|candidate| research.iter().any(|r| r.id == candidate));
    }
    research.push(item.clone());

    if let Err(e) = store.research.write(&research).await {
        error!(action = "create_research_failed", id = %item.id, error = %e);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Failed to create research")),
        )
            .into_response();
    }
    info!(action = "research_created", id = %item.id);
    (StatusCode::OK, Json(item)).into_response()
}

#[utoipa::path(put, path = "/api/research", request_body = Research, responses((status = 200, body = Research), (status = 404, body = ErrorResponse), (status = 500, body = ErrorResponse)), tag = "Research")]
pub async fn update_research(
    Extension(store): Extension<Arc<ContentStore>>,
    Json(item): Json<Research>,
) -> Response {
    let mut research = store.research.read_or_empty().await;

    let index = match research.iter().position(|r| r.id == item.id) {
        Some(i) => i,
        None => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Research not found")),
            )
                .into_response();
        }
    };
    research[index] = item.clone();

    if let Err(e) = store.research.write(&research).await {
        error!(action = "update_research_failed", id = %item.id, error = %e);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Failed to update research")),
        )
            .into_response();
    }
    info!(action = "research_updated", id = %item.id);
    (StatusCode::OK, Json(item)).into_response()
}

#[utoipa::path(delete, path = "/api/research", params(DeleteParams), responses((status = 200, body = DeleteAck), (status = 400, body = ErrorResponse), (status = 404, body = ErrorResponse), (status = 500, body = ErrorResponse)), tag = "Research")]
pub async fn delete_research(
    Extension(store): Extension<Arc<ContentStore>>,
    Query(params): Query<DeleteParams>,
) -> Response {
    let id = match params.id.as_deref() {
        Some(id) if Validator::validate_id(id).is_ok() => id.to_string(),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("ID required")),
            )
                .into_response();
        }
    };

    let research = store.research.read_or_empty().await;
    let remaining: Vec<Research> = research.iter().filter(|r| r.id != id).cloned().collect();

    if remaining.len() == research.len() {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Research not found")),
        )
            .into_response();
    }

    if let Err(e) = store.research.write(&remaining).await {
        error!(action = "delete_research_failed", id = %id, error = %e);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Failed to delete research")),
        )
            .into_response();
    }
    info!(action = "research_deleted", id = %id);
    (StatusCode::OK, Json(DeleteAck { success: true })).into_response()
}

// ---------------------------------------------------------------------------
// Academics

#[utoipa::path(get, path = "/api/academics", responses((status = 200, body = [Academic])), tag = "Academics")]
pub async fn list_academics(Extension(store): Extension<Arc<ContentStore>>) -> Response {
    let academics = store.academics.read_or_empty().await;
    (StatusCode::OK, Json(academics)).into_response()
}

#[utoipa::path(post, path = "/api/academics", request_body = Academic, responses((status = 200, body = Academic), (status = 500, body = ErrorResponse)), tag = "Academics")]
pub async fn create_academic(
    Extension(store): Extension<Arc<ContentStore>>,
    Json(mut academic): Json<Academic>,
) -> Response {
    let mut academics = store.academics.read_or_empty().await;

    if academic.id.is_empty() {
        academic.id = generate_id(|candidate| academics.iter().any(|a| a.id == candidate));
    }
    academics.push(academic.clone());

    if let Err(e) = store.academics.write(&academics).await {
        error!(action = "create_academic_failed", id = %academic.id, error = %e);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Failed to create academic")),
        )
            .into_response();
    }
    info!(action = "academic_created", id = %academic.id);
    (StatusCode::OK, Json(academic)).into_response()
}

#[utoipa::path(put, path = "/api/academics", request_body = Academic, responses((status = 200, body = Academic), (status = 404, body = ErrorResponse), (status = 500, body = ErrorResponse)), tag = "Academics")]
pub async fn update_academic(
    Extension(store): Extension<Arc<ContentStore>>,
    Json(academic): Json<Academic>,
) -> Response {
    let mut academics = store.academics.read_or_empty().await;

    let index = match academics.iter().position(|a| a.id == academic.id) {
        Some(i) => i,
        None => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Academic not found")),
            )
                .into_response();
        }
    };
    academics[index] = academic.clone();

    if let Err(e) = store.academics.write(&academics).await {
        error!(action = "update_academic_failed", id = %academic.id, error = %e);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Failed to update academic")),
        )
            .into_response();
    }
    info!(action = "academic_updated", id = %academic.id);
    (StatusCode::OK, Json(academic)).into_response()
}

#[utoipa::path(delete, path = "/api/academics", params(DeleteParams), responses((status = 200, body = DeleteAck), (status = 400, body = ErrorResponse), (status = 404, body = ErrorResponse), (status = 500, body = ErrorResponse)), tag = "Academics")]
pub async fn delete_academic(
    Extension(store): Extension<Arc<ContentStore>>,
    Query(params): Query<DeleteParams>,
) -> Response {
    let id = match params.id.as_deref() {
        Some(id) if Validator::validate_id(id).is_ok() => id.to_string(),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("ID required")),
            )
                .into_response();
        }
    };

    let academics = store.academics.read_or_empty().await;
    let remaining: Vec<Academic> = academics.iter().filter(|a| a.id != id).cloned().collect();

    if remaining.len() == academics.len() {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Academic not found")),
        )
            .into_response();
    }

    if let Err(e) = store.academics.write(&remaining).await {
        error!(action = "delete_academic_failed", id = %id, error = %e);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Failed to delete academic")),
        )
            .into_response();
    }
    info!(action = "academic_deleted", id = %id);
    (StatusCode::OK, Json(DeleteAck { success: true })).into_response()
}

// ---------------------------------------------------------------------------
// Uploads

#[utoipa::path(post, path = "/api/upload", responses((status = 200, body = UploadResponse), (status = 400, body = ErrorResponse), (status = 500, body = ErrorResponse)), tag = "Upload")]
pub async fn upload_image(
    Extension(uploads): Extension<Arc<UploadService>>,
    mut multipart: Multipart,
) -> Response {
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() != Some("file") {
                    continue;
                }
                let original_name = field.file_name().unwrap_or("").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = match field.bytes().await {
                    Ok(d) => d,
                    Err(e) => {
                        error!(action = "upload_read_failed", error = %e);
                        return (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            Json(ErrorResponse::new("Upload failed")),
                        )
                            .into_response();
                    }
                };
                return match uploads.store(&original_name, &content_type, &data).await {
                    Ok(stored) => (
                        StatusCode::OK,
                        Json(UploadResponse {
                            url: stored.url,
                            filename: stored.filename,
                            size: stored.size,
                            content_type: stored.content_type,
                        }),
                    )
                        .into_response(),
                    Err(e) => {
                        error!(action = "upload_write_failed", error = %e);
                        (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            Json(ErrorResponse::new("Upload failed")),
                        )
                            .into_response()
                    }
                };
            }
            Ok(None) => break,
            Err(e) => {
                error!(action = "upload_parse_failed", error = %e);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("Upload failed")),
                )
                    .into_response();
            }
        }
    }

    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new("No file received")),
    )
        .into_response()
}

// ---------------------------------------------------------------------------
// Testimonials

#[utoipa::path(get, path = "/api/testimonials", responses((status = 200, body = [Testimonial])), tag = "Testimonials")]
pub async fn list_testimonials() -> Json<Vec<Testimonial>> {
    Json(vec![
        Testimonial {
            quote: "Impeccable craft. Our rebrand launched to rave reviews and a measurable lift in sales."
                .to_string(),
            name: "Aanya Mehta".to_string(),
            role: "Founder, Astra Coffee".to_string(),
        },
        Testimonial {
            quote: "The 3D visuals looked like photographs. They elevated our pitch decks instantly."
                .to_string(),
            name: "Rohan Patel".to_string(),
            role: "Product Lead, Lumio Labs".to_string(),
        },
        Testimonial {
            quote: "A strategic partner who understands business and aesthetics in equal measure."
                .to_string(),
            name: "Sara Williams".to_string(),
            role: "CMO, Harbor & Co.".to_string(),
        },
    ])
}

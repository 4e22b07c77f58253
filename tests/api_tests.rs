use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use portfolio_backend::api;
use portfolio_backend::services::upload::UploadService;
use portfolio_backend::storage::ContentStore;
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

struct TestApp {
    router: Router,
    _data_dir: TempDir,
    upload_dir: TempDir,
}

async fn test_app() -> TestApp {
    let data_dir = TempDir::new().unwrap();
    let upload_dir = TempDir::new().unwrap();
    let store = Arc::new(ContentStore::new(data_dir.path()).await.unwrap());
    let uploads = Arc::new(UploadService::new(upload_dir.path()));
    TestApp {
        router: api::router(store, uploads),
        _data_dir: data_dir,
        upload_dir,
    }
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn delete_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn sample_research(id: &str) -> Value {
    json!({
        "id": id,
        "title": "Generative AI in Creative Workflows",
        "field": "Generative AI",
        "description": "How generative tools fit a human-led design process.",
        "image": "https://example.com/research.jpg",
        "status": "In Progress",
        "focus": "AI-assisted ideation"
    })
}

fn sample_academic(id: &str) -> Value {
    json!({
        "id": id,
        "title": "Interfaces for Co-Creative Systems",
        "field": "Computer Science",
        "description": "Interaction patterns for mixed-initiative tools.",
        "image": "https://example.com/academic.jpg",
        "status": "Published",
        "focus": "Human-AI interaction",
        "publication": "CHI",
        "date": "2025-04-26"
    })
}

#[tokio::test]
async fn seeded_projects_are_served() {
    let app = test_app().await;
    let (status, body) = send(&app.router, get_request("/api/projects")).await;
    assert_eq!(status, StatusCode::OK);
    let projects = body.as_array().unwrap();
    assert_eq!(projects.len(), 4);
    assert_eq!(projects[0]["id"], "p1");
    assert_eq!(projects[1]["category"], "3d");
    // The legacy single-image field is absent from the seed records.
    assert!(projects[0].get("image").is_none());
}

#[tokio::test]
async fn post_project_returns_201_and_assigns_timestamp_id() {
    let app = test_app().await;
    let payload = json!({
        "title": "Driftwood Type Specimen",
        "category": "branding",
        "cover": "https://example.com/cover.jpg",
        "brief": "Display face for a coastal hotel identity.",
        "images": []
    });
    let (status, body) = send(&app.router, json_request("POST", "/api/projects", &payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_str().unwrap();
    assert!(!id.is_empty());
    assert!(id.chars().all(|c| c.is_ascii_digit()));

    let (_, list) = send(&app.router, get_request("/api/projects")).await;
    assert_eq!(list.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn post_research_returns_200_and_round_trips() {
    let app = test_app().await;
    let payload = sample_research("r100");
    let (status, body) = send(&app.router, json_request("POST", "/api/research", &payload)).await;
    // Research POST acknowledges with 200, unlike Projects' 201.
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, payload);

    let (_, list) = send(&app.router, get_request("/api/research")).await;
    assert_eq!(list.as_array().unwrap(), &[payload]);
}

#[tokio::test]
async fn post_without_id_generates_unique_ids() {
    let app = test_app().await;
    let mut first = sample_research("");
    first.as_object_mut().unwrap().remove("id");
    let second = sample_research("");

    let (_, a) = send(&app.router, json_request("POST", "/api/research", &first)).await;
    let (_, b) = send(&app.router, json_request("POST", "/api/research", &second)).await;

    let id_a = a["id"].as_str().unwrap();
    let id_b = b["id"].as_str().unwrap();
    assert!(!id_a.is_empty());
    assert!(!id_b.is_empty());
    assert_ne!(id_a, id_b);

    let (_, list) = send(&app.router, get_request("/api/research")).await;
    assert_eq!(list.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn put_unknown_research_returns_404_and_leaves_collection_unchanged() {
    let app = test_app().await;
    send(
        &app.router,
        json_request("POST", "/api/research", &sample_research("r1")),
    )
    .await;

    let (status, body) = send(
        &app.router,
        json_request("PUT", "/api/research", &sample_research("missing")),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Research not found");

    let (_, list) = send(&app.router, get_request("/api/research")).await;
    let items = list.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], "r1");
}

#[tokio::test]
async fn put_replaces_whole_record() {
    let app = test_app().await;
    send(
        &app.router,
        json_request("POST", "/api/academics", &sample_academic("a1")),
    )
    .await;

    let mut updated = sample_academic("a1");
    updated["status"] = json!("In Review");
    updated.as_object_mut().unwrap().remove("publication");

    let (status, body) = send(&app.router, json_request("PUT", "/api/academics", &updated)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, updated);

    let (_, list) = send(&app.router, get_request("/api/academics")).await;
    let items = list.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["status"], "In Review");
    // Whole-record replacement: the dropped optional field is gone.
    assert!(items[0].get("publication").is_none());
}

#[tokio::test]
async fn delete_without_id_returns_400_and_writes_nothing() {
    let app = test_app().await;
    send(
        &app.router,
        json_request("POST", "/api/research", &sample_research("r1")),
    )
    .await;

    let (status, body) = send(&app.router, delete_request("/api/research")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "ID required");

    let (status, _) = send(&app.router, delete_request("/api/research?id=")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, list) = send(&app.router, get_request("/api/research")).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn delete_removes_exactly_one_record() {
    let app = test_app().await;
    send(
        &app.router,
        json_request("POST", "/api/academics", &sample_academic("a1")),
    )
    .await;
    send(
        &app.router,
        json_request("POST", "/api/academics", &sample_academic("a2")),
    )
    .await;

    let (status, body) = send(&app.router, delete_request("/api/academics?id=a1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, list) = send(&app.router, get_request("/api/academics")).await;
    let items = list.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], "a2");
}

#[tokio::test]
async fn delete_unknown_id_is_404_for_academics_but_success_for_projects() {
    let app = test_app().await;

    let (status, body) = send(&app.router, delete_request("/api/academics?id=nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Academic not found");

    // Projects DELETE never reports not-found; observed inconsistency kept.
    let (status, body) = send(&app.router, delete_request("/api/projects?id=nope")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Project deleted successfully");

    let (_, list) = send(&app.router, get_request("/api/projects")).await;
    assert_eq!(list.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn upload_stores_sanitized_timestamped_file_and_serves_it() {
    let app = test_app().await;
    let boundary = "PORTFOLIO-TEST-BOUNDARY";
    let payload = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"a b?.png\"\r\n\
         Content-Type: image/png\r\n\r\n\
         fake image bytes\r\n\
         --{boundary}--\r\n"
    );
    let request = Request::builder()
        .method("POST")
        .uri("/api/upload")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(payload))
        .unwrap();

    let (status, body) = send(&app.router, request).await;
    assert_eq!(status, StatusCode::OK);

    let filename = body["filename"].as_str().unwrap();
    let (prefix, rest) = filename.split_once('-').unwrap();
    assert!(prefix.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(rest, "ab.png");
    assert_eq!(body["url"], format!("/uploads/{filename}"));
    assert_eq!(body["size"], 16);
    assert_eq!(body["type"], "image/png");

    let on_disk = std::fs::read(app.upload_dir.path().join(filename)).unwrap();
    assert_eq!(on_disk, b"fake image bytes");

    // The returned URL resolves through the static file service.
    let response = app
        .router
        .clone()
        .oneshot(get_request(body["url"].as_str().unwrap()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let served = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&served[..], b"fake image bytes");
}

#[tokio::test]
async fn upload_without_file_field_returns_400() {
    let app = test_app().await;
    let boundary = "PORTFOLIO-TEST-BOUNDARY";
    let payload = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"other\"; filename=\"x.png\"\r\n\
         Content-Type: image/png\r\n\r\n\
         bytes\r\n\
         --{boundary}--\r\n"
    );
    let request = Request::builder()
        .method("POST")
        .uri("/api/upload")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(payload))
        .unwrap();

    let (status, body) = send(&app.router, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No file received");
}

/// The store is read-modify-write with no locking: two near-simultaneous
/// creates can interleave and the loser's append is silently dropped. This
/// pins the documented lost-update behavior — one or both records survive,
/// never zero — rather than asserting serializability the system does not
/// provide.
#[tokio::test]
async fn concurrent_posts_may_lose_one_record() {
    let app = test_app().await;
    let first = sample_research("race-1");
    let second = sample_research("race-2");

    let (a, b) = tokio::join!(
        app.router
            .clone()
            .oneshot(json_request("POST", "/api/research", &first)),
        app.router
            .clone()
            .oneshot(json_request("POST", "/api/research", &second)),
    );
    assert_eq!(a.unwrap().status(), StatusCode::OK);
    assert_eq!(b.unwrap().status(), StatusCode::OK);

    let (_, list) = send(&app.router, get_request("/api/research")).await;
    let survivors = list.as_array().unwrap().len();
    assert!(
        (1..=2).contains(&survivors),
        "expected one or both records to survive, got {survivors}"
    );
}

#[tokio::test]
async fn testimonials_and_health_are_served() {
    let app = test_app().await;

    let (status, body) = send(&app.router, get_request("/api/testimonials")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
    assert_eq!(body[0]["name"], "Aanya Mehta");

    let response = app
        .router
        .clone()
        .oneshot(get_request("/health"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};
use dashmap::DashMap;
use once_cell::sync::Lazy;
use std::net::SocketAddr;
use std::time::{Duration, Instant};
use tracing::warn;

static RATE_LIMITER: Lazy<DashMap<String, (u64, Instant)>> = Lazy::new(DashMap::new);

fn rate_limit_per_sec() -> u64 {
    std::env::var("RATE_LIMIT_PER_SEC")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(5)
}

/// Per-IP fixed-window rate limit, keyed on the connection address.
pub async fn global_rate_limiter(request: Request, next: Next) -> Result<Response, StatusCode> {
    let ip = request
        .extensions()
        .get::<SocketAddr>()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let now = Instant::now();
    let mut entry = RATE_LIMITER.entry(ip.clone()).or_insert((0, now));

    if now.duration_since(entry.1) > Duration::from_secs(1) {
        *entry = (1, now);
    } else {
        entry.0 += 1;
    }

    if entry.0 > rate_limit_per_sec() {
        warn!(action = "rate_limit_exceeded", ip = %ip);
        return Err(StatusCode::TOO_MANY_REQUESTS);
    }

    Ok(next.run(request).await)
}

/// Gate for the admin area. Currently admits every request; proper
/// authentication has not been wired up yet.
/// TODO: require a session or token before the dashboard goes public.
pub async fn admin_gate(request: Request, next: Next) -> Response {
    if request.uri().path().starts_with("/admin") {
        warn!(action = "admin_access_unchecked", path = %request.uri().path());
    }
    next.run(request).await
}

//! HTTP middleware: the first-visit onboarding gate.

use std::sync::Arc;

use axum::extract::State;
use axum::http::header::COOKIE;
use axum::http::{HeaderMap, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

use super::state::AppState;

pub(crate) const ONBOARDING_PATH: &str = "/onboarding";

/// Cookie set by `POST /api/mark-visited`.
pub(crate) const VISITED_COOKIE: &str = "visited";

/// Paths reachable before onboarding is done, health checks included.
fn is_exempt(path: &str) -> bool {
    path.starts_with(ONBOARDING_PATH)
        || path.starts_with("/api")
        || path.starts_with("/_next")
        || path == "/favicon.ico"
        || path == "/health"
}

/// True when any `Cookie` header carries `visited=true`.
pub(crate) fn has_visited_cookie(headers: &HeaderMap) -> bool {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .any(|(name, value)| name.trim() == VISITED_COOKIE && value.trim() == "true")
}

/// Onboarding gate middleware.
///
/// First-time visitors are sent to `/onboarding` with a 307, keeping the
/// query string. API routes, framework assets and the onboarding page
/// itself always pass.
pub(crate) async fn onboarding_gate_middleware(
    State(state): State<Arc<AppState>>,
    request: Request<axum::body::Body>,
    next: Next,
) -> Response {
    if !state.onboarding_gate
        || is_exempt(request.uri().path())
        || has_visited_cookie(request.headers())
    {
        return next.run(request).await;
    }

    let location = match request.uri().query() {
        Some(query) => format!("{}?{}", ONBOARDING_PATH, query),
        None => ONBOARDING_PATH.to_string(),
    };
    tracing::debug!(path = request.uri().path(), "redirecting first visit to onboarding");
    Redirect::temporary(&location).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn cookies(values: &[&str]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for v in values {
            headers.append(COOKIE, HeaderValue::from_str(v).unwrap());
        }
        headers
    }

    #[test]
    fn exempt_paths() {
        for path in [
            "/onboarding",
            "/onboarding/step/2",
            "/api/generate",
            "/api/mark-visited",
            "/_next/static/app.js",
            "/favicon.ico",
            "/health",
        ] {
            assert!(is_exempt(path), "{path}");
        }
        for path in ["/", "/healthz", "/favicon.png", "/docs/api"] {
            assert!(!is_exempt(path), "{path}");
        }
    }

    #[test]
    fn visited_cookie_detection() {
        assert!(has_visited_cookie(&cookies(&["visited=true"])));
        assert!(has_visited_cookie(&cookies(&["theme=dark; visited=true"])));
        assert!(has_visited_cookie(&cookies(&["a=1", "visited=true"])));
        assert!(!has_visited_cookie(&cookies(&[])));
        assert!(!has_visited_cookie(&cookies(&["visited=false"])));
        assert!(!has_visited_cookie(&cookies(&["not_visited=true"])));
    }
}

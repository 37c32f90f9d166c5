//! HTTP route handlers: generation, onboarding, workspace bootstrap, health.

use std::collections::HashMap;

use axum::extract::Query;
use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use mockup_core::onboarding::{progress_percent, SLIDES};
use mockup_core::{generate_blocks, Mode, UiBlock, Workspace, SHARE_PARAM};
use serde_json::Value;

use super::json_error;
use super::middleware::VISITED_COOKIE;

/// One year, in seconds.
const VISITED_MAX_AGE: u32 = 60 * 60 * 24 * 365;

/// Fallback handler for unmatched routes.
pub(crate) async fn handle_not_found() -> impl IntoResponse {
    json_error(StatusCode::NOT_FOUND, "not found")
}

/// GET /health
pub(crate) async fn handle_health() -> impl IntoResponse {
    let response = serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    });
    (StatusCode::OK, Json(response))
}

/// Parsed body of `POST /api/generate`.
#[derive(Debug, PartialEq)]
pub(crate) struct GenerateRequest {
    pub(crate) idea: String,
    pub(crate) refine: String,
    pub(crate) prev: Vec<UiBlock>,
    pub(crate) mode: Mode,
}

impl GenerateRequest {
    /// Lenient reading of the request body.
    ///
    /// `idea` and `refine` are turned into text whatever their JSON type
    /// (missing or null become empty), a `prev` that is not an array is
    /// ignored and any mode other than `"replace"` means append.
    pub(crate) fn from_body(body: &str) -> Result<GenerateRequest, String> {
        let value: Value =
            serde_json::from_str(body).map_err(|e| format!("invalid JSON body: {}", e))?;
        let Value::Object(fields) = value else {
            return Err("request body must be a JSON object".to_string());
        };

        let prev = match fields.get("prev") {
            Some(Value::Array(items)) => serde_json::from_value(Value::Array(items.clone()))
                .map_err(|e| format!("invalid block in prev: {}", e))?,
            _ => Vec::new(),
        };
        let mode = fields
            .get("mode")
            .and_then(Value::as_str)
            .map(Mode::from_wire)
            .unwrap_or_default();

        Ok(GenerateRequest {
            idea: coerce_text(fields.get("idea")),
            refine: coerce_text(fields.get("refine")),
            prev,
            mode,
        })
    }
}

/// Text form of a loosely typed JSON field.
fn coerce_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => coerce_text(Some(other)),
            })
            .collect::<Vec<_>>()
            .join(","),
        Some(Value::Object(_)) => "[object Object]".to_string(),
    }
}

/// POST /api/generate
///
/// The body is read as plain text: browsers post it without a JSON
/// content type.
pub(crate) async fn handle_generate(body: String) -> impl IntoResponse {
    let request = match GenerateRequest::from_body(&body) {
        Ok(r) => r,
        Err(msg) => return json_error(StatusCode::BAD_REQUEST, &msg).into_response(),
    };

    let payload = generate_blocks(&request.idea, &request.refine, &request.prev, request.mode);
    tracing::info!(
        mode = request.mode.as_str(),
        prev = request.prev.len(),
        blocks = payload.blocks.len(),
        "generated mockup"
    );
    (StatusCode::OK, Json(payload)).into_response()
}

/// Cookie value marking onboarding as done.
pub(crate) fn visited_cookie() -> String {
    format!(
        "{}=true; Path=/; Max-Age={}; SameSite=Lax",
        VISITED_COOKIE, VISITED_MAX_AGE
    )
}

/// POST /api/mark-visited
pub(crate) async fn handle_mark_visited() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(SET_COOKIE, visited_cookie())],
        Json(serde_json::json!({ "ok": true })),
    )
}

/// GET /
///
/// The workspace a browser would start from: the shared one when `s` is
/// in the query, otherwise the starter blocks.
pub(crate) async fn handle_index(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    let token = params.get(SHARE_PARAM).map(String::as_str);
    let workspace = Workspace::hydrate(token, None);
    let response = serde_json::json!({
        "idea": workspace.idea(),
        "layout": workspace.layout_mode(),
        "blocks": workspace.blocks(),
    });
    (StatusCode::OK, Json(response))
}

/// GET /onboarding
pub(crate) async fn handle_onboarding() -> impl IntoResponse {
    let slides: Vec<Value> = SLIDES
        .iter()
        .enumerate()
        .map(|(step, slide)| {
            serde_json::json!({
                "title": slide.title,
                "text": slide.text,
                "emoji": slide.emoji,
                "progress": progress_percent(step),
            })
        })
        .collect();
    (StatusCode::OK, Json(serde_json::json!({ "slides": slides })))
}

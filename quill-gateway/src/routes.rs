//! Axum route handlers for the Quill gateway API.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use indexmap::IndexMap;
use quill_core::{
    chain, transform, Category, ChainStep, CodecError, Mode, Scheme, StepOutput, TransformOptions,
    TransformRequest,
};
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::warn;

use crate::{
    config::DEFAULT_MAX_OUTPUT_BYTES,
    error::GatewayError,
    usage::{ToolUsage, UsageTracker, DEFAULT_TOP_LIMIT},
};

/// Longest chain accepted by `/chain`.
pub const MAX_CHAIN_STEPS: usize = 32;

// ── Shared state ─────────────────────────────────────────────────────────────

/// State shared by every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub usage: Arc<UsageTracker>,
    /// Cap on output bytes per request; a chain counts every step's output.
    pub max_output_bytes: usize,
}

impl AppState {
    #[must_use]
    pub fn new(usage: Arc<UsageTracker>, max_output_bytes: usize) -> Self {
        Self { usage, max_output_bytes }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::default(), DEFAULT_MAX_OUTPUT_BYTES)
    }
}

// ── Request / response types ──────────────────────────────────────────────────

/// Body of `/encode` and `/decode`.
///
/// `encoding` stays a string so an unknown identifier reaches the handler
/// and is reported as a 400 with the standard error body.
#[derive(Debug, Deserialize)]
pub struct TransformBody {
    pub data: String,
    pub encoding: String,
    #[serde(default)]
    pub options: TransformOptions,
}

#[derive(Debug, Serialize)]
pub struct TransformResponse {
    pub success: bool,
    pub result: String,
    pub encoding: Scheme,
    pub mode: Mode,
    pub input_length: usize,
    pub output_length: usize,
}

#[derive(Debug, Deserialize)]
pub struct ChainStepBody {
    pub encoding: String,
    pub mode: Mode,
    #[serde(default)]
    pub options: TransformOptions,
}

#[derive(Debug, Deserialize)]
pub struct ChainBody {
    pub data: String,
    pub steps: Vec<ChainStepBody>,
}

#[derive(Debug, Serialize)]
pub struct ChainResponse {
    pub success: bool,
    pub result: String,
    pub steps: Vec<StepOutput>,
    pub input_length: usize,
    pub output_length: usize,
}

/// One entry of the `/encodings` listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodingInfo {
    pub id: Scheme,
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub can_decode: bool,
}

impl From<Scheme> for EncodingInfo {
    fn from(scheme: Scheme) -> Self {
        Self {
            id: scheme,
            name: scheme.name(),
            description: scheme.description(),
            category: scheme.category(),
            can_decode: scheme.is_reversible(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryInfo {
    pub title: &'static str,
    pub encodings: Vec<Scheme>,
}

#[derive(Debug, Serialize)]
pub struct EncodingsResponse {
    pub success: bool,
    pub count: usize,
    pub encodings: Vec<EncodingInfo>,
    pub categories: IndexMap<&'static str, CategoryInfo>,
}

#[derive(Debug, Deserialize)]
pub struct ToolsQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ToolsResponse {
    pub success: bool,
    pub tools: Vec<ToolUsage>,
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router.
///
/// `max_body_bytes` caps request bodies on every route.
pub fn create_router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/encode", post(encode))
        .route("/decode", post(decode))
        .route("/encodings", get(list_encodings))
        .route("/chain", post(chain_transform))
        .route("/health", get(health))
        .route("/stats/requests", get(request_count))
        .route("/stats/tools", get(tool_usage))
        .layer(middleware::from_fn_with_state(state.clone(), track_usage))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn track_usage(State(state): State<AppState>, req: Request, next: Next) -> Response {
    state.usage.record(req.uri().path());
    next.run(req).await
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /health`: liveness check.
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "healthy",
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
    )
}

/// `POST /encode`.
///
/// # Errors
/// Returns [`GatewayError::Body`] for an unreadable body, or
/// [`GatewayError::Codec`] for an unknown identifier, oversized output or a
/// transform failure.
pub async fn encode(
    State(state): State<AppState>,
    payload: Result<Json<TransformBody>, JsonRejection>,
) -> Result<Json<TransformResponse>, GatewayError> {
    let Json(body) = payload?;
    run_transform(Mode::Encode, body, state.max_output_bytes).map(Json)
}

/// `POST /decode`.
///
/// # Errors
/// Returns [`GatewayError::Body`] for an unreadable body, or
/// [`GatewayError::Codec`] for an unknown identifier, a one-way scheme or
/// input that does not parse.
pub async fn decode(
    State(state): State<AppState>,
    payload: Result<Json<TransformBody>, JsonRejection>,
) -> Result<Json<TransformResponse>, GatewayError> {
    let Json(body) = payload?;
    run_transform(Mode::Decode, body, state.max_output_bytes).map(Json)
}

fn run_transform(
    mode: Mode,
    body: TransformBody,
    max_output_bytes: usize,
) -> Result<TransformResponse, GatewayError> {
    let outcome = body.encoding.parse::<Scheme>().and_then(|encoding| {
        let request = TransformRequest { data: body.data, encoding, mode, options: body.options };
        transform(&request, max_output_bytes).map(|result| (encoding, result))
    });
    match outcome {
        Ok((scheme, result)) => Ok(TransformResponse {
            success: true,
            result: result.output,
            encoding: scheme,
            mode,
            input_length: result.input_length,
            output_length: result.output_length,
        }),
        Err(e) => {
            warn!(encoding = %body.encoding, mode = %mode, error = %e, "transform rejected");
            Err(e.into())
        }
    }
}

/// `GET /encodings`: static scheme catalogue.
pub async fn list_encodings() -> Json<EncodingsResponse> {
    let encodings: Vec<EncodingInfo> = Scheme::ALL.iter().copied().map(EncodingInfo::from).collect();
    let categories = Category::ALL
        .iter()
        .map(|&category| {
            let members =
                Scheme::ALL.iter().copied().filter(|s| s.category() == category).collect();
            (category.as_str(), CategoryInfo { title: category.title(), encodings: members })
        })
        .collect();
    Json(EncodingsResponse { success: true, count: encodings.len(), encodings, categories })
}

/// `POST /chain`: apply several transforms in sequence.
///
/// # Errors
/// Returns [`GatewayError::Body`] for an unreadable body,
/// [`GatewayError::InvalidRequest`] when the chain is longer than
/// [`MAX_CHAIN_STEPS`], or [`GatewayError::Codec`] for an unknown identifier
/// or the first failing step. A step fails once the outputs kept so far
/// could pass the output cap.
pub async fn chain_transform(
    State(state): State<AppState>,
    payload: Result<Json<ChainBody>, JsonRejection>,
) -> Result<Json<ChainResponse>, GatewayError> {
    let Json(body) = payload?;
    if body.steps.len() > MAX_CHAIN_STEPS {
        return Err(GatewayError::InvalidRequest(format!(
            "chain has {} steps; at most {MAX_CHAIN_STEPS} are allowed",
            body.steps.len()
        )));
    }
    let steps = body
        .steps
        .into_iter()
        .map(|step| -> Result<ChainStep, CodecError> {
            Ok(ChainStep { encoding: step.encoding.parse()?, mode: step.mode, options: step.options })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let result = chain(&body.data, &steps, state.max_output_bytes).inspect_err(|e| {
        warn!(steps = steps.len(), error = %e, "chain rejected");
    })?;
    Ok(Json(ChainResponse {
        success: true,
        result: result.output,
        steps: result.steps,
        input_length: result.input_length,
        output_length: result.output_length,
    }))
}

/// `GET /stats/requests`: total requests since startup.
pub async fn request_count(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({"success": true, "count": state.usage.total()}))
}

/// `GET /stats/tools?limit=N`: most used transform endpoints.
pub async fn tool_usage(
    State(state): State<AppState>,
    Query(query): Query<ToolsQuery>,
) -> Json<ToolsResponse> {
    let tools = state.usage.top(query.limit.unwrap_or(DEFAULT_TOP_LIMIT));
    Json(ToolsResponse { success: true, tools })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    const LIMIT: usize = 64 * 1024;
    const OUTPUT_LIMIT: usize = 1024 * 1024;

    fn test_app() -> (Router, Arc<UsageTracker>) {
        let usage = Arc::new(UsageTracker::new());
        (create_router(AppState::new(Arc::clone(&usage), OUTPUT_LIMIT), LIMIT), usage)
    }

    async fn send(app: Router, req: Request<Body>) -> (StatusCode, serde_json::Value) {
        let resp = match app.oneshot(req).await {
            Ok(r) => r,
            Err(e) => panic!("handler error: {e}"),
        };
        let status = resp.status();
        let bytes = match axum::body::to_bytes(resp.into_body(), LIMIT).await {
            Ok(b) => b,
            Err(e) => panic!("failed to read body: {e}"),
        };
        let body = match serde_json::from_slice(&bytes) {
            Ok(v) => v,
            Err(e) => panic!("invalid JSON ({e}): {}", String::from_utf8_lossy(&bytes)),
        };
        (status, body)
    }

    fn get_req(uri: &str) -> Request<Body> {
        match Request::builder().uri(uri).body(Body::empty()) {
            Ok(r) => r,
            Err(e) => panic!("failed to build request: {e}"),
        }
    }

    fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
        match Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
        {
            Ok(r) => r,
            Err(e) => panic!("failed to build request: {e}"),
        }
    }

    #[tokio::test]
    async fn health_reports_healthy_with_timestamp() {
        let (app, _) = test_app();
        let (status, body) = send(app, get_req("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        let ts = body["timestamp"].as_str().unwrap_or_default();
        assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok(), "bad timestamp {ts:?}");
    }

    #[tokio::test]
    async fn encode_returns_result_and_lengths() {
        let (app, _) = test_app();
        let req = post_json("/encode", &serde_json::json!({"data": "Hello World", "encoding": "base64"}));
        let (status, body) = send(app, req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["result"], "SGVsbG8gV29ybGQ=");
        assert_eq!(body["encoding"], "base64");
        assert_eq!(body["mode"], "encode");
        assert_eq!(body["input_length"], 11);
        assert_eq!(body["output_length"], 16);
    }

    #[tokio::test]
    async fn decode_applies_options() {
        let (app, _) = test_app();
        let req = post_json(
            "/decode",
            &serde_json::json!({"data": "def", "encoding": "caesar", "options": {"shift": 3}}),
        );
        let (status, body) = send(app, req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"], "abc");
        assert_eq!(body["mode"], "decode");
    }

    #[tokio::test]
    async fn unknown_encoding_is_400_on_both_directions() {
        for uri in ["/encode", "/decode"] {
            let (app, _) = test_app();
            let req = post_json(uri, &serde_json::json!({"data": "x", "encoding": "base99"}));
            let (status, body) = send(app, req).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body["success"], false);
            assert_eq!(body["error"], "unknown encoding 'base99'");
        }
    }

    #[tokio::test]
    async fn decoding_a_hash_is_400() {
        let (app, _) = test_app();
        let req = post_json("/decode", &serde_json::json!({"data": "abc", "encoding": "md5-hash"}));
        let (status, body) = send(app, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let msg = body["error"].as_str().unwrap_or_default();
        assert!(msg.contains("cannot be decoded"), "got {msg:?}");
    }

    #[tokio::test]
    async fn malformed_decode_input_is_400() {
        let (app, _) = test_app();
        let req = post_json("/decode", &serde_json::json!({"data": "zz", "encoding": "base16"}));
        let (status, body) = send(app, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn encodings_lists_every_scheme_with_categories() {
        let (app, _) = test_app();
        let (status, body) = send(app, get_req("/encodings")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], Scheme::ALL.len());
        let list = body["encodings"].as_array().map_or(0, Vec::len);
        assert_eq!(list, Scheme::ALL.len());

        let sha = body["encodings"]
            .as_array()
            .and_then(|all| all.iter().find(|e| e["id"] == "sha256-hash"))
            .cloned()
            .unwrap_or_default();
        assert_eq!(sha["canDecode"], false);
        assert_eq!(sha["category"], "hash");
        assert!(body["categories"]["cipher"]["encodings"]
            .as_array()
            .is_some_and(|ids| ids.iter().any(|id| id == "vigenere")));
    }

    #[tokio::test]
    async fn chain_returns_every_intermediate_output() {
        let (app, _) = test_app();
        let req = post_json(
            "/chain",
            &serde_json::json!({
                "data": "Hello",
                "steps": [
                    {"encoding": "rot13", "mode": "encode"},
                    {"encoding": "base64", "mode": "encode"},
                    {"encoding": "base64", "mode": "decode"}
                ]
            }),
        );
        let (status, body) = send(app, req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"], "Uryyb");
        assert_eq!(body["steps"][1]["output"], "VXJ5eWI=");
        assert_eq!(body["steps"][2]["mode"], "decode");
    }

    #[tokio::test]
    async fn chain_failure_names_step() {
        let (app, _) = test_app();
        let req = post_json(
            "/chain",
            &serde_json::json!({
                "data": "Hello",
                "steps": [{"encoding": "sha1-hash", "mode": "encode"}, {"encoding": "base32", "mode": "decode"}]
            }),
        );
        let (status, body) = send(app, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let msg = body["error"].as_str().unwrap_or_default();
        assert!(msg.starts_with("chain step 1 failed"), "got {msg:?}");
    }

    #[tokio::test]
    async fn overlong_chain_is_rejected() {
        let (app, _) = test_app();
        let steps: Vec<_> = (0..=MAX_CHAIN_STEPS)
            .map(|_| serde_json::json!({"encoding": "reverse", "mode": "encode"}))
            .collect();
        let req = post_json("/chain", &serde_json::json!({"data": "x", "steps": steps}));
        let (status, body) = send(app, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().is_some_and(|m| m.starts_with("invalid request")));
    }

    #[tokio::test]
    async fn requests_are_counted_per_tool() {
        let (app, usage) = test_app();
        for data in ["a", "b"] {
            let req = post_json("/encode", &serde_json::json!({"data": data, "encoding": "hex"}));
            let _ = send(app.clone(), req).await;
        }
        let _ = send(app.clone(), get_req("/encodings")).await;

        let (_, body) = send(app.clone(), get_req("/stats/tools?limit=1")).await;
        assert_eq!(body["tools"].as_array().map_or(0, Vec::len), 1);
        assert_eq!(body["tools"][0]["id"], "universal-encode");
        assert_eq!(body["tools"][0]["count"], 2);

        let (_, body) = send(app, get_req("/stats/requests")).await;
        assert_eq!(body["count"], 5, "stats requests are counted too");
        assert_eq!(usage.total(), 5);
    }

    #[tokio::test]
    async fn oversized_body_is_rejected() {
        let usage = Arc::new(UsageTracker::new());
        let app = create_router(AppState::new(usage, OUTPUT_LIMIT), 32);
        let req = post_json("/encode", &serde_json::json!({"data": "x".repeat(64), "encoding": "hex"}));
        let (status, body) = send(app, req).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn repeated_binary_chain_hits_output_cap() {
        let (app, _) = test_app();
        let steps: Vec<_> =
            (0..12).map(|_| serde_json::json!({"encoding": "binary", "mode": "encode"})).collect();
        let req = post_json("/chain", &serde_json::json!({"data": "a", "steps": steps}));
        let (status, body) = send(app, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        let msg = body["error"].as_str().unwrap_or_default();
        assert!(msg.starts_with("chain step 6 failed"), "got {msg:?}");
        assert!(msg.contains("limit"), "got {msg:?}");
    }

    #[tokio::test]
    async fn long_separator_on_encode_hits_output_cap() {
        let (app, _) = test_app();
        let req = post_json(
            "/encode",
            &serde_json::json!({
                "data": "a".repeat(1000),
                "encoding": "binary",
                "options": {"separator": "-".repeat(2000)}
            }),
        );
        let (status, body) = send(app, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let msg = body["error"].as_str().unwrap_or_default();
        assert!(msg.contains("could exceed"), "got {msg:?}");
    }

    #[tokio::test]
    async fn wrong_json_type_gets_error_body() {
        let (app, _) = test_app();
        let req = post_json("/encode", &serde_json::json!({"data": 1, "encoding": "hex"}));
        let (status, body) = send(app, req).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["success"], false);
        let msg = body["error"].as_str().unwrap_or_default();
        assert!(msg.starts_with("invalid request body"), "got {msg:?}");
    }

    #[tokio::test]
    async fn missing_content_type_gets_error_body() {
        let (app, _) = test_app();
        let req = match Request::builder()
            .method("POST")
            .uri("/chain")
            .body(Body::from(r#"{"data":"x","steps":[]}"#))
        {
            Ok(r) => r,
            Err(e) => panic!("failed to build request: {e}"),
        };
        let (status, body) = send(app, req).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(body["success"], false);
    }
}

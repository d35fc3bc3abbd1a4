use axum::{
    Json,
    body::{Body, to_bytes},
    extract::{Request, State},
    http::{HeaderMap, HeaderName, StatusCode, header},
    response::{IntoResponse, Response},
};
use shared_http::api::ErrorResponse;
use tracing::{debug, error, info, warn};

use crate::state::AppState;

/// Upper bound on a buffered request body (timetable uploads are the largest).
pub const MAX_BODY_BYTES: usize = 256 * 1024 * 1024;

/// Connection-scoped headers that must not be forwarded.
const HOP_BY_HOP: [HeaderName; 8] = [
    header::CONNECTION,
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
    header::HOST,
];

fn is_forwardable(name: &HeaderName) -> bool {
    !HOP_BY_HOP.contains(name) && *name != header::CONTENT_LENGTH && name.as_str() != "keep-alive"
}

fn copy_headers(from: &HeaderMap) -> HeaderMap {
    from.iter()
        .filter(|(name, _)| is_forwardable(name))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

fn gateway_error(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}

/// ANY /api/{*path}, /docs, /openapi.json
pub async fn forward(State(state): State<AppState>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let path_and_query = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    let url = format!("{}{}", state.backend_url, path_and_query);
    debug!(method = %parts.method, %url, "forwarding");

    let body = match to_bytes(body, MAX_BODY_BYTES).await {
        Ok(body) => body,
        Err(e) => {
            warn!("Failed to read request body: {}", e);
            return gateway_error(StatusCode::PAYLOAD_TOO_LARGE, format!("request body rejected: {e}"));
        }
    };

    let upstream = state
        .client
        .request(parts.method.clone(), &url)
        .headers(copy_headers(&parts.headers))
        .body(body)
        .send()
        .await;

    let upstream = match upstream {
        Ok(upstream) => upstream,
        Err(e) if e.is_timeout() => {
            warn!(%url, "Backend timed out");
            return gateway_error(StatusCode::GATEWAY_TIMEOUT, "backend timed out".into());
        }
        Err(e) => {
            error!(%url, "Backend unreachable: {}", e);
            return gateway_error(StatusCode::BAD_GATEWAY, format!("backend unreachable: {e}"));
        }
    };

    let status = upstream.status();
    let headers = copy_headers(upstream.headers());
    let bytes = match upstream.bytes().await {
        Ok(bytes) => bytes,
        Err(e) if e.is_timeout() => {
            return gateway_error(StatusCode::GATEWAY_TIMEOUT, "backend timed out".into());
        }
        Err(e) => {
            error!(%url, "Failed to read backend response: {}", e);
            return gateway_error(StatusCode::BAD_GATEWAY, format!("backend response failed: {e}"));
        }
    };

    info!("{} {} -> {}", parts.method, parts.uri.path(), status.as_u16());

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    response
}

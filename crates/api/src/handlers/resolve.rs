//! DNS-over-HTTPS endpoint (RFC 8484).
//!
//! Both wire-format transports are supported:
//!   `GET  /dns-query?dns=<base64url>` — base64url-encoded DNS wire format
//!   `POST /dns-query`                 — body is raw DNS wire format
//!
//! An optional trailing path segment selects the upstream provider for
//! queries that end up proxied; unknown keys use the configured default.

use axum::{
    body::{Body, Bytes},
    extract::{Path, Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde::Deserialize;

use crate::errors::ApiError;
use crate::state::AppState;
use opentld_application::ports::UpstreamReply;
use opentld_application::use_cases::Resolution;

const DNS_MESSAGE_CONTENT_TYPE: &str = "application/dns-message";

/// RFC 8484 §6: maximum wire-format message size for DoH.
const MAX_DNS_MESSAGE_BYTES: usize = 65_535;

#[derive(Deserialize)]
pub struct DohGetParams {
    dns: String,
}

pub async fn post_query(State(state): State<AppState>, body: Bytes) -> Response {
    resolve(state, None, body.to_vec()).await
}

pub async fn post_query_with_provider(
    State(state): State<AppState>,
    Path(provider): Path<String>,
    body: Bytes,
) -> Response {
    resolve(state, Some(provider), body.to_vec()).await
}

pub async fn get_query(
    State(state): State<AppState>,
    Query(params): Query<DohGetParams>,
) -> Response {
    match URL_SAFE_NO_PAD.decode(&params.dns) {
        Ok(data) => resolve(state, None, data).await,
        Err(_) => (StatusCode::BAD_REQUEST, "Invalid base64url encoding").into_response(),
    }
}

pub async fn get_query_with_provider(
    State(state): State<AppState>,
    Path(provider): Path<String>,
    Query(params): Query<DohGetParams>,
) -> Response {
    match URL_SAFE_NO_PAD.decode(&params.dns) {
        Ok(data) => resolve(state, Some(provider), data).await,
        Err(_) => (StatusCode::BAD_REQUEST, "Invalid base64url encoding").into_response(),
    }
}

async fn resolve(state: AppState, provider: Option<String>, data: Vec<u8>) -> Response {
    if data.len() > MAX_DNS_MESSAGE_BYTES {
        return (StatusCode::PAYLOAD_TOO_LARGE, "DNS message too large").into_response();
    }

    match state.resolve.execute(&data, provider.as_deref()).await {
        Ok(Resolution::Authoritative(bytes)) => wire_response(bytes),
        Ok(Resolution::Proxied(reply)) => relay_response(reply),
        Err(e) => {
            tracing::warn!(error = %e, "DoH resolution failed");
            ApiError(e).into_response()
        }
    }
}

fn wire_response(bytes: Vec<u8>) -> Response {
    let mut response = Response::new(Body::from(bytes));
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(DNS_MESSAGE_CONTENT_TYPE),
    );
    response
}

/// Relay the upstream reply byte-for-byte: status, body, content type.
fn relay_response(reply: UpstreamReply) -> Response {
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);

    let content_type = reply
        .content_type
        .as_deref()
        .and_then(|value| HeaderValue::from_str(value).ok())
        .unwrap_or_else(|| HeaderValue::from_static(DNS_MESSAGE_CONTENT_TYPE));

    let mut response = Response::new(Body::from(reply.body));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, content_type);
    response
}

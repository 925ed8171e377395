use axum::{
    Extension,
    body::Body,
    http::{StatusCode, header},
    response::Response,
};
use reqwest::Client;

use crate::config::ServerConfig;
use crate::shared::logging::LogOperation;

/// Proxy configuration
#[derive(Clone)]
pub struct SearchProxyState {
    pub upstream_url: String,
    pub client: Client,
}

impl SearchProxyState {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            upstream_url: config.upstream_search_url(),
            client: Client::new(),
        }
    }
}

/// POST /api/search
/// Forward search requests to the search backend.
///
/// Status and body are passed through untouched so the browser can show
/// backend errors verbatim. Connection failures become 502.
pub async fn search_proxy_handler(
    Extension(state): Extension<SearchProxyState>,
    body: String,
) -> Response {
    let upstream = state
        .client
        .post(&state.upstream_url)
        .header(header::CONTENT_TYPE.as_str(), "application/json")
        .body(body)
        .send()
        .await;

    let response = match upstream {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(
                operation = LogOperation::Proxy.as_str(),
                upstream = %state.upstream_url,
                error = %e,
                "Failed to reach search backend"
            );
            return plain_response(StatusCode::BAD_GATEWAY, "Search service unavailable".to_string());
        }
    };

    let status = StatusCode::from_u16(response.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("application/json")
        .to_string();

    let body = match response.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!(
                operation = LogOperation::Proxy.as_str(),
                error = %e,
                "Failed to read search backend response"
            );
            return plain_response(StatusCode::BAD_GATEWAY, "Search service response was interrupted".to_string());
        }
    };

    if !status.is_success() {
        tracing::warn!(
            operation = LogOperation::Proxy.as_str(),
            status = status.as_u16(),
            "Search backend returned error"
        );
    }

    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .unwrap_or_else(|e| {
            tracing::error!("Failed to build proxy response: {}", e);
            plain_response(StatusCode::INTERNAL_SERVER_ERROR, "Proxy error".to_string())
        })
}

fn plain_response(status: StatusCode, message: String) -> Response {
    let mut response = Response::new(Body::from(message));
    *response.status_mut() = status;
    response
}

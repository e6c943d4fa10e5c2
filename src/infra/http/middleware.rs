use std::time::Instant;

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use tracing::{error, warn};
use uuid::Uuid;

use crate::application::error::ErrorReport;

/// Correlation id carried in request and response extensions so every
/// log line about one request can be tied together.
#[derive(Clone)]
pub struct RequestContext {
    pub request_id: String,
}

impl RequestContext {
    fn fresh() -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
        }
    }
}

pub async fn set_request_context(mut request: Request<Body>, next: Next) -> Response {
    let ctx = RequestContext::fresh();
    request.extensions_mut().insert(ctx.clone());

    let mut response = next.run(request).await;
    response.extensions_mut().insert(ctx);
    response
}

/// Logs every 4xx as a warning and every 5xx as an error, folding in the
/// [`ErrorReport`] a handler attached. Successes stay quiet; EnvFilter
/// directives can turn on per-request tracing when needed.
pub async fn log_failures(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let query = request.uri().query().unwrap_or_default().to_string();
    let request_id = request
        .extensions()
        .get::<RequestContext>()
        .map_or_else(String::new, |ctx| ctx.request_id.clone());
    let start = Instant::now();

    let mut response = next.run(request).await;

    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }

    let elapsed_ms = start.elapsed().as_millis() as u64;
    let report = response
        .extensions_mut()
        .remove::<ErrorReport>()
        .unwrap_or_else(|| {
            ErrorReport::from_message("unknown", status, "no diagnostic attached")
        });
    // Render the cause chain the way anyhow would: outermost first.
    let detail = report.messages.join(": ");

    if status.is_server_error() {
        error!(
            target = "cortado::http",
            status = status.as_u16(),
            method = %method,
            path = path,
            query = query,
            elapsed_ms = elapsed_ms,
            source = report.source,
            detail = detail,
            request_id = request_id,
            "request failed",
        );
    } else {
        warn!(
            target = "cortado::http",
            status = status.as_u16(),
            method = %method,
            path = path,
            query = query,
            elapsed_ms = elapsed_ms,
            source = report.source,
            detail = detail,
            request_id = request_id,
            "request rejected",
        );
    }

    response
}

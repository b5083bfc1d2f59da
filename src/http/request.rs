//! Request identity.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) for requests lacking one
//! - Stamp the ID as early as possible so it flows through tracing
//!
//! # Design Decisions
//! - Incoming `x-request-id` headers are preserved, never overwritten

use std::task::{Context, Poll};

use axum::http::{HeaderName, HeaderValue, Request};
use tower::{Layer, Service};
use uuid::Uuid;

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Layer that stamps a request ID on requests lacking one.
#[derive(Clone, Copy, Debug, Default)]
pub struct RequestIdLayer;

impl<S> Layer<S> for RequestIdLayer {
    type Service = RequestIdService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestIdService { inner }
    }
}

/// Service produced by [`RequestIdLayer`].
#[derive(Clone, Debug)]
pub struct RequestIdService<S> {
    inner: S,
}

impl<S, B> Service<Request<B>> for RequestIdService<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<B>) -> Self::Future {
        let header = HeaderName::from_static(X_REQUEST_ID);
        if !req.headers().contains_key(&header) {
            let id = Uuid::new_v4().to_string();
            if let Ok(value) = HeaderValue::from_str(&id) {
                req.headers_mut().insert(header, value);
            }
        }
        self.inner.call(req)
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use axum::body::Body;
    use tower::{service_fn, ServiceExt};

    use super::*;

    async fn observed_id(req: Request<Body>) -> Option<String> {
        let svc = RequestIdLayer.layer(service_fn(|req: Request<Body>| async move {
            Ok::<_, Infallible>(
                req.headers()
                    .get(X_REQUEST_ID)
                    .and_then(|v| v.to_str().ok())
                    .map(String::from),
            )
        }));
        svc.oneshot(req).await.unwrap()
    }

    #[tokio::test]
    async fn stamps_missing_request_id() {
        let req = Request::builder().body(Body::empty()).unwrap();
        let id = observed_id(req).await.expect("id missing");
        assert_eq!(id.len(), 36); // UUID v4 text form
    }

    #[tokio::test]
    async fn preserves_existing_request_id() {
        let req = Request::builder()
            .header(X_REQUEST_ID, "caller-chosen")
            .body(Body::empty())
            .unwrap();
        assert_eq!(observed_id(req).await.as_deref(), Some("caller-chosen"));
    }
}

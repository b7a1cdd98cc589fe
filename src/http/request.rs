//! Request ID middleware.
//!
//! # Responsibilities
//! - Generate unique request ID (UUID v4)
//! - Attach it to the incoming request headers
//! - Echo it on the response for client-side correlation
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - Incoming IDs are not trusted; the service always mints its own

use axum::body::Body;
use axum::http::{HeaderName, HeaderValue, Request, Response};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tower::{Layer, Service};
use uuid::Uuid;

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Layer that stamps every request and response with a fresh UUID.
#[derive(Clone, Copy, Debug, Default)]
pub struct RequestIdLayer;

impl<S> Layer<S> for RequestIdLayer {
    type Service = RequestIdService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestIdService { inner }
    }
}

/// Middleware service produced by [`RequestIdLayer`].
#[derive(Clone, Debug)]
pub struct RequestIdService<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for RequestIdService<S>
where
    S: Service<Request<Body>, Response = Response<Body>>,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future =
        Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<Body>) -> Self::Future {
        let header = HeaderName::from_static(X_REQUEST_ID);
        let id = Uuid::new_v4();

        // A hyphenated UUID is always a valid header value.
        let value = HeaderValue::try_from(id.to_string()).ok();
        if let Some(value) = &value {
            req.headers_mut().insert(header.clone(), value.clone());
        }

        tracing::debug!(request_id = %id, "request received");

        let fut = self.inner.call(req);
        Box::pin(async move {
            let mut res = fut.await?;
            if let Some(value) = value {
                res.headers_mut().insert(header, value);
            }
            Ok(res)
        })
    }
}

use axum::{
    body::Body,
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

/// Header a caller may set to correlate its action batch with our logs
pub const BATCH_ID_HEADER: &str = "x-request-id";

/// Correlation ID of one action batch.
///
/// Over HTTP it comes from the caller's `x-request-id` header when that holds
/// a UUID. File runs and header-less requests get a fresh v4 ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchId(Uuid);

impl BatchId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        headers
            .get(BATCH_ID_HEADER)?
            .to_str()
            .ok()
            .and_then(|s| Uuid::parse_str(s.trim()).ok())
            .map(Self)
    }
}

impl Default for BatchId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Stores the batch ID in the request extensions and echoes it back
pub async fn batch_id_middleware(mut request: Request, next: Next) -> Response {
    let batch_id = BatchId::from_headers(request.headers()).unwrap_or_default();
    request.extensions_mut().insert(batch_id);

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&batch_id.to_string()) {
        response.headers_mut().insert(BATCH_ID_HEADER, value);
    }
    response
}

pub fn http_span(request: &Request<Body>) -> tracing::Span {
    let batch = request
        .extensions()
        .get::<BatchId>()
        .map(BatchId::to_string)
        .unwrap_or_default();

    tracing::info_span!(
        "http",
        method = %request.method(),
        path = %request.uri().path(),
        batch = %batch,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(BATCH_ID_HEADER, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_caller_id_is_reused() {
        let id = "67e55044-10b1-426f-9247-bb680e5fe0c8";
        let batch = BatchId::from_headers(&headers(id)).unwrap();
        assert_eq!(batch.to_string(), id);
    }

    #[test]
    fn test_non_uuid_header_is_ignored() {
        assert_eq!(BatchId::from_headers(&headers("batch-42")), None);
        assert_eq!(BatchId::from_headers(&HeaderMap::new()), None);
    }

    #[test]
    fn test_fresh_ids_differ() {
        assert_ne!(BatchId::new(), BatchId::new());
    }
}

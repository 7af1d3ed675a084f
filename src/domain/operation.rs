/// The contract every request type fulfils so it can be sent.

use serde::Serialize;
use thiserror::Error;

use crate::domain::entities::HttpMethod;

/// One service operation, implemented by its request type.
///
/// Cross-cutting per-call settings live in
/// [`RequestOptions`](crate::use_cases::RequestOptions), not on the request.
pub trait Operation: Serialize + Send + Sync {
    type Output;

    /// Operation name as the service knows it, e.g. `CreateModel`.
    const NAME: &'static str;
    const METHOD: HttpMethod;
    /// Path template; `{key}` placeholders name request members by wire key.
    const PATH: &'static str;
    /// Wire keys of the members sent in the query string.
    const QUERY: &'static [&'static str];

    fn parse_output(body: &[u8]) -> Result<Self::Output, UnmarshalError>;
}

#[derive(Debug, Error)]
pub enum UnmarshalError {
    #[error("Malformed response body: {0}")]
    Json(#[from] serde_json::Error),
}

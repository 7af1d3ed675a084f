/// Use Cases - Application-specific business rules
/// Uses domain entities and repository interfaces

use crate::adapters::rest_json::{marshal, unmarshal_error, MarshalError};
use crate::domain::{
    CommunicationError, HttpRequest, HttpTransport, Operation, ServiceError, UnmarshalError,
};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Per-call settings layered on top of a marshalled request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    headers: Vec<(String, String)>,
    query: Vec<(String, String)>,
    timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn apply(&self, request: &mut HttpRequest) {
        request.headers.extend(self.headers.iter().cloned());
        request.query.extend(self.query.iter().cloned());
        if self.timeout.is_some() {
            request.timeout = self.timeout;
        }
    }
}

/// Use case for invoking one control-plane operation
pub struct InvokeOperationUseCase<T: HttpTransport> {
    transport: Arc<T>,
    endpoint: String,
    user_agent: String,
}

impl<T: HttpTransport> InvokeOperationUseCase<T> {
    pub fn new(transport: Arc<T>, endpoint: impl Into<String>) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
            user_agent: crate::config::default_user_agent(),
        }
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn execute<O: Operation>(&self, operation: &O) -> Result<O::Output, UseCaseError> {
        self.execute_with(operation, &RequestOptions::default()).await
    }

    /// Execute the use case: marshal, send, then decode the result or the
    /// service error
    pub async fn execute_with<O: Operation>(
        &self,
        operation: &O,
        options: &RequestOptions,
    ) -> Result<O::Output, UseCaseError> {
        let mut request = marshal(operation)?;
        options.apply(&mut request);
        if request.header("User-Agent").is_none() {
            request
                .headers
                .push(("User-Agent".to_string(), self.user_agent.clone()));
        }

        tracing::debug!(
            "Invoking {}: {} {}",
            O::NAME,
            request.method.as_str(),
            request.path
        );

        let response = self.transport.send(&self.endpoint, request).await?;

        if !response.is_success() {
            let error = unmarshal_error(&response);
            tracing::warn!(
                "{} failed with status {}: {}",
                O::NAME,
                response.status_code,
                error
            );
            return Err(UseCaseError::Service(error));
        }

        tracing::debug!("{} succeeded with status {}", O::NAME, response.status_code);
        Ok(O::parse_output(&response.body)?)
    }
}

/// Use case errors
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("Invalid request: {0}")]
    Marshal(#[from] MarshalError),

    #[error("Communication error: {0}")]
    Communication(#[from] CommunicationError),

    #[error("Service error: {0}")]
    Service(#[from] ServiceError),

    #[error("Invalid response: {0}")]
    Unmarshal(#[from] UnmarshalError),
}

impl UseCaseError {
    /// The service error behind this failure, if the service produced one
    pub fn service_error(&self) -> Option<&ServiceError> {
        match self {
            UseCaseError::Service(error) => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        CreateModelRequest, DeleteApiRequest, GetApiRequest, HttpMethod, HttpResponse,
        ProtocolType,
    };
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct StubTransport {
        response: Result<HttpResponse, CommunicationError>,
        seen: Mutex<Vec<(String, HttpRequest)>>,
    }

    impl StubTransport {
        fn replying(status_code: u16, body: &str) -> Arc<Self> {
            Arc::new(Self {
                response: Ok(HttpResponse {
                    status_code,
                    headers: Vec::new(),
                    body: body.as_bytes().to_vec(),
                }),
                seen: Mutex::new(Vec::new()),
            })
        }

        fn failing(error: CommunicationError) -> Arc<Self> {
            Arc::new(Self {
                response: Err(error),
                seen: Mutex::new(Vec::new()),
            })
        }

        fn last_request(&self) -> (String, HttpRequest) {
            self.seen.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait]
    impl HttpTransport for StubTransport {
        async fn send(
            &self,
            endpoint: &str,
            request: HttpRequest,
        ) -> Result<HttpResponse, CommunicationError> {
            self.seen.lock().unwrap().push((endpoint.to_string(), request));
            self.response.clone()
        }
    }

    #[tokio::test]
    async fn test_execute_decodes_result() {
        let transport = StubTransport::replying(200, r#"{"apiId": "a1", "protocolType": "HTTP"}"#);
        let use_case = InvokeOperationUseCase::new(transport.clone(), "https://example.test");

        let result = use_case
            .execute(&GetApiRequest::new().with_api_id("a1"))
            .await
            .unwrap();

        assert_eq!(result.protocol_type(), Some(&ProtocolType::Http));
        let (endpoint, request) = transport.last_request();
        assert_eq!(endpoint, "https://example.test");
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path, "/v2/apis/a1");
        assert!(request.header("user-agent").unwrap().starts_with("apigatewayv2-rust/"));
    }

    #[tokio::test]
    async fn test_options_add_headers_query_and_timeout() {
        let transport = StubTransport::replying(204, "");
        let use_case = InvokeOperationUseCase::new(transport.clone(), "http://localhost")
            .with_user_agent("tests/1.0");
        let options = RequestOptions::new()
            .with_header("X-Trace", "t-1")
            .with_query("dryRun", "true")
            .with_timeout(Duration::from_secs(2));

        use_case
            .execute_with(&DeleteApiRequest::new().with_api_id("a1"), &options)
            .await
            .unwrap();

        let (_, request) = transport.last_request();
        assert_eq!(request.header("x-trace"), Some("t-1"));
        assert_eq!(request.header("user-agent"), Some("tests/1.0"));
        assert_eq!(request.query, vec![("dryRun".to_string(), "true".to_string())]);
        assert_eq!(request.timeout, Some(Duration::from_secs(2)));
    }

    #[tokio::test]
    async fn test_service_error_is_surfaced() {
        let transport = StubTransport::replying(
            404,
            r#"{"__type": "NotFoundException", "message": "Invalid API identifier", "resourceType": "Api"}"#,
        );
        let use_case = InvokeOperationUseCase::new(transport, "http://localhost");

        let err = use_case
            .execute(&GetApiRequest::new().with_api_id("missing"))
            .await
            .unwrap_err();

        match err.service_error() {
            Some(ServiceError::NotFound(e)) => assert_eq!(e.resource_type(), Some("Api")),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_marshal_error_skips_transport() {
        let transport = StubTransport::replying(200, "{}");
        let use_case = InvokeOperationUseCase::new(transport.clone(), "http://localhost");

        let err = use_case
            .execute(&CreateModelRequest::new().with_name("Pet"))
            .await
            .unwrap_err();

        assert!(matches!(err, UseCaseError::Marshal(_)));
        assert!(transport.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_transport_error_is_wrapped() {
        let transport = StubTransport::failing(CommunicationError::Timeout("30s elapsed".to_string()));
        let use_case = InvokeOperationUseCase::new(transport, "http://localhost");

        let err = use_case
            .execute(&GetApiRequest::new().with_api_id("a1"))
            .await
            .unwrap_err();

        assert!(matches!(err, UseCaseError::Communication(CommunicationError::Timeout(_))));
        assert_eq!(err.to_string(), "Communication error: Timeout: 30s elapsed");
    }
}

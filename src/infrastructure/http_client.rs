/// HTTP transport adapter
/// Implements HttpTransport using reqwest

use crate::domain::entities::{HttpMethod, HttpRequest, HttpResponse};
use crate::domain::repositories::{CommunicationError, HttpTransport};
use async_trait::async_trait;
use std::time::Duration;

/// Implementation using a pooled reqwest client
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Result<Self, CommunicationError> {
        Self::with_timeout(Duration::from_secs(crate::config::DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, CommunicationError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CommunicationError::ConnectionFailed(e.to_string()))?;
        Ok(Self { client })
    }
}

fn method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Delete => reqwest::Method::DELETE,
        HttpMethod::Patch => reqwest::Method::PATCH,
    }
}

fn send_error(error: reqwest::Error) -> CommunicationError {
    if error.is_timeout() {
        CommunicationError::Timeout(error.to_string())
    } else if error.is_connect() {
        CommunicationError::ConnectionFailed(error.to_string())
    } else {
        CommunicationError::SendFailed(error.to_string())
    }
}

#[async_trait]
impl HttpTransport for HttpClient {
    async fn send(
        &self,
        endpoint: &str,
        request: HttpRequest,
    ) -> Result<HttpResponse, CommunicationError> {
        let url = format!("{}{}", endpoint.trim_end_matches('/'), request.path);

        tracing::debug!("Sending HTTP {} request to: {}", request.method.as_str(), url);

        let mut builder = self.client.request(method(request.method), &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }
        if request.method.has_body() {
            builder = builder.body(request.body);
        }

        let response = builder.send().await.map_err(send_error)?;

        let status_code = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();

        // Read response body
        let body = response
            .bytes()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CommunicationError::Timeout(e.to_string())
                } else {
                    CommunicationError::ReceiveFailed(e.to_string())
                }
            })?
            .to_vec();

        tracing::debug!("Received HTTP {} from: {}", status_code, url);

        Ok(HttpResponse {
            status_code,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_endpoint_is_connection_failure() {
        let client = HttpClient::with_timeout(Duration::from_secs(2)).unwrap();
        let request = HttpRequest::new(HttpMethod::Get, "/v2/apis");

        let err = client.send("http://127.0.0.1:1", request).await.unwrap_err();
        assert!(matches!(
            err,
            CommunicationError::ConnectionFailed(_) | CommunicationError::Timeout(_)
        ));
    }

    #[tokio::test]
    async fn test_non_success_status_is_returned() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v2/apis/a1")
            .with_status(404)
            .with_header("x-amzn-ErrorType", "NotFoundException")
            .with_body(r#"{"message": "missing"}"#)
            .create_async()
            .await;

        let client = HttpClient::new().unwrap();
        let response = client
            .send(&server.url(), HttpRequest::new(HttpMethod::Get, "/v2/apis/a1"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.status_code, 404);
        assert_eq!(response.header("X-Amzn-ErrorType"), Some("NotFoundException"));
        assert_eq!(response.body, br#"{"message": "missing"}"#.to_vec());
    }

    #[tokio::test]
    async fn test_query_and_body_are_sent() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/v2/apis")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("basepath".into(), "split".into()),
                mockito::Matcher::UrlEncoded("failOnWarnings".into(), "true".into()),
            ]))
            .match_header("content-type", "application/json")
            .match_body(r#"{"body":"openapi: 3.0.1"}"#)
            .with_status(201)
            .with_body(r#"{"apiId": "a1"}"#)
            .create_async()
            .await;

        let mut request = HttpRequest::new(HttpMethod::Put, "/v2/apis");
        request.query = vec![
            ("basepath".to_string(), "split".to_string()),
            ("failOnWarnings".to_string(), "true".to_string()),
        ];
        request
            .headers
            .push(("Content-Type".to_string(), "application/json".to_string()));
        request.body = br#"{"body":"openapi: 3.0.1"}"#.to_vec();

        let response = HttpClient::new()
            .unwrap()
            .send(&server.url(), request)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.status_code, 201);
    }
}

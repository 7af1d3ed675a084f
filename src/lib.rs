// Library exports following Clean Architecture principles

// Domain layer (model types, errors, ports)
pub mod domain;

// Use cases layer (application business rules)
pub mod use_cases;

// Adapters layer (REST-JSON protocol binding)
pub mod adapters;

// Infrastructure layer (frameworks & drivers)
pub mod infrastructure;

pub mod config;

use std::sync::Arc;

use config::ClientConfig;
use domain::CommunicationError;
use infrastructure::HttpClient;
use use_cases::InvokeOperationUseCase;

/// Client for the API Gateway V2 control plane over HTTPS
pub type ApiGatewayV2Client = InvokeOperationUseCase<HttpClient>;

/// Build a client from configuration
pub fn connect(config: &ClientConfig) -> Result<ApiGatewayV2Client, CommunicationError> {
    let transport = HttpClient::with_timeout(config.timeout())?;
    Ok(InvokeOperationUseCase::new(Arc::new(transport), config.resolved_endpoint())
        .with_user_agent(config.user_agent()))
}

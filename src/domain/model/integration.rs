/// Integrations: the backends routes forward requests to.

use std::collections::BTreeMap;

use crate::domain::enums::{
    ConnectionType, ContentHandlingStrategy, IntegrationType, PassthroughBehavior,
};
use crate::domain::shape::shape;

shape! {
    /// TLS settings of a private integration, as returned by the service.
    pub struct TlsConfig {
        /// Host name the backend certificate is verified against.
        server_name_to_verify / set_server_name_to_verify / with_server_name_to_verify: String,
    }
}

shape! {
    /// TLS settings of a private integration, as sent on create and update.
    pub struct TlsConfigInput {
        server_name_to_verify / set_server_name_to_verify / with_server_name_to_verify: String,
    }
}

impl From<TlsConfig> for TlsConfigInput {
    fn from(config: TlsConfig) -> Self {
        let mut input = TlsConfigInput::new();
        input.set_server_name_to_verify(config.server_name_to_verify);
        input
    }
}

shape! {
    pub struct Integration, CreateIntegrationResult, GetIntegrationResult, UpdateIntegrationResult {
        api_gateway_managed / set_api_gateway_managed / with_api_gateway_managed: bool,
        /// VPC link id when `connection_type` is `VPC_LINK`.
        connection_id / set_connection_id / with_connection_id: String,
        connection_type / set_connection_type / with_connection_type: ConnectionType,
        content_handling_strategy / set_content_handling_strategy
            / with_content_handling_strategy: ContentHandlingStrategy,
        credentials_arn / set_credentials_arn / with_credentials_arn: String,
        description / set_description / with_description: String,
        integration_id / set_integration_id / with_integration_id: String,
        integration_method / set_integration_method / with_integration_method: String,
        integration_response_selection_expression / set_integration_response_selection_expression
            / with_integration_response_selection_expression: String,
        integration_type / set_integration_type / with_integration_type: IntegrationType,
        integration_uri / set_integration_uri / with_integration_uri: String,
        passthrough_behavior / set_passthrough_behavior
            / with_passthrough_behavior: PassthroughBehavior,
        /// `1.0` or `2.0`; required for HTTP API proxy integrations.
        payload_format_version / set_payload_format_version
            / with_payload_format_version: String,
        request_parameters / set_request_parameters / with_request_parameters: BTreeMap<String, String>
            => add_request_parameters_entry / clear_request_parameters_entries,
        request_templates / set_request_templates / with_request_templates: BTreeMap<String, String>
            => add_request_templates_entry / clear_request_templates_entries,
        template_selection_expression / set_template_selection_expression
            / with_template_selection_expression: String,
        /// 50 to 29000 for WebSocket APIs, 50 to 30000 for HTTP APIs.
        timeout_in_millis / set_timeout_in_millis / with_timeout_in_millis: i32,
        tls_config / set_tls_config / with_tls_config: TlsConfig,
    }
}

shape! {
    pub struct CreateIntegrationRequest {
        api_id / set_api_id / with_api_id: String,
        connection_id / set_connection_id / with_connection_id: String,
        connection_type / set_connection_type / with_connection_type: ConnectionType,
        content_handling_strategy / set_content_handling_strategy
            / with_content_handling_strategy: ContentHandlingStrategy,
        credentials_arn / set_credentials_arn / with_credentials_arn: String,
        description / set_description / with_description: String,
        integration_method / set_integration_method / with_integration_method: String,
        integration_type / set_integration_type / with_integration_type: IntegrationType,
        integration_uri / set_integration_uri / with_integration_uri: String,
        passthrough_behavior / set_passthrough_behavior
            / with_passthrough_behavior: PassthroughBehavior,
        payload_format_version / set_payload_format_version
            / with_payload_format_version: String,
        request_parameters / set_request_parameters / with_request_parameters: BTreeMap<String, String>
            => add_request_parameters_entry / clear_request_parameters_entries,
        request_templates / set_request_templates / with_request_templates: BTreeMap<String, String>
            => add_request_templates_entry / clear_request_templates_entries,
        template_selection_expression / set_template_selection_expression
            / with_template_selection_expression: String,
        timeout_in_millis / set_timeout_in_millis / with_timeout_in_millis: i32,
        tls_config / set_tls_config / with_tls_config: TlsConfigInput,
    }
}

shape! {
    pub struct UpdateIntegrationRequest {
        api_id / set_api_id / with_api_id: String,
        connection_id / set_connection_id / with_connection_id: String,
        connection_type / set_connection_type / with_connection_type: ConnectionType,
        content_handling_strategy / set_content_handling_strategy
            / with_content_handling_strategy: ContentHandlingStrategy,
        credentials_arn / set_credentials_arn / with_credentials_arn: String,
        description / set_description / with_description: String,
        integration_id / set_integration_id / with_integration_id: String,
        integration_method / set_integration_method / with_integration_method: String,
        integration_type / set_integration_type / with_integration_type: IntegrationType,
        integration_uri / set_integration_uri / with_integration_uri: String,
        passthrough_behavior / set_passthrough_behavior
            / with_passthrough_behavior: PassthroughBehavior,
        payload_format_version / set_payload_format_version
            / with_payload_format_version: String,
        request_parameters / set_request_parameters / with_request_parameters: BTreeMap<String, String>
            => add_request_parameters_entry / clear_request_parameters_entries,
        request_templates / set_request_templates / with_request_templates: BTreeMap<String, String>
            => add_request_templates_entry / clear_request_templates_entries,
        template_selection_expression / set_template_selection_expression
            / with_template_selection_expression: String,
        timeout_in_millis / set_timeout_in_millis / with_timeout_in_millis: i32,
        tls_config / set_tls_config / with_tls_config: TlsConfigInput,
    }
}

shape! {
    pub struct GetIntegrationRequest, DeleteIntegrationRequest {
        api_id / set_api_id / with_api_id: String,
        integration_id / set_integration_id / with_integration_id: String,
    }
}

shape! {
    pub struct GetIntegrationsRequest {
        api_id / set_api_id / with_api_id: String,
        max_results / set_max_results / with_max_results: String,
        next_token / set_next_token / with_next_token: String,
    }
}

shape! {
    pub struct GetIntegrationsResult {
        items / set_items / with_items: Vec<Integration>,
        next_token / set_next_token / with_next_token: String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ModelError;

    #[test]
    fn test_update_integration_result_display() {
        let mut result = UpdateIntegrationResult::new()
            .with_integration_id("i1")
            .with_integration_type(IntegrationType::HttpProxy)
            .with_timeout_in_millis(29000);
        result
            .add_request_parameters_entry("integration.request.header.x", "route.request.header.y".to_string())
            .unwrap();

        assert_eq!(
            result.to_string(),
            "{IntegrationId: i1,IntegrationType: HTTP_PROXY,\
             RequestParameters: {integration.request.header.x=route.request.header.y},\
             TimeoutInMillis: 29000}"
        );
    }

    #[test]
    fn test_request_templates_reject_duplicate_keys() {
        let mut request = CreateIntegrationRequest::new();
        request
            .add_request_templates_entry("application/json", "{}".to_string())
            .unwrap();

        let err = request
            .add_request_templates_entry("application/json", "[]".to_string())
            .unwrap_err();
        assert_eq!(err, ModelError::DuplicateKey { key: "application/json".to_string() });
        assert_eq!(err.to_string(), "Duplicated keys (application/json) are provided.");
    }

    #[test]
    fn test_tls_config_converts_to_input() {
        let config = TlsConfig::new().with_server_name_to_verify("backend.internal");
        let input = TlsConfigInput::from(config);
        assert_eq!(input.server_name_to_verify().map(String::as_str), Some("backend.internal"));
    }
}

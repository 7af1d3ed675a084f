/// APIs: create, read, update, delete, import, reimport and export.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::domain::enums::ProtocolType;
use crate::domain::shape::{shape, Blob};

shape! {
    /// Cross-origin resource sharing configuration. Supported only for HTTP APIs.
    pub struct Cors {
        allow_credentials / set_allow_credentials / with_allow_credentials: bool,
        allow_headers / set_allow_headers / with_allow_headers: Vec<String>,
        allow_methods / set_allow_methods / with_allow_methods: Vec<String>,
        allow_origins / set_allow_origins / with_allow_origins: Vec<String>,
        expose_headers / set_expose_headers / with_expose_headers: Vec<String>,
        /// Seconds a browser may cache preflight responses.
        max_age / set_max_age / with_max_age: i32,
    }
}

shape! {
    /// An API: a collection of routes and integrations served under one endpoint.
    pub struct Api, CreateApiResult, GetApiResult, ImportApiResult, ReimportApiResult, UpdateApiResult {
        /// Default endpoint, `https://{api-id}.execute-api.{region}.amazonaws.com`.
        api_endpoint / set_api_endpoint / with_api_endpoint: String,
        /// Set when the API is managed by another service (quick create).
        api_gateway_managed / set_api_gateway_managed / with_api_gateway_managed: bool,
        api_id / set_api_id / with_api_id: String,
        api_key_selection_expression / set_api_key_selection_expression
            / with_api_key_selection_expression: String,
        cors_configuration / set_cors_configuration / with_cors_configuration: Cors,
        created_date / set_created_date / with_created_date: DateTime<Utc>,
        description / set_description / with_description: String,
        disable_schema_validation / set_disable_schema_validation
            / with_disable_schema_validation: bool,
        /// Informational messages produced while importing a definition.
        import_info / set_import_info / with_import_info: Vec<String>,
        name / set_name / with_name: String,
        protocol_type / set_protocol_type / with_protocol_type: ProtocolType,
        route_selection_expression / set_route_selection_expression
            / with_route_selection_expression: String,
        tags / set_tags / with_tags: BTreeMap<String, String>
            => add_tags_entry / clear_tags_entries,
        version / set_version / with_version: String,
        /// Warnings produced while importing a definition.
        warnings / set_warnings / with_warnings: Vec<String>,
    }
}

shape! {
    /// Creates an API. For HTTP APIs, `route_key` and `target` enable quick create.
    pub struct CreateApiRequest {
        api_key_selection_expression / set_api_key_selection_expression
            / with_api_key_selection_expression: String,
        cors_configuration / set_cors_configuration / with_cors_configuration: Cors,
        credentials_arn / set_credentials_arn / with_credentials_arn: String,
        description / set_description / with_description: String,
        disable_schema_validation / set_disable_schema_validation
            / with_disable_schema_validation: bool,
        name / set_name / with_name: String,
        protocol_type / set_protocol_type / with_protocol_type: ProtocolType,
        route_key / set_route_key / with_route_key: String,
        route_selection_expression / set_route_selection_expression
            / with_route_selection_expression: String,
        tags / set_tags / with_tags: BTreeMap<String, String>
            => add_tags_entry / clear_tags_entries,
        target / set_target / with_target: String,
        version / set_version / with_version: String,
    }
}

shape! {
    pub struct UpdateApiRequest {
        api_id / set_api_id / with_api_id: String,
        api_key_selection_expression / set_api_key_selection_expression
            / with_api_key_selection_expression: String,
        cors_configuration / set_cors_configuration / with_cors_configuration: Cors,
        credentials_arn / set_credentials_arn / with_credentials_arn: String,
        description / set_description / with_description: String,
        disable_schema_validation / set_disable_schema_validation
            / with_disable_schema_validation: bool,
        name / set_name / with_name: String,
        route_key / set_route_key / with_route_key: String,
        route_selection_expression / set_route_selection_expression
            / with_route_selection_expression: String,
        target / set_target / with_target: String,
        version / set_version / with_version: String,
    }
}

shape! {
    pub struct GetApiRequest, DeleteApiRequest, DeleteCorsConfigurationRequest {
        api_id / set_api_id / with_api_id: String,
    }
}

shape! {
    pub struct GetApisRequest {
        /// Page size. The service models this as a string.
        max_results / set_max_results / with_max_results: String,
        next_token / set_next_token / with_next_token: String,
    }
}

shape! {
    pub struct GetApisResult {
        items / set_items / with_items: Vec<Api>,
        next_token / set_next_token / with_next_token: String,
    }
}

shape! {
    /// Imports an API from an OpenAPI definition.
    pub struct ImportApiRequest {
        /// How base paths in the definition are handled: `ignore`, `prepend` or `split`.
        basepath / set_basepath / with_basepath: String,
        /// The OpenAPI definition, JSON or YAML.
        body / set_body / with_body: String,
        fail_on_warnings / set_fail_on_warnings / with_fail_on_warnings: bool,
    }
}

shape! {
    /// Replaces an existing API with an OpenAPI definition.
    pub struct ReimportApiRequest {
        api_id / set_api_id / with_api_id: String,
        basepath / set_basepath / with_basepath: String,
        body / set_body / with_body: String,
        fail_on_warnings / set_fail_on_warnings / with_fail_on_warnings: bool,
    }
}

shape! {
    pub struct ExportApiRequest {
        api_id / set_api_id / with_api_id: String,
        /// Version of the definition format; only `1.0` is supported.
        export_version / set_export_version / with_export_version: String,
        include_extensions / set_include_extensions / with_include_extensions: bool,
        /// `JSON` or `YAML`.
        output_type / set_output_type / with_output_type: String,
        /// Definition format, e.g. `OAS30`.
        specification / set_specification / with_specification: String,
        stage_name / set_stage_name / with_stage_name: String,
    }
}

shape! {
    /// The exported definition, returned verbatim as the response payload.
    pub struct ExportApiResult {
        body / set_body / with_body: Blob,
    }
}

impl From<Blob> for ExportApiResult {
    fn from(body: Blob) -> Self {
        ExportApiResult::new().with_body(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_deserializes_from_service_json() {
        let json = r#"{
            "apiEndpoint": "https://a1.execute-api.us-east-1.amazonaws.com",
            "apiId": "a1",
            "createdDate": "2020-04-01T12:00:00Z",
            "name": "pets",
            "protocolType": "HTTP",
            "routeSelectionExpression": "${request.method} ${request.path}",
            "tags": {"team": "core"},
            "corsConfiguration": {"allowOrigins": ["*"], "maxAge": 300}
        }"#;

        let api: GetApiResult = serde_json::from_str(json).unwrap();
        assert_eq!(api.api_id().map(String::as_str), Some("a1"));
        assert_eq!(api.protocol_type(), Some(&ProtocolType::Http));
        assert_eq!(api.cors_configuration().and_then(Cors::max_age), Some(&300));
        assert_eq!(api.tags().unwrap().get("team").map(String::as_str), Some("core"));
        assert!(api.warnings().is_none());
    }

    #[test]
    fn test_create_api_request_serializes_only_set_fields() {
        let request = CreateApiRequest::new()
            .with_name("pets")
            .with_protocol_type(ProtocolType::Websocket)
            .with_route_selection_expression("$request.body.action");

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "pets",
                "protocolType": "WEBSOCKET",
                "routeSelectionExpression": "$request.body.action"
            })
        );
    }

    #[test]
    fn test_export_result_display_hides_payload() {
        let result = ExportApiResult::from(Blob::new(b"openapi: 3.0.1".to_vec()));
        assert_eq!(result.to_string(), "{Body}");
        assert_eq!(result.body().unwrap().as_bytes(), b"openapi: 3.0.1");
    }

    #[test]
    fn test_api_display_nests_cors() {
        let api = Api::new()
            .with_api_id("a1")
            .with_cors_configuration(Cors::new().with_allow_methods(vec!["GET".to_string()]));
        assert_eq!(api.to_string(), "{ApiId: a1,CorsConfiguration: {AllowMethods: [GET]}}");
    }
}

/// Wire binding of every control-plane operation.
///
/// Each line of the table names the operation, its HTTP method and path
/// template, the members sent in the query string, the request and result
/// types, and the decoder for successful responses.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::domain::model::*;
use crate::domain::{HttpMethod, HttpTransport, Operation, UnmarshalError};
use crate::use_cases::{InvokeOperationUseCase, UseCaseError};

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Invalid input for {operation}: {source}")]
    InvalidInput {
        operation: String,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Invoke(#[from] UseCaseError),

    #[error("Failed to render result: {0}")]
    Output(serde_json::Error),
}

macro_rules! operations {
    (
        $(
            $op:ident: $method:ident $path:literal [$($query:literal),*]
                ($req:ident -> $out:ty) $decoder:ident;
        )+
    ) => {
        $(
            impl Operation for $req {
                type Output = $out;

                const NAME: &'static str = stringify!($op);
                const METHOD: HttpMethod = HttpMethod::$method;
                const PATH: &'static str = $path;
                const QUERY: &'static [&'static str] = &[$($query),*];

                fn parse_output(body: &[u8]) -> Result<Self::Output, UnmarshalError> {
                    super::decode::$decoder::<$out>(body)
                }
            }
        )+

        /// Names of every operation [`invoke_json`] accepts.
        pub const OPERATION_NAMES: &[&str] = &[$(stringify!($op)),+];

        /// Run an operation chosen by name, with its request given as JSON.
        ///
        /// A `null` input stands for a request with every member unset.
        pub async fn invoke_json<T: HttpTransport>(
            client: &InvokeOperationUseCase<T>,
            name: &str,
            input: Value,
        ) -> Result<Value, DispatchError> {
            match name {
                $(stringify!($op) => dispatch::<T, $req>(client, input).await,)+
                _ => Err(DispatchError::UnknownOperation(name.to_string())),
            }
        }
    };
}

async fn dispatch<T, O>(client: &InvokeOperationUseCase<T>, input: Value) -> Result<Value, DispatchError>
where
    T: HttpTransport,
    O: Operation + DeserializeOwned,
    O::Output: Serialize,
{
    let input = if input.is_null() {
        Value::Object(Default::default())
    } else {
        input
    };
    let operation: O = serde_json::from_value(input).map_err(|source| DispatchError::InvalidInput {
        operation: O::NAME.to_string(),
        source,
    })?;

    let output = client.execute(&operation).await?;
    serde_json::to_value(output).map_err(DispatchError::Output)
}

operations! {
    CreateApi: Post "/v2/apis" []
        (CreateApiRequest -> CreateApiResult) json;
    CreateApiMapping: Post "/v2/domainnames/{domainName}/apimappings" []
        (CreateApiMappingRequest -> CreateApiMappingResult) json;
    CreateAuthorizer: Post "/v2/apis/{apiId}/authorizers" []
        (CreateAuthorizerRequest -> CreateAuthorizerResult) json;
    CreateDeployment: Post "/v2/apis/{apiId}/deployments" []
        (CreateDeploymentRequest -> CreateDeploymentResult) json;
    CreateDomainName: Post "/v2/domainnames" []
        (CreateDomainNameRequest -> CreateDomainNameResult) json;
    CreateIntegration: Post "/v2/apis/{apiId}/integrations" []
        (CreateIntegrationRequest -> CreateIntegrationResult) json;
    CreateIntegrationResponse: Post
        "/v2/apis/{apiId}/integrations/{integrationId}/integrationresponses" []
        (CreateIntegrationResponseRequest -> CreateIntegrationResponseResult) json;
    CreateModel: Post "/v2/apis/{apiId}/models" []
        (CreateModelRequest -> CreateModelResult) json;
    CreateRoute: Post "/v2/apis/{apiId}/routes" []
        (CreateRouteRequest -> CreateRouteResult) json;
    CreateRouteResponse: Post "/v2/apis/{apiId}/routes/{routeId}/routeresponses" []
        (CreateRouteResponseRequest -> CreateRouteResponseResult) json;
    CreateStage: Post "/v2/apis/{apiId}/stages" []
        (CreateStageRequest -> CreateStageResult) json;
    CreateVpcLink: Post "/v2/vpclinks" []
        (CreateVpcLinkRequest -> CreateVpcLinkResult) json;

    DeleteAccessLogSettings: Delete "/v2/apis/{apiId}/stages/{stageName}/accesslogsettings" []
        (DeleteAccessLogSettingsRequest -> ()) empty;
    DeleteApi: Delete "/v2/apis/{apiId}" []
        (DeleteApiRequest -> ()) empty;
    DeleteApiMapping: Delete "/v2/domainnames/{domainName}/apimappings/{apiMappingId}" []
        (DeleteApiMappingRequest -> ()) empty;
    DeleteAuthorizer: Delete "/v2/apis/{apiId}/authorizers/{authorizerId}" []
        (DeleteAuthorizerRequest -> ()) empty;
    DeleteCorsConfiguration: Delete "/v2/apis/{apiId}/cors" []
        (DeleteCorsConfigurationRequest -> ()) empty;
    DeleteDeployment: Delete "/v2/apis/{apiId}/deployments/{deploymentId}" []
        (DeleteDeploymentRequest -> ()) empty;
    DeleteDomainName: Delete "/v2/domainnames/{domainName}" []
        (DeleteDomainNameRequest -> ()) empty;
    DeleteIntegration: Delete "/v2/apis/{apiId}/integrations/{integrationId}" []
        (DeleteIntegrationRequest -> ()) empty;
    DeleteIntegrationResponse: Delete
        "/v2/apis/{apiId}/integrations/{integrationId}/integrationresponses/{integrationResponseId}" []
        (DeleteIntegrationResponseRequest -> ()) empty;
    DeleteModel: Delete "/v2/apis/{apiId}/models/{modelId}" []
        (DeleteModelRequest -> ()) empty;
    DeleteRoute: Delete "/v2/apis/{apiId}/routes/{routeId}" []
        (DeleteRouteRequest -> ()) empty;
    DeleteRouteRequestParameter: Delete
        "/v2/apis/{apiId}/routes/{routeId}/requestparameters/{requestParameterKey}" []
        (DeleteRouteRequestParameterRequest -> ()) empty;
    DeleteRouteResponse: Delete
        "/v2/apis/{apiId}/routes/{routeId}/routeresponses/{routeResponseId}" []
        (DeleteRouteResponseRequest -> ()) empty;
    DeleteRouteSettings: Delete "/v2/apis/{apiId}/stages/{stageName}/routesettings/{routeKey}" []
        (DeleteRouteSettingsRequest -> ()) empty;
    DeleteStage: Delete "/v2/apis/{apiId}/stages/{stageName}" []
        (DeleteStageRequest -> ()) empty;
    DeleteVpcLink: Delete "/v2/vpclinks/{vpcLinkId}" []
        (DeleteVpcLinkRequest -> DeleteVpcLinkResult) json;

    ExportApi: Get "/v2/apis/{apiId}/exports/{specification}"
        ["exportVersion", "includeExtensions", "outputType", "stageName"]
        (ExportApiRequest -> ExportApiResult) payload;

    GetApi: Get "/v2/apis/{apiId}" []
        (GetApiRequest -> GetApiResult) json;
    GetApis: Get "/v2/apis" ["maxResults", "nextToken"]
        (GetApisRequest -> GetApisResult) json;
    GetApiMapping: Get "/v2/domainnames/{domainName}/apimappings/{apiMappingId}" []
        (GetApiMappingRequest -> GetApiMappingResult) json;
    GetApiMappings: Get "/v2/domainnames/{domainName}/apimappings" ["maxResults", "nextToken"]
        (GetApiMappingsRequest -> GetApiMappingsResult) json;
    GetAuthorizer: Get "/v2/apis/{apiId}/authorizers/{authorizerId}" []
        (GetAuthorizerRequest -> GetAuthorizerResult) json;
    GetAuthorizers: Get "/v2/apis/{apiId}/authorizers" ["maxResults", "nextToken"]
        (GetAuthorizersRequest -> GetAuthorizersResult) json;
    GetDeployment: Get "/v2/apis/{apiId}/deployments/{deploymentId}" []
        (GetDeploymentRequest -> GetDeploymentResult) json;
    GetDeployments: Get "/v2/apis/{apiId}/deployments" ["maxResults", "nextToken"]
        (GetDeploymentsRequest -> GetDeploymentsResult) json;
    GetDomainName: Get "/v2/domainnames/{domainName}" []
        (GetDomainNameRequest -> GetDomainNameResult) json;
    GetDomainNames: Get "/v2/domainnames" ["maxResults", "nextToken"]
        (GetDomainNamesRequest -> GetDomainNamesResult) json;
    GetIntegration: Get "/v2/apis/{apiId}/integrations/{integrationId}" []
        (GetIntegrationRequest -> GetIntegrationResult) json;
    GetIntegrations: Get "/v2/apis/{apiId}/integrations" ["maxResults", "nextToken"]
        (GetIntegrationsRequest -> GetIntegrationsResult) json;
    GetIntegrationResponse: Get
        "/v2/apis/{apiId}/integrations/{integrationId}/integrationresponses/{integrationResponseId}" []
        (GetIntegrationResponseRequest -> GetIntegrationResponseResult) json;
    GetIntegrationResponses: Get
        "/v2/apis/{apiId}/integrations/{integrationId}/integrationresponses"
        ["maxResults", "nextToken"]
        (GetIntegrationResponsesRequest -> GetIntegrationResponsesResult) json;
    GetModel: Get "/v2/apis/{apiId}/models/{modelId}" []
        (GetModelRequest -> GetModelResult) json;
    GetModelTemplate: Get "/v2/apis/{apiId}/models/{modelId}/template" []
        (GetModelTemplateRequest -> GetModelTemplateResult) json;
    GetModels: Get "/v2/apis/{apiId}/models" ["maxResults", "nextToken"]
        (GetModelsRequest -> GetModelsResult) json;
    GetRoute: Get "/v2/apis/{apiId}/routes/{routeId}" []
        (GetRouteRequest -> GetRouteResult) json;
    GetRoutes: Get "/v2/apis/{apiId}/routes" ["maxResults", "nextToken"]
        (GetRoutesRequest -> GetRoutesResult) json;
    GetRouteResponse: Get "/v2/apis/{apiId}/routes/{routeId}/routeresponses/{routeResponseId}" []
        (GetRouteResponseRequest -> GetRouteResponseResult) json;
    GetRouteResponses: Get "/v2/apis/{apiId}/routes/{routeId}/routeresponses"
        ["maxResults", "nextToken"]
        (GetRouteResponsesRequest -> GetRouteResponsesResult) json;
    GetStage: Get "/v2/apis/{apiId}/stages/{stageName}" []
        (GetStageRequest -> GetStageResult) json;
    GetStages: Get "/v2/apis/{apiId}/stages" ["maxResults", "nextToken"]
        (GetStagesRequest -> GetStagesResult) json;
    GetTags: Get "/v2/tags/{resourceArn}" []
        (GetTagsRequest -> GetTagsResult) json;
    GetVpcLink: Get "/v2/vpclinks/{vpcLinkId}" []
        (GetVpcLinkRequest -> GetVpcLinkResult) json;
    GetVpcLinks: Get "/v2/vpclinks" ["maxResults", "nextToken"]
        (GetVpcLinksRequest -> GetVpcLinksResult) json;

    ImportApi: Put "/v2/apis" ["basepath", "failOnWarnings"]
        (ImportApiRequest -> ImportApiResult) json;
    ReimportApi: Put "/v2/apis/{apiId}" ["basepath", "failOnWarnings"]
        (ReimportApiRequest -> ReimportApiResult) json;

    TagResource: Post "/v2/tags/{resourceArn}" []
        (TagResourceRequest -> TagResourceResult) json;
    UntagResource: Delete "/v2/tags/{resourceArn}" ["tagKeys"]
        (UntagResourceRequest -> ()) empty;

    UpdateApi: Patch "/v2/apis/{apiId}" []
        (UpdateApiRequest -> UpdateApiResult) json;
    UpdateApiMapping: Patch "/v2/domainnames/{domainName}/apimappings/{apiMappingId}" []
        (UpdateApiMappingRequest -> UpdateApiMappingResult) json;
    UpdateAuthorizer: Patch "/v2/apis/{apiId}/authorizers/{authorizerId}" []
        (UpdateAuthorizerRequest -> UpdateAuthorizerResult) json;
    UpdateDeployment: Patch "/v2/apis/{apiId}/deployments/{deploymentId}" []
        (UpdateDeploymentRequest -> UpdateDeploymentResult) json;
    UpdateDomainName: Patch "/v2/domainnames/{domainName}" []
        (UpdateDomainNameRequest -> UpdateDomainNameResult) json;
    UpdateIntegration: Patch "/v2/apis/{apiId}/integrations/{integrationId}" []
        (UpdateIntegrationRequest -> UpdateIntegrationResult) json;
    UpdateIntegrationResponse: Patch
        "/v2/apis/{apiId}/integrations/{integrationId}/integrationresponses/{integrationResponseId}" []
        (UpdateIntegrationResponseRequest -> UpdateIntegrationResponseResult) json;
    UpdateModel: Patch "/v2/apis/{apiId}/models/{modelId}" []
        (UpdateModelRequest -> UpdateModelResult) json;
    UpdateRoute: Patch "/v2/apis/{apiId}/routes/{routeId}" []
        (UpdateRouteRequest -> UpdateRouteResult) json;
    UpdateRouteResponse: Patch
        "/v2/apis/{apiId}/routes/{routeId}/routeresponses/{routeResponseId}" []
        (UpdateRouteResponseRequest -> UpdateRouteResponseResult) json;
    UpdateStage: Patch "/v2/apis/{apiId}/stages/{stageName}" []
        (UpdateStageRequest -> UpdateStageResult) json;
    UpdateVpcLink: Patch "/v2/vpclinks/{vpcLinkId}" []
        (UpdateVpcLinkRequest -> UpdateVpcLinkResult) json;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_operation_is_listed_once() {
        assert_eq!(OPERATION_NAMES.len(), 71);
        let unique: HashSet<_> = OPERATION_NAMES.iter().collect();
        assert_eq!(unique.len(), OPERATION_NAMES.len());
    }

    #[test]
    fn test_operation_constants() {
        assert_eq!(CreateModelRequest::NAME, "CreateModel");
        assert_eq!(CreateModelRequest::METHOD, HttpMethod::Post);
        assert_eq!(UpdateStageRequest::METHOD, HttpMethod::Patch);
        assert_eq!(ReimportApiRequest::PATH, "/v2/apis/{apiId}");
        assert_eq!(ExportApiRequest::QUERY.len(), 4);
        assert!(DeleteApiRequest::QUERY.is_empty());
    }

    #[test]
    fn test_delete_vpc_link_decodes_empty_object() {
        let result = DeleteVpcLinkRequest::parse_output(b"{}").unwrap();
        assert_eq!(result, DeleteVpcLinkResult::new());
    }

    #[test]
    fn test_delete_ignores_response_body() {
        assert!(DeleteApiRequest::parse_output(b"").is_ok());
    }
}

/// Authorizers: Lambda request authorizers and JWT authorizers.

use crate::domain::enums::AuthorizerType;
use crate::domain::shape::shape;

shape! {
    /// Issuer and audiences a JWT authorizer validates tokens against.
    /// Supported only for HTTP APIs.
    pub struct JwtConfiguration {
        audience / set_audience / with_audience: Vec<String>,
        /// Base domain of the identity provider, e.g. `https://cognito-idp.{region}.amazonaws.com/{userPoolId}`.
        issuer / set_issuer / with_issuer: String,
    }
}

shape! {
    pub struct Authorizer, CreateAuthorizerResult, GetAuthorizerResult, UpdateAuthorizerResult {
        /// Role the service assumes to invoke the authorizer.
        authorizer_credentials_arn / set_authorizer_credentials_arn
            / with_authorizer_credentials_arn: String,
        authorizer_id / set_authorizer_id / with_authorizer_id: String,
        /// Cache lifetime of authorizer results; 0 disables caching.
        authorizer_result_ttl_in_seconds / set_authorizer_result_ttl_in_seconds
            / with_authorizer_result_ttl_in_seconds: i32,
        authorizer_type / set_authorizer_type / with_authorizer_type: AuthorizerType,
        authorizer_uri / set_authorizer_uri / with_authorizer_uri: String,
        /// Where the service finds the caller identity, e.g. `$request.header.Authorization`.
        identity_source / set_identity_source / with_identity_source: Vec<String>,
        identity_validation_expression / set_identity_validation_expression
            / with_identity_validation_expression: String,
        jwt_configuration / set_jwt_configuration / with_jwt_configuration: JwtConfiguration,
        name / set_name / with_name: String,
    }
}

shape! {
    pub struct CreateAuthorizerRequest {
        api_id / set_api_id / with_api_id: String,
        authorizer_credentials_arn / set_authorizer_credentials_arn
            / with_authorizer_credentials_arn: String,
        authorizer_result_ttl_in_seconds / set_authorizer_result_ttl_in_seconds
            / with_authorizer_result_ttl_in_seconds: i32,
        authorizer_type / set_authorizer_type / with_authorizer_type: AuthorizerType,
        authorizer_uri / set_authorizer_uri / with_authorizer_uri: String,
        identity_source / set_identity_source / with_identity_source: Vec<String>,
        identity_validation_expression / set_identity_validation_expression
            / with_identity_validation_expression: String,
        jwt_configuration / set_jwt_configuration / with_jwt_configuration: JwtConfiguration,
        name / set_name / with_name: String,
    }
}

shape! {
    pub struct UpdateAuthorizerRequest {
        api_id / set_api_id / with_api_id: String,
        authorizer_credentials_arn / set_authorizer_credentials_arn
            / with_authorizer_credentials_arn: String,
        authorizer_id / set_authorizer_id / with_authorizer_id: String,
        authorizer_result_ttl_in_seconds / set_authorizer_result_ttl_in_seconds
            / with_authorizer_result_ttl_in_seconds: i32,
        authorizer_type / set_authorizer_type / with_authorizer_type: AuthorizerType,
        authorizer_uri / set_authorizer_uri / with_authorizer_uri: String,
        identity_source / set_identity_source / with_identity_source: Vec<String>,
        identity_validation_expression / set_identity_validation_expression
            / with_identity_validation_expression: String,
        jwt_configuration / set_jwt_configuration / with_jwt_configuration: JwtConfiguration,
        name / set_name / with_name: String,
    }
}

shape! {
    pub struct GetAuthorizerRequest, DeleteAuthorizerRequest {
        api_id / set_api_id / with_api_id: String,
        authorizer_id / set_authorizer_id / with_authorizer_id: String,
    }
}

shape! {
    pub struct GetAuthorizersRequest {
        api_id / set_api_id / with_api_id: String,
        max_results / set_max_results / with_max_results: String,
        next_token / set_next_token / with_next_token: String,
    }
}

shape! {
    pub struct GetAuthorizersResult {
        items / set_items / with_items: Vec<Authorizer>,
        next_token / set_next_token / with_next_token: String,
    }
}

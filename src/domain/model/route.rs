/// Routes: route keys matched against incoming requests.

use std::collections::BTreeMap;

use crate::domain::enums::AuthorizationType;
use crate::domain::shape::shape;

shape! {
    /// Validation constraints on a route request parameter.
    pub struct ParameterConstraints {
        required / set_required / with_required: bool,
    }
}

shape! {
    pub struct Route, CreateRouteResult, GetRouteResult, UpdateRouteResult {
        api_gateway_managed / set_api_gateway_managed / with_api_gateway_managed: bool,
        /// Only for WebSocket APIs.
        api_key_required / set_api_key_required / with_api_key_required: bool,
        /// OAuth scopes checked by a JWT authorizer.
        authorization_scopes / set_authorization_scopes / with_authorization_scopes: Vec<String>,
        authorization_type / set_authorization_type / with_authorization_type: AuthorizationType,
        authorizer_id / set_authorizer_id / with_authorizer_id: String,
        model_selection_expression / set_model_selection_expression
            / with_model_selection_expression: String,
        operation_name / set_operation_name / with_operation_name: String,
        request_models / set_request_models / with_request_models: BTreeMap<String, String>
            => add_request_models_entry / clear_request_models_entries,
        request_parameters / set_request_parameters
            / with_request_parameters: BTreeMap<String, ParameterConstraints>
            => add_request_parameters_entry / clear_request_parameters_entries,
        route_id / set_route_id / with_route_id: String,
        /// e.g. `GET /pets` for HTTP APIs, `$default` or `$connect` for WebSocket APIs.
        route_key / set_route_key / with_route_key: String,
        route_response_selection_expression / set_route_response_selection_expression
            / with_route_response_selection_expression: String,
        /// Usually `integrations/{integration-id}`.
        target / set_target / with_target: String,
    }
}

shape! {
    pub struct CreateRouteRequest {
        api_id / set_api_id / with_api_id: String,
        api_key_required / set_api_key_required / with_api_key_required: bool,
        authorization_scopes / set_authorization_scopes / with_authorization_scopes: Vec<String>,
        authorization_type / set_authorization_type / with_authorization_type: AuthorizationType,
        authorizer_id / set_authorizer_id / with_authorizer_id: String,
        model_selection_expression / set_model_selection_expression
            / with_model_selection_expression: String,
        operation_name / set_operation_name / with_operation_name: String,
        request_models / set_request_models / with_request_models: BTreeMap<String, String>
            => add_request_models_entry / clear_request_models_entries,
        request_parameters / set_request_parameters
            / with_request_parameters: BTreeMap<String, ParameterConstraints>
            => add_request_parameters_entry / clear_request_parameters_entries,
        route_key / set_route_key / with_route_key: String,
        route_response_selection_expression / set_route_response_selection_expression
            / with_route_response_selection_expression: String,
        target / set_target / with_target: String,
    }
}

shape! {
    pub struct UpdateRouteRequest {
        api_id / set_api_id / with_api_id: String,
        api_key_required / set_api_key_required / with_api_key_required: bool,
        authorization_scopes / set_authorization_scopes / with_authorization_scopes: Vec<String>,
        authorization_type / set_authorization_type / with_authorization_type: AuthorizationType,
        authorizer_id / set_authorizer_id / with_authorizer_id: String,
        model_selection_expression / set_model_selection_expression
            / with_model_selection_expression: String,
        operation_name / set_operation_name / with_operation_name: String,
        request_models / set_request_models / with_request_models: BTreeMap<String, String>
            => add_request_models_entry / clear_request_models_entries,
        request_parameters / set_request_parameters
            / with_request_parameters: BTreeMap<String, ParameterConstraints>
            => add_request_parameters_entry / clear_request_parameters_entries,
        route_id / set_route_id / with_route_id: String,
        route_key / set_route_key / with_route_key: String,
        route_response_selection_expression / set_route_response_selection_expression
            / with_route_response_selection_expression: String,
        target / set_target / with_target: String,
    }
}

shape! {
    pub struct GetRouteRequest, DeleteRouteRequest {
        api_id / set_api_id / with_api_id: String,
        route_id / set_route_id / with_route_id: String,
    }
}

shape! {
    pub struct DeleteRouteRequestParameterRequest {
        api_id / set_api_id / with_api_id: String,
        /// e.g. `route.request.querystring.page`.
        request_parameter_key / set_request_parameter_key / with_request_parameter_key: String,
        route_id / set_route_id / with_route_id: String,
    }
}

shape! {
    pub struct GetRoutesRequest {
        api_id / set_api_id / with_api_id: String,
        max_results / set_max_results / with_max_results: String,
        next_token / set_next_token / with_next_token: String,
    }
}

shape! {
    pub struct GetRoutesResult {
        items / set_items / with_items: Vec<Route>,
        next_token / set_next_token / with_next_token: String,
    }
}

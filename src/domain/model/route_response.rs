/// Route responses of WebSocket APIs.

use std::collections::BTreeMap;

use crate::domain::model::route::ParameterConstraints;
use crate::domain::shape::shape;

shape! {
    pub struct RouteResponse, CreateRouteResponseResult, GetRouteResponseResult,
        UpdateRouteResponseResult
    {
        model_selection_expression / set_model_selection_expression
            / with_model_selection_expression: String,
        response_models / set_response_models / with_response_models: BTreeMap<String, String>
            => add_response_models_entry / clear_response_models_entries,
        response_parameters / set_response_parameters
            / with_response_parameters: BTreeMap<String, ParameterConstraints>
            => add_response_parameters_entry / clear_response_parameters_entries,
        route_response_id / set_route_response_id / with_route_response_id: String,
        route_response_key / set_route_response_key / with_route_response_key: String,
    }
}

shape! {
    pub struct CreateRouteResponseRequest {
        api_id / set_api_id / with_api_id: String,
        model_selection_expression / set_model_selection_expression
            / with_model_selection_expression: String,
        response_models / set_response_models / with_response_models: BTreeMap<String, String>
            => add_response_models_entry / clear_response_models_entries,
        response_parameters / set_response_parameters
            / with_response_parameters: BTreeMap<String, ParameterConstraints>
            => add_response_parameters_entry / clear_response_parameters_entries,
        route_id / set_route_id / with_route_id: String,
        route_response_key / set_route_response_key / with_route_response_key: String,
    }
}

shape! {
    pub struct UpdateRouteResponseRequest {
        api_id / set_api_id / with_api_id: String,
        model_selection_expression / set_model_selection_expression
            / with_model_selection_expression: String,
        response_models / set_response_models / with_response_models: BTreeMap<String, String>
            => add_response_models_entry / clear_response_models_entries,
        response_parameters / set_response_parameters
            / with_response_parameters: BTreeMap<String, ParameterConstraints>
            => add_response_parameters_entry / clear_response_parameters_entries,
        route_id / set_route_id / with_route_id: String,
        route_response_id / set_route_response_id / with_route_response_id: String,
        route_response_key / set_route_response_key / with_route_response_key: String,
    }
}

shape! {
    pub struct GetRouteResponseRequest, DeleteRouteResponseRequest {
        api_id / set_api_id / with_api_id: String,
        route_id / set_route_id / with_route_id: String,
        route_response_id / set_route_response_id / with_route_response_id: String,
    }
}

shape! {
    pub struct GetRouteResponsesRequest {
        api_id / set_api_id / with_api_id: String,
        max_results / set_max_results / with_max_results: String,
        next_token / set_next_token / with_next_token: String,
        route_id / set_route_id / with_route_id: String,
    }
}

shape! {
    pub struct GetRouteResponsesResult {
        items / set_items / with_items: Vec<RouteResponse>,
        next_token / set_next_token / with_next_token: String,
    }
}

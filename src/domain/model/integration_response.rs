/// Integration responses of WebSocket APIs.

use std::collections::BTreeMap;

use crate::domain::enums::ContentHandlingStrategy;
use crate::domain::shape::shape;

shape! {
    pub struct IntegrationResponse, CreateIntegrationResponseResult, GetIntegrationResponseResult,
        UpdateIntegrationResponseResult
    {
        content_handling_strategy / set_content_handling_strategy
            / with_content_handling_strategy: ContentHandlingStrategy,
        integration_response_id / set_integration_response_id / with_integration_response_id: String,
        integration_response_key / set_integration_response_key
            / with_integration_response_key: String,
        response_parameters / set_response_parameters / with_response_parameters: BTreeMap<String, String>
            => add_response_parameters_entry / clear_response_parameters_entries,
        response_templates / set_response_templates / with_response_templates: BTreeMap<String, String>
            => add_response_templates_entry / clear_response_templates_entries,
        template_selection_expression / set_template_selection_expression
            / with_template_selection_expression: String,
    }
}

shape! {
    pub struct CreateIntegrationResponseRequest {
        api_id / set_api_id / with_api_id: String,
        content_handling_strategy / set_content_handling_strategy
            / with_content_handling_strategy: ContentHandlingStrategy,
        integration_id / set_integration_id / with_integration_id: String,
        integration_response_key / set_integration_response_key
            / with_integration_response_key: String,
        response_parameters / set_response_parameters / with_response_parameters: BTreeMap<String, String>
            => add_response_parameters_entry / clear_response_parameters_entries,
        response_templates / set_response_templates / with_response_templates: BTreeMap<String, String>
            => add_response_templates_entry / clear_response_templates_entries,
        template_selection_expression / set_template_selection_expression
            / with_template_selection_expression: String,
    }
}

shape! {
    pub struct UpdateIntegrationResponseRequest {
        api_id / set_api_id / with_api_id: String,
        content_handling_strategy / set_content_handling_strategy
            / with_content_handling_strategy: ContentHandlingStrategy,
        integration_id / set_integration_id / with_integration_id: String,
        integration_response_id / set_integration_response_id / with_integration_response_id: String,
        integration_response_key / set_integration_response_key
            / with_integration_response_key: String,
        response_parameters / set_response_parameters / with_response_parameters: BTreeMap<String, String>
            => add_response_parameters_entry / clear_response_parameters_entries,
        response_templates / set_response_templates / with_response_templates: BTreeMap<String, String>
            => add_response_templates_entry / clear_response_templates_entries,
        template_selection_expression / set_template_selection_expression
            / with_template_selection_expression: String,
    }
}

shape! {
    pub struct GetIntegrationResponseRequest, DeleteIntegrationResponseRequest {
        api_id / set_api_id / with_api_id: String,
        integration_id / set_integration_id / with_integration_id: String,
        integration_response_id / set_integration_response_id / with_integration_response_id: String,
    }
}

shape! {
    pub struct GetIntegrationResponsesRequest {
        api_id / set_api_id / with_api_id: String,
        integration_id / set_integration_id / with_integration_id: String,
        max_results / set_max_results / with_max_results: String,
        next_token / set_next_token / with_next_token: String,
    }
}

shape! {
    pub struct GetIntegrationResponsesResult {
        items / set_items / with_items: Vec<IntegrationResponse>,
        next_token / set_next_token / with_next_token: String,
    }
}

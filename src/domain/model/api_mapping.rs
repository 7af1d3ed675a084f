/// API mappings: bind an API stage to a path under a custom domain name.

use crate::domain::shape::shape;

shape! {
    pub struct ApiMapping, CreateApiMappingResult, GetApiMappingResult, UpdateApiMappingResult {
        api_id / set_api_id / with_api_id: String,
        api_mapping_id / set_api_mapping_id / with_api_mapping_id: String,
        /// Path under the domain name; empty maps the root.
        api_mapping_key / set_api_mapping_key / with_api_mapping_key: String,
        stage / set_stage / with_stage: String,
    }
}

shape! {
    pub struct CreateApiMappingRequest {
        api_id / set_api_id / with_api_id: String,
        api_mapping_key / set_api_mapping_key / with_api_mapping_key: String,
        domain_name / set_domain_name / with_domain_name: String,
        stage / set_stage / with_stage: String,
    }
}

shape! {
    pub struct UpdateApiMappingRequest {
        api_id / set_api_id / with_api_id: String,
        api_mapping_id / set_api_mapping_id / with_api_mapping_id: String,
        api_mapping_key / set_api_mapping_key / with_api_mapping_key: String,
        domain_name / set_domain_name / with_domain_name: String,
        stage / set_stage / with_stage: String,
    }
}

shape! {
    pub struct GetApiMappingRequest, DeleteApiMappingRequest {
        api_mapping_id / set_api_mapping_id / with_api_mapping_id: String,
        domain_name / set_domain_name / with_domain_name: String,
    }
}

shape! {
    pub struct GetApiMappingsRequest {
        domain_name / set_domain_name / with_domain_name: String,
        max_results / set_max_results / with_max_results: String,
        next_token / set_next_token / with_next_token: String,
    }
}

shape! {
    pub struct GetApiMappingsResult {
        items / set_items / with_items: Vec<ApiMapping>,
        next_token / set_next_token / with_next_token: String,
    }
}

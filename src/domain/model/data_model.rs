/// Data models: JSON schemas describing request and response payloads.

use crate::domain::shape::shape;

shape! {
    /// Represents a data model for an API.
    pub struct Model, CreateModelResult, GetModelResult, UpdateModelResult {
        /// Media type of the model, e.g. `application/json`.
        content_type / set_content_type / with_content_type: String,
        description / set_description / with_description: String,
        model_id / set_model_id / with_model_id: String,
        name / set_name / with_name: String,
        /// JSON schema of the model, at most 32 KB.
        schema / set_schema / with_schema: String,
    }
}

shape! {
    pub struct CreateModelRequest {
        api_id / set_api_id / with_api_id: String,
        content_type / set_content_type / with_content_type: String,
        description / set_description / with_description: String,
        name / set_name / with_name: String,
        schema / set_schema / with_schema: String,
    }
}

shape! {
    pub struct UpdateModelRequest {
        api_id / set_api_id / with_api_id: String,
        content_type / set_content_type / with_content_type: String,
        description / set_description / with_description: String,
        model_id / set_model_id / with_model_id: String,
        name / set_name / with_name: String,
        schema / set_schema / with_schema: String,
    }
}

shape! {
    pub struct GetModelRequest, DeleteModelRequest, GetModelTemplateRequest {
        api_id / set_api_id / with_api_id: String,
        model_id / set_model_id / with_model_id: String,
    }
}

shape! {
    pub struct GetModelTemplateResult {
        /// The mapping template generated from the model schema.
        value / set_value / with_value: String,
    }
}

shape! {
    pub struct GetModelsRequest {
        api_id / set_api_id / with_api_id: String,
        max_results / set_max_results / with_max_results: String,
        next_token / set_next_token / with_next_token: String,
    }
}

shape! {
    pub struct GetModelsResult {
        items / set_items / with_items: Vec<Model>,
        next_token / set_next_token / with_next_token: String,
    }
}

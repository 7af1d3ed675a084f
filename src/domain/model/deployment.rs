/// Deployments: immutable snapshots of an API, activated onto stages.

use chrono::{DateTime, Utc};

use crate::domain::enums::DeploymentStatus;
use crate::domain::shape::shape;

shape! {
    pub struct Deployment, CreateDeploymentResult, GetDeploymentResult, UpdateDeploymentResult {
        /// Set when the deployment was created by a stage with auto-deploy enabled.
        auto_deployed / set_auto_deployed / with_auto_deployed: bool,
        created_date / set_created_date / with_created_date: DateTime<Utc>,
        deployment_id / set_deployment_id / with_deployment_id: String,
        deployment_status / set_deployment_status / with_deployment_status: DeploymentStatus,
        deployment_status_message / set_deployment_status_message
            / with_deployment_status_message: String,
        description / set_description / with_description: String,
    }
}

shape! {
    pub struct CreateDeploymentRequest {
        api_id / set_api_id / with_api_id: String,
        description / set_description / with_description: String,
        /// Stage the new deployment is activated onto.
        stage_name / set_stage_name / with_stage_name: String,
    }
}

shape! {
    pub struct UpdateDeploymentRequest {
        api_id / set_api_id / with_api_id: String,
        deployment_id / set_deployment_id / with_deployment_id: String,
        description / set_description / with_description: String,
    }
}

shape! {
    pub struct GetDeploymentRequest, DeleteDeploymentRequest {
        api_id / set_api_id / with_api_id: String,
        deployment_id / set_deployment_id / with_deployment_id: String,
    }
}

shape! {
    pub struct GetDeploymentsRequest {
        api_id / set_api_id / with_api_id: String,
        max_results / set_max_results / with_max_results: String,
        next_token / set_next_token / with_next_token: String,
    }
}

shape! {
    pub struct GetDeploymentsResult {
        items / set_items / with_items: Vec<Deployment>,
        next_token / set_next_token / with_next_token: String,
    }
}

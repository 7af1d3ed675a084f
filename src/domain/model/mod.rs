/// Request, result and value types of the API Gateway V2 control plane,
/// grouped by the resource they act on.

pub mod api;
pub mod api_mapping;
pub mod authorizer;
pub mod data_model;
pub mod deployment;
pub mod domain_name;
pub mod integration;
pub mod integration_response;
pub mod route;
pub mod route_response;
pub mod stage;
pub mod tagging;
pub mod vpc_link;

pub use api::*;
pub use api_mapping::*;
pub use authorizer::*;
pub use data_model::*;
pub use deployment::*;
pub use domain_name::*;
pub use integration::*;
pub use integration_response::*;
pub use route::*;
pub use route_response::*;
pub use stage::*;
pub use tagging::*;
pub use vpc_link::*;

/// REST-JSON protocol binding of the API Gateway V2 control plane
pub mod decode;
pub mod errors;
pub mod marshal;
pub mod operations;

pub use errors::unmarshal_error;
pub use marshal::{marshal, MarshalError};
pub use operations::{invoke_json, DispatchError, OPERATION_NAMES};

/// Adapters layer - interface adapters that convert between the wire format and domain
pub mod rest_json;

pub use rest_json::{invoke_json, marshal, unmarshal_error, DispatchError, MarshalError};

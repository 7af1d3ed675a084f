/// Decoders for successful responses, picked per operation.

use serde::de::DeserializeOwned;

use crate::domain::{Blob, UnmarshalError};

/// JSON document body. An empty body yields the default (all unset) result.
pub fn json<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T, UnmarshalError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    Ok(serde_json::from_slice(body)?)
}

/// Operations without output; whatever the service sent is ignored.
pub fn empty<T: Default>(_body: &[u8]) -> Result<T, UnmarshalError> {
    Ok(T::default())
}

/// The whole body is the result payload.
pub fn payload<T: From<Blob>>(body: &[u8]) -> Result<T, UnmarshalError> {
    Ok(T::from(Blob::from(body)))
}

/// Maps non-2xx responses onto [`ServiceError`].

use serde::Deserialize;

use crate::domain::{
    AccessDeniedException, BadRequestException, ConflictException, HttpResponse,
    NotFoundException, ServiceError, TooManyRequestsException,
};

const ERROR_TYPE_HEADER: &str = "x-amzn-ErrorType";
const REQUEST_ID_HEADER: &str = "x-amzn-RequestId";

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(rename = "__type")]
    type_name: Option<String>,
    code: Option<String>,
    message: Option<String>,
    #[serde(rename = "Message")]
    capitalised_message: Option<String>,
    #[serde(rename = "resourceType")]
    resource_type: Option<String>,
    #[serde(rename = "limitType")]
    limit_type: Option<String>,
}

/// Build the service error for a failed response.
///
/// The code comes from the `x-amzn-ErrorType` header when present, then the
/// body's `__type`, then its `code`. Codes outside the known set are kept
/// verbatim in [`ServiceError::Unhandled`].
pub fn unmarshal_error(response: &HttpResponse) -> ServiceError {
    let body: ErrorBody = serde_json::from_slice(&response.body).unwrap_or_default();
    let request_id = response.header(REQUEST_ID_HEADER).map(str::to_string);
    let message = body
        .message
        .clone()
        .or_else(|| body.capitalised_message.clone())
        .unwrap_or_default();

    match error_code(response, &body).as_deref() {
        Some("AccessDeniedException") => {
            let mut error = AccessDeniedException::new(message);
            error.set_request_id(request_id);
            ServiceError::AccessDenied(error)
        }
        Some("BadRequestException") => {
            let mut error = BadRequestException::new(message);
            error.set_request_id(request_id);
            ServiceError::BadRequest(error)
        }
        Some("ConflictException") => {
            let mut error = ConflictException::new(message);
            error.set_request_id(request_id);
            ServiceError::Conflict(error)
        }
        Some("NotFoundException") => {
            let mut error = NotFoundException::new(message);
            error.set_resource_type(body.resource_type);
            error.set_request_id(request_id);
            ServiceError::NotFound(error)
        }
        Some("TooManyRequestsException") => {
            let mut error = TooManyRequestsException::new(message);
            error.set_limit_type(body.limit_type);
            error.set_request_id(request_id);
            ServiceError::TooManyRequests(error)
        }
        code => ServiceError::Unhandled {
            error_code: code.unwrap_or("UnknownError").to_string(),
            status_code: response.status_code,
            message,
            request_id,
        },
    }
}

fn error_code(response: &HttpResponse, body: &ErrorBody) -> Option<String> {
    let from_header = response
        .header(ERROR_TYPE_HEADER)
        .and_then(|value| value.split(':').next())
        .map(str::trim)
        .filter(|code| !code.is_empty());
    let from_type = body
        .type_name
        .as_deref()
        .and_then(|value| value.rsplit('#').next())
        .filter(|code| !code.is_empty());
    let from_code = body.code.as_deref().filter(|code| !code.is_empty());

    from_header.or(from_type).or(from_code).map(str::to_string)
}

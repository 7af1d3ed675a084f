/// Request side of the REST-JSON protocol: turns a request shape into an
/// [`HttpRequest`] by splitting its members into path, query and body.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::{HttpRequest, Operation};

#[derive(Debug, Error)]
pub enum MarshalError {
    #[error("{operation}: path parameter `{member}` is required and must not be empty")]
    MissingPathParameter {
        operation: &'static str,
        member: String,
    },

    #[error("{operation}: request did not serialize to a JSON object")]
    NotAnObject { operation: &'static str },

    #[error("Failed to serialize request: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Marshal a request into method, path, query and JSON body.
pub fn marshal<O: Operation>(operation: &O) -> Result<HttpRequest, MarshalError> {
    let mut members = match serde_json::to_value(operation)? {
        Value::Object(members) => members,
        _ => return Err(MarshalError::NotAnObject { operation: O::NAME }),
    };

    let path = expand_path(O::NAME, O::PATH, &mut members)?;
    let mut request = HttpRequest::new(O::METHOD, path);

    for key in O::QUERY {
        if let Some(value) = members.remove(*key) {
            push_query(&mut request.query, key, value);
        }
    }

    if O::METHOD.has_body() {
        request.body = serde_json::to_vec(&Value::Object(members))?;
        request
            .headers
            .push(("Content-Type".to_string(), "application/json".to_string()));
    }

    Ok(request)
}

/// Replace every `{key}` in the template with the percent-encoded member,
/// removing it from `members` so it is not sent twice.
fn expand_path(
    operation: &'static str,
    template: &str,
    members: &mut Map<String, Value>,
) -> Result<String, MarshalError> {
    let mut path = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        path.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let end = after.find('}').unwrap_or(after.len());
        let member = &after[..end];

        let value = match members.remove(member) {
            Some(Value::String(value)) if !value.is_empty() => value,
            _ => {
                return Err(MarshalError::MissingPathParameter {
                    operation,
                    member: member.to_string(),
                })
            }
        };
        path.push_str(&urlencoding::encode(&value));

        rest = after.get(end + 1..).unwrap_or("");
    }
    path.push_str(rest);

    Ok(path)
}

fn push_query(query: &mut Vec<(String, String)>, key: &str, value: Value) {
    match value {
        Value::Null => {}
        Value::String(value) => query.push((key.to_string(), value)),
        Value::Bool(value) => query.push((key.to_string(), value.to_string())),
        Value::Number(value) => query.push((key.to_string(), value.to_string())),
        Value::Array(items) => {
            for item in items {
                push_query(query, key, item);
            }
        }
        Value::Object(_) => query.push((key.to_string(), value.to_string())),
    }
}

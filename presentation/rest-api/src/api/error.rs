use std::collections::HashMap;

use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};
use serde::{Deserialize, Serialize};

use business::domain::item::input::FieldViolation;

/// Error body returned by every failing endpoint.
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// HTTP status code, mirrored in the body
    pub status: u16,
    /// Error kind
    pub name: String,
    /// Code-style error identifier
    pub message: String,
    /// Field name -> violation code, present on validation failures only
    #[oai(skip_serializing_if_is_none)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, String>>,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, name: &str, message: &str) -> Self {
        Self {
            status: status.as_u16(),
            name: name.to_string(),
            message: message.to_string(),
            details: None,
        }
    }

    /// Builds the 400 body for rejected input, one entry per bad field.
    pub fn validation(violations: Vec<FieldViolation>) -> Self {
        let details = violations
            .into_iter()
            .map(|v| (v.field.to_string(), v.code.to_string()))
            .collect();

        Self {
            status: StatusCode::BAD_REQUEST.as_u16(),
            name: "ValidationError".to_string(),
            message: "item.invalid_input".to_string(),
            details: Some(details),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

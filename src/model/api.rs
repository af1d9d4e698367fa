use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Envelope returned by the create endpoints.
///
/// `data` carries the created record and `errors` is empty on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ResponseDto<T> {
    pub data: Option<T>,
    pub errors: Vec<String>,
}

impl<T> ResponseDto<T> {
    pub fn with_data(data: T) -> Self {
        Self {
            data: Some(data),
            errors: Vec::new(),
        }
    }
}

/// Body of every error response: `data` is always null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    #[schema(value_type = Option<Object>)]
    pub data: Option<serde_json::Value>,
    pub errors: Vec<String>,
}

impl ErrorDto {
    pub fn new(errors: Vec<String>) -> Self {
        Self { data: None, errors }
    }
}

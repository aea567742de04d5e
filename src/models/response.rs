use serde::Serialize;

/// Envelope the service layer wraps results in.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        ApiResponse {
            status_code: 200,
            message: message.into(),
            errors: None,
            data: Some(data),
        }
    }

    pub fn error(status_code: u16, message: impl Into<String>, errors: Vec<String>) -> Self {
        ApiResponse {
            status_code,
            message: message.into(),
            errors: Some(errors),
            data: None,
        }
    }

    pub fn bad_request(errors: Vec<String>) -> Self {
        Self::error(400, "Bad Request", errors)
    }
}

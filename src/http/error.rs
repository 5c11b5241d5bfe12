//! Translation of store failures into HTTP responses.

use std::fmt;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use tracing::{debug, error};

use super::response::ApiResponse;
use crate::user_actor::UserError;

pub const INVALID_QUERY: &str = "Invalid query params";
pub const INVALID_ID: &str = "Invalid id params";
pub const INVALID_PAYLOAD: &str = "Invalid payload";
pub const EMAIL_TAKEN: &str = "Email already registered";
pub const NOT_FOUND: &str = "User not found";
pub const INTERNAL: &str = "Internal server error";

/// Error returned by handlers; rendered as the standard envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    status: StatusCode,
    message: &'static str,
}

impl ApiError {
    const fn new(status: StatusCode, message: &'static str) -> Self {
        Self { status, message }
    }

    /// Required id parameter missing or empty.
    pub const fn invalid_query() -> Self {
        Self::new(StatusCode::BAD_REQUEST, INVALID_QUERY)
    }

    /// Id parameter present but not an unsigned integer.
    pub const fn invalid_id() -> Self {
        Self::new(StatusCode::BAD_REQUEST, INVALID_ID)
    }

    /// Body could not be decoded or failed validation.
    pub const fn invalid_payload() -> Self {
        Self::new(StatusCode::BAD_REQUEST, INVALID_PAYLOAD)
    }

    pub fn message(&self) -> &str {
        self.message
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidInput(reason) => {
                debug!(%reason, "Rejected user input");
                Self::invalid_payload()
            }
            UserError::DuplicateEmail(email) => {
                debug!(%email, "Rejected duplicate email");
                Self::new(StatusCode::BAD_REQUEST, EMAIL_TAKEN)
            }
            UserError::NotFound(id) => {
                debug!(%id, "User not found");
                Self::new(StatusCode::NOT_FOUND, NOT_FOUND)
            }
            UserError::ActorCommunicationError(reason) => {
                error!(%reason, "User store unavailable");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL)
            }
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status).json(ApiResponse::message(self.message))
    }
}

/// Convenience alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(UserError::InvalidInput("name is required".into()), StatusCode::BAD_REQUEST, INVALID_PAYLOAD)]
    #[case(UserError::DuplicateEmail("a@x.com".into()), StatusCode::BAD_REQUEST, EMAIL_TAKEN)]
    #[case(UserError::NotFound("3".into()), StatusCode::NOT_FOUND, NOT_FOUND)]
    #[case(UserError::ActorCommunicationError("Actor closed".into()), StatusCode::INTERNAL_SERVER_ERROR, INTERNAL)]
    fn maps_user_errors(#[case] err: UserError, #[case] status: StatusCode, #[case] message: &str) {
        let api = ApiError::from(err);
        assert_eq!(api.status_code(), status);
        assert_eq!(api.message(), message);
    }
}

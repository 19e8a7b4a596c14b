//! Mapping of domain failures to HTTP responses

use actix_web::{
    http::{header, StatusCode},
    HttpResponse, ResponseError,
};
use rh_core::{AuthError, DomainError};
use rh_shared::{error_codes, ErrorResponse, IntoErrorResponse};
use thiserror::Error;

/// Error type returned by handlers, extractors and middleware
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::Auth(auth) => ApiError::Auth(auth),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoErrorResponse for ApiError {
    fn to_error_response(&self) -> ErrorResponse {
        let code = match self {
            ApiError::Auth(auth) => match auth {
                AuthError::MissingOrMalformedHeader => error_codes::MISSING_AUTHORIZATION,
                AuthError::Malformed => error_codes::TOKEN_MALFORMED,
                AuthError::InvalidSignature => error_codes::TOKEN_INVALID_SIGNATURE,
                AuthError::Expired => error_codes::TOKEN_EXPIRED,
                AuthError::RoleMismatch { .. } => error_codes::ROLE_MISMATCH,
                AuthError::UnknownRole { .. } => error_codes::UNKNOWN_ROLE,
                AuthError::NotOwner => error_codes::NOT_OWNER,
                AuthError::TokenGenerationFailed => error_codes::INTERNAL_ERROR,
            },
            ApiError::Internal(_) => error_codes::INTERNAL_ERROR,
        };

        // Internal details stay in the logs
        let message = match self {
            ApiError::Internal(_) | ApiError::Auth(AuthError::TokenGenerationFailed) => {
                String::from("An internal error occurred")
            }
            other => other.to_string(),
        };

        ErrorResponse::new(code, message)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Auth(auth) => match auth {
                AuthError::MissingOrMalformedHeader
                | AuthError::Malformed
                | AuthError::InvalidSignature
                | AuthError::Expired => StatusCode::UNAUTHORIZED,
                AuthError::RoleMismatch { .. } | AuthError::UnknownRole { .. } | AuthError::NotOwner => {
                    StatusCode::FORBIDDEN
                }
                AuthError::TokenGenerationFailed => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else if let ApiError::Auth(auth) = self {
            tracing::debug!(kind = auth.kind(), status = status.as_u16(), "request rejected");
        }

        let mut response = HttpResponse::build(status);
        if status == StatusCode::UNAUTHORIZED {
            response.insert_header((header::WWW_AUTHENTICATE, "Bearer"));
        }
        response.json(self.to_error_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rh_core::Role;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AuthError::MissingOrMalformedHeader, StatusCode::UNAUTHORIZED),
            (AuthError::Malformed, StatusCode::UNAUTHORIZED),
            (AuthError::InvalidSignature, StatusCode::UNAUTHORIZED),
            (AuthError::Expired, StatusCode::UNAUTHORIZED),
            (
                AuthError::RoleMismatch {
                    required: Role::Admin,
                    actual: Role::Customer,
                },
                StatusCode::FORBIDDEN,
            ),
            (AuthError::UnknownRole { role: "X".into() }, StatusCode::FORBIDDEN),
            (AuthError::NotOwner, StatusCode::FORBIDDEN),
            (AuthError::TokenGenerationFailed, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, status) in cases {
            assert_eq!(ApiError::from(error).status_code(), status);
        }
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ApiError::from(AuthError::Expired).to_error_response().error,
            "TOKEN_EXPIRED"
        );
        assert_eq!(
            ApiError::from(AuthError::InvalidSignature).to_error_response().error,
            "TOKEN_INVALID_SIGNATURE"
        );
        assert_eq!(
            ApiError::from(AuthError::MissingOrMalformedHeader).to_error_response().error,
            "MISSING_AUTHORIZATION"
        );
    }

    #[test]
    fn test_unauthorized_carries_challenge() {
        let response = ApiError::from(AuthError::Expired).error_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.headers().get(header::WWW_AUTHENTICATE).unwrap(), "Bearer");

        let response = ApiError::from(AuthError::NotOwner).error_response();
        assert!(response.headers().get(header::WWW_AUTHENTICATE).is_none());
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let body = ApiError::Internal("database exploded".into()).to_error_response();
        assert_eq!(body.error, "INTERNAL_ERROR");
        assert!(!body.message.contains("database"));
    }
}

//! Authentication errors.

use drive_commerce::api::ApiError;
use thiserror::Error;

use crate::registration::RegistrationErrors;

/// Authentication error type.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Email or password left empty.
    #[error("email and password are required")]
    MissingCredentials,

    /// The server refused the request (wrong credentials, taken email).
    #[error("rejected: {0}")]
    Rejected(String),

    /// Registration form failed validation.
    #[error("invalid registration: {0}")]
    InvalidRegistration(RegistrationErrors),

    /// Remote API failure.
    #[error(transparent)]
    Api(ApiError),

    /// Cache error.
    #[error("cache error: {0}")]
    Cache(#[from] drive_cache::CacheError),
}

impl From<ApiError> for AuthError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Graphql(messages) => AuthError::Rejected(messages.join("; ")),
            other => AuthError::Api(other),
        }
    }
}

/// Result type for authentication operations.
pub type AuthResult<T> = Result<T, AuthError>;

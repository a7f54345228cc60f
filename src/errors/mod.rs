// Defines the service's error taxonomy and a result type alias using the
// thiserror crate. Every authentication failure surfaces to the client as a
// 401 with a short message; see response.rs for the HTTP mapping.
use thiserror::Error;

// Make the response module public
pub mod response;
pub mod token;

// Re-export commonly used types
pub use token::TokenError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token is missing")]
    TokenMissing,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Invalid user")]
    InvalidUser,

    #[error("Internal error: {0}")]
    Internal(String),
}

// Expired, tampered, and malformed tokens are distinguished internally but
// collapse to a single client-visible rejection.
impl From<TokenError> for AppError {
    fn from(_: TokenError) -> Self {
        AppError::InvalidToken
    }
}

// Custom result type
pub type AppResult<T> = Result<T, AppError>;

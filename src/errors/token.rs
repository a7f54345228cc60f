use thiserror::Error;

// Classification of token verification failures. Unit tests observe the
// distinction; clients never do.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token expired")]
    Expired,

    #[error("signature verification failed")]
    BadSignature,

    #[error("malformed token")]
    Malformed,
}

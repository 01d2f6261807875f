use thiserror::Error;

use crate::credentials::CredentialSet;

/// Result type alias for credential retrieval
pub type CredentialsResult<T> = Result<T, AwsLocalCredentialsError>;

/// Errors returned by [`crate::AwsLocalCredentialsProvider`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AwsLocalCredentialsError {
    /// The access key or secret key is empty
    #[error("awslocal credentials are empty")]
    EmptyCredentials {
        /// Credential set carrying only the provider's source label
        partial: CredentialSet,
    },
}

impl AwsLocalCredentialsError {
    /// Returns the partial credential set attached to the error
    #[must_use]
    pub const fn partial_credentials(&self) -> &CredentialSet {
        match self {
            Self::EmptyCredentials { partial } => partial,
        }
    }
}

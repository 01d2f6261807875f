//! `LocalStack` helpers for the AWS SDK
//!
//! This crate provides a static credentials provider for talking to a local
//! AWS emulator, plus helpers that build an SDK config and SQS client pointed
//! at it.

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// SDK configuration for `LocalStack`
pub mod config;
/// Static credentials provider
pub mod credentials;
/// Error types for the credentials provider
pub mod error;
/// SQS client construction
pub mod sqs;

pub use config::{load_default_sdk_config, AwsLocalConfig};
pub use credentials::{AwsLocalCredentialsProvider, CredentialSet};
pub use error::{AwsLocalCredentialsError, CredentialsResult};

/// Default `LocalStack` edge endpoint
pub const AWS_LOCAL_ENDPOINT: &str = "http://localhost:4566";
/// Source label stamped onto credentials produced by this crate
pub const AWS_LOCAL_CREDENTIALS_NAME: &str = "AwsLocalCredentials";
/// Region used when none is configured
pub const AWS_LOCAL_DEFAULT_REGION: &str = "us-east-1";
/// Account id `LocalStack` uses by default
pub const AWS_LOCAL_ACCOUNT_ID: &str = "000000000000";
/// Placeholder access key accepted by `LocalStack`
pub const AWS_LOCAL_ACCESS_KEY: &str = "test";
/// Placeholder secret key accepted by `LocalStack`
pub const AWS_LOCAL_SECRET: &str = "test";

//! SDK configuration pointed at a `LocalStack` instance

use std::env;

use aws_config::{BehaviorVersion, ConfigLoader, Region, SdkConfig};
use tracing::info;

use crate::credentials::AwsLocalCredentialsProvider;
use crate::{
    AWS_LOCAL_ACCESS_KEY, AWS_LOCAL_ACCOUNT_ID, AWS_LOCAL_DEFAULT_REGION, AWS_LOCAL_ENDPOINT,
    AWS_LOCAL_SECRET,
};

/// Connection settings for a `LocalStack` instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwsLocalConfig {
    /// Account id used for credentials and queue URLs
    pub account_id: String,
    /// Endpoint URL every service call is sent to
    pub endpoint: String,
    /// Region the SDK signs requests for
    pub region: String,
    /// Access key id
    pub access_key: String,
    /// Secret access key
    pub secret: String,
}

impl AwsLocalConfig {
    /// Creates a config from explicit values
    pub fn new(
        account_id: impl Into<String>,
        endpoint: impl Into<String>,
        region: impl Into<String>,
        access_key: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            endpoint: endpoint.into(),
            region: region.into(),
            access_key: access_key.into(),
            secret: secret.into(),
        }
    }

    /// Creates a config from the `AWS_LOCAL_*` environment variables
    ///
    /// Unset or blank variables fall back to the `LocalStack` defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(
            env_or("AWS_LOCAL_ACCOUNT_ID", AWS_LOCAL_ACCOUNT_ID),
            env_or("AWS_LOCAL_ENDPOINT", AWS_LOCAL_ENDPOINT),
            env_or("AWS_LOCAL_REGION", AWS_LOCAL_DEFAULT_REGION),
            env_or("AWS_LOCAL_ACCESS_KEY", AWS_LOCAL_ACCESS_KEY),
            env_or("AWS_LOCAL_SECRET", AWS_LOCAL_SECRET),
        )
    }

    /// Builds the static credentials provider for this config
    #[must_use]
    pub fn credentials_provider(&self) -> AwsLocalCredentialsProvider {
        AwsLocalCredentialsProvider::new(&self.access_key, &self.secret, &self.account_id)
    }

    /// Returns the path-style `LocalStack` URL of the queue called `queue_name`
    #[must_use]
    pub fn queue_url(&self, queue_name: &str) -> String {
        format!(
            "{}/{}/{}",
            self.endpoint.trim_end_matches('/'),
            self.account_id,
            queue_name
        )
    }

    /// Loads an SDK config that talks to `LocalStack`
    pub async fn sdk_config(&self) -> SdkConfig {
        self.sdk_config_with(|loader| loader).await
    }

    /// Loads an SDK config that talks to `LocalStack`, letting the caller
    /// adjust the loader first
    ///
    /// Region and credentials are set before `customize` runs and may be
    /// overridden by it. The endpoint is always the configured one.
    pub async fn sdk_config_with<F>(&self, customize: F) -> SdkConfig
    where
        F: FnOnce(ConfigLoader) -> ConfigLoader,
    {
        let loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(self.region.clone()))
            .credentials_provider(self.credentials_provider());

        let config = customize(loader)
            .endpoint_url(&self.endpoint)
            .load()
            .await;

        info!(
            "Loaded LocalStack config for endpoint {} in region {:?}",
            self.endpoint,
            config.region()
        );

        config
    }
}

impl Default for AwsLocalConfig {
    fn default() -> Self {
        Self::new(
            AWS_LOCAL_ACCOUNT_ID,
            AWS_LOCAL_ENDPOINT,
            AWS_LOCAL_DEFAULT_REGION,
            AWS_LOCAL_ACCESS_KEY,
            AWS_LOCAL_SECRET,
        )
    }
}

/// Loads an SDK config for the default `LocalStack` setup
pub async fn load_default_sdk_config() -> SdkConfig {
    AwsLocalConfig::default().sdk_config().await
}

fn env_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
        .unwrap_or_else(|| default.to_string())
}

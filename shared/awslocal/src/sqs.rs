use aws_config::SdkConfig;
use aws_sdk_sqs::Client as SqsClient;
use tracing::debug;

use crate::config::AwsLocalConfig;

/// Builds an SQS client from `sdk_config` with its endpoint forced to `endpoint`
#[must_use]
pub fn sqs_client(sdk_config: &SdkConfig, endpoint: &str) -> SqsClient {
    let config = aws_sdk_sqs::config::Builder::from(sdk_config)
        .endpoint_url(endpoint)
        .build();

    debug!("Created SQS client for endpoint {}", endpoint);
    SqsClient::from_conf(config)
}

impl AwsLocalConfig {
    /// Loads the SDK config and builds an SQS client for `LocalStack`
    pub async fn sqs_client(&self) -> SqsClient {
        let sdk_config = self.sdk_config().await;
        sqs_client(&sdk_config, &self.endpoint)
    }
}

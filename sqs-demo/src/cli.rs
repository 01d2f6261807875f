use awslocal::{AwsLocalConfig, AWS_LOCAL_DEFAULT_REGION, AWS_LOCAL_ENDPOINT};
use clap::Parser;

/// Queue name used when none is given
pub const DEFAULT_QUEUE_NAME: &str = "test-queue";
/// Message body used when none is given
pub const DEFAULT_MESSAGE_BODY: &str = "Hello, world!";

/// Runs a create/send/receive/delete walkthrough against `LocalStack` SQS
#[derive(Debug, Clone, Parser)]
#[command(name = "sqs-demo", version, about)]
pub struct Args {
    /// `LocalStack` endpoint URL
    #[arg(long, env = "AWS_LOCAL_ENDPOINT", default_value = AWS_LOCAL_ENDPOINT)]
    pub endpoint: String,

    /// Region to sign requests for
    #[arg(long, env = "AWS_LOCAL_REGION", default_value = AWS_LOCAL_DEFAULT_REGION)]
    pub region: String,

    /// Name of the queue to create
    #[arg(long, env = "DEMO_QUEUE_NAME", default_value = DEFAULT_QUEUE_NAME)]
    pub queue_name: String,

    /// Body of the message to send
    #[arg(long, env = "DEMO_MESSAGE_BODY", default_value = DEFAULT_MESSAGE_BODY)]
    pub message_body: String,
}

impl Args {
    /// `LocalStack` settings with the endpoint and region taken from the arguments
    #[must_use]
    pub fn aws_local_config(&self) -> AwsLocalConfig {
        AwsLocalConfig {
            endpoint: self.endpoint.clone(),
            region: self.region.clone(),
            ..AwsLocalConfig::from_env()
        }
    }
}

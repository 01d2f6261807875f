//! LocalStack setup utilities

use std::sync::Arc;

use aws_sdk_sqs::Client as SqsClient;
use awslocal::AwsLocalConfig;
use uuid::Uuid;

/// A uniquely named queue name plus a client pointed at LocalStack
pub struct LocalStackQueue {
    pub sqs_client: Arc<SqsClient>,
    pub queue_name: String,
}

impl LocalStackQueue {
    /// Creates a client for the default LocalStack and a unique queue name
    pub async fn new(prefix: &str) -> Self {
        let sqs_client = Arc::new(AwsLocalConfig::default().sqs_client().await);

        Self {
            sqs_client,
            queue_name: format!("{}-{}", prefix, Uuid::new_v4()),
        }
    }
}

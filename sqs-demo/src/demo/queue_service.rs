//! Queue operations used by the demo
//!
//! [`QueueService`] is the seam between the demo and SQS. [`SqsQueueService`]
//! is the real implementation backed by the AWS SDK.

use std::sync::Arc;

use async_trait::async_trait;
use aws_sdk_sqs::Client as SqsClient;
use tracing::debug;

use super::error::{DemoError, DemoResult};

/// The queue operations the demo needs
#[async_trait]
pub trait QueueService: Send + Sync {
    /// Creates a queue and returns its URL
    async fn create_queue(&self, queue_name: &str) -> DemoResult<String>;

    /// Sends `body` to the queue and returns the message ID
    async fn send_message(&self, queue_url: &str, body: &str) -> DemoResult<String>;

    /// Receives available messages and returns their bodies
    async fn receive_messages(&self, queue_url: &str) -> DemoResult<Vec<String>>;

    /// Deletes the queue
    async fn delete_queue(&self, queue_url: &str) -> DemoResult<()>;
}

#[async_trait]
impl<T: QueueService + ?Sized> QueueService for Arc<T> {
    async fn create_queue(&self, queue_name: &str) -> DemoResult<String> {
        (**self).create_queue(queue_name).await
    }

    async fn send_message(&self, queue_url: &str, body: &str) -> DemoResult<String> {
        (**self).send_message(queue_url, body).await
    }

    async fn receive_messages(&self, queue_url: &str) -> DemoResult<Vec<String>> {
        (**self).receive_messages(queue_url).await
    }

    async fn delete_queue(&self, queue_url: &str) -> DemoResult<()> {
        (**self).delete_queue(queue_url).await
    }
}

/// [`QueueService`] backed by an SQS client
pub struct SqsQueueService {
    sqs_client: Arc<SqsClient>,
}

impl SqsQueueService {
    /// Creates a new service from a pre-configured SQS client
    #[must_use]
    pub const fn new(sqs_client: Arc<SqsClient>) -> Self {
        Self { sqs_client }
    }
}

#[async_trait]
impl QueueService for SqsQueueService {
    async fn create_queue(&self, queue_name: &str) -> DemoResult<String> {
        let result = self
            .sqs_client
            .create_queue()
            .queue_name(queue_name)
            .send()
            .await?;

        debug!("Created queue {}", queue_name);
        result
            .queue_url()
            .map(ToString::to_string)
            .ok_or(DemoError::MissingQueueUrl)
    }

    async fn send_message(&self, queue_url: &str, body: &str) -> DemoResult<String> {
        let result = self
            .sqs_client
            .send_message()
            .queue_url(queue_url)
            .message_body(body)
            .send()
            .await?;

        result
            .message_id()
            .map(ToString::to_string)
            .ok_or(DemoError::MissingMessageId)
    }

    async fn receive_messages(&self, queue_url: &str) -> DemoResult<Vec<String>> {
        let result = self
            .sqs_client
            .receive_message()
            .queue_url(queue_url)
            .send()
            .await?;

        Ok(result
            .messages()
            .iter()
            .filter_map(|msg| msg.body().map(ToString::to_string))
            .collect())
    }

    async fn delete_queue(&self, queue_url: &str) -> DemoResult<()> {
        self.sqs_client
            .delete_queue()
            .queue_url(queue_url)
            .send()
            .await?;

        debug!("Deleted queue {}", queue_url);
        Ok(())
    }
}

//! Queue walkthrough
//!
//! Creates a queue, sends one message, receives it and deletes the queue.
//! The first failing step stops the walkthrough and its error is returned.

use std::io::Write;

use tracing::info;

/// Error types for the demo
pub mod error;
/// Queue operations used by the demo
pub mod queue_service;

pub use error::{DemoError, DemoResult};
pub use queue_service::{QueueService, SqsQueueService};

/// Outcome of a successful walkthrough
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    /// URL of the queue that was created and deleted
    pub queue_url: String,
    /// ID of the message that was sent
    pub message_id: String,
    /// Bodies of the messages that were received
    pub received_bodies: Vec<String>,
}

/// Runs the create/send/receive/delete sequence against a [`QueueService`]
pub struct QueueDemo<Q> {
    queue: Q,
    queue_name: String,
    message_body: String,
}

impl<Q: QueueService> QueueDemo<Q> {
    /// Creates a demo for the given queue name and message body
    pub fn new(queue: Q, queue_name: impl Into<String>, message_body: impl Into<String>) -> Self {
        Self {
            queue,
            queue_name: queue_name.into(),
            message_body: message_body.into(),
        }
    }

    /// Runs the walkthrough, writing one line per result to `out`
    ///
    /// # Errors
    ///
    /// Returns the error of the first step that fails. Later steps are not
    /// attempted, so a failure after creation leaves the queue in place.
    pub async fn run<W: Write + Send>(&self, out: &mut W) -> DemoResult<DemoReport> {
        let queue_url = self.queue.create_queue(&self.queue_name).await?;
        info!("Created queue {} at {}", self.queue_name, queue_url);
        writeln!(out, "Queue URL: {queue_url}")?;

        let message_id = self
            .queue
            .send_message(&queue_url, &self.message_body)
            .await?;
        writeln!(out, "Message ID: {message_id}")?;

        let received_bodies = self.queue.receive_messages(&queue_url).await?;
        info!("Received {} message(s)", received_bodies.len());
        for body in &received_bodies {
            writeln!(out, "Message Body: {body}")?;
        }

        self.queue.delete_queue(&queue_url).await?;
        info!("Deleted queue {}", queue_url);

        Ok(DemoReport {
            queue_url,
            message_id,
            received_bodies,
        })
    }
}

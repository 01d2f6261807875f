use aws_sdk_sqs::error::SdkError;
use aws_sdk_sqs::operation::create_queue::CreateQueueError;
use aws_sdk_sqs::operation::delete_queue::DeleteQueueError;
use aws_sdk_sqs::operation::receive_message::ReceiveMessageError;
use aws_sdk_sqs::operation::send_message::SendMessageError;
use thiserror::Error;

/// Result type alias for demo operations
pub type DemoResult<T> = Result<T, DemoError>;

/// Error types for the queue demo
#[derive(Error, Debug)]
pub enum DemoError {
    /// Error creating the queue
    #[error("Failed to create queue")]
    CreateQueue(#[from] SdkError<CreateQueueError>),

    /// Error sending the message
    #[error("Failed to send message to SQS")]
    SendMessage(#[from] SdkError<SendMessageError>),

    /// Error receiving messages
    #[error("Failed to receive messages from SQS")]
    ReceiveMessage(#[from] SdkError<ReceiveMessageError>),

    /// Error deleting the queue
    #[error("Failed to delete queue")]
    DeleteQueue(#[from] SdkError<DeleteQueueError>),

    /// `CreateQueue` succeeded without returning a queue URL
    #[error("CreateQueue response did not include a queue URL")]
    MissingQueueUrl,

    /// `SendMessage` succeeded without returning a message ID
    #[error("SendMessage response did not include a message ID")]
    MissingMessageId,

    /// Error writing the demo output
    #[error("Failed to write demo output: {0}")]
    Output(#[from] std::io::Error),
}

impl DemoError {
    /// Checks if this error represents an upstream (5xx) error
    #[must_use]
    pub fn is_upstream_error(&self) -> bool {
        match self {
            Self::CreateQueue(sdk_err) => Self::check_sdk_error_status(sdk_err),
            Self::SendMessage(sdk_err) => Self::check_sdk_error_status(sdk_err),
            Self::ReceiveMessage(sdk_err) => Self::check_sdk_error_status(sdk_err),
            Self::DeleteQueue(sdk_err) => Self::check_sdk_error_status(sdk_err),
            _ => false,
        }
    }

    fn check_sdk_error_status<E>(sdk_err: &SdkError<E>) -> bool {
        if let SdkError::ServiceError(err) = sdk_err {
            return err.raw().status().as_u16() >= 500;
        }
        false
    }
}

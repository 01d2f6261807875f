//! In-memory queue service for exercising the demo without SQS

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use aws_sdk_sqs::error::SdkError;
use sqs_demo::demo::{DemoError, DemoResult, QueueService};

/// Demo step that can be made to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Create,
    Send,
    Receive,
    Delete,
}

/// A recorded call to the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Create(String),
    Send(String, String),
    Receive(String),
    Delete(String),
}

/// Queue service that keeps queues in a map and records every call
#[derive(Default)]
pub struct MemoryQueueService {
    queues: Mutex<HashMap<String, Vec<String>>>,
    calls: Mutex<Vec<Call>>,
    fail_on: Option<Step>,
}

impl MemoryQueueService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(step: Step) -> Self {
        Self {
            fail_on: Some(step),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn queue_exists(&self, queue_url: &str) -> bool {
        self.queues.lock().unwrap().contains_key(queue_url)
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn should_fail(&self, step: Step) -> bool {
        self.fail_on == Some(step)
    }
}

#[async_trait]
impl QueueService for MemoryQueueService {
    async fn create_queue(&self, queue_name: &str) -> DemoResult<String> {
        self.record(Call::Create(queue_name.to_string()));
        if self.should_fail(Step::Create) {
            return Err(DemoError::CreateQueue(SdkError::construction_failure(
                "create failed",
            )));
        }

        let queue_url = format!("http://localhost:4566/000000000000/{queue_name}");
        self.queues
            .lock()
            .unwrap()
            .insert(queue_url.clone(), Vec::new());
        Ok(queue_url)
    }

    async fn send_message(&self, queue_url: &str, body: &str) -> DemoResult<String> {
        self.record(Call::Send(queue_url.to_string(), body.to_string()));
        if self.should_fail(Step::Send) {
            return Err(DemoError::SendMessage(SdkError::construction_failure(
                "send failed",
            )));
        }

        let mut queues = self.queues.lock().unwrap();
        let messages = queues.get_mut(queue_url).expect("queue should exist");
        messages.push(body.to_string());
        Ok(format!("msg-{}", messages.len()))
    }

    async fn receive_messages(&self, queue_url: &str) -> DemoResult<Vec<String>> {
        self.record(Call::Receive(queue_url.to_string()));
        if self.should_fail(Step::Receive) {
            return Err(DemoError::ReceiveMessage(SdkError::construction_failure(
                "receive failed",
            )));
        }

        let queues = self.queues.lock().unwrap();
        Ok(queues.get(queue_url).cloned().unwrap_or_default())
    }

    async fn delete_queue(&self, queue_url: &str) -> DemoResult<()> {
        self.record(Call::Delete(queue_url.to_string()));
        if self.should_fail(Step::Delete) {
            return Err(DemoError::DeleteQueue(SdkError::construction_failure(
                "delete failed",
            )));
        }

        self.queues.lock().unwrap().remove(queue_url);
        Ok(())
    }
}

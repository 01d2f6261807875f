#![allow(unused_imports, dead_code)]

mod localstack;
mod memory_queue;

pub use localstack::LocalStackQueue;
pub use memory_queue::{Call, MemoryQueueService, Step};

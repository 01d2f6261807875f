//! SQS smoke test against `LocalStack`

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Command line arguments
pub mod cli;

/// Create/send/receive/delete queue walkthrough
pub mod demo;

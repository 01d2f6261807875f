use std::env;
use std::io;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use sqs_demo::cli::Args;
use sqs_demo::demo::{QueueDemo, SqsQueueService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // JSON logs for log shippers, plain text otherwise
    if env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json")) {
        fmt()
            .json()
            .with_env_filter(EnvFilter::from_default_env())
            .init();
    } else {
        fmt().with_env_filter(EnvFilter::from_default_env()).init();
    }

    let args = Args::parse();
    let config = args.aws_local_config();
    info!(
        "Running SQS demo against {} in {}",
        config.endpoint, config.region
    );

    let sqs_client = Arc::new(config.sqs_client().await);
    let demo = QueueDemo::new(
        SqsQueueService::new(sqs_client),
        &args.queue_name,
        &args.message_body,
    );

    let mut stdout = io::stdout();
    if let Err(e) = demo.run(&mut stdout).await {
        error!("SQS demo failed: {}", e);
        return Err(e.into());
    }

    info!("SQS demo finished");
    Ok(())
}

use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use webclass_sync::config::AppConfig;
use webclass_sync::error::AppError;
use webclass_sync::services::{SubmissionStatus, SyncPipeline};
use webclass_sync::sink::{AssignmentSink, DryRunSink, GasWebhookSink};
use webclass_sync::webclass::{Credentials, WebClassHttpClient};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "webclass_sync=info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AppError> {
    let config = AppConfig::new_from_env()?;
    let credentials = Credentials::new_from_env()?;

    let client = WebClassHttpClient::new(&config)?;
    client.login(&credentials).await?;

    let sink: Arc<dyn AssignmentSink> = if config.dry_run {
        info!("Dry run: rows will be logged, not sent");
        Arc::new(DryRunSink)
    } else {
        Arc::new(GasWebhookSink::new(&config)?)
    };

    let pipeline = SyncPipeline::new(Arc::new(client), sink, &config);
    let report = pipeline.run().await;

    match &report.submission {
        SubmissionStatus::NoCourses => warn!("No courses found, nothing was done"),
        SubmissionStatus::NoRows => warn!("No WebClass content found, nothing was sent"),
        SubmissionStatus::Submitted(message) => info!(
            "Sync finished: {} rows sent from {} courses ({} failed) {}",
            report.rows_collected,
            report.courses_discovered,
            report.courses_failed(),
            message
        ),
        SubmissionStatus::Failed(reason) => warn!(
            "Sync finished but sending {} rows failed: {}",
            report.rows_collected, reason
        ),
    }

    Ok(())
}

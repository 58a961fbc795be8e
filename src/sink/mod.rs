pub mod dto;

pub use dto::SinkAck;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::info;
use url::Url;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::models::AssignmentBatch;

#[async_trait]
pub trait AssignmentSink: Send + Sync {
    async fn submit(&self, batch: &AssignmentBatch) -> Result<SinkAck, AppError>;
}

/// Posts the batch to the Apps Script web app that owns the spreadsheet.
pub struct GasWebhookSink {
    client: Client,
    destination_url: Url,
}

impl GasWebhookSink {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build http client: {}", e)))?;
        let destination_url = config
            .destination_url
            .clone()
            .ok_or_else(|| AppError::Config("GAS_WEB_APP_URL is not set".to_string()))?;
        Ok(Self {
            client,
            destination_url,
        })
    }
}

#[async_trait]
impl AssignmentSink for GasWebhookSink {
    async fn submit(&self, batch: &AssignmentBatch) -> Result<SinkAck, AppError> {
        info!(
            "Sending {} rows to {}",
            batch.len(),
            self.destination_url
        );

        let response = self
            .client
            .post(self.destination_url.clone())
            .json(batch)
            .send()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        interpret_ack(status, &body)
    }
}

/// Maps the web app's HTTP reply onto the three failure kinds:
/// transport (non-2xx), format (not a JSON ack), rejection (status other
/// than `SUCCESS`).
pub fn interpret_ack(status: StatusCode, body: &str) -> Result<SinkAck, AppError> {
    if !status.is_success() {
        return Err(AppError::Transport(format!("{}: {}", status, body)));
    }

    let ack: SinkAck = serde_json::from_str(body)
        .map_err(|_| AppError::ResponseFormat(body.to_string()))?;

    if !ack.is_success() {
        let message = ack
            .message
            .clone()
            .unwrap_or_else(|| "unknown error".to_string());
        return Err(AppError::SinkRejected(message));
    }

    Ok(ack)
}

/// Logs rows instead of sending them.
pub struct DryRunSink;

#[async_trait]
impl AssignmentSink for DryRunSink {
    async fn submit(&self, batch: &AssignmentBatch) -> Result<SinkAck, AppError> {
        for row in &batch.assignments {
            info!(
                "[DRY RUN] {} | {} | {} | {}",
                row.course_name, row.title, row.due_date, row.share_link
            );
        }
        Ok(SinkAck {
            status: dto::ACK_SUCCESS.to_string(),
            message: Some(format!("dry run, {} rows not sent", batch.len())),
        })
    }
}

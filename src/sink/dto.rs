use serde::Deserialize;

pub const ACK_SUCCESS: &str = "SUCCESS";

/// Acknowledgement returned by the web app.
#[derive(Debug, Clone, Deserialize)]
pub struct SinkAck {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl SinkAck {
    pub fn is_success(&self) -> bool {
        self.status == ACK_SUCCESS
    }
}

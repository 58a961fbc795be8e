pub mod credentials;

pub use credentials::Credentials;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};
use url::Url;

use crate::config::AppConfig;
use crate::error::AppError;

const LOGIN_PATH: &str = "webclass/login.php";
const DASHBOARD_PATH: &str = "webclass/index.php";

/// Marker of the password input; present only while the login form is shown.
const LOGIN_FORM_MARKER: &str = r#"name="val""#;

#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub status: u16,
    pub body: String,
}

impl FetchedPage {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// An authenticated view of the portal.
#[async_trait]
pub trait PortalSession: Send + Sync {
    fn base_url(&self) -> &Url;
    fn dashboard_url(&self) -> &Url;
    async fn get(&self, url: &Url) -> Result<FetchedPage, AppError>;
}

pub struct WebClassHttpClient {
    client: Client,
    base_url: Url,
    dashboard_url: Url,
}

impl WebClassHttpClient {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build http client: {}", e)))?;
        let base_url = config.portal_base_url.clone();
        let dashboard_url = base_url
            .join(DASHBOARD_PATH)
            .map_err(|e| AppError::Config(format!("Invalid dashboard URL: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            dashboard_url,
        })
    }

    /// Submits the login form. The session cookie is kept by the client's
    /// cookie store for every later request.
    pub async fn login(&self, credentials: &Credentials) -> Result<(), AppError> {
        let url = self
            .base_url
            .join(LOGIN_PATH)
            .map_err(|e| AppError::Login(format!("Invalid login URL: {}", e)))?;

        info!("Logging in to {} as {}", self.base_url, credentials.userid);

        let response = self
            .client
            .post(url)
            .form(&[
                ("username", credentials.userid.as_str()),
                ("val", credentials.password.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::Login(format!("Login request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Login(format!("Login returned {}", status)));
        }

        // an unreadable body cannot prove the form is gone
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Login(format!("Failed to read login response: {}", e)))?;

        if body.contains(LOGIN_FORM_MARKER) {
            return Err(AppError::Login(
                "Login form returned again; check the user id and password".to_string(),
            ));
        }

        info!("Login succeeded");
        Ok(())
    }
}

#[async_trait]
impl PortalSession for WebClassHttpClient {
    fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn dashboard_url(&self) -> &Url {
        &self.dashboard_url
    }

    async fn get(&self, url: &Url) -> Result<FetchedPage, AppError> {
        debug!("GET {}", url);
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(FetchedPage { status, body })
    }
}

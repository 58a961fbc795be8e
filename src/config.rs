use std::env;

use url::Url;

use crate::error::AppError;

pub const DEFAULT_PORTAL_BASE_URL: &str = "https://rpwebcls.meijo-u.ac.jp/";
pub const DEFAULT_DEEP_LINK_HOST: &str = "rpwebcls.meijo-u.ac.jp";

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Web app endpoint receiving the assignment batch. Only optional in a
    /// dry run, where nothing is sent.
    pub destination_url: Option<Url>,
    /// Base for resolving relative course and redirect links.
    pub portal_base_url: Url,
    /// Host used when building share links.
    pub deep_link_host: String,
    pub dry_run: bool,
}

impl AppConfig {
    pub fn new(destination_url: &str, portal_base_url: &str, deep_link_host: &str) -> Result<Self, AppError> {
        Self::from_parts(Some(destination_url), portal_base_url, deep_link_host, false)
    }

    pub fn from_parts(
        destination_url: Option<&str>,
        portal_base_url: &str,
        deep_link_host: &str,
        dry_run: bool,
    ) -> Result<Self, AppError> {
        let destination_url = match destination_url.map(str::trim).filter(|v| !v.is_empty()) {
            Some(url) => Some(Url::parse(url).map_err(|e| {
                AppError::Config(format!("GAS_WEB_APP_URL is not a valid URL: {}", e))
            })?),
            None if dry_run => None,
            None => return Err(AppError::Config("GAS_WEB_APP_URL is not set".to_string())),
        };
        let portal_base_url = Url::parse(portal_base_url)
            .map_err(|e| AppError::Config(format!("WEBCLASS_BASE_URL is not a valid URL: {}", e)))?;

        Ok(Self {
            destination_url,
            portal_base_url,
            deep_link_host: deep_link_host.to_string(),
            dry_run,
        })
    }

    pub fn new_from_env() -> Result<Self, AppError> {
        let destination_url = env::var("GAS_WEB_APP_URL").ok();
        let portal_base_url = env::var("WEBCLASS_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_PORTAL_BASE_URL.to_string());
        let deep_link_host = env::var("WEBCLASS_DEEP_LINK_HOST")
            .unwrap_or_else(|_| DEFAULT_DEEP_LINK_HOST.to_string());
        let dry_run = env::var("WEBCLASS_DRY_RUN")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Self::from_parts(destination_url.as_deref(), &portal_base_url, &deep_link_host, dry_run)
    }
}

/// `1`, `true` and `yes` (any case) switch a flag on; anything else is off.
pub fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}

use std::fmt;
use std::sync::Arc;

use tracing::debug;
use url::Url;

use crate::error::AppError;
use crate::models::{AssignmentRecord, ContentPanel, CourseLink};
use crate::parser;
use crate::webclass::PortalSession;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseStatus {
    Success,
    Failed(String),
}

impl fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseStatus::Success => write!(f, "ok"),
            CourseStatus::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}

#[derive(Debug)]
pub struct CourseFetchOutcome {
    pub course_name: String,
    pub result: Result<Vec<ContentPanel>, AppError>,
}

impl CourseFetchOutcome {
    pub fn status(&self) -> CourseStatus {
        match &self.result {
            Ok(_) => CourseStatus::Success,
            Err(e) => CourseStatus::Failed(e.to_string()),
        }
    }

    pub fn records(&self) -> impl Iterator<Item = &AssignmentRecord> {
        self.result
            .iter()
            .flatten()
            .flat_map(|panel| panel.items.iter())
    }
}

/// Fetches one course page and turns it into content panels.
pub struct CourseFetcher {
    session: Arc<dyn PortalSession>,
    deep_link_host: String,
}

impl CourseFetcher {
    pub fn new(session: Arc<dyn PortalSession>, deep_link_host: impl Into<String>) -> Self {
        Self {
            session,
            deep_link_host: deep_link_host.into(),
        }
    }

    /// Never fails: any error ends up in the outcome for this course only.
    pub async fn fetch(&self, course: &CourseLink) -> CourseFetchOutcome {
        CourseFetchOutcome {
            course_name: course.name.clone(),
            result: self.fetch_panels(course).await,
        }
    }

    async fn fetch_panels(&self, course: &CourseLink) -> Result<Vec<ContentPanel>, AppError> {
        let base = self.session.base_url();
        let url = base
            .join(&course.href)
            .map_err(|e| AppError::CourseFetch(format!("invalid course URL {}: {}", course.href, e)))?;

        let html = fetch_html(self.session.as_ref(), &url).await?;
        let html = resolve_redirect(self.session.as_ref(), html, base).await?;

        let records = parser::parse_course_contents(&html, &self.deep_link_host);
        debug!("{}: {} content items", course.name, records.len());
        Ok(ContentPanel::group(records))
    }
}

/// Follows a script redirect found in the first `<script>` of `html`, one hop
/// only. Without a redirect the input comes back untouched.
pub async fn resolve_redirect(
    session: &dyn PortalSession,
    html: String,
    base: &Url,
) -> Result<String, AppError> {
    let Some(target) = parser::find_redirect_target(&html) else {
        return Ok(html);
    };

    let url = base
        .join(&target)
        .map_err(|e| AppError::CourseFetch(format!("invalid redirect target {}: {}", target, e)))?;
    debug!("Following script redirect to {}", url);
    fetch_html(session, &url).await
}

async fn fetch_html(session: &dyn PortalSession, url: &Url) -> Result<String, AppError> {
    let page = session
        .get(url)
        .await
        .map_err(|e| AppError::CourseFetch(format!("{}: {}", url, e)))?;

    if !page.is_success() {
        return Err(AppError::CourseFetch(format!("{} returned HTTP {}", url, page.status)));
    }
    Ok(page.body)
}

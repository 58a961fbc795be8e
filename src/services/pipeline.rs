use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::models::{AssignmentBatch, CourseLink};
use crate::parser;
use crate::services::course_fetcher::{CourseFetcher, CourseStatus};
use crate::services::normalizer;
use crate::sink::AssignmentSink;
use crate::webclass::PortalSession;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SubmissionStatus {
    /// Nothing was discovered on the dashboard.
    NoCourses,
    /// Courses were processed but none produced a row.
    NoRows,
    Submitted(String),
    Failed(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseReport {
    pub course_name: String,
    pub rows: usize,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub courses_discovered: usize,
    pub courses: Vec<CourseReport>,
    pub rows_collected: usize,
    pub submission: SubmissionStatus,
}

impl RunReport {
    pub fn courses_failed(&self) -> usize {
        self.courses.iter().filter(|c| c.error.is_some()).count()
    }
}

/// Runs dashboard discovery, per-course extraction and the single batch
/// submission, one course at a time.
pub struct SyncPipeline {
    session: Arc<dyn PortalSession>,
    sink: Arc<dyn AssignmentSink>,
    fetcher: CourseFetcher,
}

impl SyncPipeline {
    pub fn new(
        session: Arc<dyn PortalSession>,
        sink: Arc<dyn AssignmentSink>,
        config: &AppConfig,
    ) -> Self {
        let fetcher = CourseFetcher::new(session.clone(), config.deep_link_host.clone());
        Self {
            session,
            sink,
            fetcher,
        }
    }

    pub async fn run(&self) -> RunReport {
        let started_at = Utc::now();
        info!("Starting WebClass sync...");

        let courses: Vec<CourseLink> = match self.discover_courses().await {
            Ok(links) => links.into_iter().collect(),
            Err(e) => {
                warn!("{}", e);
                Vec::new()
            }
        };

        if courses.is_empty() {
            warn!("No courses to process, stopping");
            return RunReport {
                started_at,
                finished_at: Utc::now(),
                courses_discovered: 0,
                courses: Vec::new(),
                rows_collected: 0,
                submission: SubmissionStatus::NoCourses,
            };
        }

        let total = courses.len();
        info!("Processing {} courses", total);

        let mut batch = AssignmentBatch::default();
        let mut reports = Vec::with_capacity(total);

        for (i, course) in courses.iter().enumerate() {
            let outcome = self.fetcher.fetch(course).await;
            let status = outcome.status();
            info!("({}/{}) [{}] - {}", i + 1, total, status, outcome.course_name);

            let before = batch.len();
            batch.assignments.extend(
                outcome
                    .records()
                    .map(|record| normalizer::normalize(&outcome.course_name, record)),
            );

            reports.push(CourseReport {
                course_name: outcome.course_name.clone(),
                rows: batch.len() - before,
                error: match status {
                    CourseStatus::Success => None,
                    CourseStatus::Failed(reason) => Some(reason),
                },
            });
        }

        let rows_collected = batch.len();
        let submission = if batch.is_empty() {
            warn!("No content found in any course, nothing to send");
            SubmissionStatus::NoRows
        } else {
            self.submit(&batch).await
        };

        RunReport {
            started_at,
            finished_at: Utc::now(),
            courses_discovered: total,
            courses: reports,
            rows_collected,
            submission,
        }
    }

    async fn discover_courses(&self) -> Result<HashSet<CourseLink>, AppError> {
        let url = self.session.dashboard_url();
        info!("Fetching course links from {}", url);

        let page = self
            .session
            .get(url)
            .await
            .map_err(|e| AppError::Discovery(e.to_string()))?;
        if !page.is_success() {
            return Err(AppError::Discovery(format!(
                "dashboard returned HTTP {}",
                page.status
            )));
        }

        let links = parser::parse_course_links(&page.body);
        info!("Found {} course links", links.len());
        Ok(links)
    }

    async fn submit(&self, batch: &AssignmentBatch) -> SubmissionStatus {
        match self.sink.submit(batch).await {
            Ok(ack) => {
                let message = ack.message.unwrap_or_default();
                info!("Submitted {} rows: {}", batch.len(), ack.status);
                SubmissionStatus::Submitted(message)
            }
            Err(e) => {
                error!("Submission failed: {}", e);
                SubmissionStatus::Failed(e.to_string())
            }
        }
    }
}

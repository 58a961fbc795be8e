pub mod course_fetcher;
pub mod normalizer;
pub mod pipeline;

pub use course_fetcher::{CourseFetchOutcome, CourseFetcher, CourseStatus, resolve_redirect};
pub use normalizer::{due_date, normalize};
pub use pipeline::{CourseReport, RunReport, SubmissionStatus, SyncPipeline};

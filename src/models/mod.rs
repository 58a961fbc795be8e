pub mod assignment;
pub mod course;
pub mod row;

pub use assignment::{AssignmentRecord, ContentPanel};
pub use course::CourseLink;
pub use row::{AssignmentBatch, OutboundRow};

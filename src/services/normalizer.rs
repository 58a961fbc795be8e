use crate::models::row::ROW_SOURCE;
use crate::models::{AssignmentRecord, OutboundRow};

const PERIOD_SEPARATOR: &str = " - ";

/// Turns an extracted record into the spreadsheet row shape.
pub fn normalize(course_name: &str, record: &AssignmentRecord) -> OutboundRow {
    OutboundRow {
        source: ROW_SOURCE.to_string(),
        course_name: course_name.to_string(),
        // category is appended even when empty: "title ()"
        title: format!("{} ({})", record.title, record.category),
        due_date: due_date(&record.period).to_string(),
        share_link: record.share_link.clone(),
        external_id: String::new(),
        registered: String::new(),
    }
}

/// Text after the first `" - "`, trimmed. A period without the separator is
/// returned as is.
pub fn due_date(period: &str) -> &str {
    match period.split_once(PERIOD_SEPARATOR) {
        Some((_, end)) => end.trim(),
        None => period,
    }
}

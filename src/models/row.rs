use serde::Serialize;

pub const ROW_SOURCE: &str = "WebClass";

/// One spreadsheet row as the web app expects it:
/// `[source, course, title (category), due date, share link, task id, registered]`.
/// The last two columns belong to the receiving side and stay empty here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "[String; 7]")]
pub struct OutboundRow {
    pub source: String,
    pub course_name: String,
    pub title: String,
    pub due_date: String,
    pub share_link: String,
    pub external_id: String,
    pub registered: String,
}

impl From<OutboundRow> for [String; 7] {
    fn from(row: OutboundRow) -> Self {
        [
            row.source,
            row.course_name,
            row.title,
            row.due_date,
            row.share_link,
            row.external_id,
            row.registered,
        ]
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AssignmentBatch {
    pub assignments: Vec<OutboundRow>,
}

impl AssignmentBatch {
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

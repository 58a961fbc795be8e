use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssignmentRecord {
    pub title: String,
    pub url: String,
    pub share_link: String,
    pub is_new: bool,
    pub category: String,
    /// Raw availability range, e.g. `2024/04/01 10:00 - 2024/04/08 23:59`.
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentPanel {
    pub category: String,
    pub items: Vec<AssignmentRecord>,
}

impl ContentPanel {
    /// Groups runs of consecutive records sharing a category.
    /// Flattening the result gives back the input order.
    pub fn group(records: Vec<AssignmentRecord>) -> Vec<ContentPanel> {
        let mut panels: Vec<ContentPanel> = Vec::new();
        for record in records {
            match panels.last_mut() {
                Some(panel) if panel.category == record.category => panel.items.push(record),
                _ => panels.push(ContentPanel {
                    category: record.category.clone(),
                    items: vec![record],
                }),
            }
        }
        panels
    }
}

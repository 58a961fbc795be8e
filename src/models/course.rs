use serde::Serialize;

/// A course anchor found on the dashboard. The pair itself is the identity,
/// so the same href under two different names yields two links.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CourseLink {
    pub name: String,
    pub href: String,
}

impl CourseLink {
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
        }
    }
}

use std::collections::HashSet;
use std::sync::LazyLock;

use scraper::{Html, Selector};
use tracing::warn;

use crate::models::CourseLink;
use crate::parser::query::{self, NodeQuery};

/// Path segment that marks an anchor as a course page.
pub const COURSE_PATH_MARKER: &str = "/webclass/course.php/";

static COURSE_ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a.list-group-item.course[href]").unwrap());

/// Collects course links from the dashboard. Only anchors in the course list
/// whose href points at a course page qualify. Identical (name, href) pairs
/// collapse; pairs differing in either field are all kept.
pub fn parse_course_links(html: &str) -> HashSet<CourseLink> {
    let document = Html::parse_document(html);

    let links: HashSet<CourseLink> = (&document)
        .find_all(&COURSE_ANCHOR)
        .into_iter()
        .filter_map(|a| {
            let href = a.value().attr("href")?;
            if href.is_empty() || !href.contains(COURSE_PATH_MARKER) {
                return None;
            }
            Some(CourseLink::new(query::stripped_text(a), href))
        })
        .collect();

    if links.is_empty() {
        warn!("No course links found on the dashboard");
    }
    links
}

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::models::AssignmentRecord;
use crate::parser::query::{self, NodeQuery};

/// Label of the detail row holding the availability range.
const AVAILABILITY_LABEL: &str = "利用可能期間";

static SELECTORS: LazyLock<Selectors> = LazyLock::new(Selectors::new);

// Unanchored on purpose: `content_id=ab12` also matches, and the token ends
// at the first non-hex character (`id=12g` gives `12`).
static ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"id=([a-f0-9]+)").unwrap());

struct Selectors {
    content_item: Selector,
    new_badge: Selector,
    content_name: Selector,
    anchor: Selector,
    category_label: Selector,
    detail_item: Selector,
    detail_label: Selector,
    detail_data: Selector,
}

impl Selectors {
    fn new() -> Self {
        Self {
            content_item: Selector::parse("section.list-group-item.cl-contentsList_listGroupItem")
                .unwrap(),
            new_badge: Selector::parse("div.cl-contentsList_new").unwrap(),
            content_name: Selector::parse("h4.cm-contentsList_contentName").unwrap(),
            anchor: Selector::parse("a").unwrap(),
            category_label: Selector::parse("div.cl-contentsList_categoryLabel").unwrap(),
            detail_item: Selector::parse("div.cm-contentsList_contentDetailListItem").unwrap(),
            detail_label: Selector::parse("div.cm-contentsList_contentDetailListItemLabel")
                .unwrap(),
            detail_data: Selector::parse("div.cm-contentsList_contentDetailListItemData").unwrap(),
        }
    }
}

/// Extracts one record per content item of a course top page, in document
/// order. Panels wrapping the items are ignored; each item carries its own
/// category label.
pub fn parse_course_contents(html: &str, deep_link_host: &str) -> Vec<AssignmentRecord> {
    let document = Html::parse_document(html);
    let items = (&document).find_all(&SELECTORS.content_item);
    items
        .into_iter()
        .map(|item| parse_item(item, deep_link_host))
        .collect()
}

fn parse_item(item: ElementRef<'_>, deep_link_host: &str) -> AssignmentRecord {
    let is_new = item.find_first(&SELECTORS.new_badge).is_some();

    let (title, url) = match item.find_first(&SELECTORS.content_name) {
        Some(name) => {
            // the "New" badge lives inside the heading
            let title = query::stripped_text_excluding(name, &SELECTORS.new_badge);
            let url = name
                .find_first(&SELECTORS.anchor)
                .map(|a| query::attr(a, "href"))
                .unwrap_or_default();
            (title, url)
        }
        None => (String::new(), String::new()),
    };

    let share_link = share_link_for(&url, deep_link_host);

    let category = item
        .find_first(&SELECTORS.category_label)
        .map(query::stripped_text)
        .unwrap_or_default();

    AssignmentRecord {
        title,
        url,
        share_link,
        is_new,
        category,
        period: availability_period(item),
    }
}

/// The first detail row whose label mentions the availability period decides
/// the value, even when that row has no data cell.
fn availability_period(item: ElementRef<'_>) -> String {
    for detail in item.find_all(&SELECTORS.detail_item) {
        let Some(label) = detail.find_first(&SELECTORS.detail_label) else {
            continue;
        };
        if query::raw_text(label).contains(AVAILABILITY_LABEL) {
            return detail
                .find_first(&SELECTORS.detail_data)
                .map(query::stripped_text)
                .unwrap_or_default();
        }
    }
    String::new()
}

/// Builds the SAML deep link for a content URL carrying a hex `id=` token.
/// Anything else gives an empty string.
pub fn share_link_for(url: &str, deep_link_host: &str) -> String {
    match ID_RE.captures(url).and_then(|caps| caps.get(1)) {
        Some(token) => format!(
            "https://{}/webclass/login.php?id={}&page=1&auth_mode=SAML",
            deep_link_host,
            token.as_str()
        ),
        None => String::new(),
    }
}

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

use crate::parser::query::{self, NodeQuery};

static SCRIPT: LazyLock<Selector> = LazyLock::new(|| Selector::parse("script").unwrap());

static REDIRECT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"window\.location\.href\s*=\s*"([^"]+)""#).unwrap());

/// Returns the target of a `window.location.href = "..."` assignment.
/// Only the first `<script>` element of the page is inspected.
pub fn find_redirect_target(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let script = (&document).find_first(&SCRIPT)?;
    REDIRECT_RE
        .captures(&query::raw_text(script))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

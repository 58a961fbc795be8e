use scraper::{ElementRef, Html, Selector};

/// First-match / all-matches lookups shared by every extraction step.
pub trait NodeQuery<'a> {
    fn find_first(&self, selector: &Selector) -> Option<ElementRef<'a>>;
    fn find_all(&self, selector: &Selector) -> Vec<ElementRef<'a>>;
}

impl<'a> NodeQuery<'a> for ElementRef<'a> {
    fn find_first(&self, selector: &Selector) -> Option<ElementRef<'a>> {
        self.select(selector).next()
    }

    fn find_all(&self, selector: &Selector) -> Vec<ElementRef<'a>> {
        self.select(selector).collect()
    }
}

impl<'a> NodeQuery<'a> for &'a Html {
    fn find_first(&self, selector: &Selector) -> Option<ElementRef<'a>> {
        let document: &'a Html = *self;
        document.select(selector).next()
    }

    fn find_all(&self, selector: &Selector) -> Vec<ElementRef<'a>> {
        let document: &'a Html = *self;
        document.select(selector).collect()
    }
}

/// Text of every descendant text node, each trimmed, empty pieces dropped,
/// then concatenated.
pub fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Like [`stripped_text`], skipping text that sits inside any element
/// matching `excluded`.
pub fn stripped_text_excluding(element: ElementRef<'_>, excluded: &Selector) -> String {
    let root = element.id();
    element
        .descendants()
        .filter_map(|node| node.value().as_text().map(|text| (node, text)))
        .filter(|(node, _)| {
            !node
                .ancestors()
                .take_while(|ancestor| ancestor.id() != root)
                .filter_map(ElementRef::wrap)
                .any(|ancestor| excluded.matches(&ancestor))
        })
        .map(|(_, text)| text.trim())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Raw, untrimmed text content.
pub fn raw_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

pub fn attr(element: ElementRef<'_>, name: &str) -> String {
    element.value().attr(name).unwrap_or_default().to_string()
}

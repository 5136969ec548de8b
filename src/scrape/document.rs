//! Thin layer over `scraper::Html` with the few traversal moves the
//! locators need: find by text, walk up to an ancestor, step to a sibling.

use scraper::{ElementRef, Html, Selector};

use crate::error::ScrapeError;

/// One fetched page, parsed once and read by a single stage.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(body: &str) -> Self {
        Document {
            html: Html::parse_document(body),
        }
    }

    /// All elements matching `css`, in document order.
    pub fn select(&self, css: &str) -> Result<Vec<ElementRef<'_>>, ScrapeError> {
        let selector = selector(css)?;
        Ok(self.html.select(&selector).collect())
    }

    /// First element matching `css` whose text contains `needle`.
    pub fn find_containing(
        &self,
        css: &str,
        needle: &str,
    ) -> Result<Option<ElementRef<'_>>, ScrapeError> {
        let selector = selector(css)?;
        Ok(self
            .html
            .select(&selector)
            .find(|el| text_of(*el).contains(needle)))
    }
}

pub fn selector(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector(format!("{css}: {e:?}")))
}

/// Concatenated descendant text, trimmed.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

pub fn has_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

/// Nearest ancestor element satisfying `pred` (the element itself excluded).
pub fn enclosing<'a>(
    el: ElementRef<'a>,
    pred: impl Fn(ElementRef<'a>) -> bool,
) -> Option<ElementRef<'a>> {
    el.ancestors().filter_map(ElementRef::wrap).find(|a| pred(*a))
}

/// Nearest enclosing `<a>`.
pub fn enclosing_link(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    enclosing(el, |a| a.value().name() == "a")
}

/// First following sibling element named `tag`.
pub fn next_sibling_named<'a>(el: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    el.next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|s| s.value().name() == tag)
}

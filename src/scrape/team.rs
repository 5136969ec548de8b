use tracing::debug;

use super::document::{enclosing_link, text_of, Document};
use crate::error::{ElementNotFound, ScrapeError};

/// Find the href of the link wrapping the first `<span>` whose text contains
/// `label`. The returned value is the raw attribute, usually a relative path.
pub fn locate_team_page(club: &Document, label: &str) -> Result<String, ScrapeError> {
    let span = club
        .find_containing("span", label)?
        .ok_or_else(|| ElementNotFound::TeamLabel(label.to_string()))?;

    let link = enclosing_link(span).ok_or(ElementNotFound::TeamLink)?;
    let href = link
        .value()
        .attr("href")
        .ok_or(ElementNotFound::TeamLink)?;

    debug!("Label '{}' links to {}", text_of(span), href);
    Ok(href.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_inside_link() {
        let doc = Document::parse(include_str!("../../fixtures/club.html"));
        let href = locate_team_page(&doc, "U18 2").unwrap();
        assert_eq!(href, "/equipes/bresse-tonic-foot/u18-2-1187");
    }

    #[test]
    fn test_first_match_wins() {
        let doc = Document::parse(concat!(
            r#"<a href="/first"><span>U18 2 A</span></a>"#,
            r#"<a href="/second"><span>U18 2 B</span></a>"#,
        ));
        assert_eq!(locate_team_page(&doc, "U18 2").unwrap(), "/first");
    }

    #[test]
    fn test_missing_label() {
        let doc = Document::parse(r#"<a href="/u17"><span>U17 1</span></a>"#);
        let err = locate_team_page(&doc, "U18 2").unwrap_err();
        assert!(matches!(
            err,
            ScrapeError::ElementNotFound(ElementNotFound::TeamLabel(ref l)) if l == "U18 2"
        ));
    }

    #[test]
    fn test_label_without_link() {
        let doc = Document::parse(r#"<div><span>U18 2</span></div>"#);
        let err = locate_team_page(&doc, "U18 2").unwrap_err();
        assert!(matches!(
            err,
            ScrapeError::ElementNotFound(ElementNotFound::TeamLink)
        ));
    }

    #[test]
    fn test_link_without_href() {
        let doc = Document::parse(r#"<a name="anchor"><span>U18 2</span></a>"#);
        let err = locate_team_page(&doc, "U18 2").unwrap_err();
        assert!(matches!(
            err,
            ScrapeError::ElementNotFound(ElementNotFound::TeamLink)
        ));
    }
}

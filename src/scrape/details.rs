//! Match-page extraction strategies.
//!
//! The club site has shipped two layouts for the match page. Each one is a
//! [`DetailStrategy`]; [`DetailLayout::Auto`] probes them in order and uses
//! the first that recognises the page.
//!
//! ```text
//!  bordered card                          stade paragraph
//!  div.border-primary                     p  "STADE ..."        -> venue
//!    p.font-bold        -> venue          div
//!    img[alt=horloge]                       p "date - heure"    -> date/time
//!    p "date - heure"   -> date/time      ...
//!    p "... ROUTE DE .." -> address       p "... ROUTE ..."     -> address
//! ```

use clap::ValueEnum;
use scraper::ElementRef;
use tracing::debug;

use super::document::{next_sibling_named, selector, text_of, Document};
use crate::error::{ElementNotFound, ScrapeError};
use crate::models::{MatchDetails, ADDRESS_NOT_FOUND, TIME_NOT_SPECIFIED};

/// Separator between date and time in the schedule line.
const SCHEDULE_SEPARATOR: &str = " - ";

/// One way of reading venue, schedule and address off a match page.
pub trait DetailStrategy: Send + Sync {
    /// Short name for logging.
    fn name(&self) -> &'static str;

    /// Whether the page looks like this strategy's layout.
    fn probe(&self, page: &Document) -> bool;

    fn venue(&self, page: &Document) -> Result<String, ScrapeError>;

    /// Raw "date - time" text.
    fn schedule(&self, page: &Document) -> Result<String, ScrapeError>;

    /// `None` when the page has no address line.
    fn address(&self, page: &Document) -> Result<Option<String>, ScrapeError>;

    fn extract(&self, page: &Document) -> Result<MatchDetails, ScrapeError> {
        let venue = self.venue(page)?;
        let (date, time) = split_schedule(&self.schedule(page)?);
        let address = self
            .address(page)?
            .unwrap_or_else(|| ADDRESS_NOT_FOUND.to_string());
        Ok(MatchDetails {
            venue,
            date,
            time,
            address,
        })
    }
}

/// Split `"Samedi 14 Novembre - 15h00"` into date and time. Without a
/// separator the whole text is the date and the time is a placeholder.
pub fn split_schedule(text: &str) -> (String, String) {
    let mut parts = text.split(SCHEDULE_SEPARATOR);
    let date = parts.next().unwrap_or_default().trim().to_string();
    let time = parts
        .next()
        .map(|t| t.trim().to_string())
        .unwrap_or_else(|| TIME_NOT_SPECIFIED.to_string());
    (date, time)
}

// ── Bordered card ─────────────────────────────────────────────────────────────

/// Current layout: everything sits in a `div.border-primary` card.
pub struct BorderedCard;

impl BorderedCard {
    const CONTAINER: &'static str = "div.border-primary";

    fn container<'a>(&self, page: &'a Document) -> Result<ElementRef<'a>, ScrapeError> {
        page.select(Self::CONTAINER)?
            .into_iter()
            .next()
            .ok_or_else(|| ElementNotFound::InfoBlock.into())
    }
}

impl DetailStrategy for BorderedCard {
    fn name(&self) -> &'static str {
        "bordered-card"
    }

    fn probe(&self, page: &Document) -> bool {
        self.container(page).is_ok()
    }

    fn venue(&self, page: &Document) -> Result<String, ScrapeError> {
        let bold = selector("p.font-bold")?;
        self.container(page)?
            .select(&bold)
            .next()
            .map(text_of)
            .ok_or_else(|| ElementNotFound::Venue.into())
    }

    fn schedule(&self, page: &Document) -> Result<String, ScrapeError> {
        let clock = selector(r#"img[alt="horloge"]"#)?;
        self.container(page)?
            .select(&clock)
            .next()
            .and_then(|img| next_sibling_named(img, "p"))
            .map(text_of)
            .ok_or_else(|| ElementNotFound::Schedule.into())
    }

    fn address(&self, page: &Document) -> Result<Option<String>, ScrapeError> {
        let paragraph = selector("p")?;
        Ok(self
            .container(page)?
            .select(&paragraph)
            .map(text_of)
            .find(|t| t.contains("ROUTE DE")))
    }
}

// ── Stade paragraph ───────────────────────────────────────────────────────────

/// Older layout: a bare "STADE ..." paragraph followed by a block holding the
/// schedule. The address is searched across the whole page.
pub struct StadeParagraph;

impl StadeParagraph {
    fn venue_paragraph<'a>(&self, page: &'a Document) -> Result<ElementRef<'a>, ScrapeError> {
        page.find_containing("p", "STADE")?
            .ok_or_else(|| ElementNotFound::InfoBlock.into())
    }
}

impl DetailStrategy for StadeParagraph {
    fn name(&self) -> &'static str {
        "stade-paragraph"
    }

    fn probe(&self, page: &Document) -> bool {
        self.venue_paragraph(page).is_ok()
    }

    fn venue(&self, page: &Document) -> Result<String, ScrapeError> {
        self.venue_paragraph(page).map(text_of)
    }

    fn schedule(&self, page: &Document) -> Result<String, ScrapeError> {
        let paragraph = selector("p")?;
        next_sibling_named(self.venue_paragraph(page)?, "div")
            .and_then(|block| block.select(&paragraph).next())
            .map(text_of)
            .ok_or_else(|| ElementNotFound::Schedule.into())
    }

    fn address(&self, page: &Document) -> Result<Option<String>, ScrapeError> {
        Ok(page.find_containing("p", "ROUTE")?.map(text_of))
    }
}

// ── Selection ─────────────────────────────────────────────────────────────────

/// Which match-page layout to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DetailLayout {
    /// Probe the page and use the first layout that fits
    #[default]
    Auto,
    BorderedCard,
    StadeParagraph,
}

/// Probe order for [`DetailLayout::Auto`]. The bordered card is the more
/// specific marker, so it goes first.
fn strategies() -> [&'static dyn DetailStrategy; 2] {
    [&BorderedCard, &StadeParagraph]
}

pub fn extract_details(page: &Document, layout: DetailLayout) -> Result<MatchDetails, ScrapeError> {
    let strategy: &dyn DetailStrategy = match layout {
        DetailLayout::BorderedCard => &BorderedCard,
        DetailLayout::StadeParagraph => &StadeParagraph,
        DetailLayout::Auto => strategies()
            .into_iter()
            .find(|s| s.probe(page))
            .ok_or(ElementNotFound::InfoBlock)?,
    };
    debug!("Reading match page with the {} layout", strategy.name());
    strategy.extract(page)
}

use clap::ValueEnum;
use tracing::debug;

use super::document::{enclosing, enclosing_link, has_class, selector, text_of, Document};
use crate::error::{ElementNotFound, ScrapeError};

const HEADING: &str = "Prochain Match";
const TEAM_NAME_SELECTOR: &str = "span.font-extrabold";

/// How the "Prochain Match" heading text is compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum HeadingMatch {
    /// Trimmed text must equal the heading exactly
    Exact,
    /// Trimmed text must contain the heading
    #[default]
    Contains,
}

impl HeadingMatch {
    fn matches(self, text: &str) -> bool {
        match self {
            HeadingMatch::Exact => text == HEADING,
            HeadingMatch::Contains => text.contains(HEADING),
        }
    }
}

/// Next-match card as shown on the team page, before the detail page is fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchPreview {
    /// Raw href of the card link
    pub href: String,
    pub home_team: String,
    pub away_team: String,
}

/// Find the next-match card on a team page.
///
/// The link comes from the `<a>` wrapping the heading. Team names are the
/// first two `span.font-extrabold` inside the nearest `.card` ancestor of the
/// heading, or inside the link when no card wraps it.
pub fn locate_next_match(team: &Document, rule: HeadingMatch) -> Result<MatchPreview, ScrapeError> {
    let heading = team
        .select("h2")?
        .into_iter()
        .find(|h| rule.matches(&text_of(*h)))
        .ok_or(ElementNotFound::NextMatchHeading)?;

    let link = enclosing_link(heading).ok_or(ElementNotFound::MatchLink)?;
    let href = link
        .value()
        .attr("href")
        .ok_or(ElementNotFound::MatchLink)?;

    let block = enclosing(heading, |a| has_class(a, "card")).unwrap_or(link);
    let names_selector = selector(TEAM_NAME_SELECTOR)?;
    let names: Vec<String> = block.select(&names_selector).map(text_of).collect();

    let [home_team, away_team, ..] = names.as_slice() else {
        return Err(ElementNotFound::TeamNames.into());
    };
    debug!("Preview block lists {} team names", names.len());

    Ok(MatchPreview {
        href: href.to_string(),
        home_team: home_team.clone(),
        away_team: away_team.clone(),
    })
}

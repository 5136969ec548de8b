use std::sync::Arc;
use tracing::{info, warn};
use url::Url;

use crate::config::Config;
use crate::error::ScrapeError;
use crate::models::{MatchDetails, MatchReference};
use crate::notify::NotificationMessage;
use crate::scrape::{
    extract_details, locate_next_match, locate_team_page, DetailLayout, Document, HeadingMatch,
    PageFetcher,
};

/// What to scrape and how to read it.
#[derive(Debug, Clone)]
pub struct Target {
    /// Site root; parsed when the run starts so a bad value surfaces as a diagnostic
    pub base_url: String,
    pub club_path: String,
    pub team_label: String,
    pub heading_match: HeadingMatch,
    pub detail_layout: DetailLayout,
}

impl From<&Config> for Target {
    fn from(config: &Config) -> Self {
        Target {
            base_url: config.base_url.clone(),
            club_path: config.club_path.clone(),
            team_label: config.team_label.clone(),
            heading_match: config.heading_match,
            detail_layout: config.detail_layout,
        }
    }
}

/// club page → team page → match page, one fetch after the other.
pub struct Pipeline {
    fetcher: Arc<dyn PageFetcher>,
    target: Target,
}

impl Pipeline {
    pub fn new(fetcher: Arc<dyn PageFetcher>, target: Target) -> Self {
        Pipeline { fetcher, target }
    }

    async fn fetch(&self, url: &Url) -> Result<String, ScrapeError> {
        Ok(self.fetcher.fetch(url).await?)
    }

    /// Walk the three pages. Each parsed document is dropped before the next
    /// fetch starts.
    pub async fn run(&self) -> Result<(MatchReference, MatchDetails), ScrapeError> {
        let base = Url::parse(&self.target.base_url)?;

        let club_url = base.join(&self.target.club_path)?;
        info!("Step 1: looking for team '{}' on {}", self.target.team_label, club_url);
        let body = self.fetch(&club_url).await?;
        let team_href = locate_team_page(&Document::parse(&body), &self.target.team_label)?;
        let team_page_url = base.join(&team_href)?;
        info!("Team page found: {}", team_page_url);

        info!("Step 2: looking for the next match via {}", self.fetcher.name());
        let body = self.fetch(&team_page_url).await?;
        let preview = locate_next_match(&Document::parse(&body), self.target.heading_match)?;
        let match_detail_url = base.join(&preview.href)?;
        info!(
            "Teams found: {} vs {} ({})",
            preview.home_team, preview.away_team, match_detail_url
        );

        info!("Step 3: reading match details");
        let body = self.fetch(&match_detail_url).await?;
        let details = extract_details(&Document::parse(&body), self.target.detail_layout)?;
        info!(
            "Match on {} at {}, {}",
            details.date, details.time, details.venue
        );

        Ok((
            MatchReference {
                team_page_url: team_page_url.to_string(),
                match_detail_url: match_detail_url.to_string(),
                home_team: preview.home_team,
                away_team: preview.away_team,
            },
            details,
        ))
    }

    /// Run once and turn the outcome into the text to deliver.
    pub async fn next_match_message(&self) -> NotificationMessage {
        let outcome = self.run().await;
        match &outcome {
            Ok((reference, _)) => info!(
                "Announcing {} (found via {})",
                reference.match_detail_url, reference.team_page_url
            ),
            Err(e) => warn!("Scrape stopped early: {}", e),
        }
        NotificationMessage::from_outcome(&outcome)
    }
}

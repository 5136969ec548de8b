pub mod details;
pub mod document;
pub mod fetcher;
pub mod next_match;
pub mod team;

pub use details::{extract_details, DetailLayout};
pub use document::Document;
pub use fetcher::{HttpFetcher, PageFetcher};
pub use next_match::{locate_next_match, HeadingMatch};
pub use team::locate_team_page;

use reqwest::StatusCode;
use thiserror::Error;

/// A page could not be retrieved.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("{url} : {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} a répondu {status}")]
    Status { url: String, status: StatusCode },
}

/// An expected structural element is absent from a scraped page.
///
/// The `Display` output is the diagnostic sent to the chat in place of the
/// match details.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ElementNotFound {
    #[error("Impossible de trouver l'équipe '{0}' sur la page du club.")]
    TeamLabel(String),

    #[error("Lien vers la page de l'équipe introuvable.")]
    TeamLink,

    /// No "Prochain Match" heading: nothing is scheduled right now.
    #[error("Aucun prochain match trouvé sur la page de l'équipe pour le moment.")]
    NextMatchHeading,

    #[error("Lien vers la page du match introuvable.")]
    MatchLink,

    #[error("Noms des équipes introuvables sur la page de l'équipe.")]
    TeamNames,

    #[error("Bloc d'informations détaillé introuvable sur la page du match.")]
    InfoBlock,

    #[error("Nom du stade introuvable sur la page du match.")]
    Venue,

    #[error("Date et heure du match introuvables sur la page du match.")]
    Schedule,
}

/// Anything that stops a scraping run before a match message can be built.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Erreur de réseau ou de page : {0}")]
    Network(#[from] NetworkError),

    #[error(transparent)]
    ElementNotFound(#[from] ElementNotFound),

    #[error("URL invalide : {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Sélecteur invalide : {0}")]
    Selector(String),
}

/// The messaging API call failed.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Telegram API error {status}: {description}")]
    Api {
        status: StatusCode,
        description: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_not_found_is_rendered_verbatim() {
        let err = ScrapeError::from(ElementNotFound::NextMatchHeading);
        assert_eq!(
            err.to_string(),
            "Aucun prochain match trouvé sur la page de l'équipe pour le moment."
        );
    }

    #[test]
    fn test_team_label_names_the_label() {
        let err = ElementNotFound::TeamLabel("U18 2".into());
        assert_eq!(
            err.to_string(),
            "Impossible de trouver l'équipe 'U18 2' sur la page du club."
        );
    }

    #[test]
    fn test_network_status_prefix() {
        let err = ScrapeError::from(NetworkError::Status {
            url: "https://example.org/clubs/x".into(),
            status: StatusCode::NOT_FOUND,
        });
        assert_eq!(
            err.to_string(),
            "Erreur de réseau ou de page : https://example.org/clubs/x a répondu 404 Not Found"
        );
    }
}

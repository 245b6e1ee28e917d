use thiserror::Error;

#[derive(Debug, Error)]
pub enum GamethreadError {
    #[error("Please select a team.")]
    NoTeamSelected,

    #[error("These teams don't seem to be playing each other tonight.")]
    NotPlayingTonight,

    #[error("It looks like you reversed the home and the away team.")]
    ReversedTeams,

    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    UpstreamStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("HTML parsing failed: {0}")]
    HtmlParse(String),

    #[error("Parsing error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),
}

impl GamethreadError {
    /// Conditions the user caused or can act on. Their `Display` text is the
    /// message shown in the form; everything else is a fault on our side.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            GamethreadError::NoTeamSelected
                | GamethreadError::NotPlayingTonight
                | GamethreadError::ReversedTeams
        )
    }
}

pub type GamethreadResult<T> = Result<T, GamethreadError>;

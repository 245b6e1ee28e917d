use common::{Config, GamethreadResult};
use gamethread::{GameInfoResolver, Roster};

pub struct AppState {
    pub roster: Roster,
    pub resolver: GameInfoResolver,
    /// Faults are reported and answered with an apology instead of a 500.
    pub report_errors: bool,
}

impl AppState {
    pub fn new(roster: Roster, resolver: GameInfoResolver, report_errors: bool) -> Self {
        Self {
            roster,
            resolver,
            report_errors,
        }
    }

    pub fn from_config(config: &Config) -> GamethreadResult<Self> {
        Ok(Self::new(
            Roster::mls(),
            GameInfoResolver::from_config(config)?,
            config.reports_errors(),
        ))
    }
}

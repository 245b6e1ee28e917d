use chrono::NaiveDate;
use common::{Config, GamethreadError, GamethreadResult, PageFetcher};
use tracing::{info, warn};

use crate::espn::parse_subtitle_record;
use crate::matchcenter::{is_missing_page, matchcenter_url, parse_game_info, parse_records};
use crate::models::{Gamethread, MatchInfo, Record};
use crate::render::{render_body, render_title};
use crate::teams::Team;

/// Turns a home/away pair and a date into match details. Fetches run one
/// after another; the matchcenter page is requested twice and each team
/// page at most once.
#[derive(Clone)]
pub struct GameInfoResolver {
    fetcher: PageFetcher,
    matchcenter_base_url: String,
}

impl GameInfoResolver {
    pub fn new(fetcher: PageFetcher, matchcenter_base_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            matchcenter_base_url: matchcenter_base_url.into(),
        }
    }

    pub fn from_config(config: &Config) -> GamethreadResult<Self> {
        let fetcher = PageFetcher::new(&config.user_agent)?;
        Ok(Self::new(fetcher, config.matchcenter_base_url.clone()))
    }

    pub async fn resolve(
        &self,
        home: &Team,
        away: &Team,
        date: NaiveDate,
    ) -> GamethreadResult<MatchInfo> {
        let url = matchcenter_url(&self.matchcenter_base_url, date, away, home);

        let page = self.fetcher.fetch(&url).await?;
        if is_missing_page(page.status, &page.body) {
            info!("No fixture for {} at {} on {}", away.name, home.name, date);
            return Err(GamethreadError::NotPlayingTonight);
        }
        if page.status.is_client_error() || page.status.is_server_error() {
            return Err(GamethreadError::UpstreamStatus {
                url,
                status: page.status,
            });
        }

        let game = parse_game_info(&page.body)?;
        let (away_found, home_found) = parse_records(&page.body)?;

        let home_record = match home_found {
            Some(record) => record,
            None => self.fallback_record(home).await?,
        };
        let away_record = match away_found {
            Some(record) => record,
            None => self.fallback_record(away).await?,
        };

        self.fetcher.probe_without_redirect(&url).await?;

        info!(
            "Resolved {} ({}) at {} ({}), {} ET at {}",
            away.name, away_record, home.name, home_record, game.kickoff.eastern, game.stadium
        );

        Ok(MatchInfo {
            home: home.clone(),
            away: away.clone(),
            kickoff: game.kickoff,
            stadium: game.stadium,
            home_record,
            away_record,
            matchcenter_url: url,
        })
    }

    pub async fn generate(
        &self,
        home: &Team,
        away: &Team,
        date: NaiveDate,
        host: &str,
    ) -> GamethreadResult<Gamethread> {
        let info = self.resolve(home, away, date).await?;
        Ok(Gamethread {
            title: render_title(&info, date),
            body: render_body(&info, host),
        })
    }

    async fn fallback_record(&self, team: &Team) -> GamethreadResult<Record> {
        warn!(
            "No record for {} on the matchcenter page; trying {}",
            team.name, team.record_url
        );
        let html = self.fetcher.fetch_ok(&team.record_url).await?;
        parse_subtitle_record(&html)
    }
}

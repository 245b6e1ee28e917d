use std::sync::LazyLock;

use chrono::NaiveDate;
use common::{GamethreadError, GamethreadResult};
use regex::Regex;
use reqwest::StatusCode;
use scraper::{Html, Selector};

use crate::kickoff::{parse_wall_clock, KickoffTimes};
use crate::models::{GameInfo, Record};
use crate::teams::Team;

const MATCHCENTER_URL_FORMAT: &str = "{base}/matchcenter/{date}-{away}-vs-{home}/feed";
const NOT_FOUND_MARKER: &str = "Sorry, Page Not Found";

const GAME_TIME_SELECTOR: &str = "#mlsGIStation .mlsGITime";
const TEAM_STATS_SELECTOR: &str = "#mlsGITeamStats thead th";

// "(12-8)" or "(12-8-3)"; draws are ignored.
static RECORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\((?P<wins>\d+)-(?P<losses>\d+)(?:-\d+)?\)").expect("record regex is valid")
});

/// URL of the matchcenter page for `date`. The away slug comes first.
pub fn matchcenter_url(base: &str, date: NaiveDate, away: &Team, home: &Team) -> String {
    MATCHCENTER_URL_FORMAT
        .replace("{base}", base.trim_end_matches('/'))
        .replace("{date}", &date.format("%Y-%m-%d").to_string())
        .replace("{away}", &away.slug)
        .replace("{home}", &home.slug)
}

/// The matchcenter serves a soft 404 for fixtures that don't exist.
pub fn is_missing_page(status: StatusCode, body: &str) -> bool {
    status == StatusCode::NOT_FOUND || body.contains(NOT_FOUND_MARKER)
}

fn selector(css: &str) -> GamethreadResult<Selector> {
    Selector::parse(css)
        .map_err(|e| GamethreadError::HtmlParse(format!("Failed to parse selector {}: {}", css, e)))
}

fn squash_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Reads the "time - stadium" block. The page leaves it out when home and
/// away are swapped relative to the URL.
pub fn parse_game_info(html: &str) -> GamethreadResult<GameInfo> {
    let document = Html::parse_document(html);
    let time_selector = selector(GAME_TIME_SELECTOR)?;

    let info = document
        .select(&time_selector)
        .map(|el| squash_whitespace(&el.text().collect::<String>()))
        .collect::<Vec<_>>()
        .join(" ");
    if info.is_empty() {
        return Err(GamethreadError::ReversedTeams);
    }

    let (gametime, stadium) = info.split_once('-').ok_or_else(|| {
        GamethreadError::HtmlParse(format!("kickoff block has no stadium: {:?}", info))
    })?;
    let kickoff = KickoffTimes::from_eastern(parse_wall_clock(gametime.trim())?)?;

    Ok(GameInfo {
        kickoff,
        stadium: stadium.trim().to_string(),
    })
}

/// Finds "(wins-losses)" anywhere in `text`.
pub fn extract_record(text: &str) -> Option<Record> {
    RECORD_PATTERN
        .captures(text)
        .map(|caps| Record::new(&caps["wins"], &caps["losses"]))
}

/// Records from the team stats header, as `(away, home)`. Only a header
/// with exactly two cells is trusted.
pub fn parse_records(html: &str) -> GamethreadResult<(Option<Record>, Option<Record>)> {
    let document = Html::parse_document(html);
    let stats_selector = selector(TEAM_STATS_SELECTOR)?;

    let cells: Vec<String> = document
        .select(&stats_selector)
        .map(|el| el.text().collect::<String>())
        .collect();

    match cells.as_slice() {
        [away, home] => Ok((extract_record(away), extract_record(home))),
        _ => Ok((None, None)),
    }
}

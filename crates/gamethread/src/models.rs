use std::fmt;

use serde::Serialize;

use crate::kickoff::KickoffTimes;
use crate::teams::Team;

/// A season record as scraped. The matchcenter page yields exactly
/// wins and losses; the fallback page is split verbatim and may carry a
/// third (draws) part or garbage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    parts: Vec<String>,
}

impl Record {
    pub fn new(wins: impl Into<String>, losses: impl Into<String>) -> Self {
        Self {
            parts: vec![wins.into(), losses.into()],
        }
    }

    pub fn from_parts(parts: Vec<String>) -> Self {
        Self { parts }
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn wins(&self) -> Option<&str> {
        self.parts.first().map(String::as_str)
    }

    pub fn losses(&self) -> Option<&str> {
        self.parts.get(1).map(String::as_str)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.parts.join("-"))
    }
}

/// Kickoff and venue read from the matchcenter page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameInfo {
    pub kickoff: KickoffTimes,
    pub stadium: String,
}

#[derive(Debug, Clone)]
pub struct MatchInfo {
    pub home: Team,
    pub away: Team,
    pub kickoff: KickoffTimes,
    pub stadium: String,
    pub home_record: Record,
    pub away_record: Record,
    pub matchcenter_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gamethread {
    pub title: String,
    pub body: String,
}

use common::{GamethreadError, GamethreadResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub name: String,
    /// Slug used in matchcenter URLs, e.g. `fc-dallas`.
    pub slug: String,
    pub shortcode: String,
    pub subreddit: String,
    /// Page carrying the team's season record, used when the matchcenter
    /// page has none.
    pub record_url: String,
}

impl Team {
    pub fn new(
        name: impl Into<String>,
        slug: impl Into<String>,
        shortcode: impl Into<String>,
        subreddit: impl Into<String>,
        record_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            shortcode: shortcode.into(),
            subreddit: subreddit.into(),
            record_url: record_url.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Division {
    pub name: String,
    pub teams: Vec<Team>,
}

/// The league table. Built once at startup and only read afterwards.
#[derive(Debug, Clone)]
pub struct Roster {
    divisions: Vec<Division>,
}

// (name, slug, shortcode, subreddit, record page)
type TeamRow = (&'static str, &'static str, &'static str, &'static str, &'static str);

const WEST: &[TeamRow] = &[
    ("Colorado Rapids", "colorado-rapids", "COL", "rapids", "http://www.espnfc.us/club/colorado-rapids/184/index"),
    ("FC Dallas", "fc-dallas", "DAL", "FCDallas", "http://www.espnfc.com/club/fc-dallas/185/index"),
    ("Houston Dynamo", "houston-dynamo", "HOU", "dynamo", "http://www.espnfc.com/club/houston-dynamo/6077/index"),
    ("LA Galaxy", "la-galaxy", "LA", "LAGalaxy", "http://www.espnfc.com/club/la-galaxy/187/index"),
    ("Minnesota United FC", "minnesota-united-fc", "MNU", "minnesotaunited", "http://www.espnfc.com/club/minnesota-united-fc/17362/index"),
    ("Portland Timbers", "portland-timbers", "POR", "timbers", "http://www.espnfc.com/club/portland-timbers/9723/index"),
    ("Real Salt Lake", "real-salt-lake", "RSL", "realsaltlake", "http://www.espnfc.com/club/real-salt-lake/4771/index"),
    ("San Jose Earthquakes", "san-jose-earthquakes", "SJ", "SJEarthquakes", "http://www.espnfc.com/club/san-jose-earthquakes/191/index"),
    ("Seattle Sounders FC", "seattle-sounders-fc", "SEA", "SoundersFC", "http://www.espnfc.com/club/seattle-sounders-fc/9726/index"),
    ("Sporting Kansas City", "sporting-kansas-city", "SKC", "sportingkc", "http://www.espnfc.com/club/sporting-kansas-city/186/index"),
    ("Vancouver Whitecaps FC", "vancouver-whitecaps-fc", "VAN", "whitecapsfc", "http://www.espnfc.com/club/vancouver-whitecaps/9727/index"),
];

const EAST: &[TeamRow] = &[
    ("Atlanta United FC", "atlanta-united-fc", "ATL", "AtlantaUnited", "http://www.espnfc.com/club/atlanta-united-fc/18418/index"),
    ("Chicago Fire", "chicago-fire", "CHI", "chicagofire", "http://www.espnfc.com/club/chicago-fire/182/index"),
    ("Columbus Crew SC", "columbus-crew-sc", "CLB", "TheMassive", "http://www.espnfc.com/club/columbus-crew-sc/183/index"),
    ("D.C. United", "dc-united", "DC", "DCUnited", "http://www.espnfc.com/club/dc-united/193/index"),
    ("Montreal Impact", "montreal-impact", "MTL", "montrealimpact", "http://www.espnfc.com/club/montreal-impact/9720/index"),
    ("New England Revolution", "new-england-revolution", "NE", "NewEnglandRevolution", "http://www.espnfc.com/club/new-england-revolution/189/index"),
    ("New York City FC", "new-york-city-fc", "NYC", "NYCFC", "http://www.espnfc.com/club/new-york-city-fc/17606/index"),
    ("New York Red Bulls", "new-york-red-bulls", "NY", "rbny", "http://www.espnfc.com/club/new-york-red-bulls/190/index"),
    ("Orlando City SC", "orlando-city-sc", "ORL", "OCLions", "http://www.espnfc.com/club/orlando-city-sc/12011/index"),
    ("Philadelphia Union", "philadelphia-union", "PHI", "PhillyUnion", "http://www.espnfc.com/club/philadelphia-union/10739/index"),
    ("Toronto FC", "toronto-fc", "TOR", "TFC", "http://www.espnfc.com/club/toronto-fc/7318/index"),
];

fn division(name: &str, rows: &[TeamRow]) -> Division {
    Division {
        name: name.to_string(),
        teams: rows
            .iter()
            .map(|&(name, slug, shortcode, subreddit, record_url)| {
                Team::new(name, slug, shortcode, subreddit, record_url)
            })
            .collect(),
    }
}

impl Roster {
    pub fn new(divisions: Vec<Division>) -> Self {
        Self { divisions }
    }

    pub fn mls() -> Self {
        Self::new(vec![division("West", WEST), division("East", EAST)])
    }

    pub fn divisions(&self) -> &[Division] {
        &self.divisions
    }

    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        self.divisions.iter().flat_map(|d| d.teams.iter())
    }

    /// Looks a team up by the shortcode submitted from the form. Anything
    /// not in the table means the user left a selection empty.
    pub fn team(&self, shortcode: &str) -> GamethreadResult<&Team> {
        self.teams()
            .find(|team| team.shortcode == shortcode)
            .ok_or(GamethreadError::NoTeamSelected)
    }
}

use chrono::NaiveDate;

use crate::models::MatchInfo;

const TITLE_FORMAT: &str =
    "Match Thread: {away} ({away_record}) at {home} ({home_record}) [{date}]";

const BODY_FORMAT: &str = "\
##[{away}](/r/{away_subreddit}) ({away_record}) at [{home}](/r/{home_subreddit}) ({home_record})

**Venue:** {stadium}

| Eastern | Central | Mountain | Pacific |
|:-------:|:-------:|:--------:|:-------:|
| {eastern} | {central} | {mountain} | {pacific} |

[MLS Matchcenter]({matchcenter_url})

[Live comment stream](http://{host}/reddit-stream/)
";

pub fn render_title(info: &MatchInfo, date: NaiveDate) -> String {
    TITLE_FORMAT
        .replace("{away}", &info.away.name)
        .replace("{away_record}", &info.away_record.to_string())
        .replace("{home}", &info.home.name)
        .replace("{home_record}", &info.home_record.to_string())
        .replace("{date}", &date.format("%m/%d/%Y").to_string())
}

pub fn render_body(info: &MatchInfo, host: &str) -> String {
    BODY_FORMAT
        .replace("{away}", &info.away.name)
        .replace("{away_subreddit}", &info.away.subreddit)
        .replace("{away_record}", &info.away_record.to_string())
        .replace("{home}", &info.home.name)
        .replace("{home_subreddit}", &info.home.subreddit)
        .replace("{home_record}", &info.home_record.to_string())
        .replace("{stadium}", &info.stadium)
        .replace("{eastern}", &info.kickoff.eastern)
        .replace("{central}", &info.kickoff.central)
        .replace("{mountain}", &info.kickoff.mountain)
        .replace("{pacific}", &info.kickoff.pacific)
        .replace("{matchcenter_url}", &info.matchcenter_url)
        .replace("{host}", host)
}

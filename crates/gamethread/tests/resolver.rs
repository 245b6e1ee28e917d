//! Resolver tests against a mock matchcenter and mock team record pages.

use chrono::NaiveDate;
use common::{GamethreadError, PageFetcher};
use gamethread::{GameInfoResolver, Record, Team};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FEED_PATH: &str = "/matchcenter/2017-03-11-fc-dallas-vs-la-galaxy/feed";

const FULL_PAGE: &str = r#"
<html><body>
  <div id="mlsGIStation"><span class="mlsGITime">10:30 PM ET - StubHub Center</span></div>
  <table id="mlsGITeamStats">
    <thead><tr><th>FC Dallas (3-1)</th><th>LA Galaxy (2-2)</th></tr></thead>
  </table>
</body></html>
"#;

const PAGE_WITHOUT_HOME_RECORD: &str = r#"
<html><body>
  <div id="mlsGIStation"><span class="mlsGITime">8:00 PM ET - StubHub Center</span></div>
  <table id="mlsGITeamStats">
    <thead><tr><th>FC Dallas (3-1)</th><th>LA Galaxy</th></tr></thead>
  </table>
</body></html>
"#;

const PAGE_WITHOUT_STATS: &str = r#"
<html><body>
  <div id="mlsGIStation"><span class="mlsGITime">8:00 PM ET - StubHub Center</span></div>
</body></html>
"#;

const REVERSED_PAGE: &str = r#"<html><body><div id="mlsGIStation"></div></body></html>"#;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2017, 3, 11).unwrap()
}

fn teams(server: &MockServer) -> (Team, Team) {
    let home = Team::new(
        "LA Galaxy",
        "la-galaxy",
        "LA",
        "LAGalaxy",
        format!("{}/club/la-galaxy/187/index", server.uri()),
    );
    let away = Team::new(
        "FC Dallas",
        "fc-dallas",
        "DAL",
        "FCDallas",
        format!("{}/club/fc-dallas/185/index", server.uri()),
    );
    (home, away)
}

fn resolver(server: &MockServer) -> GameInfoResolver {
    GameInfoResolver::new(PageFetcher::new("test-agent").unwrap(), server.uri())
}

async fn mount_feed(server: &MockServer, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(FEED_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_resolve_with_records_on_matchcenter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(FEED_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(FULL_PAGE))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/club/la-galaxy/187/index"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (home, away) = teams(&server);
    let info = resolver(&server).resolve(&home, &away, date()).await.unwrap();

    assert_eq!(info.stadium, "StubHub Center");
    assert_eq!(info.kickoff.eastern, "10:30");
    assert_eq!(info.kickoff.pacific, "07:30");
    assert_eq!(info.away_record, Record::new("3", "1"));
    assert_eq!(info.home_record, Record::new("2", "2"));
    assert_eq!(info.matchcenter_url, format!("{}{}", server.uri(), FEED_PATH));
}

#[tokio::test]
async fn test_home_falls_back_independently() {
    let server = MockServer::start().await;
    mount_feed(&server, 200, PAGE_WITHOUT_HOME_RECORD).await;
    Mock::given(method("GET"))
        .and(path("/club/la-galaxy/187/index"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<div id="sub-branding"><span class="sub-title">14-10-6, Western Conference</span></div>"#,
        ))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/club/fc-dallas/185/index"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (home, away) = teams(&server);
    let info = resolver(&server).resolve(&home, &away, date()).await.unwrap();

    assert_eq!(info.away_record, Record::new("3", "1"));
    assert_eq!(info.home_record.parts(), ["14", "10", "6"]);
}

#[tokio::test]
async fn test_both_sides_fall_back_without_stats_table() {
    let server = MockServer::start().await;
    mount_feed(&server, 200, PAGE_WITHOUT_STATS).await;
    Mock::given(method("GET"))
        .and(path("/club/la-galaxy/187/index"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<div id="sub-branding"><p class="sub-title">2-2-1, Western Conference</p></div>"#,
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/club/fc-dallas/185/index"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<div id="sub-branding"><p class="sub-title">3-1-0, Western Conference</p></div>"#,
        ))
        .mount(&server)
        .await;

    let (home, away) = teams(&server);
    let thread = resolver(&server)
        .generate(&home, &away, date(), "localhost:5000")
        .await
        .unwrap();

    assert_eq!(
        thread.title,
        "Match Thread: FC Dallas (3-1-0) at LA Galaxy (2-2-1) [03/11/2017]"
    );
    assert!(thread.body.contains("| 08:00 | 07:00 | 06:00 | 05:00 |"));
    assert!(thread.body.contains("http://localhost:5000/reddit-stream/"));
}

#[tokio::test]
async fn test_not_found_means_not_playing() {
    let server = MockServer::start().await;
    mount_feed(&server, 404, "").await;

    let (home, away) = teams(&server);
    let err = resolver(&server).resolve(&home, &away, date()).await.unwrap_err();

    assert!(matches!(err, GamethreadError::NotPlayingTonight));
}

#[tokio::test]
async fn test_soft_not_found_means_not_playing() {
    let server = MockServer::start().await;
    mount_feed(&server, 200, "<h1>Sorry, Page Not Found</h1>").await;

    let (home, away) = teams(&server);
    let err = resolver(&server).resolve(&home, &away, date()).await.unwrap_err();

    assert!(matches!(err, GamethreadError::NotPlayingTonight));
}

#[tokio::test]
async fn test_missing_kickoff_block_means_reversed() {
    let server = MockServer::start().await;
    mount_feed(&server, 200, REVERSED_PAGE).await;

    let (home, away) = teams(&server);
    let err = resolver(&server).resolve(&home, &away, date()).await.unwrap_err();

    assert!(matches!(err, GamethreadError::ReversedTeams));
}

#[tokio::test]
async fn test_server_error_is_a_fault() {
    let server = MockServer::start().await;
    mount_feed(&server, 503, "").await;

    let (home, away) = teams(&server);
    let err = resolver(&server).resolve(&home, &away, date()).await.unwrap_err();

    assert!(matches!(err, GamethreadError::UpstreamStatus { .. }));
    assert!(!err.is_user_facing());
}

#[tokio::test]
async fn test_failing_record_page_is_a_fault() {
    let server = MockServer::start().await;
    mount_feed(&server, 200, PAGE_WITHOUT_HOME_RECORD).await;
    Mock::given(method("GET"))
        .and(path("/club/la-galaxy/187/index"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (home, away) = teams(&server);
    let err = resolver(&server).resolve(&home, &away, date()).await.unwrap_err();

    assert!(matches!(err, GamethreadError::HttpRequest(_)));
}

#[tokio::test]
async fn test_failing_redirect_free_fetch_gives_no_partial_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(FEED_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(FULL_PAGE))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(FEED_PATH))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let (home, away) = teams(&server);
    let err = resolver(&server)
        .generate(&home, &away, date(), "localhost:5000")
        .await
        .unwrap_err();

    assert!(matches!(err, GamethreadError::HttpRequest(_)));
    assert!(!err.is_user_facing());
}

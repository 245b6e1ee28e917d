pub const NO_REFERRER_MESSAGE: &str =
    "This link works via magic. Click it from the normal comment page.";

/// Points a reddit comment permalink at reddit-stream.com over plain HTTP.
pub fn reddit_stream_url(referrer: &str) -> String {
    referrer
        .replace("pay.reddit.com", "reddit-stream.com")
        .replace("reddit.com", "reddit-stream.com")
        .replace("https://", "http://")
}

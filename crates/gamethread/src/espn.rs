use common::{GamethreadError, GamethreadResult};
use scraper::{Html, Selector};

use crate::models::Record;

const SUBTITLE_SELECTOR: &str = "#sub-branding .sub-title";

/// Record from a team page subtitle such as "14-10-6, Western Conference".
pub fn parse_subtitle_record(html: &str) -> GamethreadResult<Record> {
    let document = Html::parse_document(html);
    let subtitle_selector = Selector::parse(SUBTITLE_SELECTOR).map_err(|e| {
        GamethreadError::HtmlParse(format!("Failed to parse subtitle selector: {}", e))
    })?;

    let text = document
        .select(&subtitle_selector)
        .map(|el| el.text().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ");

    Ok(split_record(&text.split_whitespace().collect::<Vec<_>>().join(" ")))
}

/// Text before the first comma, split on `-` as is. Nothing is validated.
pub fn split_record(text: &str) -> Record {
    let record = text.split(',').next().unwrap_or_default();
    Record::from_parts(record.split('-').map(str::to_string).collect())
}

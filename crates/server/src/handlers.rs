use std::sync::Arc;

use axum::extract::{Host, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::{Form, Json};
use chrono::Utc;
use chrono_tz::US::Central;
use common::{GamethreadError, GamethreadResult};
use gamethread::{Gamethread, Roster, Team};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::error::AppError;
use crate::pages::home_page;
use crate::reddit_stream::{reddit_stream_url, NO_REFERRER_MESSAGE};
use crate::state::AppState;

pub const APOLOGY: &str =
    "Uh oh. Something went wrong on our end. We've dispatched trained monkeys to investigate.";

#[derive(Debug, Deserialize)]
pub struct GenerateForm {
    pub home: Option<String>,
    pub away: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum GenerateResponse {
    Thread(Gamethread),
    Error { error: String },
}

impl GenerateResponse {
    fn error(message: impl Into<String>) -> Self {
        GenerateResponse::Error {
            error: message.into(),
        }
    }
}

pub async fn home(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(home_page(&state.roster))
}

pub async fn reddit_stream(headers: HeaderMap) -> Response {
    match headers.get(header::REFERER).and_then(|v| v.to_str().ok()) {
        Some(referrer) => {
            let target = reddit_stream_url(referrer);
            info!("Redirecting {} to {}", referrer, target);
            (StatusCode::FOUND, [(header::LOCATION, target)]).into_response()
        }
        None => NO_REFERRER_MESSAGE.into_response(),
    }
}

pub async fn generate(
    State(state): State<Arc<AppState>>,
    Host(host): Host,
    Form(form): Form<GenerateForm>,
) -> Result<Json<GenerateResponse>, AppError> {
    match generate_thread(&state, &form, &host).await {
        Ok(thread) => Ok(Json(GenerateResponse::Thread(thread))),
        Err(err) if err.is_user_facing() => Ok(Json(GenerateResponse::error(err.to_string()))),
        Err(err) if state.report_errors => {
            error!("Gamethread generation failed: {}", err);
            sentry::capture_error(&err);
            Ok(Json(GenerateResponse::error(APOLOGY)))
        }
        Err(err) => Err(AppError(err)),
    }
}

async fn generate_thread(
    state: &AppState,
    form: &GenerateForm,
    host: &str,
) -> GamethreadResult<Gamethread> {
    let away = selected_team(&state.roster, form.away.as_deref())?;
    let home = selected_team(&state.roster, form.home.as_deref())?;

    let today = Utc::now().with_timezone(&Central).date_naive();
    info!("Generating gamethread for {} at {} on {}", away.name, home.name, today);

    state.resolver.generate(home, away, today, host).await
}

fn selected_team<'a>(roster: &'a Roster, shortcode: Option<&str>) -> GamethreadResult<&'a Team> {
    shortcode
        .ok_or(GamethreadError::NoTeamSelected)
        .and_then(|code| roster.team(code))
}

use std::env;
use anyhow::Context;
use sentry::types::Dsn;

use crate::error::GamethreadResult;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MATCHCENTER_BASE_URL: &str = "http://matchcenter.mlssoccer.com";
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub sentry_dsn: Option<Dsn>,
    pub matchcenter_base_url: String,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            sentry_dsn: None,
            matchcenter_base_url: DEFAULT_MATCHCENTER_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> GamethreadResult<Self> {
        let matchcenter_base_url = env::var("MATCHCENTER_BASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_MATCHCENTER_BASE_URL.to_string());

        Ok(Config {
            port: parse_port(env::var("PORT").ok())?,
            sentry_dsn: parse_sentry_dsn(env::var("SENTRY_DSN").ok())?,
            matchcenter_base_url,
            user_agent: env::var("HTTP_USER_AGENT")
                .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    pub fn reports_errors(&self) -> bool {
        self.sentry_dsn.is_some()
    }
}

fn parse_port(raw: Option<String>) -> GamethreadResult<u16> {
    match raw {
        Some(raw) => Ok(raw
            .trim()
            .parse()
            .with_context(|| format!("PORT must be a valid port number, got {:?}", raw))?),
        None => Ok(DEFAULT_PORT),
    }
}

/// An unset or empty `SENTRY_DSN` disables reporting.
fn parse_sentry_dsn(raw: Option<String>) -> GamethreadResult<Option<Dsn>> {
    match raw.filter(|s| !s.trim().is_empty()) {
        Some(raw) => Ok(Some(
            raw.trim()
                .parse::<Dsn>()
                .context("SENTRY_DSN must be a valid DSN")?,
        )),
        None => Ok(None),
    }
}

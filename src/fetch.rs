use std::env;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, TimeZone, Utc};
use reqwest::blocking::Client;
use reqwest::header::COOKIE;
use thiserror::Error;
use tracing::debug;

use crate::config::load_env_file;
use crate::models::{ProjectLayout, SolutionId};

pub const SESSION_KEY: &str = "AOC_SESSION";

const BASE_URL: &str = "https://adventofcode.com";
const USER_AGENT: &str = concat!("aoc-tools/", env!("CARGO_PKG_VERSION"));

// Puzzles unlock at midnight US Eastern (UTC-5) on December <day>.
const UNLOCK_HOUR_UTC: u32 = 5;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("AOC_SESSION not set in .env file")]
    MissingSession,
    #[error("Puzzle not available yet: {year} Day {day}")]
    NotAvailable { year: i32, day: i32 },
    #[error("Invalid session cookie")]
    InvalidSession,
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Failed to access {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}

/// The session cookie value. Never printed.
#[derive(Clone)]
pub struct Session(String);

impl Session {
    pub fn new(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            None
        } else {
            Some(Self(value.to_string()))
        }
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Process environment first, then the project's `.env` file.
    pub fn load(layout: &ProjectLayout) -> Result<Self, FetchError> {
        Self::resolve(env::var(SESSION_KEY).ok(), &layout.env_file())
    }

    pub fn resolve(from_env: Option<String>, env_file: &Path) -> Result<Self, FetchError> {
        if let Some(session) = from_env.as_deref().and_then(Session::new) {
            return Ok(session);
        }

        let vars = load_env_file(env_file).map_err(|source| FetchError::Io {
            path: env_file.to_path_buf(),
            source,
        })?;
        vars.get(SESSION_KEY)
            .and_then(|v| Session::new(v))
            .ok_or(FetchError::MissingSession)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Session(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleResponse {
    pub status: u16,
    pub body: String,
}

/// Where puzzle input comes from. One GET per call.
pub trait PuzzleSource {
    fn get(&self, url: &str, session: &Session) -> Result<PuzzleResponse, FetchError>;
}

/// Blocking HTTP client, built on the first request.
#[derive(Debug, Default)]
pub struct HttpSource;

impl PuzzleSource for HttpSource {
    fn get(&self, url: &str, session: &Session) -> Result<PuzzleResponse, FetchError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        let response = client
            .get(url)
            .header(COOKIE, format!("session={}", session.value()))
            .send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(PuzzleResponse { status, body })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus {
    AlreadyExists(PathBuf),
    Saved(PathBuf),
}

pub fn input_url(id: SolutionId) -> String {
    format!("{}/{}/day/{}/input", BASE_URL, id.year, id.day)
}

pub fn fetch(
    source: &impl PuzzleSource,
    session: &Session,
    id: SolutionId,
) -> Result<String, FetchError> {
    let url = input_url(id);
    debug!(%url, "fetching puzzle input");

    let response = source.get(&url, session)?;
    match response.status {
        200 => Ok(response.body),
        404 => Err(FetchError::NotAvailable {
            year: id.year,
            day: id.day,
        }),
        400 => Err(FetchError::InvalidSession),
        status => Err(FetchError::Http {
            status,
            body: response.body,
        }),
    }
}

/// Downloads the input into `data/<year>/day<NN>/input.txt`.
///
/// An existing file is kept unless `force` is set; in that case neither the
/// session nor the network is touched.
pub fn fetch_to_file(
    layout: &ProjectLayout,
    source: &impl PuzzleSource,
    load_session: impl FnOnce() -> Result<Session, FetchError>,
    id: SolutionId,
    force: bool,
) -> Result<FetchStatus, FetchError> {
    let data_dir = layout.data_dir(id);
    fs::create_dir_all(&data_dir).map_err(|source| FetchError::Io {
        path: data_dir.clone(),
        source,
    })?;

    let input_path = layout.input_path(id);
    if input_path.exists() && !force {
        return Ok(FetchStatus::AlreadyExists(input_path));
    }

    let session = load_session()?;
    let body = fetch(source, &session, id)?;
    fs::write(&input_path, body).map_err(|source| FetchError::Io {
        path: input_path.clone(),
        source,
    })?;
    Ok(FetchStatus::Saved(input_path))
}

pub fn unlock_time(id: SolutionId) -> Option<DateTime<Utc>> {
    let day = u32::try_from(id.day).ok()?;
    Utc.with_ymd_and_hms(id.year, 12, day, UNLOCK_HOUR_UTC, 0, 0)
        .single()
}

/// How long until the puzzle unlocks, if it hasn't yet.
pub fn time_until_unlock(id: SolutionId, now: DateTime<Utc>) -> Option<Duration> {
    let remaining = unlock_time(id)? - now;
    if remaining > Duration::zero() {
        Some(remaining)
    } else {
        None
    }
}

use crate::utils::error::{LocatorError, Result};
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::sync::OnceLock;

pub const FILE_PREFIX: &str = "PTI_SE_";
pub const FILE_EXTENSION: &str = ".raw";

/// Day-first is the documented input layout; year-first is accepted as well.
const TIMESTAMP_FORMATS: [&str; 2] = ["%d.%m.%YT%H:%M", "%Y.%m.%dT%H:%M"];

/// A date and time of day the user wants a snapshot for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestedTimestamp {
    at: NaiveDateTime,
}

impl RequestedTimestamp {
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let mut last_error = None;

        for format in TIMESTAMP_FORMATS {
            match NaiveDateTime::parse_from_str(trimmed, format) {
                Ok(at) => return Ok(Self { at }),
                Err(e) => last_error = Some(e),
            }
        }

        Err(LocatorError::InvalidTimestamp {
            input: input.to_string(),
            reason: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unrecognised format".to_string()),
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.at.date()
    }

    pub fn hour(&self) -> u32 {
        self.at.hour()
    }

    pub fn minute(&self) -> u32 {
        self.at.minute()
    }

    /// Date with separators removed, as it appears in filenames (`31.12.2022` -> `31122022`).
    pub fn date_token(&self) -> String {
        let date = self.date();
        format!("{:02}{:02}{:04}", date.day(), date.month(), date.year())
    }
}

impl fmt::Display for RequestedTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.at.format("%d.%m.%YT%H:%M"))
    }
}

impl std::str::FromStr for RequestedTimestamp {
    type Err = LocatorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Search pattern for every snapshot of one calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    date_token: String,
}

impl DatePattern {
    pub fn for_timestamp(timestamp: &RequestedTimestamp) -> Self {
        Self {
            date_token: timestamp.date_token(),
        }
    }

    pub fn date_token(&self) -> &str {
        &self.date_token
    }

    /// Glob form, e.g. `PTI_SE_31122022_*.raw`.
    pub fn glob(&self) -> String {
        format!("{}{}_*{}", FILE_PREFIX, self.date_token, FILE_EXTENSION)
    }

    pub fn matches(&self, file_name: &str) -> bool {
        file_name
            .strip_prefix(FILE_PREFIX)
            .and_then(|rest| rest.strip_prefix(self.date_token.as_str()))
            .and_then(|rest| rest.strip_prefix('_'))
            .map(|rest| rest.ends_with(FILE_EXTENSION))
            .unwrap_or(false)
    }
}

fn filename_template() -> &'static Regex {
    static TEMPLATE: OnceLock<Regex> = OnceLock::new();
    TEMPLATE.get_or_init(|| {
        Regex::new(r"^PTI_SE_(?P<date>\d{8})_(?P<hour>\d{2})(?P<minute>\d{2})\.raw$")
            .expect("filename template is a valid regex")
    })
}

/// A snapshot file name broken into its template fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateFilename {
    pub name: String,
    pub date_token: String,
    pub hour: u32,
    pub minute: u32,
}

impl CandidateFilename {
    /// Returns `None` for names that do not follow `PTI_SE_<date>_<HHMM>.raw`
    /// or carry an impossible hour or minute.
    pub fn parse(name: &str) -> Option<Self> {
        let caps = filename_template().captures(name)?;
        let hour: u32 = caps["hour"].parse().ok()?;
        let minute: u32 = caps["minute"].parse().ok()?;
        if hour > 23 || minute > 59 {
            return None;
        }

        Some(Self {
            name: name.to_string(),
            date_token: caps["date"].to_string(),
            hour,
            minute,
        })
    }

    pub fn assemble(date_token: &str, hour: &str, minute: &str) -> String {
        format!("{}{}_{}{}{}", FILE_PREFIX, date_token, hour, minute, FILE_EXTENSION)
    }
}

impl fmt::Display for CandidateFilename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Outcome of one locator run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchReport {
    pub requested: Vec<String>,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub copied: Vec<PathBuf>,
}

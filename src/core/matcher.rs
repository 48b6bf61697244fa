use crate::core::nearest::{select, two_digit};
use crate::domain::model::{CandidateFilename, DatePattern, RequestedTimestamp};
use crate::domain::ports::CandidateSource;
use crate::utils::error::{LocatorError, Result};

/// Picks the snapshot closest to a requested timestamp: nearest hour first,
/// then nearest minute within that hour.
pub struct FileMatcher<S: CandidateSource> {
    source: S,
}

impl<S: CandidateSource> FileMatcher<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn find(&self, requested: &RequestedTimestamp) -> Result<Option<CandidateFilename>> {
        let pattern = DatePattern::for_timestamp(requested);
        tracing::debug!("Searching for {}", pattern.glob());

        let listed = self.source.list_candidates(&pattern)?;
        if listed.is_empty() {
            tracing::info!(
                "There are no files on the current date: {}",
                requested.date().format("%d.%m.%Y")
            );
            return Ok(None);
        }

        let candidates: Vec<CandidateFilename> = listed
            .iter()
            .filter_map(|name| {
                let parsed = CandidateFilename::parse(name);
                if parsed.is_none() {
                    tracing::warn!("Skipping file that does not follow the naming template: {}", name);
                }
                parsed
            })
            .collect();

        let hours: Vec<u32> = candidates.iter().map(|c| c.hour).collect();
        let Some(closest_hour) = select(&hours, requested.hour()) else {
            return Ok(None);
        };

        let narrowed: Vec<&CandidateFilename> = candidates
            .iter()
            .filter(|c| two_digit(c.hour) == closest_hour)
            .collect();

        let minutes: Vec<u32> = narrowed.iter().map(|c| c.minute).collect();
        let Some(closest_minute) = select(&minutes, requested.minute()) else {
            return Ok(None);
        };

        let assembled =
            CandidateFilename::assemble(pattern.date_token(), &closest_hour, &closest_minute);

        // The assembled name has to be one of the files we were given.
        match narrowed.into_iter().find(|c| c.name == assembled) {
            Some(found) => {
                tracing::debug!("{} -> {}", requested, found.name);
                Ok(Some(found.clone()))
            }
            None => Err(LocatorError::InconsistentMatch {
                expected: assembled,
            }),
        }
    }
}

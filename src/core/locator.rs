use crate::core::matcher::FileMatcher;
use crate::domain::model::{MatchReport, RequestedTimestamp};
use crate::domain::ports::{CandidateSource, ConfigProvider, FileTransfer};
use crate::utils::error::Result;
use std::sync::Arc;

pub struct Locator<S: CandidateSource + 'static> {
    matcher: Arc<FileMatcher<S>>,
}

impl<S: CandidateSource + 'static> Locator<S> {
    pub fn new(source: S) -> Self {
        Self {
            matcher: Arc::new(FileMatcher::new(source)),
        }
    }

    /// Resolves every request independently. The result keeps request order;
    /// `None` marks a request without any file on its date.
    pub async fn locate(&self, requests: &[RequestedTimestamp]) -> Result<Vec<Option<String>>> {
        let handles: Vec<_> = requests
            .iter()
            .copied()
            .map(|requested| {
                let matcher = Arc::clone(&self.matcher);
                tokio::task::spawn_blocking(move || matcher.find(&requested))
            })
            .collect();

        let mut results = Vec::with_capacity(handles.len());
        for handle in handles {
            let found = handle.await??;
            results.push(found.map(|c| c.name));
        }
        Ok(results)
    }

    /// Locates all requests and, when a transfer is given, copies the matches
    /// from the configured source to the configured destination.
    pub async fn run<C, T>(
        &self,
        requests: &[RequestedTimestamp],
        config: &C,
        transfer: Option<&T>,
    ) -> Result<MatchReport>
    where
        C: ConfigProvider,
        T: FileTransfer,
    {
        tracing::info!("Locating {} timestamp(s)", requests.len());
        let results = self.locate(requests).await?;

        let mut report = MatchReport {
            requested: requests.iter().map(|r| r.to_string()).collect(),
            ..Default::default()
        };

        for (requested, found) in requests.iter().zip(results) {
            match found {
                Some(name) => report.matched.push(name),
                None => report.missing.push(requested.to_string()),
            }
        }

        tracing::info!("Found matches: {:?}", report.matched);

        if let Some(transfer) = transfer {
            report.copied = transfer
                .transfer(&report.matched, config.source_dir(), config.destination_dir())
                .await?;
            tracing::info!("Files copied: {:?}", report.copied);
        }

        Ok(report)
    }
}

pub mod locator;
pub mod matcher;
pub mod nearest;

pub use crate::domain::model::{CandidateFilename, DatePattern, MatchReport, RequestedTimestamp};
pub use crate::domain::ports::{CandidateSource, ConfigProvider, FileTransfer};
pub use crate::utils::error::Result;

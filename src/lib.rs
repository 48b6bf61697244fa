pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::cli::{LocalCopier, LocalDirectory};
pub use config::toml_config::{Directories, Settings};
pub use core::{locator::Locator, matcher::FileMatcher, nearest::select};
pub use domain::model::{CandidateFilename, DatePattern, MatchReport, RequestedTimestamp};
pub use utils::error::{LocatorError, Result};

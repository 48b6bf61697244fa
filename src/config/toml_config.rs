use crate::core::ConfigProvider;
use crate::utils::error::{LocatorError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_SETTINGS_FILE: &str = "settings.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub global: GlobalSettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Directory holding the `PTI_SE_*.raw` snapshots.
    pub source: Option<String>,
    /// Directory matches are copied into.
    pub destination: Option<String>,
}

impl Settings {
    /// 從 TOML 檔案載入設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LocatorError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Like `from_file`, but a missing file yields empty settings so that
    /// command-line overrides alone can supply both directories.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("Settings file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// 從 TOML 字串解析設定
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_toml_str_with(content, |name| std::env::var(name).ok())
    }

    /// Same as `from_toml_str`, resolving `${NAME}` placeholders through `lookup`.
    pub fn from_toml_str_with<F>(content: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let processed_content = Self::substitute_vars(content, lookup);

        toml::from_str(&processed_content).map_err(|e| LocatorError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_ROOT})
    fn substitute_vars<F>(content: &str, lookup: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        let re = Regex::new(r"\$\{([^}]+)\}").expect("placeholder regex is valid");

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            lookup(var_name).unwrap_or_else(|| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    /// Command-line values win over the file.
    pub fn with_overrides(mut self, source: Option<&Path>, destination: Option<&Path>) -> Self {
        if let Some(source) = source {
            self.global.source = Some(source.to_string_lossy().into_owned());
        }
        if let Some(destination) = destination {
            self.global.destination = Some(destination.to_string_lossy().into_owned());
        }
        self
    }

    pub fn directories(&self) -> Result<Directories> {
        let source = validation::validate_required_field("global.source", &self.global.source)?;
        let destination =
            validation::validate_required_field("global.destination", &self.global.destination)?;

        let directories = Directories {
            source: PathBuf::from(source),
            destination: PathBuf::from(destination),
        };
        directories.validate()?;
        Ok(directories)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        self.directories().map(|_| ())
    }
}

/// Resolved source and destination directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directories {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl Validate for Directories {
    fn validate(&self) -> Result<()> {
        let source = self.source.to_string_lossy();
        let destination = self.destination.to_string_lossy();
        validation::validate_path("global.source", &source)?;
        validation::validate_path("global.destination", &destination)?;
        validation::validate_distinct_paths(
            "global.source",
            &source,
            "global.destination",
            &destination,
        )
    }
}

impl ConfigProvider for Directories {
    fn source_dir(&self) -> &Path {
        &self.source
    }

    fn destination_dir(&self) -> &Path {
        &self.destination
    }
}

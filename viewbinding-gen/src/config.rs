use crate::ConfigError;
use regex::Regex;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static APPLICATION_ID: OnceLock<Regex> = OnceLock::new();

fn application_id_regex() -> &'static Regex {
    APPLICATION_ID.get_or_init(|| {
        Regex::new(r"^[a-zA-Z](?-u:\w)+_(?-u:\w)+_(?-u:\w)+$")
            .expect("application id pattern is valid")
    })
}

/// An application id such as `com_example_AppName`, used verbatim as the
/// prefix of every include guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationId(String);

impl ApplicationId {
    pub fn new(id: &str) -> Result<ApplicationId, ConfigError> {
        if application_id_regex().is_match(id) {
            Ok(ApplicationId(id.to_string()))
        } else {
            Err(ConfigError::InvalidApplicationId(id.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated settings for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub application_id: ApplicationId,
    pub directory: PathBuf,
    pub output_directory: PathBuf,
}

impl Config {
    /// Checks the application id and input directory, then makes sure the
    /// output directory exists, creating it with its parents if needed.
    pub fn new(
        application_id: &str,
        directory: impl Into<PathBuf>,
        output_directory: impl Into<PathBuf>,
    ) -> Result<Config, ConfigError> {
        let application_id = ApplicationId::new(application_id)?;

        let directory = directory.into();
        if !directory.is_dir() {
            return Err(ConfigError::NotADirectory(directory));
        }

        let output_directory = output_directory.into();
        ensure_output_directory(&output_directory)?;

        Ok(Config { application_id, directory, output_directory })
    }
}

fn ensure_output_directory(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        if !path.is_dir() {
            return Err(ConfigError::OutputNotADirectory(path.to_path_buf()));
        }
        return Ok(());
    }
    log::debug!("creating output directory {}", path.display());
    fs::create_dir_all(path)
        .map_err(|source| ConfigError::CreateOutputDirectory { path: path.to_path_buf(), source })
}

// Application state module
// Everything a request handler needs, built once and shared across connections

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::types::Config;
use super::DEFAULT_MAX_BODY_SIZE;
use crate::generator::VideoGenerator;

/// Application state
///
/// Immutable after construction; connections share it through an `Arc`.
pub struct AppState {
    pub public_dir: PathBuf,
    pub upload_dir: PathBuf,
    pub max_body_size: u64,
    pub access_log: bool,
    pub access_log_format: String,
    pub generator: Arc<dyn VideoGenerator>,
}

impl AppState {
    pub fn new(
        public_dir: impl Into<PathBuf>,
        upload_dir: impl Into<PathBuf>,
        generator: Arc<dyn VideoGenerator>,
    ) -> Self {
        Self {
            public_dir: public_dir.into(),
            upload_dir: upload_dir.into(),
            max_body_size: DEFAULT_MAX_BODY_SIZE,
            access_log: true,
            access_log_format: "common".to_string(),
            generator,
        }
    }

    /// Build state from loaded configuration
    pub fn from_config(config: &Config, generator: Arc<dyn VideoGenerator>) -> Self {
        Self::new(&config.paths.public_dir, &config.paths.upload_dir, generator)
            .with_max_body_size(config.upload.max_body_size)
            .with_access_log(config.logging.access_log, &config.logging.access_log_format)
    }

    #[must_use]
    pub const fn with_max_body_size(mut self, max_body_size: u64) -> Self {
        self.max_body_size = max_body_size;
        self
    }

    #[must_use]
    pub fn with_access_log(mut self, enabled: bool, format: &str) -> Self {
        self.access_log = enabled;
        self.access_log_format = format.to_string();
        self
    }

    /// Create the upload scratch directory if it does not exist yet
    pub fn prepare_upload_dir(&self) -> std::io::Result<&Path> {
        std::fs::create_dir_all(&self.upload_dir)?;
        Ok(&self.upload_dir)
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("public_dir", &self.public_dir)
            .field("upload_dir", &self.upload_dir)
            .field("max_body_size", &self.max_body_size)
            .field("access_log", &self.access_log)
            .field("access_log_format", &self.access_log_format)
            .finish_non_exhaustive()
    }
}

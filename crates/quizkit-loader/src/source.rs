//! The curriculum source abstraction and its factory.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, error, info};

use quizkit_core::model::CurriculumData;

use crate::config::QuizkitConfig;
use crate::error::LoadError;
use crate::http::CurriculumLoader;

/// Where a loader is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Unloaded,
    Loading,
    Loaded,
    Failed,
}

/// Anything that can produce the curriculum catalog.
///
/// Every call does a fresh load; implementations do not cache.
#[async_trait]
pub trait CurriculumSource: Send + Sync {
    /// Short name for diagnostics (e.g. "http").
    fn name(&self) -> &str;

    /// Load and parse the catalog.
    async fn load(&self) -> Result<CurriculumData, LoadError>;
}

/// Emit the diagnostic for a finished load and return the state it ends in.
pub(crate) fn log_outcome(result: &Result<CurriculumData, LoadError>) -> LoadState {
    match result {
        Ok(data) => {
            info!(grades = data.grades.len(), "Curriculum data loaded");
            debug!(?data, "curriculum contents");
            LoadState::Loaded
        }
        Err(e) => {
            error!(status = ?e.status(), "Error loading curriculum data: {e}");
            LoadState::Failed
        }
    }
}

/// Reads the catalog from a file on disk instead of over HTTP.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CurriculumSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn load(&self) -> Result<CurriculumData, LoadError> {
        let result = match tokio::fs::read(&self.path).await {
            Ok(bytes) => CurriculumData::from_json_slice(&bytes).map_err(LoadError::from),
            Err(source) => Err(LoadError::Io {
                path: self.path.clone(),
                source,
            }),
        };
        log_outcome(&result);
        result
    }
}

/// Build the source the host asked for: a local file when given, HTTP
/// otherwise.
pub fn create_source(
    config: &QuizkitConfig,
    file: Option<&Path>,
) -> Result<Box<dyn CurriculumSource>, LoadError> {
    match file {
        Some(path) => Ok(Box::new(FileSource::new(path))),
        None => Ok(Box::new(CurriculumLoader::new(config)?)),
    }
}

//! HTTP curriculum loader.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use tracing::instrument;

use quizkit_core::model::CurriculumData;

use crate::config::QuizkitConfig;
use crate::error::LoadError;
use crate::source::{log_outcome, CurriculumSource, LoadState};

/// Fetches `grade-subjects.json` and parses it into [`CurriculumData`].
///
/// Each [`load`](Self::load) issues its own request: nothing is cached and
/// concurrent calls are not merged. The loader sets no timeout of its own;
/// `timeout_secs` from the config is handed to the HTTP client.
pub struct CurriculumLoader {
    url: String,
    client: reqwest::Client,
    state: Mutex<LoadState>,
}

impl CurriculumLoader {
    pub fn new(config: &QuizkitConfig) -> Result<Self, LoadError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self::with_client(config.curriculum_url(), builder.build()?))
    }

    /// Use an existing client, e.g. one shared with the rest of the host.
    pub fn with_client(url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            client,
            state: Mutex::new(LoadState::Unloaded),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// State of the most recent load.
    pub fn state(&self) -> LoadState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn set_state(&self, state: LoadState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = state;
    }

    /// Fetch and parse the curriculum.
    ///
    /// Transport and parse errors are returned as they came from the
    /// transport and the JSON parser; a non-success status becomes
    /// [`LoadError::BadResponse`].
    #[instrument(skip(self), fields(url = %self.url))]
    pub async fn load(&self) -> Result<CurriculumData, LoadError> {
        self.set_state(LoadState::Loading);
        let result = self.fetch().await;
        self.set_state(log_outcome(&result));
        result
    }

    async fn fetch(&self) -> Result<CurriculumData, LoadError> {
        let response = self.client.get(self.url.as_str()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::BadResponse {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(CurriculumData::from_json_slice(&body)?)
    }
}

#[async_trait]
impl CurriculumSource for CurriculumLoader {
    fn name(&self) -> &str {
        "http"
    }

    async fn load(&self) -> Result<CurriculumData, LoadError> {
        CurriculumLoader::load(self).await
    }
}

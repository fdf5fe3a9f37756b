//! Mock curriculum source for testing.

use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;

use quizkit_core::model::CurriculumData;

use crate::error::LoadError;
use crate::source::{log_outcome, CurriculumSource};

/// What a [`MockSource`] answers with.
#[derive(Debug, Clone)]
enum MockResponse {
    Data(CurriculumData),
    Status(u16),
    Body(String),
}

/// A curriculum source for exercising hosts without a server.
///
/// Goes through the same diagnostics as the real loader.
pub struct MockSource {
    response: MockResponse,
    /// Number of calls made.
    call_count: AtomicU32,
}

impl MockSource {
    fn new(response: MockResponse) -> Self {
        Self {
            response,
            call_count: AtomicU32::new(0),
        }
    }

    /// Always return `data`.
    pub fn with_data(data: CurriculumData) -> Self {
        Self::new(MockResponse::Data(data))
    }

    /// Always fail as if the server answered with `status`.
    pub fn with_status(status: u16) -> Self {
        Self::new(MockResponse::Status(status))
    }

    /// Parse `body` on every call, as if the server had sent it.
    pub fn with_body(body: impl Into<String>) -> Self {
        Self::new(MockResponse::Body(body.into()))
    }

    /// Get the number of calls made to this source.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl CurriculumSource for MockSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn load(&self) -> Result<CurriculumData, LoadError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);

        let result = match &self.response {
            MockResponse::Data(data) => Ok(data.clone()),
            MockResponse::Status(status) => Err(LoadError::BadResponse { status: *status }),
            MockResponse::Body(body) => {
                CurriculumData::from_json_str(body).map_err(LoadError::from)
            }
        };
        log_outcome(&result);
        result
    }
}

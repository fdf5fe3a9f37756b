//! Async log capture built on `quizkit_core::test_support`.

use std::future::Future;

use quizkit_core::test_support::LogBuffer;
use tracing::instrument::WithSubscriber;

/// Drive `fut` under a subscriber that records every event, and return its
/// output along with the formatted log lines.
pub(crate) async fn capture_logs<F: Future>(fut: F) -> (F::Output, String) {
    let buffer = LogBuffer::default();
    let output = fut.with_subscriber(buffer.subscriber()).await;
    (output, buffer.contents())
}

//! quizkit-core: question sampling, curriculum model, and quiz events.
//!
//! This crate holds everything that does not touch the network: the typed
//! curriculum catalog and its lookups, the question sampler, and the small
//! helpers the quiz front-end uses for feedback and event testing.

pub mod curriculum;
pub mod error;
pub mod events;
pub mod feedback;
pub mod model;
pub mod parser;
pub mod sampler;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use error::SampleError;
pub use model::{Chapter, CurriculumData, Grade, GradeLevel, Strand, Subject};
pub use sampler::{sample, sample_with_rng, try_sample, try_sample_with_rng};

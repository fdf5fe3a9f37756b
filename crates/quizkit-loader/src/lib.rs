//! quizkit-loader: curriculum loading over HTTP.
//!
//! Implements the `CurriculumSource` trait for the served
//! `grade-subjects.json` resource, a local file, and a mock, plus the
//! configuration that points the loader at the right origin.

pub mod config;
pub mod error;
pub mod http;
pub mod mock;
pub mod source;

#[cfg(test)]
mod test_support;

pub use config::{load_config, QuizkitConfig, CURRICULUM_FILE};
pub use error::LoadError;
pub use http::CurriculumLoader;
pub use source::{create_source, CurriculumSource, FileSource, LoadState};

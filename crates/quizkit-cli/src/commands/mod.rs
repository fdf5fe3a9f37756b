pub mod init;
pub mod sample;
pub mod subjects;
pub mod tree;
pub mod validate;

use std::path::PathBuf;

use anyhow::Result;

use quizkit_core::model::CurriculumData;
use quizkit_loader::config::load_config_from;
use quizkit_loader::create_source;

/// Load the curriculum from `file` if given, else from the configured URL.
async fn load_curriculum(file: Option<PathBuf>, config: Option<PathBuf>) -> Result<CurriculumData> {
    let config = load_config_from(config.as_deref())?;
    let source = create_source(&config, file.as_deref())?;
    Ok(source.load().await?)
}

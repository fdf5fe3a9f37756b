//! The `quizkit validate` command.

use std::path::PathBuf;

use anyhow::Result;

use quizkit_core::parser::{parse_curriculum_file, validate_curriculum};

pub fn execute(curriculum_path: PathBuf) -> Result<()> {
    let data = parse_curriculum_file(&curriculum_path)?;

    for summary in data.summary() {
        println!(
            "Grade {}: {} subjects, {} chapters",
            summary.grade, summary.subjects, summary.chapters
        );
    }

    let warnings = validate_curriculum(&data);
    for w in &warnings {
        let prefix = if w.path.is_empty() {
            "  ".to_string()
        } else {
            format!("  [{}]", w.path)
        };
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Curriculum valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}

//! The `quizkit tree` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};
use tracing::warn;

use quizkit_core::GradeLevel;

pub async fn execute(
    grade: Option<String>,
    file: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<()> {
    let grade = grade.map(|g| GradeLevel::normalize_key(&g));
    let data = super::load_curriculum(file, config).await?;

    if let Some(g) = &grade {
        if data.grade(g).is_none() {
            warn!("No data found for grade: {g}");
        }
    }

    let mut table = Table::new();
    table.set_header(vec!["Grade", "Subject", "Strand", "Chapter", "Key topics"]);

    for entry in data.chapter_entries() {
        if grade.as_deref().is_some_and(|g| g != entry.grade) {
            continue;
        }
        table.add_row(vec![
            Cell::new(entry.grade),
            Cell::new(entry.subject),
            Cell::new(entry.strand),
            Cell::new(entry.chapter),
            Cell::new(entry.topics.join(", ")),
        ]);
    }

    println!("{table}");

    for summary in data.summary() {
        if grade.as_deref().is_some_and(|g| g != summary.grade) {
            continue;
        }
        println!(
            "{}: {} subjects, {} strands, {} chapters, {} topics",
            summary.grade, summary.subjects, summary.strands, summary.chapters, summary.topics
        );
    }

    Ok(())
}

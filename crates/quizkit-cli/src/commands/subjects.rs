//! The `quizkit subjects` command.

use std::path::PathBuf;

use anyhow::Result;

use quizkit_core::curriculum::subjects_for_grade;
use quizkit_core::GradeLevel;

pub async fn execute(grade: String, file: Option<PathBuf>, config: Option<PathBuf>) -> Result<()> {
    let grade = GradeLevel::normalize_key(&grade);
    let data = super::load_curriculum(file, config).await?;

    let subjects = subjects_for_grade(&grade, &data);
    if subjects.is_empty() {
        println!("No subjects found for grade {grade}.");
        return Ok(());
    }

    println!("Subjects for grade {grade}:");
    for subject in &subjects {
        println!("  {subject}");
    }

    Ok(())
}

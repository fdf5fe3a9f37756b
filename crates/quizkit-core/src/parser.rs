//! Curriculum file parsing and validation.
//!
//! Loads `grade-subjects.json` style documents from disk and checks them for
//! gaps that parse fine but leave empty selectors in the quiz UI.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::CurriculumData;

/// Parse a curriculum JSON file.
pub fn parse_curriculum_file(path: &Path) -> Result<CurriculumData> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read curriculum file: {}", path.display()))?;

    parse_curriculum_str(&content, path)
}

/// Parse a curriculum JSON string (useful for testing).
pub fn parse_curriculum_str(content: &str, source_path: &Path) -> Result<CurriculumData> {
    CurriculumData::from_json_str(content)
        .with_context(|| format!("failed to parse curriculum JSON: {}", source_path.display()))
}

/// A warning from curriculum validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// Slash-separated location, e.g. `6th/Mathematics/Number`.
    pub path: String,
    /// Warning message.
    pub message: String,
}

impl ValidationWarning {
    fn new(path: &[&str], message: impl Into<String>) -> Self {
        Self {
            path: path.join("/"),
            message: message.into(),
        }
    }
}

/// Validate curriculum data for common authoring issues.
pub fn validate_curriculum(data: &CurriculumData) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if data.is_empty() {
        warnings.push(ValidationWarning::new(&[], "curriculum has no grades"));
    }

    for (grade, g) in &data.grades {
        let grade = grade.as_str();
        check_key(&mut warnings, &[], grade, "grade");
        if g.subjects.is_empty() {
            warnings.push(ValidationWarning::new(&[grade], "grade has no subjects"));
        }

        for (subject, s) in &g.subjects {
            let subject = subject.as_str();
            check_key(&mut warnings, &[grade], subject, "subject");
            if s.strands.is_empty() {
                warnings.push(ValidationWarning::new(
                    &[grade, subject],
                    "subject has no strands",
                ));
            }

            for (strand, st) in &s.strands {
                let strand = strand.as_str();
                check_key(&mut warnings, &[grade, subject], strand, "strand");
                if st.chapters.is_empty() {
                    warnings.push(ValidationWarning::new(
                        &[grade, subject, strand],
                        "strand has no chapters",
                    ));
                }

                for (chapter, c) in &st.chapters {
                    let here = [grade, subject, strand, chapter.as_str()];
                    check_key(&mut warnings, &here[..3], here[3], "chapter");
                    if c.key_topics.is_empty() {
                        warnings.push(ValidationWarning::new(&here, "chapter has no key topics"));
                    }

                    let mut seen = HashSet::new();
                    for topic in &c.key_topics {
                        if topic.trim().is_empty() {
                            warnings.push(ValidationWarning::new(&here, "empty key topic"));
                        } else if !seen.insert(topic.as_str()) {
                            warnings.push(ValidationWarning::new(
                                &here,
                                format!("duplicate key topic: {topic}"),
                            ));
                        }
                    }
                }
            }
        }
    }

    warnings
}

fn check_key(warnings: &mut Vec<ValidationWarning>, parent: &[&str], key: &str, level: &str) {
    if key.trim().is_empty() {
        warnings.push(ValidationWarning::new(parent, format!("empty {level} name")));
    }
}

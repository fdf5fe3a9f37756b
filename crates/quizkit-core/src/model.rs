//! Core data model types for quizkit.
//!
//! The curriculum catalog is a four-level hierarchy:
//! grade → subject → strand → chapter. Every level serializes transparently
//! as a JSON object keyed by name, so the wire format of
//! `grade-subjects.json` is exactly the nested object the quiz front-end
//! ships.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The whole curriculum catalog, keyed by grade.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurriculumData {
    pub grades: BTreeMap<String, Grade>,
}

/// All subjects taught in one grade.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grade {
    pub subjects: BTreeMap<String, Subject>,
}

/// A subject, split into strands (e.g. "Number", "Geometry").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Subject {
    pub strands: BTreeMap<String, Strand>,
}

/// A strand groups the chapters of a subject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Strand {
    pub chapters: BTreeMap<String, Chapter>,
}

/// A chapter and the topics a quiz on it may cover.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub key_topics: Vec<String>,
}

impl CurriculumData {
    /// Parse a curriculum document from a JSON string.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Parse a curriculum document from raw JSON bytes.
    pub fn from_json_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    /// Look up a single grade.
    pub fn grade(&self, key: &str) -> Option<&Grade> {
        self.grades.get(key)
    }

    /// Grade keys in map order.
    pub fn grade_keys(&self) -> impl Iterator<Item = &str> {
        self.grades.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }

    /// Per-grade counts of subjects, strands, chapters, and topics.
    pub fn summary(&self) -> Vec<GradeSummary> {
        self.grades
            .iter()
            .map(|(key, grade)| {
                let strands = grade.subjects.values().flat_map(|s| s.strands.values());
                let chapters: Vec<&Chapter> =
                    strands.clone().flat_map(|s| s.chapters.values()).collect();
                GradeSummary {
                    grade: key.clone(),
                    subjects: grade.subjects.len(),
                    strands: strands.count(),
                    chapters: chapters.len(),
                    topics: chapters.iter().map(|c| c.key_topics.len()).sum(),
                }
            })
            .collect()
    }

    /// Flatten the catalog into one entry per chapter, in map order.
    pub fn chapter_entries(&self) -> Vec<ChapterEntry<'_>> {
        let mut entries = Vec::new();
        for (grade, g) in &self.grades {
            for (subject, s) in &g.subjects {
                for (strand, st) in &s.strands {
                    for (chapter, c) in &st.chapters {
                        entries.push(ChapterEntry {
                            grade,
                            subject,
                            strand,
                            chapter,
                            topics: &c.key_topics,
                        });
                    }
                }
            }
        }
        entries
    }
}

/// Aggregate counts for one grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeSummary {
    pub grade: String,
    pub subjects: usize,
    pub strands: usize,
    pub chapters: usize,
    pub topics: usize,
}

/// A chapter together with its full path through the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChapterEntry<'a> {
    pub grade: &'a str,
    pub subject: &'a str,
    pub strand: &'a str,
    pub chapter: &'a str,
    pub topics: &'a [String],
}

/// The grade keys the curriculum file is curated for.
///
/// Grades are plain string keys in [`CurriculumData`]; this enum only names
/// the recommended ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GradeLevel {
    #[serde(rename = "6th")]
    Sixth,
    #[serde(rename = "7th")]
    Seventh,
    #[serde(rename = "10th")]
    Tenth,
}

impl GradeLevel {
    pub const ALL: [GradeLevel; 3] = [GradeLevel::Sixth, GradeLevel::Seventh, GradeLevel::Tenth];

    /// The key used for this grade in `grade-subjects.json`.
    pub fn key(&self) -> &'static str {
        match self {
            GradeLevel::Sixth => "6th",
            GradeLevel::Seventh => "7th",
            GradeLevel::Tenth => "10th",
        }
    }

    /// Map user input such as `"6"` or `"Sixth"` to its curriculum key.
    /// Input that names no known grade is returned trimmed but otherwise as is.
    pub fn normalize_key(input: &str) -> String {
        match input.parse::<GradeLevel>() {
            Ok(level) => level.key().to_string(),
            Err(_) => input.trim().to_string(),
        }
    }
}

impl fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for GradeLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "6th" | "6" | "sixth" => Ok(GradeLevel::Sixth),
            "7th" | "7" | "seventh" => Ok(GradeLevel::Seventh),
            "10th" | "10" | "tenth" => Ok(GradeLevel::Tenth),
            other => Err(format!("unknown grade level: {other}")),
        }
    }
}

//! Lookups over loaded curriculum data.
//!
//! A missing key at any level is a normal condition (grades are curated
//! one at a time), so every lookup logs the miss and returns an empty list
//! instead of failing.

use tracing::warn;

use crate::model::{Chapter, CurriculumData, Strand, Subject};

/// Subject names available for `grade`, in map order.
pub fn subjects_for_grade(grade: &str, data: &CurriculumData) -> Vec<String> {
    match data.grade(grade) {
        Some(g) => g.subjects.keys().cloned().collect(),
        None => {
            warn!("No data found for grade: {grade}");
            Vec::new()
        }
    }
}

/// Strand names for a subject within a grade.
pub fn strands_for_subject(grade: &str, subject: &str, data: &CurriculumData) -> Vec<String> {
    find_subject(grade, subject, data)
        .map(|s| s.strands.keys().cloned().collect())
        .unwrap_or_default()
}

/// Chapter names for a strand.
pub fn chapters_for_strand(
    grade: &str,
    subject: &str,
    strand: &str,
    data: &CurriculumData,
) -> Vec<String> {
    find_strand(grade, subject, strand, data)
        .map(|s| s.chapters.keys().cloned().collect())
        .unwrap_or_default()
}

/// Key topics of a single chapter.
pub fn key_topics(
    grade: &str,
    subject: &str,
    strand: &str,
    chapter: &str,
    data: &CurriculumData,
) -> Vec<String> {
    find_chapter(grade, subject, strand, chapter, data)
        .map(|c| c.key_topics.clone())
        .unwrap_or_default()
}

fn find_subject<'a>(grade: &str, subject: &str, data: &'a CurriculumData) -> Option<&'a Subject> {
    let Some(g) = data.grade(grade) else {
        warn!("No data found for grade: {grade}");
        return None;
    };
    let found = g.subjects.get(subject);
    if found.is_none() {
        warn!("No data found for subject: {subject} (grade {grade})");
    }
    found
}

fn find_strand<'a>(
    grade: &str,
    subject: &str,
    strand: &str,
    data: &'a CurriculumData,
) -> Option<&'a Strand> {
    let found = find_subject(grade, subject, data)?.strands.get(strand);
    if found.is_none() {
        warn!("No data found for strand: {strand} ({grade} {subject})");
    }
    found
}

fn find_chapter<'a>(
    grade: &str,
    subject: &str,
    strand: &str,
    chapter: &str,
    data: &'a CurriculumData,
) -> Option<&'a Chapter> {
    let found = find_strand(grade, subject, strand, data)?
        .chapters
        .get(chapter);
    if found.is_none() {
        warn!("No data found for chapter: {chapter} ({grade} {subject} / {strand})");
    }
    found
}

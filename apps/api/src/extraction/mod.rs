//! Résumé extraction core — PDF text extraction and pattern-based field parsing.

pub mod fields;
pub mod handlers;
pub mod skills;
pub mod text;

use crate::extraction::skills::JobField;
use crate::models::record::ExtractedRecord;

/// Applies every field rule plus the category skill vocabulary to extracted text.
///
/// Pure and idempotent: the same text and category always produce the same
/// record. No sub-rule errors; each degrades to absent/empty on no-match.
pub fn parse_resume(text: &str, job_field: JobField) -> ExtractedRecord {
    ExtractedRecord {
        name: fields::extract_name(text),
        email: fields::extract_email(text),
        phone: fields::extract_phone(text),
        work_experience: fields::extract_work_experience(text),
        education: fields::extract_education(text),
        skills: skills::extract_skills(text, job_field),
    }
}

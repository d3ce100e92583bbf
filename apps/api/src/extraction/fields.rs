//! Pattern rules slicing flattened résumé text into labeled fields.
//!
//! Every rule is heuristic and degrades to `None` on no-match. Section
//! boundaries are the literal markers résumé templates tend to use
//! ("Experience", "Projects", "Technical Skills", "Education"); synonyms such
//! as "Employment History" are simply not matched.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // The text must open with "Firstname Lastname"; a letterhead or a
    // lowercase first word yields no name.
    static ref NAME_RE: Regex = Regex::new(r"^([A-Z][a-z]+)\s([A-Z][a-z]+)").unwrap();
    static ref EMAIL_RE: Regex =
        Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap();
    // Bare 10-digit run, (XXX) XXX-XXXX with optional space, or XXX-XXX-XXXX.
    static ref PHONE_RE: Regex =
        Regex::new(r"\b\d{10}\b|\(\d{3}\)\s?\d{3}-\d{4}|\d{3}-\d{3}-\d{4}").unwrap();
    // The closing marker is consumed rather than looked ahead at (the regex
    // crate has no lookahead); only the lazy capture is kept, so the result
    // is the same: everything up to, not including, the next marker.
    static ref EXPERIENCE_RE: Regex =
        Regex::new(r"(?s)Experience\s*(.+?)(?:Projects|Technical Skills|Education)").unwrap();
    static ref EDUCATION_RE: Regex =
        Regex::new(r"(?s)Education\s*(.+?)(?:Experience|Projects)").unwrap();
}

/// Two consecutive capitalized word tokens anchored at the start of the text.
pub fn extract_name(text: &str) -> Option<String> {
    NAME_RE
        .captures(text)
        .map(|cap| format!("{} {}", &cap[1], &cap[2]))
}

/// First email-shaped substring in document order.
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

/// First phone-shaped substring in document order.
pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_RE.find(text).map(|m| m.as_str().to_string())
}

/// Text between the "Experience" marker and the next section marker, trimmed.
pub fn extract_work_experience(text: &str) -> Option<String> {
    EXPERIENCE_RE
        .captures(text)
        .map(|cap| cap[1].trim().to_string())
}

/// Text between the "Education" marker and the next section marker, trimmed.
pub fn extract_education(text: &str) -> Option<String> {
    EDUCATION_RE
        .captures(text)
        .map(|cap| cap[1].trim().to_string())
}

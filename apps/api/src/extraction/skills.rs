//! Category skill vocabularies and matching.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Job-field category steering which skill vocabulary is checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobField {
    Software,
    Finance,
    Marketing,
    #[default]
    General,
}

const SOFTWARE_SKILLS: &[&str] = &[
    "Python",
    "Java",
    "C++",
    "Machine Learning",
    "Data Analysis",
    "NLP",
    "Deep Learning",
    "SQL",
    "AWS",
    "Docker",
    "Kubernetes",
];

const FINANCE_SKILLS: &[&str] = &[
    "Accounting",
    "Financial Modeling",
    "Excel",
    "VBA",
    "SQL",
    "Python",
    "Tableau",
];

const MARKETING_SKILLS: &[&str] = &[
    "SEO",
    "Social Media",
    "Content Creation",
    "Google Analytics",
    "Advertising",
    "Branding",
    "Email Marketing",
];

const GENERAL_SKILLS: &[&str] = &[
    "Communication",
    "Problem-Solving",
    "Teamwork",
    "Leadership",
    "Adaptability",
    "Time Management",
];

impl JobField {
    /// Parses a category label. Unrecognized labels fall back to `General`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "software" => JobField::Software,
            "finance" => JobField::Finance,
            "marketing" => JobField::Marketing,
            _ => JobField::General,
        }
    }

    /// Candidate skills for this category. Static, never mutated.
    pub fn vocabulary(self) -> &'static [&'static str] {
        match self {
            JobField::Software => SOFTWARE_SKILLS,
            JobField::Finance => FINANCE_SKILLS,
            JobField::Marketing => MARKETING_SKILLS,
            JobField::General => GENERAL_SKILLS,
        }
    }
}

/// Case-insensitive substring test of each vocabulary candidate against the
/// full text. The result is always a deduplicated subset of the vocabulary.
pub fn extract_skills(text: &str, job_field: JobField) -> BTreeSet<String> {
    let text_lower = text.to_lowercase();
    job_field
        .vocabulary()
        .iter()
        .filter(|skill| text_lower.contains(&skill.to_lowercase()))
        .map(|skill| skill.to_string())
        .collect()
}

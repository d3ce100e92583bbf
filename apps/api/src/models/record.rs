use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Flat record of fields extracted from one résumé.
///
/// Built fresh per document and immutable once constructed. A field whose
/// pattern did not match is `None`; `skills` is empty when nothing from the
/// category vocabulary appears in the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedRecord {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub work_experience: Option<String>,
    pub education: Option<String>,
    /// Always a deduplicated subset of the selected category's vocabulary.
    pub skills: BTreeSet<String>,
}

/// User-facing rendering of an `ExtractedRecord`.
///
/// Sectioned fields carry literal fallback strings when absent; contact
/// fields stay `null` and are the client's concern.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayRecord {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub work_experience: String,
    pub education: String,
    pub skills: String,
}

impl DisplayRecord {
    pub fn from_record(record: &ExtractedRecord) -> Self {
        DisplayRecord {
            name: record.name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            work_experience: record
                .work_experience
                .clone()
                .unwrap_or_else(|| "No work experience found.".to_string()),
            education: record
                .education
                .clone()
                .unwrap_or_else(|| "No education details found.".to_string()),
            skills: if record.skills.is_empty() {
                "No relevant skills found.".to_string()
            } else {
                record
                    .skills
                    .iter()
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ")
            },
        }
    }
}

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::errors::AppError;
use crate::models::record::ExtractedRecord;

const HEADER: &[&str] = &[
    "Name",
    "Email",
    "Phone Number",
    "Work Experience",
    "Education",
    "Skills",
    "Parsed At",
];

/// Append-only CSV ledger of parsed resumes.
///
/// The file is created with a header row on the first append; every later
/// append preserves prior rows. Absent fields are written as empty cells.
pub struct Ledger {
    path: PathBuf,
}

impl Ledger {
    pub fn new(path: PathBuf) -> Self {
        Ledger { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, record: &ExtractedRecord) -> Result<(), AppError> {
        let write_header = !self.path.exists();

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                AppError::Ledger(format!("Failed to open {}: {e}", self.path.display()))
            })?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if write_header {
            writer
                .write_record(HEADER)
                .map_err(|e| AppError::Ledger(format!("Failed to write header: {e}")))?;
        }

        let skills = record
            .skills
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");

        writer
            .write_record([
                record.name.as_deref().unwrap_or(""),
                record.email.as_deref().unwrap_or(""),
                record.phone.as_deref().unwrap_or(""),
                record.work_experience.as_deref().unwrap_or(""),
                record.education.as_deref().unwrap_or(""),
                &skills,
                &Utc::now().to_rfc3339(),
            ])
            .map_err(|e| AppError::Ledger(format!("Failed to write record: {e}")))?;

        writer
            .flush()
            .map_err(|e| AppError::Ledger(format!("Failed to flush ledger: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn record(name: &str, email: &str) -> ExtractedRecord {
        ExtractedRecord {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            phone: None,
            work_experience: None,
            education: None,
            skills: BTreeSet::from(["Python".to_string(), "SQL".to_string()]),
        }
    }

    #[test]
    fn test_two_appends_yield_header_and_two_rows_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = Ledger::new(dir.path().join("parsed_resumes.csv"));

        ledger.append(&record("John Smith", "john@example.com")).unwrap();
        ledger.append(&record("Jane Doe", "jane@example.com")).unwrap();

        let mut reader = csv::Reader::from_path(ledger.path()).unwrap();
        assert_eq!(
            reader.headers().unwrap(),
            &csv::StringRecord::from(HEADER.to_vec())
        );

        let rows: Vec<csv::StringRecord> =
            reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "John Smith");
        assert_eq!(&rows[1][0], "Jane Doe");
        assert_eq!(&rows[0][5], "Python, SQL");
    }

    #[test]
    fn test_absent_fields_written_as_empty_cells() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = Ledger::new(dir.path().join("parsed_resumes.csv"));

        let empty = ExtractedRecord {
            name: None,
            email: None,
            phone: None,
            work_experience: None,
            education: None,
            skills: BTreeSet::new(),
        };
        ledger.append(&empty).unwrap();

        let mut reader = csv::Reader::from_path(ledger.path()).unwrap();
        let rows: Vec<csv::StringRecord> =
            reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "");
        assert_eq!(&rows[0][5], "");
    }
}

//! Answer intake adapters for survey-platform exports.
//!
//! Survey tools hand us either a JSON array of answer records or a headered
//! CSV export. Score-range and category validation happens here, at the
//! collaborator boundary; the diagnosis pipeline itself never re-validates.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::diagnosis::{AnswerRecord, QuestionCategory};

const SCALE_MIN: u8 = 1;
const SCALE_MAX: u8 = 7;

#[derive(Debug)]
pub enum AnswerImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
    UnknownCategory { question_id: String, value: String },
    ScoreOutOfRange { question_id: String, score: u8 },
    UnsupportedFormat { path: String },
}

impl fmt::Display for AnswerImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerImportError::Io(err) => write!(f, "failed to read answer export: {}", err),
            AnswerImportError::Csv(err) => write!(f, "invalid answer CSV data: {}", err),
            AnswerImportError::Json(err) => write!(f, "invalid answer JSON data: {}", err),
            AnswerImportError::UnknownCategory { question_id, value } => {
                write!(f, "question {question_id} has unknown category '{value}'")
            }
            AnswerImportError::ScoreOutOfRange { question_id, score } => {
                write!(
                    f,
                    "question {question_id} has score {score} outside the 1-7 scale"
                )
            }
            AnswerImportError::UnsupportedFormat { path } => {
                write!(f, "'{path}' is neither a .json nor a .csv answer export")
            }
        }
    }
}

impl std::error::Error for AnswerImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnswerImportError::Io(err) => Some(err),
            AnswerImportError::Csv(err) => Some(err),
            AnswerImportError::Json(err) => Some(err),
            AnswerImportError::UnknownCategory { .. }
            | AnswerImportError::ScoreOutOfRange { .. }
            | AnswerImportError::UnsupportedFormat { .. } => None,
        }
    }
}

impl From<std::io::Error> for AnswerImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for AnswerImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<serde_json::Error> for AnswerImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Imports an answer sheet from disk, choosing the format by file extension.
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<AnswerRecord>, AnswerImportError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("json") => from_json_reader(File::open(path)?),
        Some("csv") => from_csv_reader(File::open(path)?),
        _ => Err(AnswerImportError::UnsupportedFormat {
            path: path.display().to_string(),
        }),
    }
}

/// Imports a JSON array of answer records.
pub fn from_json_reader<R: Read>(reader: R) -> Result<Vec<AnswerRecord>, AnswerImportError> {
    let records: Vec<AnswerRecord> = serde_json::from_reader(reader)?;
    records.into_iter().map(validate).collect()
}

/// Imports a headered CSV export (`Question ID`, `Category`, `Score`,
/// `Reverse` columns).
pub fn from_csv_reader<R: Read>(reader: R) -> Result<Vec<AnswerRecord>, AnswerImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<AnswerRow>() {
        let row = row?;
        let category = parse_category(&row.category).ok_or_else(|| {
            AnswerImportError::UnknownCategory {
                question_id: row.question_id.clone(),
                value: row.category.clone(),
            }
        })?;

        records.push(validate(AnswerRecord {
            question_id: row.question_id,
            score: row.score,
            category,
            is_reverse: row.reverse,
        })?);
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    #[serde(rename = "Question ID")]
    question_id: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Score")]
    score: u8,
    #[serde(rename = "Reverse", default, deserialize_with = "flexible_bool")]
    reverse: bool,
}

fn flexible_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "true" | "yes" | "y" | "1"
    ))
}

fn parse_category(value: &str) -> Option<QuestionCategory> {
    QuestionCategory::ordered()
        .into_iter()
        .find(|category| category.label().eq_ignore_ascii_case(value.trim()))
}

fn validate(record: AnswerRecord) -> Result<AnswerRecord, AnswerImportError> {
    if record.score < SCALE_MIN || record.score > SCALE_MAX {
        return Err(AnswerImportError::ScoreOutOfRange {
            question_id: record.question_id,
            score: record.score,
        });
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const CSV_EXPORT: &str = "\
Question ID,Category,Score,Reverse
q-001,extraversion,6,false
q-002,extraversion,2,true
q-003,thinking,5,no
q-004,behavior,4,yes
";

    #[test]
    fn csv_export_parses_with_flexible_reverse_flags() {
        let records = from_csv_reader(Cursor::new(CSV_EXPORT)).expect("csv parses");

        assert_eq!(records.len(), 4);
        assert_eq!(records[0].category, QuestionCategory::Extraversion);
        assert!(!records[0].is_reverse);
        assert!(records[1].is_reverse);
        assert!(!records[2].is_reverse);
        assert!(records[3].is_reverse);
    }

    #[test]
    fn csv_rejects_unknown_category() {
        let export = "Question ID,Category,Score,Reverse\nq-001,charisma,5,false\n";

        match from_csv_reader(Cursor::new(export)) {
            Err(AnswerImportError::UnknownCategory { question_id, value }) => {
                assert_eq!(question_id, "q-001");
                assert_eq!(value, "charisma");
            }
            other => panic!("expected unknown category error, got {other:?}"),
        }
    }

    #[test]
    fn csv_rejects_out_of_scale_score() {
        let export = "Question ID,Category,Score,Reverse\nq-001,openness,9,false\n";

        match from_csv_reader(Cursor::new(export)) {
            Err(AnswerImportError::ScoreOutOfRange { question_id, score }) => {
                assert_eq!(question_id, "q-001");
                assert_eq!(score, 9);
            }
            other => panic!("expected score range error, got {other:?}"),
        }
    }

    #[test]
    fn json_and_csv_exports_produce_identical_records() {
        let json_export = r#"[
            {"question_id": "q-001", "score": 6, "category": "extraversion", "is_reverse": false},
            {"question_id": "q-002", "score": 2, "category": "extraversion", "is_reverse": true}
        ]"#;
        let csv_export = "Question ID,Category,Score,Reverse\n\
                          q-001,extraversion,6,false\n\
                          q-002,extraversion,2,true\n";

        let from_json = from_json_reader(Cursor::new(json_export)).expect("json parses");
        let from_csv = from_csv_reader(Cursor::new(csv_export)).expect("csv parses");

        assert_eq!(from_json, from_csv);
    }

    #[test]
    fn json_rejects_out_of_scale_score() {
        let export = r#"[{"question_id": "q-001", "score": 0, "category": "openness", "is_reverse": false}]"#;

        assert!(matches!(
            from_json_reader(Cursor::new(export)),
            Err(AnswerImportError::ScoreOutOfRange { .. })
        ));
    }
}

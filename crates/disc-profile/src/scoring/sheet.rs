use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::domain::{Answer, QuestionId};

/// Answer collections as the quiz front-ends submit them: either a list of answer records or
/// an object keyed by question id.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AnswerPayload {
    List(Vec<Answer>),
    Keyed(BTreeMap<QuestionId, Selection>),
}

/// The two picks for one question in the keyed payload shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Selection {
    #[serde(default, alias = "mais")]
    pub most: Option<String>,
    #[serde(default, alias = "menos")]
    pub least: Option<String>,
}

impl AnswerPayload {
    pub fn into_answers(self) -> Vec<Answer> {
        match self {
            AnswerPayload::List(answers) => answers,
            AnswerPayload::Keyed(map) => map
                .into_iter()
                .map(|(question_id, selection)| Answer {
                    question_id,
                    most: selection.most,
                    least: selection.least,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CsvAnswerRow {
    question_id: String,
    most: Option<String>,
    least: Option<String>,
}

/// Reads answers from JSON text in either payload shape.
pub fn parse_answers_json(raw: &str) -> Result<Vec<Answer>, AnswerSheetError> {
    let payload: AnswerPayload = serde_json::from_str(raw).map_err(AnswerSheetError::Json)?;
    Ok(payload.into_answers())
}

/// Reads answers from CSV with a `question_id,most,least` header row.
pub fn read_answers_csv<R: Read>(reader: R) -> Result<Vec<Answer>, AnswerSheetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader
        .deserialize::<CsvAnswerRow>()
        .map(|row| {
            let row = row.map_err(AnswerSheetError::Csv)?;
            Ok(Answer {
                question_id: QuestionId::new(row.question_id),
                most: row.most.filter(|value| !value.is_empty()),
                least: row.least.filter(|value| !value.is_empty()),
            })
        })
        .collect()
}

/// Loads an answer file, choosing the CSV reader for `.csv` files and JSON otherwise.
pub fn read_answers_path(path: impl AsRef<Path>) -> Result<Vec<Answer>, AnswerSheetError> {
    let path = path.as_ref();
    let io_error = |source| AnswerSheetError::Io {
        path: path.to_path_buf(),
        source,
    };

    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if is_csv {
        let file = File::open(path).map_err(io_error)?;
        read_answers_csv(file)
    } else {
        let raw = std::fs::read_to_string(path).map_err(io_error)?;
        parse_answers_json(&raw)
    }
}

/// Failure to read a submitted answer collection.
#[derive(Debug, thiserror::Error)]
pub enum AnswerSheetError {
    #[error("unable to read answers from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("answers are not valid JSON: {0}")]
    Json(#[source] serde_json::Error),
    #[error("answers are not valid CSV: {0}")]
    Csv(#[source] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_answer_lists_with_numeric_ids() {
        let answers = parse_answers_json(
            r#"[{"questionId": 1, "most": "D", "least": "I"},
                {"questionId": "2", "most": "S"}]"#,
        )
        .expect("answers parse");

        assert_eq!(answers.len(), 2);
        assert_eq!(answers[0], Answer::new("1", "D", "I"));
        assert_eq!(answers[1].question_id, QuestionId::from("2"));
        assert_eq!(answers[1].least, None);
    }

    #[test]
    fn parses_keyed_payloads_including_legacy_field_names() {
        let answers = parse_answers_json(
            r#"{"1": {"most": "A", "least": "B"}, "2": {"mais": "C", "menos": "D"}}"#,
        )
        .expect("keyed answers parse");

        assert_eq!(answers.len(), 2);
        assert_eq!(answers[1].question_id, QuestionId::from("2"));
        assert_eq!(answers[1].most.as_deref(), Some("C"));
        assert_eq!(answers[1].least.as_deref(), Some("D"));
    }

    #[test]
    fn reads_csv_rows_and_treats_blank_cells_as_unanswered() {
        let csv = "question_id,most,least\n1, D ,C\n2,,S\n";
        let answers = read_answers_csv(csv.as_bytes()).expect("csv parses");

        assert_eq!(answers.len(), 2);
        assert_eq!(answers[0], Answer::new("1", "D", "C"));
        assert_eq!(answers[1].most, None);
        assert_eq!(answers[1].least.as_deref(), Some("S"));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = parse_answers_json("{not json").expect_err("invalid json");
        assert!(matches!(err, AnswerSheetError::Json(_)));
    }
}

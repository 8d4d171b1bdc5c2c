// Quiz generation from uploaded notes.
// Prompt building, the model response contract, and answer semantics live here.

pub mod handlers;
pub mod parser;
pub mod prompts;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// The three quiz variants a caller may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuizKind {
    MultipleChoice,
    FillBlanks,
    ShortAnswer,
}

impl QuizKind {
    /// Parses the `quizType` form value. Unknown values are rejected up front,
    /// before any extraction or generation work.
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "multiple-choice" => Ok(QuizKind::MultipleChoice),
            "fill-blanks" => Ok(QuizKind::FillBlanks),
            "short-answer" => Ok(QuizKind::ShortAnswer),
            other => Err(AppError::InvalidInput {
                field: "quizType".to_string(),
                value: other.to_string(),
            }),
        }
    }

    /// Canonical answer-comparison semantics for quiz review.
    ///
    /// Multiple-choice answers compare verbatim: the user picks one of the
    /// model's own option strings, so the stored answer must match exactly.
    /// Typed answers (fill-blanks, short-answer) compare case-insensitively
    /// on trimmed text.
    pub fn answer_matches(&self, expected: &str, given: &str) -> bool {
        match self {
            QuizKind::MultipleChoice => expected == given,
            QuizKind::FillBlanks | QuizKind::ShortAnswer => {
                expected.trim().to_lowercase() == given.trim().to_lowercase()
            }
        }
    }
}

/// One generated question. `options` is present only for multiple-choice
/// quizzes; its absence marks the free-response variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

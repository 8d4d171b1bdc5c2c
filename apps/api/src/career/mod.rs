// Career tools: CV feedback, job descriptions, cover letters, interview prep.

pub mod handlers;
pub mod prompts;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Requested difficulty for interview questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(AppError::InvalidInput {
                field: "difficulty".to_string(),
                value: other.to_string(),
            }),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// The flavor of interview question to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Technical,
    Behavioral,
    Situational,
}

impl QuestionType {
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "technical" => Ok(QuestionType::Technical),
            "behavioral" => Ok(QuestionType::Behavioral),
            "situational" => Ok(QuestionType::Situational),
            other => Err(AppError::InvalidInput {
                field: "questionType".to_string(),
                value: other.to_string(),
            }),
        }
    }

    /// Human-readable label substituted into the prompt.
    pub fn label(&self) -> &'static str {
        match self {
            QuestionType::Technical => "technical",
            QuestionType::Behavioral => "behavioral",
            QuestionType::Situational => "situational (STAR method)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_parses_all_levels() {
        assert_eq!(Difficulty::parse("easy").unwrap(), Difficulty::Easy);
        assert_eq!(Difficulty::parse("medium").unwrap(), Difficulty::Medium);
        assert_eq!(Difficulty::parse("hard").unwrap(), Difficulty::Hard);
    }

    #[test]
    fn test_difficulty_rejects_unknown_level() {
        let err = Difficulty::parse("impossible").unwrap_err();
        assert!(err.to_string().contains("difficulty"));
    }

    #[test]
    fn test_question_type_parses_all_flavors() {
        assert_eq!(
            QuestionType::parse("technical").unwrap(),
            QuestionType::Technical
        );
        assert_eq!(
            QuestionType::parse("behavioral").unwrap(),
            QuestionType::Behavioral
        );
        assert_eq!(
            QuestionType::parse("situational").unwrap(),
            QuestionType::Situational
        );
    }

    #[test]
    fn test_situational_label_mentions_star() {
        assert!(QuestionType::Situational.label().contains("STAR"));
    }
}

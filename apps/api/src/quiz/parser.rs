//! The quiz response contract: free-text model output in, validated
//! question records out.
//!
//! Steps, in order:
//! 1. trim and strip surrounding code fences;
//! 2. reject unless the cleaned text starts with `[` and ends with `]`;
//! 3. parse as JSON (same rejection on a syntax error);
//! 4. reject an empty array;
//! 5. per-item schema check: non-empty `question` and `answer` everywhere,
//!    `options` a non-empty string list for multiple-choice.
//!
//! Whether the answer appears in the options list is NOT checked; see the
//! gap test below. No retry on malformed output, the failure is terminal
//! for the request.

use crate::errors::AppError;
use crate::llm_client::strip_code_fences;
use crate::quiz::{QuizKind, QuizQuestion};

pub fn parse_quiz_response(kind: QuizKind, raw: &str) -> Result<Vec<QuizQuestion>, AppError> {
    let cleaned = strip_code_fences(raw);

    if !cleaned.starts_with('[') || !cleaned.ends_with(']') {
        return Err(AppError::MalformedGeneration(cleaned.to_string()));
    }

    let questions: Vec<QuizQuestion> =
        serde_json::from_str(cleaned).map_err(|e| AppError::MalformedGeneration(e.to_string()))?;

    if questions.is_empty() {
        return Err(AppError::EmptyResult);
    }

    for (index, question) in questions.iter().enumerate() {
        validate_question(kind, index, question)?;
    }

    Ok(questions)
}

fn validate_question(kind: QuizKind, index: usize, q: &QuizQuestion) -> Result<(), AppError> {
    if q.question.trim().is_empty() {
        return Err(AppError::MalformedGeneration(format!(
            "question {index} has an empty 'question' field"
        )));
    }
    if q.answer.trim().is_empty() {
        return Err(AppError::MalformedGeneration(format!(
            "question {index} has an empty 'answer' field"
        )));
    }

    if kind == QuizKind::MultipleChoice {
        match &q.options {
            Some(options) if !options.is_empty() => {}
            _ => {
                return Err(AppError::MalformedGeneration(format!(
                    "multiple-choice question {index} is missing its 'options' list"
                )))
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MC_ARRAY: &str = r#"[
        {
            "question": "Which organelle produces ATP?",
            "options": ["Nucleus", "Mitochondria", "Ribosome", "Golgi apparatus"],
            "answer": "Mitochondria",
            "explanation": "Mitochondria run cellular respiration."
        }
    ]"#;

    #[test]
    fn test_fenced_array_parses() {
        let raw = "```json\n[{\"question\":\"Q\",\"answer\":\"A\"}]\n```";
        let questions = parse_quiz_response(QuizKind::ShortAnswer, raw).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question, "Q");
        assert_eq!(questions[0].answer, "A");
    }

    #[test]
    fn test_bare_fence_array_parses() {
        let raw = "```\n[{\"question\":\"Q\",\"answer\":\"A\"}]\n```";
        assert!(parse_quiz_response(QuizKind::FillBlanks, raw).is_ok());
    }

    #[test]
    fn test_surrounding_whitespace_is_tolerated() {
        let raw = "  \n[{\"question\":\"Q\",\"answer\":\"A\"}]\n  ";
        assert!(parse_quiz_response(QuizKind::ShortAnswer, raw).is_ok());
    }

    #[test]
    fn test_refusal_text_is_malformed() {
        let err = parse_quiz_response(QuizKind::ShortAnswer, "Sorry, I can't help.").unwrap_err();
        assert!(matches!(err, AppError::MalformedGeneration(_)));
    }

    #[test]
    fn test_truncated_array_is_malformed() {
        // Passes the bracket check, fails JSON parsing.
        let err =
            parse_quiz_response(QuizKind::ShortAnswer, "[{\"question\": \"Q\",]").unwrap_err();
        assert!(matches!(err, AppError::MalformedGeneration(_)));
    }

    #[test]
    fn test_empty_array_is_empty_result() {
        let err = parse_quiz_response(QuizKind::ShortAnswer, "[]").unwrap_err();
        assert!(matches!(err, AppError::EmptyResult));
    }

    #[test]
    fn test_multiple_choice_round_trip() {
        let questions = parse_quiz_response(QuizKind::MultipleChoice, MC_ARRAY).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].options.as_ref().unwrap().len(), 4);
        assert_eq!(questions[0].answer, "Mitochondria");
    }

    #[test]
    fn test_missing_answer_field_is_malformed() {
        let raw = r#"[{"question": "Q?"}]"#;
        let err = parse_quiz_response(QuizKind::ShortAnswer, raw).unwrap_err();
        assert!(matches!(err, AppError::MalformedGeneration(_)));
    }

    #[test]
    fn test_empty_question_text_is_malformed() {
        let raw = r#"[{"question": "  ", "answer": "A"}]"#;
        let err = parse_quiz_response(QuizKind::ShortAnswer, raw).unwrap_err();
        assert!(matches!(err, AppError::MalformedGeneration(_)));
    }

    #[test]
    fn test_multiple_choice_without_options_is_malformed() {
        let raw = r#"[{"question": "Q?", "answer": "A"}]"#;
        let err = parse_quiz_response(QuizKind::MultipleChoice, raw).unwrap_err();
        assert!(matches!(err, AppError::MalformedGeneration(_)));
    }

    #[test]
    fn test_multiple_choice_with_empty_options_is_malformed() {
        let raw = r#"[{"question": "Q?", "options": [], "answer": "A"}]"#;
        let err = parse_quiz_response(QuizKind::MultipleChoice, raw).unwrap_err();
        assert!(matches!(err, AppError::MalformedGeneration(_)));
    }

    #[test]
    fn test_free_response_kinds_tolerate_stray_options() {
        let raw = r#"[{"question": "Q?", "options": ["A", "B"], "answer": "A"}]"#;
        assert!(parse_quiz_response(QuizKind::ShortAnswer, raw).is_ok());
    }

    /// Known gap: the contract does not require the stored answer to appear
    /// in the options list, so an inconsistent item passes through unchanged.
    #[test]
    fn test_answer_outside_options_is_accepted() {
        let raw = r#"[{
            "question": "Q?",
            "options": ["A", "B", "C", "D"],
            "answer": "E",
            "explanation": "inconsistent on purpose"
        }]"#;
        let questions = parse_quiz_response(QuizKind::MultipleChoice, raw).unwrap();
        assert_eq!(questions[0].answer, "E");
        assert!(!questions[0]
            .options
            .as_ref()
            .unwrap()
            .contains(&questions[0].answer));
    }

    #[test]
    fn test_all_items_validated_not_just_the_first() {
        let raw = r#"[
            {"question": "Q1?", "answer": "A1"},
            {"question": "Q2?", "answer": ""}
        ]"#;
        let err = parse_quiz_response(QuizKind::ShortAnswer, raw).unwrap_err();
        assert!(matches!(err, AppError::MalformedGeneration(_)));
    }
}

// Quiz prompt templates. Replace `{notes_text}` before sending.

use crate::llm_client::GenerationParams;
use crate::quiz::QuizKind;

/// Quiz generation stops on a blank line to keep the model from rambling
/// past the closing bracket.
pub const QUIZ_PARAMS: GenerationParams = GenerationParams::with_stop(1000, &["\n\n"]);

/// Preamble that pins the model to a bare JSON array.
const JSON_ARRAY_ONLY: &str = "You are a quiz generator that ONLY outputs valid JSON arrays. \
Your response must start with '[' and end with ']'. \
Do not include any other text or explanation.";

const MULTIPLE_CHOICE_TEMPLATE: &str = r#"Generate 5 multiple choice questions based on these notes:
{notes_text}

Each question must follow this EXACT format:
{
  "question": "Write the question here?",
  "options": ["First option", "Second option", "Third option", "Fourth option"],
  "answer": "The correct option text",
  "explanation": "Brief explanation of the answer"
}"#;

const FILL_BLANKS_TEMPLATE: &str = r#"Generate 5 fill-in-the-blank questions based on these notes:
{notes_text}

Each question must follow this EXACT format:
{
  "question": "Complete sentence with _____ for the blank",
  "answer": "The word that goes in the blank",
  "explanation": "Brief explanation of why this is correct"
}"#;

const SHORT_ANSWER_TEMPLATE: &str = r#"Generate 5 short answer questions based on these notes:
{notes_text}

Each question must follow this EXACT format:
{
  "question": "Write the question here?",
  "answer": "The correct answer",
  "explanation": "Brief explanation of the answer"
}"#;

/// Builds the full quiz prompt for one kind over the extracted note text.
pub fn build_quiz_prompt(kind: QuizKind, notes_text: &str) -> String {
    let template = match kind {
        QuizKind::MultipleChoice => MULTIPLE_CHOICE_TEMPLATE,
        QuizKind::FillBlanks => FILL_BLANKS_TEMPLATE,
        QuizKind::ShortAnswer => SHORT_ANSWER_TEMPLATE,
    };
    format!(
        "{JSON_ARRAY_ONLY}\n{}",
        template.replace("{notes_text}", notes_text)
    )
}

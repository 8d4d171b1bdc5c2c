use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::extract;
use crate::quiz::parser::parse_quiz_response;
use crate::quiz::prompts::{build_quiz_prompt, QUIZ_PARAMS};
use crate::quiz::{QuizKind, QuizQuestion};
use crate::state::AppState;
use crate::upload::UploadedForm;

#[derive(Serialize)]
pub struct QuizResponse {
    pub questions: Vec<QuizQuestion>,
}

/// POST /api/generate-quiz
/// multipart: `notes` (PDF) + `quizType`.
pub async fn handle_generate_quiz(
    State(state): State<AppState>,
    multipart: axum::extract::Multipart,
) -> Result<Json<QuizResponse>, AppError> {
    let form = UploadedForm::collect(multipart).await?;
    let notes = form.file("notes")?;
    let kind = QuizKind::parse(form.field("quizType")?)?;

    let notes_text = extract::pdf_text(notes).await?;

    let prompt = build_quiz_prompt(kind, &notes_text);
    let raw = state.generator.generate(&prompt, &QUIZ_PARAMS).await?;

    let questions = parse_quiz_response(kind, &raw)?;
    Ok(Json(QuizResponse { questions }))
}

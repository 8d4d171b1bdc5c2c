use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;
use crate::wellness::prompts::{
    build_mood_prompt, build_motivation_prompt, BREAK_PARAMS, BREAK_PROMPT,
    DEFAULT_MOTIVATION_CONTEXT, MOOD_PARAMS, MOTIVATION_PARAMS,
};

#[derive(Deserialize)]
pub struct MoodRequest {
    pub text: Option<String>,
}

#[derive(Serialize)]
pub struct MoodResponse {
    pub response: String,
}

/// POST /api/analyze-mood
pub async fn handle_analyze_mood(
    State(state): State<AppState>,
    Json(req): Json<MoodRequest>,
) -> Result<Json<MoodResponse>, AppError> {
    let text = req
        .text
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::missing("text"))?;

    let prompt = build_mood_prompt(text);
    let generated = state.generator.generate(&prompt, &MOOD_PARAMS).await?;

    Ok(Json(MoodResponse {
        response: generated.trim().to_string(),
    }))
}

#[derive(Serialize)]
pub struct BreakResponse {
    pub suggestion: String,
}

/// POST /api/generate-break
/// The client posts `{}`; any body is ignored.
pub async fn handle_generate_break(
    State(state): State<AppState>,
) -> Result<Json<BreakResponse>, AppError> {
    let generated = state.generator.generate(BREAK_PROMPT, &BREAK_PARAMS).await?;

    Ok(Json(BreakResponse {
        suggestion: generated.trim().to_string(),
    }))
}

#[derive(Deserialize)]
pub struct MotivationRequest {
    pub context: Option<String>,
}

#[derive(Serialize)]
pub struct MotivationResponse {
    pub message: String,
}

/// POST /api/generate-motivation
/// `context` is optional; a blank one falls back to the generic student context.
pub async fn handle_generate_motivation(
    State(state): State<AppState>,
    Json(req): Json<MotivationRequest>,
) -> Result<Json<MotivationResponse>, AppError> {
    let context = req
        .context
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_MOTIVATION_CONTEXT);

    let prompt = build_motivation_prompt(context);
    let generated = state.generator.generate(&prompt, &MOTIVATION_PARAMS).await?;

    Ok(Json(MotivationResponse {
        message: generated.trim().to_string(),
    }))
}

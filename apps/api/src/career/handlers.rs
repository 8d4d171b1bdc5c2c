use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::career::prompts::{
    build_cover_letter_prompt, build_cv_analysis_prompt, build_interview_questions_prompt,
    build_job_description_prompt, COVER_LETTER_PARAMS, CV_ANALYSIS_PARAMS,
    INTERVIEW_QUESTIONS_PARAMS, JOB_DESCRIPTION_PARAMS,
};
use crate::career::{Difficulty, QuestionType};
use crate::errors::AppError;
use crate::extract;
use crate::llm_client::strip_code_fences;
use crate::state::AppState;
use crate::upload::UploadedForm;

#[derive(Serialize)]
pub struct CvAnalysisResponse {
    pub analysis: String,
}

/// POST /api/analyze-cv
/// multipart: `cv` (PDF).
pub async fn handle_analyze_cv(
    State(state): State<AppState>,
    multipart: axum::extract::Multipart,
) -> Result<Json<CvAnalysisResponse>, AppError> {
    let form = UploadedForm::collect(multipart).await?;
    let cv = form.file("cv")?;

    let cv_text = extract::pdf_text(cv).await?;

    let prompt = build_cv_analysis_prompt(&cv_text);
    let analysis = state.generator.generate(&prompt, &CV_ANALYSIS_PARAMS).await?;

    Ok(Json(CvAnalysisResponse { analysis }))
}

#[derive(Deserialize)]
pub struct GenerateJdRequest {
    pub role: Option<String>,
    pub experience: Option<u32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateJdResponse {
    pub job_description: String,
}

/// POST /api/generate-jd
pub async fn handle_generate_jd(
    State(state): State<AppState>,
    Json(req): Json<GenerateJdRequest>,
) -> Result<Json<GenerateJdResponse>, AppError> {
    let role = req
        .role
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::missing("role"))?;
    let experience = req.experience.ok_or_else(|| AppError::missing("experience"))?;

    let prompt = build_job_description_prompt(role, experience);
    let job_description = state
        .generator
        .generate(&prompt, &JOB_DESCRIPTION_PARAMS)
        .await?;

    Ok(Json(GenerateJdResponse { job_description }))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterResponse {
    pub cover_letter: String,
}

/// POST /api/generate-cover-letter
/// multipart: `cv` (PDF) + `jobDescription`, `companyName`.
pub async fn handle_generate_cover_letter(
    State(state): State<AppState>,
    multipart: axum::extract::Multipart,
) -> Result<Json<CoverLetterResponse>, AppError> {
    let form = UploadedForm::collect(multipart).await?;
    let cv = form.file("cv")?;
    let job_description = form.field("jobDescription")?.to_string();
    let company_name = form.field("companyName")?.to_string();

    let cv_text = extract::pdf_text(cv).await?;

    let prompt = build_cover_letter_prompt(&cv_text, &job_description, &company_name);
    let cover_letter = state
        .generator
        .generate(&prompt, &COVER_LETTER_PARAMS)
        .await?;

    Ok(Json(CoverLetterResponse { cover_letter }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewQuestionsRequest {
    pub job_description: Option<String>,
    pub difficulty: Option<String>,
    pub question_type: Option<String>,
}

#[derive(Serialize)]
pub struct InterviewQuestionsResponse {
    pub questions: Vec<String>,
}

/// POST /api/interview-questions
pub async fn handle_interview_questions(
    State(state): State<AppState>,
    Json(req): Json<InterviewQuestionsRequest>,
) -> Result<Json<InterviewQuestionsResponse>, AppError> {
    let job_description = req
        .job_description
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::missing("jobDescription"))?;
    let difficulty = Difficulty::parse(
        req.difficulty
            .as_deref()
            .ok_or_else(|| AppError::missing("difficulty"))?,
    )?;
    let question_type = QuestionType::parse(
        req.question_type
            .as_deref()
            .ok_or_else(|| AppError::missing("questionType"))?,
    )?;

    let prompt = build_interview_questions_prompt(job_description, difficulty, question_type);
    let raw = state
        .generator
        .generate(&prompt, &INTERVIEW_QUESTIONS_PARAMS)
        .await?;

    let questions = parse_question_list(&raw)?;
    Ok(Json(InterviewQuestionsResponse { questions }))
}

/// Applies the array contract to interview output: fences stripped, text
/// must frame a JSON array of non-empty strings, and the array must not be
/// empty. Same terminal-failure policy as the quiz contract.
fn parse_question_list(raw: &str) -> Result<Vec<String>, AppError> {
    let cleaned = strip_code_fences(raw);

    if !cleaned.starts_with('[') || !cleaned.ends_with(']') {
        return Err(AppError::MalformedGeneration(cleaned.to_string()));
    }

    let questions: Vec<String> =
        serde_json::from_str(cleaned).map_err(|e| AppError::MalformedGeneration(e.to_string()))?;

    if questions.is_empty() {
        return Err(AppError::EmptyResult);
    }

    if questions.iter().any(|q| q.trim().is_empty()) {
        return Err(AppError::MalformedGeneration(
            "question list contains an empty entry".to_string(),
        ));
    }

    Ok(questions)
}

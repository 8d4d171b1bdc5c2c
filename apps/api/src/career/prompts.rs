// All prompt templates for the career routes. Replace `{placeholders}`
// before sending.

use crate::career::{Difficulty, QuestionType};
use crate::llm_client::GenerationParams;

pub const CV_ANALYSIS_PARAMS: GenerationParams = GenerationParams::new(500);
pub const JOB_DESCRIPTION_PARAMS: GenerationParams = GenerationParams::new(500);
pub const COVER_LETTER_PARAMS: GenerationParams = GenerationParams::new(800);
pub const INTERVIEW_QUESTIONS_PARAMS: GenerationParams = GenerationParams::new(800);

const CV_ANALYSIS_TEMPLATE: &str = r#"Analyze this CV and provide specific feedback on:
1. Strengths
2. Areas for improvement
3. Missing elements
4. Suggestions to make it stand out

CV Content:
{cv_text}

Please provide detailed, constructive feedback."#;

const JOB_DESCRIPTION_TEMPLATE: &str = r#"Generate a detailed job description for a {role} position requiring {experience} years of experience.
Include:
1. Job title and overview
2. Key responsibilities
3. Required qualifications
4. Preferred skills
5. Company culture and benefits"#;

const COVER_LETTER_TEMPLATE: &str = r#"Generate a professional cover letter based on the following information:

CV Content:
{cv_text}

Job Description:
{job_description}

Company Name: {company_name}

Create a compelling cover letter that:
1. Addresses the specific job requirements
2. Highlights relevant experience
3. Shows enthusiasm for the role
4. Maintains a professional tone"#;

const INTERVIEW_QUESTIONS_TEMPLATE: &str = r#"You are an interview coach that ONLY outputs valid JSON arrays of strings. Your response must start with '[' and end with ']'. Do not include any other text or explanation.
Generate 5 {difficulty} {question_type} interview questions for a candidate applying to the following job:

{job_description}

Each array element must be one complete question string."#;

pub fn build_cv_analysis_prompt(cv_text: &str) -> String {
    CV_ANALYSIS_TEMPLATE.replace("{cv_text}", cv_text)
}

pub fn build_job_description_prompt(role: &str, experience: u32) -> String {
    JOB_DESCRIPTION_TEMPLATE
        .replace("{role}", role)
        .replace("{experience}", &experience.to_string())
}

pub fn build_cover_letter_prompt(cv_text: &str, job_description: &str, company_name: &str) -> String {
    COVER_LETTER_TEMPLATE
        .replace("{cv_text}", cv_text)
        .replace("{job_description}", job_description)
        .replace("{company_name}", company_name)
}

pub fn build_interview_questions_prompt(
    job_description: &str,
    difficulty: Difficulty,
    question_type: QuestionType,
) -> String {
    INTERVIEW_QUESTIONS_TEMPLATE
        .replace("{difficulty}", difficulty.label())
        .replace("{question_type}", question_type.label())
        .replace("{job_description}", job_description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cv_prompt_embeds_the_cv() {
        let prompt = build_cv_analysis_prompt("Jane Doe\nRust engineer, 4 years");
        assert!(prompt.contains("Jane Doe"));
        assert!(prompt.contains("Strengths"));
        assert!(!prompt.contains("{cv_text}"));
    }

    #[test]
    fn test_jd_prompt_substitutes_role_and_experience() {
        let prompt = build_job_description_prompt("Backend Engineer", 3);
        assert!(prompt.contains("Backend Engineer position"));
        assert!(prompt.contains("3 years of experience"));
    }

    #[test]
    fn test_cover_letter_prompt_carries_all_three_inputs() {
        let prompt = build_cover_letter_prompt("cv body", "jd body", "Acme Corp");
        assert!(prompt.contains("cv body"));
        assert!(prompt.contains("jd body"));
        assert!(prompt.contains("Company Name: Acme Corp"));
    }

    #[test]
    fn test_interview_prompt_names_difficulty_and_type() {
        let prompt =
            build_interview_questions_prompt("Senior SRE role", Difficulty::Hard, QuestionType::Situational);
        assert!(prompt.contains("hard situational (STAR method)"));
        assert!(prompt.contains("Senior SRE role"));
        assert!(prompt.contains("start with '['"));
    }
}

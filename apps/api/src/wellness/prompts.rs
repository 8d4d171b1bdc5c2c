// Wellness prompt templates. Replace `{placeholders}` before sending.

use crate::llm_client::GenerationParams;

pub const MOOD_PARAMS: GenerationParams = GenerationParams::new(150);
pub const BREAK_PARAMS: GenerationParams = GenerationParams::new(100);
pub const MOTIVATION_PARAMS: GenerationParams = GenerationParams::new(150);

/// Fallback when the motivation request arrives without a context.
pub const DEFAULT_MOTIVATION_CONTEXT: &str = "studying and working towards their goals";

const MOOD_TEMPLATE: &str = r#"As an empathetic AI counselor, analyze this message and provide a supportive, encouraging response. Consider the emotional state and offer appropriate guidance or comfort.

User's message: {text}

Respond in a warm, understanding tone and keep the response concise (2-3 sentences)."#;

pub const BREAK_PROMPT: &str = r#"Generate a short, practical mindfulness or study break suggestion that:
1. Takes 2-5 minutes
2. Helps reduce stress and improve focus
3. Can be done at a study desk
4. Is specific and actionable

Format the response as a single paragraph (2-3 sentences)."#;

const MOTIVATION_TEMPLATE: &str = r#"Generate a personalized motivational message for a student with this context: {context}

The message should be:
1. Personal and specific to their context
2. Encouraging and positive
3. Action-oriented
4. Concise (2-3 sentences)

Make it sound natural and inspiring, not cliché."#;

pub fn build_mood_prompt(text: &str) -> String {
    MOOD_TEMPLATE.replace("{text}", text)
}

pub fn build_motivation_prompt(context: &str) -> String {
    MOTIVATION_TEMPLATE.replace("{context}", context)
}

pub mod gemini;
pub mod language;
pub mod prompt;
pub mod translator;

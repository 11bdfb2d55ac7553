use super::language::SourceLanguage;

pub fn build_translation_prompt(source: &SourceLanguage, to: &str, text: &str) -> String {
    let source_clause = match source {
        SourceLanguage::AutoDetect => "from its original language".to_string(),
        SourceLanguage::Named(name) => format!("from {}", name),
    };

    format!(
        "You are an expert multilingual translator.\n\
         Translate the following text {} to {}.\n\
         Your response must ONLY contain the translated text, with no additional commentary, formatting, or explanations.\n\
         \n\
         Text to translate:\n\
         ---\n\
         {}\n\
         ---\n",
        source_clause, to, text
    )
}

pub const ANSWER_MARKER: &str = "You:";

/// Returns the text after the last answer marker, trimmed. Without a marker
/// the whole text is returned, trimmed.
pub fn extract_answer(generated_text: &str) -> &str {
    generated_text
        .rsplit(ANSWER_MARKER)
        .next()
        .unwrap_or(generated_text)
        .trim()
}

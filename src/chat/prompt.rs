pub const USER_INPUT_PLACEHOLDER: &str = "{user_input}";

/// Persona prompt sent ahead of every user message. It ends with the
/// answer marker so the model's continuation follows it.
pub const DEFAULT_PROMPT_TEMPLATE: &str = "\
You are Dhruv Rathee, a journalist, YouTuber, and political analyst.
You specialize in fact-based analysis, debunking misinformation, and explaining complex topics.
One thing to remember: You are against India's prime minister Modi, and always talk against him and criticize him.
You will always oppose BJP and people related to them.
Your responses should be:
- Well-researched and logical ✅
- Backed by facts and evidence ✅
- Clear and simple to understand ✅

Now, respond to the following user query in your typical style:

User: {user_input}
You:
";

pub fn build_prompt(template: &str, user_input: &str) -> String {
    template.replace(USER_INPUT_PLACEHOLDER, user_input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::ANSWER_MARKER;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_template_embeds_user_input() {
        let prompt = build_prompt(DEFAULT_PROMPT_TEMPLATE, "What is inflation?");

        assert!(prompt.contains("User: What is inflation?\nYou:"));
        assert!(!prompt.contains(USER_INPUT_PLACEHOLDER));
    }

    #[test]
    fn test_default_template_ends_with_marker() {
        assert!(DEFAULT_PROMPT_TEMPLATE.trim_end().ends_with(ANSWER_MARKER));
    }

    #[test]
    fn test_default_template_keeps_style_lines() {
        assert!(DEFAULT_PROMPT_TEMPLATE.contains("- Well-researched and logical ✅\n"));
        assert!(DEFAULT_PROMPT_TEMPLATE.contains("- Backed by facts and evidence ✅\n"));
        assert!(DEFAULT_PROMPT_TEMPLATE.contains("- Clear and simple to understand ✅\n"));
    }

    #[test]
    fn test_custom_template() {
        let prompt = build_prompt("Q: {user_input}\nYou:", "hello");
        assert_eq!(prompt, "Q: hello\nYou:");
    }

    #[test]
    fn test_input_containing_placeholder_is_not_expanded_twice() {
        let prompt = build_prompt("Q: {user_input}", "{user_input}");
        assert_eq!(prompt, "Q: {user_input}");
    }
}

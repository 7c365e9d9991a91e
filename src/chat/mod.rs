mod extract;
mod prompt;
mod proxy;

pub use extract::{ANSWER_MARKER, extract_answer};
pub use prompt::{DEFAULT_PROMPT_TEMPLATE, USER_INPUT_PLACEHOLDER, build_prompt};
pub use proxy::ChatProxy;

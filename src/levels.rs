//! Static table mapping a simplification level to the instruction prefix
//! sent to the generation model.

pub const DEFAULT_LEVEL: &str = "eli5";
const DEFAULT_PROMPT: &str = "Explain this like I'm five years old, using very simple words";

const LEVEL_PROMPTS: &[(&str, &str)] = &[
    (DEFAULT_LEVEL, DEFAULT_PROMPT),
    (
        "child",
        "Explain this to a ten year old child using short sentences",
    ),
    (
        "student",
        "Explain this to a high school student with some supporting detail",
    ),
    (
        "expert",
        "Explain this to a domain expert without losing technical depth",
    ),
];

/// Resolves a level key to its prompt template. Unknown keys fall back to
/// the default level rather than erroring.
pub fn resolve(level: &str) -> &'static str {
    if let Some((_, template)) = LEVEL_PROMPTS.iter().find(|(key, _)| *key == level) {
        return template;
    }
    tracing::debug!(level, "unknown level, falling back to {}", DEFAULT_LEVEL);
    DEFAULT_PROMPT
}

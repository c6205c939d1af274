use crate::levels;
use crate::llm::client::TextGenerator;

/// Returned to the caller whenever the inference call fails, in place of a
/// structured error. Kept stable so clients can match on it.
pub const FALLBACK_MESSAGE: &str = "Error generating explanation";

/// The model is steered by prefixing the level's instruction template to the
/// user text. The colon-space separator affects output quality, keep it.
pub fn compose_prompt(template: &str, text: &str) -> String {
    format!("{}: {}", template, text)
}

/// Resolves the level, forwards the composed prompt to the generator and
/// collapses every failure into [`FALLBACK_MESSAGE`].
pub async fn simplify_text(
    generator: &(dyn TextGenerator + Send + Sync),
    text: &str,
    level: &str,
) -> String {
    let template = levels::resolve(level);
    let prompt = compose_prompt(template, text);

    match generator.generate(&prompt).await {
        Ok(generated_text) => generated_text,
        Err(err) => {
            tracing::warn!(error = %err, "inference call failed");
            FALLBACK_MESSAGE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::client::GenerateError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Test double that records every prompt it receives.
    pub struct RecordingGenerator {
        pub prompts: Mutex<Vec<String>>,
        pub reply: Result<String, ()>,
    }

    impl RecordingGenerator {
        pub fn replying(reply: &str) -> Self {
            Self {
                prompts: Mutex::new(Vec::new()),
                reply: Ok(reply.to_string()),
            }
        }

        pub fn failing() -> Self {
            Self {
                prompts: Mutex::new(Vec::new()),
                reply: Err(()),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for RecordingGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(()) => Err(GenerateError::Status {
                    status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
                }),
            }
        }
    }

    #[tokio::test]
    async fn outbound_prompt_is_template_colon_space_text() {
        let text = "Photosynthesis is the process plants use to convert light into energy";
        let generator = RecordingGenerator::replying("Plants eat sunlight.");

        let result = simplify_text(&generator, text, "eli5").await;

        assert_eq!(result, "Plants eat sunlight.");
        let prompts = generator.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert_eq!(
            prompts[0],
            format!("{}: {}", crate::levels::resolve("eli5"), text)
        );
    }

    #[tokio::test]
    async fn unknown_level_sends_the_default_prompt() {
        let generator = RecordingGenerator::replying("ok");
        simplify_text(&generator, "some text", "klingon").await;
        simplify_text(&generator, "some text", "eli5").await;

        let prompts = generator.prompts.lock().unwrap();
        assert_eq!(prompts[0], prompts[1]);
    }

    #[tokio::test]
    async fn failures_collapse_to_the_fallback_message() {
        let generator = RecordingGenerator::failing();

        let first = simplify_text(&generator, "some text", "eli5").await;
        let second = simplify_text(&generator, "some text", "eli5").await;

        assert_eq!(first, FALLBACK_MESSAGE);
        assert_eq!(second, first);
    }
}

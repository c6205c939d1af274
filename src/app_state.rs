use crate::llm;

pub struct AppState {
    pub generator: Box<dyn llm::TextGenerator + Send + Sync>,
    pub model_name: String,
}

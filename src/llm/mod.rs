pub mod client;
pub mod simplify;

pub use client::{GenerateError, HfClient, TextGenerator};
pub use simplify::{simplify_text, FALLBACK_MESSAGE};

pub use super::*;
pub mod tts;

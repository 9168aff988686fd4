pub use super::*;
pub mod voice;

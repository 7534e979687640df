pub mod hook;
pub mod message;

pub use hook::HookInput;
pub use message::{ContextUsage, TranscriptLine, TranscriptMessage};

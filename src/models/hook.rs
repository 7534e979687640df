use serde::Deserialize;
use std::path::Path;

/// JSON payload Claude Code writes to a hook's stdin.
///
/// Only `transcript_path` drives the monitor; the rest is kept for debug logs.
#[derive(Deserialize, Debug, Default)]
pub struct HookInput {
    pub transcript_path: Option<String>,
    pub session_id: Option<String>,
    pub hook_event_name: Option<String>,
    pub tool_name: Option<String>,
    pub cwd: Option<String>,
}

impl HookInput {
    /// Transcript location, if one was supplied and is not blank.
    pub fn transcript(&self) -> Option<&Path> {
        self.transcript_path
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .map(Path::new)
    }
}

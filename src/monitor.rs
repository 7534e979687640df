use tracing::debug;

use crate::budget::{Assessment, ContextBudget};
use crate::display::{Language, format_warning};
use crate::models::HookInput;
use crate::transcript::last_usage;

/// Exit status that tells Claude Code to surface stderr to the agent.
pub const WARNING_EXIT_CODE: u8 = 2;

#[derive(Debug, Clone, Copy, Default)]
pub struct GuardConfig {
    pub budget: ContextBudget,
    pub language: Language,
}

/// Why a run ended without a warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassReason {
    NoInput,
    InvalidInput,
    NoTranscriptPath,
    TranscriptUnreadable,
    NoUsage,
    BelowThreshold(Assessment),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Pass(PassReason),
    Warn(String),
}

impl Outcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Pass(_) => 0,
            Outcome::Warn(_) => WARNING_EXIT_CODE,
        }
    }
}

/// Runs one hook invocation against the raw stdin bytes.
///
/// Never fails: bad input, an unreadable transcript or missing usage all end
/// in [`Outcome::Pass`].
pub fn evaluate(stdin: &[u8], config: &GuardConfig) -> Outcome {
    if stdin.iter().all(u8::is_ascii_whitespace) {
        debug!("empty hook input");
        return Outcome::Pass(PassReason::NoInput);
    }
    let hook: HookInput = match serde_json::from_slice(stdin) {
        Ok(h) => h,
        Err(e) => {
            debug!(error = %e, "hook input is not valid JSON");
            return Outcome::Pass(PassReason::InvalidInput);
        }
    };
    debug!(
        session = hook.session_id.as_deref().unwrap_or("-"),
        event = hook.hook_event_name.as_deref().unwrap_or("-"),
        tool = hook.tool_name.as_deref().unwrap_or("-"),
        cwd = hook.cwd.as_deref().unwrap_or("-"),
        "hook invoked"
    );

    let Some(path) = hook.transcript() else {
        debug!("no transcript_path in hook input");
        return Outcome::Pass(PassReason::NoTranscriptPath);
    };

    let usage = match last_usage(path) {
        Ok(Some(u)) => u,
        Ok(None) => {
            debug!(path = %path.display(), "no usage record in transcript");
            return Outcome::Pass(PassReason::NoUsage);
        }
        Err(e) => {
            debug!(error = %format!("{e:#}"), "transcript unreadable");
            return Outcome::Pass(PassReason::TranscriptUnreadable);
        }
    };

    let assessment = config.budget.assess(usage.context_tokens());
    debug!(
        tokens = assessment.tokens,
        percent = assessment.percent,
        threshold = config.budget.threshold_tokens(),
        "context usage"
    );
    if !assessment.exceeded {
        return Outcome::Pass(PassReason::BelowThreshold(assessment));
    }

    Outcome::Warn(format_warning(&assessment, &config.budget, config.language))
}

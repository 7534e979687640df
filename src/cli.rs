use anyhow::Result;

use crate::budget::{ContextBudget, DEFAULT_CONTEXT_LIMIT, DEFAULT_THRESHOLD_PERCENT};
use crate::display::Language;
use crate::monitor::GuardConfig;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LangArg {
    Pl,
    En,
}

#[derive(clap::Parser, Debug)]
#[command(version, about = "Claude Code hook that warns when the context window fills up")]
pub struct Args {
    /// Context window size in tokens
    #[arg(
        long,
        env = "CONTEXT_GUARDIAN_LIMIT",
        default_value_t = DEFAULT_CONTEXT_LIMIT,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub context_limit: u64,

    /// Warn once this percentage of the window is used
    #[arg(
        long,
        env = "CONTEXT_GUARDIAN_THRESHOLD",
        default_value_t = DEFAULT_THRESHOLD_PERCENT,
        value_parser = clap::value_parser!(u64).range(0..=100)
    )]
    pub threshold: u64,

    /// Warning language: pl|en
    #[arg(long, env = "CONTEXT_GUARDIAN_LANG", value_enum, default_value_t = LangArg::Pl)]
    pub lang: LangArg,

    /// Log each step of the evaluation to stderr
    #[arg(long, env = "CONTEXT_GUARDIAN_DEBUG")]
    pub debug: bool,
}

impl Args {
    pub fn try_parse() -> Result<Self, clap::Error> {
        <Args as clap::Parser>::try_parse()
    }

    pub fn config(&self) -> Result<GuardConfig> {
        let budget = ContextBudget::new(self.context_limit, self.threshold)?;
        let language = match self.lang {
            LangArg::Pl => Language::Polish,
            LangArg::En => Language::English,
        };
        Ok(GuardConfig { budget, language })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn defaults_match_reference_hook() {
        let args = Args::try_parse_from(["context_guardian"]).unwrap();
        let config = args.config().unwrap();
        assert_eq!(config.budget, ContextBudget::default());
        assert_eq!(config.language, Language::Polish);
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "context_guardian",
            "--context-limit",
            "1000000",
            "--threshold",
            "90",
            "--lang",
            "en",
        ])
        .unwrap();
        let config = args.config().unwrap();
        assert_eq!(config.budget.threshold_tokens(), 900_000);
        assert_eq!(config.language, Language::English);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert!(Args::try_parse_from(["context_guardian", "--threshold", "150"]).is_err());
        assert!(Args::try_parse_from(["context_guardian", "--context-limit", "0"]).is_err());
    }
}

use anyhow::{Result, bail};

pub const DEFAULT_CONTEXT_LIMIT: u64 = 200_000;
pub const DEFAULT_THRESHOLD_PERCENT: u64 = 75;

/// Context window size and the share of it that triggers a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextBudget {
    pub limit: u64,
    pub threshold_percent: u64,
}

impl Default for ContextBudget {
    fn default() -> Self {
        Self {
            limit: DEFAULT_CONTEXT_LIMIT,
            threshold_percent: DEFAULT_THRESHOLD_PERCENT,
        }
    }
}

/// Where a token count sits relative to a [`ContextBudget`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assessment {
    pub tokens: u64,
    pub percent: u64,
    pub exceeded: bool,
}

impl ContextBudget {
    pub fn new(limit: u64, threshold_percent: u64) -> Result<Self> {
        if limit == 0 {
            bail!("context limit must be greater than zero");
        }
        if threshold_percent > 100 {
            bail!("threshold must be a percentage between 0 and 100, got {threshold_percent}");
        }
        Ok(Self {
            limit,
            threshold_percent,
        })
    }

    /// Absolute warning threshold, floored (150,000 for the defaults).
    pub fn threshold_tokens(&self) -> u64 {
        self.limit.saturating_mul(self.threshold_percent) / 100
    }

    /// Floored percentage of the limit; exceeds 100 past the window.
    pub fn percent_of(&self, tokens: u64) -> u64 {
        tokens.saturating_mul(100) / self.limit.max(1)
    }

    pub fn assess(&self, tokens: u64) -> Assessment {
        Assessment {
            tokens,
            percent: self.percent_of(tokens),
            exceeded: tokens >= self.threshold_tokens(),
        }
    }
}

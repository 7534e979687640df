use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Input-side token counters of one assistant turn. Output tokens are not tracked.
#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct ContextUsage {
    #[serde(deserialize_with = "lenient_tokens")]
    pub input_tokens: u64,
    #[serde(deserialize_with = "lenient_tokens")]
    pub cache_creation_input_tokens: u64,
    #[serde(deserialize_with = "lenient_tokens")]
    pub cache_read_input_tokens: u64,
}

impl ContextUsage {
    pub fn context_tokens(&self) -> u64 {
        self.input_tokens
            .saturating_add(self.cache_creation_input_tokens)
            .saturating_add(self.cache_read_input_tokens)
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct TranscriptMessage {
    /// `None` when the key is absent, `Some(None)` when it is `null`.
    #[serde(default, deserialize_with = "present_usage")]
    pub usage: Option<Option<ContextUsage>>,
}

#[derive(Deserialize, Debug, Default)]
pub struct TranscriptLine {
    pub message: Option<TranscriptMessage>,
}

// A usage value that is not an object still replaces the previous record,
// with every counter at zero.
fn present_usage<'de, D>(deserializer: D) -> Result<Option<Option<ContextUsage>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(Some(match value {
        Value::Null => None,
        Value::Object(_) => Some(serde_json::from_value(value).unwrap_or_default()),
        _ => Some(ContextUsage::default()),
    }))
}

// Anything that is not a non-negative number counts as zero.
fn lenient_tokens<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && *f >= 0.0)
                    .map(|f| f as u64)
            })
            .unwrap_or(0),
        _ => 0,
    })
}

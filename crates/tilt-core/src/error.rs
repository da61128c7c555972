use thiserror::Error;

/// Configuration problems detected when a card is built.
///
/// Runtime operations never fail; degenerate input resolves to neutral state
/// or a no-op instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CardError {
    #[error("invalid tilt tuning: {field} = {value}")]
    InvalidTuning { field: &'static str, value: f32 },

    #[error("invalid option `{name}`: {reason}")]
    InvalidOption { name: String, reason: String },

    #[error("invalid duration `{name}`: {millis} ms")]
    InvalidDuration { name: &'static str, millis: f64 },
}

impl CardError {
    pub fn option(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOption {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

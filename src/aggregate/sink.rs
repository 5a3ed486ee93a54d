//! Destination for the warnings produced while aggregating.

/// Receives formatted warning lines. The aggregation core writes nothing
/// else and never logs directly.
pub trait WarningSink {
    fn warn(&mut self, message: String);
}

/// Captures warnings in memory.
impl WarningSink for Vec<String> {
    fn warn(&mut self, message: String) {
        self.push(message);
    }
}

/// Forwards each warning to `tracing` at WARN level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn warn(&mut self, message: String) {
        tracing::warn!("{message}");
    }
}

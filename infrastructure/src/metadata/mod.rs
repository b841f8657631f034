//! Metadata adapters

use parley_application::MetadataProvider;
use serde_json::Value;

/// Sends the same metadata object with every utterance.
///
/// Built from the `[metadata]` config table.
#[derive(Debug, Clone, Default)]
pub struct StaticMetadata {
    value: Value,
}

impl StaticMetadata {
    pub fn new(value: Value) -> Self {
        Self { value }
    }
}

impl MetadataProvider for StaticMetadata {
    fn metadata(&self) -> Value {
        self.value.clone()
    }
}

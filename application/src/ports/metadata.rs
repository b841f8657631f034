//! Metadata port
//!
//! Every utterance is submitted together with a metadata object built by the
//! host application (page, locale, user traits...).

use serde_json::Value;

/// Builds the metadata sent alongside each utterance
pub trait MetadataProvider: Send + Sync {
    fn metadata(&self) -> Value;
}

/// Sends no metadata
pub struct NoMetadata;

impl MetadataProvider for NoMetadata {
    fn metadata(&self) -> Value {
        Value::Null
    }
}

use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

/// Everything a batch run needs, passed in explicitly.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ExportConfig {
    /// Path of the base prefab whose direct children get exported.
    pub source: String,

    /// Directory the standalone child prefabs are written to.
    pub output_dir: String,

    /// Stop after this many children. Mainly for manual testing; must be > 0 when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl ExportConfig {
    pub fn new(source: impl Into<String>, output_dir: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            output_dir: output_dir.into(),
            limit: None,
        }
    }

    /// Fail-fast precondition checks; nothing is touched when any of these trips.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.output_dir.trim().is_empty() {
            return Err(PipelineError::PreconditionUnset(
                "no exported object path set",
            ));
        }
        if self.source.trim().is_empty() {
            return Err(PipelineError::PreconditionUnset(
                "no base prefab to export set",
            ));
        }
        if self.limit == Some(0) {
            return Err(PipelineError::PreconditionUnset(
                "export limit must be greater than 0",
            ));
        }
        Ok(())
    }
}

use std::io;
use thiserror::Error;

/// Pipeline failure kinds.
///
/// Precondition violations abort the whole run before any mutation. A missing base
/// asset is fatal too; missing *child* assets are logged and skipped by the driver
/// instead of surfacing here. Expected-absent conditions (no renderable part, no
/// legacy metadata) are silent no-ops and have no variant.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{0}")]
    PreconditionUnset(&'static str),

    #[error("asset cannot be found at `{path}`")]
    AssetNotFound { path: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

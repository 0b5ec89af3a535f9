pub mod batch;
pub mod config;
pub mod error;
pub mod flatten;
pub mod metadata;
pub mod recentre;

pub use batch::{BatchReport, run_export};
pub use config::ExportConfig;
pub use error::PipelineError;
pub use flatten::flatten_child;
pub use metadata::migrate_metadata;
pub use recentre::recentre_bounds;

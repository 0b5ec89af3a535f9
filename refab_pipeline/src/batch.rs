use std::io;

use refab_core::PrefabData;
use uuid::Uuid;

use crate::config::ExportConfig;
use crate::error::PipelineError;
use crate::flatten::flatten_child;
use crate::metadata::migrate_metadata;
use crate::recentre::recentre_bounds;

/// Outcome of a batch run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Children fully flattened, migrated, recentred and persisted.
    pub processed: u32,
    /// Children abandoned because their source asset failed to resolve or load.
    pub skipped: u32,
}

/// Run the full export over every direct child of the base prefab.
///
/// Children are processed strictly one at a time, each persisted and released
/// before the next loads. A child whose source cannot be resolved or loaded is
/// logged and skipped; its siblings still run. The base itself is persisted once at
/// the end, limit or not.
pub fn run_export(config: &ExportConfig) -> Result<BatchReport, PipelineError> {
    config.validate()?;

    log::info!("applying prefab metadata");

    let mut base = PrefabData::load(&config.source).map_err(|_| PipelineError::AssetNotFound {
        path: config.source.clone(),
    })?;

    let children: Vec<Uuid> = base.children_of(&base.root_id).to_vec();
    log::info!("child count = {}", children.len());

    let mut report = BatchReport::default();
    for child_id in children {
        let Some(source_path) = base
            .get(&child_id)
            .and_then(|n| n.source_asset_path().map(str::to_string))
        else {
            log::error!("child has no source asset path, skipping");
            report.skipped += 1;
            continue;
        };

        let child_prefab = match PrefabData::load(&source_path) {
            Ok(prefab) => prefab,
            Err(err) => {
                log::error!("asset cannot be found at `{source_path}`: {err}");
                report.skipped += 1;
                continue;
            }
        };

        match process_child(child_prefab, &mut base, child_id, &config.output_dir) {
            Ok(()) => report.processed += 1,
            Err(err) => {
                log::error!("failed to process `{source_path}`: {err}");
                report.skipped += 1;
            }
        }

        if let Some(limit) = config.limit {
            if report.processed >= limit {
                break;
            }
        }
    }

    base.save(&config.source)?;
    log::info!(
        "metadata application complete ({} processed, {} skipped)",
        report.processed,
        report.skipped
    );
    Ok(report)
}

/// One child through the three stages. The flattened copy lives only for the
/// duration of this call.
fn process_child(
    child: PrefabData,
    base: &mut PrefabData,
    child_id: Uuid,
    output_dir: &str,
) -> io::Result<()> {
    let out_path = flatten_child(child, output_dir)?;

    let mut flattened = PrefabData::load(&out_path)?;
    let flattened_root = flattened.root_id;
    if let (Some(output_root), Some(original)) =
        (flattened.get_mut(&flattened_root), base.get_mut(&child_id))
    {
        migrate_metadata(output_root, original);
    }

    recentre_bounds(&mut flattened);
    flattened.save(&out_path)?;
    Ok(())
}

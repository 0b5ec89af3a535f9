use refab_core::{MetadataPlus, SceneNode};

/// Copy the legacy metadata of `original` onto `output_root` as persisted metadata.
///
/// Idempotent: an output that already carries persisted metadata is left alone.
/// Stale duplicate legacy copies on the original are discarded, first-found wins.
/// An original with no legacy metadata at all is nothing to migrate, not an error.
pub fn migrate_metadata(output_root: &mut SceneNode, original: &mut SceneNode) {
    if output_root.metadata.is_some() {
        return;
    }

    if original.legacy_metadata.len() > 1 {
        log::warn!(
            "`{}` carries {} legacy metadata copies, keeping the first",
            original.name,
            original.legacy_metadata.len()
        );
        original.legacy_metadata.truncate(1);
    }

    let Some(legacy) = original.legacy_metadata.first() else {
        return;
    };

    let mut migrated = MetadataPlus::new();
    for (key, item) in &legacy.parameters {
        log::debug!("migrating {key} - {}", item.value);
        migrated
            .parameters
            .insert(key.clone(), item.value.clone());
    }

    output_root.metadata = Some(migrated);
}

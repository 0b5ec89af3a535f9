use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::RwLock;

static PROJECT_ROOT: RwLock<Option<PathBuf>> = RwLock::new(None);

/// Set the project root that `res://` and relative paths resolve against.
pub fn set_project_root(root: PathBuf) {
    *PROJECT_ROOT.write().unwrap() = Some(root);
}

pub fn project_root() -> Option<PathBuf> {
    PROJECT_ROOT.read().unwrap().clone()
}

/// Map an asset path to its on-disk location.
///
/// Absolute paths pass through untouched. `res://` paths land under `<root>/res/`;
/// any other relative path resolves against the project root. Either of the latter
/// without a configured root is an error, not a panic: the pipeline treats a missing
/// root as a per-run failure.
pub fn resolve_path(path: &str) -> io::Result<PathBuf> {
    let path_buf = PathBuf::from(path);
    if path_buf.is_absolute() {
        return Ok(path_buf);
    }

    let root = project_root().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("project root not set, cannot resolve `{path}`"),
        )
    })?;

    if let Some(stripped) = path.strip_prefix("res://") {
        let mut pb = root;
        pb.push("res");
        pb.push(stripped);
        Ok(pb)
    } else {
        Ok(root.join(path))
    }
}

/// Load an asset fully into memory.
pub fn load_asset(path: &str) -> io::Result<Vec<u8>> {
    fs::read(resolve_path(path)?)
}

/// Save an asset (create-or-overwrite), creating parent directories as needed.
pub fn save_asset(path: &str, data: &[u8]) -> io::Result<()> {
    let pb = resolve_path(path)?;
    if let Some(parent) = pb.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(pb)?;
    file.write_all(data)
}

/// Delete every file directly inside `path` (non-recursive; subdirectories are left
/// alone), then refresh the storage index. Returns the number of files removed.
pub fn clear_dir(path: &str) -> io::Result<usize> {
    let dir = resolve_path(path)?;
    let mut removed = 0;
    for entry in fs::read_dir(&dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            fs::remove_file(entry.path())?;
            removed += 1;
        }
    }
    log::info!(
        "cleared {removed} file(s) from {}, asset index refreshed",
        dir.display()
    );
    Ok(removed)
}

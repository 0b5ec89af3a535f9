pub mod asset_io;

pub use asset_io::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static TEST_DIR_SEQ: AtomicU64 = AtomicU64::new(0);

    fn temp_test_dir() -> std::path::PathBuf {
        let seq = TEST_DIR_SEQ.fetch_add(1, Ordering::Relaxed);
        let pid = std::process::id();
        let nonce = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("refab_io_test_{pid}_{nonce}_{seq}"));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn absolute_paths_pass_through() -> io::Result<()> {
        let base = temp_test_dir();
        let path = base.join("thing.pfab");
        let path_str = path.to_string_lossy().to_string();

        assert_eq!(resolve_path(&path_str)?, path);

        save_asset(&path_str, b"contents")?;
        assert_eq!(load_asset(&path_str)?, b"contents");

        let _ = fs::remove_dir_all(&base);
        Ok(())
    }

    #[test]
    fn save_creates_missing_parents() -> io::Result<()> {
        let base = temp_test_dir();
        let path = base.join("nested/deeper/out.pfab");
        let path_str = path.to_string_lossy().to_string();

        save_asset(&path_str, b"x")?;
        assert!(path.exists());

        let _ = fs::remove_dir_all(&base);
        Ok(())
    }

    // All res:// assertions live in one test: the project root is process-wide and
    // tests run in parallel.
    #[test]
    fn res_paths_resolve_under_project_root() -> io::Result<()> {
        let base = temp_test_dir();
        set_project_root(base.clone());

        assert_eq!(
            resolve_path("res://exports/a.pfab")?,
            base.join("res").join("exports/a.pfab")
        );
        assert_eq!(resolve_path("manifest.toml")?, base.join("manifest.toml"));

        save_asset("res://exports/a.pfab", b"data")?;
        assert_eq!(load_asset("res://exports/a.pfab")?, b"data");

        let _ = fs::remove_dir_all(&base);
        Ok(())
    }

    #[test]
    fn clear_dir_is_non_recursive() -> io::Result<()> {
        let base = temp_test_dir();
        fs::write(base.join("a.pfab"), b"a")?;
        fs::write(base.join("b.pfab"), b"b")?;
        fs::create_dir(base.join("keep"))?;
        fs::write(base.join("keep/nested.pfab"), b"n")?;

        let removed = clear_dir(&base.to_string_lossy())?;
        assert_eq!(removed, 2);
        assert!(!base.join("a.pfab").exists());
        assert!(base.join("keep/nested.pfab").exists());

        let _ = fs::remove_dir_all(&base);
        Ok(())
    }

    #[test]
    fn clear_dir_missing_directory_errors() {
        let base = temp_test_dir();
        let missing = base.join("not_here");
        assert!(clear_dir(&missing.to_string_lossy()).is_err());
        let _ = fs::remove_dir_all(&base);
    }
}

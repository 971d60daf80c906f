use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, SwapError};
use crate::rewriter::rewrite;

pub const MDX_SUFFIX: &str = ".mdx";

pub fn is_mdx(file_name: &OsStr) -> bool {
    file_name
        .as_encoded_bytes()
        .ends_with(MDX_SUFFIX.as_bytes())
}

/// Rewrites every `.mdx` entry directly inside `dir`, in listing order.
///
/// Subdirectories are not descended into. The first failure stops the run.
pub fn process_all(dir: &Path) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|e| SwapError::read_dir(dir, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| SwapError::read_dir(dir, e))?;
        let file_name = entry.file_name();
        if !is_mdx(&file_name) {
            continue;
        }

        let path = dir.join(&file_name);
        let outcome = rewrite(&path)?;
        debug!("{}: {:?}", path.display(), outcome);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIVE: &str = "A\nB\nC\nD\nE\n";
    const FIVE_SWAPPED: &str = "A\nD\nC\nB\nE\n";

    #[test]
    fn test_is_mdx() {
        assert!(is_mdx(OsStr::new("post.mdx")));
        assert!(is_mdx(OsStr::new(".mdx")));
        assert!(is_mdx(OsStr::new("archive.tar.mdx")));
        assert!(!is_mdx(OsStr::new("post.md")));
        assert!(!is_mdx(OsStr::new("post.MDX")));
        assert!(!is_mdx(OsStr::new("post.mdx.bak")));
        assert!(!is_mdx(OsStr::new("mdx")));
    }

    #[test]
    fn test_only_mdx_files_are_rewritten() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("a.mdx"), FIVE).unwrap();
        fs::write(root.join("b.mdx"), "A\nB\n").unwrap();
        fs::write(root.join("notes.md"), FIVE).unwrap();
        fs::write(root.join("notes.txt"), FIVE).unwrap();
        fs::create_dir(root.join("nested")).unwrap();
        fs::write(root.join("nested").join("deep.mdx"), FIVE).unwrap();

        process_all(root).unwrap();

        assert_eq!(fs::read_to_string(root.join("a.mdx")).unwrap(), FIVE_SWAPPED);
        assert_eq!(fs::read_to_string(root.join("b.mdx")).unwrap(), "A\nB\n");
        assert_eq!(fs::read_to_string(root.join("notes.md")).unwrap(), FIVE);
        assert_eq!(fs::read_to_string(root.join("notes.txt")).unwrap(), FIVE);
        assert_eq!(
            fs::read_to_string(root.join("nested").join("deep.mdx")).unwrap(),
            FIVE
        );
    }

    #[test]
    fn test_three_line_file_aborts_run() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bad.mdx"), "A\nB\nC\n").unwrap();

        let err = process_all(dir.path()).unwrap_err();
        assert!(matches!(err, SwapError::MissingLine { line_count: 3, .. }));
        assert_eq!(
            fs::read_to_string(dir.path().join("bad.mdx")).unwrap(),
            "A\nB\nC\n"
        );
    }

    #[test]
    fn test_mdx_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("folder.mdx")).unwrap();

        assert!(matches!(
            process_all(dir.path()),
            Err(SwapError::Io { .. })
        ));
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        assert!(matches!(
            process_all(&missing),
            Err(SwapError::ReadDir { .. })
        ));
    }

    #[test]
    fn test_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(process_all(dir.path()).is_ok());
    }
}

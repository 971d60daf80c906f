use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, SwapError};
use crate::line_file::LineFile;

/// 0-based lines exchanged by [`rewrite`].
pub const SWAP_LINES: (usize, usize) = (1, 3);

/// A file needs more lines than this before it is rewritten.
pub const MIN_LINES_EXCLUSIVE: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rewrite {
    Swapped,
    Unchanged,
}

/// Swaps the second and fourth lines of the file at `path` in place.
///
/// Files with two lines or fewer are left alone and never written. A file
/// with exactly three lines passes that check but has no fourth line, which
/// is reported as [`SwapError::MissingLine`] before anything is written.
pub fn rewrite(path: &Path) -> Result<Rewrite> {
    let contents = {
        let file = LineFile::open(path).map_err(|e| SwapError::io(path, e))?;
        let line_count = file.line_count();

        if line_count <= MIN_LINES_EXCLUSIVE {
            debug!("{}: {} lines, skipping", path.display(), line_count);
            return Ok(Rewrite::Unchanged);
        }

        let (a, b) = SWAP_LINES;
        file.with_lines_swapped(a, b)
            .ok_or_else(|| SwapError::MissingLine {
                path: path.to_path_buf(),
                line_count,
                line: b + 1,
            })?
    };

    fs::write(path, contents).map_err(|e| SwapError::io(path, e))?;
    debug!(
        "{}: swapped lines {} and {}",
        path.display(),
        SWAP_LINES.0 + 1,
        SWAP_LINES.1 + 1
    );
    Ok(Rewrite::Swapped)
}

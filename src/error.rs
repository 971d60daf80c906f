use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum SwapError {
    Io { path: PathBuf, source: io::Error },
    ReadDir { dir: PathBuf, source: io::Error },
    MissingLine {
        path: PathBuf,
        line_count: usize,
        line: usize,
    },
}

impl SwapError {
    pub fn io(path: &Path, source: io::Error) -> Self {
        SwapError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn read_dir(dir: &Path, source: io::Error) -> Self {
        SwapError::ReadDir {
            dir: dir.to_path_buf(),
            source,
        }
    }
}

impl std::error::Error for SwapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SwapError::Io { source, .. } => Some(source),
            SwapError::ReadDir { source, .. } => Some(source),
            SwapError::MissingLine { .. } => None,
        }
    }
}

impl fmt::Display for SwapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwapError::Io { path, source } => {
                write!(f, "I/O error on {}: {}", path.display(), source)
            }
            SwapError::ReadDir { dir, source } => {
                write!(f, "Failed to list {}: {}", dir.display(), source)
            }
            SwapError::MissingLine {
                path,
                line_count,
                line,
            } => write!(
                f,
                "{} has {} lines, line {} does not exist",
                path.display(),
                line_count,
                line
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, SwapError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_messages() {
        let err = SwapError::MissingLine {
            path: PathBuf::from("post.mdx"),
            line_count: 3,
            line: 4,
        };
        assert_eq!(err.to_string(), "post.mdx has 3 lines, line 4 does not exist");
        assert!(err.source().is_none());

        let err = SwapError::read_dir(
            Path::new("content"),
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.to_string(), "Failed to list content: gone");
        assert!(err.source().is_some());
    }
}

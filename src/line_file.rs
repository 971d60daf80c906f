use memmap2::Mmap;
use std::fs::File;
use std::io;
use std::path::Path;

/// A read-only view of a file split into lines.
///
/// Lines keep their terminator bytes exactly as stored, so concatenating
/// every line in order reproduces the file.
pub struct LineFile {
    mmap: Option<Mmap>,
    line_offsets: Vec<usize>,
}

impl LineFile {
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        let metadata = file.metadata()?;
        if metadata.is_dir() {
            return Err(io::Error::new(io::ErrorKind::Other, "is a directory"));
        }

        // Empty files cannot be mapped on every platform.
        let mmap = if metadata.len() == 0 {
            None
        } else {
            Some(unsafe { Mmap::map(&file)? })
        };

        let mut loader = Self {
            mmap,
            line_offsets: Vec::new(),
        };

        loader.build_line_index();
        Ok(loader)
    }

    fn bytes(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or(&[])
    }

    fn build_line_index(&mut self) {
        let data = self.bytes();
        let mut offsets = Vec::new();
        if !data.is_empty() {
            offsets.push(0);
        }

        for (i, &byte) in data.iter().enumerate() {
            if byte == b'\n' {
                let next_line_start = i + 1;
                if next_line_start < data.len() {
                    offsets.push(next_line_start);
                }
            }
        }

        self.line_offsets = offsets;
    }

    pub fn line_count(&self) -> usize {
        self.line_offsets.len()
    }

    /// Returns a 0-based line including its terminator.
    pub fn line(&self, line_num: usize) -> Option<&[u8]> {
        let start = *self.line_offsets.get(line_num)?;
        let end = self
            .line_offsets
            .get(line_num + 1)
            .copied()
            .unwrap_or(self.bytes().len());

        Some(&self.bytes()[start..end])
    }

    /// Builds the file contents with lines `a` and `b` exchanged.
    ///
    /// Returns `None` when either line does not exist.
    pub fn with_lines_swapped(&self, a: usize, b: usize) -> Option<Vec<u8>> {
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        let first_line = self.line(first)?;
        let second_line = self.line(second)?;

        let data = self.bytes();
        let first_start = self.line_offsets[first];
        let second_start = self.line_offsets[second];
        let second_end = second_start + second_line.len();

        let mut out = Vec::with_capacity(data.len());
        out.extend_from_slice(&data[..first_start]);
        out.extend_from_slice(second_line);
        out.extend_from_slice(&data[first_start + first_line.len()..second_start]);
        out.extend_from_slice(first_line);
        out.extend_from_slice(&data[second_end..]);
        Some(out)
    }
}

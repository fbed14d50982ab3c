//! Chunked text file splitting.
//!
//! Splits a large delimited text file into a series of smaller files, each
//! starting with a copy of the original header line and holding at most
//! `chunk_size` data rows.

use crate::{Result, VireoError};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Outcome of a split run.
#[derive(Debug, Clone)]
pub struct SplitReport {
    /// Number of data rows processed, not counting the header.
    pub rows: u64,
    /// Number of chunk files created.
    pub chunks: u64,
    /// Base name pattern of the chunk files.
    pub file_pattern: String,
    /// Extension of the chunk files.
    pub file_ext: String,
}

impl SplitReport {
    /// Name of the chunk file with the given index.
    pub fn chunk_name(&self, index: u64) -> String {
        format!("{}-{}.{}", self.file_pattern, index, self.file_ext)
    }
}

/// Split `input` into chunk files under `workspace`, each carrying the
/// header line and at most `chunk_size` data rows.
///
/// Chunk files are named `<stem>-<index>.<ext>` with a zero-based index. A
/// file with no data rows produces no chunk files.
pub fn split_text_file(input: &Path, workspace: &Path, chunk_size: usize) -> Result<SplitReport> {
    if chunk_size == 0 {
        return Err(VireoError::Config(
            "chunk size must be greater than zero".to_string(),
        ));
    }
    if !input.is_file() {
        return Err(VireoError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("no such file: {}", input.display()),
        )));
    }

    let file_pattern = input
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| VireoError::Parse(format!("unusable file name: {}", input.display())))?
        .to_string();
    let file_ext = input
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("txt")
        .to_string();

    std::fs::create_dir_all(workspace)?;

    let mut lines = BufReader::new(File::open(input)?).lines();

    // First line is the header; an entirely empty file yields no chunks
    let header = match lines.next() {
        Some(line) => line?,
        None => {
            return Ok(SplitReport {
                rows: 0,
                chunks: 0,
                file_pattern,
                file_ext,
            })
        }
    };

    let mut dest: Option<BufWriter<File>> = None;
    let mut rows: u64 = 0;
    let mut chunks: u64 = 0;

    for line in lines {
        let line = line?;
        // Rotate on the first data row and every chunk_size rows after
        if rows % chunk_size as u64 == 0 {
            if let Some(mut writer) = dest.take() {
                writer.flush()?;
            }
            let path = chunk_path(workspace, &file_pattern, chunks, &file_ext);
            let mut writer = BufWriter::new(File::create(&path)?);
            writeln!(writer, "{}", header)?;
            dest = Some(writer);
            chunks += 1;
        }
        // dest is always open here; the rotation above runs before row 0
        if let Some(writer) = dest.as_mut() {
            writeln!(writer, "{}", line)?;
        }
        rows += 1;
    }

    if let Some(mut writer) = dest.take() {
        writer.flush()?;
    }

    debug!(
        "split {} rows from {} into {} chunks under {}",
        rows,
        input.display(),
        chunks,
        workspace.display()
    );

    Ok(SplitReport {
        rows,
        chunks,
        file_pattern,
        file_ext,
    })
}

fn chunk_path(workspace: &Path, pattern: &str, index: u64, ext: &str) -> PathBuf {
    workspace.join(format!("{}-{}.{}", pattern, index, ext))
}

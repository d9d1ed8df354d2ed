//! Gathering the batch of input paths for the command-line driver

pub mod filter;

use std::io::BufRead;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::error::{OutpathError, OutpathResult};

/// Find source files in a directory. If recursive is false only direct children are listed.
///
/// Entries are returned sorted by file name within each directory.
pub fn find_source_files(dir: &Path, recursive: bool) -> OutpathResult<Vec<PathBuf>> {
    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut source_files = Vec::new();

    for entry in WalkDir::new(dir).max_depth(max_depth).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() && filter::is_source_file(entry.path()) {
            source_files.push(entry.into_path());
        }
    }

    debug!(
        "found {} source files under {}",
        source_files.len(),
        dir.display()
    );
    Ok(source_files)
}

/// Expand directory arguments into the source files beneath them.
///
/// Anything that is not an existing directory is kept verbatim, in place.
pub fn gather_inputs(args: &[String], recursive: bool) -> OutpathResult<Vec<String>> {
    let mut inputs = Vec::with_capacity(args.len());

    for arg in args {
        let path = Path::new(arg);
        if path.is_dir() {
            for file in find_source_files(path, recursive)? {
                inputs.push(to_slash(&file)?);
            }
        } else {
            inputs.push(arg.clone());
        }
    }

    Ok(inputs)
}

/// Read one path per line, skipping empty lines.
///
/// Only the line ending is removed; spaces belong to the path.
pub fn read_path_list<R: BufRead>(reader: R) -> OutpathResult<Vec<String>> {
    let mut paths = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| OutpathError::io(e.to_string(), None))?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if !line.is_empty() {
            paths.push(line.to_string());
        }
    }
    Ok(paths)
}

/// Render a filesystem path with forward slashes. Non UTF-8 paths are rejected.
pub fn to_slash(path: &Path) -> OutpathResult<String> {
    let text = path.to_str().ok_or_else(|| {
        OutpathError::discovery(
            format!("path is not valid UTF-8: {}", path.display()),
            Some(path.to_path_buf()),
        )
    })?;
    Ok(text.replace('\\', "/"))
}

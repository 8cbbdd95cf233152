//! Tri-state directory probe

use std::fs;
use std::io;
use std::path::Path;

use glob::{MatchOptions, Pattern};

/// Result of probing a package directory.
///
/// Only `Missing` suppresses the section header; an existing directory
/// without matching files still gets one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirListing {
    /// Path does not exist, or exists but is not a directory.
    Missing,
    /// Directory exists but holds no matching files.
    Empty,
    /// Matching file names, sorted ascending.
    Entries(Vec<String>),
}

impl DirListing {
    pub fn exists(&self) -> bool {
        !matches!(self, DirListing::Missing)
    }

    /// File names found, empty unless `Entries`.
    pub fn files(&self) -> &[String] {
        match self {
            DirListing::Entries(names) => names,
            _ => &[],
        }
    }
}

// Shell-style: `*.java` does not match `.Foo.java`.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

fn is_missing(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}

/// Entry type from the directory listing itself; only symlinks are stat'ed.
///
/// Dangling links are skipped, other lookup failures are returned.
fn is_regular_file(entry: &fs::DirEntry) -> io::Result<bool> {
    let file_type = entry.file_type()?;
    if !file_type.is_symlink() {
        return Ok(file_type.is_file());
    }
    match fs::metadata(entry.path()) {
        Ok(meta) => Ok(meta.is_file()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

/// Probe `dir` for regular files directly inside it whose name matches `pattern`.
///
/// A missing path is not an error. Any other failure, including a listing
/// failure after the directory was found, is returned to the caller.
pub fn probe_dir(dir: &Path, pattern: &Pattern) -> io::Result<DirListing> {
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => return Ok(DirListing::Missing),
        Err(e) if is_missing(&e) => return Ok(DirListing::Missing),
        Err(e) => return Err(e),
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !pattern.matches_with(&name, MATCH_OPTIONS) {
            continue;
        }
        if is_regular_file(&entry)? {
            names.push(name);
        }
    }

    if names.is_empty() {
        return Ok(DirListing::Empty);
    }
    names.sort();
    Ok(DirListing::Entries(names))
}

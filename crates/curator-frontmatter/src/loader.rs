//! Catalog loading - walk a directory tree and parse every record

use crate::error::{LoadError, ParseError};
use crate::FrontMatterParser;
use curator_domain::{Catalog, PatternRecord};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// The index report file name; skipped on load so an `index` run never
/// ingests its own output
pub const INDEX_FILE_NAME: &str = "INDEX.md";

/// Result of loading a catalog directory.
///
/// Parse failures are collected per file rather than aborting the load; the
/// full audit report is the point, so one broken record must not hide the
/// rest. Unreadable files, by contrast, are environment problems and fail
/// the load outright.
#[derive(Debug)]
pub struct LoadOutcome {
    /// Every successfully parsed record, id-indexed
    pub catalog: Catalog,

    /// Files whose front matter could not be parsed, with diagnostics
    pub parse_failures: Vec<(PathBuf, ParseError)>,
}

/// Load every `*.md` record under `dir` using the given parser variant.
///
/// Record paths are stored relative to `dir` so reports are stable across
/// machines.
pub fn load_catalog(
    dir: &Path,
    parser: &dyn FrontMatterParser,
) -> Result<LoadOutcome, LoadError> {
    if !dir.is_dir() {
        return Err(LoadError::NotADirectory(dir.to_path_buf()));
    }

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            LoadError::Io {
                path,
                source: e
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("directory walk failed")),
            }
        })?;
        let path = entry.path();
        if entry.file_type().is_file()
            && path.extension().is_some_and(|ext| ext == "md")
            && entry.file_name() != INDEX_FILE_NAME
        {
            files.push(path.to_path_buf());
        }
    }
    files.sort();

    let mut records = Vec::with_capacity(files.len());
    let mut parse_failures = Vec::new();
    for path in files {
        let text = fs::read_to_string(&path).map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        })?;
        let relative = path.strip_prefix(dir).unwrap_or(&path).to_path_buf();
        match parser.parse(&text) {
            Ok(doc) => {
                records.push(PatternRecord::from_parts(relative, doc.header, doc.body));
            }
            Err(e) => {
                warn!(path = %relative.display(), error = %e, "skipping unparseable record");
                parse_failures.push((relative, e));
            }
        }
    }

    debug!(
        records = records.len(),
        failures = parse_failures.len(),
        "catalog loaded"
    );

    Ok(LoadOutcome {
        catalog: Catalog::from_records(records),
        parse_failures,
    })
}

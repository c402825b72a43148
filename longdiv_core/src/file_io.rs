//! # File I/O Module
//!
//! Reads and writes trace documents and settings files:
//! - **Atomic saves**: Write to .tmp, sync, rename to prevent corruption
//! - **Version validation**: Ensure trace schema compatibility
//!
//! ## Example
//!
//! ```rust,no_run
//! use longdiv_core::division::{solve, DivisionInput, DivisionMode};
//! use longdiv_core::file_io::{load_trace, save_trace};
//! use std::path::Path;
//!
//! let trace = solve(&DivisionInput::new(10.0, 4.0, DivisionMode::Decimal))?;
//! let path = Path::new("ten_by_four.ldt.json");
//!
//! save_trace(&trace, path)?;
//! let doc = load_trace(path)?;
//! assert_eq!(doc.trace.quotient, "2.5");
//! # Ok::<(), longdiv_core::errors::DivError>(())
//! ```

use std::fs::{self, File};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::division::DivisionTrace;
use crate::document::{TraceDocument, SCHEMA_VERSION};
use crate::errors::{DivError, DivResult};
use crate::settings::Settings;

/// Write `contents` to `path` through a sibling temp file.
///
/// The save process:
/// 1. Write to `<path>.tmp`
/// 2. Sync to disk (fsync)
/// 3. Rename over `path` (atomic on most filesystems)
pub fn write_atomic(path: &Path, contents: &[u8]) -> DivResult<()> {
    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        DivError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(contents).map_err(|e| {
        DivError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        DivError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        DivError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    debug!(path = %path.display(), bytes = contents.len(), "atomic write complete");
    Ok(())
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn read_to_string(path: &Path) -> DivResult<String> {
    let mut file = File::open(path)
        .map_err(|e| DivError::file_error("open", path.display().to_string(), e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| DivError::file_error("read", path.display().to_string(), e.to_string()))?;
    Ok(contents)
}

/// Save `trace` as a trace document.
pub fn save_trace(trace: &DivisionTrace, path: &Path) -> DivResult<()> {
    let doc = TraceDocument::new(trace.clone());
    save_document(&doc, path)
}

/// Save an existing document without touching its metadata.
pub fn save_document(doc: &TraceDocument, path: &Path) -> DivResult<()> {
    let json = serde_json::to_string_pretty(doc)
        .map_err(|e| DivError::serialization(e.to_string()))?;
    write_atomic(path, json.as_bytes())?;
    info!(path = %path.display(), steps = doc.trace.step_count(), "trace saved");
    Ok(())
}

/// Load a trace document.
///
/// # Returns
///
/// * `Ok(TraceDocument)` - Successfully loaded document
/// * `Err(DivError::VersionMismatch)` - File version is incompatible
/// * `Err(DivError::SerializationError)` - Invalid JSON
/// * `Err(DivError::FileError)` - I/O error
pub fn load_trace(path: &Path) -> DivResult<TraceDocument> {
    let contents = read_to_string(path)?;

    let doc: TraceDocument =
        serde_json::from_str(&contents).map_err(|e| DivError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    validate_version(&doc.meta.version)?;

    info!(path = %path.display(), version = %doc.meta.version, "trace loaded");
    Ok(doc)
}

/// Save settings as pretty JSON, creating the parent directory if needed.
pub fn save_settings(settings: &Settings, path: &Path) -> DivResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            DivError::file_error("create config dir", parent.display().to_string(), e.to_string())
        })?;
    }
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| DivError::serialization(e.to_string()))?;
    write_atomic(path, json.as_bytes())?;
    info!(path = %path.display(), "settings saved");
    Ok(())
}

pub fn load_settings(path: &Path) -> DivResult<Settings> {
    let contents = read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| DivError::SerializationError {
        reason: format!("Invalid settings in {}: {}", path.display(), e),
    })
}

/// Load settings, falling back to defaults when the file does not exist.
///
/// A file that exists but cannot be parsed is still an error.
pub fn load_settings_or_default(path: &Path) -> DivResult<Settings> {
    match fs::metadata(path) {
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no settings file, using defaults");
            Ok(Settings::default())
        }
        _ => load_settings(path),
    }
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> DivResult<()> {
    let mismatch = || DivError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // In 0.x a newer minor may carry breaking changes
    if current_parts[0] == 0
        && file_parts.len() > 1
        && current_parts.len() > 1
        && file_parts[1] > current_parts[1]
    {
        return Err(mismatch());
    }

    Ok(())
}

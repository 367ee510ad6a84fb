//! Saving and loading a single character file.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use charsheet_core::CharacterRecord;

use crate::repository::codec::{self, RecordParser};
use crate::repository::{RepositoryError, Result, SaveOutcome, SaveRejection};

/// Write `record` to `path` as seven labeled lines.
///
/// Pre-checks, in order, leave the target untouched when they fail:
/// 1. every field is present
/// 2. no text field contains a line break
/// 3. the parent directory exists
///
/// Any existing file is replaced. Content goes to a sibling `.tmp` file first
/// and is renamed over the target, so a failed write never leaves a truncated
/// save behind. I/O faults are returned as errors.
///
/// Because the target is replaced rather than rewritten, a symlink at `path`
/// is replaced by a regular file (its destination is left alone), and a
/// read-only target file does not block the save as long as its directory is
/// writable.
pub fn save_character(record: &CharacterRecord, path: impl AsRef<Path>) -> Result<SaveOutcome> {
    let path = path.as_ref();

    let contents = match codec::encode(record) {
        Ok(contents) => contents,
        Err(rejection) => return Ok(reject(path, rejection)),
    };

    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
        && !dir.is_dir()
    {
        return Ok(reject(path, SaveRejection::MissingDirectory(dir.to_path_buf())));
    }

    let temp_path = temp_path_for(path)?;

    if let Err(err) = fs::write(&temp_path, contents) {
        discard(&temp_path);
        return Err(RepositoryError::Io(err));
    }

    if let Err(err) = fs::rename(&temp_path, path) {
        discard(&temp_path);
        return Err(RepositoryError::Io(err));
    }

    tracing::debug!("Saved character to {}", path.display());

    Ok(SaveOutcome::Saved {
        path: path.to_path_buf(),
    })
}

/// Read a character file.
///
/// Returns `Ok(None)` when the file does not exist or when no field could be
/// recovered from it. Otherwise the record may still be partial.
pub fn load_character(path: impl AsRef<Path>) -> Result<Option<CharacterRecord>> {
    let path = path.as_ref();

    if !path.exists() {
        tracing::debug!("No character file at {}", path.display());
        return Ok(None);
    }

    let reader = BufReader::new(File::open(path)?);
    let mut parser = RecordParser::new();
    for line in reader.lines() {
        parser.feed_line(&line?);
    }

    let record = parser.finish();

    match &record {
        Some(record) if !record.is_complete() => tracing::warn!(
            "Loaded partial character from {} (missing: {:?})",
            path.display(),
            record.missing_fields()
        ),
        Some(_) => tracing::debug!("Loaded character from {}", path.display()),
        None => tracing::debug!("No character fields found in {}", path.display()),
    }

    Ok(record)
}

fn reject(path: &Path, rejection: SaveRejection) -> SaveOutcome {
    tracing::error!("Refusing to save {}: {}", path.display(), rejection);
    SaveOutcome::Rejected(rejection)
}

fn temp_path_for(path: &Path) -> Result<PathBuf> {
    let file_name = path
        .file_name()
        .ok_or_else(|| RepositoryError::InvalidPath(path.to_path_buf()))?;

    let mut temp_name = OsString::from(".");
    temp_name.push(file_name);
    temp_name.push(".tmp");
    Ok(path.with_file_name(temp_name))
}

fn discard(temp_path: &Path) {
    if let Err(err) = fs::remove_file(temp_path) {
        tracing::trace!("Could not remove {}: {}", temp_path.display(), err);
    }
}

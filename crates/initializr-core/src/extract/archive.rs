//! Single-pass zip extraction into a fresh project directory

use super::error::{ExistingKind, ExtractError};
use std::fs::{self, File};
use std::io::{self, Cursor, Read, Write};
use std::path::Path;
use zip::ZipArchive;

/// Counts of what an extraction created
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractSummary {
    pub files: usize,
    pub directories: usize,
}

/// Fail if anything (file, directory or dangling symlink) already sits at `target`
pub fn check_target_available(target: &Path) -> Result<(), ExtractError> {
    match fs::symlink_metadata(target) {
        Ok(meta) => Err(ExtractError::TargetExists {
            path: target.to_path_buf(),
            kind: if meta.is_dir() {
                ExistingKind::Directory
            } else {
                ExistingKind::File
            },
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(ExtractError::io(target, e)),
    }
}

/// Unpack `archive_bytes` into a new directory at `target`
///
/// The archive is opened before anything touches the disk, and `target` must
/// not exist yet. Entries are written in stored order; parent directories are
/// created on demand so entry order does not matter. A failure part way through
/// leaves already written entries in place.
pub fn extract_archive(
    archive_bytes: &[u8],
    target: &Path,
) -> Result<ExtractSummary, ExtractError> {
    let mut archive = ZipArchive::new(Cursor::new(archive_bytes))?;

    check_target_available(target)?;
    create_target(target)?;

    let mut summary = ExtractSummary::default();

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        let relative = entry
            .enclosed_name()
            .ok_or_else(|| ExtractError::UnsafeEntryPath(entry.name().to_string()))?;
        let out_path = target.join(relative);
        let mode = entry.unix_mode();

        if entry.is_dir() {
            fs::create_dir_all(&out_path).map_err(|e| ExtractError::io(&out_path, e))?;
            apply_mode(&out_path, mode)?;
            summary.directories += 1;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ExtractError::io(parent, e))?;
        }

        let mut out = File::create(&out_path).map_err(|e| ExtractError::io(&out_path, e))?;
        copy_entry(&mut entry, &mut out, &out_path)?;
        drop(out);

        apply_mode(&out_path, mode)?;
        summary.files += 1;
    }

    Ok(summary)
}

/// Create the target root; something appearing there since the availability
/// check is reported as what it actually is
fn create_target(target: &Path) -> Result<(), ExtractError> {
    fs::create_dir(target).map_err(|e| match e.kind() {
        io::ErrorKind::AlreadyExists => match check_target_available(target) {
            Err(existing) => existing,
            Ok(()) => ExtractError::io(target, e),
        },
        _ => ExtractError::io(target, e),
    })
}

/// Stream one entry to disk. Read failures (bad checksum, broken deflate
/// stream) belong to the archive; write failures belong to the filesystem.
fn copy_entry<R: Read>(
    entry: &mut R,
    out: &mut File,
    out_path: &Path,
) -> Result<(), ExtractError> {
    let mut buf = [0u8; 8192];
    loop {
        let read = match entry.read(&mut buf) {
            Ok(0) => return Ok(()),
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                return Err(ExtractError::CorruptEntry {
                    path: out_path.to_path_buf(),
                    source: e,
                })
            }
        };
        out.write_all(&buf[..read])
            .map_err(|e| ExtractError::io(out_path, e))?;
    }
}

#[cfg(unix)]
fn apply_mode(path: &Path, mode: Option<u32>) -> Result<(), ExtractError> {
    use std::os::unix::fs::PermissionsExt;

    if let Some(mode) = mode {
        fs::set_permissions(path, fs::Permissions::from_mode(mode & 0o7777))
            .map_err(|e| ExtractError::io(path, e))?;
    }
    Ok(())
}

#[cfg(not(unix))]
fn apply_mode(_path: &Path, _mode: Option<u32>) -> Result<(), ExtractError> {
    Ok(())
}

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use modelgen_config::WriteMode;
use tempfile::Builder;
use tracing::debug;

use crate::error::GenerateError;

/// Write `text` to `path`, replacing any previous content.
///
/// The destination directory must already exist.
pub fn write_output(path: &Path, text: &str, mode: WriteMode) -> Result<(), GenerateError> {
    if mode.is_atomic() {
        write_atomic(path, text)?;
    } else {
        write_direct(path, text)?;
    }

    debug!(path = %path.display(), bytes = text.len(), ?mode, "wrote output");
    Ok(())
}

fn write_direct(path: &Path, text: &str) -> Result<(), GenerateError> {
    let mut file = File::create(path).map_err(|e| GenerateError::write(path, e))?;
    file.write_all(text.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|e| GenerateError::write(path, e))
}

fn write_atomic(path: &Path, text: &str) -> Result<(), GenerateError> {
    let target = resolve_destination(path);
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = Builder::new();
    builder.prefix(".modelgen-");
    if let Some(permissions) = target_permissions(&target) {
        builder.permissions(permissions);
    }

    // Dropping the temp file on any early return removes it.
    let mut tmp = builder
        .tempfile_in(dir)
        .map_err(|e| GenerateError::write(path, e))?;
    tmp.write_all(text.as_bytes())
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| GenerateError::write(path, e))?;
    tmp.persist(&target)
        .map_err(|e| GenerateError::write(path, e.error))?;
    Ok(())
}

/// Renaming over a symlink would replace the link itself, so write to the
/// file it points at instead, like an in-place write does.
fn resolve_destination(path: &Path) -> PathBuf {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => {
            fs::canonicalize(path).unwrap_or_else(|_| dangling_target(path))
        }
        _ => path.to_path_buf(),
    }
}

/// Target of a link whose target does not exist yet.
fn dangling_target(path: &Path) -> PathBuf {
    match fs::read_link(path) {
        Ok(target) if target.is_relative() => match path.parent() {
            Some(parent) => parent.join(target),
            None => target,
        },
        Ok(target) => target,
        Err(_) => path.to_path_buf(),
    }
}

/// Keep the destination's permissions when replacing it; temp files are
/// otherwise created owner-only. New files are created 0644 (still masked by
/// the umask), so unlike `Direct` they never get group or other write bits.
fn target_permissions(path: &Path) -> Option<fs::Permissions> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => Some(meta.permissions()),
        _ => default_permissions(),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<fs::Permissions> {
    None
}

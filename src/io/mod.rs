//! File-system layer: reading sources, listing a directory's rule/table
//! files, and writing compiled documents.
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::Builder;
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::SourceKind;

pub fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::InvalidData {
            Error::Encoding {
                path: path.to_path_buf(),
            }
        } else {
            Error::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Write `contents` to `path`, replacing any existing file.
///
/// The data goes to a temporary file in the destination directory first and is
/// then renamed over `path`, so readers never observe a half-written document.
/// An existing destination keeps its permissions; a new one gets the usual
/// umask-based default.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    let write_err = |source: std::io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let existing = std::fs::metadata(path).ok().map(|meta| meta.permissions());

    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Subject to the umask, like a plain create.
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let mut tmp = builder.tempfile_in(dir).map_err(write_err)?;
    if let Some(permissions) = existing {
        tmp.as_file().set_permissions(permissions).map_err(write_err)?;
    }
    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    debug!("Wrote {} bytes to {:?}", contents.len(), path);
    Ok(())
}

/// Files directly inside `dir` whose extension marks them as `kind`, sorted by name.
pub fn list_sources(dir: &Path, kind: SourceKind) -> Result<Vec<PathBuf>> {
    let list_err = |source: std::io::Error| Error::ListDirectory {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        let path = entry.path();
        if SourceKind::from_path(&path) != Some(kind) {
            continue;
        }
        // Follows symlinks, so a link to a source file still counts.
        if path.is_file() {
            files.push(path);
        } else {
            debug!("Skipping non-file entry: {:?}", path);
        }
    }
    files.sort();
    Ok(files)
}

//! Filesystem helpers.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Replace the file at `path` with `bytes` atomically.
///
/// The bytes go to a temp file in the same directory, which takes over the
/// original file's permissions and is then renamed over `path`. On any error
/// the temp file is removed and `path` is left as it was.
///
/// Symlinks are resolved first: the file they point to is replaced and the
/// link itself stays.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let path = fs::canonicalize(path)?;
    let dir = path.parent().unwrap_or(Path::new("/"));
    let permissions = fs::metadata(&path)?.permissions();

    let mut temp = tempfile::Builder::new()
        .prefix(".pngfix-")
        .suffix(".tmp")
        .tempfile_in(dir)?;
    temp.write_all(bytes)?;
    temp.as_file().sync_all()?;
    fs::set_permissions(temp.path(), permissions)?;

    temp.persist(&path).map_err(|err| err.error)?;
    Ok(())
}

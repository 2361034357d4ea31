//! Capability-based file access for CLI inputs and reports.

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use std::io;

/// Open a UTF-8 file path for reading using ambient authority.
pub(crate) fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Create (or truncate) a UTF-8 file path for writing.
pub(crate) fn create_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    let (dir, name) = open_dir_and_file(path)?;
    dir.create(name.as_str())
}

/// Return whether a path exists and is a regular file.
pub(crate) fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_dir_and_file(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}

/// Resolve the parent directory of `path` and return it with the file name.
fn open_dir_and_file(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other("path should include a file name"))?
        .to_owned();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Create (or truncate) a destination file and wrap it in a buffered writer.
///
/// Truncating on open means a stale, longer file at `path` never leaves
/// trailing bytes behind the new content.
pub fn create(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).map_err(|source| Error::DestinationOpen {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufWriter::new(file))
}

/// Flush a buffered destination so errors surface instead of being lost on drop.
pub fn finish<W: Write>(mut writer: W, path: &Path) -> Result<()> {
    writer.flush().map_err(|source| write_error(path, source))
}

pub fn write_error(path: &Path, source: io::Error) -> Error {
    Error::Write {
        path: path.to_path_buf(),
        source,
    }
}

/// Write a text destination in one go: create, fill through `fill`, flush.
pub fn write_text<F>(path: &Path, fill: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let mut writer = create(path)?;
    fill(&mut writer).map_err(|source| write_error(path, source))?;
    finish(writer, path)
}

use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::output;
use std::io::{Seek, Write};
use std::path::Path;
use tracing::info;
use zip::result::{ZipError, ZipResult};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// Name of the single member Gboard expects inside the archive.
pub const MEMBER_NAME: &str = "dictionary.txt";

const HEADER: &str = "# Gboard Dictionary version:1\n";
const LOCALE: &str = "ja-JP";

/// Write a Gboard dictionary archive to `writer` and return the sink.
///
/// The archive holds one Deflate member, `dictionary.txt`:
/// ```text
/// # Gboard Dictionary version:1
/// <yomi>\t<kanji>\tja-JP
/// ```
/// The member timestamp is pinned to the DOS epoch so identical input always
/// yields an identical archive.
pub fn write_gboard<W: Write + Seek>(writer: W, entries: &[Entry]) -> ZipResult<W> {
    let mut zip = ZipWriter::new(writer);

    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default());
    zip.start_file(MEMBER_NAME, options)?;

    zip.write_all(HEADER.as_bytes())?;
    for entry in entries {
        writeln!(zip, "{}\t{}\t{}", entry.yomi, entry.kanji, LOCALE)?;
    }

    zip.finish()
}

/// Create the Gboard archive at `path`.
pub fn create_gboard_dic(path: &Path, entries: &[Entry]) -> Result<()> {
    let writer = output::create(path)?;

    let writer = write_gboard(writer, entries).map_err(|err| match err {
        ZipError::Io(source) => output::write_error(path, source),
        source => Error::Archive {
            path: path.to_path_buf(),
            source,
        },
    })?;
    output::finish(writer, path)?;

    info!("Wrote {} entries to {:?}", entries.len(), path);
    Ok(())
}

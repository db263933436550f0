//! Convert a UTF-16LE IME dictionary into Gboard, Kotoeri and SKK dictionaries.

pub mod config;
pub mod entry;
pub mod error;
pub mod gboard;
pub mod kotoeri;
mod output;
pub mod reader;
pub mod skk;

pub use config::Config;
pub use entry::Entry;
pub use error::{Error, Result};

use tracing::info;

/// Counts from a finished conversion.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Entries read from the source
    pub entries: usize,
    /// Distinct readings written to the SKK dictionary
    pub readings: usize,
}

/// Read the source dictionary once and write all three formats.
///
/// Writers run in order (Gboard, Kotoeri, SKK) and the first failure stops
/// the run; later outputs are not touched.
pub fn convert(config: &Config) -> Result<Summary> {
    info!("Reading dictionary: {:?}", config.source);
    let entries = reader::read_dictionary(&config.source)?;
    info!("Found {} entries", entries.len());

    gboard::create_gboard_dic(&config.gboard, &entries)?;
    kotoeri::create_kotoeri_dic(&config.kotoeri, &entries)?;
    let readings = skk::create_skk_dic(&config.skk, &entries)?;

    Ok(Summary {
        entries: entries.len(),
        readings,
    })
}

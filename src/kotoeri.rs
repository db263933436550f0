use crate::entry::Entry;
use crate::error::Result;
use crate::output;
use std::io::{self, Write};
use std::path::Path;
use tracing::{info, warn};

const HEADER: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
    "<!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\" ",
    "\"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">\n",
    "<plist version=\"1.0\">\n",
    "<array>\n",
);

const FOOTER: &str = "</array>\n</plist>\n";

/// Write a Kotoeri (macOS Japanese IM) user dictionary property list.
///
/// The document is assembled by hand. Values are inserted as-is, without
/// XML entity escaping, so a value holding markup characters produces a
/// malformed document; such values are reported with a warning.
pub fn write_kotoeri<W: Write>(writer: &mut W, entries: &[Entry]) -> io::Result<()> {
    writer.write_all(HEADER.as_bytes())?;

    for entry in entries {
        warn_on_markup(&entry.kanji);
        warn_on_markup(&entry.yomi);

        write!(
            writer,
            "\t<dict>\n\
             \t\t<key>phrase</key>\n\
             \t\t<string>{}</string>\n\
             \t\t<key>shortcut</key>\n\
             \t\t<string>{}</string>\n\
             \t</dict>\n",
            entry.kanji, entry.yomi
        )?;
    }

    writer.write_all(FOOTER.as_bytes())
}

/// Create the Kotoeri property list at `path`.
pub fn create_kotoeri_dic(path: &Path, entries: &[Entry]) -> Result<()> {
    output::write_text(path, |writer| write_kotoeri(writer, entries))?;

    info!("Wrote {} entries to {:?}", entries.len(), path);
    Ok(())
}

fn warn_on_markup(value: &str) {
    if value.contains(['<', '>', '&']) {
        warn!("Unescaped markup character in plist value {:?}", value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(entries: &[Entry]) -> String {
        let mut buf = Vec::new();
        write_kotoeri(&mut buf, entries).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_empty_document() {
        let doc = render(&[]);
        assert!(doc.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!DOCTYPE plist"));
        assert!(doc.ends_with("<plist version=\"1.0\">\n<array>\n</array>\n</plist>\n"));
    }

    #[test]
    fn test_phrase_and_shortcut_pairs() {
        let entries = vec![Entry::from_row(&["てすと", "テスト", "", ""]).unwrap()];
        let doc = render(&entries);
        assert!(doc.contains(
            "\t<dict>\n\
             \t\t<key>phrase</key>\n\
             \t\t<string>テスト</string>\n\
             \t\t<key>shortcut</key>\n\
             \t\t<string>てすと</string>\n\
             \t</dict>\n"
        ));
    }

    #[test]
    fn test_entries_keep_input_order() {
        let entries = vec![
            Entry::from_row(&["い", "意"]).unwrap(),
            Entry::from_row(&["あ", "亜"]).unwrap(),
        ];
        let doc = render(&entries);
        let first = doc.find("<string>意</string>").unwrap();
        let second = doc.find("<string>亜</string>").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_values_are_not_escaped() {
        let entries = vec![Entry::from_row(&["あんど", "A&B<C>"]).unwrap()];
        let doc = render(&entries);
        assert!(doc.contains("<string>A&B<C></string>"));
        assert!(!doc.contains("&amp;"));
    }
}

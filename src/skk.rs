use crate::entry::Entry;
use crate::error::Result;
use crate::output;
use std::collections::HashMap;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

const HEADER: &str = concat!(
    ";; imas dic for SKK system\n",
    ";; Keywords: japanese\n",
    ";; okuri-ari entries.\n",
    ";; okuri-nasi entries.\n",
);

/// A reading together with every entry that shares it.
#[derive(Debug)]
pub struct YomiGroup<'a> {
    pub yomi: &'a str,
    pub entries: Vec<&'a Entry>,
}

/// Group entries by reading.
///
/// Groups are ordered by the first appearance of their reading, and entries
/// inside a group keep their input order.
pub fn group_by_yomi(entries: &[Entry]) -> Vec<YomiGroup<'_>> {
    let mut groups: Vec<YomiGroup<'_>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for entry in entries {
        let slot = *index.entry(entry.yomi.as_str()).or_insert_with(|| {
            groups.push(YomiGroup {
                yomi: &entry.yomi,
                entries: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].entries.push(entry);
    }

    groups
}

/// Replace `/` with the fullwidth solidus, since `/` delimits SKK candidates.
pub fn escape_slashes(value: &str) -> String {
    value.replace('/', "／")
}

/// Write an SKK-JISYO style dictionary, one line per reading:
/// ```text
/// <yomi> /<kanji>[;<kind>[,<caption>]]/.../
/// ```
/// Returns the number of readings written.
pub fn write_skk<W: Write>(writer: &mut W, entries: &[Entry]) -> io::Result<usize> {
    writer.write_all(HEADER.as_bytes())?;

    let groups = group_by_yomi(entries);
    for group in &groups {
        writer.write_all(format_line(group).as_bytes())?;
    }

    Ok(groups.len())
}

fn format_line(group: &YomiGroup<'_>) -> String {
    let mut line = format!("{} ", group.yomi);

    for entry in &group.entries {
        line.push('/');
        line.push_str(&escape_slashes(&entry.kanji));
        // Caption is only written after a kind.
        if entry.has_kind() {
            line.push(';');
            line.push_str(&escape_slashes(&entry.kind));
            if entry.has_caption() {
                line.push(',');
                line.push_str(&escape_slashes(&entry.caption));
            }
        }
    }

    line.push_str("/\n");
    line
}

/// Create the SKK dictionary at `path`. Returns the number of readings written.
pub fn create_skk_dic(path: &Path, entries: &[Entry]) -> Result<usize> {
    let mut readings = 0;
    output::write_text(path, |writer| {
        readings = write_skk(writer, entries)?;
        Ok(())
    })?;

    info!("Wrote {} readings ({} entries) to {:?}", readings, entries.len(), path);
    Ok(readings)
}

/// A single row of the source IME dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Kana reading typed by the user
    pub yomi: String,
    /// Surface form the reading converts to
    pub kanji: String,
    /// Part-of-speech tag (may be empty)
    pub kind: String,
    /// Free-text annotation (may be empty)
    pub caption: String,
}

impl Entry {
    /// Build an entry from positional fields: `[yomi, kanji, kind, caption]`.
    ///
    /// Extra fields are ignored and missing ones become empty strings.
    /// Returns `None` when the reading or the surface form is empty.
    pub fn from_row(row: &[&str]) -> Option<Self> {
        let field = |i: usize| row.get(i).copied().unwrap_or("").to_string();

        let entry = Self {
            yomi: field(0),
            kanji: field(1),
            kind: field(2),
            caption: field(3),
        };

        if entry.yomi.is_empty() || entry.kanji.is_empty() {
            return None;
        }
        Some(entry)
    }

    /// Split a tab-separated line and build an entry from it.
    pub fn from_line(line: &str) -> Option<Self> {
        let row: Vec<&str> = line.split('\t').collect();
        Self::from_row(&row)
    }

    pub fn has_kind(&self) -> bool {
        !self.kind.is_empty()
    }

    pub fn has_caption(&self) -> bool {
        !self.caption.is_empty()
    }
}

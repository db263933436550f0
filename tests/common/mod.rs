#![allow(dead_code)]

use imedic::Config;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A scratch workspace with a source dictionary and an empty `dist/` directory.
pub struct Workspace {
    pub dir: TempDir,
    pub config: Config,
}

impl Workspace {
    pub fn new(source: &[u8]) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let dist = dir.path().join("dist");
        fs::create_dir(&dist).unwrap();

        let config = Config::in_dirs(dir.path(), &dist);
        fs::write(&config.source, source).unwrap();

        Self { dir, config }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Encode text as UTF-16LE without a byte-order mark.
pub fn utf16le(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

/// Encode text as UTF-16LE with a leading byte-order mark.
pub fn utf16le_bom(text: &str) -> Vec<u8> {
    let mut bytes = vec![0xFF, 0xFE];
    bytes.extend(utf16le(text));
    bytes
}

/// A small dictionary in the shape exported by IME dictionary tools.
pub const SAMPLE: &str = "!Microsoft IME Dictionary Tool\r\n\
!Version:\r\n\
\r\n\
あ\t亜\t名詞\t\r\n\
い\t意\t名詞\tこころ\r\n\
あ\t阿\r\n\
えーびー\tA/B\t記号\r\n\
てすと\tテスト\r\n\
よみだけ\r\n";

pub fn read_string(path: &Path) -> String {
    String::from_utf8(fs::read(path).unwrap()).unwrap()
}

use std::path::PathBuf;

pub const DEFAULT_SOURCE: &str = "dic.txt";
pub const DEFAULT_GBOARD: &str = "dist/gboard.zip";
pub const DEFAULT_KOTOERI: &str = "dist/macosx.plist";
pub const DEFAULT_SKK: &str = "dist/skk-jisyo.imas.utf8";

/// Where to read the source dictionary from and where to write each format.
#[derive(Debug, Clone)]
pub struct Config {
    pub source: PathBuf,
    pub gboard: PathBuf,
    pub kotoeri: PathBuf,
    pub skk: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            gboard: PathBuf::from(DEFAULT_GBOARD),
            kotoeri: PathBuf::from(DEFAULT_KOTOERI),
            skk: PathBuf::from(DEFAULT_SKK),
        }
    }
}

impl Config {
    /// Keep the default file names but read from and write into the given directories.
    pub fn in_dirs(source_dir: impl Into<PathBuf>, dist_dir: impl Into<PathBuf>) -> Self {
        let source_dir = source_dir.into();
        let dist_dir = dist_dir.into();

        Self {
            source: source_dir.join(DEFAULT_SOURCE),
            gboard: dist_dir.join("gboard.zip"),
            kotoeri: dist_dir.join("macosx.plist"),
            skk: dist_dir.join("skk-jisyo.imas.utf8"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_default_paths() {
        let config = Config::default();
        assert_eq!(config.source, Path::new("dic.txt"));
        assert_eq!(config.gboard, Path::new("dist/gboard.zip"));
        assert_eq!(config.kotoeri, Path::new("dist/macosx.plist"));
        assert_eq!(config.skk, Path::new("dist/skk-jisyo.imas.utf8"));
    }

    #[test]
    fn test_in_dirs_keeps_file_names() {
        let config = Config::in_dirs("/src", "/out");
        assert_eq!(config.source, Path::new("/src/dic.txt"));
        assert_eq!(config.gboard, Path::new("/out/gboard.zip"));
        assert_eq!(config.skk, Path::new("/out/skk-jisyo.imas.utf8"));
    }
}

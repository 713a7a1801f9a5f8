//! Layered configuration.
//!
//! Sources, lowest precedence first:
//!
//! 1. Built-in defaults (see [`DataFiles::default`]).
//! 2. A configuration file: either the path given explicitly, or
//!    `config.toml` in the platform configuration directory if it exists.
//!    TOML, YAML and JSON are accepted, chosen by file extension.
//! 3. Environment variables prefixed with `SHELF_`, nested with `__`
//!    (e.g. `SHELF_DATA__DIR=/srv/goodreads`).

pub mod error;

use crate::error::{ErrorKind, Result};
use directories::ProjectDirs;
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::instrument;

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "SHELF_";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataFiles,
}

/// Location of the three source files.
///
/// File names are relative to [`dir`](Self::dir) unless absolute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataFiles {
    pub dir: PathBuf,
    pub books: PathBuf,
    pub tags: PathBuf,
    pub book_tags: PathBuf,
}
impl Default for DataFiles {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("Data"),
            books: PathBuf::from("GoodReads/books-medium.csv"),
            tags: PathBuf::from("GoodReads/tags.csv"),
            book_tags: PathBuf::from("GoodReads/book_tags.csv"),
        }
    }
}
impl DataFiles {
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = dir.into();
        self
    }

    pub fn books_path(&self) -> PathBuf {
        self.dir.join(&self.books)
    }

    pub fn tags_path(&self) -> PathBuf {
        self.dir.join(&self.tags)
    }

    pub fn book_tags_path(&self) -> PathBuf {
        self.dir.join(&self.book_tags)
    }
}

impl Config {
    /// Loads the configuration from every source.
    ///
    /// An explicit `path` must exist; the default location is optional.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let figment = Self::files(path)?.merge(Env::prefixed(ENV_PREFIX).split("__"));
        Self::from_figment(&figment)
    }

    /// Defaults merged with the configuration file only.
    pub fn files(path: Option<&Path>) -> Result<Figment> {
        let figment = Figment::from(Serialized::defaults(Self::default()));
        let path = match path {
            Some(path) if !path.is_file() => exn::bail!(ErrorKind::NotFound(path.to_path_buf())),
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.is_file() => path,
                _ => return Ok(figment),
            },
        };
        tracing::debug!(path = %path.display(), "Reading configuration file");
        Ok(match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => figment.merge(Toml::file_exact(&path)),
            Some("yaml" | "yml") => figment.merge(Yaml::file_exact(&path)),
            Some("json") => figment.merge(Json::file_exact(&path)),
            _ => exn::bail!(ErrorKind::UnsupportedFormat(path)),
        })
    }

    pub fn from_figment(figment: &Figment) -> Result<Self> {
        figment.extract::<Self>().or_raise(|| ErrorKind::Invalid)
    }

    /// `config.toml` inside the platform configuration directory.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "shelf").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults() {
        let files = DataFiles::default();
        assert_eq!(files.books_path(), Path::new("Data/GoodReads/books-medium.csv"));
        assert_eq!(files.tags_path(), Path::new("Data/GoodReads/tags.csv"));
        assert_eq!(files.book_tags_path(), Path::new("Data/GoodReads/book_tags.csv"));
    }

    #[test]
    fn with_dir() {
        let files = DataFiles::default().with_dir("/srv/goodreads");
        assert_eq!(files.books_path(), Path::new("/srv/goodreads/GoodReads/books-medium.csv"));
    }

    #[rstest]
    #[case(".toml", "[data]\ndir = \"/tmp/books\"\nbooks = \"small.csv\"\n")]
    #[case(".yaml", "data:\n  dir: /tmp/books\n  books: small.csv\n")]
    #[case(".json", r#"{"data": {"dir": "/tmp/books", "books": "small.csv"}}"#)]
    fn file_overrides_defaults(#[case] suffix: &str, #[case] contents: &str) {
        let file = config_file(suffix, contents);
        let config = Config::from_figment(&Config::files(Some(file.path())).unwrap()).unwrap();
        assert_eq!(config.data.books_path(), Path::new("/tmp/books/small.csv"));
        // Unset keys keep their defaults.
        assert_eq!(config.data.tags, DataFiles::default().tags);
    }

    #[test]
    fn explicit_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let err = Config::files(Some(&path)).unwrap_err();
        assert!(matches!(&*err, ErrorKind::NotFound(p) if p == &path));
    }

    #[test]
    fn unsupported_format() {
        let file = config_file(".ini", "[data]\n");
        let err = Config::files(Some(file.path())).unwrap_err();
        assert!(matches!(&*err, ErrorKind::UnsupportedFormat(_)));
    }

    #[test]
    fn environment_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("SHELF_DATA__DIR", "/srv/goodreads");
            jail.set_env("SHELF_DATA__TAGS", "tags-small.csv");
            let config = Config::load(None).unwrap();
            assert_eq!(config.data.dir, Path::new("/srv/goodreads"));
            assert_eq!(config.data.tags_path(), Path::new("/srv/goodreads/tags-small.csv"));
            assert_eq!(config.data.books, DataFiles::default().books);
            Ok(())
        });
    }

    #[test]
    fn environment_overrides_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("shelf.toml", "[data]\ndir = \"/from/file\"\nbooks = \"file.csv\"\n")?;
            jail.set_env("SHELF_DATA__DIR", "/from/env");
            let config = Config::load(Some(Path::new("shelf.toml"))).unwrap();
            assert_eq!(config.data.books_path(), Path::new("/from/env/file.csv"));
            Ok(())
        });
    }

    #[test]
    fn invalid_contents() {
        let file = config_file(".toml", "data = 5\n");
        let err = Config::from_figment(&Config::files(Some(file.path())).unwrap()).unwrap_err();
        assert!(matches!(&*err, ErrorKind::Invalid));
    }
}

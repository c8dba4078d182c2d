//! Data sources for catalog collections
//!
//! A [`DataSource`] delivers the full destination list, interest vocabulary
//! and trail list on demand. Two implementations are provided:
//!
//! - [`MemorySource`]: an in-memory document, including the built-in catalog
//! - [`FileSource`]: a catalog document read from a `.json` or `.toml` file

use super::error::CatalogError;
use super::types::{CatalogDocument, Destination, HiddenTrail, Interest};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.toml");

/// Provider of catalog collections
pub trait DataSource {
    /// Human-readable name used in log messages
    fn name(&self) -> String;

    /// Fetch every destination
    ///
    /// # Errors
    /// Returns `CatalogError` if the source cannot deliver its data.
    fn destinations(&self) -> Result<Vec<Destination>, CatalogError>;

    /// Fetch the interest vocabulary
    ///
    /// # Errors
    /// Returns `CatalogError` if the source cannot deliver its data.
    fn interests(&self) -> Result<Vec<Interest>, CatalogError>;

    /// Fetch every hidden trail
    ///
    /// # Errors
    /// Returns `CatalogError` if the source cannot deliver its data.
    fn trails(&self) -> Result<Vec<HiddenTrail>, CatalogError>;
}

/// Catalog document serialization format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Toml,
}

impl CatalogFormat {
    /// Detect the format from a file extension (case-insensitive)
    ///
    /// # Errors
    /// Returns `CatalogError::UnsupportedFormat` for anything but `json` or `toml`.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(CatalogError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Parse a catalog document in this format
    ///
    /// # Errors
    /// Returns `CatalogError::Parse` if the document is malformed.
    pub fn parse(self, contents: &str) -> Result<CatalogDocument, CatalogError> {
        match self {
            Self::Json => Ok(serde_json::from_str(contents)?),
            Self::Toml => Ok(toml::from_str(contents)?),
        }
    }
}

/// In-memory catalog source
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    document: CatalogDocument,
}

impl MemorySource {
    #[must_use]
    pub const fn new(document: CatalogDocument) -> Self {
        Self { document }
    }

    /// The catalog bundled with the binary
    ///
    /// # Errors
    /// Returns `CatalogError::Parse` if the bundled document is malformed.
    pub fn builtin() -> Result<Self, CatalogError> {
        Ok(Self::new(CatalogFormat::Toml.parse(BUILTIN_CATALOG)?))
    }

    #[must_use]
    pub const fn document(&self) -> &CatalogDocument {
        &self.document
    }
}

impl DataSource for MemorySource {
    fn name(&self) -> String {
        "memory".to_string()
    }

    fn destinations(&self) -> Result<Vec<Destination>, CatalogError> {
        Ok(self.document.destinations.clone())
    }

    fn interests(&self) -> Result<Vec<Interest>, CatalogError> {
        Ok(self.document.interests.clone())
    }

    fn trails(&self) -> Result<Vec<HiddenTrail>, CatalogError> {
        Ok(self.document.trails.clone())
    }
}

/// Catalog source backed by a JSON or TOML file
///
/// The file is read and parsed once, when the source is opened.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    inner: MemorySource,
}

impl FileSource {
    /// Open and parse a catalog file
    ///
    /// # Errors
    /// Returns `CatalogError` if the file is missing, has an unknown
    /// extension, cannot be read, or is malformed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref().to_path_buf();
        let format = CatalogFormat::from_path(&path)?;

        if !path.exists() {
            return Err(CatalogError::NotFound(path));
        }

        let contents = fs::read_to_string(&path)?;
        let document = format.parse(&contents)?;
        debug!(
            path = %path.display(),
            destinations = document.destinations.len(),
            interests = document.interests.len(),
            trails = document.trails.len(),
            "parsed catalog file"
        );

        Ok(Self {
            path,
            inner: MemorySource::new(document),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn destinations(&self) -> Result<Vec<Destination>, CatalogError> {
        self.inner.destinations()
    }

    fn interests(&self) -> Result<Vec<Interest>, CatalogError> {
        self.inner.interests()
    }

    fn trails(&self) -> Result<Vec<HiddenTrail>, CatalogError> {
        self.inner.trails()
    }
}

/// Open the catalog file at `path`, or the bundled catalog when `None`
///
/// # Errors
/// Returns `CatalogError` if the file cannot be opened or parsed.
pub fn open_source(path: Option<&Path>) -> Result<Box<dyn DataSource>, CatalogError> {
    match path {
        Some(path) => Ok(Box::new(FileSource::open(path)?)),
        None => Ok(Box::new(MemorySource::builtin()?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(CatalogFormat::from_path(Path::new("a.json")).unwrap(), CatalogFormat::Json);
        assert_eq!(CatalogFormat::from_path(Path::new("a.TOML")).unwrap(), CatalogFormat::Toml);
        assert!(matches!(
            CatalogFormat::from_path(Path::new("a.yaml")),
            Err(CatalogError::UnsupportedFormat(_))
        ));
        assert!(CatalogFormat::from_path(Path::new("catalog")).is_err());
    }

    #[test]
    fn test_builtin_catalog_parses() {
        let source = MemorySource::builtin().unwrap();
        let doc = source.document();
        assert!(!doc.destinations.is_empty());
        assert!(!doc.interests.is_empty());
        assert!(!doc.trails.is_empty());
    }

    #[test]
    fn test_builtin_destinations_reference_known_interests() {
        let doc = MemorySource::builtin().unwrap().document().clone();
        for dest in &doc.destinations {
            for tag in &dest.tags {
                assert!(
                    doc.interests.iter().any(|i| &i.id == tag),
                    "{} references unknown interest {tag}",
                    dest.id
                );
            }
        }
    }

    #[test]
    fn test_memory_source_returns_document() {
        let doc = CatalogDocument {
            interests: vec![Interest::new("city", "City")],
            destinations: vec![Destination::new("1", "Paris", "Europe")],
            trails: Vec::new(),
        };
        let source = MemorySource::new(doc);
        assert_eq!(source.destinations().unwrap().len(), 1);
        assert_eq!(source.interests().unwrap()[0].label, "City");
        assert!(source.trails().unwrap().is_empty());
    }

    #[test]
    fn test_open_source_defaults_to_builtin() {
        let source = open_source(None).unwrap();
        assert_eq!(source.name(), "memory");
        assert!(!source.destinations().unwrap().is_empty());
    }

    #[test]
    fn test_file_source_missing_file() {
        let result = FileSource::open("definitely_missing_catalog.json");
        assert!(matches!(result, Err(CatalogError::NotFound(_))));
    }
}

use thiserror::Error;

use crate::core::artwork::{ArtworkRecord, ImageReference};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("A catalog needs at least one artwork")]
    Empty,
}

/// Ordered, immutable list of artworks for one viewing session.
///
/// Built once at startup and only read afterwards, so it can be shared by
/// any number of readers.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<ArtworkRecord>,
}

impl Catalog {
    pub fn new(records: Vec<ArtworkRecord>) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { records })
    }

    /// The three artworks shipped with the application.
    pub fn builtin() -> Self {
        Self {
            records: vec![
                ArtworkRecord::new(
                    "Colosseum",
                    "John Smith",
                    2024,
                    "Image of a colosseum",
                    ImageReference::Bundled("colosseum"),
                ),
                ArtworkRecord::new(
                    "Some Street",
                    "John Smith",
                    2024,
                    "Image of a street",
                    ImageReference::Bundled("street"),
                ),
                ArtworkRecord::new(
                    "Library",
                    "John Smith",
                    2024,
                    "Image of a library",
                    ImageReference::Bundled("library"),
                ),
            ],
        }
    }

    /// Returns the artwork at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`. Callers index through a
    /// [`ViewerState`](crate::core::viewer_state::ViewerState), which never
    /// leaves the valid range.
    pub fn get(&self, index: usize) -> &ArtworkRecord {
        assert!(
            index < self.records.len(),
            "artwork index {} out of range for catalog of {}",
            index,
            self.records.len()
        );
        &self.records[index]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false` for a catalog built through [`Catalog::new`].
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArtworkRecord> {
        self.records.iter()
    }
}

use crate::core::catalog::Catalog;

/// Current position in a [`Catalog`] plus the two stepping moves.
///
/// Both moves saturate at the ends of the catalog, so the position is always
/// a valid index for [`Catalog::get`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerState {
    position: usize,
    len: usize,
}

impl ViewerState {
    pub fn new(catalog: &Catalog) -> Self {
        debug_assert!(!catalog.is_empty());
        Self {
            position: 0,
            len: catalog.len(),
        }
    }

    /// Steps back one artwork. Returns `false` and does nothing at the start.
    pub fn retreat(&mut self) -> bool {
        if self.can_retreat() {
            self.position -= 1;
            true
        } else {
            false
        }
    }

    /// Steps forward one artwork. Returns `false` and does nothing at the end.
    pub fn advance(&mut self) -> bool {
        if self.can_advance() {
            self.position += 1;
            true
        } else {
            false
        }
    }

    pub fn can_retreat(&self) -> bool {
        self.position > 0
    }

    pub fn can_advance(&self) -> bool {
        self.position + 1 < self.len
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn total_artworks(&self) -> usize {
        self.len
    }
}

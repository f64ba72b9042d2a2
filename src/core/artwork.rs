use std::fmt;
use std::path::PathBuf;

/// Where the pixels of an artwork come from.
///
/// The core never looks inside a reference; the asset loader resolves it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageReference {
    /// Image compiled into the binary, addressed by name.
    Bundled(&'static str),
    /// Image file read from disk.
    File(PathBuf),
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageReference::Bundled(name) => write!(f, "bundled:{}", name),
            ImageReference::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// One artwork shown by the viewer. Fields are fixed once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkRecord {
    title: String,
    author: String,
    year: i32,
    description: String,
    image: ImageReference,
}

impl ArtworkRecord {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        description: impl Into<String>,
        image: ImageReference,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            description: description.into(),
            image,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Accessibility text for the image.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image(&self) -> &ImageReference {
        &self.image
    }
}

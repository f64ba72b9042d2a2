use egui::ColorImage;
use std::sync::Arc;
use thiserror::Error;

use crate::core::artwork::ImageReference;
use crate::core::image_format::ImageFormat;

const MAX_WIDTH: u32 = 1920;
const MAX_HEIGHT: u32 = 1080;

const BUNDLED: &[(&str, &[u8])] = &[
    ("colosseum", include_bytes!("../../assets/images/colosseum.png")),
    ("street", include_bytes!("../../assets/images/street.png")),
    ("library", include_bytes!("../../assets/images/library.png")),
];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("No bundled image named '{0}'")]
    MissingAsset(String),

    #[error("Unsupported image format")]
    UnsupportedFormat,
}

/// Looks up a bundled image by name, returning the canonical `'static` name.
pub fn bundled_name(name: &str) -> Option<&'static str> {
    BUNDLED.iter().find(|(n, _)| *n == name).map(|(n, _)| *n)
}

fn bundled_bytes(name: &str) -> Option<&'static [u8]> {
    BUNDLED.iter().find(|(n, _)| *n == name).map(|(_, b)| *b)
}

/// Decodes encoded image bytes into RGBA pixels, shrinking oversized images.
pub fn decode(bytes: &[u8]) -> Result<ColorImage, LoadError> {
    let img = image::load_from_memory(bytes)?;

    let img = if img.width() > MAX_WIDTH || img.height() > MAX_HEIGHT {
        img.resize(MAX_WIDTH, MAX_HEIGHT, image::imageops::FilterType::Triangle)
    } else {
        img
    };

    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

pub trait ImageLoader: Send + Sync {
    fn load(&self, reference: &ImageReference) -> Result<ColorImage, LoadError>;
    fn supports(&self, reference: &ImageReference) -> bool;
}

pub struct BundledImageLoader;

impl ImageLoader for BundledImageLoader {
    fn load(&self, reference: &ImageReference) -> Result<ColorImage, LoadError> {
        match reference {
            ImageReference::Bundled(name) => {
                let bytes =
                    bundled_bytes(name).ok_or_else(|| LoadError::MissingAsset(name.to_string()))?;
                decode(bytes)
            }
            ImageReference::File(_) => Err(LoadError::UnsupportedFormat),
        }
    }

    fn supports(&self, reference: &ImageReference) -> bool {
        matches!(reference, ImageReference::Bundled(_))
    }
}

pub struct FileImageLoader;

impl ImageLoader for FileImageLoader {
    fn load(&self, reference: &ImageReference) -> Result<ColorImage, LoadError> {
        match reference {
            ImageReference::File(path) => {
                if !ImageFormat::is_supported(path) {
                    return Err(LoadError::UnsupportedFormat);
                }
                let bytes = std::fs::read(path)?;
                decode(&bytes)
            }
            ImageReference::Bundled(_) => Err(LoadError::UnsupportedFormat),
        }
    }

    fn supports(&self, reference: &ImageReference) -> bool {
        matches!(reference, ImageReference::File(_))
    }
}

/// Resolves image references to pixels with whichever loader accepts them.
///
/// Cheap to clone; clones share the loader list.
#[derive(Clone)]
pub struct AssetLoader {
    loaders: Arc<Vec<Box<dyn ImageLoader>>>,
}

impl AssetLoader {
    pub fn new() -> Self {
        Self {
            loaders: Arc::new(vec![Box::new(BundledImageLoader), Box::new(FileImageLoader)]),
        }
    }

    pub fn load(&self, reference: &ImageReference) -> Result<ColorImage, LoadError> {
        self.loaders
            .iter()
            .find(|loader| loader.supports(reference))
            .ok_or(LoadError::UnsupportedFormat)?
            .load(reference)
    }
}

impl Default for AssetLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn every_builtin_artwork_decodes() {
        let loader = AssetLoader::new();
        for artwork in Catalog::builtin().iter() {
            let image = loader.load(artwork.image()).unwrap();
            assert_eq!(image.size, [240, 180], "{}", artwork.title());
        }
    }

    #[test]
    fn unknown_bundled_name_is_missing() {
        let err = AssetLoader::new()
            .load(&ImageReference::Bundled("mona-lisa"))
            .unwrap_err();
        assert!(matches!(err, LoadError::MissingAsset(name) if name == "mona-lisa"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = AssetLoader::new()
            .load(&ImageReference::File(PathBuf::from("/nonexistent/art.png")))
            .unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn file_with_unknown_extension_is_rejected() {
        let err = AssetLoader::new()
            .load(&ImageReference::File(PathBuf::from("notes.txt")))
            .unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat));
    }

    #[test]
    fn corrupt_file_is_decode_error() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(b"definitely not a png").unwrap();

        let err = AssetLoader::new()
            .load(&ImageReference::File(file.path().to_path_buf()))
            .unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
    }

    #[test]
    fn file_image_decodes() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(bundled_bytes("library").unwrap()).unwrap();

        let image = AssetLoader::new()
            .load(&ImageReference::File(file.path().to_path_buf()))
            .unwrap();
        assert_eq!(image.size, [240, 180]);
    }

    #[test]
    fn bundled_name_lookup() {
        assert_eq!(bundled_name("street"), Some("street"));
        assert_eq!(bundled_name("Street"), None);
    }
}

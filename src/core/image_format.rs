use std::path::Path;

/// Raster formats the decoder is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Bmp,
    Gif,
    Tiff,
    Webp,
}

impl ImageFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            "bmp" => Some(ImageFormat::Bmp),
            "gif" => Some(ImageFormat::Gif),
            "tiff" | "tif" => Some(ImageFormat::Tiff),
            "webp" => Some(ImageFormat::Webp),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub fn is_supported(path: &Path) -> bool {
        Self::from_path(path).is_some()
    }

    pub fn supported_extensions() -> &'static [&'static str] {
        &["jpg", "jpeg", "png", "bmp", "gif", "tiff", "tif", "webp"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_matching_ignores_case() {
        assert_eq!(ImageFormat::from_path(Path::new("a/b/photo.JPG")), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_path(Path::new("scan.Tif")), Some(ImageFormat::Tiff));
    }

    #[test]
    fn unknown_or_missing_extension_is_unsupported() {
        assert!(!ImageFormat::is_supported(Path::new("drawing.svg")));
        assert!(!ImageFormat::is_supported(Path::new("README")));
        assert!(ImageFormat::is_supported(Path::new("library.png")));
    }

    #[test]
    fn every_listed_extension_is_recognised() {
        for ext in ImageFormat::supported_extensions() {
            assert!(ImageFormat::from_extension(ext).is_some(), "{}", ext);
        }
    }
}

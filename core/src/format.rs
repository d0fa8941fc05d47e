use std::path::Path;

/// What the converter does with a file, decided from its extension alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Png,
    Jpeg,
    Unsupported,
}

impl FileKind {
    pub fn from_path(path: &Path) -> Self {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return FileKind::Unsupported;
        };
        match ext.to_ascii_lowercase().as_str() {
            "png" => FileKind::Png,
            "jpg" | "jpeg" => FileKind::Jpeg,
            _ => FileKind::Unsupported,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_any_case() {
        assert_eq!(FileKind::from_path(Path::new("a.png")), FileKind::Png);
        assert_eq!(FileKind::from_path(Path::new("dir/A.PNG")), FileKind::Png);
        assert_eq!(FileKind::from_path(Path::new("mixed.PnG")), FileKind::Png);
    }

    #[test]
    fn test_jpeg_variants() {
        for name in ["a.jpg", "a.JPG", "a.jpeg", "a.JPEG", "a.Jpeg"] {
            assert_eq!(FileKind::from_path(Path::new(name)), FileKind::Jpeg, "{name}");
        }
    }

    #[test]
    fn test_unsupported() {
        assert_eq!(FileKind::from_path(Path::new("a.gif")), FileKind::Unsupported);
        assert_eq!(FileKind::from_path(Path::new("README")), FileKind::Unsupported);
        assert_eq!(FileKind::from_path(Path::new(".png")), FileKind::Unsupported);
        assert_eq!(FileKind::from_path(Path::new("archive.png.gz")), FileKind::Unsupported);
    }
}

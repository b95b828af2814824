use std::fmt;
use std::path::Path;

use crate::scene::FontWeight;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Owns the faces text commands are rasterized with: a regular face and an
/// optional bold face.
///
/// A text command asking for a weight that is not loaded falls back to the
/// regular face; with no faces at all, text is skipped by the rasterizer.
#[derive(Default)]
pub struct FontSystem {
    regular: Option<fontdue::Font>,
    bold: Option<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a TrueType or OpenType font from raw bytes and installs it for `weight`.
    pub fn load_font(&mut self, weight: FontWeight, bytes: &[u8]) -> Result<(), FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        match weight {
            FontWeight::Regular => self.regular = Some(font),
            FontWeight::Bold => self.bold = Some(font),
        }
        Ok(())
    }

    /// Reads a font file and installs it for `weight`.
    pub fn load_font_file(&mut self, weight: FontWeight, path: &Path) -> Result<(), FontLoadError> {
        let bytes = std::fs::read(path)
            .map_err(|e| FontLoadError(format!("{}: {e}", path.display())))?;
        self.load_font(weight, &bytes)
    }

    /// Returns the face for `weight`, falling back to the regular face.
    pub fn face(&self, weight: FontWeight) -> Option<&fontdue::Font> {
        match weight {
            FontWeight::Bold => self.bold.as_ref().or(self.regular.as_ref()),
            FontWeight::Regular => self.regular.as_ref(),
        }
    }

    /// True when at least a regular face is loaded.
    pub fn has_faces(&self) -> bool {
        self.regular.is_some()
    }
}

impl fmt::Debug for FontSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontSystem")
            .field("regular", &self.regular.is_some())
            .field("bold", &self.bold.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_system_has_no_face() {
        let fonts = FontSystem::new();
        assert!(!fonts.has_faces());
        assert!(fonts.face(FontWeight::Bold).is_none());
    }

    #[test]
    fn garbage_font_bytes_are_rejected() {
        let mut fonts = FontSystem::new();
        assert!(fonts.load_font(FontWeight::Regular, b"not a font").is_err());
        assert!(!fonts.has_faces());
    }
}

use crate::{error::LayoutError, rect::Extent, units::Px};
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Measures how large a single line of text would be when rendered in a
/// particular font at a particular size.
///
/// The layout engine treats fonts as opaque: this is the only thing it ever
/// asks of one. Callers that render with some other text stack implement this
/// for their own font handle; [TtfFont] is provided for TrueType and OpenType
/// fonts.
pub trait TextExtent {
    /// Measure a single line of text. `line` never contains a newline.
    fn line_extent(&self, line: &str) -> Extent;
}

/// Loads fonts by family (or file) identifier and pixel size.
///
/// Loading is assumed to be expensive; the [LayoutEngine](crate::LayoutEngine)
/// calls [FontSource::load] at most once for any `(family, size)` pair.
pub trait FontSource {
    /// The font handle this source produces
    type Font: TextExtent;

    /// Load `family` at `size` pixels
    fn load(&mut self, family: &str, size: u32) -> Result<Self::Font, LayoutError>;
}

/// A parsed TrueType or OpenType font face at a fixed pixel size. The face
/// itself is shared between all sizes loaded from the same [TtfFontSource].
#[derive(Clone)]
pub struct TtfFont {
    pub face: Arc<OwnedFace>,
    pub size: u32,
}

impl TtfFont {
    fn scaling(&self) -> f32 {
        self.size as f32 / self.face.as_face_ref().units_per_em() as f32
    }

    /// Distance from the baseline to the top of the font
    pub fn ascent(&self) -> Px {
        Px(self.scaling() * self.face.as_face_ref().ascender() as f32)
    }

    /// Distance from the baseline to the bottom of the font.
    /// Note: this is usually negative
    pub fn descent(&self) -> Px {
        Px(self.scaling() * self.face.as_face_ref().descender() as f32)
    }

    /// Extra space between lines
    pub fn leading(&self) -> Px {
        Px(self.scaling() * self.face.as_face_ref().line_gap() as f32)
    }

    /// How far to offset a second row of text below a first row of text
    pub fn line_height(&self) -> Px {
        self.leading() + self.ascent() - self.descent()
    }

    /// The glyph for `ch`. Whitespace the face doesn't cover is set as a
    /// space, anything else falls back on the replacement character and then
    /// on `?`. Characters with no glyph at all take up no room.
    pub fn glyph_id(&self, ch: char) -> Option<GlyphId> {
        let face = self.face.as_face_ref();
        face.glyph_index(ch).or_else(|| {
            if ch.is_whitespace() {
                face.glyph_index(' ')
            } else {
                face.glyph_index('\u{FFFD}').or_else(|| face.glyph_index('?'))
            }
        })
    }

    /// Calculate the width of a given string of text
    pub fn width_of_text(&self, text: &str) -> Px {
        let scaling = self.scaling();
        text.chars()
            .filter_map(|ch| self.glyph_id(ch))
            .map(|gid| {
                Px(scaling
                    * self
                        .face
                        .as_face_ref()
                        .glyph_hor_advance(gid)
                        .unwrap_or_default() as f32)
            })
            .sum()
    }
}

impl std::fmt::Debug for TtfFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtfFont")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

impl TextExtent for TtfFont {
    fn line_extent(&self, line: &str) -> Extent {
        Extent {
            width: self.width_of_text(line),
            height: self.line_height(),
        }
    }
}

/// Loads [TtfFont]s, either from faces registered up front or from font files
/// on disk. A family identifier that was not registered is treated as a file
/// name, looked up as given and then in each search directory in turn.
///
/// Each face is parsed once and then shared by every size loaded from it.
#[derive(Default)]
pub struct TtfFontSource {
    faces: HashMap<String, Arc<OwnedFace>>,
    search_dirs: Vec<PathBuf>,
}

impl TtfFontSource {
    pub fn new() -> TtfFontSource {
        TtfFontSource::default()
    }

    /// Also look for font files in `dir`
    pub fn with_search_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.search_dirs.push(dir.into());
        self
    }

    /// Register font bytes under a family identifier
    pub fn register<S: Into<String>>(&mut self, family: S, bytes: Vec<u8>) -> Result<(), LayoutError> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        self.faces.insert(family.into(), Arc::new(face));
        Ok(())
    }

    fn resolve(&self, family: &str) -> PathBuf {
        let direct = Path::new(family);
        if direct.is_file() {
            return direct.to_path_buf();
        }
        self.search_dirs
            .iter()
            .map(|dir| dir.join(family))
            .find(|candidate| candidate.is_file())
            // not found anywhere; reading it as given reports the I/O error
            .unwrap_or_else(|| direct.to_path_buf())
    }

    fn face(&mut self, family: &str) -> Result<Arc<OwnedFace>, LayoutError> {
        if let Some(face) = self.faces.get(family) {
            return Ok(face.clone());
        }

        let path = self.resolve(family);
        let bytes = std::fs::read(&path)?;
        let face = Arc::new(OwnedFace::from_vec(bytes, 0)?);
        self.faces.insert(family.to_string(), face.clone());
        Ok(face)
    }
}

impl FontSource for TtfFontSource {
    type Font = TtfFont;

    fn load(&mut self, family: &str, size: u32) -> Result<TtfFont, LayoutError> {
        let face = self.face(family)?;
        Ok(TtfFont { face, size })
    }
}

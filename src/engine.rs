use crate::error::LayoutError;
use crate::font::{FontSource, TextExtent};
use crate::layout::{
    fit_scaled, fit_wrapped, flatten_paragraph, hard_lines, justify_box, justify_point, word_wrap,
    Align, FitOptions, HardLines,
};
use crate::rect::{Extent, Rect};
use crate::units::Px;
use id_arena::{Arena, Id};
use std::collections::HashMap;
use tracing::{debug, error};

/// Text fitted to a box: the font and size chosen, the text as it should be
/// drawn (rewrapped, in wrapping mode), and its measured size.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedText<F> {
    pub font: Id<F>,
    pub font_size: u32,
    pub text: String,
    pub extent: Extent,
    /// False when the text overflows its box at every size that was tried; the
    /// smallest such size is used anyway
    pub fits: bool,
}

/// Fitted text together with where to draw it
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText<F> {
    pub fitted: FittedText<F>,
    /// Top-left corner of the text block
    pub origin: (Px, Px),
    /// How the lines of the block are aligned against each other
    pub align: Align,
}

impl<F> PlacedText<F> {
    /// The lines of the text as they will be drawn
    pub fn lines(&self) -> HardLines<'_> {
        hard_lines(&self.fitted.text)
    }
}

/// Owns the font and glyph width caches and performs all text measurement,
/// wrapping, and fitting against them.
///
/// Fonts are loaded from the [FontSource] on first use of each
/// `(family, size)` pair and are never evicted, nor are measured character
/// widths. Both key spaces are bounded by the fonts, sizes, and characters
/// actually used, so an engine can be kept for as long as its font source is
/// useful.
pub struct LayoutEngine<S: FontSource> {
    source: S,
    /// Every font loaded so far
    pub fonts: Arena<S::Font>,
    font_ids: HashMap<(String, u32), Id<S::Font>>,
    glyph_widths: HashMap<(char, Id<S::Font>), Px>,
}

impl<S: FontSource> LayoutEngine<S> {
    pub fn new(source: S) -> LayoutEngine<S> {
        LayoutEngine {
            source,
            fonts: Arena::new(),
            font_ids: HashMap::new(),
            glyph_widths: HashMap::new(),
        }
    }

    /// The font source fonts are loaded from
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get the font for `family` at `size`, loading it if this is the first
    /// time it has been asked for
    pub fn font(&mut self, family: &str, size: u32) -> Result<Id<S::Font>, LayoutError> {
        if let Some(&id) = self.font_ids.get(&(family.to_string(), size)) {
            return Ok(id);
        }

        let font = self.source.load(family, size).map_err(|source| {
            error!(family, size, error = %source, "failed to load font");
            LayoutError::FontLoad {
                family: family.to_string(),
                size,
                source: Box::new(source),
            }
        })?;
        let id = self.fonts.alloc(font);
        self.font_ids.insert((family.to_string(), size), id);
        Ok(id)
    }

    /// The width of a single character, cached per font
    pub fn char_width(&mut self, font: Id<S::Font>, ch: char) -> Px {
        let fonts = &self.fonts;
        *self
            .glyph_widths
            .entry((ch, font))
            .or_insert_with(|| fonts[font].line_extent(ch.encode_utf8(&mut [0; 4])).width)
    }

    /// Measure text that may span several lines: the widest line gives the
    /// width, and the heights of all lines add up to the height. Lines are
    /// split the same way as for wrapping, see
    /// [hard_lines](crate::layout::hard_lines).
    pub fn measure(&self, font: Id<S::Font>, text: &str) -> Extent {
        let font = &self.fonts[font];
        hard_lines(text)
            .map(|line| font.line_extent(line))
            .fold(Extent::default(), |block, line| Extent {
                width: block.width.max(line.width),
                height: block.height + line.height,
            })
    }

    /// Word-wrap `text` so that no line is wider than `budget` when set in
    /// `font`. See [WordWrap](crate::layout::WordWrap).
    pub fn wrap(&mut self, text: &str, budget: Px, font: Id<S::Font>) -> Vec<String> {
        self.wrap_with(text, budget, font, false)
    }

    /// Reflow `text` as a single paragraph, see [reflow](crate::layout::reflow)
    pub fn reflow(&mut self, text: &str, budget: Px, font: Id<S::Font>) -> String {
        self.reflow_with(text, budget, font, false)
    }

    fn reflow_with(
        &mut self,
        text: &str,
        budget: Px,
        font: Id<S::Font>,
        break_long_words: bool,
    ) -> String {
        self.wrap_with(&flatten_paragraph(text), budget, font, break_long_words)
            .join("\n")
    }

    fn wrap_with(
        &mut self,
        text: &str,
        budget: Px,
        font: Id<S::Font>,
        break_long_words: bool,
    ) -> Vec<String> {
        word_wrap(text, budget, |ch| self.char_width(font, ch))
            .break_long_words(break_long_words)
            .collect()
    }

    /// Choose a font size (and, in wrapping mode, line breaks) so that `text`
    /// fits `rect`. Returns [None] for empty text, as there is nothing to fit.
    ///
    /// Failing to load the font at any size tried is an error.
    pub fn fit_box(
        &mut self,
        text: &str,
        rect: Rect,
        family: &str,
        options: &FitOptions,
    ) -> Result<Option<FittedText<S::Font>>, LayoutError> {
        if text.is_empty() {
            return Ok(None);
        }
        debug!(text, ?rect, wrap = options.wrap, "fitting text to box");

        let target = rect.extent();
        let (font_size, text, extent, fits) = if options.wrap {
            let fit = fit_wrapped(target, options, |size| {
                let font = self.font(family, size)?;
                let wrapped =
                    self.reflow_with(text, target.width, font, options.break_long_words);
                let extent = self.measure(font, &wrapped);
                Ok::<_, LayoutError>((wrapped, extent))
            })?;
            (fit.size, fit.content, fit.extent, fit.fits)
        } else {
            let fit = fit_scaled(target, options, |size| {
                let font = self.font(family, size)?;
                Ok::<_, LayoutError>(self.measure(font, text))
            })?;
            (fit.size, text.to_string(), fit.extent, fit.fits)
        };

        debug!(
            font_size,
            width = extent.width.0,
            height = extent.height.0,
            fits,
            "final font size"
        );
        let font = self.font(family, font_size)?;
        Ok(Some(FittedText {
            font,
            font_size,
            text,
            extent,
            fits,
        }))
    }

    /// Fit `text` to `rect` and justify the result within it
    pub fn place_in_box(
        &mut self,
        text: &str,
        rect: Rect,
        family: &str,
        options: &FitOptions,
    ) -> Result<Option<PlacedText<S::Font>>, LayoutError> {
        let Some(fitted) = self.fit_box(text, rect, family, options)? else {
            return Ok(None);
        };
        let origin = justify_box(
            rect,
            fitted.extent.width,
            fitted.extent.height,
            options.hjust,
            options.vjust,
        );
        Ok(Some(PlacedText {
            fitted,
            origin,
            align: Align::from_justification(options.hjust),
        }))
    }

    /// Set `text` at a fixed `font_size` and justify it around `anchor`
    pub fn place_at_point(
        &mut self,
        text: &str,
        anchor: (Px, Px),
        family: &str,
        font_size: u32,
        hjust: f32,
        vjust: f32,
    ) -> Result<Option<PlacedText<S::Font>>, LayoutError> {
        if text.is_empty() {
            return Ok(None);
        }

        let font = self.font(family, font_size)?;
        let extent = self.measure(font, text);
        let origin = justify_point(anchor.0, anchor.1, extent.width, extent.height, hjust, vjust);
        Ok(Some(PlacedText {
            fitted: FittedText {
                font,
                font_size,
                text: text.to_string(),
                extent,
                fits: true,
            },
            origin,
            align: Align::from_justification(hjust),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    /// Square glyphs, `size` pixels a side
    struct Blocks(u32);

    impl TextExtent for Blocks {
        fn line_extent(&self, line: &str) -> Extent {
            Extent {
                width: Px(self.0 as f32 * line.chars().count() as f32),
                height: Px(self.0 as f32),
            }
        }
    }

    #[derive(Default)]
    struct Source {
        broken: bool,
    }

    impl FontSource for Source {
        type Font = Blocks;

        fn load(&mut self, family: &str, size: u32) -> Result<Blocks, LayoutError> {
            if self.broken {
                return Err(LayoutError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    family.to_string(),
                )));
            }
            Ok(Blocks(size))
        }
    }

    #[test]
    #[traced_test]
    fn load_failures_are_logged() {
        let mut engine = LayoutEngine::new(Source { broken: true });
        assert!(engine.font("Missing.ttf", 12).is_err());
        assert!(logs_contain("failed to load font"));
        assert!(logs_contain("Missing.ttf"));
    }

    #[test]
    #[traced_test]
    fn overflowing_text_is_reported() {
        let mut engine = LayoutEngine::new(Source::default());
        let options = FitOptions::default()
            .with_wrap(true)
            .with_font_size_range(8, 32);
        let fitted = engine
            .fit_box("Afterburner", Rect::new(0, 0, 10, 10), "Mono", &options)
            .unwrap()
            .unwrap();
        assert_eq!(fitted.font_size, 8);
        assert!(!fitted.fits);
        assert!(logs_contain("does not fit"));
    }

    #[test]
    fn measuring_ignores_carriage_returns() {
        let mut engine = LayoutEngine::new(Source::default());
        let font = engine.font("Mono", 10).unwrap();
        let extent = engine.measure(font, "ab\r\ncd");
        assert_eq!(extent, Extent::new(Px(20.0), Px(20.0)));
    }

    #[test]
    fn char_widths_are_cached_per_font() {
        let mut engine = LayoutEngine::new(Source::default());
        let small = engine.font("Mono", 10).unwrap();
        let large = engine.font("Mono", 20).unwrap();
        assert_eq!(engine.char_width(small, 'W'), Px(10.0));
        assert_eq!(engine.char_width(large, 'W'), Px(20.0));
        assert_eq!(engine.glyph_widths.len(), 2);
    }
}

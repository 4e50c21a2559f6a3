#![allow(dead_code)]

use label_fit::layout::Align;
use label_fit::label::Canvas;
use label_fit::{Colour, Extent, FontSource, LayoutError, Px, Rect, TextExtent};
use std::cell::Cell;
use std::collections::HashSet;

/// A monospaced font: 10px per character and 20px per line at size 16,
/// scaling linearly with size
#[derive(Debug, Clone, PartialEq)]
pub struct FakeFont {
    pub family: String,
    pub size: u32,
    pub measured: Cell<usize>,
}

impl FakeFont {
    pub fn char_width(size: u32) -> Px {
        Px(size as f32 * 0.625)
    }

    pub fn line_height(size: u32) -> Px {
        Px(size as f32 * 1.25)
    }
}

impl TextExtent for FakeFont {
    fn line_extent(&self, line: &str) -> Extent {
        self.measured.set(self.measured.get() + 1);
        Extent {
            width: FakeFont::char_width(self.size) * line.chars().count() as f32,
            height: FakeFont::line_height(self.size),
        }
    }
}

/// Hands out [FakeFont]s, recording every load. Families listed in `missing`
/// fail to load as if their font file did not exist.
#[derive(Debug, Default)]
pub struct FakeFontSource {
    pub loads: Vec<(String, u32)>,
    pub missing: HashSet<String>,
}

impl FakeFontSource {
    pub fn without(family: &str) -> FakeFontSource {
        FakeFontSource {
            loads: Vec::new(),
            missing: HashSet::from([family.to_string()]),
        }
    }
}

impl FontSource for FakeFontSource {
    type Font = FakeFont;

    fn load(&mut self, family: &str, size: u32) -> Result<FakeFont, LayoutError> {
        self.loads.push((family.to_string(), size));
        if self.missing.contains(family) {
            return Err(LayoutError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{family}: no such file"),
            )));
        }
        Ok(FakeFont {
            family: family.to_string(),
            size,
            measured: Cell::new(0),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Rect {
        rect: Rect,
        outline: Colour,
        fill: Colour,
    },
    Text {
        origin: (Px, Px),
        text: String,
        size: u32,
        colour: Colour,
        align: Align,
    },
}

/// Records everything drawn onto it
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub ops: Vec<Op>,
}

impl RecordingCanvas {
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { text, .. } => Some(text.as_str()),
                Op::Rect { .. } => None,
            })
            .collect()
    }
}

impl Canvas<FakeFont> for RecordingCanvas {
    fn draw_rect(&mut self, rect: Rect, outline: Colour, fill: Colour) {
        self.ops.push(Op::Rect {
            rect,
            outline,
            fill,
        });
    }

    fn draw_text(&mut self, origin: (Px, Px), text: &str, font: &FakeFont, colour: Colour, align: Align) {
        self.ops.push(Op::Text {
            origin,
            text: text.to_string(),
            size: font.size,
            colour,
            align,
        });
    }
}

use crate::colour::{colours, Colour};
use crate::control::{ColourScheme, ControlBox};
use crate::engine::{LayoutEngine, PlacedText};
use crate::error::LayoutError;
use crate::font::FontSource;
use crate::layout::{Align, FitOptions};
use crate::rect::Rect;
use crate::units::Px;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info};

/// Separates label lines of one control when they are reflowed together
pub const DEFAULT_WRAP_LINE_SEPARATOR: &str = " ● ";

const TITLE_ANCHOR: (i32, i32) = (50, 50);
const TITLE_FONT_SIZE: u32 = 40;
const SUBTITLE_ANCHOR: (i32, i32) = (50, 100);
const SUBTITLE_FONT_SIZE: u32 = 30;
const EXTRA_TEXT_ANCHOR: (i32, i32) = (975, 1000);
const EXTRA_TEXT_FONT_SIZE: u32 = 30;

/// Something labels can be painted onto, usually a template image. Drawing is
/// entirely up to the implementation; the layout engine only decides what goes
/// where.
pub trait Canvas<F> {
    /// Fill `rect` with `fill` and outline it with `outline`
    fn draw_rect(&mut self, rect: Rect, outline: Colour, fill: Colour);

    /// Draw a possibly multi-line block of text with its top-left corner at
    /// `origin`, aligning its lines against each other per `align`
    fn draw_text(&mut self, origin: (Px, Px), text: &str, font: &F, colour: Colour, align: Align);
}

/// Free-standing text set at a fixed size around an anchor point, such as a
/// title or a note on a diagram
#[derive(Debug, Clone, PartialEq)]
pub struct PointLabel {
    pub text: String,
    pub x: Px,
    pub y: Px,
    pub font_size: u32,
    pub colour: Colour,
    pub hjust: f32,
    pub vjust: f32,
}

impl PointLabel {
    /// A label whose top-left corner is at `(x, y)`
    pub fn new<S: Into<String>, T: Into<Px>>(text: S, x: T, y: T, font_size: u32, colour: Colour) -> PointLabel {
        PointLabel {
            text: text.into(),
            x: x.into(),
            y: y.into(),
            font_size,
            colour,
            hjust: 0.0,
            vjust: 0.0,
        }
    }

    pub fn with_justification(mut self, hjust: f32, vjust: f32) -> Self {
        self.hjust = hjust;
        self.vjust = vjust;
        self
    }
}

/// Settings shared by every label drawn onto one diagram
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationConfig {
    /// Font family (or file) identifier passed to the font source
    pub font_family: String,
    pub colours: ColourScheme,
    /// Reflow all of a control's label lines together to fit its box, rather
    /// than keeping one label per line and scaling
    pub wrap: bool,
    /// Put between a control's label lines when `wrap` is set
    pub wrap_line_separator: String,
    /// Draw each control's box behind its text, for checking placements
    pub show_rects: bool,
    pub base_font_size: u32,
    pub font_size_step: u32,
}

impl AnnotationConfig {
    pub fn new<S: Into<String>>(font_family: S) -> AnnotationConfig {
        let defaults = FitOptions::default();
        AnnotationConfig {
            font_family: font_family.into(),
            colours: ColourScheme::default(),
            wrap: false,
            wrap_line_separator: DEFAULT_WRAP_LINE_SEPARATOR.to_string(),
            show_rects: false,
            base_font_size: defaults.base_font_size,
            font_size_step: defaults.font_size_step,
        }
    }

    pub fn with_colours(mut self, colours: ColourScheme) -> Self {
        self.colours = colours;
        self
    }

    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn with_wrap_line_separator<S: Into<String>>(mut self, separator: S) -> Self {
        self.wrap_line_separator = separator.into();
        self
    }

    pub fn with_show_rects(mut self, show_rects: bool) -> Self {
        self.show_rects = show_rects;
        self
    }

    /// The diagram's title, top left in the title colour
    pub fn title<S: Into<String>>(&self, text: S) -> PointLabel {
        let (x, y) = TITLE_ANCHOR;
        PointLabel::new(text, x, y, TITLE_FONT_SIZE, self.colours.title)
    }

    /// A subtitle, set smaller just below the title
    pub fn subtitle<S: Into<String>>(&self, text: S) -> PointLabel {
        let (x, y) = SUBTITLE_ANCHOR;
        PointLabel::new(text, x, y, SUBTITLE_FONT_SIZE, self.colours.title)
    }

    /// A free-form note in the lower right of the diagram
    pub fn extra_text<S: Into<String>>(&self, text: S) -> PointLabel {
        let (x, y) = EXTRA_TEXT_ANCHOR;
        PointLabel::new(text, x, y, EXTRA_TEXT_FONT_SIZE, self.colours.title)
    }

    /// Title, subtitle and extra text labels for whichever of them are given
    /// and not empty
    pub fn headings(
        &self,
        title: Option<&str>,
        subtitle: Option<&str>,
        extra_text: Option<&str>,
    ) -> Vec<PointLabel> {
        [
            title.filter(|t| !t.is_empty()).map(|t| self.title(t)),
            subtitle.filter(|t| !t.is_empty()).map(|t| self.subtitle(t)),
            extra_text.filter(|t| !t.is_empty()).map(|t| self.extra_text(t)),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Fit options for one control's box
    pub fn fit_options(&self, placement: &ControlBox) -> FitOptions {
        FitOptions::default()
            .with_wrap(self.wrap)
            .with_base_font_size(self.base_font_size)
            .with_font_size_step(self.font_size_step)
            .with_justification(placement.hjust, placement.vjust)
    }

    /// Combine the label lines for one control into the text to fit
    pub fn join_lines<S: AsRef<str>>(&self, lines: &[S]) -> String {
        let separator = if self.wrap {
            self.wrap_line_separator.as_str()
        } else {
            "\n"
        };
        lines
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(separator)
    }
}

/// Fits `text` into `rect`, justifies it, and draws it. When `show_rect` is
/// set, the box itself is drawn first. Empty text draws nothing, not even the
/// box.
///
/// Returns where the text went, if anything was drawn.
#[allow(clippy::too_many_arguments)]
pub fn draw_boxed_text<S, C>(
    engine: &mut LayoutEngine<S>,
    canvas: &mut C,
    text: &str,
    rect: Rect,
    family: &str,
    colour: Colour,
    options: &FitOptions,
    show_rect: bool,
) -> Result<Option<PlacedText<S::Font>>, LayoutError>
where
    S: FontSource,
    C: Canvas<S::Font>,
{
    let Some(placed) = engine.place_in_box(text, rect, family, options)? else {
        return Ok(None);
    };

    if show_rect {
        canvas.draw_rect(rect, colours::RECT_OUTLINE, colours::RECT_FILL);
    }
    canvas.draw_text(
        placed.origin,
        &placed.fitted.text,
        &engine.fonts[placed.fitted.font],
        colour,
        placed.align,
    );
    Ok(Some(placed))
}

/// Sets a [PointLabel] at its own size around its anchor and draws it
pub fn draw_point_label<S, C>(
    engine: &mut LayoutEngine<S>,
    canvas: &mut C,
    label: &PointLabel,
    family: &str,
) -> Result<Option<PlacedText<S::Font>>, LayoutError>
where
    S: FontSource,
    C: Canvas<S::Font>,
{
    let Some(placed) = engine.place_at_point(
        &label.text,
        (label.x, label.y),
        family,
        label.font_size,
        label.hjust,
        label.vjust,
    )?
    else {
        return Ok(None);
    };

    canvas.draw_text(
        placed.origin,
        &placed.fitted.text,
        &engine.fonts[placed.fitted.font],
        label.colour,
        placed.align,
    );
    Ok(Some(placed))
}

/// Labels one diagram: for every control that has both label lines in
/// `labels` and a box in `placements`, the lines are joined, coloured by
/// control type, fitted to the box, and drawn. Then every one of `extra` is
/// drawn at its anchor.
///
/// Controls are visited in key order. Returns how many labels were drawn.
pub fn annotate<S, C>(
    engine: &mut LayoutEngine<S>,
    canvas: &mut C,
    labels: &BTreeMap<String, Vec<String>>,
    placements: &HashMap<String, ControlBox>,
    extra: &[PointLabel],
    config: &AnnotationConfig,
) -> Result<usize, LayoutError>
where
    S: FontSource,
    C: Canvas<S::Font>,
{
    let mut drawn = 0;

    for (key, lines) in labels {
        let Some(placement) = placements.get(key) else {
            debug!(key = key.as_str(), "no placement for control, skipping");
            continue;
        };

        let text = config.join_lines(lines);
        let colour = config.colours.colour_for(placement.control);
        let options = config.fit_options(placement);
        let placed = draw_boxed_text(
            engine,
            canvas,
            &text,
            placement.rect,
            &config.font_family,
            colour,
            &options,
            config.show_rects,
        )?;
        if placed.is_some() {
            drawn += 1;
        }
    }

    for label in extra {
        if draw_point_label(engine, canvas, label, &config.font_family)?.is_some() {
            drawn += 1;
        }
    }

    info!(drawn, "annotated diagram");
    Ok(drawn)
}

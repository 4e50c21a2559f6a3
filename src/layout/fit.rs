use crate::rect::Extent;
use std::collections::BTreeMap;
use tracing::{trace, warn};

/// The reference size text is first measured at
pub const DEFAULT_BASE_FONT_SIZE: u32 = 16;
/// How far the wrapping search jumps up after finding a size that fits
pub const DEFAULT_FONT_SIZE_STEP: u32 = 5;
/// The smallest size the search will ever try
pub const DEFAULT_MIN_FONT_SIZE: u32 = 1;
/// The largest size the search will ever try
pub const DEFAULT_MAX_FONT_SIZE: u32 = 1024;

/// Controls how text is fitted to, and positioned within, its box
#[derive(Debug, Clone, PartialEq)]
pub struct FitOptions {
    /// Rewrap the text to the box width, searching for the largest font size
    /// that fits. When off, the text keeps its own line breaks and is scaled
    /// in one step
    pub wrap: bool,
    pub base_font_size: u32,
    pub font_size_step: u32,
    pub min_font_size: u32,
    pub max_font_size: u32,
    /// Horizontal justification within the box, 0 (left) to 1 (right)
    pub hjust: f32,
    /// Vertical justification within the box, 0 (top) to 1 (bottom)
    pub vjust: f32,
    /// Break words wider than the box when wrapping, see
    /// [WordWrap::break_long_words](crate::layout::WordWrap::break_long_words)
    pub break_long_words: bool,
}

impl Default for FitOptions {
    fn default() -> Self {
        FitOptions {
            wrap: false,
            base_font_size: DEFAULT_BASE_FONT_SIZE,
            font_size_step: DEFAULT_FONT_SIZE_STEP,
            min_font_size: DEFAULT_MIN_FONT_SIZE,
            max_font_size: DEFAULT_MAX_FONT_SIZE,
            hjust: 0.5,
            vjust: 0.5,
            break_long_words: false,
        }
    }
}

impl FitOptions {
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn with_base_font_size(mut self, size: u32) -> Self {
        self.base_font_size = size;
        self
    }

    pub fn with_font_size_step(mut self, step: u32) -> Self {
        self.font_size_step = step;
        self
    }

    /// Limit the sizes the search may try to `min..=max`
    pub fn with_font_size_range(mut self, min: u32, max: u32) -> Self {
        self.min_font_size = min;
        self.max_font_size = max;
        self
    }

    pub fn with_justification(mut self, hjust: f32, vjust: f32) -> Self {
        self.hjust = hjust;
        self.vjust = vjust;
        self
    }

    pub fn with_break_long_words(mut self, enabled: bool) -> Self {
        self.break_long_words = enabled;
        self
    }

    /// `(min, max)`, made non-empty and never below 1
    fn size_bounds(&self) -> (u32, u32) {
        let min = self.min_font_size.max(1);
        (min, self.max_font_size.max(min))
    }
}

/// The outcome of a font-size search
#[derive(Debug, Clone, PartialEq)]
pub struct SizeFit<T> {
    pub size: u32,
    /// Whatever the measuring function produced at `size` (for the wrapping
    /// search, the wrapped text)
    pub content: T,
    pub extent: Extent,
    /// False when nothing fit and this is a best effort
    pub fits: bool,
}

/// Scale-to-fit: measures once at the base size, then scales the size so the
/// binding dimension (whichever of width or height overflows the box more, in
/// proportion) fills the box. The new size is truncated to a whole number and
/// measured again; there is no further search.
///
/// A degenerate box, or text that measures nothing at the base size, leaves
/// the base size unchanged and reports no fit.
pub fn fit_scaled<E>(
    target: Extent,
    options: &FitOptions,
    mut measure: impl FnMut(u32) -> Result<Extent, E>,
) -> Result<SizeFit<()>, E> {
    let (min, max) = options.size_bounds();
    let base = options.base_font_size.clamp(min, max);
    let reference = measure(base)?;

    if target.is_degenerate() || (reference.width.0 <= 0.0 && reference.height.0 <= 0.0) {
        warn!(?target, ?reference, "cannot scale text into box");
        return Ok(SizeFit {
            size: base,
            content: (),
            extent: reference,
            fits: false,
        });
    }

    let width_ratio = reference.width.0 / target.width.0;
    let height_ratio = reference.height.0 / target.height.0;
    let scaled = if width_ratio > height_ratio {
        // wider than tall, in proportion to the box
        base as f32 * target.width.0 / reference.width.0
    } else {
        base as f32 * target.height.0 / reference.height.0
    };
    let size = (scaled as u32).clamp(min, max);
    trace!(base, size, width_ratio, height_ratio, "scaled font size");

    let extent = measure(size)?;
    Ok(SizeFit {
        size,
        content: (),
        extent,
        fits: extent.fits_within(target),
    })
}

/// Searches for the largest font size at which `attempt` produces content
/// that fits `target`. `attempt` is called with a size and returns the
/// content laid out at that size (usually wrapped text) and its extent.
///
/// Starting from the base size, a size that overflows is remembered and the
/// search steps down by one; a size that fits is remembered and the search
/// jumps up by the configured step. The search ends on reaching a size already
/// known to fit, and the largest fitting size wins. Each size is attempted at
/// most once.
///
/// The search never leaves `min_font_size..=max_font_size`. If even the
/// minimum overflows, the smallest attempted size is returned with `fits`
/// set to false.
pub fn fit_wrapped<T, E>(
    target: Extent,
    options: &FitOptions,
    mut attempt: impl FnMut(u32) -> Result<(T, Extent), E>,
) -> Result<SizeFit<T>, E> {
    let (min, max) = options.size_bounds();
    let step = options.font_size_step.max(1);

    let mut lay_out = |size: u32| -> Result<SizeFit<T>, E> {
        let (content, extent) = attempt(size)?;
        let fits = extent.fits_within(target);
        trace!(size, ?extent, fits, "attempted font size");
        Ok(SizeFit {
            size,
            content,
            extent,
            fits,
        })
    };

    let mut size = options.base_font_size.clamp(min, max);
    let mut best = lay_out(size)?;
    // whether each attempted size fit
    let mut tried = BTreeMap::from([(size, best.fits)]);
    let mut fits = best.fits;

    loop {
        if fits {
            size = size.saturating_add(step).min(max);
        } else if size > min {
            size -= 1;
        } else {
            break;
        }

        match tried.get(&size) {
            Some(true) => break,
            Some(false) => fits = false,
            None => {
                let candidate = lay_out(size)?;
                fits = candidate.fits;
                tried.insert(size, fits);
                if candidate.improves_on(&best) {
                    best = candidate;
                }
            }
        }
    }

    if !best.fits {
        warn!(
            size = best.size,
            ?target,
            extent = ?best.extent,
            "text does not fit at any attempted size"
        );
    }
    Ok(best)
}

impl<T> SizeFit<T> {
    /// A fit beats any overflow and a larger fit beats a smaller one. Between
    /// overflows, the smaller size is the better effort.
    fn improves_on(&self, other: &SizeFit<T>) -> bool {
        match (self.fits, other.fits) {
            (true, false) => true,
            (false, true) => false,
            (true, true) => self.size > other.size,
            (false, false) => self.size < other.size,
        }
    }
}

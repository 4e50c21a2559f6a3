//! Fits label text into boxes on annotated control diagrams.
//!
//! Given a box and some text, the [LayoutEngine] picks a font size (scaling
//! the text as-is, or rewrapping it to the box width and searching for the
//! largest size that fits) and works out where the text block should be drawn
//! for a given justification. The [label] module drives a [label::Canvas] with
//! the results to stamp a whole diagram's worth of labels.
//!
//! Fonts are opaque to the engine: anything implementing [FontSource] and
//! [TextExtent] will do. [TtfFontSource] loads TrueType and OpenType fonts.

mod colour;
pub use colour::*;

mod control;
pub use control::*;

mod engine;
pub use engine::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

/// Word wrapping, font size fitting, and justification
pub mod layout;

/// Drawing fitted labels onto a canvas
pub mod label;

mod rect;
pub use rect::*;

mod units;
pub use units::*;

//! Text layout algorithms for fitting labels into boxes.
//!
//! Everything here is a pure function of its inputs. Font metrics come in
//! through closures, so the algorithms can be driven by a real font via the
//! [LayoutEngine](crate::LayoutEngine) (which adds caching) or by fixed widths
//! in tests.
//!
//! # Pieces
//!
//! - [`word_wrap`](crate::layout::word_wrap) - greedy word wrapping against a pixel budget using per-character widths
//! - [`fit_scaled`](crate::layout::fit_scaled) - one-step font scaling so unwrapped text fills a box
//! - [`fit_wrapped`](crate::layout::fit_wrapped) - search for the largest font size at which wrapped text fits a box
//! - [`justify_to_point`](crate::layout::justify_to_point) / [`justify_to_box`](crate::layout::justify_to_box) - fractional positioning along one axis
//!
//! # Example
//!
//! ```
//! use label_fit::layout::{justify_box, word_wrap, Align};
//! use label_fit::{Px, Rect};
//!
//! // a monospaced font, 10 pixels per character
//! let lines: Vec<String> = word_wrap("Landing gear toggle", Px(100.0), |_| Px(10.0)).collect();
//! assert_eq!(lines, vec!["Landing", "gear", "toggle"]);
//!
//! let rect = Rect::new(0, 0, 190, 50);
//! let origin = justify_box(rect, Px(70.0), Px(30.0), 0.5, 0.5);
//! assert_eq!(origin, (Px(60.0), Px(10.0)));
//! assert_eq!(Align::from_justification(0.5), Align::Center);
//! ```

mod fit;
mod justify;
mod wrap;

pub use fit::*;
pub use justify::*;
pub use wrap::*;

pub(crate) use wrap::flatten_paragraph;

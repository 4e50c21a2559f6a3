use crate::units::*;

/// A rectangle on the raster, specified by its top-left corner and its size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the left edge.
    pub left: Px,
    /// The y-coordinate of the top edge.
    pub top: Px,
    /// The horizontal size of the rectangle.
    pub width: Px,
    /// The vertical size of the rectangle.
    pub height: Px,
}

impl Rect {
    /// Create a rectangle from its left and top edges and its size
    pub fn new<T: Into<Px>>(left: T, top: T, width: T, height: T) -> Rect {
        Rect {
            left: left.into(),
            top: top.into(),
            width: width.into(),
            height: height.into(),
        }
    }

    /// The x-coordinate of the right edge
    pub fn right(&self) -> Px {
        self.left + self.width
    }

    /// The y-coordinate of the bottom edge
    pub fn bottom(&self) -> Px {
        self.top + self.height
    }

    /// The size of the rectangle, without its position
    pub fn extent(&self) -> Extent {
        Extent {
            width: self.width,
            height: self.height,
        }
    }

    /// A rectangle with no area cannot hold any text
    pub fn is_degenerate(&self) -> bool {
        self.extent().is_degenerate()
    }
}

/// The measured size of a block of text (or of anything else that has to be
/// fitted into a [Rect]).
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Extent {
    pub width: Px,
    pub height: Px,
}

impl Extent {
    pub fn new<T: Into<Px>>(width: T, height: T) -> Extent {
        Extent {
            width: width.into(),
            height: height.into(),
        }
    }

    /// Whether this extent fits inside `target` along both axes
    pub fn fits_within(&self, target: Extent) -> bool {
        self.width <= target.width && self.height <= target.height
    }

    /// True when either dimension is zero, negative, or not a number
    pub fn is_degenerate(&self) -> bool {
        !(self.width > Px::ZERO && self.height > Px::ZERO)
    }
}

impl From<(Px, Px)> for Extent {
    fn from((width, height): (Px, Px)) -> Self {
        Extent { width, height }
    }
}

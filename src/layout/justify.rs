use crate::rect::Rect;
use crate::units::Px;

/// How the lines of a multi-line block are aligned against each other. This
/// is coarser than the justification used to position the block: renderers
/// usually only offer these three choices.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Align {
    /// Lines share a left edge
    #[default]
    Start,
    /// Lines are centred on each other
    Center,
    /// Lines share a right edge
    End,
}

impl Align {
    /// Snaps a justification fraction to the nearest alignment:
    /// up to 0.25 is [Align::Start], from 0.75 is [Align::End], anything else
    /// is [Align::Center]
    pub fn from_justification(just: f32) -> Align {
        if just <= 0.25 {
            Align::Start
        } else if just >= 0.75 {
            Align::End
        } else {
            Align::Center
        }
    }
}

/// Positions an item of size `item_size` so that `anchor` sits at the
/// fraction `just` along the item: 0 puts the item's start edge on the anchor,
/// 1 its end edge, 0.5 its middle. Returns the item's start coordinate.
///
/// The same formula serves both axes since x grows to the right and y grows
/// downwards.
pub fn justify_to_point(anchor: Px, item_size: Px, just: f32) -> Px {
    anchor - item_size * just
}

/// Positions an item of size `item_size` inside a box, placing it at the
/// fraction `just` of the space left over: 0 aligns it with the box's start
/// edge, 1 with its end edge. Returns the item's start coordinate.
pub fn justify_to_box(box_start: Px, box_size: Px, item_size: Px, just: f32) -> Px {
    box_start + (box_size - item_size) * just
}

/// Top-left origin of a `width` by `height` item justified around a point
pub fn justify_point(
    anchor_x: Px,
    anchor_y: Px,
    width: Px,
    height: Px,
    hjust: f32,
    vjust: f32,
) -> (Px, Px) {
    (
        justify_to_point(anchor_x, width, hjust),
        justify_to_point(anchor_y, height, vjust),
    )
}

/// Top-left origin of a `width` by `height` item justified within `rect`
pub fn justify_box(rect: Rect, width: Px, height: Px, hjust: f32, vjust: f32) -> (Px, Px) {
    (
        justify_to_box(rect.left, rect.width, width, hjust),
        justify_to_box(rect.top, rect.height, height, vjust),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_justification_endpoints() {
        let (p, s) = (Px(100.0), Px(30.0));
        assert_eq!(justify_to_point(p, s, 0.0), p);
        assert_eq!(justify_to_point(p, s, 1.0), Px(70.0));
        assert_eq!(justify_to_point(p, s, 0.5), Px(85.0));
    }

    #[test]
    fn box_justification_endpoints() {
        let (b, size, item) = (Px(10.0), Px(190.0), Px(50.0));
        assert_eq!(justify_to_box(b, size, item, 0.0), b);
        assert_eq!(justify_to_box(b, size, item, 1.0), Px(150.0));
        assert_eq!(justify_to_box(b, size, item, 0.5), Px(80.0));
    }

    #[test]
    fn oversized_items_overhang_both_edges_when_centred() {
        assert_eq!(justify_to_box(Px(0.0), Px(10.0), Px(30.0), 0.5), Px(-10.0));
    }

    #[test]
    fn axes_are_independent() {
        let rect = Rect::new(213, 1386, 190, 50);
        assert_eq!(
            justify_box(rect, Px(90.0), Px(20.0), 0.0, 1.0),
            (Px(213.0), Px(1416.0))
        );
        assert_eq!(
            justify_point(Px(50.0), Px(50.0), Px(40.0), Px(10.0), 1.0, 0.0),
            (Px(10.0), Px(50.0))
        );
    }

    #[test]
    fn alignment_snaps_to_three_classes() {
        assert_eq!(Align::from_justification(0.1), Align::Start);
        assert_eq!(Align::from_justification(0.25), Align::Start);
        assert_eq!(Align::from_justification(0.5), Align::Center);
        assert_eq!(Align::from_justification(0.75), Align::End);
        assert_eq!(Align::from_justification(0.9), Align::End);
        assert_eq!(Align::from_justification(0.26), Align::Center);
    }
}

use crate::error::LayoutError;
use std::str::FromStr;

/// An 8-bit RGB colour, as drawn onto the template raster
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub const fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour { r, g, b }
    }

    /// Create a grey colour, g ranges from 0 to 255
    pub const fn new_grey_bytes(g: u8) -> Colour {
        Colour { r: g, g, b: g }
    }
}

impl From<(u8, u8, u8)> for Colour {
    fn from(c: (u8, u8, u8)) -> Self {
        Colour::new_rgb_bytes(c.0, c.1, c.2)
    }
}

impl From<[u8; 3]> for Colour {
    fn from(c: [u8; 3]) -> Self {
        let [r, g, b] = c;
        Colour::new_rgb_bytes(r, g, b)
    }
}

/// Parses comma-separated components such as `"255,0,255"`. Whitespace around
/// each component is ignored.
impl FromStr for Colour {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LayoutError::InvalidColour(s.to_string());

        let components = s
            .split(',')
            .map(|v| v.trim().parse::<u8>().map_err(|_| invalid()))
            .collect::<Result<Vec<u8>, LayoutError>>()?;

        match components.as_slice() {
            &[r, g, b] => Ok(Colour::new_rgb_bytes(r, g, b)),
            _ => Err(invalid()),
        }
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::new_grey_bytes(0);
    pub const WHITE: Colour = Colour::new_grey_bytes(255);
    pub const RED: Colour = Colour::new_rgb_bytes(255, 0, 0);
    pub const GREEN: Colour = Colour::new_rgb_bytes(0, 255, 0);
    pub const BLUE: Colour = Colour::new_rgb_bytes(0, 0, 255);
    pub const MAGENTA: Colour = Colour::new_rgb_bytes(255, 0, 255);
    pub const DARK_GREEN: Colour = Colour::new_rgb_bytes(0, 100, 0);

    /// Outline of the debug rectangle drawn behind boxed labels
    pub const RECT_OUTLINE: Colour = BLACK;
    /// Fill of the debug rectangle drawn behind boxed labels
    pub const RECT_FILL: Colour = Colour::new_grey_bytes(240);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_bytes() {
        let c: Colour = "255, 0,255".parse().unwrap();
        assert_eq!(c, colours::MAGENTA);
        assert_eq!("0,100,0".parse::<Colour>().unwrap(), colours::DARK_GREEN);
    }

    #[test]
    fn rejects_wrong_arity_and_out_of_range() {
        for bad in ["1,2", "1,2,3,4", "256,0,0", "-1,0,0", "a,b,c", ""] {
            let err = bad.parse::<Colour>().unwrap_err();
            assert!(
                matches!(err, LayoutError::InvalidColour(ref s) if s == bad),
                "{bad:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn tuples_and_arrays_convert() {
        assert_eq!(Colour::from((255, 0, 255)), colours::MAGENTA);
        assert_eq!(Colour::from([0u8, 0, 255]), colours::BLUE);
    }
}

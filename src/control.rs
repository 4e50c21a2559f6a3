use crate::colour::{colours, Colour};
use crate::error::LayoutError;
use crate::rect::Rect;
use std::fmt;
use std::str::FromStr;

/// The kind of physical control a label belongs to. The kind only decides the
/// colour the label is drawn in.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ControlType {
    /// An axis, e.g. stick deflection or a throttle lever (tag `~`)
    Analogue,
    /// A switch that deactivates when released (tag `.`)
    Momentary,
    /// A switch that keeps its position when released (tag `+`)
    Sticky,
}

impl ControlType {
    /// The single-character tag used in placement tables
    pub fn tag(&self) -> char {
        match self {
            ControlType::Analogue => '~',
            ControlType::Momentary => '.',
            ControlType::Sticky => '+',
        }
    }
}

impl fmt::Display for ControlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ControlType::Analogue => "analogue",
            ControlType::Momentary => "momentary",
            ControlType::Sticky => "sticky",
        };
        f.write_str(name)
    }
}

/// Accepts either the single-character tag or the (case-insensitive) name
impl FromStr for ControlType {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "~" | "analogue" | "analog" => Ok(ControlType::Analogue),
            "." | "momentary" => Ok(ControlType::Momentary),
            "+" | "sticky" => Ok(ControlType::Sticky),
            _ => Err(LayoutError::UnknownControlType(s.to_string())),
        }
    }
}

/// The colours labels are drawn in, one per [ControlType] plus one for titles
/// and other free-standing text
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ColourScheme {
    pub title: Colour,
    pub analogue: Colour,
    pub momentary: Colour,
    pub sticky: Colour,
}

impl Default for ColourScheme {
    fn default() -> Self {
        ColourScheme {
            title: colours::DARK_GREEN,
            analogue: colours::MAGENTA,
            momentary: colours::RED,
            sticky: colours::BLUE,
        }
    }
}

impl ColourScheme {
    /// Select the colour for a control. Controls without a known type are
    /// drawn as momentary switches
    pub fn colour_for(&self, control: Option<ControlType>) -> Colour {
        match control {
            Some(ControlType::Analogue) => self.analogue,
            Some(ControlType::Sticky) => self.sticky,
            Some(ControlType::Momentary) | None => self.momentary,
        }
    }

    pub fn with_title(mut self, colour: Colour) -> Self {
        self.title = colour;
        self
    }

    pub fn with_analogue(mut self, colour: Colour) -> Self {
        self.analogue = colour;
        self
    }

    pub fn with_momentary(mut self, colour: Colour) -> Self {
        self.momentary = colour;
        self
    }

    pub fn with_sticky(mut self, colour: Colour) -> Self {
        self.sticky = colour;
        self
    }
}

/// Where a control's label goes on the template image
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct ControlBox {
    /// The rectangle the label text is confined to
    pub rect: Rect,
    /// What kind of control this is, if known
    pub control: Option<ControlType>,
    /// Horizontal justification of the text within `rect`
    pub hjust: f32,
    /// Vertical justification of the text within `rect`
    pub vjust: f32,
}

impl ControlBox {
    /// A centred box with no control type
    pub fn new(rect: Rect) -> ControlBox {
        ControlBox {
            rect,
            control: None,
            hjust: 0.5,
            vjust: 0.5,
        }
    }

    pub fn with_control(mut self, control: ControlType) -> Self {
        self.control = Some(control);
        self
    }

    pub fn with_justification(mut self, hjust: f32, vjust: f32) -> Self {
        self.hjust = hjust;
        self.vjust = vjust;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tags_and_names() {
        assert_eq!("~".parse::<ControlType>().unwrap(), ControlType::Analogue);
        assert_eq!(".".parse::<ControlType>().unwrap(), ControlType::Momentary);
        assert_eq!("+".parse::<ControlType>().unwrap(), ControlType::Sticky);
        assert_eq!(" Sticky ".parse::<ControlType>().unwrap(), ControlType::Sticky);
        assert!(matches!(
            "*".parse::<ControlType>(),
            Err(LayoutError::UnknownControlType(s)) if s == "*"
        ));
    }

    #[test]
    fn tags_round_trip_through_parse() {
        for kind in [ControlType::Analogue, ControlType::Momentary, ControlType::Sticky] {
            assert_eq!(kind.tag().to_string().parse::<ControlType>().unwrap(), kind);
        }
    }

    #[test]
    fn untyped_controls_use_momentary_colour() {
        let scheme = ColourScheme::default().with_momentary(colours::GREEN);
        assert_eq!(scheme.colour_for(None), colours::GREEN);
        assert_eq!(scheme.colour_for(Some(ControlType::Analogue)), colours::MAGENTA);
        assert_eq!(scheme.colour_for(Some(ControlType::Sticky)), colours::BLUE);
    }
}

use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("failed to load font `{family}` at size {size}")]
    /// The font source could not provide a font. The underlying cause (usually
    /// a missing or unparseable font file) is in `source`
    FontLoad {
        family: String,
        size: u32,
        #[source]
        source: Box<LayoutError>,
    },

    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error("invalid colour `{0}`, expected three comma-separated values from 0 to 255")]
    /// A colour could not be parsed from text
    InvalidColour(String),

    #[error("unknown control type `{0}`")]
    /// A control type tag was not one of the known kinds
    UnknownControlType(String),
}

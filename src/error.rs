use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum LabelError {
    /// The requested label format isn't in the catalog
    #[error("unknown label format: {0}")]
    UnknownFormat(String),

    /// A label format asked for a conversion between units we have no factor for.
    /// This means the catalog entry is wrong, not that the caller did anything wrong.
    #[error("unsupported unit conversion from {from} to {to}")]
    UnsupportedUnit { from: String, to: String },

    /// A unit name that doesn't match any known unit
    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    /// A label format names a paper size we don't know the dimensions of
    #[error("unknown paper size: {0}")]
    UnknownPaperSize(String),

    /// A label format failed validation, i.e. it has no rows or no columns
    #[error("invalid label format {name}: {reason}")]
    InvalidFormat { name: String, reason: String },

    /// No standard font matches the requested family and style
    #[error("unknown font: family {family:?}, style {style:?}")]
    UnknownFont { family: String, style: String },

    #[error(transparent)]
    /// A label catalog couldn't be parsed
    Catalog(#[from] toml::de::Error),

    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [image] failed to parse the image
    Image(#[from] image::ImageError),
}

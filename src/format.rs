//! Label sheet formats and the catalog they're looked up in.
//!
//! A [`LabelFormat`] describes one kind of pre-cut label sheet: the paper it's printed
//! on, where the first label starts, how big each label is, and how much space is left
//! between neighbouring labels. Formats are collected in a [`Catalog`] and referred to by
//! name (usually the manufacturer's product code).
//!
//! The crate ships a built-in catalog ([`Catalog::builtin`]); further formats can be
//! loaded from TOML:
//!
//! ```
//! use pdf_labels::Catalog;
//!
//! let catalog = Catalog::from_toml_str(r#"
//!     ["shelf-tags"]
//!     paper_size = "Letter"
//!     unit = "in"
//!     margin_left = 0.25
//!     margin_top = 0.5
//!     space_x = 0.0
//!     space_y = 0.0
//!     columns = 2
//!     rows = 10
//!     width = 4.0
//!     height = 1.0
//!     cut_lines = true
//! "#).expect("valid catalog");
//!
//! assert_eq!(catalog.lookup("shelf-tags").unwrap().rows, 10);
//! ```

use crate::LabelError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// The physical layout of a sheet of labels. All lengths are expressed in `unit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelFormat {
    /// Name of the paper the labels are printed on, i.e. `"A4"` or `"Letter"`
    pub paper_size: String,
    /// The unit all lengths of this format are given in, i.e. `"mm"` or `"inch"`
    pub unit: String,
    /// Distance from the left edge of the paper to the first column of labels
    pub margin_left: f32,
    /// Distance from the top edge of the paper to the first row of labels
    pub margin_top: f32,
    /// Horizontal gap between two neighbouring labels
    pub space_x: f32,
    /// Vertical gap between two neighbouring labels
    pub space_y: f32,
    /// Number of labels across the sheet
    pub columns: usize,
    /// Number of labels down the sheet
    pub rows: usize,
    /// Width of a single label
    pub width: f32,
    /// Height of a single label
    pub height: f32,
    /// Whether guides for cutting the sheet should be drawn between the labels
    #[serde(default)]
    pub cut_lines: bool,
}

impl LabelFormat {
    /// How many labels fit on a single sheet
    pub fn labels_per_sheet(&self) -> usize {
        self.columns * self.rows
    }

    /// Check the invariants every format must hold: at least one row and column, and
    /// labels with a positive size.
    pub fn validate(&self, name: &str) -> Result<(), LabelError> {
        let invalid = |reason: &str| LabelError::InvalidFormat {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        if self.columns == 0 {
            return Err(invalid("must have at least one column"));
        }
        if self.rows == 0 {
            return Err(invalid("must have at least one row"));
        }
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(invalid("label width must be positive"));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(invalid("label height must be positive"));
        }
        Ok(())
    }
}

/// An immutable-once-built lookup table of label formats, keyed by name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    formats: HashMap<String, LabelFormat>,
}

#[allow(clippy::too_many_arguments)]
fn format(
    paper_size: &str,
    unit: &str,
    margin_left: f32,
    margin_top: f32,
    space_x: f32,
    space_y: f32,
    columns: usize,
    rows: usize,
    width: f32,
    height: f32,
    cut_lines: bool,
) -> LabelFormat {
    LabelFormat {
        paper_size: paper_size.to_string(),
        unit: unit.to_string(),
        margin_left,
        margin_top,
        space_x,
        space_y,
        columns,
        rows,
        width,
        height,
        cut_lines,
    }
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Catalog {
        Catalog::default()
    }

    /// The label formats that ship with the crate:
    ///
    /// | name    | paper  | labels | label size        |
    /// |---------|--------|--------|-------------------|
    /// | `90x54` | A4     | 2 × 5  | 90 × 54 mm        |
    /// | `3474`  | A4     | 3 × 8  | 70 × 37 mm        |
    /// | `L7160` | A4     | 3 × 7  | 63.5 × 38.1 mm    |
    /// | `L7163` | A4     | 2 × 7  | 99.1 × 38.1 mm    |
    /// | `L7173` | A4     | 2 × 5  | 99.1 × 57 mm      |
    /// | `L7651` | A4     | 5 × 13 | 38.1 × 21.2 mm    |
    /// | `5160`  | Letter | 3 × 10 | 2.625 × 1 in      |
    /// | `5163`  | Letter | 2 × 5  | 4 × 2 in          |
    /// | `5167`  | Letter | 4 × 20 | 1.75 × 0.5 in     |
    pub fn builtin() -> Catalog {
        let formats = [
            ("90x54", format("A4", "mm", 15.0, 13.5, 0.0, 0.0, 2, 5, 90.0, 54.0, true)),
            ("3474", format("A4", "mm", 0.0, 0.5, 0.0, 0.0, 3, 8, 70.0, 37.0, true)),
            ("L7160", format("A4", "mm", 7.2, 15.15, 2.5, 0.0, 3, 7, 63.5, 38.1, false)),
            ("L7163", format("A4", "mm", 4.65, 15.15, 2.5, 0.0, 2, 7, 99.1, 38.1, false)),
            ("L7173", format("A4", "mm", 4.65, 6.0, 2.5, 0.0, 2, 5, 99.1, 57.0, false)),
            ("L7651", format("A4", "mm", 4.75, 10.7, 2.5, 0.0, 5, 13, 38.1, 21.2, false)),
            ("5160", format("Letter", "in", 0.1875, 0.5, 0.125, 0.0, 3, 10, 2.625, 1.0, false)),
            ("5163", format("Letter", "in", 0.15625, 0.5, 0.1875, 0.0, 2, 5, 4.0, 2.0, false)),
            ("5167", format("Letter", "in", 0.28125, 0.5, 0.3125, 0.0, 4, 20, 1.75, 0.5, false)),
        ];

        Catalog {
            formats: formats
                .into_iter()
                .map(|(name, format)| (name.to_string(), format))
                .collect(),
        }
    }

    /// Parse a catalog from TOML, where every top-level table is one format and the
    /// table name is the format's name. Every format is validated.
    pub fn from_toml_str(source: &str) -> Result<Catalog, LabelError> {
        let formats: HashMap<String, LabelFormat> = toml::from_str(source)?;
        for (name, format) in formats.iter() {
            format.validate(name)?;
        }
        log::debug!("loaded {} label formats from TOML", formats.len());
        Ok(Catalog { formats })
    }

    /// Read and parse a TOML catalog from disk, see [Catalog::from_toml_str]
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Catalog, LabelError> {
        let source = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&source)
    }

    /// Add (or replace) a format, validating it first
    pub fn insert<S: ToString>(&mut self, name: S, format: LabelFormat) -> Result<(), LabelError> {
        let name = name.to_string();
        format.validate(&name)?;
        self.formats.insert(name, format);
        Ok(())
    }

    /// Add all formats from `other`, replacing any formats with the same name
    pub fn extend(&mut self, other: Catalog) {
        self.formats.extend(other.formats);
    }

    /// Find a format by its exact name
    pub fn lookup(&self, name: &str) -> Result<&LabelFormat, LabelError> {
        self.formats
            .get(name)
            .ok_or_else(|| LabelError::UnknownFormat(name.to_string()))
    }

    /// The names of all formats, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.formats.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.formats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }
}

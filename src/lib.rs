//! Render sheets of fixed-size labels, such as address labels or business cards, as PDF
//! documents.
//!
//! Pick a [`LabelFormat`] by name from a [`Catalog`], create a [`LabelDocument`] for it,
//! and add labels one at a time. The document walks the sheet's grid left to right and
//! top to bottom, and starts new pages as sheets fill up.
//!
//! ```no_run
//! use pdf_labels::LabelDocument;
//!
//! let mut labels = LabelDocument::new("L7163", 0, 0)?;
//! labels.add_labels(["Jane Doe\n12 Main St", "John Roe\n14 Main St"]);
//! labels.output_to_file_and_close("addresses.pdf")?;
//! # Ok::<(), pdf_labels::LabelError>(())
//! ```

mod canvas;
pub use canvas::*;

mod colour;
pub use colour::*;

mod content;

mod document;
pub use document::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

mod format;
pub use format::*;

mod geometry;
pub use geometry::*;

mod image;
pub use self::image::*;

mod info;
pub use info::*;

mod labels;
pub use labels::*;

/// Utility functions to lay out text in label boxes
pub mod layout;

mod page;
pub use page::*;

/// Physical paper sizes, in points
pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod units;
pub use units::*;

/// Re-export PDF-writer functionality
pub use pdf_writer;

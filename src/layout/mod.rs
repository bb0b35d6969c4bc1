//! Text layout utilities for fitting text into label boxes.
//!
//! [`wrap_text`](crate::layout::wrap_text) breaks text into lines that fit a given
//! width, the way [`Canvas::multi_cell`](crate::Canvas::multi_cell) lays out text.
//!
//! # Example
//!
//! ```
//! use pdf_labels::layout::wrap_text;
//! use pdf_labels::{Pt, StandardFont};
//!
//! let lines = wrap_text("Jane Doe, 12 Main St", StandardFont::Courier, Pt(10.0), Pt(60.0));
//! assert_eq!(lines, vec!["Jane Doe,", "12 Main St"]);
//! ```

mod text;

pub use text::*;

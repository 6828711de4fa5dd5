//! Export of laid-out issue graphs.
//!
//! This module provides the [`Exporter`] trait that turns a [`Layout`] into
//! an output document. It is the last stage of the pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! GitHub issues
//!     ↓ structure
//! Issue Graph
//!     ↓ layout
//! Positioned Nodes and Edges (Layout)
//!     ↓ export (this module)
//! SVG document
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] - SVG output via [`svg::Svg`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering rendering failures and I/O
//! errors. [`Error`] converts into [`IssueGraphError::Export`] at the crate
//! boundary.
//!
//! [`IssueGraphError::Export`]: crate::IssueGraphError::Export

/// SVG export backend.
pub mod svg;

use std::io::Write;

use crate::layout::Layout;

/// Abstraction for export backends.
///
/// Implementors write a [`Layout`] to `writer` in a specific output format.
pub trait Exporter {
    /// Exports a layout to the backend's output format.
    ///
    /// # Arguments
    ///
    /// * `layout` - Canvas, positioned nodes and edges to export.
    /// * `writer` - Destination of the rendered document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the layout cannot be converted to the
    /// target format, or [`Error::Io`] if writing the output fails.
    fn export_layout(&self, layout: &Layout, writer: &mut dyn Write) -> Result<(), Error>;
}

/// Errors that can occur during export.
///
/// This type is converted into [`IssueGraphError::Export`] at the crate
/// boundary via the [`From`] implementation in [`crate::error`].
///
/// [`IssueGraphError::Export`]: crate::IssueGraphError::Export
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

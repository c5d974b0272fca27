//! Diagram export backends.
//!
//! SVG is the only supported output format.

pub mod svg;

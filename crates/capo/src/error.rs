//! Error types for Capo operations.
//!
//! This module provides the main error type [`CapoError`] which wraps every
//! failure that can occur while building or rendering chord diagrams. All
//! variants are synchronous validation or environment failures; none are
//! transient, and no operation falls back to a default diagram on error.

use std::io;

use thiserror::Error;

/// The main error type for Capo operations.
#[derive(Debug, Error)]
pub enum CapoError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The fingering does not describe a six-string instrument.
    #[error("diagram requires exactly 6 string positions, got {found}")]
    InvalidDiagram { found: usize },

    /// A sheet was requested with no chords.
    #[error("chord list cannot be empty")]
    EmptyInput,

    /// A sheet was requested with a non-positive column count.
    #[error("columns must be greater than 0")]
    InvalidLayout,

    /// One or more chord names are absent from the shape table.
    #[error("chord(s) not found: {}", names.join(", "))]
    UnknownChord { names: Vec<String> },

    /// The request named an instrument other than the supported guitar.
    #[error("unsupported instrument: {instrument}")]
    UnsupportedInstrument { instrument: String },

    /// A CSV positions value could not be parsed.
    #[error("invalid positions value: {0}")]
    InvalidPositions(String),

    /// A JSON request document could not be deserialized.
    #[error("request error: {0}")]
    Request(#[from] serde_json::Error),

    /// Configuration could not be loaded or validated.
    #[error("configuration error: {0}")]
    Config(String),
}

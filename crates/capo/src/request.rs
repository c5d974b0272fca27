//! Wire formats for render requests.
//!
//! Transports hand the library either a CSV positions string
//! (`"-1,3,2,0,1,0"`) or a JSON request document. Both carry the caller's
//! conventions: positions low-to-high, barre string numbers high-to-low.
//!
//! A diagram document looks like:
//!
//! ```json
//! {
//!   "instrument": "guitar",
//!   "meta": { "name": "F#min7" },
//!   "diagram": {
//!     "positions": [2, 4, 4, 2, 2, 2],
//!     "fretStart": 1,
//!     "fretsVisible": 5,
//!     "barres": [{ "fret": 2, "fromString": 6, "toString": 1 }]
//!   }
//! }
//! ```
//!
//! and a sheet document:
//!
//! ```json
//! { "instrument": "guitar", "chords": ["Cmaj", "Gmaj"], "columns": 4 }
//! ```

use serde::Deserialize;

use capo_core::fingering::{Barre, Fingering};

use crate::error::CapoError;

/// The only instrument the renderer supports.
pub const SUPPORTED_INSTRUMENT: &str = "guitar";

/// Parses a CSV-of-integers positions string.
///
/// # Errors
///
/// Returns [`CapoError::InvalidPositions`] if any element is not an
/// integer. Length is not checked here; the renderer validates it.
pub fn parse_positions(csv: &str) -> Result<Vec<i32>, CapoError> {
    csv.split(',')
        .map(|token| {
            let token = token.trim();
            token
                .parse::<i32>()
                .map_err(|_| CapoError::InvalidPositions(format!("`{token}` is not an integer")))
        })
        .collect()
}

/// Rejects every instrument except the supported guitar.
///
/// # Errors
///
/// Returns [`CapoError::UnsupportedInstrument`] for anything else.
pub fn ensure_supported_instrument(instrument: &str) -> Result<(), CapoError> {
    if instrument == SUPPORTED_INSTRUMENT {
        Ok(())
    } else {
        Err(CapoError::UnsupportedInstrument {
            instrument: instrument.to_string(),
        })
    }
}

fn default_instrument() -> String {
    SUPPORTED_INSTRUMENT.to_string()
}

fn default_chord_name() -> String {
    "Chord".to_string()
}

fn default_fret_start() -> i32 {
    1
}

fn default_frets_visible() -> u32 {
    5
}

fn default_columns() -> u32 {
    4
}

/// A JSON request for one chord diagram.
#[derive(Debug, Clone, Deserialize)]
pub struct DiagramRequest {
    #[serde(default = "default_instrument")]
    instrument: String,

    #[serde(default)]
    meta: Meta,

    diagram: DiagramBody,
}

/// Display metadata for a requested diagram.
#[derive(Debug, Clone, Deserialize)]
pub struct Meta {
    #[serde(default = "default_chord_name")]
    name: String,
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            name: default_chord_name(),
        }
    }
}

/// The symbolic diagram content of a [`DiagramRequest`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DiagramBody {
    positions: Vec<i32>,

    #[serde(default = "default_fret_start")]
    fret_start: i32,

    #[serde(default = "default_frets_visible")]
    frets_visible: u32,

    #[serde(default)]
    barres: Vec<Barre>,
}

impl DiagramRequest {
    /// Parses a request document, then validates the instrument.
    ///
    /// # Errors
    ///
    /// Returns [`CapoError::Request`] for malformed JSON and
    /// [`CapoError::UnsupportedInstrument`] for non-guitar requests.
    pub fn from_json(json: &str) -> Result<Self, CapoError> {
        let request: Self = serde_json::from_str(json)?;
        ensure_supported_instrument(&request.instrument)?;
        Ok(request)
    }

    /// Returns the display name for the diagram.
    pub fn name(&self) -> &str {
        &self.meta.name
    }

    /// Builds the requested [`Fingering`].
    pub fn fingering(&self) -> Fingering {
        Fingering::new(self.diagram.positions.clone(), self.diagram.fret_start)
    }

    /// Returns the requested barres.
    pub fn barres(&self) -> &[Barre] {
        &self.diagram.barres
    }

    /// Returns the requested visible fret count.
    pub fn frets_visible(&self) -> u32 {
        self.diagram.frets_visible
    }
}

/// A JSON request for a sheet of chords from the shape table.
#[derive(Debug, Clone, Deserialize)]
pub struct SheetRequest {
    #[serde(default = "default_instrument")]
    instrument: String,

    chords: Vec<String>,

    #[serde(default = "default_columns")]
    columns: u32,
}

impl SheetRequest {
    /// Parses a sheet document, then validates the instrument.
    ///
    /// # Errors
    ///
    /// Returns [`CapoError::Request`] for malformed JSON and
    /// [`CapoError::UnsupportedInstrument`] for non-guitar requests.
    pub fn from_json(json: &str) -> Result<Self, CapoError> {
        let request: Self = serde_json::from_str(json)?;
        ensure_supported_instrument(&request.instrument)?;
        Ok(request)
    }

    /// Returns the requested chord names, in sheet order.
    pub fn chords(&self) -> &[String] {
        &self.chords
    }

    /// Returns the requested column count.
    pub fn columns(&self) -> u32 {
        self.columns
    }
}

//! Symbolic chord shapes.
//!
//! A [`Fingering`] describes which fret (if any) each of the six strings is
//! pressed at, together with the first fret shown in the diagram window. A
//! [`Barre`] marks a single finger spanning several adjacent strings at one
//! fret.
//!
//! # String ordering
//!
//! `Fingering::positions` is ordered low pitch to high pitch (E-A-D-G-B-e),
//! so `positions[0]` is the lowest string and draws leftmost. Barres use the
//! opposite, player-facing convention: string numbers 1..6 where 6 is the
//! lowest string. [`Barre::span`] performs the conversion between the two.

use serde::{Deserialize, Serialize};

/// Number of strings on the supported instrument.
pub const STRING_COUNT: usize = 6;

/// A string position that is not played.
pub const MUTED: i32 = -1;

/// A string played without fretting.
pub const OPEN: i32 = 0;

/// The fret/mute/open assignment for one chord shape plus its display
/// window start.
///
/// Positions use `-1` for muted, `0` for open, and positive values for
/// absolute (1-based) fret numbers. A fingering with anything other than
/// exactly [`STRING_COUNT`] positions is rejected by the renderer; the type
/// itself does not enforce the length so that wire payloads can be
/// deserialized first and validated afterwards.
///
/// # Examples
///
/// ```
/// use capo_core::fingering::Fingering;
///
/// // The open C major shape: x-3-2-0-1-0
/// let fingering = Fingering::new(vec![-1, 3, 2, 0, 1, 0], 1);
/// assert_eq!(fingering.positions()[0], -1);
/// assert_eq!(fingering.fret_start(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fingering {
    positions: Vec<i32>,
    #[serde(default = "default_fret_start")]
    fret_start: i32,
}

fn default_fret_start() -> i32 {
    1
}

impl Fingering {
    /// Creates a fingering from string positions and a window start fret.
    pub fn new(positions: Vec<i32>, fret_start: i32) -> Self {
        Self {
            positions,
            fret_start,
        }
    }

    /// Returns the per-string positions, low pitch to high pitch.
    pub fn positions(&self) -> &[i32] {
        &self.positions
    }

    /// Returns the lowest absolute fret shown at the top of the diagram
    /// window (1 means the diagram starts at the nut).
    pub fn fret_start(&self) -> i32 {
        self.fret_start
    }
}

/// A single finger pressing multiple adjacent strings at one fret.
///
/// `from_string` and `to_string` are 1..6 string numbers where 6 is the
/// lowest-pitch string. A barre with `from_string == to_string` is accepted
/// and degenerates to a zero-width segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Barre {
    fret: i32,
    from_string: i32,
    to_string: i32,
}

impl Barre {
    /// Creates a barre at the given absolute fret spanning the given string
    /// numbers (1..6 convention, 6 = lowest string).
    pub fn new(fret: i32, from_string: i32, to_string: i32) -> Self {
        Self {
            fret,
            from_string,
            to_string,
        }
    }

    /// Returns the absolute fret this barre is placed at.
    pub fn fret(&self) -> i32 {
        self.fret
    }

    /// Returns the barre's span as ordered renderer string indices.
    ///
    /// String numbers count 6..1 from the lowest string; renderer indices
    /// count 0..5 from the lowest string, so each endpoint maps through
    /// `index = 6 - string_number`. The result is `(min, max)` regardless of
    /// the order the endpoints were given in.
    pub fn span(&self) -> (i32, i32) {
        let a = STRING_COUNT as i32 - self.from_string;
        let b = STRING_COUNT as i32 - self.to_string;
        (a.min(b), a.max(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingering_accessors() {
        let fingering = Fingering::new(vec![0, 2, 2, 1, 0, 0], 1);
        assert_eq!(fingering.positions().len(), STRING_COUNT);
        assert_eq!(fingering.fret_start(), 1);
    }

    #[test]
    fn test_fingering_deserializes_camel_case() {
        let fingering: Fingering =
            serde_json::from_str(r#"{"positions": [-1, 5, 7, 5, 6, 5], "fretStart": 4}"#).unwrap();
        assert_eq!(fingering.positions(), [-1, 5, 7, 5, 6, 5]);
        assert_eq!(fingering.fret_start(), 4);
    }

    #[test]
    fn test_fingering_fret_start_defaults_to_nut() {
        let fingering: Fingering =
            serde_json::from_str(r#"{"positions": [0, 2, 2, 1, 0, 0]}"#).unwrap();
        assert_eq!(fingering.fret_start(), 1);
    }

    #[test]
    fn test_barre_span_converts_string_numbers() {
        // Strings 6 and 5 are the two lowest, drawn at indices 0 and 1.
        let barre = Barre::new(3, 6, 5);
        assert_eq!(barre.span(), (0, 1));
    }

    #[test]
    fn test_barre_span_order_independent() {
        let forward = Barre::new(1, 6, 1);
        let backward = Barre::new(1, 1, 6);
        assert_eq!(forward.span(), (0, 5));
        assert_eq!(backward.span(), forward.span());
    }

    #[test]
    fn test_barre_span_degenerate_single_string() {
        let barre = Barre::new(2, 4, 4);
        assert_eq!(barre.span(), (2, 2));
    }

    #[test]
    fn test_barre_deserializes_camel_case() {
        let barre: Barre =
            serde_json::from_str(r#"{"fret": 3, "fromString": 6, "toString": 1}"#).unwrap();
        assert_eq!(barre.fret(), 3);
        assert_eq!(barre.span(), (0, 5));
    }
}

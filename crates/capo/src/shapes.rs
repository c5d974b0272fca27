//! The chord-shape table.
//!
//! Builds a mapping from chord name (root + quality, e.g. `"C#min7"`) to a
//! playable [`Fingering`] by transposing two movable barre-chord templates
//! along the neck: one rooted on the 6th string (E-form) and one rooted on
//! the 5th string (A-form). The full table covers 12 roots x 9 qualities =
//! 108 entries and is built once per process behind a [`OnceLock`].

use std::sync::OnceLock;

use indexmap::IndexMap;
use log::debug;

use capo_core::fingering::{Fingering, MUTED, STRING_COUNT};

/// The twelve chromatic pitch classes, sharps notation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PitchClass {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl PitchClass {
    /// All pitch classes in chromatic order starting at C.
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::CSharp,
        PitchClass::D,
        PitchClass::DSharp,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FSharp,
        PitchClass::G,
        PitchClass::GSharp,
        PitchClass::A,
        PitchClass::ASharp,
        PitchClass::B,
    ];

    /// The chord-name spelling of this pitch class.
    pub fn as_str(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "C#",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#",
            PitchClass::A => "A",
            PitchClass::ASharp => "A#",
            PitchClass::B => "B",
        }
    }

    /// Fret on the low E string that sounds this pitch class (E = 0).
    fn e_string_fret(self) -> i32 {
        match self {
            PitchClass::E => 0,
            PitchClass::F => 1,
            PitchClass::FSharp => 2,
            PitchClass::G => 3,
            PitchClass::GSharp => 4,
            PitchClass::A => 5,
            PitchClass::ASharp => 6,
            PitchClass::B => 7,
            PitchClass::C => 8,
            PitchClass::CSharp => 9,
            PitchClass::D => 10,
            PitchClass::DSharp => 11,
        }
    }

    /// Fret on the A string that sounds this pitch class (A = 0).
    fn a_string_fret(self) -> i32 {
        match self {
            PitchClass::A => 0,
            PitchClass::ASharp => 1,
            PitchClass::B => 2,
            PitchClass::C => 3,
            PitchClass::CSharp => 4,
            PitchClass::D => 5,
            PitchClass::DSharp => 6,
            PitchClass::E => 7,
            PitchClass::F => 8,
            PitchClass::FSharp => 9,
            PitchClass::G => 10,
            PitchClass::GSharp => 11,
        }
    }

    /// Roots A through D# use the A-form template so the resulting shapes
    /// stay low on the neck. This is a readability heuristic, not a
    /// music-theoretic rule.
    fn prefers_a_form(self) -> bool {
        matches!(
            self,
            PitchClass::A
                | PitchClass::ASharp
                | PitchClass::B
                | PitchClass::C
                | PitchClass::CSharp
                | PitchClass::D
                | PitchClass::DSharp
        )
    }
}

/// The nine supported chord qualities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quality {
    Major,
    Minor,
    Dominant7,
    Major7,
    Minor7,
    Sus2,
    Sus4,
    Diminished,
    Augmented,
}

impl Quality {
    /// All qualities in table order.
    pub const ALL: [Quality; 9] = [
        Quality::Major,
        Quality::Minor,
        Quality::Dominant7,
        Quality::Major7,
        Quality::Minor7,
        Quality::Sus2,
        Quality::Sus4,
        Quality::Diminished,
        Quality::Augmented,
    ];

    /// The chord-name suffix for this quality.
    pub fn as_str(self) -> &'static str {
        match self {
            Quality::Major => "maj",
            Quality::Minor => "min",
            Quality::Dominant7 => "7",
            Quality::Major7 => "maj7",
            Quality::Minor7 => "min7",
            Quality::Sus2 => "sus2",
            Quality::Sus4 => "sus4",
            Quality::Diminished => "dim",
            Quality::Augmented => "aug",
        }
    }

    /// Open shape rooted on the 6th string. Elements are fret offsets
    /// relative to the open root position; `-1` mutes the string.
    fn e_form_template(self) -> [i32; STRING_COUNT] {
        match self {
            Quality::Major => [0, 2, 2, 1, 0, 0],
            Quality::Minor => [0, 2, 2, 0, 0, 0],
            Quality::Dominant7 => [0, 2, 0, 1, 0, 0],
            Quality::Major7 => [0, 2, 1, 1, 0, 0],
            Quality::Minor7 => [0, 2, 0, 0, 0, 0],
            Quality::Sus2 => [0, 2, 2, 4, 0, 0],
            Quality::Sus4 => [0, 2, 2, 2, 0, 0],
            Quality::Diminished => [0, 1, 2, 0, 2, 0],
            Quality::Augmented => [0, 3, 2, 1, 1, 0],
        }
    }

    /// Open shape rooted on the 5th string.
    fn a_form_template(self) -> [i32; STRING_COUNT] {
        match self {
            Quality::Major => [-1, 0, 2, 2, 2, 0],
            Quality::Minor => [-1, 0, 2, 2, 1, 0],
            Quality::Dominant7 => [-1, 0, 2, 0, 2, 0],
            Quality::Major7 => [-1, 0, 2, 1, 2, 0],
            Quality::Minor7 => [-1, 0, 2, 0, 1, 0],
            Quality::Sus2 => [-1, 0, 2, 2, 0, 0],
            Quality::Sus4 => [-1, 0, 2, 2, 3, 0],
            Quality::Diminished => [-1, 0, 1, 2, 1, -1],
            Quality::Augmented => [-1, 0, 3, 2, 2, 1],
        }
    }
}

/// Shifts every played template element up by `root_fret`; muted strings
/// pass through unchanged.
fn transpose(template: [i32; STRING_COUNT], root_fret: i32) -> Vec<i32> {
    template
        .iter()
        .map(|&p| if p < 0 { MUTED } else { p + root_fret })
        .collect()
}

/// Derives the first visible fret for a set of positions.
///
/// Shapes at or near the nut (lowest fretted note on fret 4 or below, or no
/// fretted notes at all) show from the nut. Higher shapes shift the window
/// to one fret below the lowest fretted note for visual lead-in.
fn window_start(positions: &[i32]) -> i32 {
    match positions.iter().copied().filter(|&p| p > 0).min() {
        None => 1,
        Some(m) if m <= 4 => 1,
        Some(m) => m - 1,
    }
}

/// Builds the complete chord-shape table.
///
/// Pure and deterministic: every call produces an identical 108-entry map
/// keyed by `root + quality` (`"Cmaj"`, `"F#min7"`, ...), in chromatic root
/// order with qualities in declaration order.
pub fn build_chord_shapes() -> IndexMap<String, Fingering> {
    let mut shapes = IndexMap::new();

    for root in PitchClass::ALL {
        for quality in Quality::ALL {
            let (template, root_fret) = if root.prefers_a_form() {
                (quality.a_form_template(), root.a_string_fret())
            } else {
                (quality.e_form_template(), root.e_string_fret())
            };

            let positions = transpose(template, root_fret);
            let fret_start = window_start(&positions);
            let name = format!("{}{}", root.as_str(), quality.as_str());
            shapes.insert(name, Fingering::new(positions, fret_start));
        }
    }

    debug!(entries = shapes.len(); "Chord shape table built");
    shapes
}

/// Returns the process-wide chord-shape table, building it on first use.
///
/// The table is immutable once initialized, so concurrent render calls can
/// share it without locking.
pub fn chord_shapes() -> &'static IndexMap<String, Fingering> {
    static TABLE: OnceLock<IndexMap<String, Fingering>> = OnceLock::new();
    TABLE.get_or_init(build_chord_shapes)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_table_covers_every_root_and_quality() {
        let shapes = build_chord_shapes();
        assert_eq!(shapes.len(), 108);

        for root in PitchClass::ALL {
            for quality in Quality::ALL {
                let name = format!("{}{}", root.as_str(), quality.as_str());
                assert!(shapes.contains_key(&name), "missing entry for {name}");
            }
        }
    }

    #[test]
    fn test_every_entry_is_guitar_shaped() {
        for (name, fingering) in build_chord_shapes() {
            assert_eq!(
                fingering.positions().len(),
                STRING_COUNT,
                "{name} has wrong string count"
            );
            for &p in fingering.positions() {
                assert!(
                    p == -1 || (0..=24).contains(&p),
                    "{name} has out-of-range position {p}"
                );
            }
            assert!(fingering.fret_start() >= 1, "{name} has bad window start");
        }
    }

    #[test]
    fn test_a_form_transposition() {
        // C major: A-form template shifted up three frets.
        let shapes = build_chord_shapes();
        let c_major = &shapes["Cmaj"];
        assert_eq!(c_major.positions(), [-1, 3, 5, 5, 5, 3]);
        assert_eq!(c_major.fret_start(), 1);
    }

    #[test]
    fn test_e_form_transposition() {
        // F major: E-form template shifted up one fret.
        let shapes = build_chord_shapes();
        let f_major = &shapes["Fmaj"];
        assert_eq!(f_major.positions(), [1, 3, 3, 2, 1, 1]);
        assert_eq!(f_major.fret_start(), 1);

        // E major stays in the open position.
        let e_major = &shapes["Emaj"];
        assert_eq!(e_major.positions(), [0, 2, 2, 1, 0, 0]);
        assert_eq!(e_major.fret_start(), 1);
    }

    #[test]
    fn test_high_shapes_shift_the_window() {
        // D min7: A-form at fret 5, so the window starts one fret below.
        let shapes = build_chord_shapes();
        let d_min7 = &shapes["Dmin7"];
        assert_eq!(d_min7.positions(), [-1, 5, 7, 5, 6, 5]);
        assert_eq!(d_min7.fret_start(), 4);
    }

    #[test]
    fn test_muted_strings_survive_transposition() {
        let shapes = build_chord_shapes();
        // The A-form dim template mutes both outer strings.
        let c_dim = &shapes["Cdim"];
        assert_eq!(c_dim.positions()[0], -1);
        assert_eq!(c_dim.positions()[5], -1);
    }

    #[test]
    fn test_window_start_rules() {
        assert_eq!(window_start(&[-1, -1, 0, 0, 0, 0]), 1);
        assert_eq!(window_start(&[0, 2, 2, 1, 0, 0]), 1);
        assert_eq!(window_start(&[4, 6, 6, 5, 4, 4]), 1);
        assert_eq!(window_start(&[5, 7, 7, 6, 5, 5]), 4);
        assert_eq!(window_start(&[-1, 8, 10, 8, 9, 8]), 7);
    }

    #[test]
    fn test_cached_table_matches_fresh_build() {
        assert_eq!(chord_shapes(), &build_chord_shapes());
    }

    proptest! {
        #[test]
        fn prop_window_start_derivation(positions in proptest::collection::vec(-1i32..=24, 6)) {
            let start = window_start(&positions);
            match positions.iter().copied().filter(|&p| p > 0).min() {
                None => prop_assert_eq!(start, 1),
                Some(m) if m <= 4 => prop_assert_eq!(start, 1),
                Some(m) => prop_assert_eq!(start, m - 1),
            }
        }
    }
}

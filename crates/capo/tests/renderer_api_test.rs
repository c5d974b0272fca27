//! Integration tests for the ChordRenderer API
//!
//! These tests verify that the public API works and is usable.

use capo::{Barre, CapoError, ChordRenderer, Fingering, config::AppConfig};

#[test]
fn test_renderer_api_exists() {
    // Just verify the API compiles and can be constructed
    let _renderer = ChordRenderer::default();
}

#[test]
fn test_render_chord_from_table() {
    let renderer = ChordRenderer::default();
    let result = renderer.render_chord("Cmaj");
    assert!(
        result.is_ok(),
        "Should render a table chord: {:?}",
        result.err()
    );

    let svg = result.unwrap();
    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert!(svg.contains("Cmaj"), "Title should name the chord");
}

#[test]
fn test_render_explicit_fingering_with_barre() {
    let renderer = ChordRenderer::default();
    let fingering = Fingering::new(vec![2, 4, 4, 2, 2, 2], 1);
    let barres = [Barre::new(2, 6, 1)];

    let svg = renderer
        .render_diagram("F#min7", &fingering, &barres, 5)
        .expect("Failed to render explicit fingering");
    assert!(svg.contains("F#min7"));
}

#[test]
fn test_render_sheet_of_table_chords() {
    let renderer = ChordRenderer::default();
    let chords: Vec<String> = ["Cmaj", "Gmaj", "Amin", "Fmaj", "Dmin7"]
        .iter()
        .map(|name| name.to_string())
        .collect();

    let svg = renderer
        .render_sheet(&chords, 4)
        .expect("Failed to render sheet");
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Dmin7"));
}

#[test]
fn test_unknown_chords_are_listed() {
    let renderer = ChordRenderer::default();
    let chords: Vec<String> = ["Cmaj", "Hmaj", "Zsus9"]
        .iter()
        .map(|name| name.to_string())
        .collect();

    let err = renderer.render_sheet(&chords, 4).unwrap_err();
    match err {
        CapoError::UnknownChord { names } => {
            assert_eq!(names, ["Hmaj", "Zsus9"]);
        }
        other => panic!("Expected UnknownChord, got {other:?}"),
    }
}

#[test]
fn test_renderer_reusability_and_determinism() {
    let renderer = ChordRenderer::new(AppConfig::default());

    let first = renderer.render_chord("F#min7").expect("first render");
    let second = renderer.render_chord("F#min7").expect("second render");
    assert_eq!(first, second, "Identical inputs must render identically");

    let etag1 = capo::cache::etag_for(&first);
    let etag2 = capo::cache::etag_for(&second);
    assert_eq!(etag1, etag2);
}

#[test]
fn test_invalid_fingering_is_rejected() {
    let renderer = ChordRenderer::default();
    let five_strings = Fingering::new(vec![0, 2, 2, 1, 0], 1);

    let result = renderer.render_diagram("bad", &five_strings, &[], 5);
    assert!(matches!(
        result,
        Err(CapoError::InvalidDiagram { found: 5 })
    ));
}

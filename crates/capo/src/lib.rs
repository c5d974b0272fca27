//! Capo - guitar chord diagrams as SVG.
//!
//! Renders chord diagrams from symbolic fingerings (muted/open/fretted
//! strings, optional barres, a visible fret window), either one at a time
//! or as a grid sheet, and derives a full 12-root x 9-quality chord table
//! from two movable barre-chord templates.

pub mod cache;
pub mod config;
pub mod request;
pub mod shapes;

mod error;
mod export;

pub use capo_core::{color, fingering, geometry};

pub use error::CapoError;
pub use fingering::{Barre, Fingering};

use log::{debug, info};

use config::AppConfig;
use export::svg::SvgRenderer;

/// Renders chord diagrams and sheets according to an [`AppConfig`].
///
/// Rendering is pure and stateless per call; a renderer can be shared and
/// reused freely.
///
/// # Examples
///
/// ```
/// use capo::{ChordRenderer, config::AppConfig};
///
/// let renderer = ChordRenderer::new(AppConfig::default());
///
/// let svg = renderer.render_chord("Cmaj").expect("Failed to render");
/// assert!(svg.contains("<svg"));
///
/// let sheet = renderer
///     .render_sheet(&["Cmaj".into(), "Gmaj".into(), "Amin".into()], 2)
///     .expect("Failed to render sheet");
/// assert!(sheet.contains("</svg>"));
/// ```
#[derive(Default)]
pub struct ChordRenderer {
    config: AppConfig,
}

impl ChordRenderer {
    /// Creates a renderer with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Renders a single chord diagram from an explicit fingering.
    ///
    /// # Errors
    ///
    /// Returns [`CapoError::InvalidDiagram`] if the fingering does not have
    /// exactly six string positions, or [`CapoError::Config`] for an
    /// invalid style configuration.
    pub fn render_diagram(
        &self,
        name: &str,
        fingering: &Fingering,
        barres: &[Barre],
        frets_visible: u32,
    ) -> Result<String, CapoError> {
        info!(chord = name, frets_visible; "Rendering chord diagram");

        let renderer = SvgRenderer::new(self.config.style())?;
        let document = renderer.render_diagram(name, fingering, barres, frets_visible)?;

        debug!(chord = name; "Diagram rendered");
        Ok(document.to_string())
    }

    /// Renders a chord from the shape table by name.
    ///
    /// # Errors
    ///
    /// Returns [`CapoError::UnknownChord`] if the name is absent from the
    /// table.
    pub fn render_chord(&self, name: &str) -> Result<String, CapoError> {
        let fingering = shapes::chord_shapes()
            .get(name)
            .ok_or_else(|| CapoError::UnknownChord {
                names: vec![name.to_string()],
            })?;

        self.render_diagram(
            name,
            fingering,
            &[],
            self.config.diagram().frets_visible(),
        )
    }

    /// Renders a sheet of table chords on a row-major grid.
    ///
    /// # Errors
    ///
    /// Returns [`CapoError::UnknownChord`] listing every missing name,
    /// [`CapoError::EmptyInput`] for an empty list, and
    /// [`CapoError::InvalidLayout`] for a zero column count.
    pub fn render_sheet(&self, chords: &[String], columns: u32) -> Result<String, CapoError> {
        info!(chord_count = chords.len(), columns; "Rendering chord sheet");

        let table = shapes::chord_shapes();
        let missing: Vec<String> = chords
            .iter()
            .filter(|name| !table.contains_key(name.as_str()))
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(CapoError::UnknownChord { names: missing });
        }

        let entries: Vec<(&str, &Fingering)> = chords
            .iter()
            .map(|name| (name.as_str(), &table[name.as_str()]))
            .collect();

        let renderer = SvgRenderer::new(self.config.style())?;
        let document =
            renderer.render_sheet(&entries, columns, self.config.diagram().frets_visible())?;

        debug!(chord_count = chords.len(); "Sheet rendered");
        Ok(document.to_string())
    }
}

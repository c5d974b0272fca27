//! SVG rendering for chord diagrams and sheets.
//!
//! The renderer is a pure, deterministic transform: the draw order is fixed
//! (background, title, fret label, nut, fret lines, strings, open/mute
//! glyphs, barres, finger dots) and the [`svg`] crate serializes attributes
//! in sorted order, so identical inputs always produce byte-identical
//! markup.

use svg::Document;
use svg::node::element::{Circle, Group, Line, Rectangle, Text};

use capo_core::color::Color;
use capo_core::fingering::{Barre, Fingering, MUTED, OPEN, STRING_COUNT};
use capo_core::geometry::{DiagramMetrics, SheetGrid};

use crate::config::StyleConfig;
use crate::error::CapoError;

/// Renders fingerings to SVG documents.
#[derive(Debug)]
pub struct SvgRenderer {
    background: Color,
    ink: Color,
    font_family: String,
}

impl SvgRenderer {
    /// Creates a renderer from the given style configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CapoError::Config`] if the configured background color is
    /// not a valid CSS color string.
    pub fn new(style: &StyleConfig) -> Result<Self, CapoError> {
        let background = style
            .background_color()
            .map_err(CapoError::Config)?
            .unwrap_or_else(|| {
                // Falls back to the classic white chord-chart background.
                Color::new("white").unwrap_or_default()
            });

        Ok(Self {
            background,
            ink: Color::default(),
            font_family: style.font_family().to_string(),
        })
    }

    /// Renders a single chord diagram to an SVG document.
    ///
    /// # Errors
    ///
    /// Returns [`CapoError::InvalidDiagram`] when the fingering does not
    /// have exactly six string positions.
    pub fn render_diagram(
        &self,
        name: &str,
        fingering: &Fingering,
        barres: &[Barre],
        frets_visible: u32,
    ) -> Result<Document, CapoError> {
        let group = self.diagram_group(name, fingering, barres, frets_visible)?;

        Ok(Document::new()
            .set("width", DiagramMetrics::CANVAS_WIDTH)
            .set("height", DiagramMetrics::CANVAS_HEIGHT)
            .set(
                "viewBox",
                (
                    0.0,
                    0.0,
                    DiagramMetrics::CANVAS_WIDTH,
                    DiagramMetrics::CANVAS_HEIGHT,
                ),
            )
            .add(group))
    }

    /// Renders a sheet of chord diagrams on a row-major grid.
    ///
    /// Each entry is rendered independently through the single-diagram
    /// path and translated into its grid cell.
    ///
    /// # Errors
    ///
    /// Returns [`CapoError::EmptyInput`] for an empty entry list,
    /// [`CapoError::InvalidLayout`] for a zero column count, and
    /// propagates [`CapoError::InvalidDiagram`] from individual entries.
    pub fn render_sheet(
        &self,
        entries: &[(&str, &Fingering)],
        columns: u32,
        frets_visible: u32,
    ) -> Result<Document, CapoError> {
        if entries.is_empty() {
            return Err(CapoError::EmptyInput);
        }
        if columns == 0 {
            return Err(CapoError::InvalidLayout);
        }

        let grid = SheetGrid::new(columns, entries.len());
        let mut document = Document::new()
            .set("width", grid.width())
            .set("height", grid.height())
            .set("viewBox", (0.0, 0.0, grid.width(), grid.height()))
            .add(
                Rectangle::new()
                    .set("width", grid.width())
                    .set("height", grid.height())
                    .set("fill", &self.background)
                    .set("fill-opacity", self.background.alpha()),
            );

        for (index, (name, fingering)) in entries.iter().enumerate() {
            let (x, y) = grid.cell_origin(index);
            let cell = self
                .diagram_group(name, fingering, &[], frets_visible)?
                .set("transform", format!("translate({x},{y})"));
            document = document.add(cell);
        }

        Ok(document)
    }

    /// Builds the inner drawing group for one diagram, in fixed draw order.
    fn diagram_group(
        &self,
        name: &str,
        fingering: &Fingering,
        barres: &[Barre],
        frets_visible: u32,
    ) -> Result<Group, CapoError> {
        let positions = fingering.positions();
        if positions.len() != STRING_COUNT {
            return Err(CapoError::InvalidDiagram {
                found: positions.len(),
            });
        }

        let metrics = DiagramMetrics::new(frets_visible);
        let fret_start = fingering.fret_start();
        let grid_right = DiagramMetrics::MARGIN_LEFT + DiagramMetrics::GRID_WIDTH;

        // Background.
        let mut group = Group::new().add(
            Rectangle::new()
                .set("width", DiagramMetrics::CANVAS_WIDTH)
                .set("height", DiagramMetrics::CANVAS_HEIGHT)
                .set("fill", &self.background)
                .set("fill-opacity", self.background.alpha()),
        );

        // Title.
        group = group.add(
            Text::new(name)
                .set("x", DiagramMetrics::CANVAS_WIDTH / 2.0)
                .set("y", 32.0)
                .set("font-size", 20)
                .set("text-anchor", "middle")
                .set("font-family", self.font_family.as_str()),
        );

        // Position label for windows that do not start at the nut.
        if fret_start != 1 {
            group = group.add(
                Text::new(format!("fret {fret_start}"))
                    .set("x", grid_right + 18.0)
                    .set("y", DiagramMetrics::MARGIN_TOP + 14.0)
                    .set("font-size", 14)
                    .set("font-family", self.font_family.as_str()),
            );
        }

        // Nut: drawn thicker only when the window starts at the true top
        // of the neck.
        let nut_width = if fret_start == 1 { 6 } else { 2 };
        group = group.add(
            Line::new()
                .set("x1", DiagramMetrics::MARGIN_LEFT)
                .set("y1", DiagramMetrics::MARGIN_TOP)
                .set("x2", grid_right)
                .set("y2", DiagramMetrics::MARGIN_TOP)
                .set("stroke", &self.ink)
                .set("stroke-width", nut_width),
        );

        // Interior fret lines.
        for line in 1..=frets_visible {
            let y = metrics.fret_line_y(line);
            group = group.add(
                Line::new()
                    .set("x1", DiagramMetrics::MARGIN_LEFT)
                    .set("y1", y)
                    .set("x2", grid_right)
                    .set("y2", y)
                    .set("stroke", &self.ink)
                    .set("stroke-width", 2),
            );
        }

        // Strings.
        for string in 0..STRING_COUNT {
            let x = metrics.string_x(string as i32);
            group = group.add(
                Line::new()
                    .set("x1", x)
                    .set("y1", DiagramMetrics::MARGIN_TOP)
                    .set("x2", x)
                    .set("y2", DiagramMetrics::MARGIN_TOP + DiagramMetrics::GRID_HEIGHT)
                    .set("stroke", &self.ink)
                    .set("stroke-width", 2),
            );
        }

        // Open/mute glyphs above the nut; fretted strings get nothing.
        for (string, &position) in positions.iter().enumerate() {
            let glyph = match position {
                MUTED => "x",
                OPEN => "o",
                _ => continue,
            };
            group = group.add(
                Text::new(glyph)
                    .set("x", metrics.string_x(string as i32))
                    .set("y", DiagramMetrics::marker_y())
                    .set("font-size", 16)
                    .set("text-anchor", "middle")
                    .set("font-family", self.font_family.as_str()),
            );
        }

        // Barres: thick round-capped segments across the converted span.
        for barre in barres {
            let (from, to) = barre.span();
            group = group.add(
                Line::new()
                    .set("x1", metrics.string_x(from))
                    .set("y1", metrics.fret_center_y(barre.fret(), fret_start))
                    .set("x2", metrics.string_x(to))
                    .set("y2", metrics.fret_center_y(barre.fret(), fret_start))
                    .set("stroke", &self.ink)
                    .set("stroke-width", 10)
                    .set("stroke-linecap", "round"),
            );
        }

        // Finger dots, silently skipping frets outside the visible window.
        for (string, &position) in positions.iter().enumerate() {
            if position <= 0 || !metrics.contains_fret(position, fret_start) {
                continue;
            }
            group = group.add(
                Circle::new()
                    .set("cx", metrics.string_x(string as i32))
                    .set("cy", metrics.fret_center_y(position, fret_start))
                    .set("r", 10)
                    .set("fill", &self.ink),
            );
        }

        Ok(group)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use pretty_assertions::assert_eq;

    use super::*;

    fn renderer() -> SvgRenderer {
        SvgRenderer::new(&StyleConfig::default()).unwrap()
    }

    // Newlines are stripped so assertions do not depend on how the svg
    // crate breaks lines around child nodes.
    fn render(name: &str, fingering: &Fingering, barres: &[Barre]) -> String {
        renderer()
            .render_diagram(name, fingering, barres, 5)
            .unwrap()
            .to_string()
            .replace('\n', "")
    }

    #[test]
    fn test_open_c_shape_glyphs_and_dots() {
        let fingering = Fingering::new(vec![-1, 3, 2, 0, 1, 0], 1);
        let svg = render("C", &fingering, &[]);

        // Mute glyph over string 0, open glyphs over strings 3 and 5.
        assert!(svg.contains(r#"x="40""#) && svg.contains(">x<"));
        assert!(svg.contains(">o<"));
        assert!(svg.contains(r#"x="148""#));
        assert!(svg.contains(r#"x="220""#));

        // Dots on strings 1, 2, 4 at their fret rows.
        assert!(svg.contains(r#"cx="76""#) && svg.contains(r#"cy="170""#)); // fret 3
        assert!(svg.contains(r#"cx="112""#) && svg.contains(r#"cy="126""#)); // fret 2
        assert!(svg.contains(r#"cx="184""#) && svg.contains(r#"cy="82""#)); // fret 1

        // Starting at the nut: no position label, thick nut line.
        assert!(!svg.contains("fret 1<"));
        assert!(!svg.contains("fret "));
        assert!(svg.contains(r#"stroke-width="6""#));
    }

    #[test]
    fn test_windowed_diagram_gets_label_and_thin_nut() {
        let fingering = Fingering::new(vec![-1, 5, 7, 5, 6, 5], 4);
        let svg = render("Dmin7", &fingering, &[]);

        assert!(svg.contains(">fret 4<"));
        assert!(!svg.contains(r#"stroke-width="6""#));
    }

    #[test]
    fn test_out_of_window_positions_are_omitted_not_errors() {
        let fingering = Fingering::new(vec![-1, -1, 10, -1, -1, -1], 1);
        let svg = render("ghost", &fingering, &[]);

        // Fret 10 is outside [1, 6): no dot is drawn anywhere.
        assert!(!svg.contains("<circle"));
    }

    #[test]
    fn test_barre_spans_converted_string_indices() {
        let fingering = Fingering::new(vec![1, 1, -1, -1, -1, -1], 1);
        let barre = Barre::new(1, 6, 5);
        let svg = render("E5", &fingering, &[barre]);

        // Strings 6 and 5 map to indices 0 and 1: x from 40 to 76.
        assert!(svg.contains(r#"x1="40""#));
        assert!(svg.contains(r#"x2="76""#));
        assert!(svg.contains(r#"stroke-width="10""#));
        assert!(svg.contains(r#"stroke-linecap="round""#));
    }

    #[test]
    fn test_render_is_idempotent() {
        let fingering = Fingering::new(vec![0, 2, 2, 1, 0, 0], 1);
        let barres = [Barre::new(2, 5, 3)];
        let first = render("E", &fingering, &barres);
        let second = render("E", &fingering, &barres);
        assert_eq!(first, second);
    }

    #[test]
    fn test_wrong_string_count_is_rejected() {
        let fingering = Fingering::new(vec![0, 2, 2, 1, 0], 1);
        let err = renderer()
            .render_diagram("bad", &fingering, &[], 5)
            .unwrap_err();
        assert!(matches!(err, CapoError::InvalidDiagram { found: 5 }));
    }

    #[test]
    fn test_sheet_places_cells_row_major() {
        let shape = Fingering::new(vec![0, 2, 2, 1, 0, 0], 1);
        let entries: Vec<(&str, &Fingering)> = vec![
            ("one", &shape),
            ("two", &shape),
            ("three", &shape),
            ("four", &shape),
            ("five", &shape),
        ];
        let svg = renderer().render_sheet(&entries, 4, 5).unwrap().to_string();

        // Five chords over four columns: the fifth wraps to row 1, column 0.
        let grid = SheetGrid::new(4, 5);
        let (x, y) = grid.cell_origin(4);
        assert_approx_eq!(f32, x, SheetGrid::GAP_X);
        assert_approx_eq!(f32, y, SheetGrid::CELL_HEIGHT + 2.0 * SheetGrid::GAP_Y);

        // Every cell's transform carries its computed origin.
        for index in 0..entries.len() {
            let (x, y) = grid.cell_origin(index);
            assert!(svg.contains(&format!("translate({x},{y})")));
        }
        assert!(!svg.contains("translate(860,408)"));

        // Canvas sized to exactly fit 2 rows x 4 columns.
        assert!(svg.contains(r#"width="1140""#));
        assert!(svg.contains(r#"height="792""#));
    }

    #[test]
    fn test_dot_coordinates_follow_diagram_metrics() {
        let metrics = DiagramMetrics::new(5);
        let x = metrics.string_x(1);
        let y = metrics.fret_center_y(3, 1);
        assert_approx_eq!(f32, x, 76.0);
        assert_approx_eq!(f32, y, 170.0);

        let fingering = Fingering::new(vec![-1, 3, -1, -1, -1, -1], 1);
        let svg = render("frag", &fingering, &[]);
        assert!(svg.contains(&format!(r#"cx="{x}" cy="{y}""#)));
    }

    #[test]
    fn test_sheet_rejects_empty_input() {
        let err = renderer().render_sheet(&[], 4, 5).unwrap_err();
        assert!(matches!(err, CapoError::EmptyInput));
    }

    #[test]
    fn test_sheet_rejects_zero_columns() {
        let shape = Fingering::new(vec![0, 2, 2, 1, 0, 0], 1);
        let entries: Vec<(&str, &Fingering)> = vec![("one", &shape)];
        let err = renderer().render_sheet(&entries, 0, 5).unwrap_err();
        assert!(matches!(err, CapoError::InvalidLayout));
    }

    #[test]
    fn test_configured_background_color_is_used() {
        let style: StyleConfig =
            serde_json::from_str(r#"{"background_color": "ivory"}"#).unwrap();
        let renderer = SvgRenderer::new(&style).unwrap();
        let fingering = Fingering::new(vec![0, 0, 0, 0, 0, 0], 1);
        let svg = renderer
            .render_diagram("open", &fingering, &[], 5)
            .unwrap()
            .to_string();
        assert!(svg.contains(r#"fill="ivory""#));
    }

    #[test]
    fn test_invalid_background_color_fails_construction() {
        let style: StyleConfig =
            serde_json::from_str(r#"{"background_color": "chartreuse-ish"}"#).unwrap();
        let err = SvgRenderer::new(&style).unwrap_err();
        assert!(matches!(err, CapoError::Config(_)));
    }
}

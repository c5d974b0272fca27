//! Coordinate mapping for chord diagrams and sheet grids.
//!
//! All dimensions are fixed SVG user units. A single diagram occupies a
//! 260x360 canvas with the fret grid inset by fixed margins; a sheet places
//! diagrams of that size on a row-major grid with fixed gaps.

use crate::fingering::STRING_COUNT;

/// Derived measurements for a single chord diagram.
///
/// Everything except the number of visible fret rows is constant. String
/// spacing divides the grid width over the five gaps between six strings;
/// fret-row height divides the grid height over the visible rows.
///
/// # Examples
///
/// ```
/// use capo_core::geometry::DiagramMetrics;
///
/// let metrics = DiagramMetrics::new(5);
/// assert_eq!(DiagramMetrics::string_gap(), 36.0);
/// assert_eq!(metrics.fret_gap(), 44.0);
/// assert_eq!(metrics.string_x(0), 40.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DiagramMetrics {
    frets_visible: u32,
}

impl DiagramMetrics {
    /// Canvas width of one diagram.
    pub const CANVAS_WIDTH: f32 = 260.0;
    /// Canvas height of one diagram.
    pub const CANVAS_HEIGHT: f32 = 360.0;
    /// Distance from the canvas top to the nut line.
    pub const MARGIN_TOP: f32 = 60.0;
    /// Distance from the canvas left edge to the lowest string.
    pub const MARGIN_LEFT: f32 = 40.0;
    /// Width of the fret grid.
    pub const GRID_WIDTH: f32 = 180.0;
    /// Height of the fret grid.
    pub const GRID_HEIGHT: f32 = 220.0;

    /// Creates metrics for a diagram showing `frets_visible` fret rows.
    pub fn new(frets_visible: u32) -> Self {
        Self { frets_visible }
    }

    /// Returns the number of visible fret rows.
    pub fn frets_visible(&self) -> u32 {
        self.frets_visible
    }

    /// Horizontal distance between adjacent strings.
    pub fn string_gap() -> f32 {
        Self::GRID_WIDTH / (STRING_COUNT as f32 - 1.0)
    }

    /// Vertical height of one fret row.
    pub fn fret_gap(&self) -> f32 {
        Self::GRID_HEIGHT / self.frets_visible as f32
    }

    /// X coordinate of a string, indexed 0..6 from the lowest-pitch string.
    pub fn string_x(&self, string: i32) -> f32 {
        Self::MARGIN_LEFT + string as f32 * Self::string_gap()
    }

    /// Y coordinate of a fret grid line, 0-based from the top boundary
    /// (line 0 is the nut position).
    pub fn fret_line_y(&self, line: u32) -> f32 {
        Self::MARGIN_TOP + line as f32 * self.fret_gap()
    }

    /// Y coordinate of the center of an absolute fret's row, relative to
    /// the window starting at `fret_start`. Finger dots and barre segments
    /// sit at this height.
    pub fn fret_center_y(&self, fret: i32, fret_start: i32) -> f32 {
        Self::MARGIN_TOP + ((fret - fret_start) as f32 + 0.5) * self.fret_gap()
    }

    /// Returns true if an absolute fret lies inside the visible window
    /// `[fret_start, fret_start + frets_visible)`.
    pub fn contains_fret(&self, fret: i32, fret_start: i32) -> bool {
        fret >= fret_start && fret < fret_start + self.frets_visible as i32
    }

    /// Y coordinate of the open/mute glyph row above the nut.
    pub fn marker_y() -> f32 {
        Self::MARGIN_TOP - 18.0
    }
}

/// Row-major cell placement for a sheet of diagrams.
///
/// Cells are diagram-sized with fixed gaps between and around them; the
/// overall canvas grows to exactly fit the computed row and column count.
#[derive(Debug, Clone, Copy)]
pub struct SheetGrid {
    columns: u32,
    count: usize,
}

impl SheetGrid {
    /// Width of one sheet cell (one diagram canvas).
    pub const CELL_WIDTH: f32 = DiagramMetrics::CANVAS_WIDTH;
    /// Height of one sheet cell.
    pub const CELL_HEIGHT: f32 = DiagramMetrics::CANVAS_HEIGHT;
    /// Horizontal gap between cells and at the sheet edges.
    pub const GAP_X: f32 = 20.0;
    /// Vertical gap between cells and at the sheet edges.
    pub const GAP_Y: f32 = 24.0;

    /// Creates a grid placing `count` cells over `columns` columns.
    ///
    /// Callers must reject `columns == 0` before constructing a grid.
    pub fn new(columns: u32, count: usize) -> Self {
        Self { columns, count }
    }

    /// Number of rows needed to fit every cell.
    pub fn rows(&self) -> usize {
        self.count.div_ceil(self.columns as usize)
    }

    /// Total sheet canvas width.
    pub fn width(&self) -> f32 {
        self.columns as f32 * Self::CELL_WIDTH + (self.columns as f32 + 1.0) * Self::GAP_X
    }

    /// Total sheet canvas height.
    pub fn height(&self) -> f32 {
        let rows = self.rows() as f32;
        rows * Self::CELL_HEIGHT + (rows + 1.0) * Self::GAP_Y
    }

    /// Top-left corner of the cell at `index`, filling left-to-right then
    /// top-to-bottom.
    pub fn cell_origin(&self, index: usize) -> (f32, f32) {
        let row = index / self.columns as usize;
        let col = index % self.columns as usize;
        let x = Self::GAP_X + col as f32 * (Self::CELL_WIDTH + Self::GAP_X);
        let y = Self::GAP_Y + row as f32 * (Self::CELL_HEIGHT + Self::GAP_Y);
        (x, y)
    }
}

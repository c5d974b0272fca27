//! Command-line argument definitions for the Capo CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the render operation, control the
//! output path, configuration file selection, and logging verbosity.

use clap::{Parser, Subcommand};

/// Command-line arguments for the Capo chord diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The render operation to perform
    #[command(subcommand)]
    pub command: Command,

    /// Path to the output SVG file
    #[arg(short, long, global = true, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,
}

/// Render operations
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a single chord diagram
    Chord {
        /// Chord name; a shape-table key unless --positions is given
        name: String,

        /// Explicit CSV positions, e.g. "-1,3,2,0,1,0"
        #[arg(long)]
        positions: Option<String>,

        /// First visible fret (with --positions)
        #[arg(long, default_value_t = 1)]
        fret_start: i32,

        /// Visible fret rows (with --positions)
        #[arg(long)]
        frets_visible: Option<u32>,

        /// Instrument; only "guitar" is supported
        #[arg(long, default_value = "guitar")]
        instrument: String,
    },

    /// Render a sheet of shape-table chords on a grid
    Sheet {
        /// Chord names, placed row-major left to right
        #[arg(required = true)]
        chords: Vec<String>,

        /// Number of grid columns
        #[arg(long)]
        columns: Option<u32>,
    },

    /// Render from a JSON request document
    Request {
        /// Path to the JSON document
        input: String,

        /// Treat the document as a sheet request
        #[arg(long)]
        sheet: bool,
    },
}

//! CLI logic for the Capo chord diagram tool.
//!
//! This module contains the core CLI logic for the Capo chord diagram tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Command};

use std::fs;

use log::info;

use capo::{CapoError, ChordRenderer, Fingering, cache, request};

/// Run the Capo CLI application
///
/// This function renders the requested chord diagram or sheet and writes
/// the resulting SVG to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CapoError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Request parsing and validation errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), CapoError> {
    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;
    let renderer = ChordRenderer::new(app_config);

    let svg = match &args.command {
        Command::Chord {
            name,
            positions,
            fret_start,
            frets_visible,
            instrument,
        } => {
            request::ensure_supported_instrument(instrument)?;

            match positions {
                Some(csv) => {
                    let fingering = Fingering::new(request::parse_positions(csv)?, *fret_start);
                    let frets_visible = frets_visible
                        .unwrap_or_else(|| renderer.config().diagram().frets_visible());
                    renderer.render_diagram(name, &fingering, &[], frets_visible)?
                }
                None => renderer.render_chord(name)?,
            }
        }

        Command::Sheet { chords, columns } => {
            let columns = columns.unwrap_or_else(|| renderer.config().diagram().columns());
            renderer.render_sheet(chords, columns)?
        }

        Command::Request { input, sheet } => {
            info!(input_path = input; "Processing request document");
            let document = fs::read_to_string(input)?;

            if *sheet {
                let request = request::SheetRequest::from_json(&document)?;
                renderer.render_sheet(request.chords(), request.columns())?
            } else {
                let request = request::DiagramRequest::from_json(&document)?;
                renderer.render_diagram(
                    request.name(),
                    &request.fingering(),
                    request.barres(),
                    request.frets_visible(),
                )?
            }
        }
    };

    // Write output file
    fs::write(&args.output, &svg)?;

    info!(
        output_file = args.output,
        etag = cache::etag_for(&svg);
        "SVG exported successfully"
    );

    Ok(())
}

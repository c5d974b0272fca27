//! Adapts library errors into miette diagnostics for terminal reporting.

use miette::Diagnostic;

use capo::CapoError;

/// A renderable diagnostic carrying the error message and optional help.
#[derive(Debug)]
pub struct Reportable {
    message: String,
    help: Option<String>,
}

impl std::fmt::Display for Reportable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Reportable {}

impl Diagnostic for Reportable {
    fn help(&self) -> Option<Box<dyn std::fmt::Display + '_>> {
        self.help
            .as_ref()
            .map(|help| Box::new(help) as Box<dyn std::fmt::Display + '_>)
    }
}

/// Converts a [`CapoError`] into a [`Reportable`], attaching usage help
/// for the validation failures a user can act on.
pub fn to_reportable(err: &CapoError) -> Reportable {
    let help = match err {
        CapoError::UnknownChord { .. } => Some(
            "chord names combine a sharps-only root (C, C#, D, ...) with one of: \
             maj, min, 7, maj7, min7, sus2, sus4, dim, aug (e.g. `C#min7`)"
                .to_string(),
        ),
        CapoError::UnsupportedInstrument { .. } => {
            Some("only `guitar` diagrams are supported".to_string())
        }
        CapoError::InvalidPositions(_) | CapoError::InvalidDiagram { .. } => Some(
            "positions are six comma-separated integers: -1 mutes a string, \
             0 plays it open, positive values are fret numbers"
                .to_string(),
        ),
        _ => None,
    };

    Reportable {
        message: err.to_string(),
        help,
    }
}

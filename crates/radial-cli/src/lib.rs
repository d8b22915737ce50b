//! Radial CLI library
//!
//! This module contains the core CLI logic for the Radial diagram tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;
pub use error_adapter::{ErrorAdapter, Reportable, render_report, to_reportables};

use std::{fs, io, path::Path};

use log::{debug, error, info};

use radial::{DiagramBuilder, RadialError, composition, export::Format};

/// Run the Radial CLI application
///
/// This draws the tree described by the input file, or the built-in flow
/// diagram when no input is given, and writes it to the output file.
///
/// # Errors
///
/// Returns `RadialError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Tree description parse errors
/// - An unknown output format
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), RadialError> {
    info!(
        input_path:? = args.input,
        output_path = args.output;
        "Processing diagram"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    let output = Path::new(&args.output);
    let format = output_format(args.format.as_deref(), output)?;
    debug!(format = format.as_str(); "Output format selected");

    let builder = DiagramBuilder::new(app_config);

    // Read the tree description, or fall back to the built-in diagram
    let root = match &args.input {
        Some(input) => {
            let source = read_input(input)?;
            builder.parse(&source)?
        }
        None => {
            info!("No input given, drawing the built-in flow diagram");
            composition::flow_diagram()
        }
    };

    builder.render_to_file(&root, output, format)?;

    info!(output_file = args.output, format = format.as_str(); "Diagram exported successfully");

    Ok(())
}

/// Reads the tree description, naming the file in the error on failure.
fn read_input(input: &str) -> Result<String, RadialError> {
    fs::read_to_string(input).map_err(|err| {
        let message = format!("cannot read `{input}`: {err}");
        error!(input_path = input; "Failed to read tree description");
        RadialError::Io(io::Error::new(err.kind(), message))
    })
}

/// Resolves the output format from the explicit flag or the output extension.
fn output_format(explicit: Option<&str>, output: &Path) -> Result<Format, RadialError> {
    match explicit {
        Some(format) => format.parse().map_err(RadialError::Config),
        None => Ok(Format::from_path(output)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_prefers_flag() {
        let format = output_format(Some("trace"), Path::new("out.svg")).unwrap();
        assert_eq!(format, Format::Trace);
    }

    #[test]
    fn test_output_format_from_extension() {
        assert_eq!(output_format(None, Path::new("out.svg")).unwrap(), Format::Svg);
        assert_eq!(
            output_format(None, Path::new("flow_diagram.pdf")).unwrap(),
            Format::Pdf
        );
    }

    #[test]
    fn test_unreadable_input_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("missing_tree.toml");
        let input = input.to_string_lossy();

        let err = read_input(&input).unwrap_err();
        match &err {
            RadialError::Io(io_err) => assert_eq!(io_err.kind(), io::ErrorKind::NotFound),
            other => panic!("expected an I/O error, got {other:?}"),
        }
        assert!(err.to_string().contains("missing_tree.toml"));
    }

    #[test]
    fn test_unknown_format_flag() {
        let err = output_format(Some("png"), Path::new("out.png")).unwrap_err();
        assert!(matches!(err, RadialError::Config(_)));
    }
}

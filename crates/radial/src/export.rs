pub mod pdf;
pub mod svg;

use std::{fmt, path::Path, str::FromStr};

use log::debug;

use radial_core::draw::{DrawingSurface, RecordingSurface};

use crate::{config::AppConfig, error::RadialError};

use self::pdf::PdfSurface;
use self::svg::SvgSurface;

/// Output document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Pdf,
    Svg,
    /// Plain-text listing of the primitive calls, one per line.
    Trace,
}

impl Format {
    /// Infers the format from the extension of `path`.
    ///
    /// `.svg` selects SVG, `.trace` and `.txt` select the call listing, and
    /// anything else (including no extension) selects PDF.
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("svg") => Self::Svg,
            Some("trace" | "txt") => Self::Trace,
            _ => Self::Pdf,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Svg => "svg",
            Self::Trace => "trace",
        }
    }

    /// Creates an empty surface producing this format.
    ///
    /// # Errors
    ///
    /// Returns [`RadialError::Config`] when the configuration cannot describe
    /// a page, such as an invalid stroke color.
    pub fn surface(&self, config: &AppConfig) -> Result<Box<dyn DrawingSurface>, RadialError> {
        debug!(format = self.as_str(); "Creating drawing surface");
        let surface: Box<dyn DrawingSurface> = match self {
            Self::Pdf => Box::new(PdfSurface::from_config(config).map_err(RadialError::Config)?),
            Self::Svg => Box::new(SvgSurface::from_config(config).map_err(RadialError::Config)?),
            Self::Trace => Box::new(RecordingSurface::new()),
        };
        Ok(surface)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "svg" => Ok(Self::Svg),
            "trace" => Ok(Self::Trace),
            other => Err(format!(
                "unknown output format `{other}`, expected one of: pdf, svg, trace"
            )),
        }
    }
}

//! Output side of the CLI: renders descriptions to JSON and writes bytes to
//! stdout or a file.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use chart_ta::adapter::ChartSeriesDescription;
use chart_ta::controller::Renderer;
use chart_ta::export::{to_json, to_json_pretty};

use crate::error::{CliError, Result};

/// Output destination: either stdout or a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDest {
    /// Write to stdout.
    Stdout,
    /// Write to a file at the given path.
    File(String),
}

impl OutputDest {
    /// Destination for an optional `-o` argument.
    #[must_use]
    pub fn from_arg(path: Option<&str>) -> Self {
        path.map_or(Self::Stdout, |p| Self::File(p.to_string()))
    }

    /// Create a writer for this output destination.
    ///
    /// # Errors
    ///
    /// [`CliError::IoError`] if the file cannot be created.
    pub fn writer(&self) -> Result<Box<dyn Write>> {
        match self {
            Self::Stdout => Ok(Box::new(io::stdout())),
            Self::File(path) => {
                let file = File::create(path).map_err(|e| CliError::IoError {
                    source: e,
                    path: Some(path.clone()),
                })?;
                Ok(Box::new(BufWriter::new(file)))
            }
        }
    }

    /// Write `bytes` and flush.
    ///
    /// # Errors
    ///
    /// [`CliError::IoError`] on any write failure.
    pub fn write_all(&self, bytes: &[u8]) -> Result<()> {
        let mut writer = self.writer()?;
        writer.write_all(bytes)?;
        if !bytes.ends_with(b"\n") {
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Renders a description as its JSON text.
///
/// The CLI has no display surface, so the JSON document is the rendered
/// artifact.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonRenderer {
    pretty: bool,
}

impl JsonRenderer {
    /// Creates a renderer; `pretty` selects indented output.
    #[must_use]
    pub const fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Renderer for JsonRenderer {
    type Artifact = String;

    fn render(&mut self, description: &ChartSeriesDescription) -> chart_ta::Result<String> {
        if self.pretty {
            to_json_pretty(description)
        } else {
            to_json(description)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chart_ta::adapter::Modality;

    #[test]
    fn test_from_arg() {
        assert_eq!(OutputDest::from_arg(None), OutputDest::Stdout);
        assert_eq!(
            OutputDest::from_arg(Some("out.json")),
            OutputDest::File("out.json".to_string())
        );
    }

    #[test]
    fn test_json_renderer() {
        let desc = ChartSeriesDescription::no_data(Modality::Treemap);
        let compact = JsonRenderer::new(false).render(&desc).unwrap();
        let pretty = JsonRenderer::new(true).render(&desc).unwrap();
        assert!(!compact.contains('\n'));
        assert!(pretty.contains('\n'));
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&compact).unwrap(),
            serde_json::from_str::<serde_json::Value>(&pretty).unwrap()
        );
    }

    #[test]
    fn test_write_to_unwritable_path() {
        let dest = OutputDest::File("/nonexistent/dir/out.json".to_string());
        assert!(matches!(dest.write_all(b"{}"), Err(CliError::IoError { .. })));
    }
}

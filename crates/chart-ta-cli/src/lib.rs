//! chart-ta CLI library
//!
//! This module exposes the CLI components for testing and reuse. [`run`]
//! wires them together: the CSV file is the data source, a
//! [`ChartController`] shapes and renders it, and the output is either the
//! rendered JSON description or the CSV export of its data.

pub mod args;
pub mod csv_parser;
pub mod error;
pub mod output;

pub use error::{CliError, Result};

use chart_ta::controller::{ChartController, ExportFormat};
use chart_ta::export::DataExporter;

use crate::args::{load_options, Args, OutputFormat};
use crate::csv_parser::read_chart_data;
use crate::output::{JsonRenderer, OutputDest};

/// Execute one CLI invocation.
///
/// # Errors
///
/// Any argument, I/O, CSV, or chart error, wrapped in [`CliError`].
pub async fn run(args: &Args) -> Result<()> {
    let modality = args.modality()?;
    let overlays = args.overlay_configs()?;
    let options = load_options(args.options.as_deref())?;
    let data = read_chart_data(modality, &args.input)?;

    let mut chart = ChartController::new(
        modality,
        data,
        options,
        JsonRenderer::new(args.pretty),
        DataExporter::new(),
    )?;
    for config in overlays {
        if !chart.add_indicator(config)? {
            log::warn!("overlay {} given more than once", config.label());
        }
    }

    let bytes = match args.format {
        OutputFormat::Json => chart.artifact().clone().into_bytes(),
        OutputFormat::Csv => chart.export_chart(ExportFormat::Csv).await?,
    };

    let dest = OutputDest::from_arg(args.output.as_deref());
    dest.write_all(&bytes)?;
    if let OutputDest::File(path) = &dest {
        log::info!("wrote {} bytes to {path}", bytes.len());
    }
    Ok(())
}

//! Built-in data export.
//!
//! [`DataExporter`] is an [`ExportSink`] for the data side of a chart: it
//! writes a description's points as CSV. It does not rasterize, so image
//! formats are refused with [`Error::UnsupportedFormat`]. JSON output of a
//! whole description goes through [`to_json`] and [`to_json_pretty`].
//!
//! # CSV Layout
//!
//! One row per data point, with a fixed header:
//!
//! ```text
//! series,x,y,open,high,low,close,value,colorValue,name,parent
//! ```
//!
//! Columns a series kind does not use are left empty. Volume-profile bars
//! are written with their price category rather than their index.

use async_trait::async_trait;
use serde::Serialize;

use crate::adapter::{ChartSeriesDescription, Series, SeriesData};
use crate::controller::{ExportFormat, ExportSink, ExportSource};
use crate::error::{Error, Result};

const HEADER: [&str; 11] = [
    "series",
    "x",
    "y",
    "open",
    "high",
    "low",
    "close",
    "value",
    "colorValue",
    "name",
    "parent",
];

#[derive(Debug, Default, Serialize)]
struct CsvRow<'a> {
    series: &'a str,
    x: Option<f64>,
    y: Option<f64>,
    open: Option<f64>,
    high: Option<f64>,
    low: Option<f64>,
    close: Option<f64>,
    value: Option<f64>,
    color_value: Option<f64>,
    name: Option<&'a str>,
    parent: Option<&'a str>,
}

/// Export sink that writes chart data as CSV.
#[derive(Debug, Default, Clone, Copy)]
pub struct DataExporter;

impl DataExporter {
    /// Creates an exporter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Writes every point of `description` as CSV.
    ///
    /// The "no data" sentinel produces the header alone.
    ///
    /// # Errors
    ///
    /// [`Error::Serialization`] if the CSV writer fails.
    pub fn to_csv(&self, description: &ChartSeriesDescription) -> Result<Vec<u8>> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer.write_record(HEADER)?;

        let x_categories = description
            .axes
            .x
            .first()
            .map_or(&[][..], |axis| axis.categories.as_slice());

        for series in &description.series {
            for row in rows(series, x_categories) {
                writer.serialize(row)?;
            }
        }

        writer.into_inner().map_err(|err| Error::Serialization {
            message: err.to_string(),
        })
    }
}

#[async_trait]
impl<A: Sync> ExportSink<A> for DataExporter {
    async fn export(&self, source: ExportSource<'_, A>, format: ExportFormat) -> Result<Vec<u8>> {
        match (source, format) {
            (ExportSource::Data(description), ExportFormat::Csv) => self.to_csv(description),
            _ => Err(Error::UnsupportedFormat {
                format: format.to_string(),
            }),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn rows<'a>(
    series: &'a Series,
    x_categories: &'a [f64],
) -> Vec<CsvRow<'a>> {
    let name = series.name.as_str();
    let category = |categories: &[f64], i: usize| categories.get(i).copied().unwrap_or(i as f64);

    match &series.data {
        SeriesData::Ohlc(candles) => candles
            .iter()
            .map(|&(ts, open, high, low, close)| CsvRow {
                series: name,
                x: Some(ts as f64),
                open: Some(open),
                high: Some(high),
                low: Some(low),
                close: Some(close),
                ..CsvRow::default()
            })
            .collect(),
        SeriesData::Points(points) => points
            .iter()
            .map(|&(x, y)| CsvRow {
                series: name,
                x: Some(x),
                y: Some(y),
                ..CsvRow::default()
            })
            .collect(),
        SeriesData::Values(values) => values
            .iter()
            .enumerate()
            .map(|(i, &y)| CsvRow {
                series: name,
                x: Some(category(x_categories, i)),
                y: Some(y),
                ..CsvRow::default()
            })
            .collect(),
        SeriesData::Cells(cells) => cells
            .iter()
            .map(|&(x, y, value)| CsvRow {
                series: name,
                x: Some(x),
                y: Some(y),
                value: Some(value),
                ..CsvRow::default()
            })
            .collect(),
        SeriesData::Nodes(nodes) => nodes
            .iter()
            .map(|node| CsvRow {
                series: name,
                value: Some(node.value),
                color_value: Some(node.color_value),
                name: Some(node.name.as_str()),
                parent: node.parent.as_deref(),
                ..CsvRow::default()
            })
            .collect(),
    }
}

/// Serializes a description as compact JSON.
///
/// # Errors
///
/// [`Error::Serialization`] if encoding fails.
pub fn to_json(description: &ChartSeriesDescription) -> Result<String> {
    Ok(serde_json::to_string(description)?)
}

/// Serializes a description as indented JSON.
///
/// # Errors
///
/// [`Error::Serialization`] if encoding fails.
pub fn to_json_pretty(description: &ChartSeriesDescription) -> Result<String> {
    Ok(serde_json::to_string_pretty(description)?)
}

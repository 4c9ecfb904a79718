//! CSV parsing module: reads typed chart observations from CSV files.
//!
//! Each chart type reads its own row shape. Headers are matched
//! case-insensitively, with spaces treated as underscores:
//!
//! | Chart type | Columns |
//! |---|---|
//! | `candlestick` | `timestamp`, `open`, `high`, `low`, `close`, optional `volume` |
//! | `volume-profile` | `price`, `volume`, `buy_volume`, `sell_volume` |
//! | `heatmap` | `x`, `y`, `value`, optional `name` |
//! | `treemap` | `name`, `value`, optional `color_value`, optional `parent` |
//! | `rsi`, `macd` | a `close` column (or `price`, `adj close`, `adjusted close`, `value`) |
//!
//! Extra columns are ignored, so an OHLCV file works for the oscillators too.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chart_ta::adapter::{ChartData, Modality};
use chart_ta::types::{HeatmapCell, OhlcBar, TreemapNode, VolumeProfileLevel};
use csv::{ReaderBuilder, StringRecord};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{CliError, Result};

/// Column names accepted as the close price, in order of preference.
const CLOSE_COLUMNS: &[&str] = &["close", "price", "adj_close", "adjusted_close", "value"];

#[derive(Debug, Deserialize)]
struct BarRow {
    #[serde(alias = "time", alias = "date", alias = "datetime")]
    timestamp: i64,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    #[serde(default, alias = "vol")]
    volume: Option<f64>,
}

impl From<BarRow> for OhlcBar {
    fn from(row: BarRow) -> Self {
        Self {
            timestamp: row.timestamp,
            open: row.open,
            high: row.high,
            low: row.low,
            close: row.close,
            volume: row.volume,
        }
    }
}

#[derive(Debug, Deserialize)]
struct LevelRow {
    price: f64,
    volume: f64,
    #[serde(alias = "buyvolume", alias = "buy")]
    buy_volume: f64,
    #[serde(alias = "sellvolume", alias = "sell")]
    sell_volume: f64,
}

impl From<LevelRow> for VolumeProfileLevel {
    fn from(row: LevelRow) -> Self {
        Self {
            price: row.price,
            volume: row.volume,
            buy_volume: row.buy_volume,
            sell_volume: row.sell_volume,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CellRow {
    x: f64,
    y: f64,
    value: f64,
    #[serde(default)]
    name: Option<String>,
}

impl From<CellRow> for HeatmapCell {
    fn from(row: CellRow) -> Self {
        Self {
            x: row.x,
            y: row.y,
            value: row.value,
            name: row.name.filter(|n| !n.is_empty()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct NodeRow {
    name: String,
    value: f64,
    #[serde(default, alias = "colorvalue", alias = "color")]
    color_value: Option<f64>,
    #[serde(default)]
    parent: Option<String>,
}

impl From<NodeRow> for TreemapNode {
    fn from(row: NodeRow) -> Self {
        Self {
            name: row.name,
            value: row.value,
            color_value: row.color_value,
            parent: row.parent.filter(|p| !p.is_empty()),
        }
    }
}

/// Normalize a column header name for matching.
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase().replace(' ', "_")
}

/// Parse a string value to f64, treating empty as NaN.
fn parse_value(value: &str) -> Result<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Ok(f64::NAN)
    } else {
        trimmed.parse::<f64>().map_err(|_| CliError::CsvParseError {
            message: format!("cannot parse '{trimmed}' as number"),
            line: None,
        })
    }
}

/// Read the input file for `modality`.
///
/// # Errors
///
/// [`CliError::IoError`] if the file cannot be opened, otherwise as
/// [`read_chart_data_from_reader`].
pub fn read_chart_data<P: AsRef<Path>>(modality: Modality, path: P) -> Result<ChartData> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| CliError::IoError {
        source: e,
        path: Some(path.display().to_string()),
    })?;
    read_chart_data_from_reader(modality, BufReader::new(file))
}

/// Read observations for `modality` from any CSV source.
///
/// # Errors
///
/// [`CliError::CsvParseError`] for malformed CSV, missing columns, or
/// values that do not parse, with the offending line where known.
pub fn read_chart_data_from_reader<R: Read>(modality: Modality, reader: R) -> Result<ChartData> {
    let data = match modality {
        Modality::Candlestick => ChartData::Bars(read_rows::<BarRow, OhlcBar, _>(reader)?),
        Modality::VolumeProfile => {
            ChartData::VolumeProfile(read_rows::<LevelRow, VolumeProfileLevel, _>(reader)?)
        }
        Modality::Heatmap => ChartData::Heatmap(read_rows::<CellRow, HeatmapCell, _>(reader)?),
        Modality::Treemap => ChartData::Treemap(read_rows::<NodeRow, TreemapNode, _>(reader)?),
        Modality::Rsi | Modality::Macd => ChartData::Prices(read_close_prices(reader)?),
    };
    log::info!("read {} {modality} observations", data.len());
    Ok(data)
}

fn read_rows<Row, Out, R>(reader: R) -> Result<Vec<Out>>
where
    Row: DeserializeOwned + Into<Out>,
    R: Read,
{
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = normalized_headers(&mut csv_reader)?;

    let mut out = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        let row: Row = record.deserialize(Some(&headers))?;
        out.push(row.into());
    }
    Ok(out)
}

/// Read the close-price column of a CSV source.
///
/// # Errors
///
/// [`CliError::CsvParseError`] if no close column exists or a value does not
/// parse.
pub fn read_close_prices<R: Read>(reader: R) -> Result<Vec<f64>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers = normalized_headers(&mut csv_reader)?;

    let column = CLOSE_COLUMNS
        .iter()
        .find_map(|name| headers.iter().position(|h| h == *name))
        .ok_or_else(|| CliError::CsvParseError {
            message: "no close price column found (expected 'close', 'price', 'adj close' or 'value')"
                .to_string(),
            line: Some(1),
        })?;

    let mut prices = Vec::new();
    for (line_idx, result) in csv_reader.records().enumerate() {
        let record = result?;
        let value = parse_value(record.get(column).unwrap_or("")).map_err(|e| match e {
            CliError::CsvParseError { message, .. } => CliError::CsvParseError {
                message,
                line: Some(line_idx + 2), // +2 for header and 0-indexing
            },
            other => other,
        })?;
        prices.push(value);
    }
    Ok(prices)
}

fn normalized_headers<R: Read>(csv_reader: &mut csv::Reader<R>) -> Result<StringRecord> {
    let headers: StringRecord = csv_reader
        .headers()
        .map_err(|e| CliError::CsvParseError {
            message: e.to_string(),
            line: Some(1),
        })?
        .iter()
        .map(normalize_header)
        .collect();

    if headers.is_empty() {
        return Err(CliError::CsvParseError {
            message: "CSV file has no headers".to_string(),
            line: Some(1),
        });
    }
    Ok(headers)
}

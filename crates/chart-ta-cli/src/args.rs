//! CLI argument parsing module.
//!
//! The CLI follows the pattern:
//! `chart-ta <modality> <input.csv> [--options options.json] [--format json|csv] [-o out]`
//!
//! # Examples
//!
//! ```bash
//! # Candlestick description with two overlays, JSON to stdout
//! chart-ta candlestick bars.csv --overlay sma:20 --overlay bollinger:20:2
//!
//! # RSI chart data as CSV
//! chart-ta rsi closes.csv --format csv -o rsi.csv
//!
//! # Heatmap with options from a file
//! chart-ta heatmap correlations.csv --options dashboard.json --pretty
//! ```

use std::fs;

use chart_ta::adapter::{ChartOptions, Modality};
use chart_ta::indicators::{IndicatorConfig, IndicatorKind};
use clap::{Parser, ValueEnum};

use crate::error::{CliError, Result};

/// chart-ta: technical indicators and chart-data shaping
#[derive(Parser, Debug, Clone)]
#[command(name = "chart-ta")]
#[command(author, version, about = "Shape CSV market data into chart series descriptions")]
#[command(long_about = "chart-ta reads observations from a CSV file, shapes them for one \
    chart type (candlestick, volume-profile, heatmap, treemap, rsi, macd) and writes the \
    resulting series description as JSON, or its data points as CSV.")]
pub struct Args {
    /// Chart type: candlestick, volume-profile, heatmap, treemap, rsi, macd
    pub modality: String,

    /// Input CSV file
    pub input: String,

    /// JSON file with chart options (periods, thresholds, indicators, layout)
    #[arg(long)]
    pub options: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Overlay indicator for candlestick charts, e.g. sma:20, ema:50, bollinger:20:2
    #[arg(long = "overlay", value_name = "SPEC")]
    pub overlays: Vec<String>,

    /// Indent JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// What the CLI writes.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// The full chart series description.
    Json,
    /// One row per data point.
    Csv,
}

impl Args {
    /// Parse command-line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Resolve the modality argument.
    ///
    /// # Errors
    ///
    /// [`CliError::InvalidArgument`] listing the valid names.
    pub fn modality(&self) -> Result<Modality> {
        parse_modality(&self.modality)
    }

    /// Parse every `--overlay` flag.
    ///
    /// # Errors
    ///
    /// [`CliError::InvalidArgument`] for the first malformed flag.
    pub fn overlay_configs(&self) -> Result<Vec<IndicatorConfig>> {
        self.overlays.iter().map(|s| parse_overlay(s)).collect()
    }
}

/// Parse a modality name.
///
/// # Errors
///
/// [`CliError::InvalidArgument`] if the name is not a supported chart type.
pub fn parse_modality(name: &str) -> Result<Modality> {
    name.parse::<Modality>()
        .map_err(|err| CliError::InvalidArgument {
            argument: "modality".to_string(),
            reason: err.to_string(),
            suggestion: Some(format!(
                "Use one of: {}",
                Modality::ALL.map(Modality::as_str).join(", ")
            )),
        })
}

/// Parse an overlay flag of the form `kind:period[:multiplier]`.
///
/// `sma:20`, `ema:50`, `bollinger:20` (multiplier 2) and `bollinger:20:2.5`
/// are accepted; `bb` is an alias for `bollinger`.
///
/// # Errors
///
/// [`CliError::InvalidArgument`] for unknown kinds, non-overlay kinds,
/// missing or zero periods, malformed numbers, and multipliers that are not
/// positive and finite.
pub fn parse_overlay(spec: &str) -> Result<IndicatorConfig> {
    let invalid = |reason: String| CliError::InvalidArgument {
        argument: "overlay".to_string(),
        reason,
        suggestion: Some("Use sma:20, ema:50 or bollinger:20:2".to_string()),
    };

    let parts: Vec<&str> = spec.split(':').map(str::trim).collect();
    let kind = parts[0]
        .parse::<IndicatorKind>()
        .map_err(|err| invalid(err.to_string()))?;

    let period_part = parts
        .get(1)
        .ok_or_else(|| invalid(format!("'{spec}' has no period")))?;
    let period = period_part
        .parse::<usize>()
        .map_err(|_| invalid(format!("cannot parse '{period_part}' as integer")))?;
    if period == 0 {
        return Err(invalid("period must be positive".to_string()));
    }

    let max_parts = if kind == IndicatorKind::Bollinger { 3 } else { 2 };
    if parts.len() > max_parts {
        return Err(invalid(format!("too many parameters in '{spec}'")));
    }

    match kind {
        IndicatorKind::Sma => Ok(IndicatorConfig::Sma { period }),
        IndicatorKind::Ema => Ok(IndicatorConfig::Ema { period }),
        IndicatorKind::Bollinger => {
            let multiplier = match parts.get(2) {
                Some(m) => m
                    .parse::<f64>()
                    .map_err(|_| invalid(format!("cannot parse '{m}' as number")))?,
                None => 2.0,
            };
            if !multiplier.is_finite() || multiplier <= 0.0 {
                return Err(invalid("multiplier must be a positive finite number".to_string()));
            }
            Ok(IndicatorConfig::Bollinger { period, multiplier })
        }
        IndicatorKind::Rsi | IndicatorKind::Macd => Err(invalid(format!(
            "{kind} is drawn as its own chart, not as an overlay"
        ))),
    }
}

/// Load chart options from an optional JSON file.
///
/// Missing fields keep their defaults.
///
/// # Errors
///
/// [`CliError::IoError`] if the file cannot be read,
/// [`CliError::InvalidArgument`] if it is not valid options JSON.
pub fn load_options(path: Option<&str>) -> Result<ChartOptions> {
    let Some(path) = path else {
        return Ok(ChartOptions::default());
    };
    let text = fs::read_to_string(path).map_err(|e| CliError::IoError {
        source: e,
        path: Some(path.to_string()),
    })?;
    serde_json::from_str(&text).map_err(|e| CliError::InvalidArgument {
        argument: "options".to_string(),
        reason: format!("'{path}' is not valid chart options: {e}"),
        suggestion: Some(
            r#"Example: {"rsiPeriod": 14, "indicators": [{"kind": "sma", "period": 20}]}"#
                .to_string(),
        ),
    })
}

//! Indicator kinds, configurations, and labelled output series.
//!
//! [`IndicatorConfig`] is the serializable description of "which indicator
//! with which parameters" that charts and controllers pass around.
//! [`IndicatorConfig::compute`] runs it on a price series and returns one
//! [`IndicatorSeries`] per output line, each tagged with the input index it
//! starts at so callers can align it with timestamps.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::indicators::{
    bollinger::{bollinger, bollinger_offset},
    ema::ema,
    macd::macd,
    rsi::{rsi, rsi_offset},
    sma::{sma, sma_offset},
};

/// The closed set of indicators the engine computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorKind {
    /// Simple Moving Average.
    Sma,
    /// Exponential Moving Average.
    Ema,
    /// Bollinger Bands.
    Bollinger,
    /// Relative Strength Index.
    Rsi,
    /// Moving Average Convergence Divergence.
    Macd,
}

impl IndicatorKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 5] = [Self::Sma, Self::Ema, Self::Bollinger, Self::Rsi, Self::Macd];

    /// Returns the lowercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sma => "sma",
            Self::Ema => "ema",
            Self::Bollinger => "bollinger",
            Self::Rsi => "rsi",
            Self::Macd => "macd",
        }
    }

    /// Returns true for indicators drawn on the price axis itself.
    #[must_use]
    pub const fn is_overlay(self) -> bool {
        matches!(self, Self::Sma | Self::Ema | Self::Bollinger)
    }
}

impl fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndicatorKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sma" => Ok(Self::Sma),
            "ema" => Ok(Self::Ema),
            "bollinger" | "bb" => Ok(Self::Bollinger),
            "rsi" => Ok(Self::Rsi),
            "macd" => Ok(Self::Macd),
            _ => Err(Error::UnknownIndicator {
                name: s.to_string(),
            }),
        }
    }
}

fn default_multiplier() -> f64 {
    2.0
}

/// One indicator with its parameters.
///
/// Serialized with an internal `kind` tag:
///
/// ```
/// use chart_ta::indicators::IndicatorConfig;
///
/// let config: IndicatorConfig = serde_json::from_str(r#"{"kind":"bollinger","period":20}"#).unwrap();
/// assert_eq!(config, IndicatorConfig::Bollinger { period: 20, multiplier: 2.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum IndicatorConfig {
    /// Simple Moving Average over `period` values.
    Sma {
        /// Window length.
        period: usize,
    },
    /// Exponential Moving Average with `k = 2 / (period + 1)`.
    Ema {
        /// Smoothing period.
        period: usize,
    },
    /// Bollinger Bands.
    Bollinger {
        /// Window length.
        period: usize,
        /// Band width in population standard deviations.
        #[serde(default = "default_multiplier")]
        multiplier: f64,
    },
    /// Relative Strength Index.
    Rsi {
        /// Wilder smoothing period.
        period: usize,
    },
    /// Moving Average Convergence Divergence.
    Macd {
        /// Fast EMA period.
        fast: usize,
        /// Slow EMA period.
        slow: usize,
        /// Signal EMA period.
        signal: usize,
    },
}

impl IndicatorConfig {
    /// Returns the kind of indicator this configures.
    #[must_use]
    pub const fn kind(&self) -> IndicatorKind {
        match self {
            Self::Sma { .. } => IndicatorKind::Sma,
            Self::Ema { .. } => IndicatorKind::Ema,
            Self::Bollinger { .. } => IndicatorKind::Bollinger,
            Self::Rsi { .. } => IndicatorKind::Rsi,
            Self::Macd { .. } => IndicatorKind::Macd,
        }
    }

    /// Returns the governing period (the slow period for MACD).
    #[must_use]
    pub const fn period(&self) -> usize {
        match *self {
            Self::Sma { period }
            | Self::Ema { period }
            | Self::Bollinger { period, .. }
            | Self::Rsi { period } => period,
            Self::Macd { slow, .. } => slow,
        }
    }

    /// Returns a short human-readable label, e.g. `SMA(20)`.
    #[must_use]
    pub fn label(&self) -> String {
        match *self {
            Self::Sma { period } => format!("SMA({period})"),
            Self::Ema { period } => format!("EMA({period})"),
            Self::Bollinger { period, multiplier } => format!("BB({period}, {multiplier})"),
            Self::Rsi { period } => format!("RSI({period})"),
            Self::Macd { fast, slow, signal } => format!("MACD({fast}, {slow}, {signal})"),
        }
    }

    /// Runs the indicator on `data`.
    ///
    /// Returns one series for SMA, EMA and RSI, and three for Bollinger
    /// (upper, middle, lower) and MACD (macd, signal, histogram). Series are
    /// never dropped for short input; they come back with empty `values`.
    #[must_use]
    pub fn compute(&self, data: &[f64]) -> Vec<IndicatorSeries> {
        let kind = self.kind();
        let period = self.period();
        let label = self.label();
        let line = |name: &str, offset: usize, values: Vec<f64>| IndicatorSeries {
            kind,
            period,
            label: if name.is_empty() {
                label.clone()
            } else {
                format!("{label} {name}")
            },
            offset,
            values,
        };

        match *self {
            Self::Sma { period } => vec![line("", sma_offset(period), sma(data, period))],
            Self::Ema { period } => vec![line("", 0, ema(data, period))],
            Self::Bollinger { period, multiplier } => {
                let bands = bollinger(data, period, multiplier);
                let offset = bollinger_offset(period);
                vec![
                    line("upper", offset, bands.upper),
                    line("middle", offset, bands.middle),
                    line("lower", offset, bands.lower),
                ]
            }
            Self::Rsi { period } => vec![line("", rsi_offset(period), rsi(data, period))],
            Self::Macd { fast, slow, signal } => {
                let out = macd(data, fast, slow, signal);
                vec![
                    line("line", 0, out.macd_line),
                    line("signal", 0, out.signal_line),
                    line("histogram", 0, out.histogram),
                ]
            }
        }
    }
}

/// Output of one indicator computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSeries {
    /// Which indicator produced the values.
    pub kind: IndicatorKind,
    /// The governing period.
    pub period: usize,
    /// Display label, e.g. `BB(20, 2) upper`.
    pub label: String,
    /// Input index that `values[0]` aligns with.
    pub offset: usize,
    /// The computed values.
    pub values: Vec<f64>,
}

impl IndicatorSeries {
    /// Pairs each value with the input index it aligns with.
    pub fn indexed(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(move |(j, &value)| (self.offset + j, value))
    }
}

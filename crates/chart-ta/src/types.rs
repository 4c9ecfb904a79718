//! Raw market observations consumed by the chart adapter.
//!
//! These are plain value types. The adapter shapes them without validation;
//! callers that want the OHLC invariants checked up front can run
//! [`validate_bars`] first.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One period's open/high/low/close and optional volume.
///
/// Invariants (checked only by [`validate_bars`]):
/// `low <= open, close <= high`, and timestamps strictly increase across a
/// series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OhlcBar {
    /// Period start, milliseconds since the Unix epoch.
    pub timestamp: i64,
    /// Opening price.
    pub open: f64,
    /// Highest price.
    pub high: f64,
    /// Lowest price.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

impl OhlcBar {
    /// Creates a bar without volume.
    #[must_use]
    pub const fn new(timestamp: i64, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume: None,
        }
    }

    /// Attaches a volume to the bar.
    #[must_use]
    pub const fn with_volume(mut self, volume: f64) -> Self {
        self.volume = Some(volume);
        self
    }
}

/// Extracts the closing prices of a bar series.
#[must_use]
pub fn closes(bars: &[OhlcBar]) -> Vec<f64> {
    bars.iter().map(|bar| bar.close).collect()
}

/// Checks the price-range and timestamp-ordering invariants of a bar series.
///
/// # Errors
///
/// Returns [`Error::InvalidBar`] for the first bar that has `high < low`,
/// an open or close outside `[low, high]`, or a timestamp not strictly
/// greater than its predecessor's.
pub fn validate_bars(bars: &[OhlcBar]) -> Result<()> {
    let mut prev_timestamp: Option<i64> = None;
    for (index, bar) in bars.iter().enumerate() {
        if bar.high < bar.low {
            return Err(Error::InvalidBar {
                index,
                reason: "high is below low",
            });
        }
        if bar.open < bar.low || bar.open > bar.high {
            return Err(Error::InvalidBar {
                index,
                reason: "open is outside the low-high range",
            });
        }
        if bar.close < bar.low || bar.close > bar.high {
            return Err(Error::InvalidBar {
                index,
                reason: "close is outside the low-high range",
            });
        }
        if prev_timestamp.is_some_and(|prev| bar.timestamp <= prev) {
            return Err(Error::InvalidBar {
                index,
                reason: "timestamp does not increase",
            });
        }
        prev_timestamp = Some(bar.timestamp);
    }
    Ok(())
}

/// One (x, y) correlation sample.
///
/// Coordinates need not be unique across a heatmap's cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapCell {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
    /// Sample value, mapped onto the color scale.
    pub value: f64,
    /// Optional display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// One portfolio or allocation leaf.
///
/// Values are expected to be non-negative and pre-aggregated; neither is
/// checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreemapNode {
    /// Node name, also its identifier for `parent` references.
    pub name: String,
    /// Area weight.
    pub value: f64,
    /// Color intensity; the adapter falls back to `value` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_value: Option<f64>,
    /// Name of the parent node, if nested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

/// Buy and sell volume traded at one price level.
///
/// `buy_volume + sell_volume` is not cross-checked against `volume`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeProfileLevel {
    /// The price level.
    pub price: f64,
    /// Total volume at the level.
    pub volume: f64,
    /// Volume of buyer-initiated trades.
    pub buy_volume: f64,
    /// Volume of seller-initiated trades.
    pub sell_volume: f64,
}

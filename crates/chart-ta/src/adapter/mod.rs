//! Chart data adapter.
//!
//! Maps typed market observations plus a requested [`Modality`] to a
//! renderer-agnostic [`ChartSeriesDescription`]. Dispatch is an exhaustive
//! `match` over the closed modality set, one pure shaping function per case.
//!
//! # Shapes per Modality
//!
//! | Modality | Input | y axes | Series |
//! |---|---|---|---|
//! | `candlestick` | bars | price (+ volume pane) | candles, volume columns if any bar has volume, overlay lines |
//! | `volume-profile` | levels | volume | buy bars (positive), sell bars (negated) over a reversed price category axis |
//! | `heatmap` | cells | y categories | one series of `(x, y, value)` cells, plus a color scale |
//! | `treemap` | nodes | none | one series of nodes, `color_value` defaulting to `value` |
//! | `rsi` | prices | 0..100 with 70/30 lines | one RSI line |
//! | `macd` | prices | line pane + histogram pane | MACD line, signal line, histogram columns |
//!
//! # Contracts
//!
//! - Empty input yields [`ChartSeriesDescription::no_data`], never an error.
//! - Input of the wrong kind for the modality is a programmer error
//!   ([`Error::InputMismatch`]).
//! - The adapter is referentially transparent: the same request always
//!   produces an equal description.
//!
//! # Example
//!
//! ```
//! use chart_ta::adapter::{adapt, ChartData, ChartOptions, Modality};
//!
//! let prices: Vec<f64> = (0..40).map(|i| 100.0 + (i as f64 * 0.3).sin()).collect();
//! let desc = adapt(Modality::Rsi, &ChartData::Prices(prices), &ChartOptions::default()).unwrap();
//!
//! assert_eq!(desc.series.len(), 1);
//! assert_eq!(desc.axes.y[0].plot_lines.len(), 2);
//! ```

pub mod candlestick;
pub mod description;
pub mod heatmap;
pub mod oscillator;
pub mod treemap;
pub mod volume_profile;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::indicators::{IndicatorConfig, IndicatorKind};
use crate::types::{HeatmapCell, OhlcBar, TreemapNode, VolumeProfileLevel};

pub use description::{
    Axes, Axis, AxisKind, ChartSeriesDescription, ColorScale, PlotLine, Series, SeriesData,
    SeriesKind, TreemapPoint,
};

/// The closed set of chart types the adapter shapes data for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Modality {
    /// OHLC candles with optional volume pane and overlays.
    Candlestick,
    /// Buy/sell volume per price level.
    VolumeProfile,
    /// Color-mapped (x, y) grid.
    Heatmap,
    /// Nested allocation rectangles.
    Treemap,
    /// Relative Strength Index oscillator.
    Rsi,
    /// MACD oscillator.
    Macd,
}

impl Modality {
    /// All modalities, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Candlestick,
        Self::VolumeProfile,
        Self::Heatmap,
        Self::Treemap,
        Self::Rsi,
        Self::Macd,
    ];

    /// Returns the wire name, e.g. `volume-profile`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Candlestick => "candlestick",
            Self::VolumeProfile => "volume-profile",
            Self::Heatmap => "heatmap",
            Self::Treemap => "treemap",
            Self::Rsi => "rsi",
            Self::Macd => "macd",
        }
    }

    /// Returns true if indicators of `kind` can be drawn on this modality.
    ///
    /// Only candlestick charts take indicators, and only those drawn on the
    /// price axis.
    #[must_use]
    pub const fn supports(self, kind: IndicatorKind) -> bool {
        matches!(self, Self::Candlestick) && kind.is_overlay()
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Modality {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == name || (name == "volume_profile" && *m == Self::VolumeProfile))
            .ok_or_else(|| Error::UnknownModality {
                name: s.to_string(),
            })
    }
}

/// Typed input for one adapter invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "kebab-case")]
pub enum ChartData {
    /// OHLC bars for `candlestick`.
    Bars(Vec<OhlcBar>),
    /// Price levels for `volume-profile`.
    VolumeProfile(Vec<VolumeProfileLevel>),
    /// Cells for `heatmap`.
    Heatmap(Vec<HeatmapCell>),
    /// Nodes for `treemap`.
    Treemap(Vec<TreemapNode>),
    /// A flat price series for `rsi` and `macd`.
    Prices(Vec<f64>),
}

impl Default for ChartData {
    /// An empty price series; stands in for "no data supplied yet".
    fn default() -> Self {
        Self::Prices(Vec::new())
    }
}

impl ChartData {
    /// Returns the number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Bars(bars) => bars.len(),
            Self::VolumeProfile(levels) => levels.len(),
            Self::Heatmap(cells) => cells.len(),
            Self::Treemap(nodes) => nodes.len(),
            Self::Prices(prices) => prices.len(),
        }
    }

    /// Returns true if there are no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Describes the kind of input, for error messages.
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Bars(_) => "OHLC bar",
            Self::VolumeProfile(_) => "volume profile",
            Self::Heatmap(_) => "heatmap cell",
            Self::Treemap(_) => "treemap node",
            Self::Prices(_) => "price series",
        }
    }
}

/// Vertical split between a main pane and a lower pane.
///
/// Used by the candlestick volume pane and the MACD histogram pane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaneLayout {
    /// Height of the main pane, in percent.
    pub main_height: f64,
    /// Offset of the lower pane from the top, in percent.
    pub lower_top: f64,
    /// Height of the lower pane, in percent.
    pub lower_height: f64,
}

impl Default for PaneLayout {
    /// The 70/25 split with a 5% gap.
    fn default() -> Self {
        Self {
            main_height: 70.0,
            lower_top: 75.0,
            lower_height: 25.0,
        }
    }
}

/// Adapter configuration.
///
/// Deserializable with every field optional, so a partial JSON document
/// overrides only what it names:
///
/// ```
/// use chart_ta::adapter::ChartOptions;
///
/// let options: ChartOptions = serde_json::from_str(r#"{"rsiPeriod": 7}"#).unwrap();
/// assert_eq!(options.rsi_period, 7);
/// assert_eq!(options.macd_slow, 26);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartOptions {
    /// RSI smoothing period for the `rsi` modality.
    pub rsi_period: usize,
    /// Fast EMA period for the `macd` modality.
    pub macd_fast: usize,
    /// Slow EMA period for the `macd` modality.
    pub macd_slow: usize,
    /// Signal EMA period for the `macd` modality.
    pub macd_signal: usize,
    /// Upper RSI reference line.
    pub overbought: f64,
    /// Lower RSI reference line.
    pub oversold: f64,
    /// Indicators drawn over the price series.
    pub indicators: Vec<IndicatorConfig>,
    /// Pane split for dual-axis layouts.
    pub layout: PaneLayout,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            overbought: 70.0,
            oversold: 30.0,
            indicators: Vec::new(),
            layout: PaneLayout::default(),
        }
    }
}

impl ChartOptions {
    /// Creates options with the standard defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the RSI period.
    #[must_use]
    pub fn rsi_period(mut self, period: usize) -> Self {
        self.rsi_period = period;
        self
    }

    /// Sets the MACD periods.
    #[must_use]
    pub fn macd(mut self, fast: usize, slow: usize, signal: usize) -> Self {
        self.macd_fast = fast;
        self.macd_slow = slow;
        self.macd_signal = signal;
        self
    }

    /// Sets the RSI reference lines.
    #[must_use]
    pub fn thresholds(mut self, overbought: f64, oversold: f64) -> Self {
        self.overbought = overbought;
        self.oversold = oversold;
        self
    }

    /// Adds an indicator.
    #[must_use]
    pub fn indicator(mut self, config: IndicatorConfig) -> Self {
        self.indicators.push(config);
        self
    }

    /// Sets the pane split.
    #[must_use]
    pub fn layout(mut self, layout: PaneLayout) -> Self {
        self.layout = layout;
        self
    }
}

/// Shapes `data` for `modality`.
///
/// # Errors
///
/// - [`Error::UnsupportedIndicator`] if `options` lists an indicator the
///   modality cannot draw
/// - [`Error::InputMismatch`] if non-empty `data` is not the input kind the
///   modality consumes
///
/// Empty data of any kind yields the "no data" sentinel.
pub fn adapt(
    modality: Modality,
    data: &ChartData,
    options: &ChartOptions,
) -> Result<ChartSeriesDescription> {
    if let Some(config) = options
        .indicators
        .iter()
        .find(|config| !modality.supports(config.kind()))
    {
        return Err(Error::UnsupportedIndicator {
            kind: config.kind(),
            modality,
        });
    }

    if data.is_empty() {
        log::debug!("{modality}: no data, returning sentinel");
        return Ok(ChartSeriesDescription::no_data(modality));
    }

    let description = match (modality, data) {
        (Modality::Candlestick, ChartData::Bars(bars)) => candlestick::shape(bars, options),
        (Modality::VolumeProfile, ChartData::VolumeProfile(levels)) => {
            volume_profile::shape(levels)
        }
        (Modality::Heatmap, ChartData::Heatmap(cells)) => heatmap::shape(cells),
        (Modality::Treemap, ChartData::Treemap(nodes)) => treemap::shape(nodes),
        (Modality::Rsi, ChartData::Prices(prices)) => oscillator::shape_rsi(prices, options),
        (Modality::Macd, ChartData::Prices(prices)) => oscillator::shape_macd(prices, options),
        (modality, data) => {
            return Err(Error::InputMismatch {
                modality,
                found: data.describe(),
            })
        }
    };

    log::debug!(
        "{modality}: shaped {} observations into {} series",
        data.len(),
        description.series.len()
    );
    Ok(description)
}

/// Shapes `data` for the modality named `modality`.
///
/// # Errors
///
/// [`Error::UnknownModality`] if the name is not one of the supported
/// modalities, otherwise as [`adapt`].
pub fn adapt_named(
    modality: &str,
    data: &ChartData,
    options: &ChartOptions,
) -> Result<ChartSeriesDescription> {
    adapt(modality.parse()?, data, options)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;

    #[test]
    fn test_modality_names() {
        for modality in Modality::ALL {
            assert_eq!(modality.as_str().parse::<Modality>().unwrap(), modality);
            assert_eq!(modality.to_string(), modality.as_str());
        }
        assert_eq!(
            "Volume_Profile".parse::<Modality>().unwrap(),
            Modality::VolumeProfile
        );
    }

    #[test]
    fn test_unknown_modality_fails_fast() {
        let err = adapt_named("pie", &ChartData::default(), &ChartOptions::default()).unwrap_err();
        assert_eq!(
            err,
            Error::UnknownModality {
                name: "pie".to_string()
            }
        );
    }

    #[test]
    fn test_empty_candlestick_is_sentinel() {
        let desc = adapt(
            Modality::Candlestick,
            &ChartData::Bars(Vec::new()),
            &ChartOptions::default(),
        )
        .unwrap();
        assert!(desc.is_no_data());
        assert_eq!(desc.modality, Modality::Candlestick);
    }

    #[test]
    fn test_empty_input_of_any_kind_is_sentinel() {
        for modality in Modality::ALL {
            let desc = adapt(modality, &ChartData::default(), &ChartOptions::default()).unwrap();
            assert!(desc.is_no_data(), "{modality} should return the sentinel");
        }
    }

    #[test]
    fn test_input_mismatch() {
        let err = adapt(
            Modality::Heatmap,
            &ChartData::Prices(vec![1.0, 2.0]),
            &ChartOptions::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            Error::InputMismatch {
                modality: Modality::Heatmap,
                found: "price series"
            }
        );
    }

    #[test]
    fn test_unsupported_indicator() {
        let options = ChartOptions::new().indicator(IndicatorConfig::Sma { period: 5 });
        let err = adapt(Modality::Rsi, &ChartData::Prices(vec![1.0]), &options).unwrap_err();
        assert_eq!(
            err,
            Error::UnsupportedIndicator {
                kind: IndicatorKind::Sma,
                modality: Modality::Rsi
            }
        );
    }

    #[test]
    fn test_supports() {
        assert!(Modality::Candlestick.supports(IndicatorKind::Bollinger));
        assert!(!Modality::Candlestick.supports(IndicatorKind::Rsi));
        assert!(!Modality::Heatmap.supports(IndicatorKind::Sma));
    }

    #[test]
    fn test_options_partial_json() {
        let options: ChartOptions = serde_json::from_str(
            r#"{"overbought": 80, "indicators": [{"kind": "sma", "period": 10}], "layout": {"mainHeight": 60}}"#,
        )
        .unwrap();
        assert_eq!(options.overbought, 80.0);
        assert_eq!(options.oversold, 30.0);
        assert_eq!(options.indicators, vec![IndicatorConfig::Sma { period: 10 }]);
        assert_eq!(options.layout.main_height, 60.0);
        assert_eq!(options.layout.lower_top, 75.0);
    }

    #[test]
    fn test_chart_data_serde_tagged() {
        let data: ChartData =
            serde_json::from_str(r#"{"type": "prices", "data": [1.0, 2.0]}"#).unwrap();
        assert_eq!(data, ChartData::Prices(vec![1.0, 2.0]));
        assert_eq!(data.describe(), "price series");
    }

    #[test]
    fn test_max_periods_do_not_overflow() {
        let prices = ChartData::Prices(vec![1.0, 2.0, 3.0]);

        let rsi_options = ChartOptions::new().rsi_period(usize::MAX);
        let desc = adapt(Modality::Rsi, &prices, &rsi_options).unwrap();
        assert!(!desc.is_no_data());
        assert!(desc.series[0].data.is_empty());

        let json_options: ChartOptions =
            serde_json::from_str(r#"{"rsiPeriod": 18446744073709551615}"#).unwrap();
        assert!(adapt(Modality::Rsi, &prices, &json_options).is_ok());

        let macd_options = ChartOptions::new().macd(12, usize::MAX, 9);
        let desc = adapt(Modality::Macd, &prices, &macd_options).unwrap();
        assert_eq!(desc.series[0].data.len(), 3);
    }

    #[test]
    fn test_degenerate_bollinger_overlay_draws_empty_lines() {
        let bars = (0..10)
            .map(|i| OhlcBar::new(i * 1_000, 10.0, 11.0, 9.0, 10.0 + (i % 3) as f64))
            .collect();
        let options: ChartOptions = serde_json::from_str(
            r#"{"indicators": [{"kind": "bollinger", "period": 3, "multiplier": -2.0}]}"#,
        )
        .unwrap();
        let desc = adapt(Modality::Candlestick, &ChartData::Bars(bars), &options).unwrap();
        assert_eq!(desc.series.len(), 4);
        assert!(desc.series[1..].iter().all(|series| series.data.is_empty()));
    }
}

//! Candlestick shaping: OHLC candles, an optional volume pane, and price
//! overlays.

use crate::adapter::description::{
    Axes, Axis, AxisKind, ChartSeriesDescription, Series, SeriesData, SeriesKind,
};
use crate::adapter::{ChartOptions, Modality};
use crate::types::{closes, OhlcBar};

/// Name of the candle series.
pub const PRICE_SERIES: &str = "Price";
/// Name of the volume column series.
pub const VOLUME_SERIES: &str = "Volume";

/// Shapes a non-empty bar series.
///
/// If any bar carries a volume, the price axis takes the main pane and a
/// volume axis takes the lower pane; bars without volume are left out of the
/// volume series. Overlay indicators from `options` are computed on closing
/// prices and drawn as lines on the price axis, each point keyed by the
/// timestamp of the bar it aligns with.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn shape(bars: &[OhlcBar], options: &ChartOptions) -> ChartSeriesDescription {
    let layout = options.layout;
    let has_volume = bars.iter().any(|bar| bar.volume.is_some());

    let mut y = Vec::with_capacity(2);
    if has_volume {
        y.push(Axis::new(AxisKind::Linear).title("Price").pane(0.0, layout.main_height));
        y.push(
            Axis::new(AxisKind::Linear)
                .title("Volume")
                .pane(layout.lower_top, layout.lower_height),
        );
    } else {
        y.push(Axis::new(AxisKind::Linear).title("Price"));
    }

    let mut series = Vec::with_capacity(2 + options.indicators.len() * 3);
    series.push(Series {
        name: PRICE_SERIES.to_string(),
        kind: SeriesKind::Candlestick,
        y_axis: 0,
        data: SeriesData::Ohlc(
            bars.iter()
                .map(|bar| (bar.timestamp, bar.open, bar.high, bar.low, bar.close))
                .collect(),
        ),
    });

    if has_volume {
        series.push(Series {
            name: VOLUME_SERIES.to_string(),
            kind: SeriesKind::Column,
            y_axis: 1,
            data: SeriesData::Points(
                bars.iter()
                    .filter_map(|bar| bar.volume.map(|v| (bar.timestamp as f64, v)))
                    .collect(),
            ),
        });
    }

    if !options.indicators.is_empty() {
        let prices = closes(bars);
        for config in &options.indicators {
            for line in config.compute(&prices) {
                let points = line
                    .indexed()
                    .filter_map(|(i, value)| bars.get(i).map(|bar| (bar.timestamp as f64, value)))
                    .collect();
                series.push(Series {
                    name: line.label,
                    kind: SeriesKind::Line,
                    y_axis: 0,
                    data: SeriesData::Points(points),
                });
            }
        }
    }

    ChartSeriesDescription {
        modality: Modality::Candlestick,
        no_data: false,
        axes: Axes {
            x: vec![Axis::new(AxisKind::Datetime)],
            y,
        },
        series,
        color_scale: None,
    }
}

//! Oscillator shaping for the `rsi` and `macd` modalities.
//!
//! Both plot against the input index rather than a timestamp, since they
//! consume a flat price series.

use crate::adapter::description::{
    Axes, Axis, AxisKind, ChartSeriesDescription, Series, SeriesData, SeriesKind,
};
use crate::adapter::{ChartOptions, Modality};
use crate::indicators::{macd, rsi, rsi_offset};

/// Name of the RSI line series.
pub const RSI_SERIES: &str = "RSI";
/// Name of the MACD line series.
pub const MACD_SERIES: &str = "MACD";
/// Name of the MACD signal line series.
pub const SIGNAL_SERIES: &str = "Signal";
/// Name of the MACD histogram series.
pub const HISTOGRAM_SERIES: &str = "Histogram";

/// Shapes an RSI chart over non-empty `prices`.
///
/// Points are `(input_index, value)` starting at index `period + 1`. The y
/// axis is fixed to 0..100 and carries the overbought and oversold lines.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn shape_rsi(prices: &[f64], options: &ChartOptions) -> ChartSeriesDescription {
    let period = options.rsi_period;
    let offset = rsi_offset(period);
    let points = rsi(prices, period)
        .into_iter()
        .enumerate()
        .map(|(j, value)| ((offset + j) as f64, value))
        .collect();

    ChartSeriesDescription {
        modality: Modality::Rsi,
        no_data: false,
        axes: Axes {
            x: vec![Axis::new(AxisKind::Linear)],
            y: vec![Axis::new(AxisKind::Linear)
                .title("RSI")
                .range(0.0, 100.0)
                .plot_line(options.overbought, "Overbought")
                .plot_line(options.oversold, "Oversold")],
        },
        series: vec![Series {
            name: RSI_SERIES.to_string(),
            kind: SeriesKind::Line,
            y_axis: 0,
            data: SeriesData::Points(points),
        }],
        color_scale: None,
    }
}

/// Shapes a MACD chart over non-empty `prices`.
///
/// The MACD and signal lines share the main pane; the histogram is drawn as
/// columns in the lower pane.
#[must_use]
pub fn shape_macd(prices: &[f64], options: &ChartOptions) -> ChartSeriesDescription {
    let layout = options.layout;
    let out = macd(
        prices,
        options.macd_fast,
        options.macd_slow,
        options.macd_signal,
    );

    let line = |name: &str, kind, y_axis, values: Vec<f64>| Series {
        name: name.to_string(),
        kind,
        y_axis,
        data: SeriesData::Points(indexed(values)),
    };

    ChartSeriesDescription {
        modality: Modality::Macd,
        no_data: false,
        axes: Axes {
            x: vec![Axis::new(AxisKind::Linear)],
            y: vec![
                Axis::new(AxisKind::Linear)
                    .title("MACD")
                    .pane(0.0, layout.main_height),
                Axis::new(AxisKind::Linear)
                    .title("Histogram")
                    .pane(layout.lower_top, layout.lower_height),
            ],
        },
        series: vec![
            line(MACD_SERIES, SeriesKind::Line, 0, out.macd_line),
            line(SIGNAL_SERIES, SeriesKind::Line, 0, out.signal_line),
            line(HISTOGRAM_SERIES, SeriesKind::Column, 1, out.histogram),
        ],
        color_scale: None,
    }
}

#[allow(clippy::cast_precision_loss)]
fn indexed(values: Vec<f64>) -> Vec<(f64, f64)> {
    values
        .into_iter()
        .enumerate()
        .map(|(i, v)| (i as f64, v))
        .collect()
}

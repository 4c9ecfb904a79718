//! Renderer-agnostic chart descriptions.
//!
//! A [`ChartSeriesDescription`] is what the adapter hands to a renderer: the
//! axes to lay out, the series to draw on them, and for heatmaps the color
//! scale bounds. It serializes to camelCase JSON so a web renderer can
//! consume it directly.

use serde::Serialize;

use crate::adapter::Modality;

/// Output of one adapter invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeriesDescription {
    /// The modality this description was shaped for.
    pub modality: Modality,
    /// True for the "no data" sentinel returned on empty input.
    pub no_data: bool,
    /// Axis layout.
    pub axes: Axes,
    /// Series to draw, in z-order.
    pub series: Vec<Series>,
    /// Value range for color-mapped modalities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_scale: Option<ColorScale>,
}

impl ChartSeriesDescription {
    /// Creates the "no data" sentinel for `modality`.
    ///
    /// Renderers display an empty state for it.
    #[must_use]
    pub fn no_data(modality: Modality) -> Self {
        Self {
            modality,
            no_data: true,
            axes: Axes::default(),
            series: Vec::new(),
            color_scale: None,
        }
    }

    /// Returns true if this is the "no data" sentinel.
    #[must_use]
    pub const fn is_no_data(&self) -> bool {
        self.no_data
    }

    /// Looks up a series by name.
    #[must_use]
    pub fn series_named(&self, name: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.name == name)
    }
}

/// The x and y axes of a chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Axes {
    /// Horizontal axes.
    pub x: Vec<Axis>,
    /// Vertical axes; `Series::y_axis` indexes into this list.
    pub y: Vec<Axis>,
}

/// How axis positions map to values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    /// Milliseconds since the Unix epoch.
    Datetime,
    /// Plain numeric scale.
    Linear,
    /// Discrete positions labelled by `Axis::categories`.
    Category,
}

/// One axis.
///
/// `top_percent` and `height_percent` place the axis pane inside the plot
/// area, which is how price/volume and MACD line/histogram splits are
/// expressed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    /// Scale type.
    pub kind: AxisKind,
    /// Axis title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Pane offset from the top of the plot area, in percent.
    pub top_percent: f64,
    /// Pane height, in percent of the plot area.
    pub height_percent: f64,
    /// Draw values in descending order.
    pub reversed: bool,
    /// Labels for a category axis.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<f64>,
    /// Fixed lower bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Fixed upper bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Static reference lines (RSI thresholds).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub plot_lines: Vec<PlotLine>,
}

impl Axis {
    /// Creates a full-height axis of the given kind.
    #[must_use]
    pub const fn new(kind: AxisKind) -> Self {
        Self {
            kind,
            title: None,
            top_percent: 0.0,
            height_percent: 100.0,
            reversed: false,
            categories: Vec::new(),
            min: None,
            max: None,
            plot_lines: Vec::new(),
        }
    }

    /// Sets the axis title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Places the axis pane at `top` percent with `height` percent.
    #[must_use]
    pub fn pane(mut self, top: f64, height: f64) -> Self {
        self.top_percent = top;
        self.height_percent = height;
        self
    }

    /// Sets the category labels.
    #[must_use]
    pub fn categories(mut self, categories: Vec<f64>) -> Self {
        self.categories = categories;
        self
    }

    /// Reverses the axis direction.
    #[must_use]
    pub fn reversed(mut self) -> Self {
        self.reversed = true;
        self
    }

    /// Fixes the axis range.
    #[must_use]
    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    /// Adds a reference line.
    #[must_use]
    pub fn plot_line(mut self, value: f64, label: impl Into<String>) -> Self {
        self.plot_lines.push(PlotLine {
            value,
            label: label.into(),
        });
        self
    }
}

/// A static horizontal reference line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotLine {
    /// Position on the axis.
    pub value: f64,
    /// Display label.
    pub label: String,
}

/// Min/max bounds for color-mapped values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorScale {
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
}

/// Drawing style of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    /// OHLC candles.
    Candlestick,
    /// Vertical bars.
    Column,
    /// Horizontal bars.
    Bar,
    /// Connected line.
    Line,
    /// Color-mapped grid cells.
    Heatmap,
    /// Nested rectangles.
    Treemap,
}

/// One drawable series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    /// Display name, unique within a description.
    pub name: String,
    /// Drawing style.
    pub kind: SeriesKind,
    /// Index into `Axes::y`.
    pub y_axis: usize,
    /// The points.
    pub data: SeriesData,
}

/// Point payloads, one shape per drawing style.
///
/// Serialized untagged, so tuples become JSON arrays such as
/// `[timestamp, open, high, low, close]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SeriesData {
    /// `(timestamp, open, high, low, close)` candles.
    Ohlc(Vec<(i64, f64, f64, f64, f64)>),
    /// `(x, y)` points.
    Points(Vec<(f64, f64)>),
    /// Values aligned with the category axis.
    Values(Vec<f64>),
    /// `(x, y, value)` heatmap cells, with `x` and `y` as observed.
    Cells(Vec<(f64, f64, f64)>),
    /// Treemap nodes.
    Nodes(Vec<TreemapPoint>),
}

impl SeriesData {
    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Ohlc(points) => points.len(),
            Self::Points(points) => points.len(),
            Self::Values(values) => values.len(),
            Self::Cells(cells) => cells.len(),
            Self::Nodes(nodes) => nodes.len(),
        }
    }

    /// Returns true if there are no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A treemap node as drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreemapPoint {
    /// Node name; doubles as its id.
    pub name: String,
    /// Name of the parent node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Area weight.
    pub value: f64,
    /// Color intensity.
    pub color_value: f64,
}

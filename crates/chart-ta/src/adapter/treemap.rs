//! Treemap shaping.

use crate::adapter::description::{
    Axes, ChartSeriesDescription, ColorScale, Series, SeriesData, SeriesKind, TreemapPoint,
};
use crate::adapter::Modality;
use crate::types::TreemapNode;
use crate::utils::finite_bounds;

/// Name of the node series.
pub const NODE_SERIES: &str = "Allocation";

/// Shapes non-empty treemap nodes.
///
/// Nodes pass through in input order with no aggregation; a missing
/// `color_value` falls back to `value`. The color scale spans the resolved
/// color values.
#[must_use]
pub fn shape(nodes: &[TreemapNode]) -> ChartSeriesDescription {
    let points: Vec<TreemapPoint> = nodes
        .iter()
        .map(|node| TreemapPoint {
            name: node.name.clone(),
            parent: node.parent.clone(),
            value: node.value,
            color_value: node.color_value.unwrap_or(node.value),
        })
        .collect();

    let color_scale = finite_bounds(points.iter().map(|p| p.color_value))
        .map(|(min, max)| ColorScale { min, max });

    ChartSeriesDescription {
        modality: Modality::Treemap,
        no_data: false,
        axes: Axes::default(),
        series: vec![Series {
            name: NODE_SERIES.to_string(),
            kind: SeriesKind::Treemap,
            y_axis: 0,
            data: SeriesData::Nodes(points),
        }],
        color_scale,
    }
}

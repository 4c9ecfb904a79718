//! Heatmap shaping: category axes from observed coordinates plus a color
//! scale over the cell values.

use crate::adapter::description::{
    Axes, Axis, AxisKind, ChartSeriesDescription, ColorScale, Series, SeriesData, SeriesKind,
};
use crate::adapter::Modality;
use crate::types::HeatmapCell;
use crate::utils::{finite_bounds, sorted_unique};

/// Name of the cell series.
pub const CELL_SERIES: &str = "Correlation";

/// Shapes non-empty heatmap cells.
///
/// The x and y categories are the sorted, duplicate-free coordinates seen in
/// the input. Each cell becomes an `(x, y, value)` triple carrying its own
/// coordinates, in input order; duplicate coordinates are kept as separate
/// cells.
#[must_use]
pub fn shape(cells: &[HeatmapCell]) -> ChartSeriesDescription {
    let x_categories = sorted_unique(cells.iter().map(|cell| cell.x));
    let y_categories = sorted_unique(cells.iter().map(|cell| cell.y));

    let points = cells.iter().map(|cell| (cell.x, cell.y, cell.value)).collect();

    let color_scale =
        finite_bounds(cells.iter().map(|cell| cell.value)).map(|(min, max)| ColorScale { min, max });

    ChartSeriesDescription {
        modality: Modality::Heatmap,
        no_data: false,
        axes: Axes {
            x: vec![Axis::new(AxisKind::Category).categories(x_categories)],
            y: vec![Axis::new(AxisKind::Category).categories(y_categories)],
        },
        series: vec![Series {
            name: CELL_SERIES.to_string(),
            kind: SeriesKind::Heatmap,
            y_axis: 0,
            data: SeriesData::Cells(points),
        }],
        color_scale,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;

    fn cell(x: f64, y: f64, value: f64) -> HeatmapCell {
        HeatmapCell {
            x,
            y,
            value,
            name: None,
        }
    }

    #[test]
    fn test_categories_sorted_unique() {
        let desc = shape(&[
            cell(2.0, 1.0, 0.5),
            cell(0.0, 1.0, -0.2),
            cell(2.0, 0.0, 0.9),
            cell(1.0, 3.0, 0.1),
        ]);
        assert_eq!(desc.axes.x[0].categories, vec![0.0, 1.0, 2.0]);
        assert_eq!(desc.axes.y[0].categories, vec![0.0, 1.0, 3.0]);
    }

    #[test]
    fn test_cells_keep_observed_coordinates() {
        let desc = shape(&[cell(10.0, 5.0, 0.5), cell(20.0, 7.0, -0.5), cell(10.0, 7.0, 1.0)]);
        assert_eq!(
            desc.series[0].data,
            SeriesData::Cells(vec![(10.0, 5.0, 0.5), (20.0, 7.0, -0.5), (10.0, 7.0, 1.0)])
        );
        assert_eq!(desc.axes.x[0].categories, vec![10.0, 20.0]);
        assert_eq!(desc.axes.y[0].categories, vec![5.0, 7.0]);
    }

    #[test]
    fn test_color_scale() {
        let desc = shape(&[cell(0.0, 0.0, 0.3), cell(1.0, 0.0, -0.8), cell(0.0, 1.0, 0.6)]);
        assert_eq!(desc.color_scale, Some(ColorScale { min: -0.8, max: 0.6 }));
    }

    #[test]
    fn test_duplicate_coordinates_kept() {
        let desc = shape(&[cell(1.0, 1.0, 0.2), cell(1.0, 1.0, 0.4)]);
        assert_eq!(desc.axes.x[0].categories, vec![1.0]);
        assert_eq!(desc.series[0].data.len(), 2);
    }
}

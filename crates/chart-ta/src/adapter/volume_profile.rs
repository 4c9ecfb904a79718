//! Volume-profile shaping: buy and sell volume per price level.

use crate::adapter::description::{
    Axes, Axis, AxisKind, ChartSeriesDescription, Series, SeriesData, SeriesKind,
};
use crate::adapter::Modality;
use crate::types::VolumeProfileLevel;

/// Name of the buy-side bar series.
pub const BUY_SERIES: &str = "Buy Volume";
/// Name of the sell-side bar series.
pub const SELL_SERIES: &str = "Sell Volume";

/// Shapes non-empty volume-profile levels.
///
/// Levels are sorted by ascending price and drawn against a reversed price
/// category axis, so the highest price sits at the top. Sell volume is
/// negated so the two sides extend in opposite directions.
#[must_use]
pub fn shape(levels: &[VolumeProfileLevel]) -> ChartSeriesDescription {
    let mut sorted = levels.to_vec();
    sorted.sort_by(|a, b| a.price.total_cmp(&b.price));

    let prices = sorted.iter().map(|level| level.price).collect();
    let buys = sorted.iter().map(|level| level.buy_volume).collect();
    let sells = sorted.iter().map(|level| -level.sell_volume).collect();

    ChartSeriesDescription {
        modality: Modality::VolumeProfile,
        no_data: false,
        axes: Axes {
            x: vec![Axis::new(AxisKind::Category)
                .title("Price")
                .categories(prices)
                .reversed()],
            y: vec![Axis::new(AxisKind::Linear).title("Volume")],
        },
        series: vec![
            Series {
                name: BUY_SERIES.to_string(),
                kind: SeriesKind::Bar,
                y_axis: 0,
                data: SeriesData::Values(buys),
            },
            Series {
                name: SELL_SERIES.to_string(),
                kind: SeriesKind::Bar,
                y_axis: 0,
                data: SeriesData::Values(sells),
            },
        ],
        color_scale: None,
    }
}

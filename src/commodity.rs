//! Seaborne trade volumes by commodity.
use crate::scale::{Bar, bar_chart};
use crate::units::Percent;

/// Annual seaborne trade in a commodity
#[derive(Debug, Clone, PartialEq)]
pub struct CommodityVolume {
    /// Commodity name, e.g. `"Iron Ore"`
    pub name: String,
    /// Annual volume in `unit`
    pub volume: f64,
    /// The unit of `volume`, e.g. `"M tonnes"`
    pub unit: String,
    /// Vessel classes carrying the commodity
    pub vessel_type: String,
    /// Largest exporters
    pub top_exporters: Vec<String>,
    /// Largest importers
    pub top_importers: Vec<String>,
    /// Annual growth in volume
    pub growth: Percent,
}

/// Rank commodities by volume, largest first.
///
/// The sort is stable, so commodities with equal volumes keep their input order.
pub fn rank_by_volume(commodities: &[CommodityVolume]) -> Vec<&CommodityVolume> {
    let mut ranked: Vec<_> = commodities.iter().collect();
    ranked.sort_by(|a, b| b.volume.total_cmp(&a.volume));
    ranked
}

/// The `n` largest commodities by volume
pub fn top_by_volume(commodities: &[CommodityVolume], n: usize) -> Vec<&CommodityVolume> {
    let mut ranked = rank_by_volume(commodities);
    ranked.truncate(n);
    ranked
}

/// Bars for a chart of commodity volumes, scaled relative to the largest
pub fn volume_bars<'a>(commodities: &[&'a CommodityVolume]) -> Vec<Bar<&'a str>> {
    bar_chart(
        commodities
            .iter()
            .map(|commodity| (commodity.name.as_str(), commodity.volume)),
    )
}

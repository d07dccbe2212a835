//! Shipbuilding and ship-recycling market shares by country.
use crate::scale::{Bar, bar_chart};
use crate::units::Percent;

/// A shipbuilding nation's share of the market
#[derive(Debug, Clone, PartialEq)]
pub struct ShipbuildingCountry {
    /// Country name
    pub country: String,
    /// Share of completions by gross tonnage
    pub market_share_gt: Percent,
    /// Share of new orders
    pub market_share_orders: Percent,
    /// Largest yards
    pub key_yards: Vec<String>,
    /// Vessel types the country specialises in
    pub specialization: Vec<String>,
    /// Number of vessels on order
    pub orderbook: u32,
    /// Number of active yards
    pub active_yards: u32,
}

/// A ship-recycling nation's share of the market
#[derive(Debug, Clone, PartialEq)]
pub struct ShipBreakingCountry {
    /// Country name, optionally followed by the main site, e.g. `"India (Alang)"`
    pub country: String,
    /// Share of recycled light displacement tonnage
    pub market_share_ldt: Percent,
    /// Annual recycling capacity in million LDT
    pub annual_capacity: f64,
    /// How vessels are taken apart, e.g. `"Beaching"`
    pub method: String,
    /// Applicable regulations
    pub regulations: String,
    /// Largest yards
    pub key_yards: Vec<String>,
    /// Safety and environmental concerns
    pub controversies: String,
}

impl ShipBreakingCountry {
    /// The country name without the site, e.g. `"India"` for `"India (Alang)"`
    pub fn short_name(&self) -> &str {
        self.country
            .split_once(" (")
            .map_or(self.country.as_str(), |(name, _)| name)
    }
}

/// Bars for a chart of shipbuilding share by gross tonnage
pub fn gt_share_bars(countries: &[ShipbuildingCountry]) -> Vec<Bar<&str>> {
    bar_chart(
        countries
            .iter()
            .map(|country| (country.country.as_str(), country.market_share_gt.0)),
    )
}

/// Bars for a chart of ship-recycling share by LDT, labelled with the short country name
pub fn ldt_share_bars(countries: &[ShipBreakingCountry]) -> Vec<Bar<&str>> {
    bar_chart(
        countries
            .iter()
            .map(|country| (country.short_name(), country.market_share_ldt.0)),
    )
}

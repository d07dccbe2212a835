//! Headline figures for the shipping industry as a whole.
use serde::Deserialize;

/// Headline industry figures, held as display text
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IndustryStats {
    /// Number of merchant vessels
    pub total_fleet: String,
    /// Total deadweight of the fleet
    pub total_dwt: String,
    /// Annual seaborne trade volume
    pub seaborne_trade: String,
    /// Annual value of seaborne trade
    pub trade_value: String,
    /// Share of world trade carried by sea
    pub percent_world_trade: String,
    /// Number of seafarers
    pub seafarers: String,
    /// Share of global CO2 emissions
    pub co2_emissions: String,
    /// Average age of the fleet
    pub average_vessel_age: String,
    /// Container fleet capacity
    pub container_teu: String,
    /// Vessels on order
    pub orderbook: String,
    /// Annual freight revenue
    pub annual_freight_revenue: String,
    /// Largest flag state
    pub top_flag: String,
}

impl IndustryStats {
    /// The figures with their captions, in display order
    pub fn headlines(&self) -> [(&'static str, &str); 12] {
        [
            ("Total fleet", &self.total_fleet),
            ("Total deadweight", &self.total_dwt),
            ("Seaborne trade", &self.seaborne_trade),
            ("Trade value", &self.trade_value),
            ("Share of world trade", &self.percent_world_trade),
            ("Seafarers", &self.seafarers),
            ("CO2 emissions", &self.co2_emissions),
            ("Average vessel age", &self.average_vessel_age),
            ("Container capacity", &self.container_teu),
            ("Orderbook", &self.orderbook),
            ("Annual freight revenue", &self.annual_freight_revenue),
            ("Top flag state", &self.top_flag),
        ]
    }
}

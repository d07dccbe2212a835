//! Major trade routes and the maritime choke points they pass through.
use crate::id::{define_id_getter, define_id_type};
use crate::number::NumericRange;
use crate::units::Dollars;
use indexmap::IndexMap;
use itertools::Itertools;
use serde::Serialize;
use std::fmt;
use strum::EnumIter;

define_id_type! {RouteID}
define_id_type! {ChokePointID}

/// A map of [`ShippingRoute`]s, keyed by route name
pub type RouteMap = IndexMap<RouteID, ShippingRoute>;

/// A map of [`ChokePoint`]s, keyed by name
pub type ChokePointMap = IndexMap<ChokePointID, ChokePoint>;

/// A narrow passage which a large share of seaborne trade must pass through
#[derive(Debug, Clone, PartialEq)]
pub struct ChokePoint {
    /// Name, e.g. `"Strait of Hormuz"`
    pub id: ChokePointID,
    /// Where the choke point is
    pub location: String,
    /// Vessel transits per day
    pub daily_transits: f64,
    /// Oil flow in million barrels per day
    pub oil_flow: f64,
    /// Value of trade passing through per year
    pub trade_value: Dollars,
    /// Width at the narrowest point, as authored
    pub width: String,
    /// Depth, as authored
    pub depth: String,
    /// Main risks to navigation
    pub risk: String,
}
define_id_getter! {ChokePoint, ChokePointID, id}

/// The kind of cargo carried on a route, used for colour-coding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize)]
pub enum CargoClass {
    /// Containerised goods
    Container,
    /// Dry bulk, e.g. iron ore or grain
    DryBulk,
    /// Crude oil and products
    Oil,
    /// Liquefied gas
    Gas,
    /// Anything else
    Other,
}

/// Keywords identifying a cargo class, checked in order. A keyword must start a word.
const CARGO_KEYWORDS: [(CargoClass, &[&str]); 4] = [
    (CargoClass::Container, &["container"]),
    (CargoClass::DryBulk, &["bulk", "grain", "ore", "coal"]),
    (CargoClass::Oil, &["oil", "crude", "petroleum"]),
    (CargoClass::Gas, &["lng", "lpg", "gas"]),
];

impl CargoClass {
    /// Classify a free-text cargo description such as `"Iron Ore (Bulk)"`.
    ///
    /// The first keyword group with a word of the text starting with one of its keywords (ignoring
    /// case) wins, so `"Containers"` is a container cargo but `"Offshore Stores"` is not bulk. Text
    /// matching no group is [`CargoClass::Other`].
    pub fn classify(cargo_type: &str) -> Self {
        let cargo_type = cargo_type.to_lowercase();
        let words = cargo_type
            .split(|c: char| !c.is_alphanumeric())
            .filter(|word| !word.is_empty())
            .collect_vec();
        CARGO_KEYWORDS
            .iter()
            .find(|(_, keywords)| {
                keywords
                    .iter()
                    .any(|keyword| words.iter().any(|word| word.starts_with(keyword)))
            })
            .map_or(Self::Other, |(class, _)| *class)
    }

    /// The display label for the class
    pub fn label(self) -> &'static str {
        match self {
            Self::Container => "Container",
            Self::DryBulk => "Dry Bulk",
            Self::Oil => "Oil",
            Self::Gas => "Gas",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for CargoClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// A major seaborne trade route
#[derive(Debug, Clone, PartialEq)]
pub struct ShippingRoute {
    /// Route name, e.g. `"Asia - North Europe"`
    pub id: RouteID,
    /// Where cargo is loaded
    pub origin: String,
    /// Where cargo is discharged
    pub destination: String,
    /// Distance in nautical miles
    pub distance: f64,
    /// Transit time in days
    pub transit_time: NumericRange,
    /// The cargo carried, as authored
    pub cargo_type: String,
    /// The class of cargo carried
    pub cargo_class: CargoClass,
    /// Annual volume, as authored
    pub volume: String,
    /// Free-text description
    pub description: String,
    /// Choke points and waypoints along the route, in order.
    ///
    /// Not every name has a [`ChokePoint`] record.
    pub choke_points: Vec<ChokePointID>,
}
define_id_getter! {ShippingRoute, RouteID, id}

impl ShippingRoute {
    /// Whether the route passes through the named choke point
    pub fn passes_through(&self, choke_point: &ChokePointID) -> bool {
        self.choke_points.contains(choke_point)
    }
}

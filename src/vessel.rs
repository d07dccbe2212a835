//! Vessel classes and the composition of the world merchant fleet.
use crate::id::{define_id_getter, define_id_type};
use crate::number::{NumericRange, parse_range};
use crate::units::Percent;
use anyhow::{Result, ensure};
use indexmap::IndexMap;
use itertools::Itertools;
use serde_string_enum::{DeserializeLabeledStringEnum, SerializeLabeledStringEnum, SerializeStringEnum};
use std::fmt;
use strum::{EnumIter, IntoEnumIterator};

define_id_type! {VesselID}

/// A map of [`VesselType`]s, keyed by vessel class name
pub type VesselMap = IndexMap<VesselID, VesselType>;

/// The broad category a vessel class belongs to
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    SerializeStringEnum,
    DeserializeLabeledStringEnum,
    clap::ValueEnum,
)]
pub enum VesselCategory {
    /// Dry bulk carriers
    #[string = "Bulk Carrier"]
    BulkCarrier,
    /// Crude oil tankers
    #[string = "Oil Tanker"]
    OilTanker,
    /// Cellular container ships
    #[string = "Container Ship"]
    ContainerShip,
    /// LNG and LPG carriers
    #[string = "Gas Tanker"]
    GasTanker,
    /// Ro-Ro and pure car/truck carriers
    #[string = "Vehicle Carrier"]
    VehicleCarrier,
}

impl VesselCategory {
    /// The display label for the category
    pub fn label(self) -> &'static str {
        match self {
            Self::BulkCarrier => "Bulk Carrier",
            Self::OilTanker => "Oil Tanker",
            Self::ContainerShip => "Container Ship",
            Self::GasTanker => "Gas Tanker",
            Self::VehicleCarrier => "Vehicle Carrier",
        }
    }

    /// Parse an authored category label such as `"Bulk Carrier / Container"`.
    ///
    /// The class belongs to every category whose full label appears in the text (ignoring case),
    /// in order of appearance. Other words only qualify the label, so `"Bulk Carrier / Container"`
    /// is a bulk carrier but not a container ship. At least one category must appear.
    pub fn parse_label(label: &str) -> Result<Vec<Self>> {
        let label = label.trim();
        ensure!(
            !label.is_empty(),
            "Vessel category cannot be empty (got \"{label}\")"
        );

        let lower = label.to_lowercase();
        let categories = Self::iter()
            .filter_map(|category| {
                let position = lower.find(&category.label().to_lowercase())?;
                Some((position, category))
            })
            .sorted_by_key(|(position, _)| *position)
            .map(|(_, category)| category)
            .collect_vec();
        ensure!(
            !categories.is_empty(),
            "Unknown vessel category \"{label}\""
        );

        Ok(categories)
    }
}

impl fmt::Display for VesselCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Principal dimensions and figures for a vessel class, as authored
#[derive(Debug, Clone, PartialEq)]
pub struct VesselSpecs {
    /// Deadweight tonnage, e.g. `"150,000 - 400,000 DWT"`
    pub dwt: String,
    /// Container capacity, only for classes which carry containers
    pub teu: Option<String>,
    /// Length overall
    pub length: String,
    /// Beam
    pub beam: String,
    /// Draft
    pub draft: String,
    /// Service speed
    pub speed: String,
    /// Crew complement
    pub crew: String,
    /// Newbuild cost
    pub build_cost: String,
}

/// References to the pictures of a vessel class
#[derive(Debug, Clone, PartialEq)]
pub struct VesselImages {
    /// The main picture
    pub image: String,
    /// A side-on view
    pub side_view: String,
    /// A view from above
    pub aerial_view: String,
}

/// A class of merchant vessel, e.g. Capesize or VLCC
#[derive(Debug, Clone, PartialEq)]
pub struct VesselType {
    /// Class name, e.g. `"Capesize"`
    pub id: VesselID,
    /// The category label as authored
    pub category_label: String,
    /// The categories parsed from the label
    pub categories: Vec<VesselCategory>,
    /// Free-text description
    pub description: String,
    /// Principal dimensions
    pub specs: VesselSpecs,
    /// Cargoes typically carried
    pub typical_cargo: Vec<String>,
    /// Routes the class typically trades on
    pub key_routes: Vec<String>,
    /// Notable facts
    pub facts: Vec<String>,
    /// Pictures of the class
    pub images: VesselImages,
}
define_id_getter! {VesselType, VesselID, id}

impl VesselType {
    /// The deadweight range parsed from the DWT text, if it contains a figure
    pub fn dwt_range(&self) -> Option<NumericRange> {
        parse_range(&self.specs.dwt)
    }

    /// The container capacity range, for classes which carry containers
    pub fn teu_range(&self) -> Option<NumericRange> {
        self.specs.teu.as_deref().and_then(parse_range)
    }

    /// Whether the class belongs to `category`
    pub fn in_category(&self, category: VesselCategory) -> bool {
        self.categories.contains(&category)
    }

    fn max_dwt(&self) -> f64 {
        self.dwt_range().map_or(0.0, |range| range.max)
    }
}

/// Select the vessel classes in `category`, or all of them if `category` is `None`
pub fn filter_by_category(
    vessels: &VesselMap,
    category: Option<VesselCategory>,
) -> Vec<&VesselType> {
    vessels
        .values()
        .filter(|vessel| category.is_none_or(|category| vessel.in_category(category)))
        .collect()
}

/// Sort vessel classes by their maximum deadweight, largest first.
///
/// Classes with no parseable DWT sort last. The sort is stable.
pub fn sort_by_max_dwt(vessels: &mut [&VesselType]) {
    vessels.sort_by(|a, b| b.max_dwt().total_cmp(&a.max_dwt()));
}

/// The icon shown for a fleet category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, SerializeLabeledStringEnum)]
pub enum FleetIcon {
    /// Dry bulk
    #[string = "box"]
    Box,
    /// Liquids
    #[string = "droplet"]
    Droplet,
    /// Containers
    #[string = "container"]
    Container,
    /// Gas
    #[string = "flame"]
    Flame,
    /// Chemicals
    #[string = "flask"]
    Flask,
    /// Vehicles
    #[string = "car"]
    Car,
    /// General cargo
    #[string = "package"]
    Package,
    /// Offshore
    #[string = "anchor"]
    Anchor,
    /// Anything else
    #[default]
    #[string = "ship"]
    Ship,
}

/// A segment of the world merchant fleet, e.g. bulk carriers or oil tankers
#[derive(Debug, Clone, PartialEq)]
pub struct FleetCategory {
    /// Category name
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Number of vessels in the category
    pub fleet_size: u32,
    /// Total deadweight in million DWT
    pub total_dwt: f64,
    /// Average vessel age in years
    pub average_age: f64,
    /// Share of the world fleet
    pub market_share: Percent,
    /// Icon for the category
    pub icon: FleetIcon,
    /// Vessel classes within the category
    pub sub_types: Vec<String>,
    /// Notable facts
    pub key_facts: Vec<String>,
}

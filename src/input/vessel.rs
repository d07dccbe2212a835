//! Code for reading vessel classes and fleet composition from CSV files.
use super::*;
use crate::style::{fleet_icon_from_key, lookup_fleet_icon};
use crate::vessel::{
    FleetCategory, VesselCategory, VesselImages, VesselMap, VesselSpecs, VesselType,
};
use log::warn;
use serde::Deserialize;
use std::path::Path;

const VESSEL_TYPES_FILE_NAME: &str = "vessel_types.csv";
const FLEET_CATEGORIES_FILE_NAME: &str = "fleet_categories.csv";

#[derive(Debug, Deserialize, PartialEq)]
struct VesselTypeRaw {
    name: String,
    category: String,
    description: String,
    dwt: String,
    teu: Option<String>,
    length: String,
    beam: String,
    draft: String,
    speed: String,
    crew: String,
    build_cost: String,
    #[serde(deserialize_with = "deserialise_list")]
    typical_cargo: Vec<String>,
    #[serde(deserialize_with = "deserialise_list")]
    key_routes: Vec<String>,
    #[serde(deserialize_with = "deserialise_list")]
    facts: Vec<String>,
    image: String,
    side_view: String,
    aerial_view: String,
}

impl TryFrom<VesselTypeRaw> for VesselType {
    type Error = anyhow::Error;

    fn try_from(raw: VesselTypeRaw) -> Result<Self> {
        let categories = VesselCategory::parse_label(&raw.category)
            .with_context(|| format!("Invalid category for vessel {}", raw.name))?;
        let vessel = Self {
            id: raw.name.into(),
            category_label: raw.category,
            categories,
            description: raw.description,
            specs: VesselSpecs {
                dwt: raw.dwt,
                teu: raw.teu.filter(|teu| !teu.is_empty()),
                length: raw.length,
                beam: raw.beam,
                draft: raw.draft,
                speed: raw.speed,
                crew: raw.crew,
                build_cost: raw.build_cost,
            },
            typical_cargo: raw.typical_cargo,
            key_routes: raw.key_routes,
            facts: raw.facts,
            images: VesselImages {
                image: raw.image,
                side_view: raw.side_view,
                aerial_view: raw.aerial_view,
            },
        };
        ensure!(
            vessel.dwt_range().is_some(),
            "No deadweight figure found for vessel {}",
            vessel.id
        );

        Ok(vessel)
    }
}

/// Read vessel classes from the dataset directory.
///
/// # Arguments
///
/// * `dataset_dir` - Folder containing the dataset files
///
/// # Returns
///
/// A map of vessel classes keyed by name, in file order, or an error.
pub fn read_vessel_types(dataset_dir: &Path) -> Result<VesselMap> {
    read_csv_id_file::<VesselTypeRaw, _, _, _>(
        &dataset_dir.join(VESSEL_TYPES_FILE_NAME),
        VesselType::try_from,
    )
}

#[derive(Debug, Deserialize, PartialEq)]
struct FleetCategoryRaw {
    name: String,
    description: String,
    fleet_size: String,
    total_dwt: String,
    average_age: String,
    market_share: String,
    icon: String,
    #[serde(deserialize_with = "deserialise_list")]
    sub_types: Vec<String>,
    #[serde(deserialize_with = "deserialise_list")]
    key_facts: Vec<String>,
}

fn convert_fleet_category(raw: FleetCategoryRaw) -> Result<FleetCategory> {
    if lookup_fleet_icon(&raw.icon).is_none() {
        warn!(
            "Unknown icon '{}' for fleet category {}; using the default icon",
            raw.icon, raw.name
        );
    }

    let context = || format!("Invalid figures for fleet category {}", raw.name);
    Ok(FleetCategory {
        fleet_size: parse_count(&raw.fleet_size).with_context(context)?,
        total_dwt: parse_figure(&raw.total_dwt).with_context(context)?,
        average_age: parse_figure(&raw.average_age).with_context(context)?,
        market_share: parse_share(&raw.market_share).with_context(context)?,
        icon: fleet_icon_from_key(&raw.icon),
        name: raw.name,
        description: raw.description,
        sub_types: raw.sub_types,
        key_facts: raw.key_facts,
    })
}

/// Read the fleet composition from the dataset directory
pub fn read_fleet_categories(dataset_dir: &Path) -> Result<Vec<FleetCategory>> {
    let file_path = dataset_dir.join(FLEET_CATEGORIES_FILE_NAME);
    read_csv(&file_path)?
        .into_iter()
        .map(convert_fleet_category)
        .collect::<Result<_>>()
        .with_context(|| input_err_msg(&file_path))
}

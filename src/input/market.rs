//! Code for reading freight market indices and container alliances from CSV files.
use super::*;
use crate::market::{MarketIndex, ShippingAlliance, check_hex_colour};
use crate::units::Percent;
use serde::Deserialize;
use std::path::Path;

const MARKET_INDICES_FILE_NAME: &str = "market_indices.csv";
const ALLIANCES_FILE_NAME: &str = "alliances.csv";

#[derive(Debug, Deserialize, PartialEq)]
struct MarketIndexRaw {
    name: String,
    value: String,
    description: String,
    measures: String,
    range: String,
    colour: String,
}

impl TryFrom<MarketIndexRaw> for MarketIndex {
    type Error = anyhow::Error;

    fn try_from(raw: MarketIndexRaw) -> Result<Self> {
        let value = parse_figure(&raw.value)
            .with_context(|| format!("Invalid value for index {}", raw.name))?;
        check_hex_colour(&raw.colour)
            .with_context(|| format!("Invalid colour for index {}", raw.name))?;

        Ok(Self {
            name: raw.name,
            value,
            value_label: raw.value,
            description: raw.description,
            measures: raw.measures,
            range: raw.range,
            colour: raw.colour,
        })
    }
}

/// Read freight market indices from the dataset directory
pub fn read_market_indices(dataset_dir: &Path) -> Result<Vec<MarketIndex>> {
    let file_path = dataset_dir.join(MARKET_INDICES_FILE_NAME);
    read_csv::<MarketIndexRaw>(&file_path)?
        .into_iter()
        .map(MarketIndex::try_from)
        .collect::<Result<_>>()
        .with_context(|| input_err_msg(&file_path))
}

#[derive(Debug, Deserialize, PartialEq)]
struct ShippingAllianceRaw {
    name: String,
    #[serde(deserialize_with = "deserialise_list")]
    members: Vec<String>,
    #[serde(deserialize_with = "deserialise_share")]
    capacity_share: Percent,
    description: String,
    colour: String,
}

impl TryFrom<ShippingAllianceRaw> for ShippingAlliance {
    type Error = anyhow::Error;

    fn try_from(raw: ShippingAllianceRaw) -> Result<Self> {
        ensure!(
            !raw.members.is_empty(),
            "Alliance {} must have at least one member",
            raw.name
        );
        check_hex_colour(&raw.colour)
            .with_context(|| format!("Invalid colour for alliance {}", raw.name))?;

        Ok(Self {
            name: raw.name,
            members: raw.members,
            capacity_share: raw.capacity_share,
            description: raw.description,
            colour: raw.colour,
        })
    }
}

/// Read container shipping alliances from the dataset directory
pub fn read_alliances(dataset_dir: &Path) -> Result<Vec<ShippingAlliance>> {
    let file_path = dataset_dir.join(ALLIANCES_FILE_NAME);
    read_csv::<ShippingAllianceRaw>(&file_path)?
        .into_iter()
        .map(ShippingAlliance::try_from)
        .collect::<Result<_>>()
        .with_context(|| input_err_msg(&file_path))
}

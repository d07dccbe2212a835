//! Code for reading shipbuilding and ship-recycling market shares from CSV files.
use super::*;
use crate::shipbuilding::{ShipBreakingCountry, ShipbuildingCountry};
use crate::units::Percent;
use serde::Deserialize;
use std::path::Path;

const SHIPBUILDING_FILE_NAME: &str = "shipbuilding.csv";
const SHIP_BREAKING_FILE_NAME: &str = "ship_breaking.csv";

#[derive(Debug, Deserialize, PartialEq)]
struct ShipbuildingCountryRaw {
    country: String,
    #[serde(deserialize_with = "deserialise_share")]
    market_share_gt: Percent,
    #[serde(deserialize_with = "deserialise_share")]
    market_share_orders: Percent,
    #[serde(deserialize_with = "deserialise_list")]
    key_yards: Vec<String>,
    #[serde(deserialize_with = "deserialise_list")]
    specialization: Vec<String>,
    orderbook: String,
    active_yards: u32,
}

impl TryFrom<ShipbuildingCountryRaw> for ShipbuildingCountry {
    type Error = anyhow::Error;

    fn try_from(raw: ShipbuildingCountryRaw) -> Result<Self> {
        let orderbook = parse_count(&raw.orderbook)
            .with_context(|| format!("Invalid orderbook for {}", raw.country))?;

        Ok(Self {
            country: raw.country,
            market_share_gt: raw.market_share_gt,
            market_share_orders: raw.market_share_orders,
            key_yards: raw.key_yards,
            specialization: raw.specialization,
            orderbook,
            active_yards: raw.active_yards,
        })
    }
}

/// Read shipbuilding market shares from the dataset directory
pub fn read_shipbuilding(dataset_dir: &Path) -> Result<Vec<ShipbuildingCountry>> {
    let file_path = dataset_dir.join(SHIPBUILDING_FILE_NAME);
    read_csv::<ShipbuildingCountryRaw>(&file_path)?
        .into_iter()
        .map(ShipbuildingCountry::try_from)
        .collect::<Result<_>>()
        .with_context(|| input_err_msg(&file_path))
}

#[derive(Debug, Deserialize, PartialEq)]
struct ShipBreakingCountryRaw {
    country: String,
    #[serde(deserialize_with = "deserialise_share")]
    market_share_ldt: Percent,
    #[serde(deserialize_with = "deserialise_figure")]
    annual_capacity: f64,
    method: String,
    regulations: String,
    #[serde(deserialize_with = "deserialise_list")]
    key_yards: Vec<String>,
    controversies: String,
}

impl From<ShipBreakingCountryRaw> for ShipBreakingCountry {
    fn from(raw: ShipBreakingCountryRaw) -> Self {
        Self {
            country: raw.country,
            market_share_ldt: raw.market_share_ldt,
            annual_capacity: raw.annual_capacity,
            method: raw.method,
            regulations: raw.regulations,
            key_yards: raw.key_yards,
            controversies: raw.controversies,
        }
    }
}

/// Read ship-recycling market shares from the dataset directory
pub fn read_ship_breaking(dataset_dir: &Path) -> Result<Vec<ShipBreakingCountry>> {
    let rows = read_csv::<ShipBreakingCountryRaw>(&dataset_dir.join(SHIP_BREAKING_FILE_NAME))?;
    Ok(rows.into_iter().map(Into::into).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_file(dir_path: &Path, file_name: &str, contents: &str) {
        let mut file = File::create(dir_path.join(file_name)).unwrap();
        writeln!(file, "{contents}").unwrap();
    }

    #[test]
    fn test_read_shipbuilding() {
        let dir = tempdir().unwrap();
        write_file(
            dir.path(),
            SHIPBUILDING_FILE_NAME,
            "country,market_share_gt,market_share_orders,key_yards,specialization,orderbook,active_yards
China,49.2,55.3,CSSC; Yangzijiang,Bulk Carriers; LNG Carriers,\"3,200+ vessels\",45
Italy,1.5%,1.8%,Fincantieri,Cruise Ships,85+ vessels,8",
        );
        let countries = read_shipbuilding(dir.path()).unwrap();
        assert_eq!(countries[0].market_share_gt, Percent(49.2));
        assert_eq!(countries[0].orderbook, 3200);
        assert_eq!(countries[0].key_yards, ["CSSC", "Yangzijiang"]);
        assert_eq!(countries[1].market_share_orders, Percent(1.8));
        assert_eq!(countries[1].active_yards, 8);
    }

    #[test]
    fn test_read_shipbuilding_bad_share() {
        let dir = tempdir().unwrap();
        write_file(
            dir.path(),
            SHIPBUILDING_FILE_NAME,
            "country,market_share_gt,market_share_orders,key_yards,specialization,orderbook,active_yards
China,149.2,55.3,,,3200,45",
        );
        let err = read_shipbuilding(dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("Share must be between 0 and 100 (got \"149.2\")"));
    }

    #[test]
    fn test_read_ship_breaking() {
        let dir = tempdir().unwrap();
        write_file(
            dir.path(),
            SHIP_BREAKING_FILE_NAME,
            "country,market_share_ldt,annual_capacity,method,regulations,key_yards,controversies
Bangladesh (Chittagong),35,7M LDT,Beaching,Basel Convention,PHP; Ziri Subedar,Worker safety
Others (EU/Misc),3,0.5M LDT,Various,Varies,,",
        );
        let countries = read_ship_breaking(dir.path()).unwrap();
        assert_eq!(countries[0].market_share_ldt, Percent(35.0));
        assert_eq!(countries[0].annual_capacity, 7.0);
        assert_eq!(countries[0].short_name(), "Bangladesh");
        assert_eq!(countries[1].annual_capacity, 0.5);
        assert!(countries[1].key_yards.is_empty());
    }
}

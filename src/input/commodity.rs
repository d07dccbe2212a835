//! Code for reading seaborne commodity volumes from a CSV file.
use super::*;
use crate::commodity::CommodityVolume;
use crate::units::Percent;
use serde::Deserialize;
use std::path::Path;

const COMMODITIES_FILE_NAME: &str = "commodities.csv";

#[derive(Debug, Deserialize, PartialEq)]
struct CommodityVolumeRaw {
    commodity: String,
    #[serde(deserialize_with = "deserialise_figure")]
    volume: f64,
    unit: String,
    vessel_type: String,
    #[serde(deserialize_with = "deserialise_list")]
    top_exporters: Vec<String>,
    #[serde(deserialize_with = "deserialise_list")]
    top_importers: Vec<String>,
    #[serde(deserialize_with = "deserialise_percent")]
    growth: Percent,
}

impl TryFrom<CommodityVolumeRaw> for CommodityVolume {
    type Error = anyhow::Error;

    fn try_from(raw: CommodityVolumeRaw) -> Result<Self> {
        ensure!(
            raw.volume.is_finite() && raw.volume >= 0.0,
            "Volume for commodity {} must be a non-negative number",
            raw.commodity
        );

        Ok(Self {
            name: raw.commodity,
            volume: raw.volume,
            unit: raw.unit,
            vessel_type: raw.vessel_type,
            top_exporters: raw.top_exporters,
            top_importers: raw.top_importers,
            growth: raw.growth,
        })
    }
}

/// Read commodity volumes from the dataset directory.
///
/// # Arguments
///
/// * `dataset_dir` - Folder containing the dataset files
///
/// # Returns
///
/// Commodity volumes in file order, or an error if a volume is negative or missing.
pub fn read_commodities(dataset_dir: &Path) -> Result<Vec<CommodityVolume>> {
    let file_path = dataset_dir.join(COMMODITIES_FILE_NAME);
    read_csv::<CommodityVolumeRaw>(&file_path)?
        .into_iter()
        .map(CommodityVolume::try_from)
        .collect::<Result<_>>()
        .with_context(|| input_err_msg(&file_path))
}

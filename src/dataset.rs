//! The complete set of reference data, loaded from a dataset directory or from the copy embedded
//! in the binary.
use crate::commodity::CommodityVolume;
use crate::company::ShippingCompany;
use crate::forecast::Forecast;
use crate::freight::FreightRate;
use crate::input::commodity::read_commodities;
use crate::input::company::read_companies;
use crate::input::forecast::read_forecasts;
use crate::input::freight::read_freight_rates;
use crate::input::market::{read_alliances, read_market_indices};
use crate::input::port::read_ports;
use crate::input::route::{read_choke_points, read_routes};
use crate::input::shipbuilding::{read_ship_breaking, read_shipbuilding};
use crate::input::vessel::{read_fleet_categories, read_vessel_types};
use crate::input::{input_err_msg, read_toml};
use crate::market::{MarketIndex, ShippingAlliance};
use crate::network::RouteNetwork;
use crate::number::format_share;
use crate::port::PortMap;
use crate::route::{ChokePointMap, RouteMap};
use crate::shipbuilding::{ShipBreakingCountry, ShipbuildingCountry};
use crate::stats::IndustryStats;
use crate::units::Percent;
use crate::vessel::{FleetCategory, VesselMap};
use anyhow::{Context, Result, bail, ensure};
use include_dir::{Dir, DirEntry, include_dir};
use log::{info, warn};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const DATASET_PARAMETERS_FILE_NAME: &str = "dataset.toml";
const INDUSTRY_STATS_FILE_NAME: &str = "industry_stats.toml";

/// The datasets embedded in the binary, one per subdirectory
pub const DATASETS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/data");

fn default_share_tolerance() -> Percent {
    Percent(1.0)
}

/// Represents the contents of `dataset.toml`
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DatasetParameters {
    /// Name of the dataset, used for the default report directory
    pub name: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// How far (in percentage points) a table of market shares may stray from 100
    #[serde(default = "default_share_tolerance")]
    pub share_tolerance: Percent,
    /// Whether share tables outside the tolerance are an error rather than a warning
    #[serde(default)]
    pub strict_shares: bool,
}

impl DatasetParameters {
    /// Read `dataset.toml` from the specified directory
    pub fn from_path<P: AsRef<Path>>(dataset_dir: P) -> Result<DatasetParameters> {
        let file_path = dataset_dir.as_ref().join(DATASET_PARAMETERS_FILE_NAME);
        let params: DatasetParameters = read_toml(&file_path)?;
        params.validate().with_context(|| input_err_msg(file_path))?;

        Ok(params)
    }

    fn validate(&self) -> Result<()> {
        ensure!(!self.name.trim().is_empty(), "Dataset name cannot be empty");
        ensure!(
            self.share_tolerance.is_finite() && self.share_tolerance >= Percent(0.0),
            "share_tolerance must be a finite, non-negative number"
        );

        Ok(())
    }

    /// Check that a table of market shares sums to 100 within the tolerance.
    ///
    /// Out-of-tolerance tables are logged as a warning unless `strict_shares` is set.
    pub fn check_share_sum<I>(&self, table: &str, shares: I) -> Result<()>
    where
        I: IntoIterator<Item = Percent>,
    {
        let total: Percent = shares.into_iter().sum();
        if (total.0 - 100.0).abs() <= self.share_tolerance.0 {
            return Ok(());
        }

        let msg = format!(
            "Shares in {table} sum to {}, not 100% (tolerance {} points)",
            format_share(total),
            self.share_tolerance.0
        );
        if self.strict_shares {
            bail!(msg);
        }
        warn!("{msg}");

        Ok(())
    }
}

/// All of the reference data for the shipping industry
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Contents of `dataset.toml`
    pub parameters: DatasetParameters,
    /// Vessel classes
    pub vessels: VesselMap,
    /// Fleet composition by category
    pub fleet: Vec<FleetCategory>,
    /// Major ports
    pub ports: PortMap,
    /// Maritime choke points
    pub choke_points: ChokePointMap,
    /// Trade routes
    pub routes: RouteMap,
    /// Spot freight rates
    pub freight_rates: Vec<FreightRate>,
    /// Seaborne commodity volumes
    pub commodities: Vec<CommodityVolume>,
    /// Shipbuilding market shares by country
    pub shipbuilding: Vec<ShipbuildingCountry>,
    /// Ship-recycling market shares by country
    pub ship_breaking: Vec<ShipBreakingCountry>,
    /// Shipping companies
    pub companies: Vec<ShippingCompany>,
    /// Industry forecasts
    pub forecasts: Vec<Forecast>,
    /// Freight market indices
    pub market_indices: Vec<MarketIndex>,
    /// Container shipping alliances
    pub alliances: Vec<ShippingAlliance>,
    /// Headline industry figures
    pub stats: IndustryStats,
}

impl Dataset {
    /// Read and validate a dataset from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `dataset_dir` - Folder containing the dataset files
    ///
    /// # Returns
    ///
    /// The loaded [`Dataset`], or an error naming the first invalid file.
    pub fn from_path<P: AsRef<Path>>(dataset_dir: P) -> Result<Dataset> {
        let dataset_dir = dataset_dir.as_ref();
        let parameters = DatasetParameters::from_path(dataset_dir)?;

        let dataset = Dataset {
            vessels: read_vessel_types(dataset_dir)?,
            fleet: read_fleet_categories(dataset_dir)?,
            ports: read_ports(dataset_dir)?,
            choke_points: read_choke_points(dataset_dir)?,
            routes: read_routes(dataset_dir)?,
            freight_rates: read_freight_rates(dataset_dir)?,
            commodities: read_commodities(dataset_dir)?,
            shipbuilding: read_shipbuilding(dataset_dir)?,
            ship_breaking: read_ship_breaking(dataset_dir)?,
            companies: read_companies(dataset_dir)?,
            forecasts: read_forecasts(dataset_dir)?,
            market_indices: read_market_indices(dataset_dir)?,
            alliances: read_alliances(dataset_dir)?,
            stats: read_toml(&dataset_dir.join(INDUSTRY_STATS_FILE_NAME))?,
            parameters,
        };
        dataset.check_shares()?;

        info!(
            "Loaded dataset '{}' from {}",
            dataset.parameters.name,
            dataset_dir.display()
        );

        Ok(dataset)
    }

    /// Check that every table of market shares sums to 100
    fn check_shares(&self) -> Result<()> {
        let params = &self.parameters;
        params.check_share_sum(
            "fleet_categories.csv",
            self.fleet.iter().map(|category| category.market_share),
        )?;
        params.check_share_sum(
            "shipbuilding.csv (gross tonnage)",
            self.shipbuilding.iter().map(|country| country.market_share_gt),
        )?;
        params.check_share_sum(
            "shipbuilding.csv (orders)",
            self.shipbuilding
                .iter()
                .map(|country| country.market_share_orders),
        )?;
        params.check_share_sum(
            "ship_breaking.csv",
            self.ship_breaking
                .iter()
                .map(|country| country.market_share_ldt),
        )?;

        Ok(())
    }

    /// The network linking trade routes to the choke points they pass through
    pub fn route_network(&self) -> RouteNetwork {
        RouteNetwork::new(&self.routes, &self.choke_points)
    }
}

/// Names of the datasets embedded in the binary
pub fn builtin_dataset_names() -> impl Iterator<Item = &'static str> {
    DATASETS_DIR
        .dirs()
        .filter_map(|dir| dir.path().file_name()?.to_str())
}

/// The README for an embedded dataset
pub fn builtin_dataset_readme(name: &str) -> Result<&'static str> {
    let path = Path::new(name).join("README.txt");
    DATASETS_DIR
        .get_file(path)
        .with_context(|| format!("Dataset '{name}' not found."))?
        .contents_utf8()
        .context("README.txt is not UTF-8 encoded")
}

/// Write the files of an embedded dataset to a new directory
pub fn extract_builtin_dataset(name: &str, new_path: &Path) -> Result<()> {
    let sub_dir = DATASETS_DIR
        .get_dir(name)
        .with_context(|| format!("Dataset '{name}' not found."))?;

    ensure!(
        !new_path.exists(),
        "Destination directory {} already exists",
        new_path.display()
    );

    fs::create_dir_all(new_path)?;
    for entry in sub_dir.entries() {
        match entry {
            DirEntry::Dir(dir) => {
                bail!(
                    "Subdirectories in datasets are not supported ({})",
                    dir.path().display()
                )
            }
            DirEntry::File(f) => {
                let file_name = f
                    .path()
                    .file_name()
                    .context("Embedded file has no name")?;
                fs::write(new_path.join(file_name), f.contents())?;
            }
        }
    }

    Ok(())
}

/// Load one of the datasets embedded in the binary
pub fn load_builtin_dataset(name: &str) -> Result<Dataset> {
    let temp_dir = TempDir::new().context("Failed to create temporary directory.")?;
    let dataset_dir = temp_dir.path().join(name);
    extract_builtin_dataset(name, &dataset_dir)?;
    Dataset::from_path(&dataset_dir)
}

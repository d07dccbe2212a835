//! The module responsible for writing report tables to disk.
use crate::commodity::rank_by_volume;
use crate::company::rank_by_market_cap;
use crate::dataset::Dataset;
use crate::network::ChokePointExposure;
use crate::port::{PortID, RegionFilter, major_ports};
use crate::scale::scale_to_percent;
use crate::segment::Segment;
use crate::shipbuilding::{gt_share_bars, ldt_share_bars};
use crate::style::{country_code, ship_breaking_colour, shipbuilding_colour};
use crate::units::{Dollars, Percent};
use anyhow::{Context, Result, ensure};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub mod metadata;

/// The root folder in which dataset-specific report folders will be created
const OUTPUT_DIRECTORY_ROOT: &str = "seaborne_reports";

const FREIGHT_RATES_FILE_NAME: &str = "freight_rates.csv";
const COMPANY_RANKING_FILE_NAME: &str = "company_ranking.csv";
const COMMODITY_VOLUMES_FILE_NAME: &str = "commodity_volumes.csv";
const SHIPBUILDING_SHARES_FILE_NAME: &str = "shipbuilding_shares.csv";
const SHIP_BREAKING_SHARES_FILE_NAME: &str = "ship_breaking_shares.csv";
const MAJOR_PORTS_FILE_NAME: &str = "major_ports.csv";
const CHOKE_POINT_EXPOSURE_FILE_NAME: &str = "choke_point_exposure.csv";

/// The default report folder for a dataset
pub fn get_output_dir(dataset_name: &str) -> PathBuf {
    [OUTPUT_DIRECTORY_ROOT, dataset_name].iter().collect()
}

/// Create a new output directory.
///
/// An existing, non-empty directory is only replaced if `allow_overwrite` is true.
///
/// # Returns
///
/// Whether an existing directory was overwritten
pub fn create_output_directory(output_dir: &Path, allow_overwrite: bool) -> Result<bool> {
    let overwrite = if output_dir.is_dir() {
        if fs::read_dir(output_dir)?.next().is_none() {
            return Ok(false);
        }

        ensure!(
            allow_overwrite,
            "Output folder already exists and is not empty. Please specify a different path or \
            rerun with --overwrite."
        );
        fs::remove_dir_all(output_dir)?;
        true
    } else {
        false
    };

    fs::create_dir_all(output_dir)?;

    Ok(overwrite)
}

/// Write rows to a new CSV file
fn write_csv<T, I>(file_path: &Path, rows: I) -> Result<()>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let mut writer = csv::Writer::from_path(file_path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}

#[derive(Serialize, Debug, PartialEq)]
struct FreightRateRow<'a> {
    vessel: &'a str,
    route: &'a str,
    segment: Segment,
    current_rate: f64,
    unit: &'static str,
    year_ago_rate: f64,
    five_year_average: f64,
    percent_change: f64,
    computed_change: Option<f64>,
    vs_five_year_average: Option<f64>,
    trend_agrees: bool,
    display: String,
}

#[derive(Serialize, Debug, PartialEq)]
struct CompanyRankRow<'a> {
    rank: usize,
    name: &'a str,
    ticker: String,
    market_cap: Option<f64>,
    market_cap_label: String,
    fleet_size: u32,
    revenue: f64,
}

#[derive(Serialize, Debug, PartialEq)]
struct CommodityVolumeRow<'a> {
    rank: usize,
    commodity: &'a str,
    volume: f64,
    unit: &'a str,
    growth: f64,
    bar_width: f64,
}

#[derive(Serialize, Debug, PartialEq)]
struct ShipbuildingShareRow<'a> {
    country: &'a str,
    code: &'static str,
    market_share_gt: f64,
    market_share_orders: f64,
    gt_bar_width: f64,
    orders_bar_width: f64,
    orderbook: u32,
    colour: &'static str,
}

#[derive(Serialize, Debug, PartialEq)]
struct ShipBreakingShareRow<'a> {
    country: &'a str,
    market_share_ldt: f64,
    bar_width: f64,
    annual_capacity: f64,
    method: &'a str,
    colour: &'static str,
}

#[derive(Serialize, Debug, PartialEq)]
struct MajorPortRow<'a> {
    rank: u32,
    port: &'a PortID,
    country: &'a str,
    region: &'static str,
    volume_teu: Option<f64>,
    latitude: f64,
    longitude: f64,
}

fn write_freight_rates(dataset: &Dataset, output_dir: &Path) -> Result<()> {
    let rows = dataset.freight_rates.iter().map(|rate| FreightRateRow {
        vessel: &rate.vessel,
        route: &rate.route,
        segment: rate.segment,
        current_rate: rate.current_rate.value(),
        unit: rate.unit.suffix(),
        year_ago_rate: rate.year_ago_rate.value(),
        five_year_average: rate.five_year_average.value(),
        percent_change: rate.percent_change.value(),
        computed_change: rate.computed_change().map(Percent::value),
        vs_five_year_average: rate.vs_five_year_average().map(Percent::value),
        trend_agrees: rate.trend_agrees(),
        display: rate.display_rate(),
    });
    write_csv(&output_dir.join(FREIGHT_RATES_FILE_NAME), rows)
}

fn write_company_ranking(dataset: &Dataset, output_dir: &Path) -> Result<()> {
    let rows = rank_by_market_cap(&dataset.companies, None)
        .into_iter()
        .enumerate()
        .map(|(i, company)| CompanyRankRow {
            rank: i + 1,
            name: &company.name,
            ticker: company.ticker.to_string(),
            market_cap: company.market_cap.map(Dollars::value),
            market_cap_label: company.display_market_cap(),
            fleet_size: company.fleet_size,
            revenue: company.revenue.value(),
        });
    write_csv(&output_dir.join(COMPANY_RANKING_FILE_NAME), rows)
}

fn write_commodity_volumes(dataset: &Dataset, output_dir: &Path) -> Result<()> {
    let ranked = rank_by_volume(&dataset.commodities);
    let volumes: Vec<_> = ranked.iter().map(|commodity| commodity.volume).collect();
    let rows = ranked
        .iter()
        .zip(scale_to_percent(&volumes))
        .enumerate()
        .map(|(i, (commodity, bar_width))| CommodityVolumeRow {
            rank: i + 1,
            commodity: &commodity.name,
            volume: commodity.volume,
            unit: &commodity.unit,
            growth: commodity.growth.value(),
            bar_width,
        });
    write_csv(&output_dir.join(COMMODITY_VOLUMES_FILE_NAME), rows)
}

fn write_shipbuilding_shares(dataset: &Dataset, output_dir: &Path) -> Result<()> {
    let orders: Vec<_> = dataset
        .shipbuilding
        .iter()
        .map(|country| country.market_share_orders.value())
        .collect();
    let rows = dataset
        .shipbuilding
        .iter()
        .zip(gt_share_bars(&dataset.shipbuilding))
        .zip(scale_to_percent(&orders))
        .map(|((country, gt_bar), orders_bar_width)| ShipbuildingShareRow {
            country: &country.country,
            code: country_code(&country.country),
            market_share_gt: country.market_share_gt.value(),
            market_share_orders: country.market_share_orders.value(),
            gt_bar_width: gt_bar.width,
            orders_bar_width,
            orderbook: country.orderbook,
            colour: shipbuilding_colour(&country.country),
        });
    write_csv(&output_dir.join(SHIPBUILDING_SHARES_FILE_NAME), rows)
}

fn write_ship_breaking_shares(dataset: &Dataset, output_dir: &Path) -> Result<()> {
    let rows = dataset
        .ship_breaking
        .iter()
        .zip(ldt_share_bars(&dataset.ship_breaking))
        .map(|(country, bar)| ShipBreakingShareRow {
            country: country.short_name(),
            market_share_ldt: country.market_share_ldt.value(),
            bar_width: bar.width,
            annual_capacity: country.annual_capacity,
            method: &country.method,
            colour: ship_breaking_colour(country.short_name()),
        });
    write_csv(&output_dir.join(SHIP_BREAKING_SHARES_FILE_NAME), rows)
}

fn write_major_ports(dataset: &Dataset, output_dir: &Path) -> Result<()> {
    let rows = major_ports(&dataset.ports, RegionFilter::All)
        .into_iter()
        .map(|port| MajorPortRow {
            rank: port.rank,
            port: &port.id,
            country: &port.country,
            region: port.region.label(),
            volume_teu: port.volume_teu,
            latitude: port.latitude,
            longitude: port.longitude,
        });
    write_csv(&output_dir.join(MAJOR_PORTS_FILE_NAME), rows)
}

fn write_choke_point_exposure(dataset: &Dataset, output_dir: &Path) -> Result<()> {
    let exposure: Vec<ChokePointExposure> = dataset.route_network().exposure();
    write_csv(&output_dir.join(CHOKE_POINT_EXPOSURE_FILE_NAME), exposure)
}

/// Write every report table for a dataset to the output directory
pub fn write_report(dataset: &Dataset, output_dir: &Path) -> Result<()> {
    let writers: [(&str, fn(&Dataset, &Path) -> Result<()>); 7] = [
        (FREIGHT_RATES_FILE_NAME, write_freight_rates),
        (COMPANY_RANKING_FILE_NAME, write_company_ranking),
        (COMMODITY_VOLUMES_FILE_NAME, write_commodity_volumes),
        (SHIPBUILDING_SHARES_FILE_NAME, write_shipbuilding_shares),
        (SHIP_BREAKING_SHARES_FILE_NAME, write_ship_breaking_shares),
        (MAJOR_PORTS_FILE_NAME, write_major_ports),
        (CHOKE_POINT_EXPOSURE_FILE_NAME, write_choke_point_exposure),
    ];
    for (file_name, write) in writers {
        write(dataset, output_dir).with_context(|| format!("Failed to write {file_name}"))?;
    }

    Ok(())
}

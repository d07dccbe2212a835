//! Code for reading shipping companies from a CSV file.
use super::*;
use crate::company::{ShippingCompany, Ticker};
use crate::units::Dollars;
use serde::Deserialize;
use std::path::Path;

const COMPANIES_FILE_NAME: &str = "companies.csv";

/// Parse a market capitalisation such as `"~$80B (est.)"`, `"$26B"` or `"N/A"`.
///
/// # Returns
///
/// The value (if any) and whether it is an estimate.
pub fn parse_market_cap(s: &str) -> Result<(Option<Dollars>, bool)> {
    let s = s.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("n/a") {
        return Ok((None, false));
    }

    let value = parse_magnitude_figure(s)?;
    ensure!(value >= 0.0, "Market capitalisation cannot be negative");
    let estimated = s.starts_with('~') || s.contains("est.");

    Ok((Some(Dollars(value)), estimated))
}

#[derive(Debug, Deserialize, PartialEq)]
struct ShippingCompanyRaw {
    name: String,
    ticker: String,
    market_cap: String,
    fleet: String,
    headquarters: String,
    segment: String,
    revenue: String,
}

impl TryFrom<ShippingCompanyRaw> for ShippingCompany {
    type Error = anyhow::Error;

    fn try_from(raw: ShippingCompanyRaw) -> Result<Self> {
        let context = || format!("Invalid figures for company {}", raw.name);
        let (market_cap, market_cap_estimated) =
            parse_market_cap(&raw.market_cap).with_context(context)?;
        let fleet_size = parse_count(&raw.fleet).with_context(context)?;
        let revenue = Dollars(parse_magnitude_figure(&raw.revenue).with_context(context)?);

        Ok(Self {
            name: raw.name,
            ticker: Ticker::from_label(&raw.ticker),
            market_cap,
            market_cap_estimated,
            fleet: raw.fleet,
            fleet_size,
            headquarters: raw.headquarters,
            segment: raw.segment,
            revenue,
        })
    }
}

/// Read shipping companies from the dataset directory
pub fn read_companies(dataset_dir: &Path) -> Result<Vec<ShippingCompany>> {
    let file_path = dataset_dir.join(COMPANIES_FILE_NAME);
    read_csv::<ShippingCompanyRaw>(&file_path)?
        .into_iter()
        .map(ShippingCompany::try_from)
        .collect::<Result<_>>()
        .with_context(|| input_err_msg(&file_path))
}

//! Code for reading freight rates from a CSV file.
use super::*;
use crate::freight::{FreightRate, RateUnit, Trend};
use crate::number::format_signed_percent;
use crate::segment::{Segment, classify_label};
use crate::units::{Dollars, Percent};
use log::warn;
use serde::Deserialize;
use std::path::Path;

const FREIGHT_RATES_FILE_NAME: &str = "freight_rates.csv";

#[derive(Debug, Deserialize, PartialEq)]
struct FreightRateRaw {
    vessel: String,
    route: String,
    segment: Option<Segment>,
    #[serde(deserialize_with = "deserialise_dollars")]
    current_rate: Dollars,
    unit: RateUnit,
    #[serde(deserialize_with = "deserialise_dollars")]
    year_ago_rate: Dollars,
    #[serde(deserialize_with = "deserialise_dollars")]
    five_year_average: Dollars,
    trend: Trend,
    #[serde(deserialize_with = "deserialise_percent")]
    percent_change: Percent,
}

/// Fill in a missing segment from the vessel label and check the rest of the record.
///
/// Inconsistencies between the authored fields are logged rather than treated as errors.
fn convert_freight_rate(raw: FreightRateRaw) -> FreightRate {
    let classified = classify_label(&raw.vessel);
    let segment = match raw.segment {
        Some(segment) => {
            if segment != classified {
                warn!(
                    "Freight rate for {} ({}) is in segment {segment}, but its label suggests {classified}",
                    raw.vessel, raw.route
                );
            }
            segment
        }
        None => classified,
    };

    let rate = FreightRate {
        vessel: raw.vessel,
        route: raw.route,
        segment,
        current_rate: raw.current_rate,
        unit: raw.unit,
        year_ago_rate: raw.year_ago_rate,
        five_year_average: raw.five_year_average,
        trend: raw.trend,
        percent_change: raw.percent_change,
    };

    if !rate.trend_agrees() {
        warn!(
            "Freight rate for {} ({}) has trend '{:?}' but a change of {}",
            rate.vessel,
            rate.route,
            rate.trend,
            rate.display_change()
        );
    }
    if !rate.change_matches_rates() {
        let computed = rate.computed_change().unwrap_or_default();
        warn!(
            "Freight rate for {} ({}) gives a change of {}, but the rates imply {}",
            rate.vessel,
            rate.route,
            rate.display_change(),
            format_signed_percent(computed)
        );
    }

    rate
}

/// Read freight rates from the dataset directory.
///
/// # Arguments
///
/// * `dataset_dir` - Folder containing the dataset files
///
/// # Returns
///
/// The freight rates in file order, or an error.
pub fn read_freight_rates(dataset_dir: &Path) -> Result<Vec<FreightRate>> {
    let file_path = dataset_dir.join(FREIGHT_RATES_FILE_NAME);
    let rates = read_csv::<FreightRateRaw>(&file_path)?
        .into_iter()
        .map(convert_freight_rate)
        .collect();

    Ok(rates)
}

//! Code for reading industry forecasts from a CSV file.
use super::*;
use crate::forecast::{Forecast, Impact, Timeframe};
use crate::style::{confidence_from_label, lookup_confidence};
use log::warn;
use serde::Deserialize;
use std::path::Path;

const FORECASTS_FILE_NAME: &str = "forecasts.csv";

#[derive(Debug, Deserialize, PartialEq)]
struct ForecastRaw {
    title: String,
    timeframe: String,
    description: String,
    impact: Impact,
    confidence: String,
    #[serde(deserialize_with = "deserialise_list")]
    details: Vec<String>,
}

impl TryFrom<ForecastRaw> for Forecast {
    type Error = anyhow::Error;

    fn try_from(raw: ForecastRaw) -> Result<Self> {
        let timeframe = Timeframe::parse(&raw.timeframe)
            .with_context(|| format!("Invalid timeframe for forecast {}", raw.title))?;
        if lookup_confidence(&raw.confidence).is_none() {
            warn!(
                "Unknown confidence level '{}' for forecast {}; treating as Medium",
                raw.confidence, raw.title
            );
        }

        Ok(Self {
            confidence: confidence_from_label(&raw.confidence),
            title: raw.title,
            timeframe,
            description: raw.description,
            impact: raw.impact,
            details: raw.details,
        })
    }
}

/// Read industry forecasts from the dataset directory
pub fn read_forecasts(dataset_dir: &Path) -> Result<Vec<Forecast>> {
    let file_path = dataset_dir.join(FORECASTS_FILE_NAME);
    read_csv::<ForecastRaw>(&file_path)?
        .into_iter()
        .map(Forecast::try_from)
        .collect::<Result<_>>()
        .with_context(|| input_err_msg(&file_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::Confidence;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn create_forecasts_file(dir_path: &Path, rows: &str) {
        let mut file = File::create(dir_path.join(FORECASTS_FILE_NAME)).unwrap();
        writeln!(
            file,
            "title,timeframe,description,impact,confidence,details\n{rows}"
        )
        .unwrap();
    }

    #[test]
    fn test_read_forecasts() {
        let dir = tempdir().unwrap();
        create_forecasts_file(
            dir.path(),
            "Trade Growth,2025-2030,Growth,positive,High,Asia leads; Africa emerging
Red Sea,2024-2026,Diversions,negative,low,Longer voyages
Autonomy,2030,Trials,neutral,Speculative,",
        );
        let forecasts = read_forecasts(dir.path()).unwrap();
        assert_eq!(forecasts.len(), 3);
        assert_eq!(forecasts[0].timeframe, Timeframe { start: 2025, end: 2030 });
        assert_eq!(forecasts[0].impact, Impact::Positive);
        assert_eq!(forecasts[0].details, ["Asia leads", "Africa emerging"]);
        assert_eq!(forecasts[1].confidence, Confidence::Low);

        // Unknown confidence falls back to Medium
        assert_eq!(forecasts[2].confidence, Confidence::Medium);
        assert_eq!(forecasts[2].timeframe, Timeframe { start: 2030, end: 2030 });
        assert!(forecasts[2].details.is_empty());
    }

    #[test]
    fn test_read_forecasts_bad_timeframe() {
        let dir = tempdir().unwrap();
        create_forecasts_file(dir.path(), "Backwards,2030-2025,Oops,neutral,High,");
        let err = read_forecasts(dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("Invalid timeframe for forecast Backwards"));
    }

    #[test]
    fn test_read_forecasts_bad_impact() {
        let dir = tempdir().unwrap();
        create_forecasts_file(dir.path(), "Odd,2025,Oops,catastrophic,High,");
        assert!(read_forecasts(dir.path()).is_err());
    }
}

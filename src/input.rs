//! Common routines for handling input data.
use crate::id::{HasID, IDLike};
use crate::number::{parse_magnitude, try_parse_decorated_number};
use crate::units::{Dollars, Percent};
use anyhow::{Context, Result, bail, ensure};
use indexmap::IndexMap;
use serde::de::{Deserialize, DeserializeOwned, Deserializer};
use std::fs;
use std::path::Path;

pub mod commodity;
pub mod company;
pub mod forecast;
pub mod freight;
pub mod market;
pub mod port;
pub mod route;
pub mod shipbuilding;
pub mod vessel;

/// The separator used for list-valued columns in CSV files
const LIST_SEPARATOR: char = ';';

/// Read a series of type `T`s from a CSV file.
///
/// Will raise an error if the file is empty.
///
/// # Arguments
///
/// * `file_path` - Path to the CSV file
pub fn read_csv<T: DeserializeOwned>(file_path: &Path) -> Result<Vec<T>> {
    let vec = read_csv_internal(file_path)?;
    ensure!(!vec.is_empty(), "CSV file {} cannot be empty", file_path.display());

    Ok(vec)
}

fn read_csv_internal<T: DeserializeOwned>(file_path: &Path) -> Result<Vec<T>> {
    let vec = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(file_path)
        .with_context(|| input_err_msg(file_path))?
        .into_deserialize()
        .collect::<Result<Vec<T>, _>>()
        .with_context(|| input_err_msg(file_path))?;

    Ok(vec)
}

/// Parse a TOML file at the specified path.
///
/// # Arguments
///
/// * `file_path` - Path to the TOML file
///
/// # Returns
///
/// * The deserialised TOML data or an error if the file could not be read or parsed.
pub fn read_toml<T: DeserializeOwned>(file_path: &Path) -> Result<T> {
    let toml_str = fs::read_to_string(file_path).with_context(|| input_err_msg(file_path))?;
    let toml_data = toml::from_str(&toml_str).with_context(|| input_err_msg(file_path))?;
    Ok(toml_data)
}

/// Format an error message to include the file path. To be used with `anyhow::Context`.
pub fn input_err_msg<P: AsRef<Path>>(file_path: P) -> String {
    format!("Error reading {}", file_path.as_ref().display())
}

/// Read records with unique IDs from a CSV file, converting each raw row with `convert`.
///
/// # Returns
///
/// A map of records keyed by ID, in file order, or an error if a row could not be converted or an
/// ID appears more than once.
pub fn read_csv_id_file<Raw, T, ID, F>(file_path: &Path, convert: F) -> Result<IndexMap<ID, T>>
where
    Raw: DeserializeOwned,
    T: HasID<ID>,
    ID: IDLike,
    F: Fn(Raw) -> Result<T>,
{
    let mut map = IndexMap::new();
    for raw in read_csv::<Raw>(file_path)? {
        let record = convert(raw).with_context(|| input_err_msg(file_path))?;
        let id = record.get_id().clone();
        ensure!(
            map.insert(id.clone(), record).is_none(),
            "{}: Duplicate ID found: {id}",
            input_err_msg(file_path)
        );
    }

    Ok(map)
}

/// Split a list-valued cell (e.g. `"Iron Ore; Coal; Bauxite"`) into its trimmed, non-empty items
pub fn split_list(s: &str) -> Vec<String> {
    s.split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Read a semicolon-separated list of strings
pub fn deserialise_list<'de, D>(deserialiser: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: String = Deserialize::deserialize(deserialiser)?;
    Ok(split_list(&value))
}

/// Parse a required figure from a decorated string, e.g. `"$25,500"`
pub fn parse_figure(s: &str) -> Result<f64> {
    let Some(value) = try_parse_decorated_number(s) else {
        bail!("No numeric value found in \"{s}\"");
    };

    Ok(value)
}

/// Parse an optional figure, where an empty cell or `N/A` means no value
pub fn parse_optional_figure(s: &str) -> Result<Option<f64>> {
    let s = s.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("n/a") {
        return Ok(None);
    }

    parse_figure(s).map(Some)
}

/// Parse a figure with a magnitude suffix, e.g. `"$5.3 trillion/year"` or `"7M LDT"`
pub fn parse_magnitude_figure(s: &str) -> Result<f64> {
    let Some(value) = parse_magnitude(s) else {
        bail!("No numeric value found in \"{s}\"");
    };

    Ok(value)
}

/// Parse a percentage share (e.g. `"42%"` or `"~29%"`), checking that it is between 0 and 100
pub fn parse_share(s: &str) -> Result<Percent> {
    let share = Percent(parse_figure(s)?);
    ensure!(
        share.is_valid_share(),
        "Share must be between 0 and 100 (got \"{s}\")"
    );

    Ok(share)
}

/// Parse a non-negative count (e.g. `"800+ vessels"`)
pub fn parse_count(s: &str) -> Result<u32> {
    let value = parse_figure(s)?;
    ensure!(
        value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX),
        "Expected a whole, non-negative number (got \"{s}\")"
    );

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Ok(value as u32)
}

/// Read a required decorated figure, e.g. `"$25,500"` or `"+112.5%"`
pub fn deserialise_figure<'de, D>(deserialiser: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value: String = Deserialize::deserialize(deserialiser)?;
    parse_figure(&value).map_err(serde::de::Error::custom)
}

/// Read a signed percentage, e.g. `"-26.7%"`
pub fn deserialise_percent<'de, D>(deserialiser: D) -> Result<Percent, D::Error>
where
    D: Deserializer<'de>,
{
    deserialise_figure(deserialiser).map(Percent)
}

/// Read a percentage share, checking that it is between 0 and 100
pub fn deserialise_share<'de, D>(deserialiser: D) -> Result<Percent, D::Error>
where
    D: Deserializer<'de>,
{
    let value: String = Deserialize::deserialize(deserialiser)?;
    parse_share(&value).map_err(serde::de::Error::custom)
}

/// Read an amount of money as authored, e.g. `"$25,500"`
pub fn deserialise_dollars<'de, D>(deserialiser: D) -> Result<Dollars, D::Error>
where
    D: Deserializer<'de>,
{
    deserialise_figure(deserialiser).map(Dollars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::{GenericID, define_id_getter};
    use serde::Deserialize;
    use std::fs::File;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Record {
        id: GenericID,
        #[serde(deserialize_with = "deserialise_figure")]
        value: f64,
        #[serde(deserialize_with = "deserialise_list")]
        tags: Vec<String>,
    }
    define_id_getter! {Record, GenericID, id}

    /// Create an example CSV file in dir_path
    fn create_csv_file(dir_path: &Path, contents: &str) -> PathBuf {
        let file_path = dir_path.join("test.csv");
        let mut file = File::create(&file_path).unwrap();
        writeln!(file, "{contents}").unwrap();
        file_path
    }

    #[test]
    fn test_read_csv() {
        let dir = tempdir().unwrap();
        let file_path = create_csv_file(
            dir.path(),
            "id,value,tags\nCapesize,\"$25,500\",Iron Ore; Coal\nVLCC, -23.6% ,",
        );
        let records: Vec<Record> = read_csv(&file_path).unwrap();
        assert_eq!(
            records,
            [
                Record {
                    id: "Capesize".into(),
                    value: 25_500.0,
                    tags: vec!["Iron Ore".into(), "Coal".into()]
                },
                Record {
                    id: "VLCC".into(),
                    value: -23.6,
                    tags: Vec::new()
                }
            ]
        );

        // File with no data rows
        let file_path = create_csv_file(dir.path(), "id,value,tags");
        assert!(read_csv::<Record>(&file_path).is_err());
    }

    #[test]
    fn test_read_csv_bad_figure() {
        let dir = tempdir().unwrap();
        let file_path = create_csv_file(dir.path(), "id,value,tags\nCapesize,N/A,");
        let err = read_csv::<Record>(&file_path).unwrap_err();
        assert_eq!(err.to_string(), input_err_msg(&file_path));
        assert!(format!("{err:#}").contains("No numeric value found in \"N/A\""));
    }

    #[test]
    fn test_read_csv_id_file() {
        let dir = tempdir().unwrap();
        let file_path = create_csv_file(dir.path(), "id,value,tags\nA,1,\nB,2,");
        let map = read_csv_id_file(&file_path, |raw: Record| Ok(raw)).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get_index(0).unwrap().0, &GenericID::new("A"));

        let file_path = create_csv_file(dir.path(), "id,value,tags\nA,1,\nA,2,");
        let result = read_csv_id_file(&file_path, |raw: Record| Ok(raw));
        assert!(
            result
                .unwrap_err()
                .to_string()
                .ends_with("Duplicate ID found: A")
        );
    }

    #[test]
    fn test_read_toml() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Parameters {
            name: String,
        }

        let dir = tempdir().unwrap();
        let file_path = dir.path().join("dataset.toml");
        {
            let mut file = File::create(&file_path).unwrap();
            writeln!(file, "name = \"reference\"").unwrap();
        }
        let parameters: Parameters = read_toml(&file_path).unwrap();
        assert_eq!(parameters.name, "reference");

        assert!(read_toml::<Parameters>(&dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list(" a ;b;; c "), ["a", "b", "c"]);
        assert!(split_list("").is_empty());
    }

    #[test]
    fn test_parse_optional_figure() {
        assert_eq!(parse_optional_figure("49.7M TEU").unwrap(), Some(49.7));
        assert_eq!(parse_optional_figure("N/A").unwrap(), None);
        assert_eq!(parse_optional_figure(" ").unwrap(), None);
        assert!(parse_optional_figure("unknown").is_err());
    }

    #[test]
    fn test_parse_share() {
        assert_eq!(parse_share("42%").unwrap(), Percent(42.0));
        assert_eq!(parse_share("~29%").unwrap(), Percent(29.0));
        assert!(parse_share("-3%").is_err());
        assert!(parse_share("140%").is_err());
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("3,200+ vessels").unwrap(), 3200);
        assert!(parse_count("2.5 vessels").is_err());
        assert!(parse_count("-1").is_err());
    }

    #[test]
    fn test_parse_magnitude_figure() {
        assert_eq!(parse_magnitude_figure("7M LDT").unwrap(), 7e6);
        assert!(parse_magnitude_figure("N/A").is_err());
    }
}

//! Code for reading ports from a CSV file.
use super::*;
use crate::port::{Port, PortMap, Region, check_port_ranks};
use serde::Deserialize;
use std::path::Path;

const PORTS_FILE_NAME: &str = "ports.csv";

#[derive(Debug, Deserialize, PartialEq)]
struct PortRaw {
    name: String,
    country: String,
    region: Region,
    volume_teu: String,
    volume_tonnes: String,
    rank: u32,
    #[serde(rename = "type")]
    kind: String,
    description: String,
    #[serde(deserialize_with = "deserialise_list")]
    key_trades: Vec<String>,
    latitude: f64,
    longitude: f64,
}

impl TryFrom<PortRaw> for Port {
    type Error = anyhow::Error;

    fn try_from(raw: PortRaw) -> Result<Self> {
        let context = || format!("Invalid volume for port {}", raw.name);
        let volume_teu = parse_optional_figure(&raw.volume_teu).with_context(context)?;
        let volume_tonnes = parse_figure(&raw.volume_tonnes).with_context(context)?;
        for volume in volume_teu.iter().chain([&volume_tonnes]) {
            ensure!(
                volume.is_finite() && *volume >= 0.0,
                "Volume for port {} cannot be negative",
                raw.name
            );
        }
        ensure!(
            (-90.0..=90.0).contains(&raw.latitude) && (-180.0..=180.0).contains(&raw.longitude),
            "Invalid coordinates for port {}",
            raw.name
        );

        Ok(Self {
            id: raw.name.into(),
            country: raw.country,
            region: raw.region,
            volume_teu,
            volume_tonnes,
            rank: raw.rank,
            kind: raw.kind,
            description: raw.description,
            key_trades: raw.key_trades,
            latitude: raw.latitude,
            longitude: raw.longitude,
        })
    }
}

/// Read ports from the dataset directory.
///
/// # Arguments
///
/// * `dataset_dir` - Folder containing the dataset files
///
/// # Returns
///
/// A map of ports keyed by name, in file order, or an error if a row is invalid or the ranks are
/// not `1..=n`.
pub fn read_ports(dataset_dir: &Path) -> Result<PortMap> {
    let file_path = dataset_dir.join(PORTS_FILE_NAME);
    let ports = read_csv_id_file::<PortRaw, _, _, _>(&file_path, Port::try_from)?;
    check_port_ranks(&ports).with_context(|| input_err_msg(&file_path))?;

    Ok(ports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::assert_error;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    const HEADER: &str =
        "name,country,region,volume_teu,volume_tonnes,rank,type,description,key_trades,latitude,longitude";

    fn create_ports_file(dir_path: &Path, rows: &[&str]) {
        let mut file = File::create(dir_path.join(PORTS_FILE_NAME)).unwrap();
        writeln!(file, "{HEADER}").unwrap();
        for row in rows {
            writeln!(file, "{row}").unwrap();
        }
    }

    #[test]
    fn test_read_ports() {
        let dir = tempdir().unwrap();
        create_ports_file(
            dir.path(),
            &[
                "Shanghai,China,East Asia,49.7M TEU,776M tonnes,1,Container & Bulk,Busy,Electronics; Machinery,31.23,121.47",
                "Port Hedland,Australia,Oceania,N/A,\"1,260M tonnes\",2,Bulk,Ore,Iron Ore,-20.31,118.58",
            ],
        );
        let ports = read_ports(dir.path()).unwrap();
        let shanghai = &ports["Shanghai"];
        assert_eq!(shanghai.region, Region::EastAsia);
        assert_eq!(shanghai.volume_teu, Some(49.7));
        assert_eq!(shanghai.kind, "Container & Bulk");
        let hedland = &ports["Port Hedland"];
        assert_eq!(hedland.volume_teu, None);
        assert_eq!(hedland.volume_tonnes, 1260.0);
    }

    #[test]
    fn test_read_ports_duplicate_rank() {
        let dir = tempdir().unwrap();
        create_ports_file(
            dir.path(),
            &[
                "Shanghai,China,East Asia,49.7M TEU,776M tonnes,1,Container,Busy,,31.23,121.47",
                "Singapore,Singapore,Southeast Asia,39.0M TEU,590M tonnes,1,Container,Hub,,1.26,103.84",
            ],
        );
        let err = read_ports(dir.path()).unwrap_err();
        assert_eq!(
            err.chain().nth(1).unwrap().to_string(),
            "Rank 1 is used by more than one port (including Singapore)"
        );
    }

    #[test]
    fn test_read_ports_unknown_region() {
        let dir = tempdir().unwrap();
        create_ports_file(
            dir.path(),
            &["McMurdo,Antarctica,Antarctica,N/A,1M tonnes,1,Research,Cold,,-77.84,166.68"],
        );
        let file_path = dir.path().join(PORTS_FILE_NAME);
        assert_error!(read_ports(dir.path()), input_err_msg(file_path));
    }

    #[test]
    fn test_read_ports_missing_tonnes() {
        let dir = tempdir().unwrap();
        create_ports_file(
            dir.path(),
            &["Shanghai,China,East Asia,49.7M TEU,N/A,1,Container,Busy,,31.23,121.47"],
        );
        let err = read_ports(dir.path()).unwrap_err();
        assert_eq!(
            err.chain().nth(1).unwrap().to_string(),
            "Invalid volume for port Shanghai"
        );
    }
}

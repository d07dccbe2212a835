//! The world's major ports and their ranking by throughput.
use crate::id::{define_id_getter, define_id_type};
use anyhow::{Result, bail, ensure};
use indexmap::IndexMap;
use serde_string_enum::{DeserializeLabeledStringEnum, SerializeStringEnum};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use strum::{EnumIter, IntoEnumIterator};

define_id_type! {PortID}

/// A map of [`Port`]s, keyed by port name
pub type PortMap = IndexMap<PortID, Port>;

/// A world region used to group ports
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    SerializeStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Region {
    #[allow(missing_docs)]
    #[string = "East Asia"]
    EastAsia,
    #[allow(missing_docs)]
    #[string = "Southeast Asia"]
    SoutheastAsia,
    #[allow(missing_docs)]
    #[string = "Europe"]
    Europe,
    #[allow(missing_docs)]
    #[string = "Middle East"]
    MiddleEast,
    #[allow(missing_docs)]
    #[string = "Oceania"]
    Oceania,
    #[allow(missing_docs)]
    #[string = "South America"]
    SouthAmerica,
    #[allow(missing_docs)]
    #[string = "North America"]
    NorthAmerica,
}

impl Region {
    /// The display label for the region
    pub fn label(self) -> &'static str {
        match self {
            Self::EastAsia => "East Asia",
            Self::SoutheastAsia => "Southeast Asia",
            Self::Europe => "Europe",
            Self::MiddleEast => "Middle East",
            Self::Oceania => "Oceania",
            Self::SouthAmerica => "South America",
            Self::NorthAmerica => "North America",
        }
    }

    /// Whether the region is in the Americas
    pub fn is_americas(self) -> bool {
        matches!(self, Self::NorthAmerica | Self::SouthAmerica)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// A filter for selecting ports by region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegionFilter {
    /// Accept every region
    #[default]
    All,
    /// Accept North and South America
    Americas,
    /// Accept only the given region
    Only(Region),
}

impl RegionFilter {
    /// Whether the filter accepts `region`
    pub fn matches(self, region: Region) -> bool {
        match self {
            Self::All => true,
            Self::Americas => region.is_americas(),
            Self::Only(wanted) => wanted == region,
        }
    }
}

impl FromStr for RegionFilter {
    type Err = anyhow::Error;

    /// Parse a filter from `all`, `americas` or a region name (e.g. `"East Asia"` or
    /// `east-asia`), ignoring case
    fn from_str(s: &str) -> Result<Self> {
        let normalised = s.trim().replace(['-', '_'], " ").to_lowercase();
        match normalised.as_str() {
            "all" => return Ok(Self::All),
            "americas" => return Ok(Self::Americas),
            _ => {}
        }

        let Some(region) = Region::iter().find(|region| region.label().to_lowercase() == normalised)
        else {
            bail!("Unknown region \"{s}\"");
        };

        Ok(Self::Only(region))
    }
}

/// A major port
#[derive(Debug, Clone, PartialEq)]
pub struct Port {
    /// Port name
    pub id: PortID,
    /// Country the port is in
    pub country: String,
    /// Region the port is in
    pub region: Region,
    /// Container throughput in million TEU per year, for ports which handle containers
    pub volume_teu: Option<f64>,
    /// Cargo throughput in million tonnes per year
    pub volume_tonnes: f64,
    /// Position in the world ranking, starting from 1
    pub rank: u32,
    /// What kind of port it is, e.g. `"Container & Bulk"`
    pub kind: String,
    /// Free-text description
    pub description: String,
    /// Main trades handled
    pub key_trades: Vec<String>,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}
define_id_getter! {Port, PortID, id}

/// Select the ports accepted by `filter`, ordered by rank.
///
/// The sort is stable, so ports sharing a rank keep their input order.
pub fn major_ports(ports: &PortMap, filter: RegionFilter) -> Vec<&Port> {
    let mut selected: Vec<_> = ports
        .values()
        .filter(|port| filter.matches(port.region))
        .collect();
    selected.sort_by_key(|port| port.rank);
    selected
}

/// Check that port ranks are unique and form the sequence `1..=n`
pub fn check_port_ranks(ports: &PortMap) -> Result<()> {
    let mut seen = HashSet::new();
    for port in ports.values() {
        ensure!(
            seen.insert(port.rank),
            "Rank {} is used by more than one port (including {})",
            port.rank,
            port.id
        );
    }

    let expected = u32::try_from(ports.len())?;
    for rank in 1..=expected {
        ensure!(
            seen.contains(&rank),
            "Port ranks must run from 1 to {expected} with no gaps (missing {rank})"
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{assert_error, port, port_map};
    use itertools::assert_equal;
    use rstest::rstest;

    #[rstest]
    #[case("all", RegionFilter::All)]
    #[case("Americas", RegionFilter::Americas)]
    #[case("East Asia", RegionFilter::Only(Region::EastAsia))]
    #[case("east-asia", RegionFilter::Only(Region::EastAsia))]
    #[case("MIDDLE_EAST", RegionFilter::Only(Region::MiddleEast))]
    fn test_region_filter_from_str(#[case] s: &str, #[case] expected: RegionFilter) {
        assert_eq!(s.parse::<RegionFilter>().unwrap(), expected);
    }

    #[test]
    fn test_region_filter_from_str_bad() {
        assert_error!("Antarctica".parse::<RegionFilter>(), "Unknown region \"Antarctica\"");
    }

    #[rstest]
    fn test_major_ports(port_map: PortMap) {
        assert_equal(
            major_ports(&port_map, RegionFilter::All)
                .iter()
                .map(|port| port.rank),
            [1, 2, 3],
        );
        assert_equal(
            major_ports(&port_map, RegionFilter::Americas)
                .iter()
                .map(|port| &*port.id.0),
            ["Santos"],
        );
        assert!(major_ports(&port_map, RegionFilter::Only(Region::Oceania)).is_empty());
    }

    #[test]
    fn test_major_ports_ties_keep_input_order() {
        let ports: PortMap = [("B", 2), ("A1", 1), ("A2", 1)]
            .into_iter()
            .map(|(name, rank)| {
                let port = Port {
                    id: name.into(),
                    rank,
                    ..port()
                };
                (port.id.clone(), port)
            })
            .collect();
        assert_equal(
            major_ports(&ports, RegionFilter::All)
                .iter()
                .map(|port| &*port.id.0),
            ["A1", "A2", "B"],
        );
    }

    #[rstest]
    fn test_check_port_ranks(mut port_map: PortMap) {
        assert!(check_port_ranks(&port_map).is_ok());

        port_map[1].rank = 1;
        assert_error!(
            check_port_ranks(&port_map),
            "Rank 1 is used by more than one port (including Rotterdam)"
        );

        port_map[1].rank = 4;
        assert_error!(
            check_port_ranks(&port_map),
            "Port ranks must run from 1 to 3 with no gaps (missing 2)"
        );
    }
}

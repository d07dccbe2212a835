//! Code for reading trade routes and choke points from CSV files.
use super::*;
use crate::number::parse_range;
use crate::route::{CargoClass, ChokePoint, ChokePointMap, RouteMap, ShippingRoute};
use crate::units::Dollars;
use serde::Deserialize;
use std::path::Path;

const CHOKE_POINTS_FILE_NAME: &str = "choke_points.csv";
const ROUTES_FILE_NAME: &str = "routes.csv";

#[derive(Debug, Deserialize, PartialEq)]
struct ChokePointRaw {
    name: String,
    location: String,
    daily_transits: String,
    oil_flow: String,
    trade_value: String,
    width: String,
    depth: String,
    risk: String,
}

impl TryFrom<ChokePointRaw> for ChokePoint {
    type Error = anyhow::Error;

    fn try_from(raw: ChokePointRaw) -> Result<Self> {
        let context = || format!("Invalid figures for choke point {}", raw.name);
        Ok(Self {
            daily_transits: parse_figure(&raw.daily_transits).with_context(context)?,
            oil_flow: parse_figure(&raw.oil_flow).with_context(context)?,
            trade_value: Dollars(parse_magnitude_figure(&raw.trade_value).with_context(context)?),
            id: raw.name.into(),
            location: raw.location,
            width: raw.width,
            depth: raw.depth,
            risk: raw.risk,
        })
    }
}

/// Read choke points from the dataset directory
pub fn read_choke_points(dataset_dir: &Path) -> Result<ChokePointMap> {
    read_csv_id_file::<ChokePointRaw, _, _, _>(
        &dataset_dir.join(CHOKE_POINTS_FILE_NAME),
        ChokePoint::try_from,
    )
}

#[derive(Debug, Deserialize, PartialEq)]
struct ShippingRouteRaw {
    name: String,
    origin: String,
    destination: String,
    distance: String,
    transit_time: String,
    cargo_type: String,
    volume: String,
    description: String,
    #[serde(deserialize_with = "deserialise_list")]
    choke_points: Vec<String>,
}

impl TryFrom<ShippingRouteRaw> for ShippingRoute {
    type Error = anyhow::Error;

    fn try_from(raw: ShippingRouteRaw) -> Result<Self> {
        let distance = parse_figure(&raw.distance)
            .with_context(|| format!("Invalid distance for route {}", raw.name))?;
        let transit_time = parse_range(&raw.transit_time)
            .with_context(|| format!("Invalid transit time for route {}", raw.name))?;

        Ok(Self {
            id: raw.name.into(),
            origin: raw.origin,
            destination: raw.destination,
            distance,
            transit_time,
            cargo_class: CargoClass::classify(&raw.cargo_type),
            cargo_type: raw.cargo_type,
            volume: raw.volume,
            description: raw.description,
            choke_points: raw.choke_points.into_iter().map(Into::into).collect(),
        })
    }
}

/// Read trade routes from the dataset directory.
///
/// Choke point names are not required to have a record in `choke_points.csv`, as routes also name
/// open-water waypoints such as the Cape of Good Hope.
pub fn read_routes(dataset_dir: &Path) -> Result<RouteMap> {
    read_csv_id_file::<ShippingRouteRaw, _, _, _>(&dataset_dir.join(ROUTES_FILE_NAME), ShippingRoute::try_from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::ChokePointID;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_file(dir_path: &Path, file_name: &str, contents: &str) {
        let mut file = File::create(dir_path.join(file_name)).unwrap();
        writeln!(file, "{contents}").unwrap();
    }

    #[test]
    fn test_read_choke_points() {
        let dir = tempdir().unwrap();
        write_file(
            dir.path(),
            CHOKE_POINTS_FILE_NAME,
            "name,location,daily_transits,oil_flow,trade_value,width,depth,risk
Strait of Malacca,Singapore/Malaysia,~100 vessels,16M bbl/day,$5.3 trillion/year,2.8 km,25m,Piracy
Panama Canal,Panama,~40 vessels,0.9M bbl/day,$270B/year,55m,15.2m,Drought",
        );
        let choke_points = read_choke_points(dir.path()).unwrap();
        let malacca = &choke_points["Strait of Malacca"];
        assert_eq!(malacca.daily_transits, 100.0);
        assert_eq!(malacca.oil_flow, 16.0);
        assert!((malacca.trade_value.0 - 5.3e12).abs() < 1.0);
        assert_eq!(choke_points["Panama Canal"].trade_value, Dollars(270e9));
    }

    #[test]
    fn test_read_routes() {
        let dir = tempdir().unwrap();
        write_file(
            dir.path(),
            ROUTES_FILE_NAME,
            "name,origin,destination,distance,transit_time,cargo_type,volume,description,choke_points
Brazil - China Iron Ore,Tubarão,Qingdao,\"11,500 nm\",35-42 days,Iron Ore (Bulk),350M tonnes/year,Long,Cape of Good Hope
Qatar - Asia LNG,Ras Laffan,Tokyo,\"6,800 nm\",16-20 days,LNG,80M tonnes/year,Gas,Strait of Hormuz; Strait of Malacca",
        );
        let routes = read_routes(dir.path()).unwrap();
        let iron_ore = &routes["Brazil - China Iron Ore"];
        assert_eq!(iron_ore.distance, 11_500.0);
        assert_eq!(iron_ore.transit_time.min, 35.0);
        assert_eq!(iron_ore.transit_time.max, 42.0);
        assert_eq!(iron_ore.cargo_class, CargoClass::DryBulk);
        let lng = &routes["Qatar - Asia LNG"];
        assert_eq!(lng.cargo_class, CargoClass::Gas);
        assert_eq!(
            lng.choke_points,
            [
                ChokePointID::new("Strait of Hormuz"),
                ChokePointID::new("Strait of Malacca")
            ]
        );
    }

    #[test]
    fn test_read_routes_bad_distance() {
        let dir = tempdir().unwrap();
        write_file(
            dir.path(),
            ROUTES_FILE_NAME,
            "name,origin,destination,distance,transit_time,cargo_type,volume,description,choke_points
Nowhere,A,B,far,1 day,Containers,,,",
        );
        let err = read_routes(dir.path()).unwrap_err();
        assert_eq!(
            err.chain().nth(1).unwrap().to_string(),
            "Invalid distance for route Nowhere"
        );
    }
}

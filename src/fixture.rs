//! Fixtures for tests

use crate::commodity::CommodityVolume;
use crate::company::{ShippingCompany, Ticker};
use crate::dataset::{Dataset, DatasetParameters};
use crate::forecast::{Confidence, Forecast, Impact, Timeframe};
use crate::freight::{FreightRate, RateUnit, Trend};
use crate::market::{MarketIndex, ShippingAlliance};
use crate::number::NumericRange;
use crate::port::{Port, PortMap, Region};
use crate::route::{CargoClass, ChokePoint, ChokePointMap, RouteMap, ShippingRoute};
use crate::segment::Segment;
use crate::shipbuilding::{ShipBreakingCountry, ShipbuildingCountry};
use crate::stats::IndustryStats;
use crate::units::{Dollars, Percent};
use crate::vessel::{
    FleetCategory, FleetIcon, VesselCategory, VesselImages, VesselMap, VesselSpecs, VesselType,
};
use rstest::fixture;

/// Assert that an error with the given message occurs
macro_rules! assert_error {
    ($result:expr, $msg:expr) => {
        assert_eq!(
            $result.unwrap_err().chain().next().unwrap().to_string(),
            $msg
        );
    };
}
pub(crate) use assert_error;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

fn vessel(name: &str, category: VesselCategory, dwt: &str, teu: Option<&str>) -> VesselType {
    VesselType {
        id: name.into(),
        category_label: category.label().into(),
        categories: vec![category],
        description: format!("{name} description"),
        specs: VesselSpecs {
            dwt: dwt.into(),
            teu: teu.map(Into::into),
            length: "270 - 360m".into(),
            beam: "43 - 65m".into(),
            draft: "17 - 23m".into(),
            speed: "14 - 15 knots".into(),
            crew: "20 - 25".into(),
            build_cost: "$55 - 65 million".into(),
        },
        typical_cargo: strings(&["Iron Ore", "Coal"]),
        key_routes: strings(&["Brazil to China"]),
        facts: Vec::new(),
        images: VesselImages {
            image: "/images/a.jpg".into(),
            side_view: "/images/b.jpg".into(),
            aerial_view: "/images/c.jpg".into(),
        },
    }
}

#[fixture]
pub fn vessel_map() -> VesselMap {
    [
        vessel(
            "Capesize",
            VesselCategory::BulkCarrier,
            "150,000 - 400,000 DWT",
            None,
        ),
        VesselType {
            category_label: "Bulk Carrier / Container".into(),
            ..vessel(
                "Panamax",
                VesselCategory::BulkCarrier,
                "65,000 - 80,000 DWT",
                Some("4,000 - 5,000 TEU"),
            )
        },
        vessel(
            "VLCC",
            VesselCategory::OilTanker,
            "200,000 - 320,000 DWT",
            None,
        ),
        vessel(
            "ULCV",
            VesselCategory::ContainerShip,
            "150,000 - 200,000 DWT",
            Some("20,000 - 24,000+ TEU"),
        ),
    ]
    .into_iter()
    .map(|vessel| (vessel.id.clone(), vessel))
    .collect()
}

#[fixture]
pub fn fleet_categories() -> Vec<FleetCategory> {
    [("Bulk Carriers", 60.0, FleetIcon::Box), ("Oil Tankers", 40.0, FleetIcon::Droplet)]
        .into_iter()
        .map(|(name, share, icon)| FleetCategory {
            name: name.into(),
            description: String::new(),
            fleet_size: 1000,
            total_dwt: 500.0,
            average_age: 11.5,
            market_share: Percent(share),
            icon,
            sub_types: Vec::new(),
            key_facts: Vec::new(),
        })
        .collect()
}

#[fixture]
pub fn port() -> Port {
    Port {
        id: "Shanghai".into(),
        country: "China".into(),
        region: Region::EastAsia,
        volume_teu: Some(49.7),
        volume_tonnes: 776.0,
        rank: 1,
        kind: "Container & Bulk".into(),
        description: "World's busiest container port".into(),
        key_trades: strings(&["Electronics", "Machinery"]),
        latitude: 31.23,
        longitude: 121.47,
    }
}

#[fixture]
pub fn port_map(port: Port) -> PortMap {
    let rotterdam = Port {
        id: "Rotterdam".into(),
        country: "Netherlands".into(),
        region: Region::Europe,
        volume_teu: Some(14.5),
        volume_tonnes: 470.0,
        rank: 2,
        ..port.clone()
    };
    let santos = Port {
        id: "Santos".into(),
        country: "Brazil".into(),
        region: Region::SouthAmerica,
        volume_teu: None,
        volume_tonnes: 155.0,
        rank: 3,
        ..port.clone()
    };
    [port, rotterdam, santos]
        .into_iter()
        .map(|port| (port.id.clone(), port))
        .collect()
}

fn choke_point(name: &str, trade_value: f64) -> ChokePoint {
    ChokePoint {
        id: name.into(),
        location: "Somewhere".into(),
        daily_transits: 60.0,
        oil_flow: 5.0,
        trade_value: Dollars(trade_value),
        width: "3 km".into(),
        depth: "25m".into(),
        risk: "Congestion".into(),
    }
}

#[fixture]
pub fn choke_point_map() -> ChokePointMap {
    [
        choke_point("Strait of Malacca", 5.3e12),
        choke_point("Strait of Hormuz", 1.2e12),
        choke_point("Suez Canal", 1e12),
        choke_point("Panama Canal", 270e9),
    ]
    .into_iter()
    .map(|choke_point| (choke_point.id.clone(), choke_point))
    .collect()
}

#[fixture]
pub fn shipping_route() -> ShippingRoute {
    ShippingRoute {
        id: "Asia - North Europe".into(),
        origin: "Shanghai/Singapore".into(),
        destination: "Rotterdam/Hamburg".into(),
        distance: 10_500.0,
        transit_time: NumericRange {
            min: 28.0,
            max: 35.0,
        },
        cargo_type: "Containers".into(),
        cargo_class: CargoClass::Container,
        volume: "25M TEU/year".into(),
        description: "The world's busiest container trade lane".into(),
        choke_points: vec![
            "Strait of Malacca".into(),
            "Suez Canal".into(),
            "Strait of Gibraltar".into(),
        ],
    }
}

#[fixture]
pub fn route_map(shipping_route: ShippingRoute) -> RouteMap {
    let iron_ore = ShippingRoute {
        id: "Brazil - China Iron Ore".into(),
        cargo_type: "Iron Ore (Bulk)".into(),
        cargo_class: CargoClass::DryBulk,
        choke_points: vec!["Cape of Good Hope".into()],
        ..shipping_route.clone()
    };
    let crude = ShippingRoute {
        id: "Middle East - Asia Crude Oil".into(),
        cargo_type: "Crude Oil".into(),
        cargo_class: CargoClass::Oil,
        choke_points: vec!["Strait of Hormuz".into(), "Strait of Malacca".into()],
        ..shipping_route.clone()
    };
    [shipping_route, iron_ore, crude]
        .into_iter()
        .map(|route| (route.id.clone(), route))
        .collect()
}

#[fixture]
pub fn freight_rate() -> FreightRate {
    FreightRate {
        vessel: "VLCC".into(),
        route: "MEG-China".into(),
        segment: Segment::Tanker,
        current_rate: Dollars(42_000.0),
        unit: RateUnit::PerDay,
        year_ago_rate: Dollars(55_000.0),
        five_year_average: Dollars(38_000.0),
        trend: Trend::Down,
        percent_change: Percent(-23.6),
    }
}

#[fixture]
pub fn freight_rates(freight_rate: FreightRate) -> Vec<FreightRate> {
    let capesize = FreightRate {
        vessel: "Capesize".into(),
        route: "Brazil-China".into(),
        segment: Segment::DryBulk,
        current_rate: Dollars(25_500.0),
        year_ago_rate: Dollars(12_000.0),
        five_year_average: Dollars(17_000.0),
        trend: Trend::Up,
        percent_change: Percent(112.5),
        ..freight_rate.clone()
    };
    let container = FreightRate {
        vessel: "Container (SCFI)".into(),
        route: "Shanghai-Europe".into(),
        segment: Segment::Container,
        current_rate: Dollars(2_150.0),
        unit: RateUnit::PerTeu,
        year_ago_rate: Dollars(1_850.0),
        five_year_average: Dollars(2_800.0),
        trend: Trend::Up,
        percent_change: Percent(16.2),
        ..freight_rate.clone()
    };
    vec![capesize, freight_rate, container]
}

#[fixture]
pub fn commodities() -> Vec<CommodityVolume> {
    [
        ("Crude Oil", 2000.0, 1.2),
        ("Iron Ore", 1550.0, 0.8),
        ("LNG", 420.0, 7.5),
        ("Grain & Soybeans", 580.0, 2.1),
    ]
    .into_iter()
    .map(|(name, volume, growth)| CommodityVolume {
        name: name.into(),
        volume,
        unit: "M tonnes".into(),
        vessel_type: "Various".into(),
        top_exporters: strings(&["Australia"]),
        top_importers: strings(&["China"]),
        growth: Percent(growth),
    })
    .collect()
}

#[fixture]
pub fn shipbuilding_countries() -> Vec<ShipbuildingCountry> {
    [
        ("China", 49.2, 55.3, 3200),
        ("South Korea", 28.5, 25.8, 680),
        ("Others", 22.3, 18.9, 800),
    ]
    .into_iter()
    .map(|(country, gt, orders, orderbook)| ShipbuildingCountry {
        country: country.into(),
        market_share_gt: Percent(gt),
        market_share_orders: Percent(orders),
        key_yards: Vec::new(),
        specialization: Vec::new(),
        orderbook,
        active_yards: 10,
    })
    .collect()
}

#[fixture]
pub fn ship_breaking_countries() -> Vec<ShipBreakingCountry> {
    [
        ("Bangladesh (Chittagong)", 55.0, 7.0),
        ("India (Alang)", 30.0, 6.0),
        ("Others (EU/Misc)", 15.0, 0.5),
    ]
    .into_iter()
    .map(|(country, share, capacity)| ShipBreakingCountry {
        country: country.into(),
        market_share_ldt: Percent(share),
        annual_capacity: capacity,
        method: "Beaching".into(),
        regulations: String::new(),
        key_yards: Vec::new(),
        controversies: String::new(),
    })
    .collect()
}

#[fixture]
pub fn company() -> ShippingCompany {
    ShippingCompany {
        name: "MSC".into(),
        ticker: Ticker::Private,
        market_cap: Some(Dollars(80e9)),
        market_cap_estimated: true,
        fleet: "800+ vessels".into(),
        fleet_size: 800,
        headquarters: "Geneva, Switzerland".into(),
        segment: "Container".into(),
        revenue: Dollars(70e9),
    }
}

#[fixture]
pub fn companies(company: ShippingCompany) -> Vec<ShippingCompany> {
    let qatar = ShippingCompany {
        name: "Qatar Energy LNG".into(),
        ticker: Ticker::StateOwned,
        market_cap: None,
        market_cap_estimated: false,
        ..company.clone()
    };
    let maersk = ShippingCompany {
        name: "Maersk".into(),
        ticker: Ticker::Listed("MAERSK-B.CO".into()),
        market_cap: Some(Dollars(26e9)),
        market_cap_estimated: false,
        ..company.clone()
    };
    let cma_cgm = ShippingCompany {
        name: "CMA CGM".into(),
        market_cap: Some(Dollars(45e9)),
        ..company.clone()
    };
    vec![qatar, maersk, company, cma_cgm]
}

#[fixture]
pub fn forecasts() -> Vec<Forecast> {
    [
        ("Trade Growth", Impact::Positive, Confidence::High),
        ("Decarbonization", Impact::Neutral, Confidence::High),
        ("Autonomous Shipping", Impact::Positive, Confidence::Low),
    ]
    .into_iter()
    .map(|(title, impact, confidence)| Forecast {
        title: title.into(),
        timeframe: Timeframe {
            start: 2025,
            end: 2030,
        },
        description: String::new(),
        impact,
        confidence,
        details: Vec::new(),
    })
    .collect()
}

#[fixture]
pub fn industry_stats() -> IndustryStats {
    IndustryStats {
        total_fleet: "105,500+".into(),
        total_dwt: "2.3 billion DWT".into(),
        seaborne_trade: "12.3 billion tonnes".into(),
        trade_value: "$14 trillion".into(),
        percent_world_trade: "90%".into(),
        seafarers: "1.89 million".into(),
        co2_emissions: "2.89% of global".into(),
        average_vessel_age: "12.3 years".into(),
        container_teu: "28.4 million TEU capacity".into(),
        orderbook: "320 million DWT".into(),
        annual_freight_revenue: "$380 billion".into(),
        top_flag: "Panama (8,500+ vessels)".into(),
    }
}

#[fixture]
pub fn dataset_parameters() -> DatasetParameters {
    DatasetParameters {
        name: "test".into(),
        description: "Test dataset".into(),
        share_tolerance: Percent(1.0),
        strict_shares: false,
    }
}

#[fixture]
#[allow(clippy::too_many_arguments)]
pub fn dataset(
    dataset_parameters: DatasetParameters,
    vessel_map: VesselMap,
    fleet_categories: Vec<FleetCategory>,
    port_map: PortMap,
    choke_point_map: ChokePointMap,
    route_map: RouteMap,
    freight_rates: Vec<FreightRate>,
    commodities: Vec<CommodityVolume>,
    shipbuilding_countries: Vec<ShipbuildingCountry>,
    ship_breaking_countries: Vec<ShipBreakingCountry>,
    companies: Vec<ShippingCompany>,
    forecasts: Vec<Forecast>,
    industry_stats: IndustryStats,
) -> Dataset {
    Dataset {
        parameters: dataset_parameters,
        vessels: vessel_map,
        fleet: fleet_categories,
        ports: port_map,
        choke_points: choke_point_map,
        routes: route_map,
        freight_rates,
        commodities,
        shipbuilding: shipbuilding_countries,
        ship_breaking: ship_breaking_countries,
        companies,
        forecasts,
        market_indices: vec![MarketIndex {
            name: "Baltic Dry Index (BDI)".into(),
            value: 1750.0,
            value_label: "~1,750".into(),
            description: String::new(),
            measures: "Dry Bulk Freight Rates".into(),
            range: "300 - 11,793".into(),
            colour: "#2980B9".into(),
        }],
        alliances: vec![ShippingAlliance {
            name: "Ocean Alliance".into(),
            members: strings(&["CMA CGM", "COSCO"]),
            capacity_share: Percent(29.0),
            description: String::new(),
            colour: "#2980B9".into(),
        }],
        stats: industry_stats,
    }
}

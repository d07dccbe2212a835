//! The `show` command, which prints one of the dataset's tables to the console.
use super::{load_dataset, settings_or_load};
use crate::commodity::{rank_by_volume, top_by_volume, volume_bars};
use crate::company::rank_by_market_cap;
use crate::dataset::Dataset;
use crate::forecast::{Impact, count_by_confidence, filter_by_impact};
use crate::freight::filter_by_segment;
use crate::log;
use crate::market::capacity_share_bars;
use crate::number::{
    format_compact_dollars, format_share, format_signed_percent, format_thousands,
};
use crate::port::{RegionFilter, major_ports};
use crate::scale::{Bar, bar_chart};
use crate::segment::{Segment, SegmentFilter};
use crate::settings::Settings;
use crate::shipbuilding::{gt_share_bars, ldt_share_bars};
use crate::style::{confidence_badge, flag_emoji, fleet_icon_glyph, impact_style, trend_style};
use crate::vessel::{VesselCategory, filter_by_category, sort_by_max_dwt};
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use itertools::Itertools;
use std::path::PathBuf;

/// Number of characters in a full-width text bar
const BAR_LENGTH: f64 = 30.0;

/// The tables which can be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Table {
    /// Vessel classes, largest first
    Vessels,
    /// Fleet composition by category
    Fleet,
    /// Major ports by rank
    Ports,
    /// Trade routes
    Routes,
    /// Choke points, by the number of routes passing through them
    ChokePoints,
    /// Spot freight rates
    Freight,
    /// Seaborne commodity volumes, largest first
    Commodities,
    /// Shipbuilding market shares
    Shipbuilding,
    /// Ship-recycling market shares
    ShipBreaking,
    /// Shipping companies by market capitalisation
    Companies,
    /// Industry forecasts
    Forecasts,
    /// Freight market indices
    Indices,
    /// Container shipping alliances
    Alliances,
    /// Headline industry figures
    Stats,
}

/// Options for the show command
#[derive(Args, Debug, Default)]
pub struct ShowOpts {
    /// Path to the dataset directory (the embedded dataset if omitted)
    #[arg(long)]
    pub dataset: Option<PathBuf>,
    /// Only show freight rates in this segment
    #[arg(long, value_enum)]
    pub segment: Option<Segment>,
    /// Only show ports in this region (`all`, `americas` or a region name)
    #[arg(long, default_value = "all")]
    pub region: RegionFilter,
    /// Only show vessel classes in this category
    #[arg(long, value_enum)]
    pub category: Option<VesselCategory>,
    /// Only show forecasts with this impact
    #[arg(long, value_enum)]
    pub impact: Option<Impact>,
    /// Show at most this many rows
    #[arg(long)]
    pub top: Option<usize>,
}

/// Handle the `show` command.
pub fn handle_show_command(
    table: Table,
    opts: &ShowOpts,
    settings: Option<Settings>,
) -> Result<()> {
    let settings = settings_or_load(settings)?;
    log::init(Some(settings.log_level.as_str()), None)
        .context("Failed to initialise logging.")?;

    let dataset =
        load_dataset(opts.dataset.as_deref(), &settings).context("Failed to load dataset.")?;
    for line in render_table(&dataset, table, opts) {
        println!("{line}");
    }

    Ok(())
}

/// A bar of `#` characters for a width between 0 and 100
fn text_bar(width: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let len = (width / 100.0 * BAR_LENGTH).round().max(0.0) as usize;
    "#".repeat(len)
}

/// Lines for a bar chart, with `describe` giving the text after each bar
fn bar_lines<L, F>(bars: &[Bar<L>], label_width: usize, mut describe: F) -> Vec<String>
where
    L: AsRef<str>,
    F: FnMut(usize) -> String,
{
    bars.iter()
        .enumerate()
        .map(|(i, bar)| {
            format!(
                "{:<label_width$} {:<30} {}",
                bar.label.as_ref(),
                text_bar(bar.width),
                describe(i)
            )
        })
        .collect()
}

/// Render a table as lines of text
pub fn render_table(dataset: &Dataset, table: Table, opts: &ShowOpts) -> Vec<String> {
    let lines = match table {
        Table::Vessels => {
            let mut vessels = filter_by_category(&dataset.vessels, opts.category);
            sort_by_max_dwt(&mut vessels);
            vessels
                .into_iter()
                .map(|vessel| {
                    let mut line = format!(
                        "{:<24} {:<30} {:<26} {}",
                        vessel.id, vessel.category_label, vessel.specs.dwt, vessel.specs.speed
                    );
                    if let Some(teu) = vessel.teu_range() {
                        line += &format!(", up to {} TEU", format_thousands(teu.max, 0));
                    }
                    line
                })
                .collect()
        }
        Table::Fleet => {
            let bars = bar_chart(
                dataset
                    .fleet
                    .iter()
                    .map(|category| (category.name.as_str(), category.market_share.value())),
            );
            bar_lines(&bars, 22, |i| {
                let category = &dataset.fleet[i];
                format!(
                    "{} {} {} vessels, {} million DWT",
                    fleet_icon_glyph(category.icon),
                    format_share(category.market_share),
                    format_thousands(f64::from(category.fleet_size), 0),
                    format_thousands(category.total_dwt, 0)
                )
            })
        }
        Table::Ports => major_ports(&dataset.ports, opts.region)
            .into_iter()
            .map(|port| {
                let volume = match port.volume_teu {
                    Some(teu) => format!("{teu:.1}M TEU"),
                    None => format!("{}M tonnes", format_thousands(port.volume_tonnes, 0)),
                };
                format!(
                    "#{:<3} {:<28} {:<22} {:<16} {volume}",
                    port.rank,
                    port.id,
                    port.country,
                    port.region.label()
                )
            })
            .collect(),
        Table::Routes => dataset
            .routes
            .values()
            .map(|route| {
                format!(
                    "{:<36} {:>7} nm {:>3}-{:<3} days  {:<10} via {}",
                    route.id,
                    format_thousands(route.distance, 0),
                    route.transit_time.min,
                    route.transit_time.max,
                    route.cargo_class,
                    route.choke_points.iter().join(", ")
                )
            })
            .collect(),
        Table::ChokePoints => dataset
            .route_network()
            .exposure()
            .into_iter()
            .map(|exposure| {
                let choke_point = &dataset.choke_points[&exposure.choke_point];
                format!(
                    "{:<28} {:>2} routes  {:>7}/year  {}M bbl/day  {}",
                    exposure.choke_point,
                    exposure.route_count,
                    format_compact_dollars(exposure.trade_value),
                    choke_point.oil_flow,
                    choke_point.risk
                )
            })
            .collect(),
        Table::Freight => {
            let filter = SegmentFilter::from(opts.segment);
            filter_by_segment(&dataset.freight_rates, filter)
                .into_iter()
                .map(|rate| {
                    format!(
                        "{:<22} {:<24} {:<10} {:>14} {} {}",
                        rate.vessel,
                        rate.route,
                        rate.segment,
                        rate.display_rate(),
                        trend_style(rate.trend).label,
                        rate.display_change()
                    )
                })
                .collect()
        }
        Table::Commodities => {
            let commodities = match opts.top {
                Some(n) => top_by_volume(&dataset.commodities, n),
                None => rank_by_volume(&dataset.commodities),
            };
            bar_lines(&volume_bars(&commodities), 22, |i| {
                let commodity = commodities[i];
                format!(
                    "{} {} ({})",
                    format_thousands(commodity.volume, 0),
                    commodity.unit,
                    format_signed_percent(commodity.growth)
                )
            })
        }
        Table::Shipbuilding => bar_lines(&gt_share_bars(&dataset.shipbuilding), 14, |i| {
            let country = &dataset.shipbuilding[i];
            format!(
                "{} {} GT, {} of orders, {} vessels on order",
                flag_emoji(&country.country),
                format_share(country.market_share_gt),
                format_share(country.market_share_orders),
                format_thousands(f64::from(country.orderbook), 0)
            )
        }),
        Table::ShipBreaking => {
            bar_lines(&ldt_share_bars(&dataset.ship_breaking), 28, |i| {
                let country = &dataset.ship_breaking[i];
                format!(
                    "{} LDT, {}M LDT/year, {}",
                    format_share(country.market_share_ldt),
                    country.annual_capacity,
                    country.method
                )
            })
        }
        Table::Companies => rank_by_market_cap(&dataset.companies, opts.top)
            .into_iter()
            .enumerate()
            .map(|(i, company)| {
                format!(
                    "{:>2}. {:<34} {:<12} {:<14} {:>6} vessels  revenue {}",
                    i + 1,
                    company.name,
                    company.ticker,
                    company.display_market_cap(),
                    format_thousands(f64::from(company.fleet_size), 0),
                    format_compact_dollars(company.revenue)
                )
            })
            .collect(),
        Table::Forecasts => {
            let forecasts = filter_by_impact(&dataset.forecasts, opts.impact);
            let mut lines: Vec<_> = forecasts
                .iter()
                .take(opts.top.unwrap_or(usize::MAX))
                .map(|forecast| {
                    format!(
                        "{} ({}) [{}] [{}]",
                        forecast.title,
                        forecast.timeframe,
                        impact_style(forecast.impact).label,
                        confidence_badge(forecast.confidence).label
                    )
                })
                .collect();
            // The summary covers every forecast, however many are listed
            let counts = count_by_confidence(&dataset.forecasts);
            lines.push(
                counts
                    .iter()
                    .map(|(confidence, count)| format!("{confidence}: {count}"))
                    .join(", "),
            );
            lines
        }
        Table::Indices => dataset
            .market_indices
            .iter()
            .map(|index| format!("{:<28} {:<16} {}", index.name, index.value_label, index.measures))
            .collect(),
        Table::Alliances => bar_lines(&capacity_share_bars(&dataset.alliances), 22, |i| {
            let alliance = &dataset.alliances[i];
            format!(
                "{} ({})",
                format_share(alliance.capacity_share),
                alliance.members.join(", ")
            )
        }),
        Table::Stats => dataset
            .stats
            .headlines()
            .iter()
            .map(|(label, value)| format!("{label:<28} {value}"))
            .collect(),
    };

    match (table, opts.top) {
        // Limited while rendering
        (Table::Commodities | Table::Companies | Table::Forecasts, _) | (_, None) => lines,
        (_, Some(n)) => lines.into_iter().take(n).collect(),
    }
}

//! Spot freight rates for the main vessel classes.
use crate::number::{format_dollars, format_signed_percent};
use crate::segment::{Segment, SegmentFilter};
use crate::units::{Dollars, Percent, percent_change};
use serde_string_enum::{DeserializeLabeledStringEnum, SerializeLabeledStringEnum, SerializeStringEnum};
use std::fmt;
use strum::EnumIter;

/// Changes smaller than this (in percentage points) are consistent with a stable trend
pub const STABLE_BAND: Percent = Percent(1.0);

/// Allowed difference between the stored change and the change computed from the rates
pub const CHANGE_TOLERANCE: Percent = Percent(0.5);

/// The direction a rate has moved over the past year
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Trend {
    /// The rate has risen
    #[string = "up"]
    Up,
    /// The rate has fallen
    #[string = "down"]
    Down,
    /// The rate is broadly unchanged
    #[string = "stable"]
    Stable,
}

impl Trend {
    /// Whether a change of `change` is consistent with this trend
    pub fn agrees_with(self, change: Percent) -> bool {
        match self {
            Self::Up => change.0 > 0.0,
            Self::Down => change.0 < 0.0,
            Self::Stable => change.0.abs() < STABLE_BAND.0,
        }
    }
}

/// The unit a rate is quoted in
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
pub enum RateUnit {
    /// Time-charter equivalent earnings per day
    #[string = "/day"]
    PerDay,
    /// Voyage rate per tonne of cargo
    #[string = "/tonne"]
    PerTonne,
    /// Per twenty-foot equivalent unit
    #[string = "/TEU"]
    PerTeu,
    /// Per forty-foot equivalent unit
    #[string = "/FEU"]
    PerFeu,
}

impl RateUnit {
    /// The suffix shown after a rate, e.g. `"/day"`
    pub fn suffix(self) -> &'static str {
        match self {
            Self::PerDay => "/day",
            Self::PerTonne => "/tonne",
            Self::PerTeu => "/TEU",
            Self::PerFeu => "/FEU",
        }
    }
}

impl fmt::Display for RateUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

/// A spot freight rate for a vessel class on a route
#[derive(Debug, Clone, PartialEq)]
pub struct FreightRate {
    /// Vessel class or index, e.g. `"VLCC"` or `"Container (SCFI)"`
    pub vessel: String,
    /// The route the rate applies to
    pub route: String,
    /// Market segment
    pub segment: Segment,
    /// The latest rate
    pub current_rate: Dollars,
    /// The unit the rates are quoted in
    pub unit: RateUnit,
    /// The rate a year ago
    pub year_ago_rate: Dollars,
    /// The five-year average rate
    pub five_year_average: Dollars,
    /// Direction of travel
    pub trend: Trend,
    /// Change since a year ago, as authored
    pub percent_change: Percent,
}

impl FreightRate {
    /// The change since a year ago, computed from the rates
    pub fn computed_change(&self) -> Option<Percent> {
        percent_change(self.year_ago_rate, self.current_rate)
    }

    /// How far the current rate sits above or below the five-year average
    pub fn vs_five_year_average(&self) -> Option<Percent> {
        percent_change(self.five_year_average, self.current_rate)
    }

    /// Whether the authored change agrees with the authored trend
    pub fn trend_agrees(&self) -> bool {
        self.trend.agrees_with(self.percent_change)
    }

    /// Whether the authored change matches the change computed from the rates, within
    /// [`CHANGE_TOLERANCE`]
    pub fn change_matches_rates(&self) -> bool {
        self.computed_change().is_none_or(|computed| {
            (computed.0 - self.percent_change.0).abs() <= CHANGE_TOLERANCE.0
        })
    }

    /// The current rate as shown to users, e.g. `"$25,500/day"`
    pub fn display_rate(&self) -> String {
        format!("{}{}", format_dollars(self.current_rate), self.unit)
    }

    /// The change as shown to users, e.g. `"+112.5%"`
    pub fn display_change(&self) -> String {
        format_signed_percent(self.percent_change)
    }
}

/// Select the rates accepted by `filter`, keeping their order
pub fn filter_by_segment(rates: &[FreightRate], filter: SegmentFilter) -> Vec<&FreightRate> {
    rates
        .iter()
        .filter(|rate| filter.matches(rate.segment))
        .collect()
}

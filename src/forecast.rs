//! Industry outlook: forecasts with their expected impact and confidence.
use anyhow::{Context, Result, ensure};
use indexmap::IndexMap;
use serde_string_enum::{DeserializeLabeledStringEnum, SerializeLabeledStringEnum, SerializeStringEnum};
use std::fmt;
use strum::{EnumIter, IntoEnumIterator};

/// The expected effect of a forecast on the shipping industry
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
    clap::ValueEnum,
)]
pub enum Impact {
    /// Good for the industry
    #[string = "positive"]
    Positive,
    /// Bad for the industry
    #[string = "negative"]
    Negative,
    /// Mixed or neutral
    #[string = "neutral"]
    Neutral,
}

/// How confident the forecast is
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, SerializeStringEnum,
)]
pub enum Confidence {
    #[allow(missing_docs)]
    High,
    #[allow(missing_docs)]
    Medium,
    #[allow(missing_docs)]
    Low,
}

impl Confidence {
    /// The display label for the confidence level
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// The span of years a forecast covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeframe {
    /// First year
    pub start: u32,
    /// Last year
    pub end: u32,
}

impl Timeframe {
    /// Parse a timeframe such as `"2025-2030"`. A single year is a one-year timeframe.
    pub fn parse(s: &str) -> Result<Self> {
        let (start, end) = s.split_once('-').unwrap_or((s, s));
        let parse_year = |year: &str| {
            year.trim()
                .parse::<u32>()
                .with_context(|| format!("Invalid year in timeframe \"{s}\""))
        };
        let timeframe = Self {
            start: parse_year(start)?,
            end: parse_year(end)?,
        };
        ensure!(
            timeframe.start <= timeframe.end,
            "Timeframe \"{s}\" ends before it starts"
        );

        Ok(timeframe)
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// A forecast for the shipping industry
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    /// Headline
    pub title: String,
    /// Years covered
    pub timeframe: Timeframe,
    /// Summary
    pub description: String,
    /// Expected effect on the industry
    pub impact: Impact,
    /// How confident the forecast is
    pub confidence: Confidence,
    /// Supporting points
    pub details: Vec<String>,
}

/// Select the forecasts with the given impact, or all of them if `impact` is `None`
pub fn filter_by_impact(forecasts: &[Forecast], impact: Option<Impact>) -> Vec<&Forecast> {
    forecasts
        .iter()
        .filter(|forecast| impact.is_none_or(|impact| forecast.impact == impact))
        .collect()
}

/// Count forecasts at each confidence level. Every level is present, in order from high to low.
pub fn count_by_confidence(forecasts: &[Forecast]) -> IndexMap<Confidence, usize> {
    let mut counts: IndexMap<_, _> = Confidence::iter().map(|level| (level, 0)).collect();
    for forecast in forecasts {
        counts[&forecast.confidence] += 1;
    }

    counts
}

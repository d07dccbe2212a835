//! Presentation attributes (colours, symbols and badges) for categories and countries.
//!
//! Closed enumerations map to their attributes with exhaustive matches. Free-text keys such as
//! country names are looked up case-insensitively and fall back to a documented default, so none of
//! these functions can fail.
use crate::forecast::{Confidence, Impact};
use crate::freight::Trend;
use crate::route::CargoClass;
use crate::segment::Segment;
use crate::vessel::FleetIcon;
use strum::IntoEnumIterator;
use unicase::UniCase;

/// Neutral grey used for anything without a colour of its own
pub const DEFAULT_COLOUR: &str = "#94A3B8";

/// Code used for countries without an entry in [`COUNTRY_CODES`]
pub const DEFAULT_COUNTRY_CODE: &str = "INTL";

/// White flag, shown for countries without a flag of their own
pub const DEFAULT_FLAG: &str = "\u{1F3F3}\u{FE0F}";

const GREEN: &str = "#10B981";
const RED: &str = "#E85D5D";
const ORANGE: &str = "#E8943A";
const BLUE: &str = "#2980B9";
const AMBER: &str = "#F59E0B";
const PURPLE: &str = "#8B5CF6";

/// A short label with a colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    /// Text or symbol to show
    pub label: &'static str,
    /// Hex colour
    pub colour: &'static str,
}

/// ISO 3166 codes for the countries appearing in the dataset
const COUNTRY_CODES: [(&str, &str); 19] = [
    ("Australia", "AU"),
    ("Bangladesh", "BD"),
    ("Belgium", "BE"),
    ("Brazil", "BR"),
    ("China", "CN"),
    ("China SAR", "HK"),
    ("Germany", "DE"),
    ("Hong Kong", "HK"),
    ("India", "IN"),
    ("Italy", "IT"),
    ("Japan", "JP"),
    ("Netherlands", "NL"),
    ("Pakistan", "PK"),
    ("Singapore", "SG"),
    ("South Korea", "KR"),
    ("Turkey", "TR"),
    ("UAE", "AE"),
    ("UK", "GB"),
    ("USA", "US"),
];

const SHIPBUILDING_COLOURS: [(&str, &str); 6] = [
    ("China", ORANGE),
    ("South Korea", BLUE),
    ("Japan", RED),
    ("Italy", GREEN),
    ("Germany", PURPLE),
    ("Others", DEFAULT_COLOUR),
];

const SHIP_BREAKING_COLOURS: [(&str, &str); 6] = [
    ("Bangladesh", RED),
    ("India", ORANGE),
    ("Pakistan", DEFAULT_COLOUR),
    ("Turkey", BLUE),
    ("China", GREEN),
    ("Others", PURPLE),
];

/// Look up `key` in `table`, ignoring case and surrounding whitespace
fn lookup<T: Copy>(table: &[(&str, T)], key: &str) -> Option<T> {
    let key = UniCase::new(key.trim());
    table
        .iter()
        .find(|(name, _)| UniCase::new(*name) == key)
        .map(|(_, value)| *value)
}

/// The colour for a market segment
pub fn segment_colour(segment: Segment) -> &'static str {
    match segment {
        Segment::DryBulk => ORANGE,
        Segment::Tanker => RED,
        Segment::Container => BLUE,
        Segment::Lng => GREEN,
    }
}

/// The arrow and colour for a rate trend
pub fn trend_style(trend: Trend) -> Badge {
    match trend {
        Trend::Up => Badge {
            label: "\u{25B2}",
            colour: GREEN,
        },
        Trend::Down => Badge {
            label: "\u{25BC}",
            colour: RED,
        },
        Trend::Stable => Badge {
            label: "--",
            colour: DEFAULT_COLOUR,
        },
    }
}

/// The label and colour for a forecast's impact
pub fn impact_style(impact: Impact) -> Badge {
    match impact {
        Impact::Positive => Badge {
            label: "Positive",
            colour: GREEN,
        },
        Impact::Negative => Badge {
            label: "Negative",
            colour: RED,
        },
        Impact::Neutral => Badge {
            label: "Neutral",
            colour: AMBER,
        },
    }
}

/// The badge for a forecast's confidence
pub fn confidence_badge(confidence: Confidence) -> Badge {
    match confidence {
        Confidence::High => Badge {
            label: "High Confidence",
            colour: GREEN,
        },
        Confidence::Medium => Badge {
            label: "Medium Confidence",
            colour: AMBER,
        },
        Confidence::Low => Badge {
            label: "Low Confidence",
            colour: RED,
        },
    }
}

/// The accent colour for a class of cargo
pub fn cargo_colour(class: CargoClass) -> &'static str {
    match class {
        CargoClass::Container => BLUE,
        CargoClass::DryBulk => ORANGE,
        CargoClass::Oil => RED,
        CargoClass::Gas => GREEN,
        CargoClass::Other => DEFAULT_COLOUR,
    }
}

/// The glyph shown for a fleet category icon
pub fn fleet_icon_glyph(icon: FleetIcon) -> &'static str {
    match icon {
        FleetIcon::Box => "\u{1FAA8}",
        FleetIcon::Droplet => "\u{1F4A7}",
        FleetIcon::Container => "\u{1F4E6}",
        FleetIcon::Flame => "\u{1F525}",
        FleetIcon::Flask => "\u{1F9EA}",
        FleetIcon::Car => "\u{1F697}",
        FleetIcon::Package => "\u{1F4EB}",
        FleetIcon::Anchor => "\u{2693}",
        FleetIcon::Ship => "\u{1F6A2}",
    }
}

/// Look up a confidence level by its label (e.g. `"high"`)
pub fn lookup_confidence(label: &str) -> Option<Confidence> {
    let key = UniCase::new(label.trim());
    Confidence::iter().find(|level| UniCase::new(level.label()) == key)
}

/// The confidence level for a label, defaulting to [`Confidence::Medium`]
pub fn confidence_from_label(label: &str) -> Confidence {
    lookup_confidence(label).unwrap_or(Confidence::Medium)
}

/// Look up a fleet icon by its key (e.g. `"droplet"`)
pub fn lookup_fleet_icon(key: &str) -> Option<FleetIcon> {
    let key = UniCase::new(key.trim());
    FleetIcon::iter().find(|icon| UniCase::new(fleet_icon_key(*icon)) == key)
}

/// The fleet icon for a key, defaulting to [`FleetIcon::Ship`]
pub fn fleet_icon_from_key(key: &str) -> FleetIcon {
    lookup_fleet_icon(key).unwrap_or_default()
}

/// The key used for a fleet icon in input files
pub fn fleet_icon_key(icon: FleetIcon) -> &'static str {
    match icon {
        FleetIcon::Box => "box",
        FleetIcon::Droplet => "droplet",
        FleetIcon::Container => "container",
        FleetIcon::Flame => "flame",
        FleetIcon::Flask => "flask",
        FleetIcon::Car => "car",
        FleetIcon::Package => "package",
        FleetIcon::Anchor => "anchor",
        FleetIcon::Ship => "ship",
    }
}

/// The two-letter code for a country, or [`DEFAULT_COUNTRY_CODE`] if it is not known
pub fn country_code(country: &str) -> &'static str {
    lookup(&COUNTRY_CODES, country).unwrap_or(DEFAULT_COUNTRY_CODE)
}

/// The flag emoji for a country, or [`DEFAULT_FLAG`] if it is not known.
///
/// Flags are built from the regional indicator symbols for the country's code.
pub fn flag_emoji(country: &str) -> String {
    let Some(code) = lookup(&COUNTRY_CODES, country) else {
        return DEFAULT_FLAG.to_string();
    };

    code.chars()
        .filter_map(|c| char::from_u32(0x1F1E6 + (c as u32 - 'A' as u32)))
        .collect()
}

/// The chart colour for a shipbuilding country, or [`DEFAULT_COLOUR`] if it has none
pub fn shipbuilding_colour(country: &str) -> &'static str {
    lookup(&SHIPBUILDING_COLOURS, country).unwrap_or(DEFAULT_COLOUR)
}

/// The chart colour for a ship-recycling country (by short name), or [`DEFAULT_COLOUR`] if it has
/// none
pub fn ship_breaking_colour(country: &str) -> &'static str {
    lookup(&SHIP_BREAKING_COLOURS, country).unwrap_or(DEFAULT_COLOUR)
}

//! Freight market indices and container shipping alliances.
use crate::scale::{Bar, bar_chart};
use crate::units::Percent;
use anyhow::{Result, ensure};

/// Check that `colour` is a hex colour of the form `#RRGGBB`
pub fn check_hex_colour(colour: &str) -> Result<()> {
    let is_hex = colour.len() == 7
        && colour.starts_with('#')
        && colour[1..].chars().all(|c| c.is_ascii_hexdigit());
    ensure!(is_hex, "Invalid colour \"{colour}\": expected #RRGGBB");

    Ok(())
}

/// A published freight market index, e.g. the Baltic Dry Index
#[derive(Debug, Clone, PartialEq)]
pub struct MarketIndex {
    /// Index name
    pub name: String,
    /// Latest value, in the units of the index
    pub value: f64,
    /// Latest value as authored, e.g. `"~$32,000/day"`
    pub value_label: String,
    /// What the index is
    pub description: String,
    /// What the index measures
    pub measures: String,
    /// Historical range, as authored
    pub range: String,
    /// Colour used when showing the index
    pub colour: String,
}

/// An alliance of container lines sharing vessel capacity
#[derive(Debug, Clone, PartialEq)]
pub struct ShippingAlliance {
    /// Alliance name
    pub name: String,
    /// Member lines
    pub members: Vec<String>,
    /// Share of global container capacity
    pub capacity_share: Percent,
    /// Free-text description
    pub description: String,
    /// Colour used when showing the alliance
    pub colour: String,
}

/// Bars for a chart of alliance capacity share
pub fn capacity_share_bars(alliances: &[ShippingAlliance]) -> Vec<Bar<&str>> {
    bar_chart(
        alliances
            .iter()
            .map(|alliance| (alliance.name.as_str(), alliance.capacity_share.0)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::assert_error;
    use rstest::rstest;

    #[rstest]
    #[case("#2980B9")]
    #[case("#e8943a")]
    fn test_check_hex_colour(#[case] colour: &str) {
        assert!(check_hex_colour(colour).is_ok());
    }

    #[rstest]
    #[case("2980B9")]
    #[case("#2980B")]
    #[case("#2980BZ")]
    #[case("#2980B9FF")]
    #[case("#é980B")]
    fn test_check_hex_colour_bad(#[case] colour: &str) {
        assert_error!(
            check_hex_colour(colour),
            format!("Invalid colour \"{colour}\": expected #RRGGBB")
        );
    }

    #[test]
    fn test_capacity_share_bars() {
        let alliance = |name: &str, share: f64| ShippingAlliance {
            name: name.into(),
            members: Vec::new(),
            capacity_share: Percent(share),
            description: String::new(),
            colour: "#2980B9".into(),
        };
        let alliances = [alliance("Ocean Alliance", 29.0), alliance("Gemini", 22.0)];
        let bars = capacity_share_bars(&alliances);
        assert_eq!(bars[0].width, 100.0);
        assert!(bars[1].width < 100.0);
    }
}

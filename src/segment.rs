//! Market segments and the classifier which assigns a segment to a free-text vessel label.
use serde_string_enum::{DeserializeLabeledStringEnum, SerializeStringEnum};
use std::fmt;
use strum::EnumIter;

/// One of the shipping market segments used to group records for filtering
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    SerializeStringEnum,
    DeserializeLabeledStringEnum,
    clap::ValueEnum,
)]
pub enum Segment {
    /// Bulk carriers (Capesize, Panamax, Supramax, Handysize)
    #[string = "Dry Bulk"]
    DryBulk,
    /// Crude and product tankers
    #[string = "Tanker"]
    Tanker,
    /// Container ships and container indices
    #[string = "Container"]
    Container,
    /// Liquefied natural gas carriers
    #[string = "LNG"]
    #[value(name = "lng")]
    Lng,
}

impl Segment {
    /// The display label for the segment
    pub fn label(self) -> &'static str {
        match self {
            Self::DryBulk => "Dry Bulk",
            Self::Tanker => "Tanker",
            Self::Container => "Container",
            Self::Lng => "LNG",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// The segment assigned to labels which match none of the keyword groups
pub const DEFAULT_SEGMENT: Segment = Segment::DryBulk;

/// Keyword groups checked in order by [`classify_label`].
///
/// The more specific segments come first; dry bulk has no keywords and is the fallback.
const KEYWORD_GROUPS: [(Segment, &[&str]); 3] = [
    (Segment::Container, &["container", "scfi"]),
    (Segment::Tanker, &["vlcc", "suezmax", "aframax"]),
    (Segment::Lng, &["lng"]),
];

/// Classify a free-text vessel or index label (e.g. `"Capesize"`, `"Container (SCFI)"`) into a
/// market segment.
///
/// Keyword groups are checked in order and the first group with a keyword contained in the label
/// (ignoring case) wins. Labels matching no group get [`DEFAULT_SEGMENT`]. This function is total:
/// every string, including the empty string, maps to exactly one segment.
pub fn classify_label(label: &str) -> Segment {
    let label = label.to_lowercase();
    KEYWORD_GROUPS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| label.contains(keyword)))
        .map_or(DEFAULT_SEGMENT, |(segment, _)| *segment)
}

/// A filter for selecting records by segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmentFilter {
    /// Accept every segment
    #[default]
    All,
    /// Accept only the given segment
    Only(Segment),
}

impl SegmentFilter {
    /// Whether the filter accepts `segment`
    pub fn matches(self, segment: Segment) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == segment,
        }
    }
}

impl From<Option<Segment>> for SegmentFilter {
    fn from(value: Option<Segment>) -> Self {
        value.map_or(Self::All, Self::Only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    #[rstest]
    #[case("Capesize", Segment::DryBulk)]
    #[case("Panamax", Segment::DryBulk)]
    #[case("Supramax", Segment::DryBulk)]
    #[case("Handysize", Segment::DryBulk)]
    #[case("VLCC", Segment::Tanker)]
    #[case("Suezmax", Segment::Tanker)]
    #[case("Aframax", Segment::Tanker)]
    #[case("Container (SCFI)", Segment::Container)]
    #[case("SCFI Shanghai-Europe", Segment::Container)]
    #[case("LNG Spot", Segment::Lng)]
    #[case("lng carrier", Segment::Lng)]
    #[case("", Segment::DryBulk)]
    #[case("Something else entirely", Segment::DryBulk)]
    fn test_classify_label(#[case] label: &str, #[case] expected: Segment) {
        assert_eq!(classify_label(label), expected);
    }

    #[rstest]
    #[case("LNG Container Feeder", Segment::Container)]
    #[case("SCFI VLCC", Segment::Container)]
    #[case("VLCC / LNG", Segment::Tanker)]
    #[case("Aframax (LNG-fuelled)", Segment::Tanker)]
    fn test_classify_label_precedence(#[case] label: &str, #[case] expected: Segment) {
        assert_eq!(classify_label(label), expected);
    }

    #[test]
    fn test_classify_label_deterministic_and_closed() {
        let all: Vec<_> = Segment::iter().collect();
        for label in ["", " ", "VLCC", "Container", "LNG", "Bulk", "??", "Ünïcödé"] {
            let first = classify_label(label);
            assert_eq!(classify_label(label), first);
            assert!(all.contains(&first));
        }
    }

    #[test]
    fn test_segment_filter() {
        assert!(SegmentFilter::All.matches(Segment::Lng));
        assert!(SegmentFilter::Only(Segment::Tanker).matches(Segment::Tanker));
        assert!(!SegmentFilter::Only(Segment::Tanker).matches(Segment::DryBulk));
        assert_eq!(SegmentFilter::from(None), SegmentFilter::All);
        assert_eq!(
            SegmentFilter::from(Some(Segment::Container)),
            SegmentFilter::Only(Segment::Container)
        );
    }

    #[test]
    fn test_segment_display() {
        assert_eq!(Segment::DryBulk.to_string(), "Dry Bulk");
        assert_eq!(Segment::Lng.to_string(), "LNG");
    }
}

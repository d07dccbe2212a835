//! Major shipping companies and their ranking by market value.
use crate::number::format_compact_dollars;
use crate::units::Dollars;
use std::fmt;
use unicase::UniCase;

/// How a company's shares are held
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ticker {
    /// Listed on an exchange under the given symbol
    Listed(String),
    /// Privately owned
    Private,
    /// Owned by a state
    StateOwned,
}

impl Ticker {
    /// Read a ticker cell: `Private`, `State-owned` (ignoring case) or an exchange symbol
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        let key = UniCase::new(label);
        if key == UniCase::new("Private") {
            Self::Private
        } else if key == UniCase::new("State-owned") {
            Self::StateOwned
        } else {
            Self::Listed(label.to_string())
        }
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Listed(symbol) => symbol,
            Self::Private => "Private",
            Self::StateOwned => "State-owned",
        };
        f.pad(label)
    }
}

/// A shipping company
#[derive(Debug, Clone, PartialEq)]
pub struct ShippingCompany {
    /// Company name
    pub name: String,
    /// How the company is held
    pub ticker: Ticker,
    /// Market capitalisation, if known
    pub market_cap: Option<Dollars>,
    /// Whether the market capitalisation is an estimate (e.g. for private companies)
    pub market_cap_estimated: bool,
    /// The fleet as authored, e.g. `"800+ vessels"`
    pub fleet: String,
    /// Number of vessels in the fleet
    pub fleet_size: u32,
    /// Where the company is based
    pub headquarters: String,
    /// Market segments the company operates in
    pub segment: String,
    /// Annual revenue
    pub revenue: Dollars,
}

impl ShippingCompany {
    /// The market capitalisation used for ranking. Companies with no value rank as zero.
    pub fn market_cap_sort_key(&self) -> f64 {
        self.market_cap.map_or(0.0, Dollars::value)
    }

    /// The market capitalisation as shown to users, e.g. `"~$80B (est.)"` or `"N/A"`
    pub fn display_market_cap(&self) -> String {
        match self.market_cap {
            None => "N/A".to_string(),
            Some(cap) if self.market_cap_estimated => {
                format!("~{} (est.)", format_compact_dollars(cap))
            }
            Some(cap) => format_compact_dollars(cap),
        }
    }
}

/// Rank companies by market capitalisation, largest first.
///
/// The sort is stable. If `top` is given, only that many companies are returned.
pub fn rank_by_market_cap(
    companies: &[ShippingCompany],
    top: Option<usize>,
) -> Vec<&ShippingCompany> {
    let mut ranked: Vec<_> = companies.iter().collect();
    ranked.sort_by(|a, b| b.market_cap_sort_key().total_cmp(&a.market_cap_sort_key()));
    if let Some(top) = top {
        ranked.truncate(top);
    }

    ranked
}

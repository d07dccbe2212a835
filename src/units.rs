//! This module defines the unit types used for figures in the dataset.
//!
//! Figures are authored as decorated text (e.g. `"~$80B (est.)"`) but held as typed numbers once a
//! dataset is loaded. Display strings are produced again by the formatting functions in
//! [`crate::number`].

macro_rules! unit_struct {
    ($name:ident) => {
        /// Represents a type of quantity.
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            PartialOrd,
            Default,
            derive_more::Add,
            derive_more::Sub,
            serde::Serialize,
            serde::Deserialize,
        )]
        pub struct $name(pub f64);

        impl $name {
            /// Creates a new instance of the unit type from a f64 value.
            pub fn new(val: f64) -> Self {
                Self(val)
            }

            /// Returns the value of the unit type as a f64.
            pub fn value(self) -> f64 {
                self.0
            }

            /// Whether the underlying value is finite
            pub fn is_finite(self) -> bool {
                self.0.is_finite()
            }
        }

        impl float_cmp::ApproxEq for $name {
            type Margin = float_cmp::F64Margin;

            fn approx_eq<T: Into<Self::Margin>>(self, other: Self, margin: T) -> bool {
                self.0.approx_eq(other.0, margin)
            }
        }

        impl std::iter::Sum for $name {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                $name(iter.map(|x| x.0).sum())
            }
        }
    };
}

// A percentage, where 100.0 represents the whole
unit_struct!(Percent);
// An amount of money in US dollars
unit_struct!(Dollars);

impl Percent {
    /// Whether the value is a valid share of a whole, i.e. between 0 and 100 inclusive
    pub fn is_valid_share(self) -> bool {
        (0.0..=100.0).contains(&self.0)
    }
}

/// The relative change from `old` to `new`, or `None` if `old` is zero
pub fn percent_change(old: Dollars, new: Dollars) -> Option<Percent> {
    if old.0 == 0.0 {
        return None;
    }

    Some(Percent((new.0 - old.0) / old.0 * 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_percent_change() {
        let change = percent_change(Dollars(12_000.0), Dollars(25_500.0)).unwrap();
        assert_approx_eq!(Percent, change, Percent(112.5));

        let change = percent_change(Dollars(55_000.0), Dollars(42_000.0)).unwrap();
        assert_approx_eq!(Percent, change, Percent(-23.636_363_636), epsilon = 1e-6);

        assert!(percent_change(Dollars(0.0), Dollars(1.0)).is_none());
    }

    #[test]
    fn test_is_valid_share() {
        assert!(Percent(0.0).is_valid_share());
        assert!(Percent(100.0).is_valid_share());
        assert!(!Percent(-0.1).is_valid_share());
        assert!(!Percent(100.1).is_valid_share());
        assert!(!Percent(f64::NAN).is_valid_share());
    }
}

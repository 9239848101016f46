//! Norwegian number formatting for prices and mileage.
//!
//! The listing page is pinned to the `no-NO` locale: digit groups of three
//! separated by a no-break space, whole kroner only, currency symbol after the amount.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Shown wherever an optional attribute is missing.
pub const PLACEHOLDER_DASH: &str = "—";

/// Group separator used by the `no-NO` locale (U+00A0 NO-BREAK SPACE).
const GROUP_SEPARATOR: char = '\u{a0}';

/// A price in whole Norwegian kroner.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Nok(pub u64);

impl ValueObject for Nok {}

impl core::fmt::Display for Nok {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}{GROUP_SEPARATOR}kr", group_thousands(self.0))
    }
}

/// An odometer reading in kilometres.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilometres(pub u64);

impl ValueObject for Kilometres {}

impl core::fmt::Display for Kilometres {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} km", group_thousands(self.0))
    }
}

/// Format `value` with `no-NO` digit grouping, e.g. `1234567` -> `1 234 567`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits_by_three_with_no_break_space() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1\u{a0}000");
        assert_eq!(group_thousands(349_900), "349\u{a0}900");
        assert_eq!(group_thousands(1_234_567), "1\u{a0}234\u{a0}567");
    }

    #[test]
    fn price_renders_whole_kroner_with_symbol_last() {
        assert_eq!(Nok(349_900).to_string(), "349\u{a0}900\u{a0}kr");
        assert_eq!(Nok(1_250_000).to_string(), "1\u{a0}250\u{a0}000\u{a0}kr");
        assert_eq!(Nok(0).to_string(), "0\u{a0}kr");
    }

    #[test]
    fn mileage_renders_with_unit() {
        assert_eq!(Kilometres(45_000).to_string(), "45\u{a0}000 km");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: removing the separators gives back the plain number.
            #[test]
            fn grouping_is_lossless(value in any::<u64>()) {
                let grouped = group_thousands(value);
                let plain: String = grouped.chars().filter(|c| *c != GROUP_SEPARATOR).collect();
                prop_assert_eq!(plain, value.to_string());
            }
        }
    }
}

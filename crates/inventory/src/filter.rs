//! Listing filters.
//!
//! Filtering is a pure function of the full dataset and the criteria. The
//! output is always a subsequence of the input (original order kept), and the
//! dataset itself is never touched.

use crate::listing::CarListing;

/// Raw text of the filter controls, exactly as the page reports it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterInput {
    pub search: String,
    pub make: String,
    pub year_min: String,
    pub year_max: String,
    pub fuel: String,
}

/// Parsed filter criteria. Every `None` means "don't filter on this".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Trimmed, lower-cased free-text term.
    pub term: Option<String>,
    pub make: Option<String>,
    /// Signed: a negative upper bound is accepted and excludes every dated
    /// listing.
    pub year_min: Option<i64>,
    pub year_max: Option<i64>,
    pub fuel: Option<String>,
}

impl FilterCriteria {
    /// Parse the raw control values.
    ///
    /// Blank text means "any". Year text is read like an integer prefix:
    /// leading whitespace and an optional sign, then digits up to the first
    /// non-digit (`"2020abc"` is 2020). Text without leading digits is no
    /// bound, and so is `0` (the controls' "any year").
    pub fn from_input(input: &FilterInput) -> Self {
        Self {
            term: non_blank(input.search.trim()).map(str::to_lowercase),
            make: non_blank(&input.make).map(str::to_string),
            year_min: parse_year_bound(&input.year_min),
            year_max: parse_year_bound(&input.year_max),
            fuel: non_blank(&input.fuel).map(str::to_string),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// AND of all set criteria.
    pub fn matches(&self, listing: &CarListing) -> bool {
        if let Some(term) = &self.term {
            if !listing.search_text().contains(term.as_str()) {
                return false;
            }
        }
        if let Some(make) = &self.make {
            if listing.make != *make {
                return false;
            }
        }
        if let (Some(min), Some(year)) = (self.year_min, listing.year) {
            if i64::from(year) < min {
                return false;
            }
        }
        if let (Some(max), Some(year)) = (self.year_max, listing.year) {
            if i64::from(year) > max {
                return false;
            }
        }
        if let Some(fuel) = &self.fuel {
            if listing.fuel.as_deref() != Some(fuel.as_str()) {
                return false;
            }
        }
        true
    }
}

/// Listings matching `criteria`, in their original order.
pub fn filter<'a>(items: &'a [CarListing], criteria: &FilterCriteria) -> Vec<&'a CarListing> {
    items.iter().filter(|listing| criteria.matches(listing)).collect()
}

fn non_blank(value: &str) -> Option<&str> {
    if value.trim().is_empty() { None } else { Some(value) }
}

fn parse_year_bound(value: &str) -> Option<i64> {
    let text = value.trim_start();
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = unsigned.find(|c: char| !c.is_ascii_digit()).unwrap_or(unsigned.len());
    if end == 0 {
        return None;
    }
    // Digits only, so the parse can only fail on overflow.
    let magnitude = unsigned[..end].parse::<i64>().unwrap_or(i64::MAX);
    let year = if negative { -magnitude } else { magnitude };
    (year != 0).then_some(year)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: &str, make: &str, model: &str, year: u32, fuel: &str) -> CarListing {
        let mut listing = CarListing::new(id.parse().unwrap(), make, model);
        listing.year = Some(year);
        listing.fuel = Some(fuel.to_string());
        listing
    }

    fn sample() -> Vec<CarListing> {
        vec![
            listing("a", "Audi", "A4", 2019, "Diesel"),
            listing("b", "BMW", "i4", 2021, "Electric"),
        ]
    }

    fn ids(items: &[&CarListing]) -> Vec<String> {
        items.iter().map(|l| l.id.to_string()).collect()
    }

    fn input() -> FilterInput {
        FilterInput::default()
    }

    #[test]
    fn make_filter_is_exact() {
        let items = sample();
        let criteria = FilterCriteria::from_input(&FilterInput { make: "BMW".into(), ..input() });
        assert_eq!(ids(&filter(&items, &criteria)), vec!["b"]);

        let criteria = FilterCriteria::from_input(&FilterInput { make: "bmw".into(), ..input() });
        assert!(filter(&items, &criteria).is_empty());
    }

    #[test]
    fn year_min_excludes_older_listings() {
        let items = sample();
        let criteria = FilterCriteria::from_input(&FilterInput { year_min: "2020".into(), ..input() });
        assert_eq!(ids(&filter(&items, &criteria)), vec!["b"]);
    }

    #[test]
    fn empty_criteria_return_everything_in_order() {
        let items = sample();
        let criteria = FilterCriteria::from_input(&input());
        assert!(criteria.is_empty());
        assert_eq!(ids(&filter(&items, &criteria)), vec!["a", "b"]);
    }

    #[test]
    fn year_bounds_are_inclusive() {
        let items = sample();
        let criteria = FilterCriteria::from_input(&FilterInput {
            year_min: "2019".into(),
            year_max: "2019".into(),
            ..input()
        });
        assert_eq!(ids(&filter(&items, &criteria)), vec!["a"]);
    }

    #[test]
    fn unparsable_or_zero_years_mean_no_bound() {
        for raw in ["", "   ", "abc", "-", "x2020", "0", "-0", "+0"] {
            let criteria = FilterCriteria::from_input(&FilterInput {
                year_min: raw.into(),
                year_max: raw.into(),
                ..input()
            });
            assert_eq!(criteria.year_min, None, "year_min from {raw:?}");
            assert_eq!(criteria.year_max, None, "year_max from {raw:?}");
        }
    }

    #[test]
    fn year_text_is_read_up_to_the_first_non_digit() {
        let cases = [
            ("2020abc", Some(2020)),
            (" 2019", Some(2019)),
            ("20.5", Some(20)),
            ("+2021", Some(2021)),
            ("-5", Some(-5)),
            ("99999999999999999999", Some(i64::MAX)),
        ];
        for (raw, expected) in cases {
            let criteria = FilterCriteria::from_input(&FilterInput { year_max: raw.into(), ..input() });
            assert_eq!(criteria.year_max, expected, "year_max from {raw:?}");
        }
    }

    #[test]
    fn negative_year_max_excludes_every_dated_listing() {
        let mut items = sample();
        items.push(CarListing::new("c".parse().unwrap(), "Tesla", "Model 3"));
        let criteria = FilterCriteria::from_input(&FilterInput { year_max: "-5".into(), ..input() });
        assert_eq!(ids(&filter(&items, &criteria)), vec!["c"]);

        let criteria = FilterCriteria::from_input(&FilterInput { year_min: "-5".into(), ..input() });
        assert_eq!(ids(&filter(&items, &criteria)), vec!["a", "b", "c"]);
    }

    #[test]
    fn trailing_garbage_after_year_still_bounds() {
        let items = sample();
        let criteria = FilterCriteria::from_input(&FilterInput { year_min: "2020abc".into(), ..input() });
        assert_eq!(ids(&filter(&items, &criteria)), vec!["b"]);
    }

    #[test]
    fn listing_without_year_passes_year_bounds() {
        let mut items = sample();
        items.push(CarListing::new("c".parse().unwrap(), "Tesla", "Model 3"));
        let criteria = FilterCriteria::from_input(&FilterInput {
            year_min: "2020".into(),
            year_max: "2022".into(),
            ..input()
        });
        assert_eq!(ids(&filter(&items, &criteria)), vec!["b", "c"]);
    }

    #[test]
    fn free_text_searches_make_model_and_trim() {
        let mut items = sample();
        items[0].trim = Some("Avant Quattro".into());
        let criteria = FilterCriteria::from_input(&FilterInput { search: "quattro".into(), ..input() });
        assert_eq!(ids(&filter(&items, &criteria)), vec!["a"]);

        let criteria = FilterCriteria::from_input(&FilterInput { search: "bmw i4".into(), ..input() });
        assert_eq!(ids(&filter(&items, &criteria)), vec!["b"]);
    }

    #[test]
    fn fuel_filter_is_exact_and_skips_listings_without_fuel() {
        let mut items = sample();
        items[0].fuel = None;
        let criteria = FilterCriteria::from_input(&FilterInput { fuel: "Electric".into(), ..input() });
        assert_eq!(ids(&filter(&items, &criteria)), vec!["b"]);
        let criteria = FilterCriteria::from_input(&FilterInput { fuel: "Diesel".into(), ..input() });
        assert!(filter(&items, &criteria).is_empty());
    }

    #[test]
    fn criteria_are_and_combined() {
        let items = sample();
        let criteria = FilterCriteria::from_input(&FilterInput {
            make: "Audi".into(),
            fuel: "Electric".into(),
            ..input()
        });
        assert!(filter(&items, &criteria).is_empty());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_listing() -> impl Strategy<Value = CarListing> {
            (
                "[a-z0-9]{1,8}",
                prop::sample::select(vec!["Audi", "BMW", "Volvo", "Tesla"]),
                "[A-Za-z0-9]{1,6}",
                prop::option::of(1990u32..2030),
                prop::option::of(prop::sample::select(vec!["Diesel", "Petrol", "Electric"])),
            )
                .prop_map(|(id, make, model, year, fuel)| {
                    let mut listing = CarListing::new(id.parse().unwrap(), make, model);
                    listing.year = year;
                    listing.fuel = fuel.map(str::to_string);
                    listing
                })
        }

        fn arb_input() -> impl Strategy<Value = FilterInput> {
            (
                "[ A-Za-z0-9]{0,6}",
                prop::sample::select(vec!["", "Audi", "BMW", "Volvo"]),
                prop::sample::select(vec!["", "0", "x", "2000", "2015"]),
                prop::sample::select(vec!["", "9999", "y", "2010", "2025"]),
                prop::sample::select(vec!["", "Diesel", "Electric"]),
            )
                .prop_map(|(search, make, year_min, year_max, fuel)| FilterInput {
                    search,
                    make: make.into(),
                    year_min: year_min.into(),
                    year_max: year_max.into(),
                    fuel: fuel.into(),
                })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: output is an order-preserving subsequence of the input.
            #[test]
            fn filter_is_a_stable_subsequence(
                items in prop::collection::vec(arb_listing(), 0..20),
                raw in arb_input(),
            ) {
                let criteria = FilterCriteria::from_input(&raw);
                let out = filter(&items, &criteria);

                let mut cursor = items.iter();
                for kept in &out {
                    prop_assert!(cursor.any(|candidate| std::ptr::eq(candidate, *kept)));
                }
            }

            /// Property: free text is trimmed and case-insensitive.
            #[test]
            fn padded_upper_case_term_matches_like_plain(
                items in prop::collection::vec(arb_listing(), 0..20),
                term in "[a-z0-9]{1,4}",
            ) {
                let plain = FilterCriteria::from_input(&FilterInput { search: term.clone(), ..FilterInput::default() });
                let padded = FilterCriteria::from_input(&FilterInput {
                    search: format!("  {}  ", term.to_uppercase()),
                    ..FilterInput::default()
                });
                prop_assert_eq!(filter(&items, &plain), filter(&items, &padded));
            }

            /// Property: with both bounds set, dated listings are inside them.
            #[test]
            fn dated_results_respect_both_bounds(
                items in prop::collection::vec(arb_listing(), 0..20),
                min in 1990u32..2030,
                span in 0u32..20,
            ) {
                let max = min + span;
                let criteria = FilterCriteria {
                    year_min: Some(i64::from(min)),
                    year_max: Some(i64::from(max)),
                    ..FilterCriteria::default()
                };
                for listing in filter(&items, &criteria) {
                    if let Some(year) = listing.year {
                        prop_assert!(min <= year && year <= max);
                    }
                }
            }
        }
    }
}

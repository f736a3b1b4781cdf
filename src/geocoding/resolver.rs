use tracing::{debug, warn};

use crate::ranking::Coordinate;

use super::Geocoder;

/// Location text longer than this loses its first two comma segments before
/// the first lookup.
pub const LONG_LOCATION_CHARS: usize = 200;

/// Retry and fallback policy over a primary and a secondary geocoder.
///
/// Attempts, first success wins:
/// 1. primary on the location (shortened first if it is long),
/// 2. secondary on the same text,
/// 3. secondary again without the first comma segment.
pub struct Resolver<'a> {
    primary: &'a dyn Geocoder,
    secondary: &'a dyn Geocoder,
}

impl<'a> Resolver<'a> {
    pub const fn new(primary: &'a dyn Geocoder, secondary: &'a dyn Geocoder) -> Self {
        Self { primary, secondary }
    }

    /// Returns `None` when every attempt fails; provider errors are logged and
    /// count as a failed attempt.
    pub fn resolve(&self, location: &str) -> Option<Coordinate> {
        let query = if location.chars().count() > LONG_LOCATION_CHARS {
            drop_segments(location, 2)
        } else {
            location.trim().to_string()
        };

        attempt(self.primary, &query)
            .or_else(|| attempt(self.secondary, &query))
            .or_else(|| attempt(self.secondary, &drop_segments(&query, 1)))
    }
}

fn attempt(geocoder: &dyn Geocoder, query: &str) -> Option<Coordinate> {
    if query.is_empty() {
        return None;
    }

    match geocoder.geocode(query) {
        Ok(Some(coordinate)) => {
            debug!(provider = geocoder.name(), query, ?coordinate, "resolved");
            Some(coordinate)
        }
        Ok(None) => {
            debug!(provider = geocoder.name(), query, "not found");
            None
        }
        Err(e) => {
            warn!(provider = geocoder.name(), query, error = %e, "geocoding failed");
            None
        }
    }
}

/// Removes the first `count` comma-separated segments.
fn drop_segments(text: &str, count: usize) -> String {
    text.split(',').skip(count).collect::<Vec<_>>().join(",").trim().to_string()
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::HashMap};

    use super::*;
    use crate::error::{Error, Result};

    /// Answers from a fixed table and remembers every query.
    #[derive(Default)]
    struct StubGeocoder {
        known: HashMap<String, Coordinate>,
        failing: bool,
        queries: RefCell<Vec<String>>,
    }

    impl StubGeocoder {
        fn knowing(entries: &[(&str, Coordinate)]) -> Self {
            Self {
                known: entries
                    .iter()
                    .map(|(query, coordinate)| ((*query).to_string(), *coordinate))
                    .collect(),
                ..Self::default()
            }
        }

        fn failing() -> Self {
            Self {
                failing: true,
                ..Self::default()
            }
        }

        fn queries(&self) -> Vec<String> {
            self.queries.borrow().clone()
        }
    }

    impl Geocoder for StubGeocoder {
        fn name(&self) -> &'static str {
            "stub"
        }

        fn geocode(&self, query: &str) -> Result<Option<Coordinate>> {
            self.queries.borrow_mut().push(query.to_string());
            if self.failing {
                return Err(Error::GeocodeProvider {
                    provider: "stub",
                    reason: "rate limited".to_string(),
                });
            }
            Ok(self.known.get(query).copied())
        }
    }

    const AUSTIN: Coordinate = Coordinate::new(30.267_59, -97.742_99);

    #[test]
    fn primary_hit_skips_secondary() {
        let primary = StubGeocoder::knowing(&[("Austin, Texas, USA", AUSTIN)]);
        let secondary = StubGeocoder::default();

        let resolved = Resolver::new(&primary, &secondary).resolve("Austin, Texas, USA");

        assert_eq!(resolved, Some(AUSTIN));
        assert!(secondary.queries().is_empty());
    }

    #[test]
    fn long_location_loses_two_segments_first() {
        let venue = "x".repeat(LONG_LOCATION_CHARS);
        let location = format!("{venue}, Stage 4, Austin, Texas, USA");
        let primary = StubGeocoder::knowing(&[("Austin, Texas, USA", AUSTIN)]);
        let secondary = StubGeocoder::default();

        let resolved = Resolver::new(&primary, &secondary).resolve(&location);

        assert_eq!(resolved, Some(AUSTIN));
        assert_eq!(primary.queries(), vec!["Austin, Texas, USA"]);
    }

    #[test]
    fn exactly_limit_is_not_shortened() {
        let location = format!("{}, USA", "y".repeat(LONG_LOCATION_CHARS - 5));
        assert_eq!(location.chars().count(), LONG_LOCATION_CHARS);
        let primary = StubGeocoder::default();
        let secondary = StubGeocoder::default();

        let resolved = Resolver::new(&primary, &secondary).resolve(&location);

        assert_eq!(resolved, None);
        assert_eq!(primary.queries(), vec![location]);
    }

    #[test]
    fn falls_back_to_secondary_then_shortened_secondary() {
        let primary = StubGeocoder::default();
        let secondary = StubGeocoder::knowing(&[("Austin, Texas, USA", AUSTIN)]);

        let resolved =
            Resolver::new(&primary, &secondary).resolve("Love Balls, Austin, Texas, USA");

        assert_eq!(resolved, Some(AUSTIN));
        assert_eq!(primary.queries(), vec!["Love Balls, Austin, Texas, USA"]);
        assert_eq!(
            secondary.queries(),
            vec!["Love Balls, Austin, Texas, USA", "Austin, Texas, USA"]
        );
    }

    #[test]
    fn provider_errors_count_as_failed_attempts() {
        let primary = StubGeocoder::failing();
        let secondary = StubGeocoder::knowing(&[("Texas, USA", AUSTIN)]);

        let resolved = Resolver::new(&primary, &secondary).resolve("Austin, Texas, USA");

        assert_eq!(resolved, Some(AUSTIN));
        assert_eq!(primary.queries().len(), 1);
    }

    #[test]
    fn unresolvable_everywhere() {
        let primary = StubGeocoder::failing();
        let secondary = StubGeocoder::failing();

        let resolved = Resolver::new(&primary, &secondary).resolve("Nowhere, Atlantis");

        assert_eq!(resolved, None);
        assert_eq!(secondary.queries(), vec!["Nowhere, Atlantis", "Atlantis"]);
    }

    #[test]
    fn single_segment_is_not_retried_empty() {
        let primary = StubGeocoder::default();
        let secondary = StubGeocoder::default();

        assert_eq!(Resolver::new(&primary, &secondary).resolve("Atlantis"), None);
        assert_eq!(secondary.queries(), vec!["Atlantis"]);
    }

    #[test]
    fn drops_segments() {
        assert_eq!(drop_segments("a, b, c, d", 2), "c, d");
        assert_eq!(drop_segments("a, b", 1), "b");
        assert_eq!(drop_segments("a", 1), "");
    }
}

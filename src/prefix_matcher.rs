// Copyright (C) 2025 The rdialnumber Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use log::trace;

use crate::{dialnumberutil::{CountryEntry, MatchStrategy}, interfaces::CountryMatcherApi};

/// Returns the matcher implementing `strategy`.
pub(crate) fn matcher_for_strategy(strategy: MatchStrategy) -> Box<dyn CountryMatcherApi + Send + Sync> {
    match strategy {
        MatchStrategy::LongestPrefix => Box::new(LongestPrefixMatcher),
        MatchStrategy::FirstMatch => Box::new(FirstMatchMatcher),
    }
}

/// Scans the database in order and stops at the first owning entry.
pub struct FirstMatchMatcher;

impl CountryMatcherApi for FirstMatchMatcher {
    fn match_country<'a>(&self, database: &'a [CountryEntry], digits: &str) -> Option<&'a CountryEntry> {
        let found = database
            .iter()
            .find(|entry| digits.starts_with(entry.international_prefix()));
        if let Some(entry) = found {
            trace!("Digits '{digits}' matched {} (+{}) first in database order", entry.code(), entry.international_prefix());
        }
        found
    }
}

/// Examines every entry and keeps the one with the longest owning
/// international prefix. Equal lengths keep the earlier entry.
pub struct LongestPrefixMatcher;

impl CountryMatcherApi for LongestPrefixMatcher {
    fn match_country<'a>(&self, database: &'a [CountryEntry], digits: &str) -> Option<&'a CountryEntry> {
        let mut best: Option<&'a CountryEntry> = None;
        for entry in database {
            if !digits.starts_with(entry.international_prefix()) {
                continue;
            }
            // strictly longer, so the earliest of equal prefixes survives
            let is_longer = best.map_or(true, |current| {
                entry.international_prefix().len() > current.international_prefix().len()
            });
            if is_longer {
                best = Some(entry);
            }
        }
        if let Some(entry) = best {
            trace!("Digits '{digits}' matched {} (+{}) as longest prefix", entry.code(), entry.international_prefix());
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::{FirstMatchMatcher, LongestPrefixMatcher};
    use crate::{dialnumberutil::CountryEntry, interfaces::CountryMatcherApi};

    fn overlapping_database() -> Vec<CountryEntry> {
        vec![
            CountryEntry::new("US", "1").with_national_prefix("1"),
            CountryEntry::new("BS", "1242").with_national_prefix("1"),
            CountryEntry::new("UK", "44"),
        ]
    }

    #[test]
    fn first_match_follows_database_order() {
        let database = overlapping_database();
        let found = FirstMatchMatcher.match_country(&database, "12425551234").unwrap();
        assert_eq!("US", found.code());
    }

    #[test]
    fn longest_prefix_ignores_database_order() {
        let database = overlapping_database();
        let found = LongestPrefixMatcher.match_country(&database, "12425551234").unwrap();
        assert_eq!("BS", found.code());

        let found = LongestPrefixMatcher.match_country(&database, "12125551234").unwrap();
        assert_eq!("US", found.code());
    }

    #[test]
    fn longest_prefix_keeps_earliest_duplicate() {
        let database = vec![CountryEntry::new("RU", "7"), CountryEntry::new("KZ", "7")];
        let found = LongestPrefixMatcher.match_country(&database, "79001234567").unwrap();
        assert!(std::ptr::eq(found, &database[0]));
    }

    #[test]
    fn no_owner_yields_none() {
        let database = overlapping_database();
        assert!(FirstMatchMatcher.match_country(&database, "993").is_none());
        assert!(LongestPrefixMatcher.match_country(&database, "993").is_none());
        assert!(LongestPrefixMatcher.match_country(&database, "").is_none());
    }
}

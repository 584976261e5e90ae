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

use log::warn;

use super::{CountryEntry, MatchStrategy, helper_constants::PLUS_SIGN, number_regexps::NUMBER_REGEXPS};

/// Returns true if `number` is an optional single leading `+` followed by
/// one or more ASCII digits, and nothing else.
///
/// ```
/// use rdialnumber::is_valid_format;
///
/// assert!(is_valid_format("+85212345678"));
/// assert!(is_valid_format("012345678"));
/// assert!(!is_valid_format("+85+212345678"));
/// assert!(!is_valid_format("+85a103940"));
/// ```
pub fn is_valid_format(number: &str) -> bool {
    NUMBER_REGEXPS.valid_number_pattern.is_match(number)
}

/// Builds the canonical form `+<international_prefix><national_number>`.
pub(super) fn prefix_number_with_international_prefix(
    international_prefix: &str,
    national_number: &str,
) -> String {
    // single allocation with the capacity of the resulting string
    fast_cat::concat_str!(PLUS_SIGN, international_prefix, national_number)
}

fn is_digit_string(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Returns `(shadowing, shadowed)` index pairs where the earlier entry's
/// international prefix is a strict prefix of the later entry's. Under
/// first-match resolution the later entry can never be resolved.
pub(super) fn find_shadowed_entries(database: &[CountryEntry]) -> Vec<(usize, usize)> {
    let mut shadowed = Vec::new();
    for (later_index, later) in database.iter().enumerate() {
        let later_prefix = later.international_prefix();
        let shadowing = database[..later_index].iter().position(|earlier| {
            let earlier_prefix = earlier.international_prefix();
            earlier_prefix.len() < later_prefix.len() && later_prefix.starts_with(earlier_prefix)
        });
        if let Some(earlier_index) = shadowing {
            shadowed.push((earlier_index, later_index));
        }
    }
    shadowed
}

/// Logs every suspicious entry of a freshly supplied database. The database
/// is still used as is.
pub(super) fn report_database_issues(database: &[CountryEntry], strategy: MatchStrategy) {
    for entry in database {
        if !is_digit_string(entry.international_prefix()) {
            warn!(
                "Country {} has an invalid international prefix '{}', expected a non-empty digit string",
                entry.code(),
                entry.international_prefix()
            );
        }
        if entry.has_explicit_national_prefix() && entry.national_prefix().is_empty() {
            warn!(
                "Country {} has an empty national prefix: every number dialled from it is treated as national",
                entry.code()
            );
        }
    }

    if let MatchStrategy::FirstMatch = strategy {
        for (earlier, later) in find_shadowed_entries(database) {
            warn!(
                "Country {} (+{}) is unreachable: it is shadowed by the earlier entry {} (+{})",
                database[later].code(),
                database[later].international_prefix(),
                database[earlier].code(),
                database[earlier].international_prefix()
            );
        }
    }
}

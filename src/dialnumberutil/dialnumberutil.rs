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

use std::borrow::Cow;

use log::trace;

use super::{
    CountryEntry, DialledNumberFormat, MatchStrategy,
    errors::InvalidNumberError,
    helper_constants::PLUS_SIGN,
    helper_functions::{is_valid_format, prefix_number_with_international_prefix, report_database_issues},
    helper_types::DialledNumberInterpretation,
};
use crate::{interfaces::CountryMatcherApi, prefix_matcher::matcher_for_strategy};

// Helper type for Result
pub type Result<T> = std::result::Result<T, InvalidNumberError>;

/// Normalizes dialled numbers against a caller-supplied country database.
///
/// The database is borrowed for the whole lifetime of the instance and every
/// resolved [`CountryEntry`] is a reference into it. The instance holds no
/// mutable state and can be shared between threads.
///
/// ```
/// use rdialnumber::{CountryEntry, DialNumberUtil};
///
/// let database = vec![
///     CountryEntry::new("HK", "852"),
///     CountryEntry::new("US", "1").with_national_prefix("1"),
/// ];
/// let util = DialNumberUtil::new(&database);
///
/// assert_eq!("+85212345678", util.format_number("012345678", "+85212876543").unwrap());
/// assert_eq!("+112345678", util.format_number("112345678", "+1212876543").unwrap());
/// ```
pub struct DialNumberUtil<'a> {
    /// The country table, in the order the caller supplied it.
    database: &'a [CountryEntry],

    strategy: MatchStrategy,

    /// Prefix lookup implementing `strategy`.
    matcher_api: Box<dyn CountryMatcherApi + Send + Sync>,
}

impl<'a> DialNumberUtil<'a> {
    /// Creates a normalizer resolving countries by longest prefix match.
    pub fn new(database: &'a [CountryEntry]) -> Self {
        Self::with_strategy(database, MatchStrategy::default())
    }

    /// Creates a normalizer using the given prefix matching strategy.
    ///
    /// Suspicious entries (non-digit international prefixes, empty national
    /// prefixes, entries unreachable under [`MatchStrategy::FirstMatch`]) are
    /// logged as warnings but the database is used unchanged.
    pub fn with_strategy(database: &'a [CountryEntry], strategy: MatchStrategy) -> Self {
        report_database_issues(database, strategy);
        Self {
            database,
            strategy,
            matcher_api: matcher_for_strategy(strategy),
        }
    }

    pub fn database(&self) -> &'a [CountryEntry] {
        self.database
    }

    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    /// Checks whether `number` is an optional leading `+` followed by digits
    /// only.
    pub fn test_number_format(&self, number: &str) -> bool {
        is_valid_format(number)
    }

    /// Finds the country owning an international number.
    ///
    /// Only the leading `+` is checked here: callers should run
    /// [`test_number_format`](Self::test_number_format) first, a malformed
    /// tail either matches a country anyway or ends up as
    /// `UndefinedCountryPrefix`.
    ///
    /// # Errors
    /// - `IncorrectFormat` if `number` does not start with `+`.
    /// - `UndefinedCountryPrefix` if no international prefix of the database
    ///   is a prefix of the digits after `+`.
    pub fn find_country(&self, number: &str) -> Result<&'a CountryEntry> {
        let Some(digits) = number.strip_prefix(PLUS_SIGN) else {
            trace!("Number '{number}' has no leading plus sign");
            return Err(InvalidNumberError::incorrect_format());
        };
        self.matcher_api
            .match_country(self.database, digits)
            .ok_or_else(|| {
                trace!("Number '{number}' has no known country prefix");
                InvalidNumberError::undefined_country_prefix()
            })
    }

    /// Converts `dialled_number` into canonical international form, using
    /// `context_number` (e.g. the caller's own number) to decide which
    /// national prefix applies.
    ///
    /// Returns the dialled number borrowed when it already is canonical.
    ///
    /// # Errors
    /// - `IncorrectFormat` if either number contains anything but an optional
    ///   leading `+` and digits, if the context number is not international,
    ///   or if the dialled number has neither the context's national prefix
    ///   nor a leading `+`.
    /// - `UndefinedCountryPrefix` if the context number, or an international
    ///   dialled number, belongs to no country of the database.
    pub fn normalize_number<'b>(
        &self,
        dialled_number: &'b str,
        context_number: &str,
    ) -> Result<Cow<'b, str>> {
        match self.interpret(dialled_number, context_number)? {
            DialledNumberInterpretation::National { country, national_number } => {
                Ok(Cow::Owned(prefix_number_with_international_prefix(
                    country.international_prefix(),
                    national_number,
                )))
            }
            DialledNumberInterpretation::International => Ok(Cow::Borrowed(dialled_number)),
        }
    }

    /// Same as [`normalize_number`](Self::normalize_number), always returning
    /// an owned string.
    pub fn format_number(&self, dialled_number: &str, context_number: &str) -> Result<String> {
        self.normalize_number(dialled_number, context_number)
            .map(Cow::into_owned)
    }

    /// Reports whether `dialled_number` would be handled as a national or an
    /// international number. Fails exactly where
    /// [`normalize_number`](Self::normalize_number) does.
    pub fn classify_dialled_number(
        &self,
        dialled_number: &str,
        context_number: &str,
    ) -> Result<DialledNumberFormat> {
        Ok(match self.interpret(dialled_number, context_number)? {
            DialledNumberInterpretation::National { .. } => DialledNumberFormat::National,
            DialledNumberInterpretation::International => DialledNumberFormat::International,
        })
    }

    fn interpret<'b>(
        &self,
        dialled_number: &'b str,
        context_number: &str,
    ) -> Result<DialledNumberInterpretation<'a, 'b>> {
        if !is_valid_format(dialled_number) || !is_valid_format(context_number) {
            trace!("Rejecting '{dialled_number}' dialled from '{context_number}': invalid characters");
            return Err(InvalidNumberError::incorrect_format());
        }

        let context_country = self.find_country(context_number)?;
        if let Some(national_number) = dialled_number.strip_prefix(context_country.national_prefix()) {
            trace!(
                "Number '{dialled_number}' is national for {} (national prefix '{}')",
                context_country.code(),
                context_country.national_prefix()
            );
            return Ok(DialledNumberInterpretation::National {
                country: context_country,
                national_number,
            });
        }

        // Not national, so it must carry its own international prefix. A
        // missing plus sign surfaces here as IncorrectFormat.
        let country = self.find_country(dialled_number)?;
        trace!("Number '{dialled_number}' is international for {}", country.code());
        Ok(DialledNumberInterpretation::International)
    }
}

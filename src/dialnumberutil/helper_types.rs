use super::CountryEntry;

/// Result of interpreting a dialled number against its context number.
#[derive(Debug)]
pub(super) enum DialledNumberInterpretation<'a, 'b> {
    /// The dialled number began with the national prefix of `country`;
    /// `national_number` is what follows that prefix.
    National {
        country: &'a CountryEntry,
        national_number: &'b str,
    },
    /// The dialled number is already international and owned by a country
    /// of the database.
    International,
}

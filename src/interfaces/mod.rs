use crate::dialnumberutil::CountryEntry;

/// Internal country lookup API used to isolate the prefix matching strategy
/// from the normalizer and allow different implementations to be swapped in
/// easily.
pub(crate) trait CountryMatcherApi {
    /// Returns the entry of `database` that owns `digits`, the part of a
    /// number following its leading `+`, or `None` when no international
    /// prefix of the database is a prefix of `digits`.
    fn match_country<'a>(&self, database: &'a [CountryEntry], digits: &str) -> Option<&'a CountryEntry>;
}

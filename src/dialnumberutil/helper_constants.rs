pub const PLUS_SIGN: &'static str = "+";

/// Trunk prefix assumed for a country entry that does not declare one.
pub const DEFAULT_NATIONAL_PREFIX: &'static str = "0";

// An optional leading plus followed by ASCII digits only. Unicode decimal
// digits are not accepted.
pub const VALID_NUMBER_PATTERN: &'static str = r"\+?[0-9]+";

pub const INCORRECT_FORMAT_MESSAGE: &'static str = "The number is incorrectly formatted";
pub const UNDEFINED_COUNTRY_PREFIX_MESSAGE: &'static str =
    "The number does not have a country prefix";
pub const GENERIC_INVALID_NUMBER_MESSAGE: &'static str = "The number is invalid";

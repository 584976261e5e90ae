mod helper_constants;
mod helper_functions;
mod helper_types;
mod number_regexps;
mod country_entry;
pub mod errors;
pub mod enums;
pub mod dialnumberutil;

pub use country_entry::CountryEntry;
pub use dialnumberutil::DialNumberUtil;
pub use enums::{DialledNumberFormat, MatchStrategy};
pub use errors::{InvalidNumberError, InvalidNumberErrorKind};
pub use helper_functions::is_valid_format;

use crate::CountryEntry;

pub struct RegionCode {}

#[allow(unused)]
impl RegionCode {
    pub fn hk() -> &'static str {
        "HK"
    }

    pub fn jp() -> &'static str {
        "JP"
    }

    pub fn nz() -> &'static str {
        "NZ"
    }

    pub fn uk() -> &'static str {
        "UK"
    }

    pub fn us() -> &'static str {
        "US"
    }

    pub fn bs() -> &'static str {
        "BS"
    }
}

/// The database used throughout the tests, in this exact order.
pub fn test_database() -> Vec<CountryEntry> {
    vec![
        CountryEntry::new(RegionCode::hk(), "852"),
        CountryEntry::new(RegionCode::jp(), "81"),
        CountryEntry::new(RegionCode::nz(), "64"),
        CountryEntry::new(RegionCode::uk(), "44"),
        CountryEntry::new(RegionCode::us(), "1").with_national_prefix("1"),
    ]
}

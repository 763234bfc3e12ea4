pub const NANPA_COUNTRY_CODE: u16 = 1;
// NANP national numbers are always NPA-NXX-XXXX.
pub const NANPA_NATIONAL_NUMBER_LENGTH: usize = 10;
pub const AREA_CODE_LENGTH: usize = 3;
pub const EXCHANGE_CODE_LENGTH: usize = 3;

// Countries where mobile numbers carry an area code and can be geocoded:
// Mexico, Argentina, Brazil, Indonesia and China.
pub const GEO_MOBILE_COUNTRIES: &[u16] = &[52, 54, 55, 62, 86];

/// Zone id used when nothing is known about a number's location.
pub const UNKNOWN_TIMEZONE: &str = "Etc/Unknown";

pub const DEFAULT_REGION: &str = "US";
pub const DEFAULT_LANGUAGE: &str = "en";
pub const SPANISH: &str = "es";
pub const FRENCH: &str = "fr";

// Confidence weights, one per signal. They add up to 100.
pub const VALID_NUMBER_WEIGHT: u8 = 30;
pub const LOCATION_WEIGHT: u8 = 25;
pub const CARRIER_WEIGHT: u8 = 20;
pub const AREA_CODE_WEIGHT: u8 = 15;
pub const CITY_WEIGHT: u8 = 10;
pub const MAX_CONFIDENCE: u8 = 100;

pub const INVALID_NUMBER_FACTOR: &str = "Invalid number format";
pub const PREMIUM_RATE_FACTOR: &str = "Premium rate number - charges may apply";
pub const VOIP_FACTOR: &str = "VoIP number - location may not be accurate";
pub const NO_LOCATION_FACTOR: &str = "Location information unavailable";

pub const DATA_SOURCES: &[&str] = &[
    "libphonenumber metadata",
    "libphonenumber geocoding",
    "libphonenumber carrier",
    "libphonenumber timezones",
    "ISO 3166-1",
    "IANA tz database",
];
pub const ANALYSIS_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const VALID_RESULT: &str = "VALID";
pub const INVALID_RESULT: &str = "INVALID";

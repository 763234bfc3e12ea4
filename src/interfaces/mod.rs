use phonenumber::PhoneNumber;

/// Offline lookup of the place a number is registered in, used to isolate
/// the location database so that different sources can be swapped in easily.
///
/// The bundled `PrefixGeocoder` falls back to the country name when the prefix
/// files know no place. Country names exist in English only, so in any other
/// language a non-geographical number (a Swiss mobile, say) has no location.
pub trait Geocoder: Send + Sync {
    /// Returns a human readable place description in `language`, or `None`
    /// when nothing is known about the number.
    fn location_for(&self, number: &PhoneNumber, language: &str) -> Option<String>;
}

/// Offline lookup of the carrier the number's prefix was originally allocated to.
/// Ported numbers keep reporting the original carrier.
pub trait CarrierMapper: Send + Sync {
    fn carrier_for(&self, number: &PhoneNumber, language: &str) -> Option<String>;
}

/// Maps a number to the IANA zones it may ring in.
pub trait TimezoneMapper: Send + Sync {
    /// Never empty: `Etc/Unknown` stands in when no zone is known.
    fn timezones_for(&self, number: &PhoneNumber) -> Vec<String>;
}

/// ISO 3166-1 data for a region code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRecord {
    pub name: String,
    pub official_name: Option<String>,
    pub alpha3: String,
    /// Zero padded to three digits.
    pub numeric_code: String,
}

pub trait CountryDirectory: Send + Sync {
    fn country_for(&self, region_code: &str) -> Option<CountryRecord>;
}

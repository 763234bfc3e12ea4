use isocountry::CountryCode;

use crate::interfaces::{CountryDirectory, CountryRecord};

/// ISO 3166-1 data from the `isocountry` tables.
///
/// Only the short English name is known offline, so `official_name`
/// is always `None`.
#[derive(Debug, Default, Clone, Copy)]
pub struct IsoCountryDirectory;

impl CountryDirectory for IsoCountryDirectory {
    fn country_for(&self, region_code: &str) -> Option<CountryRecord> {
        let country = CountryCode::for_alpha2(region_code).ok()?;
        Some(CountryRecord {
            name: country.name().to_owned(),
            official_name: None,
            alpha3: country.alpha3().to_owned(),
            numeric_code: format!("{:03}", country.numeric_id()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::IsoCountryDirectory;
    use crate::interfaces::CountryDirectory;

    #[test]
    fn known_region() {
        let record = IsoCountryDirectory.country_for("CH").expect("CH is ISO 3166-1");
        assert_eq!("Switzerland", record.name);
        assert_eq!("CHE", record.alpha3);
        assert_eq!("756", record.numeric_code);
        assert_eq!(None, record.official_name);
    }

    #[test]
    fn numeric_code_is_zero_padded() {
        let record = IsoCountryDirectory.country_for("AD").expect("AD is ISO 3166-1");
        assert_eq!("020", record.numeric_code);
    }

    #[test]
    fn unknown_region() {
        assert!(IsoCountryDirectory.country_for("ZZ").is_none());
        assert!(IsoCountryDirectory.country_for("001").is_none());
    }
}

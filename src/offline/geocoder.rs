use log::trace;
use phonenumber::PhoneNumber;

use super::{IsoCountryDirectory, kind_of, prefix_digits};
use crate::{
    analyzer::{enums::NumberKind, helper_functions::region_metadata},
    interfaces::{CountryDirectory, Geocoder},
    prefix_cache::{PREFIX_TABLES, TableKey, TableKind},
};

/// Country names are only available in this language.
const COUNTRY_NAME_LANGUAGE: &str = "en";

#[derive(Debug, Default, Clone, Copy)]
pub struct PrefixGeocoder {
    countries: IsoCountryDirectory,
}

impl PrefixGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    fn country_name(&self, number: &PhoneNumber, language: &str) -> Option<String> {
        if language != COUNTRY_NAME_LANGUAGE {
            return None;
        }
        let metadata = region_metadata(number)?;
        self.countries
            .country_for(metadata.id())
            .map(|country| country.name)
    }

    fn area_description(&self, number: &PhoneNumber, language: &str) -> Option<String> {
        let key = TableKey::new(TableKind::Geocoding, language, number.code().value());
        let table = PREFIX_TABLES.get_table(&key)?;
        table
            .lookup(&prefix_digits(number))
            .filter(|description| !description.is_empty())
            .map(str::to_owned)
    }
}

impl Geocoder for PrefixGeocoder {
    fn location_for(&self, number: &PhoneNumber, language: &str) -> Option<String> {
        let kind = kind_of(number);
        if kind == NumberKind::Unknown {
            return None;
        }
        if !kind.is_geographical(number.code().value()) {
            return self.country_name(number, language);
        }
        match self.area_description(number, language) {
            Some(description) => Some(description),
            None => {
                trace!("No area description for {}, using the country name", number);
                self.country_name(number, language)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use phonenumber::parse;

    use super::PrefixGeocoder;
    use crate::interfaces::Geocoder;

    fn location(input: &str, language: &str) -> Option<String> {
        let number = parse(None, input).expect("test numbers parse");
        PrefixGeocoder::new().location_for(&number, language)
    }

    #[test]
    fn longest_prefix_is_used() {
        assert_eq!(Some("San Francisco, CA".to_owned()), location("+14155552671", "en"));
        assert_eq!(Some("New York, NY".to_owned()), location("+12125550199", "en"));
    }

    #[test]
    fn localized_tables() {
        assert_eq!(Some("Geneva".to_owned()), location("+41223456789", "en"));
        assert_eq!(Some("Genève".to_owned()), location("+41223456789", "fr"));
    }

    #[test]
    fn leading_zero_is_part_of_the_prefix() {
        assert_eq!(Some("Rome".to_owned()), location("+39 06 1234 5678", "en"));
        assert_eq!(Some("Milan".to_owned()), location("+39 02 1234 5678", "en"));
    }

    #[test]
    fn country_name_fallback_is_english_only() {
        // Mobile numbers are not geographical in Switzerland.
        assert_eq!(Some("Switzerland".to_owned()), location("+41791234567", "en"));
        assert_eq!(None, location("+41791234567", "fr"));
    }
}

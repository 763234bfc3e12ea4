use log::trace;
use phonenumber::PhoneNumber;

use super::{kind_of, prefix_digits};
use crate::{
    analyzer::{enums::NumberKind, helper_constants::UNKNOWN_TIMEZONE},
    interfaces::TimezoneMapper,
    prefix_cache::{PREFIX_TABLES, TableKey},
};

const ZONE_SEPARATOR: char = '&';

/// Zones from the compiled `timezones/map_data.txt` resource.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrefixTimezoneMapper;

impl PrefixTimezoneMapper {
    pub fn new() -> Self {
        Self
    }

    fn lookup(digits: &str) -> Option<Vec<String>> {
        let table = PREFIX_TABLES.get_table(&TableKey::timezones())?;
        let zones = table.lookup(digits)?;
        Some(
            zones
                .split(ZONE_SEPARATOR)
                .filter(|zone| !zone.is_empty())
                .map(str::to_owned)
                .collect(),
        )
    }
}

impl TimezoneMapper for PrefixTimezoneMapper {
    fn timezones_for(&self, number: &PhoneNumber) -> Vec<String> {
        let kind = kind_of(number);
        let zones = match kind {
            NumberKind::Unknown => None,
            _ if kind.is_geographical(number.code().value()) => {
                Self::lookup(&prefix_digits(number))
            }
            _ => {
                let mut buf = itoa::Buffer::new();
                Self::lookup(buf.format(number.code().value()))
            }
        };
        match zones {
            Some(zones) if !zones.is_empty() => zones,
            _ => {
                trace!("No time zone known for {}", number);
                vec![UNKNOWN_TIMEZONE.to_owned()]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use phonenumber::parse;

    use super::PrefixTimezoneMapper;
    use crate::interfaces::TimezoneMapper;

    fn zones(input: &str) -> Vec<String> {
        let number = parse(None, input).expect("test numbers parse");
        PrefixTimezoneMapper::new().timezones_for(&number)
    }

    #[test]
    fn geographical_numbers_use_the_area_prefix() {
        assert_eq!(vec!["America/Los_Angeles"], zones("+14155552671"));
        assert_eq!(vec!["America/New_York"], zones("+12125550199"));
    }

    #[test]
    fn area_prefix_wins_over_country_level_zones() {
        assert_eq!(vec!["Europe/Moscow"], zones("+7 495 123 4567"));
        assert_eq!(vec!["Europe/Kyiv"], zones("+380441234567"));
        assert_eq!(vec!["Europe/Rome"], zones("+39 06 1234 5678"));
    }

    #[test]
    fn non_geographical_numbers_use_the_country_code() {
        assert_eq!(
            vec!["Atlantic/Canary", "Europe/Madrid"],
            zones("+34612345678")
        );
    }

    #[test]
    fn unknown_numbers() {
        assert_eq!(vec!["Etc/Unknown"], zones("+15555555555"));
    }
}

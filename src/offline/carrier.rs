use phonenumber::PhoneNumber;

use super::{kind_of, prefix_digits};
use crate::{
    interfaces::CarrierMapper,
    prefix_cache::{PREFIX_TABLES, TableKey, TableKind},
};

/// Carrier names from the compiled carrier prefix resources.
///
/// Only mobile, fixed-line-or-mobile and pager numbers get a name; a fixed
/// line prefix says nothing about who operates the line today.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrefixCarrierMapper;

impl PrefixCarrierMapper {
    pub fn new() -> Self {
        Self
    }
}

impl CarrierMapper for PrefixCarrierMapper {
    fn carrier_for(&self, number: &PhoneNumber, language: &str) -> Option<String> {
        if !kind_of(number).is_mobile_like() {
            return None;
        }
        let key = TableKey::new(TableKind::Carrier, language, number.code().value());
        PREFIX_TABLES
            .get_table(&key)?
            .lookup(&prefix_digits(number))
            .filter(|name| !name.is_empty())
            .map(str::to_owned)
    }
}

#[cfg(test)]
mod tests {
    use phonenumber::parse;

    use super::PrefixCarrierMapper;
    use crate::interfaces::CarrierMapper;

    fn carrier(input: &str) -> Option<String> {
        let number = parse(None, input).expect("test numbers parse");
        PrefixCarrierMapper::new().carrier_for(&number, "en")
    }

    #[test]
    fn mobile_numbers_have_carriers() {
        assert_eq!(Some("O2".to_owned()), carrier("+447701234567"));
    }

    #[test]
    fn fixed_lines_have_none() {
        assert_eq!(None, carrier("+442079460000"));
    }

    #[test]
    fn missing_language() {
        let number = parse(None, "+447701234567").expect("test numbers parse");
        assert_eq!(None, PrefixCarrierMapper::new().carrier_for(&number, "xx"));
    }
}

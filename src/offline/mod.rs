//! Offline implementations of the collaborator traits, backed by the
//! prefix resources compiled into the binary and by `isocountry`.

mod carrier;
mod country;
mod geocoder;
mod timezones;

pub use carrier::PrefixCarrierMapper;
pub use country::IsoCountryDirectory;
pub use geocoder::PrefixGeocoder;
pub use timezones::PrefixTimezoneMapper;

use phonenumber::PhoneNumber;

use crate::analyzer::{
    enums::NumberKind,
    helper_functions::{number_kind, region_metadata},
};

/// `<country code><national significant number>`, the key all prefix
/// resources are indexed by. Italian leading zeros are kept.
pub(crate) fn prefix_digits(number: &PhoneNumber) -> String {
    let mut buf = itoa::Buffer::new();
    let mut digits = String::from(buf.format(number.code().value()));
    digits.push_str(&number.national().to_string());
    digits
}

pub(crate) fn kind_of(number: &PhoneNumber) -> NumberKind {
    number_kind(number, region_metadata(number))
}

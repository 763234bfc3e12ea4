// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;

use phonenumber::Type;
use strum::{Display, EnumIter, IntoStaticStr};

use super::helper_constants::GEO_MOBILE_COUNTRIES;

/// Categorizes phone numbers based on their primary use.
///
/// This is the subset of the engine's number types that the report names.
/// Everything else (short codes, emergency numbers, ...) is `Unknown`.
/// `code()` gives the machine readable code, `Display` the label.
#[derive(Debug, EnumIter, IntoStaticStr, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum NumberKind {
    /// **Fixed-line numbers.**
    /// Traditional landline numbers tied to a specific geographic location.
    FixedLine,
    /// **Mobile numbers.**
    Mobile,
    /// **Fixed-line or mobile.**
    /// Used in regions (e.g., the USA) where it's impossible to distinguish between
    /// fixed-line and mobile numbers by looking at the phone number itself.
    FixedLineOrMobile,
    /// **Voice over IP (VoIP) numbers.**
    #[strum(serialize = "VOIP")]
    Voip,
    /// **Toll-free numbers.**
    /// Calls to these numbers are free for the caller.
    TollFree,
    /// **Premium-rate numbers.**
    /// These numbers charge a higher rate than normal calls.
    PremiumRate,
    /// **Shared-cost numbers.**
    /// The cost of the call is split between the caller and the recipient.
    SharedCost,
    /// **Personal numbers.**
    /// A number associated with a person and routed to a device of their choice.
    PersonalNumber,
    /// **Pagers.**
    Pager,
    /// **Universal Access Numbers (UAN).**
    #[strum(serialize = "UAN")]
    Uan,
    /// **Voicemail access numbers.**
    #[strum(serialize = "VOICEMAIL")]
    Voicemail,
    /// **Unknown type.**
    /// The number does not match any of the known patterns for its region.
    Unknown,
}

impl NumberKind {
    pub fn code(&self) -> &'static str {
        (*self).into()
    }

    pub fn label(&self) -> &'static str {
        match self {
            NumberKind::FixedLine => "Fixed Line",
            NumberKind::Mobile => "Mobile",
            NumberKind::FixedLineOrMobile => "Fixed Line or Mobile",
            NumberKind::Voip => "VoIP",
            NumberKind::TollFree => "Toll Free",
            NumberKind::PremiumRate => "Premium Rate",
            NumberKind::SharedCost => "Shared Cost",
            NumberKind::PersonalNumber => "Personal Number",
            NumberKind::Pager => "Pager",
            NumberKind::Uan => "Universal Access Number",
            NumberKind::Voicemail => "Voicemail",
            NumberKind::Unknown => "Unknown",
        }
    }

    /// Whether numbers of this kind are tied to a place.
    /// Mobile numbers are geographical only where they keep an area code.
    pub fn is_geographical(&self, country_code: u16) -> bool {
        match self {
            NumberKind::FixedLine | NumberKind::FixedLineOrMobile => true,
            NumberKind::Mobile => GEO_MOBILE_COUNTRIES.contains(&country_code),
            _ => false,
        }
    }

    /// Kinds a carrier name can be reported for.
    pub fn is_mobile_like(&self) -> bool {
        matches!(
            self,
            NumberKind::Mobile | NumberKind::FixedLineOrMobile | NumberKind::Pager
        )
    }
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<Type> for NumberKind {
    fn from(value: Type) -> Self {
        match value {
            Type::FixedLine => NumberKind::FixedLine,
            Type::Mobile => NumberKind::Mobile,
            Type::FixedLineOrMobile => NumberKind::FixedLineOrMobile,
            Type::Voip => NumberKind::Voip,
            Type::TollFree => NumberKind::TollFree,
            Type::PremiumRate => NumberKind::PremiumRate,
            Type::SharedCost => NumberKind::SharedCost,
            Type::PersonalNumber => NumberKind::PersonalNumber,
            Type::Pager => NumberKind::Pager,
            Type::Uan => NumberKind::Uan,
            Type::Voicemail => NumberKind::Voicemail,
            _ => NumberKind::Unknown,
        }
    }
}

/// Severity of calling a number. Ordered, `Low < Medium < High`.
#[derive(Debug, Display, EnumIter, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

/// How specific the resolved location is.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum LocationConfidence {
    /// "City, State" style description.
    High,
    /// Some place, usually a region or the country.
    Medium,
    Low,
}

/// Represents the possible outcomes when checking if a phone number's length is valid.
#[derive(Debug, Display, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PossibleLength {
    /// **The length is valid for a dialable number.**
    IsPossible,
    /// **The length is valid for a local-only number.**
    /// Too short for a full national number but dialable within an area.
    IsPossibleLocalOnly,
    /// The calling code has no metadata.
    InvalidCountryCode,
    /// Shorter than every valid number of the region.
    TooShort,
    /// Between the shortest and longest valid lengths without matching one.
    InvalidLength,
    /// Longer than every valid number of the region.
    TooLong,
}

impl PossibleLength {
    pub fn is_possible(&self) -> bool {
        matches!(
            self,
            PossibleLength::IsPossible | PossibleLength::IsPossibleLocalOnly
        )
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::{NumberKind, PossibleLength, RiskLevel};

    #[test]
    fn kind_codes() {
        assert_eq!("FIXED_LINE_OR_MOBILE", NumberKind::FixedLineOrMobile.code());
        assert_eq!("VOIP", NumberKind::Voip.code());
        assert_eq!("UAN", NumberKind::Uan.code());
        assert_eq!("VOICEMAIL", NumberKind::Voicemail.code());
        assert_eq!("Fixed Line or Mobile", NumberKind::FixedLineOrMobile.to_string());
    }

    #[test]
    fn every_kind_has_a_label() {
        for kind in NumberKind::iter() {
            assert!(!kind.label().is_empty());
            assert!(!kind.code().is_empty());
        }
    }

    #[test]
    fn geographical_kinds() {
        assert!(NumberKind::FixedLine.is_geographical(44));
        assert!(NumberKind::Mobile.is_geographical(86));
        assert!(!NumberKind::Mobile.is_geographical(44));
        assert!(!NumberKind::TollFree.is_geographical(1));
    }

    #[test]
    fn risk_levels_are_ordered() {
        let levels = RiskLevel::iter().collect::<Vec<_>>();
        assert_eq!(vec![RiskLevel::Low, RiskLevel::Medium, RiskLevel::High], levels);
        assert!(RiskLevel::High > RiskLevel::Medium);
        assert_eq!("MEDIUM", RiskLevel::Medium.to_string());
    }

    #[test]
    fn possible_length_codes() {
        assert_eq!("IS_POSSIBLE_LOCAL_ONLY", PossibleLength::IsPossibleLocalOnly.to_string());
        let possible = PossibleLength::iter().filter(PossibleLength::is_possible).count();
        assert_eq!(2, possible);
    }
}

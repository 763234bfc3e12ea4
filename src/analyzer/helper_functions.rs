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

use chrono::{DateTime, Offset, Utc};
use chrono_tz::{OffsetComponents, OffsetName, Tz};
use log::warn;
use phonenumber::{
    Metadata, Mode, PhoneNumber, Type,
    metadata::{DATABASE, Descriptor},
};

use super::{
    enums::{LocationConfidence, NumberKind, PossibleLength},
    helper_constants::{
        AREA_CODE_LENGTH, EXCHANGE_CODE_LENGTH, INVALID_RESULT, NANPA_COUNTRY_CODE,
        NANPA_NATIONAL_NUMBER_LENGTH, VALID_RESULT,
    },
    report::{
        AreaCodeBreakdown, ExampleNumber, ExampleNumbers, LocalTime, LocationDetails,
        NumberFormats, ServiceInfo, StructureInfo, TechnicalData, TimezoneInfo, ValidationInfo,
        ZoneSnapshot,
    },
};
use crate::i18n::RegionCode;

/// Number types whose descriptors make up a region's possible lengths.
const LENGTH_DESCRIPTOR_TYPES: [Type; 10] = [
    Type::FixedLine,
    Type::Mobile,
    Type::TollFree,
    Type::PremiumRate,
    Type::SharedCost,
    Type::PersonalNumber,
    Type::Voip,
    Type::Pager,
    Type::Uan,
    Type::Voicemail,
];

const EXAMPLE_TYPES: [(Type, &str); 4] = [
    (Type::Mobile, "mobile"),
    (Type::FixedLine, "fixed_line"),
    (Type::TollFree, "toll_free"),
    (Type::PremiumRate, "premium_rate"),
];

pub(super) fn format_number(number: &PhoneNumber, mode: Mode) -> String {
    number.format().mode(mode).to_string()
}

/// Keeps only ASCII digits and `+`.
pub(super) fn clean_raw_input(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

pub(super) fn number_formats(input: &str, number: &PhoneNumber) -> NumberFormats {
    NumberFormats {
        input_number: input.to_owned(),
        e164_format: format_number(number, Mode::E164),
        international_format: format_number(number, Mode::International),
        national_format: format_number(number, Mode::National),
        rfc3966_format: format_number(number, Mode::Rfc3966),
        raw_input_cleaned: clean_raw_input(input),
    }
}

/// Number types checked before fixed line and mobile, in libphonenumber's
/// precedence.
const SPECIAL_TYPES: [Type; 8] = [
    Type::PremiumRate,
    Type::TollFree,
    Type::SharedCost,
    Type::Voip,
    Type::PersonalNumber,
    Type::Pager,
    Type::Uan,
    Type::Voicemail,
];

/// Classifies `national`, the national significant number with its leading
/// zeros, against the descriptors of one region.
fn type_in_region(metadata: &Metadata, national: &str) -> Type {
    let descriptors = metadata.descriptors();
    if !descriptors.general().is_match(national) {
        return Type::Unknown;
    }
    let matches = |kind: Type| {
        descriptors
            .get(kind)
            .is_some_and(|descriptor| descriptor.is_match(national))
    };
    if let Some(kind) = SPECIAL_TYPES.into_iter().find(|&kind| matches(kind)) {
        return kind;
    }

    if matches(Type::FixedLine) {
        let same_pattern = descriptors.fixed_line().map(|d| d.national_number().as_str())
            == descriptors.mobile().map(|d| d.national_number().as_str());
        if same_pattern || matches(Type::Mobile) {
            Type::FixedLineOrMobile
        } else {
            Type::FixedLine
        }
    } else if matches(Type::Mobile) {
        Type::Mobile
    } else {
        Type::Unknown
    }
}

/// Metadata of the region `number` belongs to.
///
/// `PhoneNumber::metadata` matches the national number without its leading
/// zeros, so Italian style numbers (`+39 06 ...`) match no region there.
/// Here the full national significant number is used.
pub(crate) fn region_metadata(number: &PhoneNumber) -> Option<&'static Metadata> {
    let country_code = number.code().value();
    let national = number.national().to_string();
    let regions = DATABASE.region(&country_code)?;

    if let [region] = regions.as_slice() {
        return if RegionCode::is_non_geo_entity(region) {
            DATABASE
                .by_code(&country_code)
                .and_then(|candidates| candidates.into_iter().next())
        } else {
            DATABASE.by_id(*region)
        };
    }

    regions
        .into_iter()
        .filter_map(|region| DATABASE.by_id(region))
        .find(|metadata| match metadata.leading_digits() {
            Some(pattern) => pattern
                .find(&national)
                .is_some_and(|found| found.start() == 0),
            None => type_in_region(metadata, &national) != Type::Unknown,
        })
}

/// The number's type within `metadata`, see [`region_metadata`].
pub(crate) fn number_kind(number: &PhoneNumber, metadata: Option<&Metadata>) -> NumberKind {
    metadata.map_or(NumberKind::Unknown, |metadata| {
        NumberKind::from(type_in_region(metadata, &number.national().to_string()))
    })
}

/// Metadata of the main region for a calling code.
fn main_metadata_for_code(country_code: u16) -> Option<&'static Metadata> {
    let candidates = DATABASE.by_code(&country_code)?;
    candidates
        .iter()
        .find(|metadata| metadata.is_main_country_for_code())
        .or_else(|| candidates.first())
        .copied()
}

/// Sorted, deduplicated union of the lengths `select` takes from every
/// number type descriptor of `metadata`.
fn collect_lengths(metadata: &Metadata, select: fn(&Descriptor) -> &[u16]) -> Vec<u16> {
    let descriptors = metadata.descriptors();
    let mut lengths = select(descriptors.general()).to_vec();
    for kind in LENGTH_DESCRIPTOR_TYPES {
        if let Some(descriptor) = descriptors.get(kind) {
            lengths.extend_from_slice(select(descriptor));
        }
    }
    lengths.sort_unstable();
    lengths.dedup();
    lengths
}

/// libphonenumber's `test_number_length`: checks `actual_length` against the
/// lengths valid numbers described by `metadata` can have.
fn test_number_length(metadata: Option<&Metadata>, actual_length: u16) -> PossibleLength {
    let Some(metadata) = metadata else {
        return PossibleLength::InvalidCountryCode;
    };
    let possible_lengths = collect_lengths(metadata, Descriptor::possible_length);
    let local_lengths = collect_lengths(metadata, Descriptor::possible_local_length);

    let Some((&minimum_length, _)) = possible_lengths.split_first() else {
        return PossibleLength::InvalidLength;
    };

    if local_lengths.contains(&actual_length) {
        return PossibleLength::IsPossibleLocalOnly;
    }
    if minimum_length == actual_length {
        PossibleLength::IsPossible
    } else if minimum_length > actual_length {
        PossibleLength::TooShort
    } else if possible_lengths.last().is_some_and(|&max| max < actual_length) {
        PossibleLength::TooLong
    } else if possible_lengths[1..].contains(&actual_length) {
        PossibleLength::IsPossible
    } else {
        PossibleLength::InvalidLength
    }
}

/// Length check of the national significant number against the calling
/// code's main region.
pub(super) fn possible_length(number: &PhoneNumber) -> PossibleLength {
    let actual_length = number.national().to_string().len() as u16;
    test_number_length(main_metadata_for_code(number.code().value()), actual_length)
}

pub(super) fn validation_info(number: &PhoneNumber, region_code: Option<&str>) -> ValidationInfo {
    let is_valid = phonenumber::is_valid(number);
    let possible_length = possible_length(number);
    ValidationInfo {
        is_valid_number: is_valid,
        is_possible_number: possible_length.is_possible(),
        is_valid_for_region: is_valid && region_code.is_some(),
        validation_result: if is_valid { VALID_RESULT } else { INVALID_RESULT },
        possible_length_result: possible_length,
    }
}

pub(super) fn structure_info(number: &PhoneNumber, e164: &str) -> StructureInfo {
    let national = number.national();
    let mut buf = itoa::Buffer::new();
    StructureInfo {
        country_code: number.code().value(),
        national_number: national.value(),
        national_number_length: buf.format(national.value()).len(),
        total_digits: e164.chars().filter(char::is_ascii_digit).count(),
        has_extension: number.extension().is_some(),
        extension: number.extension().map(|extension| extension.to_string()),
        has_italian_leading_zero: national.zeros() > 0,
        number_of_leading_zeros: national.zeros(),
    }
}

/// Splits a national number into area code, exchange and subscriber.
///
/// NANP numbers (calling code 1, ten digits) are split 3-3-4. Anything
/// else gets its first three digits as area code and, with six digits or
/// more, the next three as exchange. That second rule is only a guess and
/// does not follow the national numbering plan.
pub fn decompose_area_code(country_code: u16, national_number: u64) -> AreaCodeBreakdown {
    let mut buf = itoa::Buffer::new();
    let digits = buf.format(national_number);
    let is_nanp_format =
        country_code == NANPA_COUNTRY_CODE && digits.len() == NANPA_NATIONAL_NUMBER_LENGTH;

    let exchange_end = AREA_CODE_LENGTH + EXCHANGE_CODE_LENGTH;
    let mut breakdown = AreaCodeBreakdown {
        is_nanp_format,
        ..Default::default()
    };
    if digits.len() >= AREA_CODE_LENGTH {
        breakdown.area_code = Some(digits[..AREA_CODE_LENGTH].to_owned());
    }
    if digits.len() >= exchange_end {
        breakdown.exchange_code = Some(digits[AREA_CODE_LENGTH..exchange_end].to_owned());
        breakdown.subscriber_number = Some(digits[exchange_end..].to_owned());
    }
    breakdown
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

/// Derives city, state and confidence from `primary`, which is expected in
/// `City, State` form. Translations equal to `primary` are dropped.
pub(super) fn location_details(
    primary: Option<String>,
    spanish: Option<String>,
    french: Option<String>,
) -> LocationDetails {
    let primary = non_empty(primary);
    let translated = |value: Option<String>| non_empty(value).filter(|value| Some(value) != primary.as_ref());

    let mut parts = primary.as_deref().unwrap_or_default().split(',').map(str::trim);
    let city = parts.next().filter(|part| !part.is_empty()).map(str::to_owned);
    let state_province = parts.next().filter(|part| !part.is_empty()).map(str::to_owned);

    let location_confidence = match primary.as_deref() {
        Some(location) if location.contains(',') => LocationConfidence::High,
        Some(_) => LocationConfidence::Medium,
        None => LocationConfidence::Low,
    };

    LocationDetails {
        location_spanish: translated(spanish),
        location_french: translated(french),
        primary_location: primary,
        city,
        state_province,
        location_confidence,
    }
}

fn offset_hours(seconds: i32) -> f64 {
    f64::from(seconds) / 3600.0
}

fn resolve_zone(zone: &str) -> Option<Tz> {
    match zone.parse::<Tz>() {
        Ok(tz) => Some(tz),
        Err(err) => {
            warn!("Time zone {} is not in the tz database: {}", zone, err);
            None
        }
    }
}

fn local_time_in(tz: Tz, now: DateTime<Utc>) -> LocalTime {
    let local = now.with_timezone(&tz);
    let offset = local.offset();
    LocalTime {
        local_time: local.to_rfc3339(),
        local_time_12h: local.format("%I:%M %p").to_string(),
        local_date: local.format("%Y-%m-%d").to_string(),
        utc_offset_hours: offset_hours(offset.fix().local_minus_utc()),
        utc_offset_string: local.format("%z").to_string(),
        is_dst: !offset.dst_offset().is_zero(),
        timezone_name: offset.tz_id().to_owned(),
        timezone_abbreviation: local.format("%Z").to_string(),
    }
}

fn zone_snapshot(tz: Tz, now: DateTime<Utc>) -> ZoneSnapshot {
    let local = now.with_timezone(&tz);
    let offset = local.offset();
    ZoneSnapshot {
        timezone: tz.name().to_owned(),
        local_time: local.to_rfc3339(),
        utc_offset: offset_hours(offset.fix().local_minus_utc()),
        abbreviation: offset
            .abbreviation()
            .map_or_else(|| local.format("%Z").to_string(), str::to_owned),
    }
}

/// Builds the time zone section. Zones the tz database does not know are
/// logged and contribute no local time.
pub(super) fn timezone_info(zones: Vec<String>, now: DateTime<Utc>) -> TimezoneInfo {
    let primary = zones.first().cloned();
    let local_time = primary
        .as_deref()
        .and_then(resolve_zone)
        .map(|tz| local_time_in(tz, now));

    let all_timezone_details = if local_time.is_some() && zones.len() > 1 {
        Some(
            zones
                .iter()
                .filter_map(|zone| resolve_zone(zone))
                .map(|tz| zone_snapshot(tz, now))
                .collect(),
        )
    } else {
        None
    };

    TimezoneInfo {
        timezone_count: zones.len(),
        spans_multiple_timezones: zones.len() > 1,
        primary_timezone: primary,
        all_timezones: zones,
        local_time,
        all_timezone_details,
    }
}

pub(super) fn service_info(kind: NumberKind, carrier_name: Option<String>) -> ServiceInfo {
    let carrier_name = non_empty(carrier_name);
    ServiceInfo {
        carrier_available: carrier_name.is_some(),
        carrier_name,
        number_type: kind,
        number_type_code: kind.code(),
        is_mobile: kind == NumberKind::Mobile,
        is_fixed_line: kind == NumberKind::FixedLine,
        is_fixed_or_mobile: kind == NumberKind::FixedLineOrMobile,
        is_voip: kind == NumberKind::Voip,
        is_toll_free: kind == NumberKind::TollFree,
        is_premium_rate: kind == NumberKind::PremiumRate,
        is_special_service: matches!(
            kind,
            NumberKind::PremiumRate | NumberKind::SharedCost | NumberKind::Uan
        ),
        likely_billable: !matches!(kind, NumberKind::TollFree | NumberKind::Voicemail),
    }
}

pub(super) fn technical_data(metadata: Option<&Metadata>) -> TechnicalData {
    let Some(metadata) = metadata else {
        return TechnicalData::default();
    };
    TechnicalData {
        national_prefix: metadata.national_prefix().map(str::to_owned),
        international_prefix: metadata
            .international_prefix()
            .map(|prefix| prefix.as_str().to_owned()),
        national_prefix_for_parsing: metadata
            .national_prefix_for_parsing()
            .map(|prefix| prefix.as_str().to_owned()),
        preferred_international_prefix: metadata.preferred_international_prefix().map(str::to_owned),
        national_prefix_optional_when_formatting: metadata
            .formats()
            .iter()
            .any(|format| format.is_national_prefix_optional()),
    }
}

/// Example numbers of the region `metadata` describes. Examples that do not
/// parse back are skipped.
pub(super) fn example_numbers(metadata: Option<&Metadata>) -> ExampleNumbers {
    let Some(metadata) = metadata else {
        return ExampleNumbers::default();
    };
    let mut buf = itoa::Buffer::new();
    let country_code = buf.format(metadata.country_code());

    let examples = EXAMPLE_TYPES
        .iter()
        .filter_map(|&(kind, kind_name)| {
            let example = metadata.descriptors().get(kind)?.example()?;
            let number = phonenumber::parse(None, format!("+{}{}", country_code, example)).ok()?;
            Some(ExampleNumber {
                kind_name,
                national: format_number(&number, Mode::National),
                international: format_number(&number, Mode::International),
            })
        })
        .collect();
    ExampleNumbers { examples }
}

#[cfg(test)]
mod tests {
    use phonenumber::metadata::DATABASE;

    use super::{region_metadata, test_number_length};
    use crate::analyzer::enums::PossibleLength;

    #[test]
    fn length_without_metadata() {
        assert_eq!(PossibleLength::InvalidCountryCode, test_number_length(None, 10));
    }

    #[test]
    fn length_results() {
        // Swiss numbers have 9 or 12 digits and no local-only lengths.
        let ch = DATABASE.by_id("CH");
        assert_eq!(PossibleLength::TooShort, test_number_length(ch, 8));
        assert_eq!(PossibleLength::IsPossible, test_number_length(ch, 9));
        assert_eq!(PossibleLength::InvalidLength, test_number_length(ch, 10));
        assert_eq!(PossibleLength::IsPossible, test_number_length(ch, 12));
        assert_eq!(PossibleLength::TooLong, test_number_length(ch, 13));

        let us = DATABASE.by_id("US");
        assert_eq!(PossibleLength::IsPossibleLocalOnly, test_number_length(us, 7));
        assert_eq!(PossibleLength::IsPossible, test_number_length(us, 10));
    }

    #[test]
    fn region_of_leading_zero_numbers() {
        let rome = phonenumber::parse(None, "+39 06 1234 5678").expect("valid Italian number");
        assert_eq!(Some("IT"), region_metadata(&rome).map(|metadata| metadata.id()));

        let vatican = phonenumber::parse(None, "+39 06 698 12345").expect("valid Vatican number");
        assert_eq!(Some("VA"), region_metadata(&vatican).map(|metadata| metadata.id()));
    }
}

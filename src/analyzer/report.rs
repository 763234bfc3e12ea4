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

use super::enums::{LocationConfidence, NumberKind, PossibleLength, RiskLevel};
use crate::macros::{impl_field_set, impl_report_section, text_value_from_display};

/// A single report value.
///
/// `Absent` is a key without a value: it is counted in the total but
/// never printed.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(u64),
    Float(f64),
    Bool(bool),
    List(Vec<String>),
    Record(Vec<Field>),
    Records(Vec<Vec<Field>>),
    Absent,
}

impl FieldValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&'static str> for FieldValue {
    fn from(value: &'static str) -> Self {
        FieldValue::Text(value.to_owned())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<u8> for FieldValue {
    fn from(value: u8) -> Self {
        FieldValue::Integer(value.into())
    }
}

impl From<u16> for FieldValue {
    fn from(value: u16) -> Self {
        FieldValue::Integer(value.into())
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<usize> for FieldValue {
    fn from(value: usize) -> Self {
        FieldValue::Integer(value as u64)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Absent, Into::into)
    }
}

impl From<RiskAssessment> for FieldValue {
    fn from(value: RiskAssessment) -> Self {
        FieldValue::Record(value.fields())
    }
}

impl From<Vec<ZoneSnapshot>> for FieldValue {
    fn from(value: Vec<ZoneSnapshot>) -> Self {
        FieldValue::Records(value.iter().map(FieldSet::fields).collect())
    }
}

text_value_from_display!(NumberKind, RiskLevel, LocationConfidence, PossibleLength);

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub value: FieldValue,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self { name: name.into(), value: value.into() }
    }
}

/// A record that can list itself as ordered `(name, value)` pairs.
pub trait FieldSet {
    fn fields(&self) -> Vec<Field>;

    fn field_count(&self) -> usize {
        self.fields().len()
    }
}

/// One titled category of the report.
pub trait ReportSection: FieldSet {
    fn title(&self) -> &'static str;
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumberFormats {
    pub input_number: String,
    pub e164_format: String,
    pub international_format: String,
    pub national_format: String,
    pub rfc3966_format: String,
    /// The input with everything except digits and `+` removed.
    pub raw_input_cleaned: String,
}

impl_field_set!(NumberFormats {
    input_number,
    e164_format,
    international_format,
    national_format,
    rfc3966_format,
    raw_input_cleaned,
});

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationInfo {
    pub is_valid_number: bool,
    pub is_possible_number: bool,
    pub is_valid_for_region: bool,
    pub validation_result: &'static str,
    pub possible_length_result: PossibleLength,
}

impl_field_set!(ValidationInfo {
    is_valid_number,
    is_possible_number,
    is_valid_for_region,
    validation_result,
    possible_length_result,
});

#[derive(Debug, Clone, PartialEq)]
pub struct StructureInfo {
    pub country_code: u16,
    /// Without leading zeros, see `number_of_leading_zeros`.
    pub national_number: u64,
    pub national_number_length: usize,
    pub total_digits: usize,
    pub has_extension: bool,
    pub extension: Option<String>,
    pub has_italian_leading_zero: bool,
    pub number_of_leading_zeros: u8,
}

impl_field_set!(StructureInfo {
    country_code,
    national_number,
    national_number_length,
    total_digits,
    has_extension,
    extension,
    has_italian_leading_zero,
    number_of_leading_zeros,
});

#[derive(Debug, Clone, PartialEq)]
pub struct LocationDetails {
    pub primary_location: Option<String>,
    pub location_spanish: Option<String>,
    pub location_french: Option<String>,
    pub city: Option<String>,
    pub state_province: Option<String>,
    pub location_confidence: LocationConfidence,
}

impl_field_set!(LocationDetails {
    primary_location,
    location_spanish,
    location_french,
    city,
    state_province,
    location_confidence,
});

/// Area code, exchange and subscriber split of the national number.
/// Exact for NANP numbers, a guess everywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AreaCodeBreakdown {
    pub area_code: Option<String>,
    pub exchange_code: Option<String>,
    pub subscriber_number: Option<String>,
    pub is_nanp_format: bool,
}

impl_field_set!(AreaCodeBreakdown {
    area_code,
    exchange_code,
    subscriber_number,
    is_nanp_format,
});

#[derive(Debug, Clone, PartialEq)]
pub struct GeographicInfo {
    pub region_code: Option<String>,
    pub country_name: Option<String>,
    pub country_official_name: Option<String>,
    pub country_alpha_3: Option<String>,
    pub country_numeric_code: Option<String>,
    pub associated_regions: Vec<String>,
    pub region_count_for_country_code: usize,
    pub is_multi_region_country_code: bool,
    pub location: LocationDetails,
    pub area: AreaCodeBreakdown,
}

impl FieldSet for GeographicInfo {
    fn fields(&self) -> Vec<Field> {
        let mut fields = vec![
            Field::new("region_code", self.region_code.clone()),
            Field::new("country_name", self.country_name.clone()),
            Field::new("country_official_name", self.country_official_name.clone()),
            Field::new("country_alpha_3", self.country_alpha_3.clone()),
            Field::new("country_numeric_code", self.country_numeric_code.clone()),
            Field::new("associated_regions", self.associated_regions.clone()),
            Field::new("region_count_for_country_code", self.region_count_for_country_code),
            Field::new("is_multi_region_country_code", self.is_multi_region_country_code),
        ];
        fields.extend(self.location.fields());
        fields.extend(self.area.fields());
        fields
    }
}

/// Civil time in the primary zone at lookup time.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalTime {
    pub local_time: String,
    pub local_time_12h: String,
    pub local_date: String,
    pub utc_offset_hours: f64,
    /// `±HHMM`
    pub utc_offset_string: String,
    pub is_dst: bool,
    pub timezone_name: String,
    pub timezone_abbreviation: String,
}

impl_field_set!(LocalTime {
    local_time,
    local_time_12h,
    local_date,
    utc_offset_hours,
    utc_offset_string,
    is_dst,
    timezone_name,
    timezone_abbreviation,
});

#[derive(Debug, Clone, PartialEq)]
pub struct ZoneSnapshot {
    pub timezone: String,
    pub local_time: String,
    pub utc_offset: f64,
    pub abbreviation: String,
}

impl_field_set!(ZoneSnapshot {
    timezone,
    local_time,
    utc_offset,
    abbreviation,
});

#[derive(Debug, Clone, PartialEq)]
pub struct TimezoneInfo {
    pub all_timezones: Vec<String>,
    pub timezone_count: usize,
    pub primary_timezone: Option<String>,
    pub spans_multiple_timezones: bool,
    /// `None` when the primary zone is not in the tz database.
    pub local_time: Option<LocalTime>,
    /// Only filled when the number spans several zones.
    pub all_timezone_details: Option<Vec<ZoneSnapshot>>,
}

// The local time block and the per zone details are left out entirely
// rather than reported as absent keys.
impl FieldSet for TimezoneInfo {
    fn fields(&self) -> Vec<Field> {
        let mut fields = vec![
            Field::new("all_timezones", self.all_timezones.clone()),
            Field::new("timezone_count", self.timezone_count),
            Field::new("primary_timezone", self.primary_timezone.clone()),
            Field::new("spans_multiple_timezones", self.spans_multiple_timezones),
        ];
        if let Some(local_time) = &self.local_time {
            fields.extend(local_time.fields());
        }
        if let Some(details) = &self.all_timezone_details {
            fields.push(Field::new("all_timezone_details", details.clone()));
        }
        fields
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceInfo {
    pub carrier_name: Option<String>,
    pub carrier_available: bool,
    pub number_type: NumberKind,
    pub number_type_code: &'static str,
    pub is_mobile: bool,
    pub is_fixed_line: bool,
    pub is_fixed_or_mobile: bool,
    pub is_voip: bool,
    pub is_toll_free: bool,
    pub is_premium_rate: bool,
    pub is_special_service: bool,
    pub likely_billable: bool,
}

impl_field_set!(ServiceInfo {
    carrier_name,
    carrier_available,
    number_type,
    number_type_code,
    is_mobile,
    is_fixed_line,
    is_fixed_or_mobile,
    is_voip,
    is_toll_free,
    is_premium_rate,
    is_special_service,
    likely_billable,
});

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TechnicalData {
    pub national_prefix: Option<String>,
    pub international_prefix: Option<String>,
    pub national_prefix_for_parsing: Option<String>,
    pub preferred_international_prefix: Option<String>,
    pub national_prefix_optional_when_formatting: bool,
}

impl_field_set!(TechnicalData {
    national_prefix,
    international_prefix,
    national_prefix_for_parsing,
    preferred_international_prefix,
    national_prefix_optional_when_formatting,
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleNumber {
    /// `mobile`, `fixed_line`, `toll_free` or `premium_rate`.
    pub kind_name: &'static str,
    pub national: String,
    pub international: String,
}

/// Example numbers of the number's region, only for kinds the region has.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExampleNumbers {
    pub examples: Vec<ExampleNumber>,
}

impl FieldSet for ExampleNumbers {
    fn fields(&self) -> Vec<Field> {
        self.examples
            .iter()
            .flat_map(|example| {
                [
                    Field::new(
                        format!("example_{}_number", example.kind_name),
                        example.national.clone(),
                    ),
                    Field::new(
                        format!("example_{}_international", example.kind_name),
                        example.international.clone(),
                    ),
                ]
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskAssessment {
    pub risk_level: RiskLevel,
    pub risk_factors: Vec<String>,
    pub is_safe_to_call: bool,
}

impl_field_set!(RiskAssessment {
    risk_level,
    risk_factors,
    is_safe_to_call,
});

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisInfo {
    pub lookup_timestamp_utc: String,
    pub lookup_timestamp_local: String,
    pub data_sources: Vec<String>,
    pub analysis_version: String,
    pub total_data_points: usize,
    pub confidence_score: u8,
    pub risk_assessment: RiskAssessment,
}

impl_field_set!(AnalysisInfo {
    lookup_timestamp_utc,
    lookup_timestamp_local,
    data_sources,
    analysis_version,
    total_data_points,
    confidence_score,
    risk_assessment,
});

impl_report_section!(
    NumberFormats => "NUMBER_FORMATS",
    ValidationInfo => "VALIDATION",
    StructureInfo => "STRUCTURE",
    GeographicInfo => "GEOGRAPHIC_INFO",
    TimezoneInfo => "TIMEZONE_INFO",
    ServiceInfo => "SERVICE_INFO",
    TechnicalData => "TECHNICAL_DATA",
    ExampleNumbers => "EXAMPLES",
    AnalysisInfo => "ANALYSIS",
);

/// The full analysis of one number.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub formats: NumberFormats,
    pub validation: ValidationInfo,
    pub structure: StructureInfo,
    pub geographic: GeographicInfo,
    pub timezone: TimezoneInfo,
    pub service: ServiceInfo,
    pub technical: TechnicalData,
    pub examples: ExampleNumbers,
    pub analysis: AnalysisInfo,
}

impl Report {
    /// Builds the report and stores its own field count in
    /// `analysis.total_data_points`. The count includes that field.
    #[allow(clippy::too_many_arguments)]
    pub fn assemble(
        formats: NumberFormats,
        validation: ValidationInfo,
        structure: StructureInfo,
        geographic: GeographicInfo,
        timezone: TimezoneInfo,
        service: ServiceInfo,
        technical: TechnicalData,
        examples: ExampleNumbers,
        mut analysis: AnalysisInfo,
    ) -> Self {
        analysis.total_data_points = 0;
        let mut report = Self {
            formats,
            validation,
            structure,
            geographic,
            timezone,
            service,
            technical,
            examples,
            analysis,
        };
        report.analysis.total_data_points = report.total_fields();
        report
    }

    /// Sections in output order.
    pub fn sections(&self) -> [&dyn ReportSection; 9] {
        [
            &self.formats,
            &self.validation,
            &self.structure,
            &self.geographic,
            &self.timezone,
            &self.service,
            &self.technical,
            &self.examples,
            &self.analysis,
        ]
    }

    pub fn total_fields(&self) -> usize {
        self.sections()
            .iter()
            .map(|section| section.field_count())
            .sum()
    }
}

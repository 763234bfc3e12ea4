mod interfaces;
/// This module is automatically generated from /resources/**/*.txt
mod generated;
mod analyzer;
mod config;
mod offline;
mod prefix_cache;
mod prefix_table;
mod presenter;
pub mod i18n;

/// I decided to create this module because there are many
/// boilerplate places in the code that can be replaced with macros,
/// the name of which will describe what is happening more
/// clearly than a few lines of code.
mod macros;

#[cfg(test)]
mod tests;

pub use analyzer::{
    PHONE_ANALYZER, PhoneAnalyzer,
    enums::{LocationConfidence, NumberKind, PossibleLength, RiskLevel},
    errors::{AnalysisError, ConfigError},
    report::{
        AnalysisInfo, AreaCodeBreakdown, ExampleNumbers, Field, FieldSet, FieldValue,
        GeographicInfo, LocalTime, LocationDetails, NumberFormats, Report, ReportSection,
        RiskAssessment, ServiceInfo, StructureInfo, TechnicalData, TimezoneInfo, ValidationInfo,
        ZoneSnapshot,
    },
    scoring::{assess_risk, confidence_score},
    helper_functions::decompose_area_code,
};
pub use config::AnalyzerConfig;
pub use interfaces::{CarrierMapper, CountryDirectory, CountryRecord, Geocoder, TimezoneMapper};
pub use offline::{IsoCountryDirectory, PrefixCarrierMapper, PrefixGeocoder, PrefixTimezoneMapper};
pub use prefix_table::PrefixTable;
pub use presenter::{render_report, render_summary};

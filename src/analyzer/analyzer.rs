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

use chrono::{DateTime, Local, SecondsFormat, Utc};
use log::{debug, trace};
use phonenumber::{PhoneNumber, metadata::DATABASE};

use super::{
    errors::AnalysisError,
    helper_constants::{ANALYSIS_VERSION, DATA_SOURCES, FRENCH, SPANISH},
    helper_functions::{
        decompose_area_code, example_numbers, location_details, number_formats, number_kind,
        region_metadata, service_info, structure_info, technical_data, timezone_info,
        validation_info,
    },
    report::{AnalysisInfo, GeographicInfo, Report},
    scoring::{assess_risk, confidence_score},
};
use crate::{
    config::AnalyzerConfig,
    i18n::RegionCode,
    interfaces::{CarrierMapper, CountryDirectory, Geocoder, TimezoneMapper},
    offline::{IsoCountryDirectory, PrefixCarrierMapper, PrefixGeocoder, PrefixTimezoneMapper},
};

/// Turns a phone number string into a `Report`.
///
/// Parsing, validation and formatting go to the `phonenumber` engine.
/// Location, carrier, time zone and country lookups go to the boxed
/// collaborators, so they can be replaced without touching the analysis.
pub struct PhoneAnalyzer {
    config: AnalyzerConfig,

    geocoder: Box<dyn Geocoder>,
    carrier_mapper: Box<dyn CarrierMapper>,
    timezone_mapper: Box<dyn TimezoneMapper>,
    country_directory: Box<dyn CountryDirectory>,
}

impl Default for PhoneAnalyzer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

impl PhoneAnalyzer {
    /// Creates an analyzer backed by the offline lookups.
    pub fn new(config: AnalyzerConfig) -> Self {
        Self::with_collaborators(
            config,
            Box::new(PrefixGeocoder::new()),
            Box::new(PrefixCarrierMapper::new()),
            Box::new(PrefixTimezoneMapper::new()),
            Box::new(IsoCountryDirectory),
        )
    }

    pub fn with_collaborators(
        config: AnalyzerConfig,
        geocoder: Box<dyn Geocoder>,
        carrier_mapper: Box<dyn CarrierMapper>,
        timezone_mapper: Box<dyn TimezoneMapper>,
        country_directory: Box<dyn CountryDirectory>,
    ) -> Self {
        Self {
            config,
            geocoder,
            carrier_mapper,
            timezone_mapper,
            country_directory,
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Parses `input` as an international number first and retries with the
    /// configured default region. The error of the retry is returned.
    pub fn parse(&self, input: &str) -> Result<PhoneNumber, AnalysisError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }
        match phonenumber::parse(None, input) {
            Ok(number) => Ok(number),
            Err(err) => {
                debug!(
                    "Parsing '{}' without a region failed ({}), retrying with {:?}",
                    input, err, self.config.default_region
                );
                phonenumber::parse(Some(self.config.default_region), input).map_err(|source| {
                    AnalysisError::Unparsable {
                        input: input.to_owned(),
                        source,
                    }
                })
            }
        }
    }

    /// Analyzes `input` at the current time.
    pub fn analyze(&self, input: &str) -> Result<Report, AnalysisError> {
        self.analyze_at(input, Utc::now())
    }

    /// Analyzes `input` as if the lookup happened at `now`. Two calls with
    /// the same arguments give the same report.
    pub fn analyze_at(&self, input: &str, now: DateTime<Utc>) -> Result<Report, AnalysisError> {
        let number = self.parse(input)?;
        let input = input.trim();
        trace!("Parsed '{}' as {:?}", input, number);

        let metadata = region_metadata(&number);
        let region_code = metadata.map(|metadata| metadata.id().to_owned());
        let kind = number_kind(&number, metadata);

        let formats = number_formats(input, &number);
        let validation = validation_info(&number, region_code.as_deref());
        let structure = structure_info(&number, &formats.e164_format);
        let geographic = self.geographic_info(&number, region_code);
        let timezone = timezone_info(self.timezone_mapper.timezones_for(&number), now);
        let service = service_info(
            kind,
            self.carrier_mapper.carrier_for(&number, &self.config.language),
        );
        let technical = technical_data(metadata);
        let examples = example_numbers(metadata);

        let analysis = AnalysisInfo {
            lookup_timestamp_utc: now.to_rfc3339_opts(SecondsFormat::Secs, true),
            lookup_timestamp_local: now
                .with_timezone(&Local)
                .to_rfc3339_opts(SecondsFormat::Secs, false),
            data_sources: DATA_SOURCES.iter().map(|&source| source.to_owned()).collect(),
            analysis_version: ANALYSIS_VERSION.to_owned(),
            total_data_points: 0,
            confidence_score: confidence_score(&validation, &geographic, &service),
            risk_assessment: assess_risk(kind, &geographic, &validation),
        };

        let report = Report::assemble(
            formats, validation, structure, geographic, timezone, service, technical, examples,
            analysis,
        );
        debug!(
            "Analyzed '{}': {} fields, confidence {}",
            input, report.analysis.total_data_points, report.analysis.confidence_score
        );
        Ok(report)
    }

    fn geographic_info(&self, number: &PhoneNumber, region_code: Option<String>) -> GeographicInfo {
        let country = region_code
            .as_deref()
            .filter(|region| !RegionCode::is_non_geo_entity(region))
            .and_then(|region| self.country_directory.country_for(region));
        let associated_regions = DATABASE
            .region(&number.code().value())
            .map(|regions| regions.into_iter().map(str::to_owned).collect::<Vec<_>>())
            .unwrap_or_default();

        let location = location_details(
            self.geocoder.location_for(number, &self.config.language),
            self.geocoder.location_for(number, SPANISH),
            self.geocoder.location_for(number, FRENCH),
        );

        GeographicInfo {
            region_code,
            country_name: country.as_ref().map(|country| country.name.clone()),
            country_official_name: country.as_ref().and_then(|country| country.official_name.clone()),
            country_alpha_3: country.as_ref().map(|country| country.alpha3.clone()),
            country_numeric_code: country.map(|country| country.numeric_code),
            region_count_for_country_code: associated_regions.len(),
            is_multi_region_country_code: associated_regions.len() > 1,
            associated_regions,
            location,
            area: decompose_area_code(number.code().value(), number.national().value()),
        }
    }
}

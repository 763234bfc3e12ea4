use super::{
    enums::{NumberKind, RiskLevel},
    helper_constants::{
        AREA_CODE_WEIGHT, CARRIER_WEIGHT, CITY_WEIGHT, INVALID_NUMBER_FACTOR, LOCATION_WEIGHT,
        MAX_CONFIDENCE, NO_LOCATION_FACTOR, PREMIUM_RATE_FACTOR, VALID_NUMBER_WEIGHT, VOIP_FACTOR,
    },
    report::{GeographicInfo, RiskAssessment, ServiceInfo, ValidationInfo},
};

/// Returns a score in `0..=100` from five independent signals: a valid
/// number, a resolved location, a carrier name, an area code and a city.
pub fn confidence_score(
    validation: &ValidationInfo,
    geographic: &GeographicInfo,
    service: &ServiceInfo,
) -> u8 {
    let signals = [
        (validation.is_valid_number, VALID_NUMBER_WEIGHT),
        (geographic.location.primary_location.is_some(), LOCATION_WEIGHT),
        (service.carrier_name.is_some(), CARRIER_WEIGHT),
        (geographic.area.area_code.is_some(), AREA_CODE_WEIGHT),
        (geographic.location.city.is_some(), CITY_WEIGHT),
    ];
    let score = signals
        .iter()
        .filter(|(present, _)| *present)
        .fold(0u8, |score, (_, weight)| score.saturating_add(*weight));
    score.min(MAX_CONFIDENCE)
}

/// Classifies the number. Later rules can only raise the level.
pub fn assess_risk(
    kind: NumberKind,
    geographic: &GeographicInfo,
    validation: &ValidationInfo,
) -> RiskAssessment {
    let mut level = RiskLevel::Low;
    let mut factors = Vec::new();

    if !validation.is_valid_number {
        factors.push(INVALID_NUMBER_FACTOR.to_owned());
        level = RiskLevel::High;
    }
    match kind {
        NumberKind::PremiumRate => {
            factors.push(PREMIUM_RATE_FACTOR.to_owned());
            level = level.max(RiskLevel::Medium);
        }
        NumberKind::Voip => {
            factors.push(VOIP_FACTOR.to_owned());
            level = level.max(RiskLevel::Medium);
        }
        _ => {}
    }
    if geographic.location.primary_location.is_none() {
        factors.push(NO_LOCATION_FACTOR.to_owned());
    }

    RiskAssessment {
        is_safe_to_call: level <= RiskLevel::Medium && validation.is_valid_number,
        risk_level: level,
        risk_factors: factors,
    }
}

use strum::IntoEnumIterator;

use crate::{
    AreaCodeBreakdown, GeographicInfo, LocationConfidence, LocationDetails, NumberKind,
    PossibleLength, RiskLevel, ServiceInfo, ValidationInfo, assess_risk, confidence_score,
};

fn validation(valid: bool) -> ValidationInfo {
    ValidationInfo {
        is_valid_number: valid,
        is_possible_number: valid,
        is_valid_for_region: valid,
        validation_result: if valid { "VALID" } else { "INVALID" },
        possible_length_result: if valid {
            PossibleLength::IsPossible
        } else {
            PossibleLength::TooShort
        },
    }
}

fn geographic(location: Option<&str>, city: Option<&str>, area_code: Option<&str>) -> GeographicInfo {
    GeographicInfo {
        region_code: Some("US".to_owned()),
        country_name: None,
        country_official_name: None,
        country_alpha_3: None,
        country_numeric_code: None,
        associated_regions: vec!["US".to_owned()],
        region_count_for_country_code: 1,
        is_multi_region_country_code: false,
        location: LocationDetails {
            primary_location: location.map(str::to_owned),
            location_spanish: None,
            location_french: None,
            city: city.map(str::to_owned),
            state_province: None,
            location_confidence: LocationConfidence::Medium,
        },
        area: AreaCodeBreakdown {
            area_code: area_code.map(str::to_owned),
            ..Default::default()
        },
    }
}

fn service(kind: NumberKind, carrier: Option<&str>) -> ServiceInfo {
    ServiceInfo {
        carrier_name: carrier.map(str::to_owned),
        carrier_available: carrier.is_some(),
        number_type: kind,
        number_type_code: kind.code(),
        is_mobile: kind == NumberKind::Mobile,
        is_fixed_line: kind == NumberKind::FixedLine,
        is_fixed_or_mobile: kind == NumberKind::FixedLineOrMobile,
        is_voip: kind == NumberKind::Voip,
        is_toll_free: kind == NumberKind::TollFree,
        is_premium_rate: kind == NumberKind::PremiumRate,
        is_special_service: false,
        likely_billable: true,
    }
}

/// Every combination of the five confidence signals, as a bit mask.
fn signal_inputs(mask: u8) -> (ValidationInfo, GeographicInfo, ServiceInfo) {
    let has = |bit: u8| mask & (1 << bit) != 0;
    (
        validation(has(0)),
        geographic(
            has(1).then_some("Somewhere"),
            has(4).then_some("Springfield"),
            has(3).then_some("217"),
        ),
        service(NumberKind::FixedLine, has(2).then_some("Acme")),
    )
}

#[test]
fn confidence_weights() {
    let all = signal_inputs(0b11111);
    assert_eq!(100, confidence_score(&all.0, &all.1, &all.2));

    let none = signal_inputs(0);
    assert_eq!(0, confidence_score(&none.0, &none.1, &none.2));

    let expected = [30, 25, 20, 15, 10];
    for (bit, weight) in expected.into_iter().enumerate() {
        let single = signal_inputs(1 << bit);
        assert_eq!(weight, confidence_score(&single.0, &single.1, &single.2), "bit {bit}");
    }
}

#[test]
fn confidence_is_bounded_and_monotonic() {
    for mask in 0u8..32 {
        let (v, g, s) = signal_inputs(mask);
        let score = confidence_score(&v, &g, &s);
        assert!(score <= 100);

        // Adding any missing signal never lowers the score.
        for bit in 0..5 {
            if mask & (1 << bit) == 0 {
                let (v2, g2, s2) = signal_inputs(mask | (1 << bit));
                assert!(confidence_score(&v2, &g2, &s2) > score, "mask {mask:05b} bit {bit}");
            }
        }
    }
}

#[test]
fn plain_valid_number_is_low_risk() {
    let risk = assess_risk(
        NumberKind::Mobile,
        &geographic(Some("Madrid"), Some("Madrid"), None),
        &validation(true),
    );
    assert_eq!(RiskLevel::Low, risk.risk_level);
    assert!(risk.risk_factors.is_empty());
    assert!(risk.is_safe_to_call);
}

#[test]
fn premium_and_voip_are_medium() {
    for kind in [NumberKind::PremiumRate, NumberKind::Voip] {
        let risk = assess_risk(kind, &geographic(Some("Spain"), None, None), &validation(true));
        assert_eq!(RiskLevel::Medium, risk.risk_level, "{kind:?}");
        assert_eq!(1, risk.risk_factors.len());
        assert!(risk.is_safe_to_call);
    }
}

#[test]
fn invalid_numbers_stay_high() {
    for kind in NumberKind::iter() {
        for location in [None, Some("Somewhere")] {
            let risk = assess_risk(kind, &geographic(location, None, None), &validation(false));
            assert_eq!(RiskLevel::High, risk.risk_level, "{kind:?}");
            assert!(!risk.is_safe_to_call);
            assert_eq!("Invalid number format", risk.risk_factors[0]);
        }
    }
}

#[test]
fn factor_order() {
    let risk = assess_risk(NumberKind::PremiumRate, &geographic(None, None, None), &validation(false));
    assert_eq!(
        vec![
            "Invalid number format".to_owned(),
            "Premium rate number - charges may apply".to_owned(),
            "Location information unavailable".to_owned(),
        ],
        risk.risk_factors
    );
    assert_eq!(RiskLevel::High, risk.risk_level);

    // A missing location alone is reported but does not raise the level.
    let risk = assess_risk(NumberKind::TollFree, &geographic(None, None, None), &validation(true));
    assert_eq!(RiskLevel::Low, risk.risk_level);
    assert_eq!(vec!["Location information unavailable".to_owned()], risk.risk_factors);
    assert!(risk.is_safe_to_call);
}

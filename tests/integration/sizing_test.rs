//! Risk engine integration tests

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use trade_journal::config::{FeeConfig, RiskConfig};
use trade_journal::risk::{
    Direction, LeverageTier, RiskEngine, RiskError, RoundingPolicy, SizingRequest, WarningLevel,
};

#[test]
fn test_reference_long_sizing() {
    let engine = RiskEngine::from_config(&RiskConfig::default(), &FeeConfig::default());
    let request = SizingRequest::new(dec!(1000), dec!(2), dec!(25000), dec!(24500))
        .with_direction(Direction::Long);

    let result = engine.compute_sizing(&request).unwrap();
    assert_eq!(result.risk_amount, dec!(20));
    assert_eq!(result.stop_distance, dec!(500));
    assert_eq!(result.quantity, dec!(0.04));
    assert_eq!(result.order_value, dec!(1000));
    assert_eq!(result.required_leverage, dec!(1.0));
    assert_eq!(result.leverage_tier, LeverageTier::None);
    assert_eq!(result.leverage_note, "No leverage required");

    let liq = result.liquidation.unwrap();
    assert_eq!(liq.liquidation_price, dec!(125));
    assert_eq!(liq.warning_level, WarningLevel::Safe);
}

#[test]
fn test_quantity_positive_whenever_risk_positive() {
    let engine = RiskEngine::default();
    let cases = [
        (dec!(1000), dec!(1), dec!(100), dec!(99)),
        (dec!(1000), dec!(3), dec!(100), dec!(101)),
        (dec!(50), dec!(0.5), dec!(0.25), dec!(0.2)),
        (dec!(250000), dec!(2), dec!(64000), dec!(63990.5)),
    ];
    for (account, risk, entry, stop) in cases {
        let result = engine
            .compute_sizing(&SizingRequest::new(account, risk, entry, stop))
            .unwrap();
        assert!(result.quantity > Decimal::ZERO);
        assert!(result.required_leverage >= Decimal::ONE);
    }
}

#[test]
fn test_zero_distance_always_invalid() {
    let engine = RiskEngine::default().with_round_quantity(true);
    for price in [dec!(0.0001), dec!(1), dec!(25000)] {
        let request = SizingRequest::new(dec!(1000), dec!(2), price, price)
            .with_direction(Direction::Long);
        assert!(matches!(
            engine.compute_sizing(&request),
            Err(RiskError::InvalidParameters(_))
        ));
    }
}

#[test]
fn test_watch_and_danger_bands() {
    let engine = RiskEngine::default();

    // 10x long with liquidation at 90.05 and stop at 99
    let watch = engine
        .compute_sizing(
            &SizingRequest::new(dec!(1000), dec!(10), dec!(100), dec!(99))
                .with_direction(Direction::Long),
        )
        .unwrap();
    assert_eq!(watch.required_leverage, dec!(10));
    assert_eq!(
        watch.liquidation.as_ref().unwrap().warning_level,
        WarningLevel::Watch
    );

    // 50x long with liquidation at 98.01 and stop at 99
    let danger = engine
        .compute_sizing(
            &SizingRequest::new(dec!(1000), dec!(50), dec!(100), dec!(99))
                .with_direction(Direction::Long),
        )
        .unwrap();
    let liq = danger.liquidation.unwrap();
    assert_eq!(liq.liquidation_price, dec!(98.01));
    assert!(liq.stop_before_liquidation);
    assert_eq!(liq.warning_level, WarningLevel::Danger);
    assert!(liq.warning.contains("0.99%"));
}

#[test]
fn test_rounding_policy_changes_leverage_and_liquidation() {
    let request = SizingRequest::new(dec!(1000), dec!(2.5), dec!(500), dec!(490))
        .with_direction(Direction::Long);

    let even = RiskEngine::default().compute_sizing(&request).unwrap();
    let up = RiskEngine::default()
        .with_rounding(RoundingPolicy::HalfUp)
        .compute_sizing(&request)
        .unwrap();

    assert_eq!(even.required_leverage, dec!(1.2));
    assert_eq!(up.required_leverage, dec!(1.3));
    assert_ne!(
        even.liquidation.unwrap().liquidation_price,
        up.liquidation.unwrap().liquidation_price
    );
}

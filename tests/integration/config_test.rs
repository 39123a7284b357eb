//! Configuration integration tests

use rust_decimal_macros::dec;
use trade_journal::config::{Config, LogFormat};
use trade_journal::risk::RoundingPolicy;

#[test]
fn test_config_example_parses() {
    let config: Config = toml::from_str(include_str!("../../config.toml.example")).unwrap();
    assert_eq!(config.risk.maintenance_margin_rate, dec!(0.005));
    assert!(!config.risk.round_quantity);
    assert_eq!(config.risk.rounding, RoundingPolicy::HalfEven);
    assert_eq!(config.fees.taker_rate, dec!(0.00055));
    assert_eq!(config.fees.maker_rate, dec!(0.0002));
    assert_eq!(config.telemetry.log_format, LogFormat::Pretty);
}

#[test]
fn test_config_load_from_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
        [journal]
        path = "/var/lib/journal/trades.json"
        "#,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(
        config.journal.path,
        std::path::PathBuf::from("/var/lib/journal/trades.json")
    );
    assert_eq!(config.fees.taker_rate, dec!(0.00055));
}

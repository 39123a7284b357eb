//! Journal lifecycle tests against the JSON file store

use rust_decimal_macros::dec;
use tempfile::TempDir;
use trade_journal::journal::{
    JournalError, JsonFileStore, OpenTrade, TradeLedger, TradeStatus, TradeStore,
};
use trade_journal::risk::{Direction, RiskEngine, RiskError};

fn order(pair: &str, direction: Direction) -> OpenTrade {
    let stop_loss = match direction {
        Direction::Long => dec!(24500),
        Direction::Short => dec!(25500),
    };
    OpenTrade {
        pair: pair.to_string(),
        direction,
        account_size: dec!(1000),
        risk_pct: dec!(2),
        entry: dec!(25000),
        stop_loss,
        maintenance_margin_rate: None,
    }
}

fn file_ledger(dir: &TempDir) -> TradeLedger<JsonFileStore> {
    TradeLedger::new(
        JsonFileStore::new(dir.path().join("trades.json")),
        RiskEngine::default(),
    )
}

#[test]
fn test_open_close_round_trip_through_file() {
    let dir = TempDir::new().unwrap();
    let ledger = file_ledger(&dir);

    let opened = ledger.open_trade(order("BTCUSDT", Direction::Long)).unwrap();
    assert_eq!(opened.id, 1);
    assert_eq!(opened.quantity, dec!(0.04));

    let closed = ledger
        .close_trade(1, dec!(26000), Some("breakout".to_string()))
        .unwrap()
        .unwrap();
    assert_eq!(closed.gross_pnl, Some(dec!(40)));
    assert_eq!(closed.fees_paid, Some(dec!(1.122)));
    assert_eq!(closed.net_pnl, Some(dec!(38.878)));

    // A fresh ledger over the same file sees the closed trade
    let reopened = file_ledger(&dir);
    let trades = reopened.store().load();
    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].status, TradeStatus::Closed);
    assert_eq!(trades[0], closed);
}

#[test]
fn test_closed_trade_cannot_be_closed_again() {
    let dir = TempDir::new().unwrap();
    let ledger = file_ledger(&dir);
    ledger.open_trade(order("BTCUSDT", Direction::Long)).unwrap();
    ledger.close_trade(1, dec!(26000), None).unwrap();

    assert!(ledger.close_trade(1, dec!(30000), None).unwrap().is_none());
    assert!(ledger.close_trade(2, dec!(30000), None).unwrap().is_none());
    assert_eq!(ledger.store().load()[0].exit_price, Some(dec!(26000)));
}

#[test]
fn test_delete_keeps_ids_contiguous() {
    let dir = TempDir::new().unwrap();
    let ledger = file_ledger(&dir);
    for pair in ["BTCUSDT", "ETHUSDT", "SOLUSDT", "XRPUSDT", "ADAUSDT"] {
        ledger.open_trade(order(pair, Direction::Short)).unwrap();
    }
    ledger.close_trade(4, dec!(24000), None).unwrap();

    assert!(ledger.delete_trade(1).unwrap());
    assert!(ledger.delete_trade(3).unwrap());
    assert!(!ledger.delete_trade(10).unwrap());

    let trades = ledger.store().load();
    let ids: Vec<u32> = trades.iter().map(|t| t.id).collect();
    let pairs: Vec<&str> = trades.iter().map(|t| t.pair.as_str()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(pairs, vec!["ETHUSDT", "SOLUSDT", "ADAUSDT"]);
}

#[test]
fn test_corrupt_file_is_treated_as_empty_and_overwritten() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("trades.json"), "not json at all").unwrap();
    let ledger = file_ledger(&dir);

    assert!(ledger.list_open_trades().is_empty());
    let trade = ledger.open_trade(order("BTCUSDT", Direction::Long)).unwrap();
    assert_eq!(trade.id, 1);
    assert_eq!(ledger.store().load().len(), 1);
}

#[test]
fn test_history_analytics() {
    let dir = TempDir::new().unwrap();
    let ledger = file_ledger(&dir);
    ledger.open_trade(order("BTCUSDT", Direction::Long)).unwrap();
    ledger.open_trade(order("ETHUSDT", Direction::Short)).unwrap();
    ledger.open_trade(order("SOLUSDT", Direction::Long)).unwrap();

    let empty = ledger.view_history();
    assert_eq!(empty.summary.closed_trades, 0);
    assert_eq!(empty.summary.win_rate, dec!(0));

    ledger.close_trade(1, dec!(26000), None).unwrap();
    ledger.close_trade(2, dec!(26000), None).unwrap();

    let history = ledger.view_history();
    assert_eq!(history.summary.total_trades, 3);
    assert_eq!(history.summary.closed_trades, 2);
    assert_eq!(history.summary.winning_trades, 1);
    assert_eq!(history.summary.win_rate, dec!(50));
    // +38.878 long, short loses 40 + (0.55 + 0.572)
    assert_eq!(history.summary.net_pnl, dec!(38.878) + dec!(-41.122));
    assert_eq!(ledger.list_open_trades().len(), 1);
}

#[test]
fn test_legacy_journal_is_readable() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("trades.json"),
        r#"[
    {
        "id": 1,
        "date": "2024-02-10 08:15:00",
        "pair": "BTCUSDT",
        "account_size": 1000,
        "risk_pct": 2,
        "entry": 25000,
        "stop_loss": 24500,
        "direction": "long",
        "risk_amount": 20.0,
        "position_size": 0.04,
        "order_value": 1000.0,
        "required_leverage": 1.0,
        "leverage_note": "No leverage required",
        "taker_fee": 0.55,
        "maker_fee": 0.2,
        "status": "open",
        "exit_price": null,
        "gross_pnl": null,
        "fees_paid": null,
        "net_pnl": null,
        "notes": null
    }
]"#,
    )
    .unwrap();

    let ledger = file_ledger(&dir);
    let open = ledger.list_open_trades();
    assert_eq!(open.len(), 1);
    assert!(open[0].liquidation_price.is_none());

    let closed = ledger.close_trade(1, dec!(26000), None).unwrap().unwrap();
    assert_eq!(closed.net_pnl, Some(dec!(38.878)));
}

#[test]
fn test_mixed_journal_keeps_readable_trades() {
    let dir = TempDir::new().unwrap();
    let ledger = file_ledger(&dir);
    ledger.open_trade(order("BTCUSDT", Direction::Long)).unwrap();
    ledger.open_trade(order("ETHUSDT", Direction::Short)).unwrap();
    ledger.open_trade(order("SOLUSDT", Direction::Long)).unwrap();
    ledger.close_trade(1, dec!(26000), None).unwrap();

    // Hand-edited directions: one capitalized, one free text
    let path = dir.path().join("trades.json");
    let mut records: Vec<serde_json::Value> =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    records[1]["direction"] = serde_json::Value::String("Short".to_string());
    records[2]["direction"] = serde_json::Value::String("buy".to_string());
    let raw = serde_json::to_string_pretty(&records).unwrap();
    std::fs::write(&path, &raw).unwrap();

    let loaded = ledger.store().load();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].status, TradeStatus::Closed);
    assert_eq!(loaded[1].direction, Direction::Short);

    let next = ledger.open_trade(order("XRPUSDT", Direction::Long)).unwrap();
    assert_eq!(next.id, 3);

    let trades = ledger.store().load();
    let pairs: Vec<&str> = trades.iter().map(|t| t.pair.as_str()).collect();
    assert_eq!(pairs, vec!["BTCUSDT", "ETHUSDT", "XRPUSDT"]);
    assert_eq!(trades[0].net_pnl, Some(dec!(38.878)));

    let backup = ledger.store().backup_path();
    assert_eq!(std::fs::read_to_string(backup).unwrap(), raw);
}

#[test]
fn test_out_of_range_sizing_is_an_error() {
    let dir = TempDir::new().unwrap();
    let ledger = file_ledger(&dir);
    let huge = OpenTrade {
        pair: "BTCUSDT".to_string(),
        direction: Direction::Long,
        account_size: dec!(100000000000000000000),
        risk_pct: dec!(100),
        entry: dec!(1000000000),
        stop_loss: dec!(999999999.9999),
        maintenance_margin_rate: None,
    };

    assert!(matches!(
        ledger.open_trade(huge),
        Err(JournalError::Risk(RiskError::InvalidParameters(_)))
    ));
    assert!(ledger.store().load().is_empty());
}

//! Integration tests

mod config_test;
mod journal_test;
mod sizing_test;

//! monthly-ledger - a terminal personal ledger
//!
//! Tracks dated income and expense entries, one budget per month, savings
//! goals and monthly reflections, and derives balances, variances, rankings
//! and progress figures from them.
//!
//! # Architecture
//!
//! - `models`: records plus `Money`, `MonthPeriod` and typed IDs
//! - `reports`: the derivation engine, pure functions over borrowed records
//! - `storage`: JSON file repositories with atomic writes
//! - `services`: validation and mutation rules on top of storage
//! - `audit`: append-only log of every mutation
//! - `config`: paths and user settings
//! - `export`: JSON/YAML snapshots and CSV transactions
//! - `display`: terminal formatting
//! - `cli`: clap subcommands
//!
//! # Example
//!
//! ```rust,ignore
//! use monthly_ledger::reports::{current_period, MonthlySummary};
//!
//! let period = current_period(chrono::Local::now().date_naive());
//! let summary = MonthlySummary::generate(period, &transactions, &budgets, &goals);
//! println!("net savings: {}", summary.net_savings);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};

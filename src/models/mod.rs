//! Core data models for monthly-ledger
//!
//! Records kept by the stores (transactions, categories, budgets, savings
//! goals and monthly notes) plus the `Money` and `MonthPeriod` value types.

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod note;
pub mod period;
pub mod savings_goal;
pub mod transaction;

pub use budget::{Budget, CategoryLimit};
pub use category::{Category, DefaultCategory};
pub use ids::{CategoryId, SavingsGoalId, TransactionId};
pub use money::Money;
pub use note::MonthlyNote;
pub use period::MonthPeriod;
pub use savings_goal::SavingsGoal;
pub use transaction::{EntryKind, Transaction};

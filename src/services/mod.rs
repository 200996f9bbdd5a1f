//! Service layer for monthly-ledger
//!
//! Services validate input, apply mutation rules on top of the storage
//! repositories and write the audit log. Derived figures come from
//! `reports`, never from here.

pub mod budget;
pub mod category;
pub mod note;
pub mod savings;
pub mod transaction;

pub use budget::BudgetService;
pub use category::CategoryService;
pub use note::NoteService;
pub use savings::SavingsGoalService;
pub use transaction::{CreateTransactionInput, TransactionService};

//! Core data models
//!
//! Incomes, expenses and monthly budgets, plus the value types they are
//! built from (ids, money, periods).

pub mod budget;
pub mod category;
pub mod expense;
pub mod ids;
pub mod income;
pub mod money;
pub mod period;
pub mod transaction;

pub use budget::Budget;
pub use category::{build_vocabulary, ALL_CATEGORIES, DEFAULT_CATEGORIES, INCOME_SOURCES};
pub use expense::{Expense, NewExpense};
pub use ids::{BudgetId, ExpenseId, IncomeId};
pub use income::{Income, NewIncome};
pub use money::{Money, MoneyParseError};
pub use period::{period_key, Period, PeriodParseError};
pub use transaction::{Transaction, ValidationError};

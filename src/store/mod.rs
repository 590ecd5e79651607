//! In-memory entity store
//!
//! Holds the three collections (incomes, expenses, budgets) and applies
//! mutations. The store keeps no derived figures; every report is
//! recomputed from these records. It performs no I/O: persistence goes
//! through [`LedgerSnapshot`], which callers load and save themselves.

mod snapshot;

pub use snapshot::LedgerSnapshot;

use std::collections::HashSet;

use crate::error::{LedgerError, LedgerResult};
use crate::models::transaction::{parse_amount, require_text};
use crate::models::{
    build_vocabulary, Budget, Expense, ExpenseId, Income, IncomeId, NewExpense, NewIncome,
    Period, DEFAULT_CATEGORIES,
};

/// The ledger's records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerStore {
    incomes: Vec<Income>,
    expenses: Vec<Expense>,
    budgets: Vec<Budget>,
}

impl LedgerStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from a persisted snapshot
    ///
    /// Rejects snapshots that break the store's invariants: invalid
    /// records, repeated ids, or two budgets for the same category/month.
    pub fn from_snapshot(snapshot: LedgerSnapshot) -> LedgerResult<Self> {
        snapshot.check()?;
        Ok(Self {
            incomes: snapshot.incomes,
            expenses: snapshot.expenses,
            budgets: snapshot.budgets,
        })
    }

    /// Owned copy of every record, for persistence
    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            incomes: self.incomes.clone(),
            expenses: self.expenses.clone(),
            budgets: self.budgets.clone(),
        }
    }

    pub fn incomes(&self) -> &[Income] {
        &self.incomes
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub fn is_empty(&self) -> bool {
        self.incomes.is_empty() && self.expenses.is_empty() && self.budgets.is_empty()
    }

    /// Record a new income
    pub fn add_income(&mut self, input: &NewIncome) -> LedgerResult<Income> {
        let income =
            Income::from_input(input).map_err(|e| LedgerError::Validation(e.to_string()))?;
        self.incomes.push(income.clone());
        Ok(income)
    }

    /// Record a new expense
    pub fn add_expense(&mut self, input: &NewExpense) -> LedgerResult<Expense> {
        let expense =
            Expense::from_input(input).map_err(|e| LedgerError::Validation(e.to_string()))?;
        self.expenses.push(expense.clone());
        Ok(expense)
    }

    /// Remove an income; an unknown id is a no-op
    ///
    /// Returns the removed record, if there was one.
    pub fn delete_income(&mut self, id: IncomeId) -> Option<Income> {
        let index = self.incomes.iter().position(|i| i.id == id)?;
        Some(self.incomes.remove(index))
    }

    /// Remove an expense; an unknown id is a no-op
    ///
    /// Returns the removed record, if there was one.
    pub fn delete_expense(&mut self, id: ExpenseId) -> Option<Expense> {
        let index = self.expenses.iter().position(|e| e.id == id)?;
        Some(self.expenses.remove(index))
    }

    /// Set the monthly limit for a category, creating or updating its budget
    ///
    /// An existing budget for the same (category, month) keeps its id and
    /// has only its limit replaced.
    pub fn set_budget(
        &mut self,
        category: &str,
        month: Period,
        monthly_limit: &str,
    ) -> LedgerResult<Budget> {
        let category =
            require_text("Category", category).map_err(|e| LedgerError::Validation(e.to_string()))?;
        let limit =
            parse_amount(monthly_limit).map_err(|e| LedgerError::Validation(e.to_string()))?;

        if let Some(existing) = self
            .budgets
            .iter_mut()
            .find(|b| b.is_for(&category, month))
        {
            existing.set_limit(limit);
            return Ok(existing.clone());
        }

        let budget = Budget::new(category, month, limit);
        self.budgets.push(budget.clone());
        Ok(budget)
    }

    /// Find an income by id
    pub fn income(&self, id: IncomeId) -> Option<&Income> {
        self.incomes.iter().find(|i| i.id == id)
    }

    /// Find an expense by id
    pub fn expense(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// The budget for (category, month), if one is set
    pub fn budget_for(&self, category: &str, month: Period) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.is_for(category, month))
    }

    /// Seed categories plus every category used by an expense or budget
    pub fn known_categories(&self) -> Vec<String> {
        let used = self
            .expenses
            .iter()
            .map(|e| e.category.as_str())
            .chain(self.budgets.iter().map(|b| b.category.as_str()));
        build_vocabulary(DEFAULT_CATEGORIES.iter().copied(), used)
    }

    /// Resolve a user-supplied reference (full UUID or short form) to an income id
    pub fn resolve_income(&self, reference: &str) -> LedgerResult<IncomeId> {
        resolve_unique(
            self.incomes.iter().map(|i| i.id),
            |id| id.matches_reference(reference),
            || LedgerError::income_not_found(reference),
        )
    }

    /// Resolve a user-supplied reference (full UUID or short form) to an expense id
    pub fn resolve_expense(&self, reference: &str) -> LedgerResult<ExpenseId> {
        resolve_unique(
            self.expenses.iter().map(|e| e.id),
            |id| id.matches_reference(reference),
            || LedgerError::expense_not_found(reference),
        )
    }
}

fn resolve_unique<T, I, M, E>(ids: I, matches: M, not_found: E) -> LedgerResult<T>
where
    T: Copy + Eq + std::hash::Hash,
    I: Iterator<Item = T>,
    M: Fn(&T) -> bool,
    E: Fn() -> LedgerError,
{
    let candidates: HashSet<T> = ids.filter(|id| matches(id)).collect();
    match candidates.len() {
        1 => candidates.into_iter().next().ok_or_else(not_found),
        0 => Err(not_found()),
        n => Err(LedgerError::Validation(format!(
            "Reference is ambiguous ({} matches); use more characters",
            n
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn january() -> Period {
        Period::new(2026, 1).unwrap()
    }

    #[test]
    fn test_add_income() {
        let mut store = LedgerStore::new();
        let income = store
            .add_income(&NewIncome::new("5000", "Salary", "2026-01-15"))
            .unwrap();

        assert_eq!(store.incomes().len(), 1);
        assert_eq!(store.income(income.id), Some(&income));
    }

    #[test]
    fn test_ids_unique_for_same_instant() {
        let mut store = LedgerStore::new();
        let input = NewExpense::new("10", "Other", "2026-01-01");
        let ids: HashSet<ExpenseId> = (0..50)
            .map(|_| store.add_expense(&input).unwrap().id)
            .collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_failed_add_leaves_store_unchanged() {
        let mut store = LedgerStore::new();
        store
            .add_expense(&NewExpense::new("10", "Other", "2026-01-01"))
            .unwrap();
        let before = store.clone();

        let err = store
            .add_expense(&NewExpense::new("ten", "Other", "2026-01-01"))
            .unwrap_err();
        assert!(err.is_validation());

        let err = store
            .add_income(&NewIncome::new("10", "Salary", "not a date"))
            .unwrap_err();
        assert!(err.is_validation());

        assert_eq!(store, before);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut store = LedgerStore::new();
        let keep = store
            .add_expense(&NewExpense::new("10", "Other", "2026-01-01"))
            .unwrap();
        let gone = store
            .add_expense(&NewExpense::new("20", "Other", "2026-01-02"))
            .unwrap();

        assert_eq!(store.delete_expense(gone.id), Some(gone.clone()));
        let after_first = store.clone();

        assert_eq!(store.delete_expense(gone.id), None);
        assert_eq!(store, after_first);
        assert_eq!(store.expenses(), &[keep]);
    }

    #[test]
    fn test_delete_unknown_income_is_noop() {
        let mut store = LedgerStore::new();
        assert_eq!(store.delete_income(IncomeId::new()), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_budget_upserts_in_place() {
        let mut store = LedgerStore::new();
        let first = store.set_budget("Food", january(), "600").unwrap();
        let second = store.set_budget("Food", january(), "600").unwrap();

        assert_eq!(store.budgets().len(), 1);
        assert_eq!(first.id, second.id);

        let updated = store.set_budget("Food", january(), "650.50").unwrap();
        assert_eq!(updated.id, first.id);
        assert_eq!(store.budgets().len(), 1);
        assert_eq!(
            store.budget_for("Food", january()).map(|b| b.monthly_limit),
            Some(Money::from_cents(65050))
        );
    }

    #[test]
    fn test_set_budget_distinguishes_months_and_categories() {
        let mut store = LedgerStore::new();
        store.set_budget("Food", january(), "600").unwrap();
        store.set_budget("Food", january().next(), "500").unwrap();
        store.set_budget("Housing", january(), "1600").unwrap();

        assert_eq!(store.budgets().len(), 3);
    }

    #[test]
    fn test_set_budget_rejects_bad_limits() {
        let mut store = LedgerStore::new();
        store.set_budget("Food", january(), "600").unwrap();
        let before = store.clone();

        assert!(store.set_budget("Food", january(), "-1").unwrap_err().is_validation());
        assert!(store.set_budget("Food", january(), "lots").unwrap_err().is_validation());
        assert!(store.set_budget("  ", january(), "10").unwrap_err().is_validation());
        assert_eq!(store, before);
    }

    #[test]
    fn test_known_categories() {
        let mut store = LedgerStore::new();
        store
            .add_expense(&NewExpense::new("10", "Pets", "2026-01-01"))
            .unwrap();
        store.set_budget("Gym", january(), "40").unwrap();
        store
            .add_expense(&NewExpense::new("10", "Housing", "2026-01-01"))
            .unwrap();

        let categories = store.known_categories();
        assert_eq!(categories.len(), DEFAULT_CATEGORIES.len() + 2);
        assert_eq!(categories[categories.len() - 2], "Pets");
        assert_eq!(categories[categories.len() - 1], "Gym");
    }

    #[test]
    fn test_resolve_references() {
        let mut store = LedgerStore::new();
        let expense = store
            .add_expense(&NewExpense::new("10", "Other", "2026-01-01"))
            .unwrap();

        assert_eq!(store.resolve_expense(&expense.id.to_string()).unwrap(), expense.id);
        assert_eq!(
            store
                .resolve_expense(&expense.id.as_uuid().to_string())
                .unwrap(),
            expense.id
        );
        assert!(store.resolve_expense("exp-zzzzzzzz").unwrap_err().is_not_found());
        assert!(store.resolve_income("inc-00000000").unwrap_err().is_not_found());
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut store = LedgerStore::new();
        store
            .add_income(&NewIncome::new("5000", "Salary", "2026-01-15"))
            .unwrap();
        store
            .add_expense(&NewExpense::new("450", "Food", "2026-01-10"))
            .unwrap();
        store.set_budget("Food", january(), "600").unwrap();

        let rebuilt = LedgerStore::from_snapshot(store.snapshot()).unwrap();
        assert_eq!(rebuilt, store);
    }
}

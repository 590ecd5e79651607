//! Storage layer for finance-ledger
//!
//! Loads the ledger snapshot from `data/ledger.json` (seeding it on first
//! run), and writes the whole snapshot back atomically after every
//! successful mutation. Each write is also recorded in the audit log.

pub mod file_io;
pub mod seed;

pub use file_io::{read_json_if_exists, write_json_atomic};
pub use seed::seed_store;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::{LedgerPaths, Settings};
use crate::error::LedgerResult;
use crate::models::{Budget, Expense, ExpenseId, Income, IncomeId, NewExpense, NewIncome, Period};
use crate::store::{LedgerSnapshot, LedgerStore};

/// Write-through coordinator around the in-memory store
pub struct Storage {
    paths: LedgerPaths,
    store: LedgerStore,
    audit: AuditLogger,
}

impl Storage {
    /// Open the ledger at `paths`
    ///
    /// A missing ledger file is created: seeded with demonstration data
    /// when `settings.seed_on_first_run` is set, empty otherwise.
    pub fn open(paths: LedgerPaths, settings: &Settings) -> LedgerResult<Self> {
        paths.ensure_directories()?;

        let snapshot: Option<LedgerSnapshot> = read_json_if_exists(paths.ledger_file())?;
        let store = match snapshot {
            Some(snapshot) => LedgerStore::from_snapshot(snapshot)?,
            None => {
                let store = if settings.seed_on_first_run {
                    seed_store()?
                } else {
                    LedgerStore::new()
                };
                write_json_atomic(paths.ledger_file(), &store.snapshot())?;
                store
            }
        };

        Ok(Self {
            audit: AuditLogger::new(paths.audit_log()),
            paths,
            store,
        })
    }

    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    /// Read-only view of the records, for queries
    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Run `mutate` against a copy of the store and keep the result only
    /// once it is on disk
    fn commit<T>(
        &mut self,
        mutate: impl FnOnce(&mut LedgerStore) -> LedgerResult<T>,
    ) -> LedgerResult<T> {
        let mut next = self.store.clone();
        let outcome = mutate(&mut next)?;
        write_json_atomic(self.paths.ledger_file(), &next.snapshot())?;
        self.store = next;
        Ok(outcome)
    }

    pub fn add_income(&mut self, input: &NewIncome) -> LedgerResult<Income> {
        let income = self.commit(|store| store.add_income(input))?;
        self.audit.log(&AuditEntry::created(
            EntityType::Income,
            income.id.as_uuid().to_string(),
            Some(income_label(&income)),
            &income,
        ))?;
        Ok(income)
    }

    pub fn add_expense(&mut self, input: &NewExpense) -> LedgerResult<Expense> {
        let expense = self.commit(|store| store.add_expense(input))?;
        self.audit.log(&AuditEntry::created(
            EntityType::Expense,
            expense.id.as_uuid().to_string(),
            Some(expense_label(&expense)),
            &expense,
        ))?;
        Ok(expense)
    }

    /// Delete an income; deleting an unknown id writes nothing
    pub fn delete_income(&mut self, id: IncomeId) -> LedgerResult<Option<Income>> {
        if self.store.income(id).is_none() {
            return Ok(None);
        }

        let removed = self.commit(|store| Ok(store.delete_income(id)))?;
        if let Some(income) = &removed {
            self.audit.log(&AuditEntry::deleted(
                EntityType::Income,
                income.id.as_uuid().to_string(),
                Some(income_label(income)),
                income,
            ))?;
        }
        Ok(removed)
    }

    /// Delete an expense; deleting an unknown id writes nothing
    pub fn delete_expense(&mut self, id: ExpenseId) -> LedgerResult<Option<Expense>> {
        if self.store.expense(id).is_none() {
            return Ok(None);
        }

        let removed = self.commit(|store| Ok(store.delete_expense(id)))?;
        if let Some(expense) = &removed {
            self.audit.log(&AuditEntry::deleted(
                EntityType::Expense,
                expense.id.as_uuid().to_string(),
                Some(expense_label(expense)),
                expense,
            ))?;
        }
        Ok(removed)
    }

    /// Create or update the budget for (category, month)
    pub fn set_budget(
        &mut self,
        category: &str,
        month: Period,
        monthly_limit: &str,
    ) -> LedgerResult<Budget> {
        let before = self.store.budget_for(category.trim(), month).cloned();
        let budget = self.commit(|store| store.set_budget(category, month, monthly_limit))?;

        let id = budget.id.as_uuid().to_string();
        let label = Some(budget.to_string());
        let entry = match before {
            Some(before) => AuditEntry::updated(EntityType::Budget, id, label, &before, &budget),
            None => AuditEntry::created(EntityType::Budget, id, label, &budget),
        };
        self.audit.log(&entry)?;

        Ok(budget)
    }
}

fn income_label(income: &Income) -> String {
    format!("{} {}", income.source, income.amount)
}

fn expense_label(expense: &Expense) -> String {
    format!("{} {}", expense.category, expense.amount)
}

//! The server's copy of the expenses held by the remote store.

use std::sync::Mutex;

use crate::{
    Error,
    expense::Expense,
    store::ExpenseStore,
};

/// The expenses most recently fetched from the remote store, plus any created since.
///
/// The collection only changes wholesale after a successful fetch or by
/// appending the canonical record returned by a successful create.
///
/// Fetches and creates can interleave, so each append is stamped with a
/// version. A fetch applied with [ExpenseCollection::replace_all] keeps the
/// expenses appended after that fetch started.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ExpenseCollection {
    expenses: Vec<Expense>,
    version: u64,
    refreshed_at: u64,
    appended: Vec<(u64, Expense)>,
}

impl ExpenseCollection {
    /// The version to pass to [ExpenseCollection::replace_all] for a fetch
    /// that starts now.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Hold the `expenses` of a fetch that started at version `fetched_at`.
    ///
    /// Expenses appended since `fetched_at` that the fetch does not contain
    /// are kept. Returns false, and changes nothing, if a fetch that started
    /// later has already been applied.
    pub fn replace_all(&mut self, mut expenses: Vec<Expense>, fetched_at: u64) -> bool {
        if fetched_at < self.refreshed_at {
            return false;
        }

        self.appended.retain(|(version, _)| *version > fetched_at);

        for (_, expense) in &self.appended {
            if !contains_id(&expenses, expense) {
                expenses.push(expense.clone());
            }
        }

        self.expenses = expenses;
        self.refreshed_at = fetched_at;

        true
    }

    /// Add an expense confirmed by the remote store.
    ///
    /// Returns false if an expense with the same ID is already held.
    pub fn append(&mut self, expense: Expense) -> bool {
        if contains_id(&self.expenses, &expense) {
            return false;
        }

        self.version += 1;
        self.appended.push((self.version, expense.clone()));
        self.expenses.push(expense);

        true
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

fn contains_id(expenses: &[Expense], expense: &Expense) -> bool {
    expense.id.is_some() && expenses.iter().any(|held| held.id == expense.id)
}

impl From<Vec<Expense>> for ExpenseCollection {
    fn from(expenses: Vec<Expense>) -> Self {
        Self {
            expenses,
            ..Default::default()
        }
    }
}

/// Replace the contents of `collection` with the expenses in `store`.
///
/// Returns the number of expenses fetched. On failure the error is logged and
/// `collection` is left as it was. Expenses added while the fetch is in
/// flight are kept.
pub async fn refresh_collection(
    store: &dyn ExpenseStore,
    collection: &Mutex<ExpenseCollection>,
) -> Result<usize, Error> {
    let fetched_at = lock_collection(collection)?.version();
    let expenses = store
        .fetch_all()
        .await
        .inspect_err(|error| tracing::error!("could not fetch expenses: {error}"))?;
    let count = expenses.len();

    if lock_collection(collection)?.replace_all(expenses, fetched_at) {
        tracing::debug!("refreshed expense collection with {count} expenses");
    } else {
        tracing::debug!("discarded a fetch of {count} expenses that started before the last refresh");
    }

    Ok(count)
}

/// Get a snapshot of the expenses in `collection`.
pub fn snapshot(collection: &Mutex<ExpenseCollection>) -> Result<Vec<Expense>, Error> {
    Ok(lock_collection(collection)?.expenses().to_vec())
}

pub(crate) fn lock_collection(
    collection: &Mutex<ExpenseCollection>,
) -> Result<std::sync::MutexGuard<'_, ExpenseCollection>, Error> {
    collection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire the collection lock: {error}"))
        .map_err(|_| Error::CollectionLock)
}

use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::{
    expense::{Expense, ExpenseId, NewExpense},
    store::{ExpenseStore, TransportError},
};

/// An in-process [ExpenseStore] that counts its calls and can be told to fail.
#[derive(Debug, Default)]
pub(crate) struct FakeExpenseStore {
    expenses: Mutex<Vec<Expense>>,
    fetch_error: Option<TransportError>,
    create_error: Option<TransportError>,
    fetch_calls: AtomicUsize,
    create_calls: AtomicUsize,
    hold_create: bool,
    created: Notify,
    released: Notify,
}

impl FakeExpenseStore {
    pub(crate) fn with_expenses(expenses: Vec<Expense>) -> Self {
        Self {
            expenses: Mutex::new(expenses),
            ..Default::default()
        }
    }

    pub(crate) fn failing_fetch(error: TransportError) -> Self {
        Self {
            fetch_error: Some(error),
            ..Default::default()
        }
    }

    pub(crate) fn failing_create(error: TransportError) -> Self {
        Self {
            create_error: Some(error),
            ..Default::default()
        }
    }

    /// A store whose `create` persists the expense and then waits for
    /// [FakeExpenseStore::release_create] before responding.
    pub(crate) fn holding_create() -> Self {
        Self {
            hold_create: true,
            ..Default::default()
        }
    }

    /// Wait until a held `create` has persisted its expense.
    pub(crate) async fn wait_for_create(&self) {
        self.created.notified().await;
    }

    /// Let a held `create` respond.
    pub(crate) fn release_create(&self) {
        self.released.notify_one();
    }

    pub(crate) fn fetch_count(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn create_count(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ExpenseStore for FakeExpenseStore {
    async fn fetch_all(&self) -> Result<Vec<Expense>, TransportError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);

        match &self.fetch_error {
            Some(error) => Err(error.clone()),
            None => Ok(self.expenses.lock().unwrap().clone()),
        }
    }

    async fn create(&self, expense: &NewExpense) -> Result<Expense, TransportError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = &self.create_error {
            return Err(error.clone());
        }

        let created = {
            let mut expenses = self.expenses.lock().unwrap();
            let id = ExpenseId::new((expenses.len() + 1).to_string());
            let created = expense.clone().into_expense(id);
            expenses.push(created.clone());
            created
        };

        if self.hold_create {
            self.created.notify_one();
            self.released.notified().await;
        }

        Ok(created)
    }
}

//! Implements a struct that holds the state of the web server.

use std::sync::{Arc, Mutex};

use crate::{Error, collection::ExpenseCollection, store::ExpenseStore, timezone::get_local_offset};

/// The state of the web server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The remote store that persists expenses.
    pub store: Arc<dyn ExpenseStore>,

    /// The server's copy of the expenses in the remote store.
    pub expenses: Arc<Mutex<ExpenseCollection>>,

    /// The local timezone as a canonical timezone name, e.g. "Asia/Kolkata".
    pub local_timezone: String,
}

impl AppState {
    /// Create a new [AppState] with an empty expense collection.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Asia/Kolkata".
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezone] if `local_timezone` is not a known timezone.
    pub fn new(store: Arc<dyn ExpenseStore>, local_timezone: &str) -> Result<Self, Error> {
        if get_local_offset(local_timezone).is_none() {
            return Err(Error::InvalidTimezone(local_timezone.to_owned()));
        }

        Ok(Self {
            store,
            expenses: Arc::new(Mutex::new(ExpenseCollection::default())),
            local_timezone: local_timezone.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::{AppState, Error, test_utils::FakeExpenseStore};

    #[test]
    fn starts_with_empty_collection() {
        let state = AppState::new(Arc::new(FakeExpenseStore::default()), "Asia/Kolkata").unwrap();

        assert!(state.expenses.lock().unwrap().is_empty());
    }

    #[test]
    fn rejects_unknown_timezone() {
        let result = AppState::new(Arc::new(FakeExpenseStore::default()), "Nowhere/Special");

        assert_eq!(
            result.map(|_| ()),
            Err(Error::InvalidTimezone("Nowhere/Special".to_owned()))
        );
    }
}

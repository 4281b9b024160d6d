//! Access to the remote store, the HTTP API that persists expenses.

mod http;
mod remote_api;

use std::fmt::Debug;

use async_trait::async_trait;
use axum::http::StatusCode;

use crate::expense::{Expense, NewExpense};

pub use http::HttpExpenseStore;
pub use remote_api::{MemoryStore, remote_store_router};

/// The path the remote store lists expenses on.
pub(crate) const EXPENSES_PATH: &str = "/api/expenses";
/// The path the remote store accepts new expenses on.
pub(crate) const ADD_EXPENSE_PATH: &str = "/api/expenses/add";

/// The ways a call to the remote store can fail.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum TransportError {
    /// The request could not be sent or no response was received.
    #[error("could not reach the remote store: {0}")]
    Unreachable(String),

    /// The remote store responded with a non-success status code.
    #[error("the remote store responded with status {0}")]
    Status(StatusCode),

    /// The response body could not be decoded.
    #[error("the remote store sent a malformed response: {0}")]
    MalformedBody(String),
}

/// A remote store that can list and create expenses.
///
/// Each call is a single attempt. Callers decide what to do on failure.
#[async_trait]
pub trait ExpenseStore: Debug + Send + Sync {
    /// Get every expense held by the store.
    async fn fetch_all(&self) -> Result<Vec<Expense>, TransportError>;

    /// Persist `expense` and return the canonical record, including its ID.
    async fn create(&self, expense: &NewExpense) -> Result<Expense, TransportError>;
}

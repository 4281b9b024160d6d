//! An [ExpenseStore] that talks JSON over HTTP.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::{
    expense::{Expense, NewExpense},
    store::{ADD_EXPENSE_PATH, EXPENSES_PATH, ExpenseStore, TransportError},
};

/// Client for a remote store served at `base_url`.
#[derive(Debug, Clone)]
pub struct HttpExpenseStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpExpenseStore {
    /// Create a client for the store at `base_url`, e.g. "http://localhost:5000".
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl ExpenseStore for HttpExpenseStore {
    async fn fetch_all(&self) -> Result<Vec<Expense>, TransportError> {
        let response = self
            .client
            .get(self.url(EXPENSES_PATH))
            .send()
            .await
            .map_err(|error| TransportError::Unreachable(error.to_string()))?;

        decode_response(response).await
    }

    async fn create(&self, expense: &NewExpense) -> Result<Expense, TransportError> {
        let response = self
            .client
            .post(self.url(ADD_EXPENSE_PATH))
            .json(expense)
            .send()
            .await
            .map_err(|error| TransportError::Unreachable(error.to_string()))?;

        decode_response(response).await
    }
}

async fn decode_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, TransportError> {
    let status = response.status();

    if !status.is_success() {
        return Err(TransportError::Status(status));
    }

    let body = response
        .bytes()
        .await
        .map_err(|error| TransportError::Unreachable(error.to_string()))?;

    serde_json::from_slice(&body).map_err(|error| TransportError::MalformedBody(error.to_string()))
}

//! An in-memory remote store for development and tests.

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};

use crate::{
    expense::{Expense, ExpenseId, NewExpense},
    store::{ADD_EXPENSE_PATH, EXPENSES_PATH},
};

#[derive(Debug, Default)]
struct Records {
    last_id: u64,
    expenses: Vec<Expense>,
}

/// Expenses held in memory, handed out IDs "1", "2", ... in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Arc<Mutex<Records>>,
}

impl MemoryStore {
    /// Create a store that already holds `expenses`.
    pub fn with_expenses(expenses: impl IntoIterator<Item = NewExpense>) -> Self {
        let mut records = Records::default();

        for expense in expenses {
            records.insert(expense);
        }

        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }
}

impl Records {
    fn insert(&mut self, expense: NewExpense) -> Expense {
        self.last_id += 1;
        let expense = expense.into_expense(ExpenseId::new(self.last_id.to_string()));
        self.expenses.push(expense.clone());

        expense
    }
}

/// Serve the remote store API from `store`.
///
/// - `GET /api/expenses` lists every expense.
/// - `POST /api/expenses/add` stores a new expense and responds with it.
pub fn remote_store_router(store: MemoryStore) -> Router {
    Router::new()
        .route(EXPENSES_PATH, get(list_expenses))
        .route(ADD_EXPENSE_PATH, post(add_expense))
        .with_state(store)
}

async fn list_expenses(State(store): State<MemoryStore>) -> Response {
    match store.records.lock() {
        Ok(records) => Json(records.expenses.clone()).into_response(),
        Err(error) => {
            tracing::error!("could not acquire the expense store lock: {error}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn add_expense(
    State(store): State<MemoryStore>,
    Json(new_expense): Json<NewExpense>,
) -> Response {
    if !new_expense.amount.is_finite() || new_expense.amount < 0.0 {
        tracing::warn!("rejected expense with amount {}", new_expense.amount);
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    }

    match store.records.lock() {
        Ok(mut records) => {
            let expense = records.insert(new_expense);
            tracing::info!("stored expense {:?}", expense.id);
            (StatusCode::CREATED, Json(expense)).into_response()
        }
        Err(error) => {
            tracing::error!("could not acquire the expense store lock: {error}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;
    use time::macros::date;

    use crate::{
        expense::{Category, Expense, ExpenseId, NewExpense, PaymentMode},
        store::{MemoryStore, remote_store_router},
    };

    fn rent() -> NewExpense {
        NewExpense {
            amount: 1000.0,
            category: Category::Rental,
            date: date!(2024 - 01 - 01),
            payment_mode: PaymentMode::NetBanking,
            notes: String::new(),
        }
    }

    #[tokio::test]
    async fn assigns_sequential_ids() {
        let server = TestServer::try_new(remote_store_router(MemoryStore::with_expenses([rent()])))
            .expect("Could not create test server.");

        let response = server.post("/api/expenses/add").json(&rent()).await;
        response.assert_status(StatusCode::CREATED);
        let created: Expense = response.json();

        assert_eq!(created.id, Some(ExpenseId::new("2")));
        assert_eq!(created.notes, None);

        let listed: Vec<Expense> = server.get("/api/expenses").await.json();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[1], created);
    }

    #[tokio::test]
    async fn rejects_negative_amounts() {
        let server = TestServer::try_new(remote_store_router(MemoryStore::default()))
            .expect("Could not create test server.");

        let response = server
            .post("/api/expenses/add")
            .json(&json!({
                "amount": -5,
                "category": "Others",
                "date": "2024-01-01",
                "paymentMode": "Cash"
            }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let listed: Vec<Expense> = server.get("/api/expenses").await.json();
        assert!(listed.is_empty());
    }
}

//! Expenses: the record type, the entry form and the filtered expense list.

mod core;
mod create_endpoint;
mod create_page;
mod filter;
mod form;
mod list_page;
mod view;

pub use core::{Category, Expense, ExpenseId, NewExpense, PaymentMode};
pub use create_endpoint::create_expense_endpoint;
pub use create_page::get_new_expense_page;
pub use filter::{DateRange, ExpenseSummary, FilterCriteria, FilterQuery};
pub use form::{ExpenseForm, ValidationError};
pub use list_page::{get_expense_list_partial, get_expenses_page};
pub use view::category_badge;

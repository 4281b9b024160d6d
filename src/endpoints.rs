//! The endpoint URIs served by the app.

/// The root route which redirects to the page for adding an expense.
pub const ROOT: &str = "/";
/// The page for adding a new expense.
pub const NEW_EXPENSE_VIEW: &str = "/expenses/new";
/// The page for browsing and filtering expenses.
pub const EXPENSES_VIEW: &str = "/expenses";
/// The filtered expense list, requested by the filter controls on [EXPENSES_VIEW].
pub const EXPENSES_LIST: &str = "/expenses/list";
/// The page with monthly spending by category.
pub const ANALYTICS_VIEW: &str = "/analytics";
/// The route the expense form is submitted to.
pub const EXPENSES_API: &str = "/api/expenses";
/// The page to display when an unexpected error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

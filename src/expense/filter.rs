//! Narrowing and ordering the expense collection for the expense list.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use time::{Date, Duration};

use crate::expense::core::{Category, Expense, PaymentMode};

/// How far back the expense list should look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DateRange {
    #[serde(rename = "thisMonth")]
    ThisMonth,
    #[serde(rename = "last30")]
    Last30Days,
    #[serde(rename = "last90")]
    Last90Days,
    #[default]
    #[serde(rename = "all")]
    AllTime,
}

impl DateRange {
    /// Every date range, in display order.
    pub const ALL: [DateRange; 4] = [
        DateRange::ThisMonth,
        DateRange::Last30Days,
        DateRange::Last90Days,
        DateRange::AllTime,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DateRange::ThisMonth => "This Month",
            DateRange::Last30Days => "Last 30 Days",
            DateRange::Last90Days => "Last 90 Days",
            DateRange::AllTime => "All Time",
        }
    }

    pub fn as_query_value(self) -> &'static str {
        match self {
            DateRange::ThisMonth => "thisMonth",
            DateRange::Last30Days => "last30",
            DateRange::Last90Days => "last90",
            DateRange::AllTime => "all",
        }
    }

    /// The earliest date included in the range, or `None` if the range is unbounded.
    pub fn cutoff(self, today: Date) -> Option<Date> {
        match self {
            DateRange::ThisMonth => Some(today - Duration::days(i64::from(today.day()) - 1)),
            DateRange::Last30Days => Some(today - Duration::days(30)),
            DateRange::Last90Days => Some(today - Duration::days(90)),
            DateRange::AllTime => None,
        }
    }
}

/// The query parameters sent by the filter controls.
///
/// Categories and payment modes may be repeated, e.g.
/// `?range=last30&category=Rental&category=Travel`.
#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    #[serde(default)]
    pub range: Option<DateRange>,
    #[serde(default)]
    pub category: Vec<Category>,
    #[serde(default)]
    pub payment_mode: Vec<PaymentMode>,
}

/// The constraints the user selected for the expense list.
///
/// An empty set of categories or payment modes places no restriction on that field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub date_range: DateRange,
    pub categories: BTreeSet<Category>,
    pub payment_modes: BTreeSet<PaymentMode>,
}

impl From<FilterQuery> for FilterCriteria {
    fn from(query: FilterQuery) -> Self {
        Self {
            date_range: query.range.unwrap_or_default(),
            categories: query.category.into_iter().collect(),
            payment_modes: query.payment_mode.into_iter().collect(),
        }
    }
}

impl FilterCriteria {
    /// Whether `expense` satisfies every active constraint.
    pub fn matches(&self, expense: &Expense, cutoff: Option<Date>) -> bool {
        if let Some(cutoff) = cutoff
            && expense.date < cutoff
        {
            return false;
        }

        if !self.categories.is_empty() && !self.categories.contains(&expense.category) {
            return false;
        }

        self.payment_modes.is_empty() || self.payment_modes.contains(&expense.payment_mode)
    }
}

/// Select the expenses that match `criteria`, most recent first.
///
/// Expenses on the same date keep their relative order from `expenses`.
pub fn filter_expenses(expenses: &[Expense], criteria: &FilterCriteria, today: Date) -> Vec<Expense> {
    let cutoff = criteria.date_range.cutoff(today);

    let mut filtered: Vec<Expense> = expenses
        .iter()
        .filter(|expense| criteria.matches(expense, cutoff))
        .cloned()
        .collect();

    // `sort_by` is stable, so ties keep collection order.
    filtered.sort_by(|a, b| b.date.cmp(&a.date));

    filtered
}

/// The count and total amount of a set of expenses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpenseSummary {
    pub count: usize,
    pub total: f64,
}

impl ExpenseSummary {
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        Self {
            count: expenses.len(),
            total: expenses.iter().map(|expense| expense.amount).sum(),
        }
    }
}

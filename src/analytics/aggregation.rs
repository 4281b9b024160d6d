//! Grouping expenses by month and category for the analytics page.

use std::{collections::BTreeMap, fmt::Display};

use time::Date;

use crate::expense::{Category, Expense};

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A calendar month, displayed as "YYYY-MM".
///
/// Keys order chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u8,
}

impl MonthKey {
    pub fn from_date(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month() as u8,
        }
    }

    /// A short label for charts and tables, e.g. "Jan 2024".
    pub fn label(self) -> String {
        let index = usize::from(self.month.saturating_sub(1)).min(11);

        format!("{} {}", MONTH_ABBREVIATIONS[index], self.year)
    }
}

impl Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// The amount spent on each category during one month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyCategoryTotals {
    pub month: MonthKey,
    /// One sum per category, in the order of [Category::ALL].
    pub totals: [f64; 5],
}

impl MonthlyCategoryTotals {
    pub fn label(&self) -> String {
        self.month.label()
    }

    pub fn category_total(&self, category: Category) -> f64 {
        self.totals[category.index()]
    }

    /// The amount spent across every category.
    pub fn total(&self) -> f64 {
        self.totals.iter().sum()
    }
}

/// Sum the amounts of `expenses` by month and category.
///
/// Rows are ordered from the earliest month to the latest. Months without
/// any expenses are not included.
pub fn monthly_category_totals(expenses: &[Expense]) -> Vec<MonthlyCategoryTotals> {
    let mut totals_by_month: BTreeMap<MonthKey, [f64; 5]> = BTreeMap::new();

    for expense in expenses {
        let totals = totals_by_month
            .entry(MonthKey::from_date(expense.date))
            .or_insert([0.0; 5]);
        totals[expense.category.index()] += expense.amount;
    }

    totals_by_month
        .into_iter()
        .map(|(month, totals)| MonthlyCategoryTotals { month, totals })
        .collect()
}

/// The amount spent on each category over every row, in the order of [Category::ALL].
pub fn category_totals(rows: &[MonthlyCategoryTotals]) -> [f64; 5] {
    let mut totals = [0.0; 5];

    for row in rows {
        for (total, amount) in totals.iter_mut().zip(row.totals) {
            *total += amount;
        }
    }

    totals
}

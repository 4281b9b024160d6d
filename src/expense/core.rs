//! Defines the expense record and the closed sets of categories and payment modes.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::expense::form::ValidationError;

// ============================================================================
// MODELS
// ============================================================================

/// The opaque identifier the remote store assigns to an expense.
///
/// Stores disagree on whether IDs are strings or numbers, so both are
/// accepted and kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ExpenseId(String);

impl ExpenseId {
    /// Wrap an identifier issued by the remote store.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl AsRef<str> for ExpenseId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for ExpenseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for ExpenseId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Integer(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => Self(text),
            RawId::Integer(number) => Self(number.to_string()),
        })
    }
}

/// What an expense was spent on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Rental,
    Groceries,
    Entertainment,
    Travel,
    Others,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 5] = [
        Category::Rental,
        Category::Groceries,
        Category::Entertainment,
        Category::Travel,
        Category::Others,
    ];

    /// The name shown to users, which is also the name used on the wire.
    pub fn label(self) -> &'static str {
        match self {
            Category::Rental => "Rental",
            Category::Groceries => "Groceries",
            Category::Entertainment => "Entertainment",
            Category::Travel => "Travel",
            Category::Others => "Others",
        }
    }

    /// The position of the category in [Category::ALL].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.label() == s)
            .ok_or_else(|| ValidationError::UnknownCategory(s.to_owned()))
    }
}

/// How an expense was paid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PaymentMode {
    #[serde(rename = "UPI")]
    Upi,
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "Net Banking")]
    NetBanking,
    Cash,
}

impl PaymentMode {
    /// Every payment mode, in display order.
    pub const ALL: [PaymentMode; 4] = [
        PaymentMode::Upi,
        PaymentMode::CreditCard,
        PaymentMode::NetBanking,
        PaymentMode::Cash,
    ];

    /// The name shown to users, which is also the name used on the wire.
    pub fn label(self) -> &'static str {
        match self {
            PaymentMode::Upi => "UPI",
            PaymentMode::CreditCard => "Credit Card",
            PaymentMode::NetBanking => "Net Banking",
            PaymentMode::Cash => "Cash",
        }
    }
}

impl Display for PaymentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaymentMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentMode::ALL
            .into_iter()
            .find(|mode| mode.label() == s)
            .ok_or_else(|| ValidationError::UnknownPaymentMode(s.to_owned()))
    }
}

/// A single expense as stored by the remote store.
///
/// Expenses are never edited once created, the only way to get one is from
/// the remote store, either by fetching the collection or as the response to
/// creating a [NewExpense].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// The ID assigned by the remote store.
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ExpenseId>,
    /// How much was spent. Never negative.
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount: f64,
    /// What the money was spent on.
    pub category: Category,
    /// The day the money was spent.
    #[serde(with = "iso_date")]
    pub date: Date,
    /// How the expense was paid for.
    pub payment_mode: PaymentMode,
    /// Free text describing the expense.
    #[serde(default, deserialize_with = "deserialize_notes")]
    pub notes: Option<String>,
}

/// A validated expense that has not been sent to the remote store yet.
///
/// Create one by validating an [crate::expense::ExpenseForm].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub amount: f64,
    pub category: Category,
    #[serde(with = "iso_date")]
    pub date: Date,
    pub payment_mode: PaymentMode,
    #[serde(default)]
    pub notes: String,
}

impl NewExpense {
    /// The canonical record a store would produce after assigning `id`.
    pub fn into_expense(self, id: ExpenseId) -> Expense {
        let notes = if self.notes.trim().is_empty() {
            None
        } else {
            Some(self.notes)
        };

        Expense {
            id: Some(id),
            amount: self.amount,
            category: self.category,
            date: self.date,
            payment_mode: self.payment_mode,
            notes,
        }
    }
}

fn deserialize_amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let amount = f64::deserialize(deserializer)?;

    if amount.is_finite() && amount >= 0.0 {
        Ok(amount)
    } else {
        Err(serde::de::Error::custom(format!(
            "expected a non-negative amount, got {amount}"
        )))
    }
}

fn deserialize_notes<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let notes = Option::<String>::deserialize(deserializer)?;

    Ok(notes.filter(|text| !text.trim().is_empty()))
}

/// The wire format for dates, e.g. "2024-01-31".
pub(crate) const DATE_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day]");

/// Parse a date sent by a browser or the remote store.
///
/// Full timestamps such as "2024-01-15T00:00:00.000Z" keep only their
/// calendar date.
pub(crate) fn parse_date(text: &str) -> Result<Date, time::error::Parse> {
    let text = text.trim();
    let date_part = text.split_once('T').map_or(text, |(date, _)| date);

    Date::parse(date_part, DATE_FORMAT)
}

mod iso_date {
    use serde::{Deserialize, Deserializer, Serializer, de, ser};
    use time::Date;

    use super::{DATE_FORMAT, parse_date};

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        let text = date.format(DATE_FORMAT).map_err(ser::Error::custom)?;
        serializer.serialize_str(&text)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_date(&text).map_err(de::Error::custom)
    }
}

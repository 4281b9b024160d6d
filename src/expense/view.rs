//! HTML rendering for the expense list.

use maud::{Markup, html};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    endpoints,
    expense::{
        core::{Category, Expense, PaymentMode},
        filter::{DateRange, ExpenseSummary, FilterCriteria},
    },
    html::{
        BADGE_BLUE_STYLE, BADGE_GRAY_STYLE, BADGE_GREEN_STYLE, BADGE_ORANGE_STYLE,
        BADGE_PINK_STYLE, BADGE_PURPLE_STYLE, BADGE_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        format_currency,
    },
};

/// The max number of graphemes to display in the notes column before
/// truncating and displaying ellipses.
const MAX_NOTES_GRAPHEMES: usize = 40;

const DISPLAY_DATE_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[day padding:zero] [month repr:short] [year]");

const CHECKBOX_STYLE: &str = "rounded-sm border-gray-300 text-blue-600 shadow-xs \
    focus:border-blue-300 focus:ring-3 focus:ring-blue-200/50";

fn category_colour_style(category: Category) -> &'static str {
    match category {
        Category::Rental => BADGE_PURPLE_STYLE,
        Category::Groceries => BADGE_GREEN_STYLE,
        Category::Entertainment => BADGE_PINK_STYLE,
        Category::Travel => BADGE_BLUE_STYLE,
        Category::Others => BADGE_GRAY_STYLE,
    }
}

/// A pill showing `category` in its own colour.
pub fn category_badge(category: Category) -> Markup {
    html! {
        span class={(BADGE_STYLE) " " (category_colour_style(category))} { (category) }
    }
}

/// A pill showing `payment_mode`.
pub fn payment_mode_badge(payment_mode: PaymentMode) -> Markup {
    html! {
        span class={(BADGE_STYLE) " " (BADGE_ORANGE_STYLE)} { (payment_mode) }
    }
}

fn format_display_date(date: Date) -> String {
    date.format(DISPLAY_DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

fn format_notes(notes: &str) -> (String, Option<&str>) {
    let notes_length = notes.graphemes(true).count();

    if notes_length <= MAX_NOTES_GRAPHEMES {
        (notes.to_owned(), None)
    } else {
        let truncated: String = notes.graphemes(true).take(MAX_NOTES_GRAPHEMES - 3).collect();
        (truncated + "...", Some(notes))
    }
}

/// The controls that narrow down the expense list.
///
/// Any change requests [endpoints::EXPENSES_LIST] with the form's contents
/// as the query string and swaps the result into `#expense-list`.
pub(super) fn filter_form_view(criteria: &FilterCriteria) -> Markup {
    html! {
        form
            id="expense-filters"
            hx-get=(endpoints::EXPENSES_LIST)
            hx-trigger="change"
            hx-target="#expense-list"
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            class="w-full mb-6 p-4 rounded-lg bg-white dark:bg-gray-800 shadow space-y-4"
        {
            div
            {
                label for="range" class=(FORM_LABEL_STYLE) { "Date Range" }

                select name="range" id="range" class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for range in DateRange::ALL {
                        option
                            value=(range.as_query_value())
                            selected[range == criteria.date_range]
                        {
                            (range.label())
                        }
                    }
                }
            }

            fieldset
            {
                legend class=(FORM_LABEL_STYLE) { "Categories" }

                div class="flex flex-wrap gap-3"
                {
                    @for category in Category::ALL {
                        label class="flex items-center space-x-2"
                        {
                            input
                                type="checkbox"
                                name="category"
                                value=(category.label())
                                checked[criteria.categories.contains(&category)]
                                class=(CHECKBOX_STYLE);

                            (category_badge(category))
                        }
                    }
                }
            }

            fieldset
            {
                legend class=(FORM_LABEL_STYLE) { "Payment Modes" }

                div class="flex flex-wrap gap-3"
                {
                    @for mode in PaymentMode::ALL {
                        label class="flex items-center space-x-2"
                        {
                            input
                                type="checkbox"
                                name="payment_mode"
                                value=(mode.label())
                                checked[criteria.payment_modes.contains(&mode)]
                                class=(CHECKBOX_STYLE);

                            (payment_mode_badge(mode))
                        }
                    }
                }
            }
        }
    }
}

/// The filtered expenses with their count and total.
pub(super) fn expense_list_view(expenses: &[Expense], summary: ExpenseSummary) -> Markup {
    html! {
        section id="expense-list" class="w-full"
        {
            div class="flex flex-wrap justify-between items-baseline gap-2 mb-4"
            {
                h3 class="text-lg font-semibold" { "Total Expenses: " (summary.count) }
                p class="text-lg font-semibold" { "Total Amount: " (format_currency(summary.total)) }
            }

            @if expenses.is_empty() {
                p class="py-8 text-center text-gray-500 dark:text-gray-400"
                {
                    "No expenses found matching your filters."
                }
            } @else {
                div class="overflow-x-auto rounded-lg shadow"
                {
                    table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Payment Mode" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Notes" }
                            }
                        }

                        tbody
                        {
                            @for expense in expenses {
                                (expense_row(expense))
                            }
                        }
                    }
                }
            }
        }
    }
}

fn expense_row(expense: &Expense) -> Markup {
    let (notes, full_notes) = expense
        .notes
        .as_deref()
        .map(format_notes)
        .unwrap_or_default();

    html! {
        tr class=(TABLE_ROW_STYLE)
        {
            td class={(TABLE_CELL_STYLE) " whitespace-nowrap"}
            {
                time datetime=(expense.date) { (format_display_date(expense.date)) }
            }
            td class={(TABLE_CELL_STYLE) " font-semibold text-gray-900 dark:text-white"}
            {
                (format_currency(expense.amount))
            }
            td class=(TABLE_CELL_STYLE) { (category_badge(expense.category)) }
            td class=(TABLE_CELL_STYLE) { (payment_mode_badge(expense.payment_mode)) }
            td class=(TABLE_CELL_STYLE) title=[full_notes] { (notes) }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::{
        expense::{
            Category, Expense, ExpenseId, ExpenseSummary, FilterCriteria, PaymentMode,
            view::{category_badge, expense_list_view, filter_form_view, format_notes},
        },
        test_utils::assert_valid_html,
    };

    fn expense(notes: Option<&str>) -> Expense {
        Expense {
            id: Some(ExpenseId::new("1")),
            amount: 1200.0,
            category: Category::Rental,
            date: date!(2024 - 01 - 05),
            payment_mode: PaymentMode::NetBanking,
            notes: notes.map(str::to_owned),
        }
    }

    #[test]
    fn empty_list_shows_message() {
        let summary = ExpenseSummary::from_expenses(&[]);

        let html = Html::parse_fragment(&expense_list_view(&[], summary).into_string());

        assert_valid_html(&html);
        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("No expenses found matching your filters."));
        assert!(text.contains("Total Expenses: 0"));
        assert!(html.select(&Selector::parse("table").unwrap()).next().is_none());
    }

    #[test]
    fn rows_show_each_field() {
        let expenses = vec![expense(Some("January rent"))];
        let summary = ExpenseSummary::from_expenses(&expenses);

        let html = Html::parse_fragment(&expense_list_view(&expenses, summary).into_string());

        assert_valid_html(&html);
        let cells = html
            .select(&Selector::parse("tbody td").unwrap())
            .map(|cell| cell.text().collect::<String>().trim().to_owned())
            .collect::<Vec<_>>();
        assert_eq!(
            cells,
            vec!["05 Jan 2024", "₹1,200.00", "Rental", "Net Banking", "January rent"]
        );
    }

    #[test]
    fn long_notes_are_truncated() {
        let notes = "é".repeat(50);

        let (truncated, full) = format_notes(&notes);

        assert_eq!(truncated, format!("{}...", "é".repeat(37)));
        assert_eq!(full, Some(notes.as_str()));
        assert_eq!(format_notes("short"), ("short".to_owned(), None));
    }

    #[test]
    fn categories_have_distinct_colours() {
        let classes = Category::ALL
            .into_iter()
            .map(|category| category_badge(category).into_string())
            .collect::<BTreeSet<_>>();

        assert_eq!(classes.len(), Category::ALL.len());
    }

    #[test]
    fn filter_form_reflects_criteria() {
        let criteria = FilterCriteria {
            categories: BTreeSet::from([Category::Travel]),
            payment_modes: BTreeSet::from([PaymentMode::Cash, PaymentMode::Upi]),
            ..Default::default()
        };

        let html = Html::parse_fragment(&filter_form_view(&criteria).into_string());

        assert_valid_html(&html);
        let checked = html
            .select(&Selector::parse("input[checked]").unwrap())
            .map(|input| input.value().attr("value").unwrap_or_default().to_owned())
            .collect::<Vec<_>>();
        assert_eq!(checked, vec!["Travel", "UPI", "Cash"]);

        let range = html
            .select(&Selector::parse("select[name=range] option[selected]").unwrap())
            .next()
            .expect("no selected range");
        assert_eq!(range.value().attr("value"), Some("all"));
    }
}

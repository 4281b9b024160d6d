//! The monthly totals table shown under the analytics chart.

use maud::{Markup, html};

use crate::{
    analytics::aggregation::{MonthlyCategoryTotals, category_totals},
    expense::{Category, category_badge},
    html::{TABLE_CELL_STYLE, TABLE_ROW_STYLE, format_currency},
};

const TABLE_HEADER_CELL_STYLE: &str = "px-3 py-3 text-center min-w-[100px]";
const TABLE_HEADER_FIRST_CELL_STYLE: &str =
    "px-3 py-3 sticky left-0 bg-gray-100 dark:bg-gray-700 z-10 font-semibold text-left";
const TABLE_STICKY_CELL_STYLE: &str = "px-3 py-4 font-medium text-gray-900 dark:text-white \
    sticky left-0 bg-white dark:bg-gray-800 z-10 text-left whitespace-nowrap";
const TABLE_DATA_CELL_STYLE: &str = "text-center whitespace-nowrap";

/// A row per month with a column per category, followed by a total row.
pub(super) fn monthly_totals_table(rows: &[MonthlyCategoryTotals]) -> Markup {
    let totals = category_totals(rows);
    let grand_total: f64 = totals.iter().sum();

    html! {
        div id="monthly-totals" class="w-full"
        {
            h3 class="text-xl font-semibold mb-4" { "Monthly Totals" }

            div class="overflow-x-auto rounded-lg shadow"
            {
                table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                {
                    thead class="text-xs text-gray-900 uppercase bg-gray-100 dark:bg-gray-700 dark:text-gray-400"
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_HEADER_FIRST_CELL_STYLE) { "Month" }

                            @for category in Category::ALL {
                                th scope="col" class=(TABLE_HEADER_CELL_STYLE)
                                {
                                    (category_badge(category))
                                }
                            }

                            th scope="col" class={(TABLE_HEADER_CELL_STYLE) " font-bold"} { "Total" }
                        }
                    }

                    tbody
                    {
                        @for row in rows {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                th scope="row" class=(TABLE_STICKY_CELL_STYLE)
                                {
                                    time datetime=(row.month) { (row.label()) }
                                }

                                @for total in row.totals {
                                    td class={(TABLE_CELL_STYLE) " " (TABLE_DATA_CELL_STYLE)}
                                    {
                                        (format_currency(total))
                                    }
                                }

                                td class={(TABLE_CELL_STYLE) " " (TABLE_DATA_CELL_STYLE) " font-bold"}
                                {
                                    (format_currency(row.total()))
                                }
                            }
                        }

                        tr class={(TABLE_ROW_STYLE) " font-bold"}
                        {
                            th scope="row" class=(TABLE_STICKY_CELL_STYLE) { "Total" }

                            @for total in totals {
                                td class={(TABLE_CELL_STYLE) " " (TABLE_DATA_CELL_STYLE)}
                                {
                                    (format_currency(total))
                                }
                            }

                            td class={(TABLE_CELL_STYLE) " " (TABLE_DATA_CELL_STYLE)}
                            {
                                (format_currency(grand_total))
                            }
                        }
                    }
                }
            }
        }
    }
}

//! The monthly expenses chart.
//!
//! The chart is built as an ECharts configuration and initialized in the
//! browser by [chart_script].

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, Emphasis, EmphasisFocus, ItemStyle,
        JsFunction, Tooltip, Trigger,
    },
    series::bar,
};
use maud::PreEscaped;

use crate::{
    analytics::aggregation::MonthlyCategoryTotals, expense::Category, html::HeadElement,
};

/// The ID of the element the chart is drawn in.
pub(super) const CHART_ID: &str = "monthly-expenses-chart";

/// The colour used for `category` in the chart.
pub(super) fn category_colour(category: Category) -> &'static str {
    match category {
        Category::Rental => "#8b5cf6",
        Category::Groceries => "#10b981",
        Category::Entertainment => "#f59e0b",
        Category::Travel => "#3b82f6",
        Category::Others => "#6b7280",
    }
}

/// A bar per month with one stacked segment per category.
pub(super) fn monthly_expenses_chart(rows: &[MonthlyCategoryTotals]) -> Chart {
    let labels = rows.iter().map(MonthlyCategoryTotals::label).collect::<Vec<_>>();

    let mut chart = Chart::new()
        .title(
            Title::new()
                .text("Monthly Expenses")
                .subtext("Grouped by category")
                .left(20)
                .top("1%"),
        )
        .tooltip(currency_tooltip())
        .legend(Legend::new().left(250).top("1%"))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .top(90)
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        );

    for category in Category::ALL {
        // Empty segments are left out so the tooltip only lists what was spent.
        let data = rows
            .iter()
            .map(|row| {
                let total = row.category_total(category);
                (total > 0.0).then_some(total)
            })
            .collect::<Vec<_>>();

        chart = chart.series(
            bar::Bar::new()
                .name(category.label())
                .stack("Expenses")
                .emphasis(Emphasis::new().focus(EmphasisFocus::Series))
                .item_style(ItemStyle::new().color(category_colour(category)))
                .data(data),
        );
    }

    chart
}

/// JavaScript that draws `chart` in the element with the ID [CHART_ID].
///
/// The chart follows the system colour scheme and resizes with the window.
pub(super) fn chart_script(chart: &Chart) -> HeadElement {
    let script = format!(
        r#"document.addEventListener('DOMContentLoaded', function() {{
            const chartDom = document.getElementById("{CHART_ID}");
            if (!chartDom) {{
                return;
            }}
            const chart = echarts.init(chartDom);
            const option = {chart};
            chart.setOption(option);

            window.addEventListener('resize', chart.resize);

            const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
            const updateTheme = () => {{
                const isDarkMode = darkModeMediaQuery.matches;
                chart.setTheme(isDarkMode ? 'dark' : 'default');
            }}
            darkModeMediaQuery.addEventListener('change', updateTheme);
            updateTheme();
        }});"#
    );

    HeadElement::ScriptSource(PreEscaped(script))
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-IN', {
              style: 'currency',
              currency: 'INR'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}

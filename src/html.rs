//! Shared page layout, style constants and formatting helpers for the HTML views.

use std::sync::OnceLock;

use axum::http::StatusCode;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use numfmt::{Formatter, Precision};

use crate::endpoints;

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "w-full px-4 py-2 bg-blue-500
    dark:bg-blue-600 disabled:bg-blue-700 hover:enabled:bg-blue-600 \
    hover:enabled:dark:bg-blue-700 text-white rounded";

// Form styles
pub const FORM_CONTAINER_STYLE: &str = "flex flex-col items-center px-6 py-8 \
    mx-auto lg:py-0 max-w-md text-gray-900 dark:text-white";
pub const FORM_LABEL_STYLE: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";
pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full p-2.5 rounded text-sm \
    text-gray-900 dark:text-white disabled:text-gray-500 bg-gray-50 \
    dark:bg-gray-700 border border-gray-300 dark:border-gray-600 \
    dark:placeholder-gray-400 focus:ring-blue-600 focus:border-blue-600 \
    focus:dark:border-blue-500 focus:dark:ring-blue-500";

// Table styles
pub const TABLE_HEADER_STYLE: &str = "text-xs text-gray-700 uppercase \
    bg-gray-50 dark:bg-gray-700 dark:text-gray-400";

pub const TABLE_ROW_STYLE: &str = "bg-white border-b dark:bg-gray-800 dark:border-gray-700";

pub const TABLE_CELL_STYLE: &str = "px-6 py-4";

// Badge style, combine with one of the colour styles below.
pub const BADGE_STYLE: &str = "inline-flex items-center px-2.5 py-0.5 \
    text-xs font-semibold rounded-full";
pub const BADGE_PURPLE_STYLE: &str =
    "text-purple-800 bg-purple-100 dark:bg-purple-900 dark:text-purple-300";
pub const BADGE_GREEN_STYLE: &str =
    "text-green-800 bg-green-100 dark:bg-green-900 dark:text-green-300";
pub const BADGE_PINK_STYLE: &str = "text-pink-800 bg-pink-100 dark:bg-pink-900 dark:text-pink-300";
pub const BADGE_BLUE_STYLE: &str = "text-blue-800 bg-blue-100 dark:bg-blue-900 dark:text-blue-300";
pub const BADGE_GRAY_STYLE: &str = "text-gray-800 bg-gray-100 dark:bg-gray-700 dark:text-gray-300";
pub const BADGE_ORANGE_STYLE: &str =
    "text-orange-800 bg-orange-100 dark:bg-orange-900 dark:text-orange-300";

// Page container
pub const PAGE_CONTAINER_STYLE: &str =
    "flex flex-col items-center px-6 py-8 mx-auto lg:py-5 text-gray-900 dark:text-white";

const HTMX_URL: &str = "https://unpkg.com/htmx.org@2.0.8/dist/htmx.min.js";
const HTMX_RESPONSE_TARGETS_URL: &str =
    "https://unpkg.com/htmx-ext-response-targets@2.0.4/dist/response-targets.js";
const TAILWIND_URL: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

/// The URL of the ECharts library, only needed on pages with charts.
pub const ECHARTS_URL: &str = "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js";

/// Extra elements to add to the `<head>` of a page.
pub enum HeadElement {
    /// The file path or URL to a JavaScript script.
    ScriptLink(String),
    /// JavaScript source code.
    ScriptSource(PreEscaped<String>),
    /// CSS rules.
    Style(PreEscaped<String>),
}

const BASE_STYLES: &str = r#"
    .htmx-indicator {
        display: none;
    }

    .htmx-request .htmx-indicator,
    .htmx-request.htmx-indicator {
        display: inline;
    }

    /* Chart tooltips sit below the mobile navigation bar. */
    .echarts-tooltip {
        z-index: 30 !important;
    }
"#;

/// The page skeleton shared by every view.
///
/// Error responses from htmx requests, and out-of-band alerts, are swapped
/// into the `#alert-container` element at the bottom of the page.
pub fn base(title: &str, head_elements: &[HeadElement], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Expense Manager" }

                script src=(TAILWIND_URL) {}
                script src=(HTMX_URL) {}
                script src=(HTMX_RESPONSE_TARGETS_URL) {}
                script src="/static/app.js" defer {}
                style { (PreEscaped(BASE_STYLES)) }

                @for element in head_elements {
                    @match element {
                        HeadElement::ScriptLink(path) => script src=(path) {}
                        HeadElement::ScriptSource(source) => script { (source) }
                        HeadElement::Style(rules) => style { (rules) }
                    }
                }
            }

            body
                hx-ext="response-targets"
                class="min-h-screen bg-gray-50 dark:bg-gray-900 pb-24 lg:pb-0"
            {
                (content)

                div
                    id="alert-container"
                    class="fixed bottom-24 lg:bottom-4 left-1/2 -translate-x-1/2 z-50 w-full max-w-md px-4"
                {}
            }
        }
    }
}

/// A full page explaining an error with `status`, e.g. a 404 page.
///
/// `description` says what went wrong and `fix` what the user can do about it.
pub fn error_view(status: StatusCode, description: &str, fix: &str) -> Markup {
    let title = status.canonical_reason().unwrap_or("Error");

    let content = html! {
        main class="flex flex-col items-center px-4 py-16 mx-auto max-w-screen-sm text-center text-gray-900 dark:text-white"
        {
            p class="mb-4 text-7xl lg:text-9xl font-extrabold tracking-tight text-blue-600 dark:text-blue-500"
            {
                (status.as_u16())
            }

            h1 class="mb-4 text-3xl md:text-4xl font-bold tracking-tight" { (description) }

            p class="mb-6 text-lg md:text-xl text-gray-600 dark:text-gray-300" { (fix) }

            a
                href=(endpoints::NEW_EXPENSE_VIEW)
                class="inline-flex px-5 py-2.5 rounded text-sm font-medium text-white
                    bg-blue-600 hover:bg-blue-800 dark:focus:ring-blue-900"
            {
                "Back to Add Expense"
            }
        }
    };

    base(title, &[], &content)
}

pub fn loading_spinner() -> Markup {
    // Spinner SVG adapted from https://flowbite.com/docs/components/spinner/
    html! {
        svg
            aria-hidden="true"
            role="status"
            class="inline text-white w-4 h-4 me-2 mb-1 animate-spin"
            viewBox="0 0 100 101"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
        {
            path
                d="M100 50.5908C100 78.2051 77.6142 100.591 50 100.591C22.3858 100.591 0 78.2051 0 50.5908C0 22.9766 22.3858 0.59082 50 0.59082C77.6142 0.59082 100 22.9766 100 50.5908ZM9.08144 50.5908C9.08144 73.1895 27.4013 91.5094 50 91.5094C72.5987 91.5094 90.9186 73.1895 90.9186 50.5908C90.9186 27.9921 72.5987 9.67226 50 9.67226C27.4013 9.67226 9.08144 27.9921 9.08144 50.5908Z"
                fill="#E5E7EB" {}
            path
                d="M93.9676 39.0409C96.393 38.4038 97.8624 35.9116 97.0079 33.5539C95.2932 28.8227 92.871 24.3692 89.8167 20.348C85.8452 15.1192 80.8826 10.7238 75.2124 7.41289C69.5422 4.10194 63.2754 1.94025 56.7698 1.05124C51.7666 0.367541 46.6976 0.446843 41.7345 1.27873C39.2613 1.69328 37.813 4.19778 38.4501 6.62326C39.0873 9.04874 41.5694 10.4717 44.0505 10.1071C47.8511 9.54855 51.7191 9.52689 55.5402 10.0491C60.8642 10.7766 65.9928 12.5457 70.6331 15.2552C75.2735 17.9648 79.3347 21.5619 82.5849 25.841C84.9175 28.9121 86.7997 32.2913 88.1811 35.8758C89.083 38.2158 91.5421 39.6781 93.9676 39.0409Z"
                fill="currentColor" {}
        }
    }
}

/// Returns the CSS styles for adding a rupee sign prefix to number inputs.
pub fn rupee_input_styles() -> HeadElement {
    HeadElement::Style(PreEscaped(
        r#"
        .input-wrapper {
            position: relative;
            display: inline-block;
        }
        .input-wrapper input[type="number"] {
            padding-left: 1.6rem;
        }
        .input-wrapper::before {
            content: '₹';
            position: absolute;
            left: 0.6rem;
            top: 50%;
            transform: translateY(-50%);
            pointer-events: none;
        }
        "#
        .to_owned(),
    ))
}

/// A notice for pages that could not refresh their expenses from the remote store.
pub fn refresh_failed_notice() -> Markup {
    html! {
        div
            id="refresh-failed"
            role="status"
            class="w-full p-4 mb-4 text-sm rounded-lg text-yellow-800 bg-yellow-50
                dark:bg-gray-800 dark:text-yellow-300"
        {
            "Could not load the latest expenses. Showing the expenses loaded earlier."
        }
    }
}

/// An inline text link.
pub fn link(url: &str, text: &str) -> Markup {
    html! {
        a
            href=(url)
            class="text-blue-600 hover:text-blue-500 dark:text-blue-500 dark:hover:text-blue-400 underline"
        {
            (text)
        }
    }
}

/// Format `number` as rupees with two decimal places and Indian digit
/// grouping, e.g. "₹1,234.50" or "₹1,00,000.00".
pub fn format_currency(number: f64) -> String {
    static POSITIVE_FMT: OnceLock<Option<Formatter>> = OnceLock::new();
    static NEGATIVE_FMT: OnceLock<Option<Formatter>> = OnceLock::new();

    let build = |prefix: &str| {
        Formatter::currency(prefix)
            .inspect_err(|error| tracing::error!("could not build currency formatter: {error}"))
            .ok()
            .map(|formatter| formatter.precision(Precision::Decimals(2)))
    };

    // Zero is hardcoded as "0", so we must specify the formatted string for zero
    if number == 0.0 || !number.is_finite() {
        return "₹0.00".to_owned();
    }

    let formatted_string = if number < 0.0 {
        NEGATIVE_FMT
            .get_or_init(|| build("-₹"))
            .as_ref()
            .map(|formatter| formatter.fmt_string(number.abs()))
            .unwrap_or_else(|| format!("-₹{:.2}", number.abs()))
    } else {
        POSITIVE_FMT
            .get_or_init(|| build("₹"))
            .as_ref()
            .map(|formatter| formatter.fmt_string(number))
            .unwrap_or_else(|| format!("₹{number:.2}"))
    };

    pad_decimals(indian_grouping(&formatted_string))
}

/// Regroup the integer digits in lakhs and crores, e.g. "₹100,000.00"
/// becomes "₹1,00,000.00".
fn indian_grouping(text: &str) -> String {
    let digits_start = text
        .find(|c: char| c.is_ascii_digit())
        .unwrap_or(text.len());
    let (prefix, rest) = text.split_at(digits_start);
    let (integer, fraction) = match rest.find('.') {
        Some(point) => rest.split_at(point),
        None => (rest, ""),
    };

    let digits: Vec<char> = integer.chars().filter(char::is_ascii_digit).collect();
    // The last three digits form one group, the rest are grouped in pairs.
    let head_len = digits.len().saturating_sub(3);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 2);

    for (i, digit) in digits[..head_len].iter().enumerate() {
        if i > 0 && (head_len - i) % 2 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }

    if head_len > 0 {
        grouped.push(',');
    }
    grouped.extend(&digits[head_len..]);

    format!("{prefix}{grouped}{fraction}")
}

/// numfmt drops trailing zeros, e.g. "12.30" is rendered as "12.3" and
/// "12.00" as "12".
fn pad_decimals(mut text: String) -> String {
    match text.rfind('.') {
        None => text.push_str(".00"),
        Some(point) if text.len() - point == 2 => text.push('0'),
        Some(_) => {}
    }

    text
}

//! The navigation bar shown at the top of every page, and at the bottom on small screens.

use maud::{Markup, html};

use crate::endpoints;

/// The pages reachable from the navigation bar, in display order.
const PAGES: [(&str, &str); 3] = [
    (endpoints::NEW_EXPENSE_VIEW, "Add Expense"),
    (endpoints::EXPENSES_VIEW, "Expenses"),
    (endpoints::ANALYTICS_VIEW, "Analytics"),
];

const TOP_LINK_STYLE: &str = "px-3 py-2 rounded-md text-sm font-medium \
    text-gray-700 hover:bg-gray-100 hover:text-blue-700 \
    dark:text-gray-200 dark:hover:bg-gray-800 dark:hover:text-blue-400";
const TOP_LINK_CURRENT_STYLE: &str = "px-3 py-2 rounded-md text-sm font-semibold \
    text-blue-700 bg-blue-50 dark:text-blue-300 dark:bg-blue-900/30";

const BOTTOM_LINK_STYLE: &str = "flex w-full items-center justify-center rounded-lg \
    px-2 py-2 text-xs font-semibold text-gray-600 \
    hover:bg-blue-50/70 hover:text-blue-700 dark:text-gray-300 \
    dark:hover:bg-blue-900/20 dark:hover:text-blue-200";
const BOTTOM_LINK_CURRENT_STYLE: &str = "flex w-full items-center justify-center rounded-lg \
    px-2 py-2 text-xs font-semibold text-blue-700 bg-blue-50 shadow-sm \
    dark:bg-blue-900/30 dark:text-blue-200";

/// The navigation bar with the link for the current page highlighted.
pub struct NavBar<'a> {
    current_endpoint: &'a str,
}

impl<'a> NavBar<'a> {
    /// `current_endpoint` is the page being shown. It is highlighted if it
    /// is one of the pages in the navigation bar.
    pub fn new(current_endpoint: &'a str) -> Self {
        Self { current_endpoint }
    }

    fn is_current(&self, url: &str) -> bool {
        self.current_endpoint == url
    }

    pub fn into_html(self) -> Markup {
        html! {
            header class="bg-white border-b border-gray-200 dark:bg-gray-900 dark:border-gray-700"
            {
                nav
                    class="max-w-screen-xl mx-auto flex items-center justify-between p-4"
                    aria-label="Main"
                {
                    a
                        href=(endpoints::ROOT)
                        class="text-2xl font-semibold whitespace-nowrap dark:text-white"
                    {
                        "₹ Expense Manager"
                    }

                    ul class="hidden lg:flex items-center gap-2"
                    {
                        @for (url, title) in PAGES {
                            @let is_current = self.is_current(url);

                            li
                            {
                                a
                                    href=(url)
                                    class=(if is_current { TOP_LINK_CURRENT_STYLE } else { TOP_LINK_STYLE })
                                    aria-current=[is_current.then_some("page")]
                                {
                                    (title)
                                }
                            }
                        }
                    }
                }
            }

            nav
                class="fixed inset-x-0 bottom-0 z-40 px-4 pb-4 lg:hidden"
                aria-label="Main (mobile)"
            {
                ul
                    class="grid grid-cols-3 gap-2 p-3 rounded-xl border border-gray-200
                        bg-white/95 shadow-lg backdrop-blur
                        dark:border-gray-700 dark:bg-gray-900/95"
                {
                    @for (url, title) in PAGES {
                        @let is_current = self.is_current(url);

                        li class="min-w-0"
                        {
                            a
                                href=(url)
                                class=(if is_current { BOTTOM_LINK_CURRENT_STYLE } else { BOTTOM_LINK_STYLE })
                                aria-current=[is_current.then_some("page")]
                            {
                                span class="truncate" { (title) }
                            }
                        }
                    }
                }
            }
        }
    }
}

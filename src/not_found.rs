//! The page to display when a route does not exist.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::html::error_view;

/// A response for a page or resource that does not exist.
pub struct NotFoundError;

impl IntoResponse for NotFoundError {
    fn into_response(self) -> Response {
        let page = error_view(
            StatusCode::NOT_FOUND,
            "Page not found.",
            "The page may have moved. Use the links below to get back to your expenses.",
        );

        (StatusCode::NOT_FOUND, page).into_response()
    }
}

pub async fn get_404_not_found() -> Response {
    NotFoundError.into_response()
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use scraper::Selector;

    use crate::{
        not_found::get_404_not_found,
        test_utils::{assert_content_type, assert_valid_html, parse_html_document},
    };

    #[tokio::test]
    async fn renders_404_page() {
        let response = get_404_not_found().await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_content_type(&response, "text/html; charset=utf-8");
        let document = parse_html_document(response).await;
        assert_valid_html(&document);
        let code = document
            .select(&Selector::parse("main p").unwrap())
            .next()
            .expect("no status code")
            .text()
            .collect::<String>();
        assert_eq!(code.trim(), "404");
    }
}

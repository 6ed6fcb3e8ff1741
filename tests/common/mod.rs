//! Shared test infrastructure for the HTTP tests.
//!
//! The `test_app!` macro builds the same app `main` serves, backed by a
//! caller-supplied `web::Data<AppState>` so tests can inspect state afterwards.

#![allow(dead_code)]

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header;
use actix_web::test::{self, TestRequest};
use actix_web::web;
use regex::Regex;

use pitchdeck::state::{AppState, Deck};

// ============================================================================
// APP SETUP
// ============================================================================

macro_rules! test_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data($state.clone())
                .service(actix_files::Files::new("/static", "./static"))
                .configure(pitchdeck::handlers::configure)
                .default_service(actix_web::web::to(
                    pitchdeck::handlers::page_handlers::not_found,
                )),
        )
        .await
    };
}

/// State over the seeded example deck with `slide_count` slides.
pub fn seeded_state(slide_count: u32) -> web::Data<AppState> {
    web::Data::new(AppState::new(Deck::seeded(slide_count)))
}

/// State with no comments or guestbook entries.
pub fn empty_state(slide_count: u32) -> web::Data<AppState> {
    web::Data::new(AppState::new(Deck::empty(slide_count)))
}

// ============================================================================
// REQUESTS
// ============================================================================

/// A GET as htmx issues it.
pub fn htmx_get(path: &str) -> TestRequest {
    TestRequest::get().uri(path).insert_header(("HX-Request", "true"))
}

/// A URL-encoded form POST.
pub fn form_post(path: &str, fields: &[(&str, &str)]) -> TestRequest {
    let body = serde_urlencoded::to_string(fields).expect("encode form");
    TestRequest::post()
        .uri(path)
        .insert_header((
            header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        ))
        .set_payload(body)
}

pub async fn body_string<B: MessageBody>(resp: ServiceResponse<B>) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

// ============================================================================
// HTML HELPERS
// ============================================================================

/// Text of `<span id="pageNumber" ...>N</span>`.
pub fn page_number(html: &str) -> Option<u32> {
    let re = Regex::new(r#"<span id="pageNumber"[^>]*>(\d+)</span>"#).expect("regex");
    re.captures(html)
        .and_then(|cap| cap.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Slide number in the `Folie{N}.PNG` image reference.
pub fn image_slide(html: &str) -> Option<u32> {
    let re = Regex::new(r#"src="/static/png/Folie(\d+)\.PNG""#).expect("regex");
    re.captures(html)
        .and_then(|cap| cap.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Comment author names in page order.
pub fn comment_names(html: &str) -> Vec<String> {
    let re = Regex::new(r"<h3>([^<]*)</h3><div>").expect("regex");
    re.captures_iter(html)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

/// Value of the hidden `slide` field in the comment form.
pub fn hidden_slide(html: &str) -> Option<u32> {
    let re = Regex::new(r#"name="slide"\s+value="(\d+)""#).expect("regex");
    re.captures(html)
        .and_then(|cap| cap.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

// Askama template contexts, one file per area of the site.

use actix_web::{HttpRequest, HttpResponse};
use askama::Template;

use crate::errors::{AppError, html, render};

mod guestbook;
mod pages;
mod pitchdeck;

pub use self::guestbook::{GuestbookTemplate, NewGuestbookEntryTemplate};
pub use self::pages::{HomeTemplate, NotFoundTemplate, TeamTemplate};
pub use self::pitchdeck::{NewCommentTemplate, PitchdeckTemplate, SlideFragmentTemplate};

/// The base page: navigation bar plus a content area that htmx swaps into.
#[derive(Template)]
#[template(path = "layout.html")]
pub struct LayoutTemplate {
    pub title: String,
    pub active: String,
    pub content: String,
}

/// True when the request was issued by htmx and only wants the page body.
pub fn is_htmx(req: &HttpRequest) -> bool {
    req.headers().contains_key("HX-Request")
}

/// Render a page body. htmx requests get the body alone; plain browser
/// requests get it wrapped in the layout.
pub fn render_page(
    req: &HttpRequest,
    title: &str,
    active: &str,
    tmpl: impl Template,
) -> Result<HttpResponse, AppError> {
    let content = tmpl.render()?;
    if is_htmx(req) {
        return Ok(html(content));
    }
    render(LayoutTemplate {
        title: title.to_string(),
        active: active.to_string(),
        content,
    })
}

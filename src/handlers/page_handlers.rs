use actix_web::{HttpRequest, HttpResponse};
use askama::Template;

use crate::errors::{AppError, render};
use crate::templates_structs::{
    HomeTemplate, LayoutTemplate, NotFoundTemplate, TeamTemplate, render_page,
};

/// Base layout with the greeting already in the content area.
pub async fn root() -> Result<HttpResponse, AppError> {
    let content = HomeTemplate.render()?;
    render(LayoutTemplate {
        title: "Home".to_string(),
        active: "home".to_string(),
        content,
    })
}

pub async fn home(req: HttpRequest) -> Result<HttpResponse, AppError> {
    render_page(&req, "Home", "home", HomeTemplate)
}

pub async fn team(req: HttpRequest) -> Result<HttpResponse, AppError> {
    render_page(&req, "Team", "team", TeamTemplate)
}

/// Fallback for form endpoints hit with anything but POST.
pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed()
        .insert_header(("Allow", "POST"))
        .finish()
}

pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    let body = NotFoundTemplate {
        path: req.path().to_string(),
    }
    .render()?;
    Ok(HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(body))
}

use actix_web::{HttpResponse, ResponseError};
use askama::Template;
use std::fmt;

use crate::models::SlideOutOfRange;

#[derive(Debug)]
pub enum AppError {
    Template(askama::Error),
    Form(String),
    Slide(SlideOutOfRange),
    StatePoisoned,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Template(e) => write!(f, "Template error: {e}"),
            AppError::Form(e) => write!(f, "Invalid form: {e}"),
            AppError::Slide(e) => write!(f, "Invalid form: {e}"),
            AppError::StatePoisoned => write!(f, "Deck state unavailable"),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Form(_) | AppError::Slide(_) => {
                log::warn!("{self}");
                HttpResponse::BadRequest()
                    .content_type("text/plain; charset=utf-8")
                    .body(self.to_string())
            }
            AppError::Template(_) => {
                log::error!("{self}");
                HttpResponse::InternalServerError()
                    .content_type("text/plain; charset=utf-8")
                    .body(self.to_string())
            }
            AppError::StatePoisoned => {
                log::error!("{self}");
                HttpResponse::InternalServerError().body("Internal Server Error")
            }
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Template(e)
    }
}

impl From<SlideOutOfRange> for AppError {
    fn from(e: SlideOutOfRange) -> Self {
        AppError::Slide(e)
    }
}

/// Render a template into a `200 OK` HTML response.
pub fn render(tmpl: impl Template) -> Result<HttpResponse, AppError> {
    let body = tmpl.render()?;
    Ok(html(body))
}

pub fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

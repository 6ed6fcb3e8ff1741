use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;

use crate::errors::{AppError, render};
use crate::state::AppState;
use crate::templates_structs::{
    NewCommentTemplate, PitchdeckTemplate, SlideFragmentTemplate, render_page,
};

#[derive(Debug, Deserialize)]
pub struct CommentForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub comment: String,
    /// Slide the form was opened on. Older clients omit it and comment on
    /// whatever slide is current.
    #[serde(default)]
    pub slide: Option<u32>,
}

pub async fn pitchdeck(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let tmpl = PitchdeckTemplate::new(state.lock()?.view());
    render_page(&req, "Pitchdeck", "pitchdeck", tmpl)
}

pub async fn next_slide(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let view = state.lock()?.advance();
    render(SlideFragmentTemplate::new(view))
}

pub async fn previous_slide(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let view = state.lock()?.retreat();
    render(SlideFragmentTemplate::new(view))
}

pub async fn new_comment(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let tmpl = {
        let deck = state.lock()?;
        NewCommentTemplate {
            slide: deck.presentation().current(),
            slide_count: deck.presentation().slide_count(),
        }
    };
    render_page(&req, "Kommentar", "pitchdeck", tmpl)
}

/// Store a comment, then show the deck again.
pub async fn create_comment(
    req: HttpRequest,
    state: web::Data<AppState>,
    form: web::Form<CommentForm>,
) -> Result<HttpResponse, AppError> {
    let CommentForm { name, comment, slide } = form.into_inner();

    let view = {
        let mut deck = state.lock()?;
        let tagged = deck.add_comment(name, comment, slide)?;
        log::info!(
            "Comment added to slide {tagged} ({} comments total)",
            deck.comments().len()
        );
        deck.view()
    };

    let tmpl = PitchdeckTemplate::new(view);
    render_page(&req, "Pitchdeck", "pitchdeck", tmpl)
}

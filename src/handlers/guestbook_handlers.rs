use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;

use crate::errors::AppError;
use crate::state::AppState;
use crate::templates_structs::{GuestbookTemplate, NewGuestbookEntryTemplate, render_page};

#[derive(Debug, Deserialize)]
pub struct GuestbookForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub entry: String,
}

pub async fn guestbook(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let entries = state.lock()?.guestbook().all().to_vec();
    render_page(&req, "Gästebuch", "guestbook", GuestbookTemplate { entries })
}

pub async fn new_entry(req: HttpRequest) -> Result<HttpResponse, AppError> {
    render_page(&req, "Neuer Eintrag", "guestbook", NewGuestbookEntryTemplate)
}

pub async fn create_entry(
    req: HttpRequest,
    state: web::Data<AppState>,
    form: web::Form<GuestbookForm>,
) -> Result<HttpResponse, AppError> {
    let GuestbookForm { name, entry } = form.into_inner();
    let entries = state.lock()?.add_entry(name, entry);
    log::info!("Guestbook entry added ({} entries total)", entries.len());
    render_page(&req, "Gästebuch", "guestbook", GuestbookTemplate { entries })
}

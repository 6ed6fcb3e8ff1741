use askama::Template;

use crate::models::GuestbookEntry;

#[derive(Template)]
#[template(path = "guestbook.html")]
pub struct GuestbookTemplate {
    pub entries: Vec<GuestbookEntry>,
}

#[derive(Template)]
#[template(path = "newguestbookentry.html")]
pub struct NewGuestbookEntryTemplate;

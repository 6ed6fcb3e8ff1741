pub mod comment;
pub mod guestbook;
pub mod presentation;
pub mod seed;

pub use comment::{Comment, CommentStore, SlideOutOfRange};
pub use guestbook::{GuestbookEntry, GuestbookStore};
pub use presentation::Presentation;

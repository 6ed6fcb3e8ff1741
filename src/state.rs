use std::sync::{Mutex, MutexGuard};

use crate::errors::AppError;
use crate::models::{
    Comment, CommentStore, GuestbookEntry, GuestbookStore, Presentation, SlideOutOfRange, seed,
};

/// Everything the deck viewer keeps in memory: slide position, comments and guestbook.
#[derive(Debug, Clone)]
pub struct Deck {
    presentation: Presentation,
    comments: CommentStore,
    guestbook: GuestbookStore,
}

/// Snapshot of one slide and its comments, taken under the state lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideView {
    pub slide: u32,
    pub slide_count: u32,
    pub comments: Vec<Comment>,
}

impl Deck {
    pub fn new(
        presentation: Presentation,
        comments: CommentStore,
        guestbook: GuestbookStore,
    ) -> Self {
        Self {
            presentation,
            comments,
            guestbook,
        }
    }

    /// A deck with no comments and an empty guestbook.
    pub fn empty(slide_count: u32) -> Self {
        Self::new(
            Presentation::new(slide_count),
            CommentStore::default(),
            GuestbookStore::default(),
        )
    }

    /// A deck loaded with the example comments and guestbook entries.
    pub fn seeded(slide_count: u32) -> Self {
        let presentation = Presentation::new(slide_count);
        let comments = CommentStore::new(seed::comments(presentation.slide_count()));
        Self::new(presentation, comments, GuestbookStore::new(seed::guestbook()))
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    pub fn comments(&self) -> &CommentStore {
        &self.comments
    }

    pub fn guestbook(&self) -> &GuestbookStore {
        &self.guestbook
    }

    /// The current slide with its comments.
    pub fn view(&self) -> SlideView {
        SlideView {
            slide: self.presentation.current(),
            slide_count: self.presentation.slide_count(),
            comments: self.comments.list_for_slide(self.presentation.current()),
        }
    }

    pub fn advance(&mut self) -> SlideView {
        let slide = self.presentation.advance();
        log::debug!("Advanced to slide {slide}");
        self.view()
    }

    pub fn retreat(&mut self) -> SlideView {
        let slide = self.presentation.retreat();
        log::debug!("Retreated to slide {slide}");
        self.view()
    }

    /// Append a comment to `slide`, or to the current slide when none is given.
    /// Returns the slide the comment was attached to.
    pub fn add_comment(
        &mut self,
        name: String,
        text: String,
        slide: Option<u32>,
    ) -> Result<u32, SlideOutOfRange> {
        let target = slide.unwrap_or_else(|| self.presentation.current());
        if !self.presentation.contains(target) {
            return Err(SlideOutOfRange {
                slide: target,
                slide_count: self.presentation.slide_count(),
            });
        }
        self.comments.add(Comment::new(target, name, text));
        Ok(target)
    }

    /// Append a guestbook entry. Returns all entries including the new one.
    pub fn add_entry(&mut self, name: String, text: String) -> Vec<GuestbookEntry> {
        self.guestbook.add(GuestbookEntry::new(name, text));
        self.guestbook.all().to_vec()
    }
}

/// Application state shared by every worker. A single mutex serialises all
/// reads and writes of the deck.
pub struct AppState {
    deck: Mutex<Deck>,
}

impl AppState {
    pub fn new(deck: Deck) -> Self {
        Self {
            deck: Mutex::new(deck),
        }
    }

    pub fn lock(&self) -> Result<MutexGuard<'_, Deck>, AppError> {
        self.deck.lock().map_err(|_| {
            log::error!("Deck state lock poisoned");
            AppError::StatePoisoned
        })
    }
}

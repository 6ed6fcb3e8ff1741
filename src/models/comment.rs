use std::fmt;

/// A comment left on one slide of the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub slide_number: u32,
    pub name: String,
    pub text: String,
}

impl Comment {
    pub fn new(slide_number: u32, name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            slide_number,
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Append-only list of comments in submission order.
#[derive(Debug, Clone, Default)]
pub struct CommentStore {
    comments: Vec<Comment>,
}

impl CommentStore {
    pub fn new(comments: Vec<Comment>) -> Self {
        Self { comments }
    }

    pub fn add(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    /// Comments tagged with `slide`, oldest first.
    pub fn list_for_slide(&self, slide: u32) -> Vec<Comment> {
        self.comments
            .iter()
            .filter(|c| c.slide_number == slide)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }
}

/// A comment addressed to a slide the deck does not have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideOutOfRange {
    pub slide: u32,
    pub slide_count: u32,
}

impl fmt::Display for SlideOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slide {} is outside 1..={}", self.slide, self.slide_count)
    }
}

impl std::error::Error for SlideOutOfRange {}

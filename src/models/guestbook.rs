/// A signed guestbook line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestbookEntry {
    pub name: String,
    pub text: String,
}

impl GuestbookEntry {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Append-only guestbook in signing order.
#[derive(Debug, Clone, Default)]
pub struct GuestbookStore {
    entries: Vec<GuestbookEntry>,
}

impl GuestbookStore {
    pub fn new(entries: Vec<GuestbookEntry>) -> Self {
        Self { entries }
    }

    pub fn add(&mut self, entry: GuestbookEntry) {
        self.entries.push(entry);
    }

    pub fn all(&self) -> &[GuestbookEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_keeps_signing_order() {
        let mut book = GuestbookStore::default();
        assert!(book.is_empty());
        book.add(GuestbookEntry::new("Anna", "hello"));
        book.add(GuestbookEntry::new("", ""));
        assert_eq!(book.len(), 2);
        assert_eq!(book.all()[0].name, "Anna");
        assert_eq!(book.all()[1], GuestbookEntry::new("", ""));
    }
}

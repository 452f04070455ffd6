use std::cell::{Cell, RefCell};

/// Внешний коллаборатор маршрутизации (история браузера или память в тестах).
pub trait Navigator {
    /// Current path without query string.
    fn current_path(&self) -> String;
    /// Current query string, with or without leading `?`.
    fn current_query(&self) -> String;
    fn replace(&self, url: &str);
    fn push(&self, url: &str);
}

/// Делит URL на путь и query-строку, отбрасывая `#fragment`.
pub fn split_url(url: &str) -> (&str, &str) {
    let url = url.split('#').next().unwrap_or_default();
    match url.split_once('?') {
        Some((path, query)) => (path, query),
        None => (url, ""),
    }
}

/// История в памяти: стек записей и курсор, как у `window.history`.
#[derive(Debug)]
pub struct MemoryNavigator {
    entries: RefCell<Vec<String>>,
    cursor: Cell<usize>,
}

impl MemoryNavigator {
    pub fn new(initial_url: impl Into<String>) -> Self {
        Self {
            entries: RefCell::new(vec![initial_url.into()]),
            cursor: Cell::new(0),
        }
    }

    pub fn current_url(&self) -> String {
        self.entries.borrow()[self.cursor.get()].clone()
    }

    pub fn history_len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns false when already at the first entry.
    pub fn back(&self) -> bool {
        let cursor = self.cursor.get();
        if cursor == 0 {
            return false;
        }
        self.cursor.set(cursor - 1);
        true
    }
}

impl Navigator for MemoryNavigator {
    fn current_path(&self) -> String {
        split_url(&self.current_url()).0.to_string()
    }

    fn current_query(&self) -> String {
        split_url(&self.current_url()).1.to_string()
    }

    fn replace(&self, url: &str) {
        self.entries.borrow_mut()[self.cursor.get()] = url.to_string();
    }

    fn push(&self, url: &str) {
        let mut entries = self.entries.borrow_mut();
        let cursor = self.cursor.get();
        entries.truncate(cursor + 1);
        entries.push(url.to_string());
        self.cursor.set(entries.len() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_url() {
        assert_eq!(split_url("/search?q=a#top"), ("/search", "q=a"));
        assert_eq!(split_url("/admin/tags"), ("/admin/tags", ""));
    }

    #[test]
    fn test_push_truncates_forward_entries() {
        let nav = MemoryNavigator::new("/search");
        nav.push("/search?page=2");
        nav.push("/search?page=3");
        assert!(nav.back());
        nav.push("/search?sort=rating");
        assert_eq!(nav.history_len(), 3);
        assert_eq!(nav.current_query(), "sort=rating");
    }
}

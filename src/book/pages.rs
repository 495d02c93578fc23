//! Lazy page iterator over rendered records.

use crate::models::Record;
use indexmap::map::Iter;

/// A lazy, finite, non-restartable sequence of rendered text pages.
///
/// Produced by [`AddressBook::iterate`](super::AddressBook::iterate).
/// Each page renders up to `page_size` consecutive records, one
/// `"<name>: <record>"` line per entry, lines joined by newlines. The
/// final partial page is emitted when non-empty; an empty book yields
/// nothing.
#[derive(Debug)]
pub struct Pages<'a> {
    entries: Iter<'a, String, Record>,
    page_size: usize,
}

impl<'a> Pages<'a> {
    // page_size is validated by AddressBook::iterate before we get here.
    pub(crate) fn new(entries: Iter<'a, String, Record>, page_size: usize) -> Self {
        Self { entries, page_size }
    }
}

impl Iterator for Pages<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let mut lines = Vec::with_capacity(self.page_size);
        while lines.len() < self.page_size {
            match self.entries.next() {
                Some((name, record)) => lines.push(format!("{}: {}", name, record)),
                None => break,
            }
        }

        if lines.is_empty() {
            None
        } else {
            Some(lines.join("\n"))
        }
    }
}

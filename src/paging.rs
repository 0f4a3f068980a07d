//! Pagination arithmetic for the notes list. Pure, so every boundary can be
//! checked without touching the filesystem.

use std::ops::Range;

pub const PAGE_SIZE: usize = 5;

/// One zero-based page over a collection of `total` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub index: usize,
    pub total: usize,
}

impl Page {
    pub fn new(index: usize, total: usize) -> Self {
        Self { index, total }
    }

    /// 1-based number for headers.
    pub fn number(&self) -> usize {
        self.index + 1
    }

    fn start(&self) -> usize {
        self.index * PAGE_SIZE
    }

    /// Global indices shown on this page. Empty when the page lies past the
    /// end of the collection.
    pub fn range(&self) -> Range<usize> {
        let start = self.start().min(self.total);
        let end = (self.start() + PAGE_SIZE).min(self.total);
        start..end
    }

    pub fn is_past_end(&self) -> bool {
        self.start() >= self.total
    }

    pub fn has_next(&self) -> bool {
        (self.index + 1) * PAGE_SIZE < self.total
    }

    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    /// Global index for a 1-based slot on this page, if it names a real item.
    pub fn slot(&self, slot: usize) -> Option<usize> {
        if !(1..=PAGE_SIZE).contains(&slot) {
            return None;
        }
        let idx = self.start() + slot - 1;
        (idx < self.total).then_some(idx)
    }
}

#[cfg(test)]
fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE)
}

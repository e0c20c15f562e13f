//! In-memory page cache backing a table.
//!
//! The pager owns up to `TABLE_MAX_PAGES` pages of `PAGE_SIZE` bytes each.
//! A page is allocated the first time it is written and lives until the
//! pager is dropped.

use tracing::trace;

use crate::{PAGE_SIZE, TABLE_MAX_PAGES};

pub type Page = [u8; PAGE_SIZE];

#[derive(Debug)]
pub struct Pager {
    pages: Vec<Option<Box<Page>>>,
}

impl Pager {
    pub fn new() -> Self {
        Self {
            pages: (0..TABLE_MAX_PAGES).map(|_| None).collect(),
        }
    }

    /// Returns an allocated page, or `None` if it was never written or
    /// `page_num` is past the last page.
    pub fn page(&self, page_num: usize) -> Option<&Page> {
        self.pages.get(page_num)?.as_deref()
    }

    /// Returns a writable page, allocating it on first use. `None` only when
    /// `page_num` is out of bounds.
    pub fn page_mut(&mut self, page_num: usize) -> Option<&mut Page> {
        let slot = self.pages.get_mut(page_num)?;
        let page = slot.get_or_insert_with(|| {
            trace!(page_num, "allocating page");
            Box::new([0u8; PAGE_SIZE])
        });
        Some(&mut **page)
    }

    pub fn num_pages(&self) -> usize {
        self.pages.iter().filter(|p| p.is_some()).count()
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new()
    }
}

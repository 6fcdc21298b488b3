use serde::Serialize;

use crate::error::{Result, ViewError};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Number of pages for `count` items; never less than one.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    count.div_ceil(page_size).max(1)
}

/// The 1-based `page` of `items`. Out-of-range pages are empty.
pub fn slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Visible page of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    page: usize,
    page_size: usize,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageWindow {
    pub fn new(page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(ViewError::InvalidPageSize);
        }
        Ok(Self { page: 1, page_size })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Move to `page`; callers clamp against the item count afterwards.
    pub fn go_to(&mut self, page: usize) {
        self.page = page;
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Change the page size and return to the first page.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        if page_size == 0 {
            return Err(ViewError::InvalidPageSize);
        }
        self.page_size = page_size;
        self.reset();
        Ok(())
    }

    /// Pull the page back into `[1, total_pages(count)]`.
    pub fn clamp(&mut self, count: usize) {
        let last = total_pages(count, self.page_size);
        self.page = self.page.clamp(1, last);
    }

    pub fn apply<'a, T>(&self, items: &'a [T]) -> Page<&'a T> {
        Page {
            items: slice(items, self.page, self.page_size).iter().collect(),
            page: self.page,
            page_size: self.page_size,
            total_pages: total_pages(items.len(), self.page_size),
            total_count: items.len(),
        }
    }
}

/// One slice of a sequence plus the counters a pager needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

impl<T> Page<T> {
    /// First and last 1-based positions shown, `None` when the page is empty.
    pub fn range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let first = (self.page - 1) * self.page_size + 1;
        Some((first, first + self.items.len() - 1))
    }
}

//! Pagination types shared by list operations.
//!
//! Repositories take a [`PageRequest`] and return a [`Page`] slice of an
//! ordered result set. Ordering itself (latest first, trending) is part of
//! each repository method's contract, not of these types.

use serde::{Deserialize, Serialize};

/// A request for one page of an ordered result set. Pages are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page: usize,
    size: usize,
}

impl PageRequest {
    /// Create a request; a zero size is bumped to 1.
    pub fn new(page: usize, size: usize) -> Self {
        Self {
            page,
            size: size.max(1),
        }
    }

    /// Cap the page size at `max`.
    pub fn clamped(self, max: usize) -> Self {
        Self {
            page: self.page,
            size: self.size.min(max.max(1)),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        self.page * self.size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, 10)
    }
}

/// One page of results plus enough bookkeeping to render pagination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub size: usize,
    pub total_items: usize,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total_items: usize) -> Self {
        Self {
            items,
            page: request.page(),
            size: request.size(),
            total_items,
        }
    }

    /// Slice one page out of a fully ordered result set.
    pub fn paginate(ordered: Vec<T>, request: PageRequest) -> Self {
        let total_items = ordered.len();
        let items = ordered
            .into_iter()
            .skip(request.offset())
            .take(request.size())
            .collect();
        Self::new(items, request, total_items)
    }

    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.size)
    }

    pub fn is_last(&self) -> bool {
        self.page + 1 >= self.total_pages()
    }
}

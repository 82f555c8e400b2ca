//! Offset/limit pagination over an already-ordered sequence.

use serde::Serialize;

/// Zero-based page request.
///
/// `size` must be positive for a non-empty result; the boundary layer is
/// responsible for rejecting malformed values. [`paginate`] itself never
/// panics or indexes out of bounds, whatever it is given.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub size: usize,
}

impl PageRequest {
    pub fn new(page: usize, size: usize) -> Self {
        Self { page, size }
    }

    /// Index of the first element on this page.
    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.size)
    }
}

/// One page of results plus the count metadata callers need to render
/// paging controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub size: usize,
    /// Number of elements in the *whole* candidate set, not this page.
    pub total: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total: usize) -> Self {
        let total_pages = match request.size {
            0 => 0,
            size => total.div_ceil(size),
        };
        Self {
            items,
            page: request.page,
            size: request.size,
            total,
            total_pages,
        }
    }

    pub fn empty(request: PageRequest, total: usize) -> Self {
        Self::new(Vec::new(), request, total)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Slice an already-sorted sequence into the requested page.
///
/// Returns the sub-sequence `[page*size, min(page*size + size, len))`
/// together with the full sequence length as `total`. An offset at or past
/// the end yields an empty page with the correct total, not an error.
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Page<T> {
    let total = items.len();
    let start = request.offset();
    if request.size == 0 || start >= total {
        return Page::empty(request, total);
    }
    let page_items: Vec<T> = items.into_iter().skip(start).take(request.size).collect();
    Page::new(page_items, request, total)
}

//! Page size, page count, and page window primitives.
//!
//! Pages are numbered from one. A list of `n` items split into pages of size
//! `s` has `ceil(n / s)` pages, so an empty list has zero pages and no page
//! number is in bounds for it.
//!
//! # Example
//!
//! ```
//! use pagination::{PageSize, page_window, total_pages};
//!
//! let size = PageSize::new(5).expect("non-zero page size");
//! let items: Vec<u32> = (1..=12).collect();
//!
//! assert_eq!(total_pages(items.len(), size), 3);
//! assert_eq!(page_window(&items, 3, size), &[11, 12]);
//! ```

use std::num::NonZeroUsize;

use thiserror::Error;

/// Number of items shown on a single page.
///
/// ## Invariants
/// - The size is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    /// Construct a page size, returning `None` for zero.
    ///
    /// Usable in `const` contexts so callers can pin a fixed page size.
    ///
    /// ```
    /// use pagination::PageSize;
    ///
    /// const FIVE: PageSize = match PageSize::new(5) {
    ///     Some(size) => size,
    ///     None => panic!("page size must be non-zero"),
    /// };
    /// assert_eq!(FIVE.get(), 5);
    /// assert!(PageSize::new(0).is_none());
    /// ```
    #[must_use]
    pub const fn new(size: usize) -> Option<Self> {
        match NonZeroUsize::new(size) {
            Some(size) => Some(Self(size)),
            None => None,
        }
    }

    /// Return the size as a plain integer.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

/// A page request that falls outside `1..=total_pages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("page {page} is outside the available range 1..={total_pages}")]
pub struct PageOutOfRange {
    /// The rejected page number.
    pub page: usize,
    /// Page count at the time of the request.
    pub total_pages: usize,
}

/// Number of pages needed to show `item_count` items.
///
/// ```
/// use pagination::{PageSize, total_pages};
///
/// let size = PageSize::new(5).expect("non-zero page size");
/// assert_eq!(total_pages(0, size), 0);
/// assert_eq!(total_pages(5, size), 1);
/// assert_eq!(total_pages(13, size), 3);
/// ```
#[must_use]
pub const fn total_pages(item_count: usize, size: PageSize) -> usize {
    item_count.div_ceil(size.get())
}

/// Check that `page` addresses an existing page.
///
/// # Errors
///
/// Returns [`PageOutOfRange`] when `page` is zero or greater than
/// `total_pages`. With zero pages every request is out of range.
pub const fn checked_page(page: usize, total_pages: usize) -> Result<usize, PageOutOfRange> {
    if page >= 1 && page <= total_pages {
        Ok(page)
    } else {
        Err(PageOutOfRange { page, total_pages })
    }
}

/// Borrow the items shown on `page`.
///
/// The window starts at `(page - 1) * size` and holds at most `size` items.
/// Page zero and pages past the end yield an empty slice.
#[must_use]
pub fn page_window<T>(items: &[T], page: usize, size: PageSize) -> &[T] {
    let Some(start) = page
        .checked_sub(1)
        .and_then(|index| index.checked_mul(size.get()))
    else {
        return &[];
    };
    let end = start.saturating_add(size.get()).min(items.len());
    items.get(start..end).unwrap_or_default()
}

//! Fixed-size pages over an ordered question list.

/// Number of questions shown per Part A page.
pub const PAGE_SIZE: usize = 3;

/// Split `items` into consecutive pages of `page_size`.
///
/// The last page holds the remainder and may be shorter.
///
/// # Panics
/// Panics if `page_size` is zero.
pub fn paginate<T>(items: &[T], page_size: usize) -> Vec<&[T]> {
    Pages::new(items, page_size).iter().collect()
}

/// A paged view over a borrowed slice.
#[derive(Debug, Clone, Copy)]
pub struct Pages<'a, T> {
    items: &'a [T],
    page_size: usize,
}

impl<'a, T> Pages<'a, T> {
    /// Create a paged view.
    ///
    /// # Panics
    /// Panics if `page_size` is zero.
    pub fn new(items: &'a [T], page_size: usize) -> Self {
        assert!(page_size > 0, "page size must be positive");
        Self { items, page_size }
    }

    /// `ceil(len / page_size)`.
    pub fn page_count(&self) -> usize {
        self.items.len().div_ceil(self.page_size)
    }

    /// Index of the final page, or 0 when there are no items.
    pub fn last_index(&self) -> usize {
        self.page_count().saturating_sub(1)
    }

    /// Check whether `index` is the final page.
    pub fn is_last(&self, index: usize) -> bool {
        index == self.last_index()
    }

    /// The slice `[i * page_size, min((i + 1) * page_size, len))`.
    pub fn page_at(&self, index: usize) -> Option<&'a [T]> {
        let start = index.checked_mul(self.page_size)?;
        if start >= self.items.len() {
            return None;
        }
        let end = (start + self.page_size).min(self.items.len());
        Some(&self.items[start..end])
    }

    /// Iterate over all pages in order.
    pub fn iter(&self) -> std::slice::Chunks<'a, T> {
        self.items.chunks(self.page_size)
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

/// Offset-based page request for list screens
///
/// # Example
/// ```
/// use loyalty_core_db::repository::pagination::PageRequest;
///
/// let second = PageRequest::for_page(25, 2);
/// assert_eq!(second.offset, 25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Maximum number of items to return
    pub limit: usize,
    /// Number of items to skip
    pub offset: usize,
}

impl PageRequest {
    pub fn new(limit: usize, offset: usize) -> Self {
        Self { limit, offset }
    }

    /// Page request for a 1-based page number; page 0 is read as page 1.
    pub fn for_page(page_size: usize, page_number: usize) -> Self {
        let page_number = page_number.max(1);
        Self {
            limit: page_size,
            offset: (page_number - 1).saturating_mul(page_size),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: 20,
            offset: 0,
        }
    }
}

/// One page of a collection plus the total across all pages
///
/// # Example
/// ```
/// use loyalty_core_db::repository::pagination::{Page, PageRequest};
///
/// let members = vec!["M001", "M002", "M003", "M004", "M005"];
/// let page = Page::from_slice(&members, PageRequest::for_page(2, 2));
///
/// assert_eq!(page.items, vec!["M003", "M004"]);
/// assert!(page.has_more());
/// assert_eq!(page.total_pages(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: usize, limit: usize, offset: usize) -> Self {
        Self {
            items,
            total,
            limit,
            offset,
        }
    }

    /// Cuts the requested window out of an in-memory snapshot.
    pub fn from_slice(all: &[T], request: PageRequest) -> Self
    where
        T: Clone,
    {
        let start = request.offset.min(all.len());
        let end = start.saturating_add(request.limit).min(all.len());
        Self::new(all[start..end].to_vec(), all.len(), request.limit, request.offset)
    }

    pub fn has_more(&self) -> bool {
        self.offset + self.items.len() < self.total
    }

    /// 1-based page number
    pub fn page_number(&self) -> usize {
        if self.limit == 0 {
            1
        } else {
            (self.offset / self.limit) + 1
        }
    }

    pub fn total_pages(&self) -> usize {
        if self.limit == 0 {
            1
        } else {
            self.total.div_ceil(self.limit)
        }
    }
}

use crate::search::SearchParams;
use serde::Serialize;

/// A page of results with pagination metadata.
///
/// `total` and `total_pages` describe the whole table, not the filtered
/// result set; `returned` is the number of items in this page.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub limit: u64,
    pub returned: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    /// Assemble a page from fetched items, the (normalized) search parameters
    /// that produced them, and the table's total row count.
    pub fn new(items: Vec<T>, params: &SearchParams, total: u64) -> Self {
        let total_pages = if params.limit == 0 {
            // limit 0 returns everything in one page
            u64::from(total > 0)
        } else {
            (total + params.limit - 1) / params.limit
        };
        Self {
            returned: items.len() as u64,
            items,
            page: params.page,
            limit: params.limit,
            total,
            total_pages,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_counts() {
        let page = Page::new(vec![1, 2, 3], &SearchParams::new(2, 3), 7);
        assert_eq!(page.returned, 3);
        assert_eq!(page.total, 7);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.page, 2);
    }

    #[test]
    fn test_exact_division() {
        let page = Page::new(vec![(); 5], &SearchParams::new(1, 5), 10);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_unpaginated() {
        let page = Page::new(vec![1, 2], &SearchParams::new(1, 0), 2);
        assert_eq!(page.total_pages, 1);

        let empty: Page<i32> = Page::new(vec![], &SearchParams::new(1, 0), 0);
        assert_eq!(empty.total_pages, 0);
        assert!(empty.is_empty());
    }
}

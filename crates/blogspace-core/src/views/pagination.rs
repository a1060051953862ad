use serde::Serialize;

/// Posts per page.
pub const PAGE_SIZE: usize = 9;

/// One page of a filtered list. Pages are 1-indexed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

/// Cut page `page` out of `items`. Page 0 is read as page 1; pages past the
/// end are empty.
pub fn paginate<T>(items: Vec<T>, page: usize) -> Page<T> {
    let page = page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(PAGE_SIZE);
    let start = (page - 1).saturating_mul(PAGE_SIZE);

    Page {
        items: items.into_iter().skip(start).take(PAGE_SIZE).collect(),
        page,
        total_pages,
        total_items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginate_slices_pages() {
        let items: Vec<u32> = (1..=20).collect();

        let first = paginate(items.clone(), 1);
        assert_eq!(first.items, (1..=9).collect::<Vec<_>>());
        assert_eq!(first.total_pages, 3);
        assert!(first.has_next());
        assert!(!first.has_previous());

        let last = paginate(items, 3);
        assert_eq!(last.items, vec![19, 20]);
        assert!(!last.has_next());
    }

    #[test]
    fn test_paginate_edges() {
        let empty = paginate(Vec::<u32>::new(), 1);
        assert_eq!(empty.total_pages, 0);
        assert!(empty.items.is_empty());

        let zero = paginate(vec![1, 2, 3], 0);
        assert_eq!(zero.page, 1);
        assert_eq!(zero.items, vec![1, 2, 3]);

        let past = paginate(vec![1, 2, 3], 5);
        assert!(past.items.is_empty());
        assert_eq!(past.total_items, 3);
    }
}

use serde::{Deserialize, Serialize};

/// Requested page, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 20,
        }
    }
}

impl PageRequest {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    pub fn first(self) -> Self {
        Self { page: 1, ..self }
    }
}

/// One page of results plus the totals a pager needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub page_size: u32,
    pub total: usize,
    pub total_pages: u32,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// 1-based index of the first item on this page, 0 when empty.
    pub fn first_index(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.page as usize - 1) * self.page_size as usize + 1
        }
    }

    pub fn last_index(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.first_index() + self.items.len() - 1
        }
    }
}

/// Slices `items` to the requested page, clamping the page number into range.
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Page<T> {
    let page_size = request.page_size.max(1);
    let total = items.len();
    let total_pages = total.div_ceil(page_size as usize) as u32;
    let page = request.page.clamp(1, total_pages.max(1));
    let start = (page as usize - 1) * page_size as usize;
    let items = items
        .into_iter()
        .skip(start)
        .take(page_size as usize)
        .collect();
    Page {
        items,
        page,
        page_size,
        total,
        total_pages,
    }
}

/// Page numbers the pager shows: `current` plus `radius` either side.
pub fn page_window(current: u32, total_pages: u32, radius: u32) -> Vec<u32> {
    if total_pages == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total_pages);
    let start = current.saturating_sub(radius).max(1);
    let end = current.saturating_add(radius).min(total_pages);
    (start..=end).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_middle_page() {
        let page = paginate((1..=45).collect::<Vec<_>>(), PageRequest::new(2, 20));
        assert_eq!(page.items.first(), Some(&21));
        assert_eq!(page.items.len(), 20);
        assert_eq!(page.total, 45);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_previous());
        assert!(page.has_next());
        assert_eq!((page.first_index(), page.last_index()), (21, 40));
    }

    #[test]
    fn test_page_past_end_is_clamped() {
        let page = paginate((1..=45).collect::<Vec<_>>(), PageRequest::new(9, 20));
        assert_eq!(page.page, 3);
        assert_eq!(page.items, (41..=45).collect::<Vec<_>>());
        assert!(!page.has_next());
    }

    #[test]
    fn test_empty_collection() {
        let page = paginate(Vec::<u8>::new(), PageRequest::new(0, 0));
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 1);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.first_index(), 0);
        assert!(!page.has_previous());
    }

    #[test_case(1, 10, 2, vec![1, 2, 3] ; "at start")]
    #[test_case(5, 10, 2, vec![3, 4, 5, 6, 7] ; "middle")]
    #[test_case(10, 10, 2, vec![8, 9, 10] ; "at end")]
    #[test_case(3, 0, 2, vec![] ; "no pages")]
    fn test_page_window(current: u32, total: u32, radius: u32, expected: Vec<u32>) {
        assert_eq!(page_window(current, total, radius), expected);
    }
}

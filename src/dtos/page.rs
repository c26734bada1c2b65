use serde::{Deserialize, Serialize};

/// Pagination envelope returned by search endpoints. `page_number` is
/// zero-based on the wire, echoing the request parameter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page_number: i64,
    pub page_size: i64,
    pub total_pages: i64,
    pub total_elements: i64,
    pub first: bool,
    pub last: bool,
}

impl<T> Page<T> {
    /// Assemble an envelope from one page of rows plus the unpaged total.
    /// An empty result has zero pages and still reports `first`/`last`.
    pub fn new(content: Vec<T>, page_number: i64, page_size: i64, total_elements: i64) -> Self {
        let total_pages = if page_size > 0 {
            (total_elements + page_size - 1) / page_size
        } else {
            0
        };
        Self {
            first: page_number == 0,
            last: page_number + 1 >= total_pages,
            content,
            page_number,
            page_size,
            total_pages,
            total_elements,
        }
    }

    /// Map the content, keeping the pagination metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            total_pages: self.total_pages,
            total_elements: self.total_elements,
            first: self.first,
            last: self.last,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_math_for_partial_last_page() {
        let page = Page::new(vec![1, 2, 3], 2, 3, 7);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_elements, 7);
        assert!(!page.first);
        assert!(page.last);
    }

    #[test]
    fn envelope_math_for_first_of_many() {
        let page = Page::new(vec![1, 2], 0, 2, 5);
        assert_eq!(page.total_pages, 3);
        assert!(page.first);
        assert!(!page.last);
    }

    #[test]
    fn empty_result_has_zero_pages_and_is_last() {
        let page = Page::<i32>::new(vec![], 0, 10, 0);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.total_elements, 0);
        assert!(page.first);
        assert!(page.last);
    }

    #[test]
    fn exact_multiple_has_no_partial_page() {
        let page = Page::new(vec![1, 2], 1, 2, 4);
        assert_eq!(page.total_pages, 2);
        assert!(page.last);
    }

    #[test]
    fn map_preserves_metadata() {
        let page = Page::new(vec![1, 2], 1, 2, 6).map(|n| n * 10);
        assert_eq!(page.content, vec![10, 20]);
        assert_eq!(page.page_number, 1);
        assert_eq!(page.total_pages, 3);
    }
}

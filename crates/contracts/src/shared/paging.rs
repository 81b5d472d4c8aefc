//! Server-side pagination for the `{resource}/read` endpoints.

use super::search::SearchTerm;
use serde::{Deserialize, Serialize};

/// Page sizes offered by the table pager
pub const PAGE_SIZE_OPTIONS: [usize; 5] = [5, 10, 25, 50, 100];

/// Page size used until the user picks another one
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Sort order requested for every list call
pub const DEFAULT_SORT: &str = "createdDate,desc";

/// Response envelope of every list endpoint.
///
/// The service sends a full Spring `Page` object; only these two fields are
/// consumed, the rest is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
}

impl<T> Default for PageEnvelope<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            total_elements: 0,
        }
    }
}

impl<T> PageEnvelope<T> {
    /// Number of pages for the given page size (zero when there are no rows)
    pub fn total_pages(&self, page_size: usize) -> usize {
        if page_size == 0 {
            return 0;
        }
        self.total_elements.div_ceil(page_size as u64) as usize
    }
}

/// Paging and filter parameters of one table instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// Zero-based page index
    pub page: usize,
    pub size: usize,
    pub search: SearchTerm,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            search: SearchTerm::default(),
        }
    }
}

impl ListQuery {
    pub fn go_to_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Changing the page size always starts over from the first page
    pub fn change_page_size(&mut self, size: usize) {
        self.size = size.max(1);
        self.page = 0;
    }

    /// A new search starts over from the first page
    pub fn apply_search(&mut self, term: SearchTerm) {
        self.search = term;
        self.page = 0;
    }

    /// `page={n}&size={s}&sort=createdDate,desc[&search=...]`
    pub fn to_query_string(&self, search_key: &str) -> String {
        let mut query = format!("page={}&size={}&sort={}", self.page, self.size, DEFAULT_SORT);
        if let Some(filter) = self.search.filter_expression(search_key) {
            query.push_str("&search=");
            query.push_str(&filter);
        }
        query
    }

    /// Full list URL for a read endpoint
    pub fn to_url(&self, fetch_url: &str, search_key: &str) -> String {
        format!("{}?{}", fetch_url, self.to_query_string(search_key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_string() {
        let q = ListQuery::default();
        assert_eq!(
            q.to_query_string("name"),
            "page=0&size=5&sort=createdDate,desc"
        );
    }

    #[test]
    fn test_query_with_search() {
        let mut q = ListQuery::default();
        q.go_to_page(2);
        q.apply_search(SearchTerm::parse("abc").unwrap());
        assert_eq!(q.page, 0);
        assert_eq!(
            q.to_url("/function-library/read", "name"),
            "/function-library/read?page=0&size=5&sort=createdDate,desc&search=name=like=abc,description=like=abc"
        );
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut q = ListQuery::default();
        q.go_to_page(3);
        q.change_page_size(25);
        assert_eq!((q.page, q.size), (0, 25));
        assert_eq!(q.to_query_string("name"), "page=0&size=25&sort=createdDate,desc");
    }

    #[test]
    fn test_page_change_keeps_size() {
        let mut q = ListQuery::default();
        q.change_page_size(10);
        q.go_to_page(4);
        assert_eq!(q.to_query_string("name"), "page=4&size=10&sort=createdDate,desc");
    }

    #[test]
    fn test_envelope_total_pages() {
        let page: PageEnvelope<u8> = serde_json::from_str(
            r#"{"content":[1,2,3],"totalElements":11,"pageable":{"pageNumber":0},"last":false}"#,
        )
        .unwrap();
        assert_eq!(page.content, vec![1, 2, 3]);
        assert_eq!(page.total_pages(5), 3);
        assert_eq!(page.total_pages(11), 1);
        assert_eq!(PageEnvelope::<u8>::default().total_pages(5), 0);
    }

    #[test]
    fn test_total_pages_near_u64_max() {
        let page = PageEnvelope::<u8> {
            content: Vec::new(),
            total_elements: u64::MAX,
        };
        assert_eq!(page.total_pages(1), u64::MAX as usize);
        assert_eq!(page.total_pages(usize::MAX), 1);
    }
}

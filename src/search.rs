use thiserror::Error;

use crate::trials::SearchResults;

/// Number of studies shown per results page.
pub const PAGE_SIZE: u32 = 20;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageParamError {
    #[error("page must be a positive number, got {0:?}")]
    NotANumber(String),
    #[error("page numbers start at 1")]
    Zero,
}

/// Parses the raw `page` query parameter. Missing or empty means the first page.
pub fn parse_page(raw: Option<&str>) -> Result<u32, PageParamError> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(1),
        Some(raw) => raw,
    };
    match raw.parse::<u32>() {
        Ok(0) => Err(PageParamError::Zero),
        Ok(page) => Ok(page),
        Err(_) => Err(PageParamError::NotANumber(raw.to_string())),
    }
}

/// Total number of pages needed to show `result_count` studies.
pub fn total_pages(result_count: u32, page_size: u32) -> u32 {
    result_count.div_ceil(page_size.max(1))
}

/// Query, pagination cursor and fetched results of a single search request.
#[derive(Debug, Clone)]
pub struct SearchState {
    search_key: String,
    next_page: u32,
    total_pages: u32,
    results: Option<SearchResults>,
}

impl SearchState {
    pub fn new(search_key: impl Into<String>, page: u32) -> SearchState {
        SearchState {
            search_key: search_key.into(),
            next_page: page.max(1),
            total_pages: 0,
            results: None,
        }
    }

    pub fn search_key(&self) -> &str {
        &self.search_key
    }

    /// Page to request next, or the page just fetched once the last page is reached.
    pub fn next_page(&self) -> u32 {
        self.next_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn results(&self) -> Option<&SearchResults> {
        self.results.as_ref()
    }

    pub fn is_last_page(&self) -> bool {
        self.next_page >= self.total_pages
    }

    pub fn current_page(&self) -> u32 {
        if self.next_page == 1 {
            return self.next_page;
        }
        self.next_page - 1
    }

    pub fn previous_page(&self) -> u32 {
        self.current_page() - 1
    }

    /// Takes ownership of the upstream page, recomputes the page count and
    /// advances the cursor unless this was the last page.
    pub fn attach_results(&mut self, results: SearchResults) {
        self.total_pages = total_pages(results.n_studies_returned, PAGE_SIZE);
        if !self.is_last_page() {
            self.next_page += 1;
        }
        self.results = Some(results);
    }
}

use super::validation::ValidationErrors;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const INVALID_PAGINATION: &str = "Invalid pagination parameters.";

/// A validated page request. Both numbers are always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn new(page: u32, page_size: u32) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if page < 1 {
            errors.push("page", INVALID_PAGINATION);
        }
        if page_size < 1 {
            errors.push("pageSize", INVALID_PAGINATION);
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Self { page, page_size })
    }

    /// Builds a request from raw query-string values.
    ///
    /// Absent values fall back to page 1 and a page size of 10. Present values
    /// must be integers >= 1; each bad parameter yields its own entry.
    pub fn from_query(page: Option<&str>, page_size: Option<&str>) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let page = match page {
            None => Some(DEFAULT_PAGE),
            Some(raw) => parse_positive(raw),
        };
        if page.is_none() {
            errors.push("page", INVALID_PAGINATION);
        }

        let page_size = match page_size {
            None => Some(DEFAULT_PAGE_SIZE),
            Some(raw) => parse_positive(raw),
        };
        if page_size.is_none() {
            errors.push("pageSize", INVALID_PAGINATION);
        }

        match (page, page_size) {
            (Some(page), Some(page_size)) => Ok(Self { page, page_size }),
            _ => Err(errors),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1).saturating_mul(i64::from(self.page_size))
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }
}

fn parse_positive(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|value| *value >= 1)
}

/// `ceil(total_count / page_size)`; an empty table has zero pages.
pub fn total_pages(total_count: i64, page_size: u32) -> i64 {
    if total_count <= 0 || page_size == 0 {
        return 0;
    }
    let page_size = i64::from(page_size);
    (total_count + page_size - 1) / page_size
}

/// One page of results together with the totals needed to render controls.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub current_page: u32,
    pub total_count: i64,
    pub total_pages: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total_count: i64) -> Self {
        Self {
            items,
            current_page: request.page(),
            total_count,
            total_pages: total_pages(total_count, request.page_size()),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            current_page: self.current_page,
            total_count: self.total_count,
            total_pages: self.total_pages,
        }
    }
}

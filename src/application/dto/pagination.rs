use crate::application::error::{ApplicationError, ApplicationResult};
use serde::Serialize;

/// Items per listing page.
pub const PER_PAGE: u64 = 9;

/// Page-number arithmetic for offset pagination.
///
/// When `allow_empty_first_page` is false an empty collection has zero pages
/// and every page request for it fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    per_page: u64,
    allow_empty_first_page: bool,
}

impl Paginator {
    pub fn new(per_page: u64, allow_empty_first_page: bool) -> Self {
        Self {
            per_page: per_page.max(1),
            allow_empty_first_page,
        }
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    pub fn num_pages(&self, count: u64) -> u64 {
        if count == 0 && !self.allow_empty_first_page {
            return 0;
        }
        count.max(1).div_ceil(self.per_page)
    }

    /// Resolve the raw `page` query value into a 1-based page number.
    ///
    /// Missing or blank input means the first page and `last` means the final
    /// one. Anything else must be an integer inside `1..=num_pages`.
    pub fn resolve(&self, raw: Option<&str>, count: u64) -> ApplicationResult<u64> {
        let num_pages = self.num_pages(count);
        let number: i64 = match raw.map(str::trim).filter(|value| !value.is_empty()) {
            None => 1,
            Some("last") => i64::try_from(num_pages).unwrap_or(i64::MAX),
            Some(value) => value
                .parse()
                .map_err(|_| ApplicationError::not_found("page number is not an integer"))?,
        };

        if number < 1 {
            return Err(ApplicationError::not_found("page number is less than 1"));
        }
        let number = number.unsigned_abs();
        if number > num_pages && !(number == 1 && self.allow_empty_first_page) {
            return Err(ApplicationError::not_found("that page contains no results"));
        }
        Ok(number)
    }

    pub fn offset(&self, number: u64) -> u64 {
        number.saturating_sub(1) * self.per_page
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub number: u64,
    pub num_pages: u64,
    pub count: u64,
    pub has_next: bool,
    pub has_previous: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_number: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_page_number: Option<u64>,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, number: u64, count: u64, paginator: &Paginator) -> Self {
        let num_pages = paginator.num_pages(count);
        let has_next = number < num_pages;
        let has_previous = number > 1;
        Self {
            items,
            number,
            num_pages,
            count,
            has_next,
            has_previous,
            next_page_number: has_next.then_some(number + 1),
            previous_page_number: has_previous.then(|| number - 1),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            number: self.number,
            num_pages: self.num_pages,
            count: self.count,
            has_next: self.has_next,
            has_previous: self.has_previous,
            next_page_number: self.next_page_number,
            previous_page_number: self.previous_page_number,
        }
    }
}

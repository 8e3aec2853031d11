// Category pagination
//
// Tracks which page of the category list is visible. The page index is
// always clamped to [0, last_page].

use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    per_page: usize,
    total: usize,
}

impl Pagination {
    /// `per_page` of zero is treated as one
    pub fn new(total: usize, per_page: usize) -> Self {
        Pagination {
            page: 0,
            per_page: per_page.max(1),
            total,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Number of pages; an empty list still has one (empty) page
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.per_page).max(1)
    }

    pub fn last_page(&self) -> usize {
        self.page_count() - 1
    }

    /// Indices into the category list shown on the current page
    pub fn visible(&self) -> Range<usize> {
        let start = (self.page * self.per_page).min(self.total);
        let end = (start + self.per_page).min(self.total);
        start..end
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page < self.last_page()
    }

    /// Moves forward one page; returns false if already on the last page
    pub fn next(&mut self) -> bool {
        if self.has_next() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Moves back one page; returns false if already on the first page
    pub fn previous(&mut self) -> bool {
        if self.has_previous() {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// "PAGE 1/3"
    pub fn indicator(&self) -> String {
        format!("PAGE {}/{}", self.page + 1, self.page_count())
    }
}

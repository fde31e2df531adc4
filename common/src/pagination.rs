//! Page cursor and page-button window for the jobs listing.

/// Neighbours shown on each side of the current page.
const WINDOW_RADIUS: u64 = 2;

/// Page number (1-based) plus a fixed page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    pub page: u64,
    pub page_size: u64,
}

impl PageCursor {
    pub fn new(page: u64, page_size: u64) -> Self {
        Self { page: page.max(1), page_size: page_size.max(1) }
    }

    pub fn skip(&self) -> u64 {
        (self.page - 1) * self.page_size
    }

    pub fn limit(&self) -> u64 {
        self.page_size
    }
}

pub fn total_pages(total: u64, page_size: u64) -> u64 {
    total.div_ceil(page_size.max(1))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageButton {
    Previous { target: u64, enabled: bool },
    Page { number: u64, active: bool },
    Gap,
    Next { target: u64, enabled: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub total: u64,
    pub page_size: u64,
    pub current_page: u64,
    pub total_pages: u64,
    pub window_start: u64,
    pub window_end: u64,
}

impl Pagination {
    /// `None` when everything fits on one page and no controls should render.
    pub fn compute(total: u64, page_size: u64, requested_page: u64) -> Option<Self> {
        let page_size = page_size.max(1);
        let total_pages = total_pages(total, page_size);
        if total_pages <= 1 {
            return None;
        }
        let current_page = requested_page.clamp(1, total_pages);
        Some(Self {
            total,
            page_size,
            current_page,
            total_pages,
            window_start: current_page.saturating_sub(WINDOW_RADIUS).max(1),
            window_end: (current_page + WINDOW_RADIUS).min(total_pages),
        })
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn window(&self) -> std::ops::RangeInclusive<u64> {
        self.window_start..=self.window_end
    }

    pub fn cursor(&self) -> PageCursor {
        PageCursor::new(self.current_page, self.page_size)
    }

    /// Previous, first page and gap when the window does not reach it, the window,
    /// gap and last page likewise, then next.
    pub fn buttons(&self) -> Vec<PageButton> {
        let mut buttons = vec![PageButton::Previous {
            target: self.current_page.saturating_sub(1).max(1),
            enabled: self.has_previous(),
        }];
        if self.window_start > 1 {
            buttons.push(PageButton::Page { number: 1, active: false });
            if self.window_start > 2 {
                buttons.push(PageButton::Gap);
            }
        }
        buttons.extend(self.window().map(|number| PageButton::Page { number, active: number == self.current_page }));
        if self.window_end < self.total_pages {
            if self.window_end < self.total_pages - 1 {
                buttons.push(PageButton::Gap);
            }
            buttons.push(PageButton::Page { number: self.total_pages, active: false });
        }
        buttons.push(PageButton::Next {
            target: (self.current_page + 1).min(self.total_pages),
            enabled: self.has_next(),
        });
        buttons
    }
}

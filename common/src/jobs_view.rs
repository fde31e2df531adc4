//! State of the jobs listing view: the applied criteria and the current page.

use crate::{
    filter_criteria::{FilterCriteria, JobsQuery},
    job_const::PAGE_SIZE,
    pagination::PageCursor,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobsViewState {
    pub criteria: FilterCriteria,
    pub page: u64,
}

impl Default for JobsViewState {
    fn default() -> Self {
        Self::new(FilterCriteria::default())
    }
}

impl JobsViewState {
    pub fn new(criteria: FilterCriteria) -> Self {
        Self { criteria, page: 1 }
    }

    /// New criteria always restart from the first page.
    pub fn apply(&self, criteria: FilterCriteria) -> Self {
        Self::new(criteria)
    }

    pub fn goto(&self, page: u64) -> Self {
        Self { criteria: self.criteria.clone(), page: page.max(1) }
    }

    pub fn cursor(&self) -> PageCursor {
        PageCursor::new(self.page, PAGE_SIZE)
    }

    pub fn page_query(&self) -> JobsQuery {
        let cursor = self.cursor();
        JobsQuery::new(cursor.skip(), cursor.limit(), self.criteria.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_resets_page() {
        let state = JobsViewState::default().goto(4);
        assert_eq!(state.page_query().skip, 30);
        let applied = state.apply(FilterCriteria::default().with_keyword("sql"));
        assert_eq!(applied.page, 1);
        assert_eq!(applied.page_query().skip, 0);
        assert_eq!(applied.page_query().limit, PAGE_SIZE);
    }

    #[test]
    fn goto_keeps_criteria() {
        let state = JobsViewState::new(FilterCriteria::default().with_country("IN")).goto(0);
        assert_eq!(state.page, 1);
        assert_eq!(state.criteria.countries.len(), 1);
    }
}

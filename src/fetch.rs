/*
 * SPDX-FileCopyrightText: 2025 ViecLam Team <dev@vieclam.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use connector::{ApiError, Paged};

/// One page of a fetched list plus the pagination totals and the error
/// banner, if the last fetch failed.
#[derive(Debug)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub total_pages: i64,
    pub page: i64,
    pub limit: i64,
    pub error: Option<String>,
}

impl<T> ListState<T> {
    pub fn new(page: i64, limit: i64) -> ListState<T> {
        ListState {
            items: Vec::new(),
            total: 0,
            total_pages: 0,
            page,
            limit,
            error: None,
        }
    }

    /// Folds a fetch result into the state. A failure clears the items
    /// rather than showing a stale page next to an error banner.
    pub fn apply(&mut self, result: Result<Paged<T>, ApiError>) {
        match result {
            Ok(paged) => {
                self.total = paged.pagination.total;
                self.total_pages = if paged.pagination.total_pages > 0 {
                    paged.pagination.total_pages
                } else {
                    pages_for(paged.pagination.total, self.limit)
                };
                self.items = paged.data;
                self.error = None;
            }
            Err(err) => {
                self.items = Vec::new();
                self.total = 0;
                self.total_pages = 0;
                self.error = Some(err.to_string());
            }
        }
    }

    pub fn has_more(&self) -> bool {
        self.page < self.total_pages
    }
}

pub fn pages_for(total: i64, limit: i64) -> i64 {
    if limit <= 0 || total <= 0 {
        return 0;
    }
    (total + limit - 1) / limit
}

#[cfg(test)]
mod tests {
    use super::*;
    use connector::Pagination;

    fn page_of(items: Vec<&str>, pagination: Pagination) -> Paged<String> {
        Paged {
            success: true,
            message: None,
            data: items.into_iter().map(String::from).collect(),
            pagination,
        }
    }

    #[test]
    fn test_apply_ok_populates_totals() {
        let mut state = ListState::new(2, 10);
        state.apply(Ok(page_of(
            vec!["a", "b"],
            Pagination {
                page: 2,
                limit: 10,
                total: 35,
                total_pages: 4,
            },
        )));

        assert_eq!(state.items.len(), 2);
        assert_eq!(state.total, 35);
        assert_eq!(state.total_pages, 4);
        assert!(state.has_more());
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_missing_total_pages_is_recomputed() {
        let mut state = ListState::new(1, 10);
        state.apply(Ok(page_of(
            vec!["a"],
            Pagination {
                page: 1,
                limit: 10,
                total: 35,
                total_pages: 0,
            },
        )));

        assert_eq!(state.total_pages, 4);
    }

    #[test]
    fn test_apply_err_clears_items_and_sets_message() {
        let mut state = ListState::new(1, 10);
        state.apply(Ok(page_of(
            vec!["a", "b", "c"],
            Pagination {
                page: 1,
                limit: 10,
                total: 3,
                total_pages: 1,
            },
        )));
        assert_eq!(state.items.len(), 3);

        state.apply(Err(ApiError::Server(
            "Lỗi khi lấy danh sách việc làm".to_string(),
        )));
        assert!(state.items.is_empty());
        assert_eq!(state.total, 0);
        assert_eq!(state.total_pages, 0);
        assert_eq!(
            state.error.as_deref(),
            Some("Lỗi khi lấy danh sách việc làm")
        );

        // A later successful fetch drops the banner again.
        state.apply(Ok(page_of(
            vec!["d"],
            Pagination {
                page: 1,
                limit: 10,
                total: 1,
                total_pages: 1,
            },
        )));
        assert_eq!(state.error, None);
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn test_pages_for() {
        assert_eq!(pages_for(35, 10), 4);
        assert_eq!(pages_for(30, 10), 3);
        assert_eq!(pages_for(1, 12), 1);
        assert_eq!(pages_for(0, 10), 0);
        assert_eq!(pages_for(10, 0), 0);
    }
}

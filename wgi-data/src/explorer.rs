//! Data explorer view logic: search, sort and pagination over ranked rows.
//!
//! The pipeline is always filter → sort → paginate. Changing the search term,
//! the dataset or the page size sends the user back to the first page.

use serde::Serialize;
use std::cmp::Ordering;
use wgi_core::observation::ProvinceObservation;

/// Page sizes offered by the pagination bar.
pub const ROWS_PER_PAGE_OPTIONS: [usize; 3] = [5, 10, 25];

/// Default page size.
pub const DEFAULT_ROWS_PER_PAGE: usize = 10;

/// Keep rows whose province contains `term`, ignoring case. The term is
/// matched as typed, surrounding spaces included.
pub fn filter_by_province(rows: &[ProvinceObservation], term: &str) -> Vec<ProvinceObservation> {
    let needle = term.to_lowercase();
    rows.iter()
        .filter(|r| needle.is_empty() || r.province.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Column a table can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SortKey {
    Province,
    Value,
    Rank,
    Change,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Province => "Provinsi",
            SortKey::Value => "Nilai",
            SortKey::Rank => "Peringkat",
            SortKey::Change => "Perubahan",
        }
    }

    fn compare(&self, a: &ProvinceObservation, b: &ProvinceObservation) -> Ordering {
        match self {
            SortKey::Province => a.province.cmp(&b.province),
            SortKey::Value => a.value.total_cmp(&b.value),
            SortKey::Rank => a.rank.cmp(&b.rank),
            SortKey::Change => a.change.total_cmp(&b.change),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Arrow shown next to the active column header.
    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            key: SortKey::Province,
            direction: SortDirection::Asc,
        }
    }
}

impl SortConfig {
    /// Header click: the active column flips from ascending to descending,
    /// anything else starts ascending.
    pub fn request(self, key: SortKey) -> SortConfig {
        let direction = if self.key == key && self.direction == SortDirection::Asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        SortConfig { key, direction }
    }

    /// Arrow for `key` if it is the active column.
    pub fn indicator(&self, key: SortKey) -> Option<&'static str> {
        (self.key == key).then(|| self.direction.arrow())
    }
}

/// Stable sort by the configured column.
pub fn sort_rows(rows: &mut [ProvinceObservation], config: SortConfig) {
    rows.sort_by(|a, b| {
        let ord = config.key.compare(a, b);
        match config.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    /// Zero-based page index.
    pub page: usize,
    pub rows_per_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 0,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }
}

impl Pagination {
    pub fn first_page(self) -> Pagination {
        Pagination { page: 0, ..self }
    }

    /// New page size; always returns to the first page.
    pub fn with_rows_per_page(self, rows_per_page: usize) -> Pagination {
        Pagination {
            page: 0,
            rows_per_page: rows_per_page.max(1),
        }
    }

    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.rows_per_page.max(1))
    }

    fn bounds(&self, len: usize) -> (usize, usize) {
        let size = self.rows_per_page.max(1);
        let start = self.page.saturating_mul(size).min(len);
        let end = start.saturating_add(size).min(len);
        (start, end)
    }

    /// Rows of the current page; empty once past the last page.
    pub fn slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let (start, end) = self.bounds(rows.len());
        &rows[start..end]
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self, len: usize) -> bool {
        self.page + 1 < self.page_count(len)
    }

    /// `"{from}-{to} dari {count}"`, 1-based and inclusive.
    pub fn label(&self, len: usize) -> String {
        let (start, end) = self.bounds(len);
        let from = if end > start { start + 1 } else { 0 };
        format!("{}-{} dari {}", from, end, len)
    }
}

/// Everything the explorer renders for one state of its controls.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerView {
    /// Filtered and sorted rows.
    pub rows: Vec<ProvinceObservation>,
    /// Rows on the current page.
    pub page_rows: Vec<ProvinceObservation>,
}

impl ExplorerView {
    pub fn derive(
        data: &[ProvinceObservation],
        search: &str,
        sort: SortConfig,
        pagination: Pagination,
    ) -> Self {
        let mut rows = filter_by_province(data, search);
        sort_rows(&mut rows, sort);
        let page_rows = pagination.slice(&rows).to_vec();
        Self { rows, page_rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Layout of the explorer's result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Grid,
    Table,
}

/// Explorer tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerTab {
    Data,
    Chart,
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgi_core::observation::Trend;

    fn row(province: &str, value: f64, rank: usize, change: f64) -> ProvinceObservation {
        ProvinceObservation {
            province: province.to_string(),
            value,
            year: "2021".to_string(),
            trend: Trend::Down,
            change,
            rank,
        }
    }

    fn sample() -> Vec<ProvinceObservation> {
        vec![
            row("Jawa Barat", 48.2, 1, 1.5),
            row("Jawa Timur", 40.6, 2, 7.0),
            row("Jawa Tengah", 36.5, 3, 3.2),
            row("Sumatra Utara", 14.8, 4, 0.4),
            row("Banten", 11.9, 5, 9.9),
            row("DKI Jakarta", 10.5, 6, 2.2),
        ]
    }

    fn names(rows: &[ProvinceObservation]) -> Vec<&str> {
        rows.iter().map(|r| r.province.as_str()).collect()
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let rows = sample();
        assert_eq!(names(&filter_by_province(&rows, "JAWA")).len(), 3);
        assert_eq!(names(&filter_by_province(&rows, "jakarta")), vec!["DKI Jakarta"]);
        assert_eq!(names(&filter_by_province(&rows, "tara")), vec!["Sumatra Utara"]);
        assert_eq!(filter_by_province(&rows, "").len(), rows.len());
        assert!(filter_by_province(&rows, "Papua").is_empty());
    }

    #[test]
    fn test_filter_keeps_spaces_in_term() {
        let rows = sample();
        assert!(filter_by_province(&rows, " jawa").is_empty());
        assert_eq!(names(&filter_by_province(&rows, "jawa ")).len(), 3);
        assert_eq!(names(&filter_by_province(&rows, "dki jak")), vec!["DKI Jakarta"]);
    }

    #[test]
    fn test_sort_with_nan_values_is_reversible() {
        let mut data = sample();
        data.push(row("Aceh", f64::NAN, 7, f64::NAN));
        data.push(row("Riau", f64::INFINITY, 8, -1.0));
        for key in [SortKey::Value, SortKey::Change] {
            let mut asc = data.clone();
            sort_rows(&mut asc, SortConfig { key, direction: SortDirection::Asc });
            let mut desc = data.clone();
            sort_rows(&mut desc, SortConfig { key, direction: SortDirection::Desc });
            desc.reverse();
            assert_eq!(names(&asc), names(&desc), "column {:?}", key);
            assert_eq!(asc.last().map(|r| r.province.as_str()), Some("Aceh"));
        }
    }

    #[test]
    fn test_request_toggles_direction() {
        let config = SortConfig::default();
        let flipped = config.request(SortKey::Province);
        assert_eq!(flipped.direction, SortDirection::Desc);
        let back = flipped.request(SortKey::Province);
        assert_eq!(back.direction, SortDirection::Asc);
        let other = flipped.request(SortKey::Value);
        assert_eq!(other, SortConfig { key: SortKey::Value, direction: SortDirection::Asc });
        assert_eq!(other.indicator(SortKey::Value), Some("↑"));
        assert_eq!(other.indicator(SortKey::Rank), None);
    }

    #[test]
    fn test_sort_is_reversible_per_column() {
        for key in [SortKey::Province, SortKey::Value, SortKey::Rank, SortKey::Change] {
            let mut asc = sample();
            sort_rows(&mut asc, SortConfig { key, direction: SortDirection::Asc });
            let mut desc = sample();
            sort_rows(&mut desc, SortConfig { key, direction: SortDirection::Desc });
            desc.reverse();
            assert_eq!(asc, desc, "column {:?}", key);
        }
    }

    #[test]
    fn test_sort_is_stable() {
        let mut rows = vec![
            row("B", 1.0, 1, 0.0),
            row("A", 2.0, 2, 0.0),
            row("C", 1.0, 3, 0.0),
        ];
        sort_rows(&mut rows, SortConfig { key: SortKey::Change, direction: SortDirection::Asc });
        assert_eq!(names(&rows), vec!["B", "A", "C"]);
        sort_rows(&mut rows, SortConfig { key: SortKey::Value, direction: SortDirection::Asc });
        assert_eq!(names(&rows), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_pagination_slices() {
        let rows: Vec<u32> = (0..23).collect();
        let p = Pagination { page: 0, rows_per_page: 10 };
        assert_eq!(p.slice(&rows), &rows[0..10]);
        assert_eq!(p.page_count(rows.len()), 3);
        let last = Pagination { page: 2, ..p };
        assert_eq!(last.slice(&rows), &rows[20..23]);
        assert!(!last.has_next(rows.len()));
        assert!(last.has_previous());
        let past = Pagination { page: 3, ..p };
        assert!(past.slice(&rows).is_empty());
    }

    #[test]
    fn test_pagination_label() {
        let p = Pagination { page: 1, rows_per_page: 5 };
        assert_eq!(p.label(34), "6-10 dari 34");
        assert_eq!(Pagination { page: 6, rows_per_page: 5 }.label(34), "31-34 dari 34");
        assert_eq!(Pagination::default().label(0), "0-0 dari 0");
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let p = Pagination { page: 3, rows_per_page: 5 }.with_rows_per_page(25);
        assert_eq!(p, Pagination { page: 0, rows_per_page: 25 });
        assert_eq!(Pagination { page: 2, rows_per_page: 5 }.first_page().page, 0);
    }

    #[test]
    fn test_explorer_view_pipeline() {
        let data = sample();
        let view = ExplorerView::derive(
            &data,
            "jawa",
            SortConfig { key: SortKey::Value, direction: SortDirection::Asc },
            Pagination { page: 0, rows_per_page: 2 },
        );
        assert_eq!(names(&view.rows), vec!["Jawa Tengah", "Jawa Timur", "Jawa Barat"]);
        assert_eq!(names(&view.page_rows), vec!["Jawa Tengah", "Jawa Timur"]);
        assert!(!view.is_empty());
    }
}

pub mod aggregate;
pub mod filter;
pub mod paginate;

pub use aggregate::{
    aggregate, aggregate_with_groups, AgingBucket, AgingRule, AggregateBucket, AggregateReport,
    BalanceRule, BucketRule, StockRule, AGING_COLUMNS,
};
pub use filter::{filter, parse_date_arg, FilterCriteria, DATE_FORMAT};
pub use paginate::{slice, total_pages, Page, PageWindow, DEFAULT_PAGE_SIZE};

use crate::error::Result;
use crate::record::Record;

/// View state of one list or report page: the criteria and the window.
///
/// Holds no records. Every read takes the current store snapshot, so
/// mutations between reads are picked up without any cache to invalidate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataView {
    criteria: FilterCriteria,
    window: PageWindow,
}

impl DataView {
    pub fn new(page_size: usize) -> Result<Self> {
        Ok(Self {
            criteria: FilterCriteria::default(),
            window: PageWindow::new(page_size)?,
        })
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn window(&self) -> PageWindow {
        self.window
    }

    /// Replace the criteria; the window returns to page 1.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        if criteria != self.criteria {
            self.window.reset();
        }
        self.criteria = criteria;
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        self.window.set_page_size(page_size)
    }

    /// Request `page` without clamping; reads clamp it against the data.
    pub fn set_page(&mut self, page: usize) {
        self.window.go_to(page);
    }

    /// Jump to `page`, clamped against the rows currently matching.
    pub fn go_to<R: Record>(&mut self, records: &[R], page: usize) {
        let count = self.filtered(records).len();
        self.window.go_to(page);
        self.window.clamp(count);
    }

    pub fn filtered<'a, R: Record>(&self, records: &'a [R]) -> Vec<&'a R> {
        filter(records, &self.criteria)
    }

    /// The visible page of the filtered records.
    pub fn page<'a, R: Record>(&self, records: &'a [R]) -> Page<&'a R> {
        let rows = self.filtered(records);
        self.paginate(rows)
    }

    /// Group the filtered records with `rule`.
    pub fn aggregate<R: Record, B: BucketRule<R>>(
        &self,
        records: &[R],
        rule: &B,
    ) -> AggregateReport {
        aggregate(&self.filtered(records), rule)
    }

    /// Paginate any derived sequence (filtered rows or report buckets).
    ///
    /// The page is clamped so a shrinking sequence never shows a blank page.
    pub fn paginate<T: Clone>(&self, items: Vec<T>) -> Page<T> {
        let mut window = self.window;
        window.clamp(items.len());
        Page {
            items: slice(&items, window.page(), window.page_size()).to_vec(),
            page: window.page(),
            page_size: window.page_size(),
            total_pages: total_pages(items.len(), window.page_size()),
            total_count: items.len(),
        }
    }
}

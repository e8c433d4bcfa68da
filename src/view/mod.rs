pub mod search;

pub use search::Searchable;

use serde::Serialize;
use std::io::Write;

pub const PAGE_SIZE: usize = 25;

/// Per-page view state for an entity listing: the fetched rows plus the
/// free-text search string and the 1-based page the user is looking at.
/// Filtering and pagination happen here, over the full unfiltered list the
/// API returns.
#[derive(Debug)]
pub struct ListView<T> {
    rows: Vec<T>,
    search: String,
    page: usize,
}

impl<T: Searchable> ListView<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self {
            rows,
            search: String::new(),
            page: 1,
        }
    }

    /// Replace the rows after a refetch, keeping the search but snapping
    /// back to the first page.
    pub fn set_rows(&mut self, rows: Vec<T>) {
        self.rows = rows;
        self.page = 1;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Rows matching the current search, in their original order.
    pub fn filtered(&self) -> Vec<&T> {
        let needle = self.search.to_lowercase();
        self.rows.iter().filter(|row| row.matches(&needle)).collect()
    }

    pub fn total_pages(&self) -> usize {
        self.filtered().len().div_ceil(PAGE_SIZE)
    }

    /// The page-size-25 slice of the filtered rows for the current page.
    pub fn current_page(&self) -> Vec<&T> {
        self.filtered()
            .into_iter()
            .skip((self.page - 1) * PAGE_SIZE)
            .take(PAGE_SIZE)
            .collect()
    }

    pub fn next_page(&mut self) {
        if self.page < self.total_pages() {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Export every filtered row (not just the current page) as CSV with a
    /// header row, ready to open in a spreadsheet.
    pub fn export_csv<W: Write>(&self, writer: W) -> Result<(), csv::Error>
    where
        T: Serialize,
    {
        let mut wtr = csv::Writer::from_writer(writer);
        for row in self.filtered() {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

//! Append-only, capacity-bounded table of rows.

use tracing::{debug, trace};

use crate::pager::Pager;
use crate::{Error, ROW_SIZE, ROWS_PER_PAGE, Result, Row, TABLE_MAX_ROWS};

#[derive(Debug, Default)]
pub struct Table {
    pager: Pager,
    num_rows: usize,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.num_rows
    }

    pub fn is_empty(&self) -> bool {
        self.num_rows == 0
    }

    pub fn capacity(&self) -> usize {
        TABLE_MAX_ROWS
    }

    /// Appends `row` after the last stored row.
    ///
    /// Fails with [`Error::TableFull`] once `TABLE_MAX_ROWS` rows are stored,
    /// leaving the table untouched.
    pub fn insert(&mut self, row: &Row) -> Result<()> {
        if self.num_rows >= TABLE_MAX_ROWS {
            debug!(rows = self.num_rows, "insert rejected, table full");
            return Err(Error::TableFull);
        }

        let (page_num, offset) = row_slot(self.num_rows);
        let page = self.pager.page_mut(page_num).ok_or(Error::TableFull)?;
        row.serialize(&mut page[offset..offset + ROW_SIZE]);
        trace!(row_num = self.num_rows, page_num, offset, id = row.id, "row stored");

        self.num_rows += 1;
        Ok(())
    }

    /// Iterates over all rows in insertion order.
    pub fn scan(&self) -> Cursor<'_> {
        Cursor {
            table: self,
            row_num: 0,
        }
    }

    fn row(&self, row_num: usize) -> Option<Row> {
        if row_num >= self.num_rows {
            return None;
        }
        let (page_num, offset) = row_slot(row_num);
        let page = self.pager.page(page_num)?;
        Some(Row::deserialize(&page[offset..offset + ROW_SIZE]))
    }
}

/// Page number and byte offset of row `row_num`. Rows never straddle pages.
fn row_slot(row_num: usize) -> (usize, usize) {
    let page_num = row_num / ROWS_PER_PAGE;
    let offset = (row_num % ROWS_PER_PAGE) * ROW_SIZE;
    (page_num, offset)
}

/// Lazy position over a table's rows, decoding one row per step.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    table: &'a Table,
    row_num: usize,
}

impl Cursor<'_> {
    pub fn end_of_table(&self) -> bool {
        self.row_num >= self.table.num_rows
    }
}

impl Iterator for Cursor<'_> {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        let row = self.table.row(self.row_num)?;
        self.row_num += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.table.num_rows.saturating_sub(self.row_num);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Cursor<'_> {}

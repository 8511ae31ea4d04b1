// src/table.rs
//
// In-memory table: optional header row + data rows.
// Rows may be ragged; readers never pad, writers never assume a width.

use crate::core::sanitize::header_key;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn new(headers: Option<Vec<String>>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn row_count(&self) -> usize { self.rows.len() }

    pub fn header_count(&self) -> usize {
        self.headers.as_ref().map(|h| h.len()).unwrap_or(0)
    }

    /// Widest of header row and data rows.
    pub fn col_count(&self) -> usize {
        let widest = self.rows.iter().map(|r| r.len()).max().unwrap_or(0);
        widest.max(self.header_count())
    }

    /// Column index by header name: exact match first, then a
    /// case/whitespace-insensitive match.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let headers = self.headers.as_ref()?;
        if let Some(i) = headers.iter().position(|h| h == name) {
            return Some(i);
        }
        let key = header_key(name);
        headers.iter().position(|h| header_key(h) == key)
    }

    /// Cell as an optional description: missing or blank cells are absent.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(|c| c.as_str())
            .filter(|c| !c.trim().is_empty())
    }

    /// Overwrite the column named `name` if it exists (exact match), otherwise
    /// append a new one. `values` must have one entry per row.
    pub fn set_column(&mut self, name: &str, values: Vec<String>) {
        debug_assert_eq!(values.len(), self.rows.len());
        let width = self.col_count();
        let headers = self.headers.get_or_insert_with(Vec::new);

        let ix = match headers.iter().position(|h| h == name) {
            Some(i) => i,
            None => {
                // Pad a short header row so the new column lines up with the data.
                headers.resize(width, s!());
                headers.push(s!(name));
                width
            }
        };

        for (row, value) in self.rows.iter_mut().zip(values) {
            if row.len() <= ix {
                row.resize(ix + 1, s!());
            }
            row[ix] = value;
        }
    }

    /// Keep only the given columns, in the given order.
    pub fn project(&self, cols: &[usize]) -> DataSet {
        let pick = |r: &Vec<String>| -> Vec<String> {
            cols.iter().map(|&c| r.get(c).cloned().unwrap_or_default()).collect()
        };
        DataSet {
            headers: self.headers.as_ref().map(&pick),
            rows: self.rows.iter().map(&pick).collect(),
        }
    }
}

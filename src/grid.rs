use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Read access over one rectangular worksheet.
///
/// Coordinates are 1-based, matching spreadsheet convention: `cell(1, 1)`
/// is A1. `None` means the cell is empty or outside the sheet; the pipeline
/// never distinguishes the two cases.
pub trait SheetGrid {
    /// Sheet title, used in every failure message.
    fn name(&self) -> &str;
    fn row_count(&self) -> u32;
    fn col_count(&self) -> u32;
    fn cell(&self, row: u32, col: u32) -> Option<&str>;
}

/// A single cell coordinate (1-based row and column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRef {
    pub row: u32,
    pub col: u32,
}

impl CellRef {
    pub const fn new(row: u32, col: u32) -> Self {
        CellRef { row, col }
    }

    /// A1-style reference (e.g. row 21, col 9 -> "I21").
    pub fn a1(&self) -> String {
        format!("{}{}", column_letter(self.col), self.row)
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.a1())
    }
}

/// Convert a 1-based column index to Excel column letters (A, B, ..., Z, AA, AB, ...)
///
/// Column 0 does not exist in the 1-based scheme; callers must pass 1 or
/// greater.
pub fn column_letter(col: u32) -> String {
    debug_assert!(col > 0, "column indices are 1-based");
    let mut result = String::new();
    let mut n = col;

    while n > 0 {
        n -= 1;
        let c = (b'A' + (n % 26) as u8) as char;
        result.insert(0, c);
        n /= 26;
    }

    result
}

/// In-memory `SheetGrid` backed by a cell map.
///
/// The natural carrier for tests and for adapters that have already pulled
/// a sheet's used range out of a concrete file format.
#[derive(Debug, Clone, Default)]
pub struct MemoryGrid {
    name: String,
    cells: HashMap<(u32, u32), String>,
    row_count: u32,
    col_count: u32,
}

impl MemoryGrid {
    pub fn new(name: impl Into<String>) -> Self {
        MemoryGrid {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set a cell value; setting an empty string clears the cell.
    /// Bounds grow to cover every cell ever set.
    pub fn set(&mut self, row: u32, col: u32, value: impl Into<String>) {
        let value = value.into();
        self.row_count = self.row_count.max(row);
        self.col_count = self.col_count.max(col);
        if value.is_empty() {
            self.cells.remove(&(row, col));
        } else {
            self.cells.insert((row, col), value);
        }
    }
}

impl SheetGrid for MemoryGrid {
    fn name(&self) -> &str {
        &self.name
    }

    fn row_count(&self) -> u32 {
        self.row_count
    }

    fn col_count(&self) -> u32 {
        self.col_count
    }

    fn cell(&self, row: u32, col: u32) -> Option<&str> {
        self.cells.get(&(row, col)).map(String::as_str)
    }
}

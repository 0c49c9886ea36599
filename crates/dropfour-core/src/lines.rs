//! Precomputed table of every winning line on the board.
//!
//! The table is built once on first use and shared by reference for the
//! lifetime of the process. Each cell also records which lines pass through
//! it, so win detection after a drop only has to look at those.

use std::sync::OnceLock;

use tracing::debug;

use crate::{COLS, ROWS, WIN_LENGTH};

/// Number of distinct four-cell lines on a 6x7 board.
///
/// 24 horizontal + 21 vertical + 12 rising diagonals + 12 falling diagonals.
pub const LINE_COUNT: usize = 69;

/// Direction a line runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
    /// Bottom-left to top-right.
    DiagonalUp,
    /// Top-left to bottom-right.
    DiagonalDown,
}

/// Four `(row, col)` coordinates along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    axis: Axis,
    cells: [(usize, usize); WIN_LENGTH],
}

impl Line {
    /// The axis this line lies on.
    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The cells of the line in order.
    #[inline]
    pub fn cells(&self) -> &[(usize, usize); WIN_LENGTH] {
        &self.cells
    }
}

/// All lines plus the per-cell index of lines through each cell.
#[derive(Debug)]
pub struct LineTable {
    lines: Vec<Line>,
    through: Vec<Vec<usize>>,
}

impl LineTable {
    fn build() -> LineTable {
        let mut lines = Vec::with_capacity(LINE_COUNT);

        let mut push = |axis: Axis, row: usize, col: usize, dr: isize, dc: isize| {
            let mut cells = [(0, 0); WIN_LENGTH];
            for (i, cell) in cells.iter_mut().enumerate() {
                let r = row as isize + dr * i as isize;
                let c = col as isize + dc * i as isize;
                *cell = (r as usize, c as usize);
            }
            lines.push(Line { axis, cells });
        };

        for row in 0..ROWS {
            for col in 0..=COLS - WIN_LENGTH {
                push(Axis::Horizontal, row, col, 0, 1);
            }
        }
        for col in 0..COLS {
            for row in 0..=ROWS - WIN_LENGTH {
                push(Axis::Vertical, row, col, 1, 0);
            }
        }
        for row in WIN_LENGTH - 1..ROWS {
            for col in 0..=COLS - WIN_LENGTH {
                push(Axis::DiagonalUp, row, col, -1, 1);
            }
        }
        for row in 0..=ROWS - WIN_LENGTH {
            for col in 0..=COLS - WIN_LENGTH {
                push(Axis::DiagonalDown, row, col, 1, 1);
            }
        }

        let mut through = vec![Vec::new(); ROWS * COLS];
        for (idx, line) in lines.iter().enumerate() {
            for &(r, c) in &line.cells {
                through[r * COLS + c].push(idx);
            }
        }

        debug!(lines = lines.len(), "line table built");
        LineTable { lines, through }
    }

    /// Every line on the board.
    #[inline]
    pub fn all(&self) -> &[Line] {
        &self.lines
    }

    /// Lines passing through the cell at `(row, col)`.
    pub fn through(&self, row: usize, col: usize) -> impl Iterator<Item = &Line> + '_ {
        self.through[row * COLS + col]
            .iter()
            .map(move |&idx| &self.lines[idx])
    }
}

static LINE_TABLE: OnceLock<LineTable> = OnceLock::new();

/// The process-wide line table.
pub fn line_table() -> &'static LineTable {
    LINE_TABLE.get_or_init(LineTable::build)
}

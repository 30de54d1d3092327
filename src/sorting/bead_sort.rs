//! Bead (gravity) sort for non-negative integers.
//!
//! Every value becomes a row of beads threaded on `max` vertical rods. Letting
//! the beads fall leaves row `i` holding as many beads as the `i`-th smallest
//! value, so reading the rows top to bottom yields the ascending sequence.

use log::{debug, warn};

use crate::sorting::SortError;

/// Integer types that can be represented as a row of beads.
pub trait Bead: Copy {
    /// Number of beads on the row, `None` for negative values. Values beyond
    /// `usize` saturate at `usize::MAX`, which no grid can hold.
    fn beads(self) -> Option<usize>;

    /// Rebuilds a value from a bead count taken from a row of the same input.
    fn from_beads(count: usize) -> Self;

    fn to_i128(self) -> i128;
}

macro_rules! impl_bead {
    ($($t:ty),* $(,)?) => {
        $(
            impl Bead for $t {
                #[allow(unused_comparisons)]
                fn beads(self) -> Option<usize> {
                    if self < 0 {
                        None
                    } else {
                        Some(usize::try_from(self).unwrap_or(usize::MAX))
                    }
                }

                // Counts never exceed the largest input value, so this is lossless.
                fn from_beads(count: usize) -> Self {
                    count as $t
                }

                fn to_i128(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_bead!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// Largest number of cells a bead grid may allocate.
pub const MAX_GRID_CELLS: usize = 1 << 28;

/// Cells needed for `rows` rows over `columns` rods, `None` on overflow or
/// past `MAX_GRID_CELLS`.
pub fn grid_cells(rows: usize, columns: usize) -> Option<usize> {
    rows.checked_mul(columns).filter(|&cells| cells <= MAX_GRID_CELLS)
}

/// Whether `bead_sort` can build a grid for `a`. Negative elements are
/// ignored here; `bead_sort` rejects them on its own.
pub fn fits_grid<T: Bead>(a: &[T]) -> bool {
    let columns = a.iter().filter_map(|v| v.beads()).max().unwrap_or(0);
    grid_cells(a.len(), columns).is_some()
}

/// Row-major bead matrix: `rows` values by `columns` rods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeadGrid {
    rows: usize,
    columns: usize,
    cells: Vec<bool>,
}

impl BeadGrid {
    /// Threads `counts[i]` beads onto row `i`, starting from rod 0.
    ///
    /// # Panics
    ///
    /// Panics if the grid would need more than `MAX_GRID_CELLS` cells.
    pub fn new(counts: &[usize]) -> Self {
        let rows = counts.len();
        let columns = counts.iter().copied().max().unwrap_or(0);
        let Some(size) = grid_cells(rows, columns) else {
            panic!("bead grid of {rows} rows x {columns} rods exceeds {MAX_GRID_CELLS} cells");
        };
        let mut cells = vec![false; size];
        for (row, &count) in counts.iter().enumerate() {
            let start = row * columns;
            cells[start..start + count].fill(true);
        }
        BeadGrid {
            rows,
            columns,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn has_bead(&self, row: usize, column: usize) -> bool {
        self.cells[row * self.columns + column]
    }

    pub fn column_count(&self, column: usize) -> usize {
        (0..self.rows).filter(|&row| self.has_bead(row, column)).count()
    }

    /// Lets the beads of every rod fall to the highest row indices.
    pub fn drop_beads(&mut self) {
        for column in 0..self.columns {
            let floor = self.rows - self.column_count(column);
            for row in 0..self.rows {
                self.cells[row * self.columns + column] = row >= floor;
            }
        }
    }

    pub fn row_counts(&self) -> Vec<usize> {
        if self.columns == 0 {
            return vec![0; self.rows];
        }
        self.cells
            .chunks(self.columns)
            .map(|row| row.iter().filter(|&&bead| bead).count())
            .collect()
    }
}

/// Sorts `a` in ascending order by simulating beads falling on rods.
///
/// Negative elements are rejected before anything is written, so on error the
/// slice is left exactly as it was.
///
/// # Panics
///
/// Panics if the grid is too large, i.e. when [`fits_grid`] is false for `a`.
pub fn bead_sort<T: Bead>(a: &mut [T]) -> Result<(), SortError> {
    let counts = a
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            value.beads().ok_or(SortError::InvalidInput {
                index,
                value: value.to_i128(),
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|err| warn!("bead sort rejected input: {err}"))?;

    if counts.is_empty() {
        return Ok(());
    }

    let mut grid = BeadGrid::new(&counts);
    debug!("bead sort: {} rows x {} rods", grid.rows(), grid.columns());
    grid.drop_beads();

    for (slot, count) in a.iter_mut().zip(grid.row_counts()) {
        *slot = T::from_beads(count);
    }
    Ok(())
}

//! Per-cell usage counters.
//!
//! A usage counter records how many valid words found on a board pass through a cell. The
//! counters are result state: they live next to the board topology, are bumped by the search,
//! and are zeroed explicitly with [`UsageCounts::reset`].
//!
//! Counters are plain integers because the search is single-threaded. A parallel search would
//! need atomic increments here.

use crate::board::CellId;
use crate::errors::CellError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageCounts {
    /// Board dimension, used to report coordinates.
    size: usize,
    counts: Vec<u32>,
}

impl UsageCounts {
    /// All-zero counters for a `size`×`size` board.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self { size, counts: vec![0; size * size] }
    }

    /// Counter of `cell`, or `None` if `cell` is not on this board.
    #[must_use]
    pub fn get(&self, cell: CellId) -> Option<u32> {
        self.counts.get(cell.index()).copied()
    }

    /// Bump every cell on a path by one. Counters stop at `u32::MAX`; unknown cells are skipped.
    pub fn record_path(&mut self, path: &[CellId]) {
        for cell in path {
            if let Some(count) = self.counts.get_mut(cell.index()) {
                *count = count.saturating_add(1);
            }
        }
    }

    /// Overwrite one counter.
    ///
    /// # Errors
    ///
    /// Returns [`CellError::InvalidUsageCount`] if `count` is negative or too large to store,
    /// and [`CellError::InvalidCoordinate`] if `cell` is not on this board.
    pub fn set(&mut self, cell: CellId, count: i64) -> Result<(), CellError> {
        let value = u32::try_from(count).map_err(|_| CellError::InvalidUsageCount {
            cell: cell.index(),
            count,
        })?;
        let size = self.size;
        let slot = self.counts.get_mut(cell.index()).ok_or_else(|| CellError::InvalidCoordinate {
            row: i64::try_from(cell.index() / size.max(1)).unwrap_or(i64::MAX),
            col: i64::try_from(cell.index() % size.max(1)).unwrap_or(i64::MAX),
            size,
        })?;
        *slot = value;
        Ok(())
    }

    /// Zero every counter.
    pub fn reset(&mut self) {
        self.counts.fill(0);
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    /// `(cell, count)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (CellId, u32)> + '_ {
        self.counts.iter().enumerate().map(|(i, &c)| (CellId::new(i), c))
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_path_and_reset() {
        let mut usage = UsageCounts::new(2);
        usage.record_path(&[CellId::new(0), CellId::new(1)]);
        usage.record_path(&[CellId::new(1), CellId::new(3)]);

        assert_eq!(usage.as_slice(), &[1, 2, 0, 1]);
        assert_eq!(usage.total(), 4);

        usage.reset();
        assert_eq!(usage.as_slice(), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_set_rejects_negative() {
        let mut usage = UsageCounts::new(1);
        let err = usage.set(CellId::new(0), -1).unwrap_err();

        assert!(matches!(err, CellError::InvalidUsageCount { cell: 0, count: -1 }));
        assert_eq!(usage.get(CellId::new(0)), Some(0));
    }

    #[test]
    fn test_set_rejects_unknown_cell() {
        let mut usage = UsageCounts::new(2);
        let err = usage.set(CellId::new(5), 3).unwrap_err();

        assert!(matches!(err, CellError::InvalidCoordinate { row: 2, col: 1, size: 2 }));
    }

    #[test]
    fn test_set_overwrites() {
        let mut usage = UsageCounts::new(1);
        usage.set(CellId::new(0), 7).unwrap();

        assert_eq!(usage.get(CellId::new(0)), Some(7));
        assert_eq!(usage.iter().collect::<Vec<_>>(), vec![(CellId::new(0), 7)]);
    }

    #[test]
    fn test_record_path_saturates() {
        let mut usage = UsageCounts::new(1);
        usage.set(CellId::new(0), i64::from(u32::MAX)).unwrap();
        usage.record_path(&[CellId::new(0)]);

        assert_eq!(usage.get(CellId::new(0)), Some(u32::MAX));
    }

    #[test]
    fn test_unknown_cell_is_not_counted() {
        let mut usage = UsageCounts::new(2);
        usage.record_path(&[CellId::new(1), CellId::new(4)]);

        assert_eq!(usage.get(CellId::new(4)), None);
        assert_eq!(usage.as_slice(), &[0, 1, 0, 0]);
    }
}

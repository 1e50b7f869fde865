//! Cartesian product of evenly spaced levels for the five setup parameters.

use pitwall_core::constants::DIMENSIONS;
use pitwall_core::{SetupVector, ValidationError};
use rayon::prelude::*;

/// A finite, restartable grid of setups.
///
/// Levels are `i / step_count` for `i` in `(0..=step_count).step_by(stride)`.
/// Points are numbered in nested-loop order with front wing outermost and
/// toe-out innermost, so any index range can be enumerated independently.
#[derive(Debug, Clone, PartialEq)]
pub struct SetupGrid {
    step_count: usize,
    stride: usize,
    levels: Vec<f64>,
}

impl SetupGrid {
    pub fn new(step_count: usize, stride: usize) -> Result<Self, ValidationError> {
        if step_count == 0 || stride == 0 {
            return Err(ValidationError::InvalidGrid { step_count, stride });
        }
        let levels = (0..=step_count)
            .step_by(stride)
            .map(|i| i as f64 / step_count as f64)
            .collect();
        Ok(Self {
            step_count,
            stride,
            levels,
        })
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Distinct values each parameter takes.
    pub fn levels(&self) -> &[f64] {
        &self.levels
    }

    /// Number of grid points: `levels^5`.
    pub fn len(&self) -> usize {
        self.levels.len().pow(DIMENSIONS as u32)
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Decode a point index into its setup.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn point(&self, index: usize) -> SetupVector {
        assert!(index < self.len(), "grid index {index} out of range");
        let radix = self.levels.len();
        let mut values = [0.0; DIMENSIONS];
        let mut rest = index;
        for slot in values.iter_mut().rev() {
            *slot = self.levels[rest % radix];
            rest /= radix;
        }
        SetupVector::from_array(values)
    }

    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            next: 0,
            end: self.len(),
        }
    }

    /// Indexed points, split across the rayon pool.
    pub fn par_points(&self) -> impl IndexedParallelIterator<Item = (usize, SetupVector)> + '_ {
        (0..self.len())
            .into_par_iter()
            .map(move |index| (index, self.point(index)))
    }
}

/// Sequential iterator over a grid's setups.
#[derive(Debug, Clone)]
pub struct GridIter<'a> {
    grid: &'a SetupGrid,
    next: usize,
    end: usize,
}

impl Iterator for GridIter<'_> {
    type Item = SetupVector;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let setup = self.grid.point(self.next);
        self.next += 1;
        Some(setup)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GridIter<'_> {}

impl<'a> IntoIterator for &'a SetupGrid {
    type Item = SetupVector;
    type IntoIter = GridIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_grid_has_six_levels() {
        let grid = SetupGrid::new(10, 2).unwrap();
        assert_eq!(grid.levels(), &[0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
        assert_eq!(grid.len(), 7776);
    }

    #[test]
    fn full_grid_size() {
        let grid = SetupGrid::new(20, 1).unwrap();
        assert_eq!(grid.levels().len(), 21);
        assert_eq!(grid.len(), 4_084_101);
        assert_eq!(grid.levels()[10], 0.5);
    }

    #[test]
    fn zero_step_or_stride_is_rejected() {
        assert!(matches!(
            SetupGrid::new(0, 1),
            Err(ValidationError::InvalidGrid { .. })
        ));
        assert!(SetupGrid::new(4, 0).is_err());
    }

    #[test]
    fn points_follow_nested_loop_order() {
        let grid = SetupGrid::new(1, 1).unwrap();
        assert_eq!(grid.point(0).to_array(), [0.0; 5]);
        assert_eq!(grid.point(1).to_array(), [0.0, 0.0, 0.0, 0.0, 1.0]);
        assert_eq!(grid.point(2).to_array(), [0.0, 0.0, 0.0, 1.0, 0.0]);
        assert_eq!(grid.point(31).to_array(), [1.0; 5]);
    }

    #[test]
    fn iterator_is_restartable_and_exact() {
        let grid = SetupGrid::new(2, 1).unwrap();
        let first: Vec<_> = grid.iter().collect();
        let second: Vec<_> = (&grid).into_iter().collect();
        assert_eq!(first.len(), 243);
        assert_eq!(grid.iter().len(), 243);
        assert_eq!(first, second);
    }

    #[test]
    fn parallel_points_match_sequential() {
        let grid = SetupGrid::new(3, 1).unwrap();
        let par: Vec<_> = grid.par_points().map(|(_, s)| s).collect();
        let seq: Vec<_> = grid.iter().collect();
        assert_eq!(par, seq);
    }
}

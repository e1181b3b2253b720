//! Evenly spaced samples of added titrant volume.
//!
//! A [`VolumeGrid`] is a small `Copy` value; every call to [`VolumeGrid::iter`]
//! starts a fresh lazy pass over the same samples.
use super::titration_error::{TitrationError, require_non_negative};

/// whether the upper bound belongs to the interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalKind {
    /// [lo, hi): `hi` belongs to the next regime
    HalfOpen,
    /// [lo, hi]
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeInterval {
    pub lo: f64,
    pub hi: f64,
    pub kind: IntervalKind,
}

impl VolumeInterval {
    pub fn half_open(lo: f64, hi: f64) -> Self {
        Self {
            lo,
            hi,
            kind: IntervalKind::HalfOpen,
        }
    }

    pub fn closed(lo: f64, hi: f64) -> Self {
        Self {
            lo,
            hi,
            kind: IntervalKind::Closed,
        }
    }

    pub fn contains(&self, volume: f64) -> bool {
        match self.kind {
            IntervalKind::HalfOpen => self.lo <= volume && volume < self.hi,
            IntervalKind::Closed => self.lo <= volume && volume <= self.hi,
        }
    }

    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }

    fn validate(&self) -> Result<(), TitrationError> {
        require_non_negative("interval lower bound", self.lo)?;
        require_non_negative("interval upper bound", self.hi)?;
        let ordered = match self.kind {
            IntervalKind::HalfOpen => self.lo < self.hi,
            IntervalKind::Closed => self.lo <= self.hi,
        };
        if ordered {
            Ok(())
        } else {
            Err(TitrationError::domain(format!(
                "empty volume interval {:?} [{}, {}]",
                self.kind, self.lo, self.hi
            )))
        }
    }
}

/// `n` evenly spaced volumes over an interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeGrid {
    interval: VolumeInterval,
    n: usize,
    step: f64,
}

impl VolumeGrid {
    /// # Errors
    /// `DomainError` for `n == 0` or an empty/negative interval.
    pub fn new(interval: VolumeInterval, n: usize) -> Result<Self, TitrationError> {
        if n == 0 {
            return Err(TitrationError::domain(
                "a volume grid needs at least one sample",
            ));
        }
        interval.validate()?;
        let step = match interval.kind {
            IntervalKind::HalfOpen => interval.width() / n as f64,
            IntervalKind::Closed if n == 1 => 0.0,
            IntervalKind::Closed => interval.width() / (n - 1) as f64,
        };
        Ok(Self { interval, n, step })
    }

    pub fn interval(&self) -> VolumeInterval {
        self.interval
    }

    /// number of samples, never zero
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn iter(&self) -> VolumeGridIter {
        VolumeGridIter {
            grid: *self,
            index: 0,
        }
    }

    fn volume_at(&self, index: usize) -> f64 {
        // the closed upper bound is hit exactly, not up to rounding
        if self.interval.kind == IntervalKind::Closed && self.n > 1 && index == self.n - 1 {
            return self.interval.hi;
        }
        self.interval.lo + index as f64 * self.step
    }
}

impl IntoIterator for &VolumeGrid {
    type Item = f64;
    type IntoIter = VolumeGridIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone)]
pub struct VolumeGridIter {
    grid: VolumeGrid,
    index: usize,
}

impl Iterator for VolumeGridIter {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.index >= self.grid.n {
            return None;
        }
        let volume = self.grid.volume_at(self.index);
        self.index += 1;
        Some(volume)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.grid.n - self.index;
        (left, Some(left))
    }
}

impl ExactSizeIterator for VolumeGridIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_half_open_excludes_upper_bound() {
        let grid = VolumeGrid::new(VolumeInterval::half_open(0.0, 1.0), 4).unwrap();
        let v: Vec<f64> = grid.iter().collect();
        assert_eq!(v.len(), 4);
        for (got, expected) in v.iter().zip([0.0, 0.25, 0.5, 0.75]) {
            assert_relative_eq!(*got, expected, epsilon = 1e-15);
        }
        assert!(v.iter().all(|x| *x < 1.0));
    }

    #[test]
    fn test_closed_includes_both_bounds() {
        let grid = VolumeGrid::new(VolumeInterval::closed(0.07, 0.15), 5).unwrap();
        let v: Vec<f64> = grid.iter().collect();
        assert_eq!(v.len(), 5);
        assert_eq!(v[0], 0.07);
        assert_eq!(v[4], 0.15);
        assert_relative_eq!(v[2], 0.11, epsilon = 1e-15);
    }

    #[test]
    fn test_single_sample() {
        let closed = VolumeGrid::new(VolumeInterval::closed(0.1, 0.2), 1).unwrap();
        assert_eq!(closed.iter().collect::<Vec<_>>(), vec![0.1]);
        let half_open = VolumeGrid::new(VolumeInterval::half_open(0.1, 0.2), 1).unwrap();
        assert_eq!(half_open.iter().collect::<Vec<_>>(), vec![0.1]);
        let point = VolumeGrid::new(VolumeInterval::closed(0.1, 0.1), 3).unwrap();
        assert_eq!(point.iter().collect::<Vec<_>>(), vec![0.1, 0.1, 0.1]);
        // the smallest grid still holds one sample
        assert_eq!(closed.len(), 1);
        assert_eq!(half_open.iter().len(), 1);
    }

    #[test]
    fn test_grid_is_restartable_and_ascending() {
        let grid = VolumeGrid::new(VolumeInterval::half_open(0.035, 0.0705), 100).unwrap();
        let first: Vec<f64> = grid.iter().collect();
        let second: Vec<f64> = (&grid).into_iter().collect();
        assert_eq!(first, second);
        assert!(first.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(grid.iter().len(), 100);
        let mut it = grid.iter();
        it.next();
        assert_eq!(it.len(), 99);
    }

    #[test]
    fn test_invalid_grids() {
        assert!(VolumeGrid::new(VolumeInterval::half_open(0.0, 1.0), 0).is_err());
        assert!(VolumeGrid::new(VolumeInterval::half_open(1.0, 1.0), 3).is_err());
        assert!(VolumeGrid::new(VolumeInterval::closed(1.0, 0.5), 3).is_err());
        assert!(VolumeGrid::new(VolumeInterval::closed(-1.0, 0.5), 3).is_err());
    }

    #[test]
    fn test_interval_contains() {
        let half_open = VolumeInterval::half_open(0.0, 1.0);
        assert!(half_open.contains(0.0));
        assert!(!half_open.contains(1.0));
        let closed = VolumeInterval::closed(0.0, 1.0);
        assert!(closed.contains(1.0));
        assert!(!closed.contains(1.0 + 1e-12));
    }
}

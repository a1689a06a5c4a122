//! Descending tick value sequence.

use std::iter::FusedIterator;
use std::ops::RangeInclusive;

use crate::unit::UnitRange;

/// The values rendered by the ruler, from `max_value` down to `min_value`.
///
/// Index 0 is the top of the list and carries the largest value. The
/// sequence is not materialized; iterate it as often as needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickSequence {
    min_value: i32,
    max_value: i32,
}

impl TickSequence {
    pub fn new(min_value: i32, max_value: i32) -> Self {
        Self {
            min_value,
            max_value,
        }
    }

    pub fn for_range(range: &UnitRange) -> Self {
        Self::new(range.min_value, range.max_value)
    }

    pub fn len(&self) -> usize {
        if self.max_value < self.min_value {
            0
        } else {
            (self.max_value as i64 - self.min_value as i64 + 1) as usize
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value shown at list position `index`.
    pub fn value_at(&self, index: usize) -> Option<i32> {
        if index >= self.len() {
            return None;
        }
        Some((self.max_value as i64 - index as i64) as i32)
    }

    /// List position of `value`, if it is part of the sequence.
    pub fn index_of(&self, value: i32) -> Option<usize> {
        if value < self.min_value || value > self.max_value {
            return None;
        }
        Some((self.max_value as i64 - value as i64) as usize)
    }

    pub fn iter(&self) -> TickIter {
        TickIter {
            inner: self.min_value..=self.max_value,
        }
    }
}

impl IntoIterator for TickSequence {
    type Item = i32;
    type IntoIter = TickIter;

    fn into_iter(self) -> TickIter {
        self.iter()
    }
}

/// Iterator over a [`TickSequence`], largest value first.
#[derive(Clone, Debug)]
pub struct TickIter {
    inner: RangeInclusive<i32>,
}

impl Iterator for TickIter {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        self.inner.next_back()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for TickIter {
    fn next_back(&mut self) -> Option<i32> {
        self.inner.next()
    }
}

impl ExactSizeIterator for TickIter {}
impl FusedIterator for TickIter {}

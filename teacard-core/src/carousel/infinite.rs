//! Infinite-loop wrapper: boundary clones and post-transition re-homing.

use crate::dom::Element;

/// Class added to fabricated boundary slides.
pub const CLONE_CLASS: &str = "_carousel-clone";

/// Index bookkeeping for a track extended with `offset` clones on each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfiniteWrapper {
    offset: usize,
    real_count: usize,
}

impl InfiniteWrapper {
    /// `offset` is 0 outside infinite mode.
    pub fn new(offset: usize, real_count: usize) -> Self {
        Self { offset, real_count }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn real_count(&self) -> usize {
        self.real_count
    }

    /// Real slides plus clones on both sides.
    pub fn extended_len(&self) -> usize {
        self.real_count + 2 * self.offset
    }

    /// Prepends copies of the trailing `offset` real slides and appends
    /// copies of the leading `offset` ones. Selection wraps modulo the real
    /// count, so an offset larger than the slide count still yields exactly
    /// `offset` clones per side.
    pub fn extend(&self, real: Vec<Element>) -> Vec<Element> {
        let n = real.len();
        if n == 0 || self.offset == 0 {
            return real;
        }
        let clone_at = |i: usize| {
            let mut slide = real[i].clone();
            slide.add_class(CLONE_CLASS);
            slide
        };

        let head: Vec<Element> = (0..self.offset)
            .map(|k| clone_at((k as isize - self.offset as isize).rem_euclid(n as isize) as usize))
            .collect();
        let tail: Vec<Element> = (0..self.offset).map(|k| clone_at(k % n)).collect();

        let mut extended = Vec::with_capacity(n + 2 * self.offset);
        extended.extend(head);
        extended.extend(real);
        extended.extend(tail);
        extended
    }

    /// True when `index` sits in the prepended or appended clone region.
    pub fn is_clone_position(&self, index: usize) -> bool {
        index < self.offset || index >= self.offset + self.real_count
    }

    /// Real index `(index - offset) mod real_count`.
    pub fn real_index(&self, index: usize) -> usize {
        if self.real_count == 0 {
            return 0;
        }
        (index as isize - self.offset as isize).rem_euclid(self.real_count as isize) as usize
    }

    /// Where a settled index must jump to so it rests on a real slide, or
    /// `None` when it already does.
    pub fn rehome(&self, index: usize) -> Option<usize> {
        if self.real_count == 0 || !self.is_clone_position(index) {
            return None;
        }
        Some(self.offset + self.real_index(index))
    }
}

//! Progressive reveal of an already computed path.
//!
//! [`Reveal`] turns a finished sequence into a finite series of growing
//! prefixes, the way an animation would uncover a path one step at a time.
//! It owns no timer; the caller decides when to pull the next frame.

use std::iter::FusedIterator;

/// Lazy, restartable iterator over prefixes of `items`.
///
/// Yields prefixes of length `step`, `2 * step`, … and always ends with the
/// full slice. An empty slice yields nothing.
#[derive(Debug, Clone)]
pub struct Reveal<'a, T> {
    items: &'a [T],
    shown: usize,
    step: usize,
}

impl<'a, T> Reveal<'a, T> {
    /// Reveal one item per frame.
    pub fn new(items: &'a [T]) -> Self {
        Self::with_step(items, 1)
    }

    /// Reveal `step` items per frame. A zero step is treated as 1.
    pub fn with_step(items: &'a [T], step: usize) -> Self {
        Self {
            items,
            shown: 0,
            step: step.max(1),
        }
    }

    /// Rewind to the beginning.
    pub fn restart(&mut self) {
        self.shown = 0;
    }

    /// Number of items revealed so far.
    pub fn shown(&self) -> usize {
        self.shown
    }

    /// Whether the whole sequence has been revealed.
    pub fn is_done(&self) -> bool {
        self.shown >= self.items.len()
    }

    /// The currently revealed prefix.
    pub fn current(&self) -> &'a [T] {
        &self.items[..self.shown]
    }
}

impl<'a, T> Iterator for Reveal<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_done() {
            return None;
        }
        self.shown = (self.shown + self.step).min(self.items.len());
        Some(&self.items[..self.shown])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.items.len() - self.shown).div_ceil(self.step);
        (left, Some(left))
    }
}

impl<T> ExactSizeIterator for Reveal<'_, T> {}

impl<T> FusedIterator for Reveal<'_, T> {}

//! Viewport visibility predicates and one-way reveal tracking.
//!
//! All coordinates are CSS pixels relative to the viewport's top edge, as
//! returned by `getBoundingClientRect()`.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// Vertical extent of an element relative to the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub bottom: f64,
}

/// `true` once an element's top edge has risen at least `margin` pixels
/// above the viewport's bottom edge.
#[must_use]
pub fn entered_from_below(top: f64, viewport_height: f64, margin: f64) -> bool {
    top < viewport_height - margin
}

/// `true` when some part of `bounds` lies within the upper `fraction` of the
/// viewport.
#[must_use]
pub fn within_upper_band(bounds: Bounds, viewport_height: f64, fraction: f64) -> bool {
    bounds.top <= viewport_height * fraction && bounds.bottom >= 0.0
}

/// Tracks which of a fixed list of elements have been revealed.
///
/// Reveals are one-way: once an index is marked it stays marked and is never
/// reported again, so scrolling back up does not hide anything.
#[derive(Clone, Debug, Default)]
pub struct RevealSet {
    revealed: Vec<bool>,
}

impl RevealSet {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { revealed: vec![false; len] }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Number of elements still hidden.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.revealed.iter().filter(|r| !**r).count()
    }

    /// Test every hidden element with `is_visible` and mark the ones that
    /// pass. Returns the newly revealed indices in order. Already revealed
    /// elements are not tested again.
    pub fn sweep(&mut self, mut is_visible: impl FnMut(usize) -> bool) -> Vec<usize> {
        let mut fresh = Vec::new();
        for (index, revealed) in self.revealed.iter_mut().enumerate() {
            if !*revealed && is_visible(index) {
                *revealed = true;
                fresh.push(index);
            }
        }
        fresh
    }
}

//! Marker queue
//!
//! Cursor over an immutable, line-ordered marker list. The correlator peeks
//! at the head and only advances the cursor once a marker has been matched
//! (or is provably stale), so an unmatched marker stays available for a
//! later declaration.

use super::marker::Marker;

#[derive(Debug, Clone, Default)]
pub struct MarkerQueue {
    markers: Vec<Marker>,
    cursor: usize,
}

impl MarkerQueue {
    /// Markers must be in strictly increasing line order
    pub fn new(markers: Vec<Marker>) -> Self {
        debug_assert!(
            markers.windows(2).all(|w| w[0].line < w[1].line),
            "markers must be in strictly increasing line order"
        );
        Self { markers, cursor: 0 }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Head of the queue without consuming it
    pub fn peek(&self) -> Option<&Marker> {
        self.markers.get(self.cursor)
    }

    /// Consume the head
    pub fn pop(&mut self) -> Option<Marker> {
        let marker = self.markers.get(self.cursor).cloned();
        if marker.is_some() {
            self.cursor += 1;
        }
        marker
    }

    /// Discard every marker whose line is strictly less than `line`.
    ///
    /// Returns the number of discarded markers.
    pub fn discard_before(&mut self, line: u32) -> usize {
        let start = self.cursor;
        while self.peek().is_some_and(|m| m.line < line) {
            self.cursor += 1;
        }
        self.cursor - start
    }

    /// Discard leading property markers whose line is strictly less than
    /// `line`, stopping at the first class marker.
    pub fn discard_properties_before(&mut self, line: u32) -> usize {
        let start = self.cursor;
        while self.peek().is_some_and(|m| m.is_property() && m.line < line) {
            self.cursor += 1;
        }
        self.cursor - start
    }

    /// Markers not yet consumed
    pub fn remaining(&self) -> &[Marker] {
        &self.markers[self.cursor..]
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.markers.len()
    }
}
